#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared presentation contracts for Lawn Defence adapters.
//!
//! The simulation never draws anything. Adapters implement [`Presenter`] and
//! receive lifecycle callbacks from [`present`], which replays the events of a
//! step against a [`Frame`] captured from world snapshots.

use std::collections::BTreeSet;

use glam::Vec2;
use lawn_defence_core::{
    Event, LawnPoint, LossReason, PlantId, PlantKind, PlantSnapshot, ProjectileId,
    ProjectileKind, ProjectileSnapshot, SunId, SunOrigin, SunPhase, SunSnapshot, ZombieId,
    ZombieKind, ZombieSnapshot,
};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Returns a new color lightened towards white by the provided amount.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);

        Self {
            red: lighten_channel(self.red, amount),
            green: lighten_channel(self.green, amount),
            blue: lighten_channel(self.blue, amount),
            alpha: self.alpha,
        }
    }

    /// Returns the same color with a different alpha channel.
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }
}

fn lighten_channel(channel: f32, amount: f32) -> f32 {
    channel + (1.0 - channel) * amount
}

/// Identifies a visual across its create/update/destroy lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKey {
    /// Visual backing a plant.
    Plant(PlantId),
    /// Visual backing a zombie.
    Zombie(ZombieId),
    /// Visual backing a projectile.
    Projectile(ProjectileId),
    /// Visual backing a sun.
    Sun(SunId),
}

/// What an adapter should draw for an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisualKind {
    /// A plant of the given kind.
    Plant(PlantKind),
    /// A zombie of the given kind.
    Zombie(ZombieKind),
    /// A projectile of the given kind.
    Projectile(ProjectileKind),
    /// A collectable sun.
    Sun,
}

impl VisualKind {
    /// Base color used for the visual before any status tint.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Plant(PlantKind::Sunflower) => Color::from_rgb_u8(240, 200, 40),
            Self::Plant(PlantKind::Peashooter) => Color::from_rgb_u8(70, 170, 60),
            Self::Plant(PlantKind::SnowPea) => Color::from_rgb_u8(110, 180, 230),
            Self::Plant(PlantKind::FlamePea) => Color::from_rgb_u8(220, 90, 40),
            Self::Plant(PlantKind::Cactus) => Color::from_rgb_u8(40, 120, 70),
            Self::Plant(PlantKind::WallNut) => Color::from_rgb_u8(150, 100, 50),
            Self::Plant(PlantKind::CherryBomb) => Color::from_rgb_u8(190, 20, 40),
            Self::Zombie(ZombieKind::Basic) => Color::from_rgb_u8(120, 130, 110),
            Self::Zombie(ZombieKind::Conehead) => Color::from_rgb_u8(230, 130, 30),
            Self::Zombie(ZombieKind::Buckethead) => Color::from_rgb_u8(150, 150, 160),
            Self::Projectile(ProjectileKind::Pea) => Color::from_rgb_u8(110, 200, 80),
            Self::Projectile(ProjectileKind::FrozenPea) => Color::from_rgb_u8(160, 220, 255),
            Self::Projectile(ProjectileKind::Fireball) => Color::from_rgb_u8(255, 120, 30),
            Self::Projectile(ProjectileKind::Spike) => Color::from_rgb_u8(200, 200, 170),
            Self::Sun => Color::from_rgb_u8(255, 230, 80),
        }
    }
}

/// Remaining and maximum health of a visual.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HealthBar {
    /// Remaining health.
    pub current: u32,
    /// Health the entity started with.
    pub max: u32,
}

impl HealthBar {
    /// Remaining health as a fraction in the range 0.0..=1.0.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        (self.current as f32 / self.max as f32).clamp(0.0, 1.0)
    }
}

/// Drawable description of a single entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    /// Lifecycle key of the entity.
    pub key: EntityKey,
    /// What to draw.
    pub visual: VisualKind,
    /// Lane the entity belongs to. Suns float freely and have none.
    pub lane: Option<u32>,
    /// Centre of the entity in world units.
    pub position: Vec2,
    /// Health of plants and zombies.
    pub health: Option<HealthBar>,
    /// Color after status tints are applied.
    pub color: Color,
}

impl Sprite {
    fn plant(snapshot: &PlantSnapshot) -> Self {
        let visual = VisualKind::Plant(snapshot.kind);
        Self {
            key: EntityKey::Plant(snapshot.id),
            visual,
            lane: Some(snapshot.cell.row()),
            position: to_vec2(snapshot.position),
            health: Some(HealthBar {
                current: snapshot.health,
                max: snapshot.max_health,
            }),
            color: visual.color(),
        }
    }

    fn zombie(snapshot: &ZombieSnapshot) -> Self {
        let visual = VisualKind::Zombie(snapshot.kind);
        let mut color = visual.color();
        if snapshot.speed_multiplier < 1.0 {
            color = color.lighten(SLOWED_TINT);
        }
        Self {
            key: EntityKey::Zombie(snapshot.id),
            visual,
            lane: Some(snapshot.lane),
            position: to_vec2(snapshot.position),
            health: Some(HealthBar {
                current: snapshot.health,
                max: snapshot.max_health,
            }),
            color,
        }
    }

    fn projectile(snapshot: &ProjectileSnapshot) -> Self {
        let visual = VisualKind::Projectile(snapshot.kind);
        Self {
            key: EntityKey::Projectile(snapshot.id),
            visual,
            lane: Some(snapshot.lane),
            position: to_vec2(snapshot.position),
            health: None,
            color: visual.color(),
        }
    }

    fn sun(snapshot: &SunSnapshot) -> Self {
        let color = match snapshot.phase {
            SunPhase::Falling | SunPhase::Resting => VisualKind::Sun.color(),
            SunPhase::Collecting => VisualKind::Sun.color().lighten(0.5),
            SunPhase::Fading => VisualKind::Sun.color().with_alpha(0.5),
        };
        Self {
            key: EntityKey::Sun(snapshot.id),
            visual: VisualKind::Sun,
            lane: None,
            position: to_vec2(snapshot.position),
            health: None,
            color,
        }
    }

    /// Builds the sprite announced by a creation event, if `event` is one.
    fn announced_by(event: &Event) -> Option<Self> {
        let sprite = match *event {
            Event::PlantPlaced {
                plant,
                kind,
                cell,
                position,
            } => Self::plant(&PlantSnapshot {
                id: plant,
                kind,
                cell,
                position,
                health: kind.stats().health,
                max_health: kind.stats().health,
                eaten_by: None,
            }),
            Event::ZombieSpawned {
                zombie,
                kind,
                lane,
                position,
            } => Self::zombie(&ZombieSnapshot {
                id: zombie,
                kind,
                lane,
                position,
                health: kind.stats().health,
                max_health: kind.stats().health,
                speed_multiplier: 1.0,
                eating: None,
            }),
            Event::ProjectileFired {
                projectile,
                kind,
                lane,
                position,
                ..
            } => Self::projectile(&ProjectileSnapshot {
                id: projectile,
                kind,
                lane,
                position,
                spent: false,
            }),
            Event::SunSpawned {
                sun,
                origin,
                position,
            } => Self::sun(&SunSnapshot {
                id: sun,
                origin,
                position,
                value: 0,
                phase: match origin {
                    SunOrigin::Sky => SunPhase::Falling,
                    SunOrigin::Plant { .. } => SunPhase::Resting,
                },
            }),
            _ => return None,
        };
        Some(sprite)
    }
}

const SLOWED_TINT: f32 = 0.4;

/// Converts a lawn point into presentation space.
#[must_use]
pub fn to_vec2(point: LawnPoint) -> Vec2 {
    Vec2::new(point.x, point.y)
}

/// Sprites of every entity alive at the end of a step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    sprites: Vec<Sprite>,
}

impl Frame {
    /// Captures a frame from world snapshots.
    #[must_use]
    pub fn capture(
        plants: &[PlantSnapshot],
        zombies: &[ZombieSnapshot],
        projectiles: &[ProjectileSnapshot],
        suns: &[SunSnapshot],
    ) -> Self {
        let mut sprites =
            Vec::with_capacity(plants.len() + zombies.len() + projectiles.len() + suns.len());
        sprites.extend(plants.iter().map(Sprite::plant));
        sprites.extend(zombies.iter().map(Sprite::zombie));
        sprites.extend(projectiles.iter().map(Sprite::projectile));
        sprites.extend(suns.iter().map(Sprite::sun));
        Self { sprites }
    }

    /// Every sprite in the frame.
    #[must_use]
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Sprite for the provided key, if the entity is alive.
    #[must_use]
    pub fn sprite(&self, key: EntityKey) -> Option<&Sprite> {
        self.sprites.iter().find(|sprite| sprite.key == key)
    }
}

/// Adapter-side sink for visual lifecycle callbacks.
pub trait Presenter {
    /// A new entity appeared.
    fn create(&mut self, sprite: &Sprite);

    /// An existing entity moved or changed health.
    fn update(&mut self, sprite: &Sprite);

    /// An entity left the simulation.
    fn destroy(&mut self, key: EntityKey);

    /// The currency balance changed by `delta`.
    fn currency_changed(&mut self, balance: u32, delta: i64);

    /// The session ended.
    fn session_ended(&mut self, reason: LossReason, score: u32);
}

/// Replays the events of one step against `presenter`.
///
/// Creation, destruction, currency and session-end callbacks follow event
/// order. Every sprite in `frame` that was not created during the step then
/// receives an update.
pub fn present<P>(events: &[Event], frame: &Frame, presenter: &mut P)
where
    P: Presenter + ?Sized,
{
    let mut created = BTreeSet::new();

    for event in events {
        if let Some(announced) = Sprite::announced_by(event) {
            let sprite = frame.sprite(announced.key).copied().unwrap_or(announced);
            let _ = created.insert(sprite.key);
            presenter.create(&sprite);
            continue;
        }

        match *event {
            Event::PlantRemoved { plant, .. } => presenter.destroy(EntityKey::Plant(plant)),
            Event::ZombieKilled { zombie } | Event::ZombieBreached { zombie } => {
                presenter.destroy(EntityKey::Zombie(zombie));
            }
            Event::ProjectileRemoved { projectile } => {
                presenter.destroy(EntityKey::Projectile(projectile));
            }
            Event::SunRemoved { sun } => presenter.destroy(EntityKey::Sun(sun)),
            Event::CurrencyChanged { balance, delta } => presenter.currency_changed(balance, delta),
            Event::SessionLost { reason, score } => presenter.session_ended(reason, score),
            _ => {}
        }
    }

    for sprite in frame.sprites() {
        if !created.contains(&sprite.key) {
            presenter.update(sprite);
        }
    }
}

/// Callback captured by [`RecordingPresenter`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PresenterCall {
    /// [`Presenter::create`] was invoked.
    Created(Sprite),
    /// [`Presenter::update`] was invoked.
    Updated(Sprite),
    /// [`Presenter::destroy`] was invoked.
    Destroyed(EntityKey),
    /// [`Presenter::currency_changed`] was invoked.
    CurrencyChanged {
        /// Balance after the change.
        balance: u32,
        /// Signed change.
        delta: i64,
    },
    /// [`Presenter::session_ended`] was invoked.
    SessionEnded {
        /// Why the session ended.
        reason: LossReason,
        /// Final score.
        score: u32,
    },
}

/// Presenter that records every callback, for headless runs and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    calls: Vec<PresenterCall>,
    live: BTreeSet<EntityKey>,
}

impl RecordingPresenter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every callback received so far, in order.
    #[must_use]
    pub fn calls(&self) -> &[PresenterCall] {
        &self.calls
    }

    /// Keys created and not yet destroyed.
    #[must_use]
    pub fn live(&self) -> &BTreeSet<EntityKey> {
        &self.live
    }

    /// Drops recorded callbacks while keeping track of live visuals.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn create(&mut self, sprite: &Sprite) {
        let _ = self.live.insert(sprite.key);
        self.calls.push(PresenterCall::Created(*sprite));
    }

    fn update(&mut self, sprite: &Sprite) {
        self.calls.push(PresenterCall::Updated(*sprite));
    }

    fn destroy(&mut self, key: EntityKey) {
        let _ = self.live.remove(&key);
        self.calls.push(PresenterCall::Destroyed(key));
    }

    fn currency_changed(&mut self, balance: u32, delta: i64) {
        self.calls
            .push(PresenterCall::CurrencyChanged { balance, delta });
    }

    fn session_ended(&mut self, reason: LossReason, score: u32) {
        self.calls.push(PresenterCall::SessionEnded { reason, score });
    }
}
