#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Lawn Defence engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters and systems submit
//! [`Command`] values describing desired mutations, the world executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! that systems and presenters react to. Entity state is never shared by
//! reference: every cross-entity link is one of the identifier types defined
//! here, and lookups through them may fail.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Lawn Defence.";

/// Interval between two bites of an eating zombie.
pub const ZOMBIE_ATTACK_INTERVAL: Duration = Duration::from_millis(1_000);

/// Horizontal distance a zombie is pushed back whenever it takes damage.
pub const ZOMBIE_KNOCKBACK: f32 = 5.0;

/// Score awarded for every zombie killed.
pub const ZOMBIE_KILL_SCORE: u32 = 10;

/// Axis distance below which a zombie reaches a plant in its lane.
pub const EATING_REACH: f32 = 40.0;

/// Horizontal separation beyond which an eating zombie lets go of its target.
pub const EATING_RELEASE_DISTANCE: f32 = 50.0;

/// Axis distance below which a projectile strikes a zombie in its lane.
pub const PROJECTILE_REACH: f32 = 30.0;

/// Horizontal offset from a shooter's centre at which projectiles appear.
pub const PROJECTILE_MUZZLE_OFFSET: f32 = 30.0;

/// Currency granted by a single sun.
pub const SUN_VALUE: u32 = 25;

/// Time an uncollected sun stays on the lawn before fading.
pub const SUN_LIFETIME: Duration = Duration::from_millis(10_000);

/// Duration of the fade played once a sun expires.
pub const SUN_FADE_DURATION: Duration = Duration::from_millis(1_000);

/// Duration of the collection animation before a sun is removed.
pub const SUN_COLLECT_DURATION: Duration = Duration::from_millis(500);

/// Height at which suns dropped from the sky appear.
pub const SUN_SKY_START_Y: f32 = 50.0;

/// Initial per-tick fall distance of a sky sun.
pub const SUN_INITIAL_FALL_SPEED: f32 = 1.0;

/// Per-tick increase of a sky sun's fall distance.
pub const SUN_FALL_ACCELERATION: f32 = 0.05;

/// Vertical offset from a producer's centre at which its sun appears.
pub const SUN_PRODUCER_OFFSET_Y: f32 = -20.0;

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Replaces the lawn layout, discarding every entity on the lawn.
    ConfigureLawn {
        /// Geometry describing the lawn grid and the playfield around it.
        geometry: LawnGeometry,
    },
    /// Replaces the session rules and resets the economy and counters.
    ConfigureRules {
        /// Rules applied to the session.
        rules: SessionRules,
    },
    /// Advances the simulation by a single tick.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Requests placement of a plant into a lawn cell.
    PlacePlant {
        /// Kind of plant to place.
        kind: PlantKind,
        /// Cell that should hold the plant.
        cell: CellCoord,
    },
    /// Requests that a zombie enter the lawn at the far edge of a lane.
    SpawnZombie {
        /// Kind of zombie to spawn.
        kind: ZombieKind,
        /// Lane the zombie walks along.
        lane: u32,
    },
    /// Requests that a sun fall from the sky.
    DropSun {
        /// Horizontal position of the falling sun.
        x: f32,
        /// Height at which the sun comes to rest.
        rest_y: f32,
    },
    /// Requests collection of a sun lying on the lawn.
    CollectSun {
        /// Identifier of the sun being collected.
        sun: SunId,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Confirms that a plant was placed on the lawn.
    PlantPlaced {
        /// Identifier assigned to the plant.
        plant: PlantId,
        /// Kind of plant that was placed.
        kind: PlantKind,
        /// Cell occupied by the plant.
        cell: CellCoord,
        /// Centre of the plant in world units.
        position: LawnPoint,
    },
    /// Reports that a placement request was rejected and had no effect.
    PlantPlacementRejected {
        /// Kind of plant requested for placement.
        kind: PlantKind,
        /// Cell provided in the placement request.
        cell: CellCoord,
        /// Specific reason the placement failed.
        reason: PlacementError,
    },
    /// Reports that a plant lost health.
    PlantDamaged {
        /// Identifier of the damaged plant.
        plant: PlantId,
        /// Remaining health after the damage.
        health: u32,
    },
    /// Confirms that a plant was removed from the lawn.
    PlantRemoved {
        /// Identifier of the removed plant.
        plant: PlantId,
        /// Cell released by the plant.
        cell: CellCoord,
    },
    /// Reports that a bomb plant went off.
    BombDetonated {
        /// Identifier of the bomb plant.
        plant: PlantId,
        /// Centre of the blast.
        position: LawnPoint,
        /// Radius of the blast in world units.
        radius: f32,
    },
    /// Confirms that a zombie entered the lawn.
    ZombieSpawned {
        /// Identifier assigned to the zombie.
        zombie: ZombieId,
        /// Kind of zombie that spawned.
        kind: ZombieKind,
        /// Lane the zombie walks along.
        lane: u32,
        /// Spawn position in world units.
        position: LawnPoint,
    },
    /// Reports that a zombie started eating a plant.
    ZombieStartedEating {
        /// Identifier of the eating zombie.
        zombie: ZombieId,
        /// Identifier of the plant being eaten.
        plant: PlantId,
    },
    /// Reports that a zombie stopped eating and resumed walking.
    ZombieStoppedEating {
        /// Identifier of the zombie.
        zombie: ZombieId,
    },
    /// Reports that a zombie lost health.
    ZombieDamaged {
        /// Identifier of the damaged zombie.
        zombie: ZombieId,
        /// Remaining health after the damage.
        health: u32,
    },
    /// Reports that a zombie's movement speed multiplier changed.
    ZombieSpeedChanged {
        /// Identifier of the zombie.
        zombie: ZombieId,
        /// Multiplier now applied to the zombie's base speed.
        multiplier: f32,
    },
    /// Confirms that a zombie died and was removed.
    ZombieKilled {
        /// Identifier of the killed zombie.
        zombie: ZombieId,
    },
    /// Reports that a zombie crossed the defended boundary and was removed.
    ZombieBreached {
        /// Identifier of the zombie that crossed the boundary.
        zombie: ZombieId,
    },
    /// Confirms that a shooter fired a projectile.
    ProjectileFired {
        /// Identifier assigned to the projectile.
        projectile: ProjectileId,
        /// Kind of projectile fired.
        kind: ProjectileKind,
        /// Shooter that fired the projectile.
        plant: PlantId,
        /// Lane the projectile travels along.
        lane: u32,
        /// Launch position in world units.
        position: LawnPoint,
    },
    /// Reports that a projectile struck a zombie.
    ProjectileHit {
        /// Identifier of the projectile.
        projectile: ProjectileId,
        /// Identifier of the struck zombie.
        zombie: ZombieId,
    },
    /// Confirms that a projectile was removed.
    ProjectileRemoved {
        /// Identifier of the removed projectile.
        projectile: ProjectileId,
    },
    /// Confirms that a sun appeared.
    SunSpawned {
        /// Identifier assigned to the sun.
        sun: SunId,
        /// Source of the sun.
        origin: SunOrigin,
        /// Spawn position in world units.
        position: LawnPoint,
    },
    /// Reports that a sun was collected and credited.
    SunCollected {
        /// Identifier of the collected sun.
        sun: SunId,
        /// Currency credited by the collection.
        value: u32,
    },
    /// Reports that a sun outlived its lifetime and started fading.
    SunExpired {
        /// Identifier of the expired sun.
        sun: SunId,
    },
    /// Confirms that a sun was removed.
    SunRemoved {
        /// Identifier of the removed sun.
        sun: SunId,
    },
    /// Reports a change of the currency balance.
    CurrencyChanged {
        /// Balance after the change.
        balance: u32,
        /// Signed amount applied to the balance.
        delta: i64,
    },
    /// Reports that the session was lost. Emitted at most once per session.
    SessionLost {
        /// Condition that ended the session.
        reason: LossReason,
        /// Final score.
        score: u32,
    },
}

/// Unique identifier assigned to a plant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlantId(u32);

impl PlantId {
    /// Creates a new plant identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a zombie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZombieId(u32);

impl ZombieId {
    /// Creates a new zombie identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a projectile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectileId(u32);

impl ProjectileId {
    /// Creates a new projectile identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a sun.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SunId(u32);

impl SunId {
    /// Creates a new sun identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Location of a single lawn cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new lawn cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell. Rows are lanes.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Continuous position on the playfield expressed in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LawnPoint {
    /// Horizontal coordinate; zombies walk towards decreasing values.
    pub x: f32,
    /// Vertical coordinate; increases towards lower lanes.
    pub y: f32,
}

impl LawnPoint {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    #[must_use]
    pub fn distance(self, other: LawnPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Reports whether both axis distances to `other` are strictly below `reach`.
    #[must_use]
    pub fn within_axis_reach(self, other: LawnPoint, reach: f32) -> bool {
        (self.x - other.x).abs() < reach && (self.y - other.y).abs() < reach
    }
}

/// Describes the lawn grid and the playfield that surrounds it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LawnGeometry {
    columns: u32,
    rows: u32,
    cell_width: f32,
    cell_height: f32,
    origin: LawnPoint,
    field_width: f32,
}

impl LawnGeometry {
    /// Margin beyond the field's right edge at which zombies appear and projectiles vanish.
    pub const OFFSCREEN_MARGIN: f32 = 50.0;

    /// Creates a new geometry descriptor.
    #[must_use]
    pub const fn new(
        columns: u32,
        rows: u32,
        cell_width: f32,
        cell_height: f32,
        origin: LawnPoint,
        field_width: f32,
    ) -> Self {
        Self {
            columns,
            rows,
            cell_width,
            cell_height,
            origin,
            field_width,
        }
    }

    /// Number of placement columns.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of lanes.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Width of a single cell in world units.
    #[must_use]
    pub const fn cell_width(&self) -> f32 {
        self.cell_width
    }

    /// Height of a single cell in world units.
    #[must_use]
    pub const fn cell_height(&self) -> f32 {
        self.cell_height
    }

    /// Upper-left corner of the placement grid.
    #[must_use]
    pub const fn origin(&self) -> LawnPoint {
        self.origin
    }

    /// Width of the visible playfield.
    #[must_use]
    pub const fn field_width(&self) -> f32 {
        self.field_width
    }

    /// Reports whether the cell lies inside the placement grid.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.columns && cell.row() < self.rows
    }

    /// Centre of the provided cell in world units.
    #[must_use]
    pub fn cell_center(&self, cell: CellCoord) -> LawnPoint {
        LawnPoint::new(
            self.origin.x + (cell.column() as f32 + 0.5) * self.cell_width,
            self.lane_y(cell.row()),
        )
    }

    /// Vertical centre line of a lane.
    #[must_use]
    pub fn lane_y(&self, lane: u32) -> f32 {
        self.origin.y + (lane as f32 + 0.5) * self.cell_height
    }

    /// Converts a pointer position into the cell underneath it.
    ///
    /// Returns `None` for positions outside the placement grid or when the
    /// geometry has a degenerate cell size.
    #[must_use]
    pub fn cell_at(&self, point: LawnPoint) -> Option<CellCoord> {
        if self.cell_width <= f32::EPSILON || self.cell_height <= f32::EPSILON {
            return None;
        }

        let column = ((point.x - self.origin.x) / self.cell_width).floor();
        let row = ((point.y - self.origin.y) / self.cell_height).floor();
        if column < 0.0 || row < 0.0 {
            return None;
        }

        let cell = CellCoord::new(column as u32, row as u32);
        self.contains(cell).then_some(cell)
    }

    /// Horizontal position at which zombies enter a lane.
    #[must_use]
    pub fn zombie_spawn_x(&self) -> f32 {
        self.field_width + Self::OFFSCREEN_MARGIN
    }

    /// Horizontal position past which projectiles leave the playfield.
    #[must_use]
    pub fn projectile_exit_x(&self) -> f32 {
        self.field_width + Self::OFFSCREEN_MARGIN
    }

    /// Horizontal position a zombie must cross to breach the defences.
    #[must_use]
    pub fn breach_x(&self) -> f32 {
        -Self::OFFSCREEN_MARGIN
    }
}

impl Default for LawnGeometry {
    fn default() -> Self {
        Self::new(9, 5, 80.0, 100.0, LawnPoint::new(200.0, 100.0), 1_200.0)
    }
}

/// Session-wide rules applied by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRules {
    /// Currency available when the session starts.
    pub starting_balance: u32,
    /// Number of lost plants the player may suffer; exceeding it loses the session.
    pub plants_lost_limit: u32,
}

impl Default for SessionRules {
    fn default() -> Self {
        Self {
            starting_balance: 50,
            plants_lost_limit: 10,
        }
    }
}

/// Types of plants that can be placed on the lawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantKind {
    /// Producer that periodically yields suns.
    Sunflower,
    /// Shooter firing peas.
    Peashooter,
    /// Shooter firing frozen peas that slow zombies.
    SnowPea,
    /// Shooter firing fireballs that splash nearby zombies.
    FlamePea,
    /// Shooter firing spikes that pierce armour.
    Cactus,
    /// High-health blocker without an action.
    WallNut,
    /// Bomb that detonates shortly after placement.
    CherryBomb,
}

impl PlantKind {
    /// Every plant kind in card order.
    pub const ALL: [PlantKind; 7] = [
        PlantKind::Sunflower,
        PlantKind::Peashooter,
        PlantKind::SnowPea,
        PlantKind::FlamePea,
        PlantKind::Cactus,
        PlantKind::WallNut,
        PlantKind::CherryBomb,
    ];

    /// Static statistics associated with the plant kind.
    #[must_use]
    pub const fn stats(self) -> PlantStats {
        match self {
            Self::Sunflower => PlantStats {
                cost: 50,
                health: 100,
                action_interval: Duration::from_millis(24_000),
                recharge: Duration::from_millis(7_500),
                role: PlantRole::Producer,
            },
            Self::Peashooter => PlantStats::shooter(100, ProjectileKind::Pea),
            Self::SnowPea => PlantStats::shooter(175, ProjectileKind::FrozenPea),
            Self::FlamePea => PlantStats::shooter(200, ProjectileKind::Fireball),
            Self::Cactus => PlantStats::shooter(125, ProjectileKind::Spike),
            Self::WallNut => PlantStats {
                cost: 50,
                health: 300,
                action_interval: Duration::ZERO,
                recharge: Duration::from_millis(30_000),
                role: PlantRole::Wall,
            },
            Self::CherryBomb => PlantStats {
                cost: 150,
                health: 100,
                action_interval: Duration::from_millis(3_000),
                recharge: Duration::from_millis(50_000),
                role: PlantRole::Bomb {
                    radius: 100.0,
                    damage: 1_800,
                },
            },
        }
    }

    /// Currency required to place the plant.
    #[must_use]
    pub const fn cost(self) -> u32 {
        self.stats().cost
    }
}

/// Static statistics describing a plant kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlantStats {
    /// Currency required to place the plant.
    pub cost: u32,
    /// Health the plant starts with.
    pub health: u32,
    /// Time between two timed actions, measured from placement.
    pub action_interval: Duration,
    /// Time the plant's card needs before the kind can be selected again.
    pub recharge: Duration,
    /// Behaviour performed by the timed action.
    pub role: PlantRole,
}

impl PlantStats {
    const fn shooter(cost: u32, projectile: ProjectileKind) -> Self {
        Self {
            cost,
            health: 100,
            action_interval: Duration::from_millis(1_500),
            recharge: Duration::from_millis(7_500),
            role: PlantRole::Shooter { projectile },
        }
    }
}

/// Behaviour class of a plant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlantRole {
    /// Yields a sun on every action.
    Producer,
    /// Fires a projectile on every action when a zombie is ahead in its lane.
    Shooter {
        /// Kind of projectile fired.
        projectile: ProjectileKind,
    },
    /// No action; soaks up bites.
    Wall,
    /// Detonates on its first action and destroys itself.
    Bomb {
        /// Blast radius in world units, measured across lanes.
        radius: f32,
        /// Damage dealt to every zombie inside the radius.
        damage: u32,
    },
}

/// Types of zombies that walk the lanes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZombieKind {
    /// Unarmoured zombie.
    Basic,
    /// Lightly armoured zombie.
    Conehead,
    /// Heavily armoured zombie.
    Buckethead,
}

impl ZombieKind {
    /// Every zombie kind.
    pub const ALL: [ZombieKind; 3] = [
        ZombieKind::Basic,
        ZombieKind::Conehead,
        ZombieKind::Buckethead,
    ];

    /// Static statistics associated with the zombie kind.
    #[must_use]
    pub const fn stats(self) -> ZombieStats {
        match self {
            Self::Basic => ZombieStats {
                health: 100,
                speed: 0.5,
                damage: 20,
                armoured: false,
            },
            Self::Conehead => ZombieStats {
                health: 200,
                speed: 0.4,
                damage: 25,
                armoured: true,
            },
            Self::Buckethead => ZombieStats {
                health: 300,
                speed: 0.3,
                damage: 30,
                armoured: true,
            },
        }
    }
}

/// Static statistics describing a zombie kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZombieStats {
    /// Health the zombie starts with.
    pub health: u32,
    /// Distance walked per tick at full speed.
    pub speed: f32,
    /// Damage dealt by a single bite.
    pub damage: u32,
    /// Whether armour-piercing projectiles deal bonus damage.
    pub armoured: bool,
}

/// Types of projectiles fired by shooters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectileKind {
    /// Plain pea.
    Pea,
    /// Pea that slows the struck zombie.
    FrozenPea,
    /// Fireball that splashes zombies next to the struck one.
    Fireball,
    /// Spike that deals bonus damage to armoured zombies.
    Spike,
}

impl ProjectileKind {
    /// Static statistics associated with the projectile kind.
    #[must_use]
    pub const fn stats(self) -> ProjectileStats {
        match self {
            Self::Pea => ProjectileStats {
                speed: 4.0,
                damage: 20,
                effect: ImpactEffect::None,
            },
            Self::FrozenPea => ProjectileStats {
                speed: 3.5,
                damage: 20,
                effect: ImpactEffect::Slow {
                    multiplier: 0.5,
                    duration: Duration::from_millis(3_000),
                },
            },
            Self::Fireball => ProjectileStats {
                speed: 3.0,
                damage: 40,
                effect: ImpactEffect::Splash {
                    radius: 40.0,
                    percent: 30,
                },
            },
            Self::Spike => ProjectileStats {
                speed: 5.0,
                damage: 30,
                effect: ImpactEffect::ArmourPiercing { bonus_percent: 50 },
            },
        }
    }
}

/// Static statistics describing a projectile kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileStats {
    /// Distance travelled per tick.
    pub speed: f32,
    /// Damage dealt to the struck zombie.
    pub damage: u32,
    /// Secondary effect applied on impact.
    pub effect: ImpactEffect,
}

/// Secondary effect applied when a projectile strikes a zombie.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImpactEffect {
    /// No secondary effect.
    None,
    /// Scales the struck zombie's speed for a limited time.
    Slow {
        /// Factor applied to the zombie's speed multiplier.
        multiplier: f32,
        /// Time until the factor is reverted.
        duration: Duration,
    },
    /// Damages other zombies in the same lane around the impact point.
    Splash {
        /// Splash radius in world units.
        radius: f32,
        /// Share of the projectile damage dealt to splashed zombies, in percent.
        percent: u32,
    },
    /// Deals bonus damage to armoured zombies.
    ArmourPiercing {
        /// Bonus damage as a share of the projectile damage, in percent.
        bonus_percent: u32,
    },
}

/// Source of a sun.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SunOrigin {
    /// Dropped from the sky by the session timer.
    Sky,
    /// Produced by a plant.
    Plant {
        /// Identifier of the producing plant.
        plant: PlantId,
    },
}

/// Lifecycle phase of a sun.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SunPhase {
    /// Falling towards its rest height.
    Falling,
    /// Resting in place, waiting for collection.
    Resting,
    /// Collected; playing the collection animation.
    Collecting,
    /// Expired; playing the fade animation.
    Fading,
}

impl SunPhase {
    /// Reports whether a sun in this phase may still be collected.
    #[must_use]
    pub const fn is_collectable(self) -> bool {
        matches!(self, Self::Falling | Self::Resting)
    }
}

/// Reasons a plant placement request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum PlacementError {
    /// The requested cell lies outside the lawn grid.
    #[error("cell lies outside the lawn")]
    OutOfBounds,
    /// The requested cell already holds a plant.
    #[error("cell is already occupied")]
    Occupied,
    /// The balance does not cover the plant's cost.
    #[error("not enough sun")]
    InsufficientFunds,
    /// The session has ended.
    #[error("the session is over")]
    SessionOver,
}

/// Condition that ended a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossReason {
    /// A zombie crossed the defended boundary.
    Breach {
        /// Identifier of the first zombie that crossed.
        zombie: ZombieId,
    },
    /// The player lost more plants than allowed.
    PlantsLost {
        /// Number of plants lost when the session ended.
        count: u32,
    },
}

/// Progress of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// The simulation keeps advancing.
    Running,
    /// The session ended; ticks no longer advance the simulation.
    Lost {
        /// Condition that ended the session.
        reason: LossReason,
    },
}

/// Immutable representation of a plant used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlantSnapshot {
    /// Identifier of the plant.
    pub id: PlantId,
    /// Kind of plant.
    pub kind: PlantKind,
    /// Cell occupied by the plant.
    pub cell: CellCoord,
    /// Centre of the plant in world units.
    pub position: LawnPoint,
    /// Remaining health.
    pub health: u32,
    /// Health the plant started with.
    pub max_health: u32,
    /// Zombie currently eating the plant, if any.
    pub eaten_by: Option<ZombieId>,
}

/// Immutable representation of a zombie used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZombieSnapshot {
    /// Identifier of the zombie.
    pub id: ZombieId,
    /// Kind of zombie.
    pub kind: ZombieKind,
    /// Lane the zombie walks along.
    pub lane: u32,
    /// Position in world units.
    pub position: LawnPoint,
    /// Remaining health.
    pub health: u32,
    /// Health the zombie started with.
    pub max_health: u32,
    /// Multiplier currently applied to the zombie's base speed.
    pub speed_multiplier: f32,
    /// Plant the zombie is eating, if any.
    pub eating: Option<PlantId>,
}

/// Immutable representation of a projectile used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileSnapshot {
    /// Identifier of the projectile.
    pub id: ProjectileId,
    /// Kind of projectile.
    pub kind: ProjectileKind,
    /// Lane the projectile travels along.
    pub lane: u32,
    /// Position in world units.
    pub position: LawnPoint,
    /// Whether the projectile already struck and awaits removal.
    pub spent: bool,
}

/// Immutable representation of a sun used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunSnapshot {
    /// Identifier of the sun.
    pub id: SunId,
    /// Source of the sun.
    pub origin: SunOrigin,
    /// Position in world units.
    pub position: LawnPoint,
    /// Currency granted on collection.
    pub value: u32,
    /// Current lifecycle phase.
    pub phase: SunPhase,
}

/// Session counters exposed to adapters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Scoreboard {
    /// Current currency balance.
    pub balance: u32,
    /// Accumulated score.
    pub score: u32,
    /// Number of zombies killed.
    pub zombies_killed: u32,
    /// Number of plants lost.
    pub plants_lost: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn plant_kind_round_trips_through_bincode() {
        assert_round_trip(&PlantKind::CherryBomb);
    }

    #[test]
    fn placement_error_round_trips_through_bincode() {
        assert_round_trip(&PlacementError::InsufficientFunds);
    }

    #[test]
    fn cell_center_matches_default_layout() {
        let geometry = LawnGeometry::default();
        let center = geometry.cell_center(CellCoord::new(0, 0));
        assert_eq!(center, LawnPoint::new(240.0, 150.0));

        let center = geometry.cell_center(CellCoord::new(8, 4));
        assert_eq!(center, LawnPoint::new(880.0, 550.0));
    }

    #[test]
    fn cell_at_inverts_cell_center() {
        let geometry = LawnGeometry::default();
        for column in 0..geometry.columns() {
            for row in 0..geometry.rows() {
                let cell = CellCoord::new(column, row);
                assert_eq!(geometry.cell_at(geometry.cell_center(cell)), Some(cell));
            }
        }
    }

    #[test]
    fn cell_at_rejects_points_outside_grid() {
        let geometry = LawnGeometry::default();
        assert_eq!(geometry.cell_at(LawnPoint::new(150.0, 150.0)), None);
        assert_eq!(geometry.cell_at(LawnPoint::new(250.0, 50.0)), None);
        assert_eq!(geometry.cell_at(LawnPoint::new(920.0, 150.0)), None);
        assert_eq!(geometry.cell_at(LawnPoint::new(250.0, 600.0)), None);
    }

    #[test]
    fn cell_at_handles_degenerate_geometry() {
        let geometry = LawnGeometry::new(3, 3, 0.0, 10.0, LawnPoint::default(), 100.0);
        assert_eq!(geometry.cell_at(LawnPoint::new(1.0, 1.0)), None);
    }

    #[test]
    fn playfield_edges_follow_field_width() {
        let geometry = LawnGeometry::default();
        assert_eq!(geometry.zombie_spawn_x(), 1_250.0);
        assert_eq!(geometry.projectile_exit_x(), 1_250.0);
        assert_eq!(geometry.breach_x(), -50.0);
    }

    #[test]
    fn plant_costs_match_card_table() {
        assert_eq!(PlantKind::Sunflower.cost(), 50);
        assert_eq!(PlantKind::Peashooter.cost(), 100);
        assert_eq!(PlantKind::WallNut.cost(), 50);
        assert_eq!(PlantKind::CherryBomb.cost(), 150);
    }

    #[test]
    fn only_walls_lack_an_action_interval() {
        for kind in PlantKind::ALL {
            let stats = kind.stats();
            match stats.role {
                PlantRole::Wall => assert!(stats.action_interval.is_zero()),
                _ => assert!(!stats.action_interval.is_zero(), "{kind:?}"),
            }
        }
    }

    #[test]
    fn armour_follows_zombie_kind() {
        assert!(!ZombieKind::Basic.stats().armoured);
        assert!(ZombieKind::Conehead.stats().armoured);
        assert!(ZombieKind::Buckethead.stats().armoured);
    }

    #[test]
    fn only_falling_and_resting_suns_are_collectable() {
        assert!(SunPhase::Falling.is_collectable());
        assert!(SunPhase::Resting.is_collectable());
        assert!(!SunPhase::Collecting.is_collectable());
        assert!(!SunPhase::Fading.is_collectable());
    }

    #[test]
    fn axis_reach_is_strict() {
        let origin = LawnPoint::new(0.0, 0.0);
        assert!(origin.within_axis_reach(LawnPoint::new(29.9, 0.0), 30.0));
        assert!(!origin.within_axis_reach(LawnPoint::new(30.0, 0.0), 30.0));
        assert!(!origin.within_axis_reach(LawnPoint::new(0.0, -30.0), 30.0));
    }
}
