#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Session loop that drives the Lawn Defence world and its systems.
//!
//! A [`Session`] owns the world, the spawning system and the planting system.
//! Every [`Session::step`] feeds the previous step's events to the systems,
//! applies the commands they emit and then advances the world by one tick.

mod config;

use std::time::Duration;

use lawn_defence_core::{Command, Event, LawnPoint, PlantKind, Scoreboard, SessionStatus};
use lawn_defence_system_planting::{Planting, PlantingInput};
use lawn_defence_system_spawning::{LawnFacts, Spawning};
use lawn_defence_world::{apply, query, World};
use tracing::{info, trace};

pub use config::{
    ConfigError, EconomySection, LawnSection, LimitsSection, OpeningMove, SessionConfig,
    SpawningSection, SunSection,
};

/// Distance from a sun's centre within which a click collects it.
pub const SUN_PICK_RADIUS: f32 = 30.0;

/// Player input gathered by an adapter for a single step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayerInput {
    /// Plant card picked on this step, if any.
    pub select: Option<PlantKind>,
    /// Indicates whether the player dropped the current selection.
    pub cancel_selection: bool,
    /// Pointer click on the playfield, if any.
    pub click: Option<LawnPoint>,
}

/// Explicit session state: the world plus the systems that feed it.
#[derive(Debug)]
pub struct Session {
    world: World,
    spawning: Spawning,
    planting: Planting,
    events: Vec<Event>,
    commands: Vec<Command>,
}

impl Session {
    /// Creates a session configured from the provided tuning.
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::ConfigureLawn {
                geometry: config.geometry(),
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::ConfigureRules {
                rules: config.rules(),
            },
            &mut events,
        );
        info!(
            seed = config.seed,
            balance = query::balance(&world),
            "{}",
            query::welcome_banner(&world)
        );

        Self {
            world,
            spawning: Spawning::new(config.spawning()),
            planting: Planting::new(),
            events,
            commands: Vec::new(),
        }
    }

    /// Read-only access to the world for queries.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Read-only access to the planting system, e.g. to render plant cards.
    #[must_use]
    pub fn planting(&self) -> &Planting {
        &self.planting
    }

    /// Events produced by the most recent step, or by session setup before the first step.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Balance, score and loss counters.
    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        query::scoreboard(&self.world)
    }

    /// Reports whether the session is still running or how it ended.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        query::status(&self.world)
    }

    /// Reports whether the session ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() != SessionStatus::Running
    }

    /// Advances the session by `dt`, applying the player's input first.
    ///
    /// A click collects the closest sun under the pointer; otherwise it is
    /// handed to the planting system as a placement target. Once the session
    /// is lost, steps no longer advance anything and return no events.
    pub fn step(&mut self, dt: Duration, input: PlayerInput) -> &[Event] {
        let previous = std::mem::take(&mut self.events);
        let mut out_events = Vec::new();
        let geometry = *query::geometry(&self.world);

        self.commands.clear();
        self.spawning.handle(
            &previous,
            query::status(&self.world),
            LawnFacts {
                lanes: geometry.rows(),
                field_width: geometry.field_width(),
                live_zombies: query::live_zombie_count(&self.world),
            },
            &mut self.commands,
        );

        let mut target = None;
        if let Some(point) = input.click {
            match query::pick_sun(&self.world, point, SUN_PICK_RADIUS) {
                Some(sun) => self.commands.push(Command::CollectSun { sun }),
                None => target = geometry.cell_at(point),
            }
        }

        self.planting.handle(
            &previous,
            PlantingInput {
                select: input.select,
                cancel: input.cancel_selection,
                target,
            },
            query::balance(&self.world),
            &mut self.commands,
        );

        for command in self.commands.drain(..) {
            apply(&mut self.world, command, &mut out_events);
        }
        apply(&mut self.world, Command::Tick { dt }, &mut out_events);

        trace!(
            tick = query::tick_index(&self.world),
            events = out_events.len(),
            "session stepped"
        );
        if let Some(Event::SessionLost { reason, score }) = out_events
            .iter()
            .find(|event| matches!(event, Event::SessionLost { .. }))
        {
            let board = query::scoreboard(&self.world);
            let elapsed_ms =
                u64::try_from(query::clock(&self.world).as_millis()).unwrap_or(u64::MAX);
            info!(
                ?reason,
                score,
                zombies_killed = board.zombies_killed,
                plants_lost = board.plants_lost,
                elapsed_ms,
                "session over"
            );
        }

        self.events = out_events;
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lawn_defence_core::{CellCoord, SunOrigin, SUN_VALUE};

    const FRAME: Duration = Duration::from_millis(16);

    fn quiet_config() -> SessionConfig {
        SessionConfig {
            economy: EconomySection {
                starting_balance: 500,
            },
            ..SessionConfig::default()
        }
    }

    #[test]
    fn setup_reports_starting_balance() {
        let session = Session::new(&quiet_config());
        assert_eq!(session.scoreboard().balance, 500);
        assert!(session
            .events()
            .iter()
            .any(|event| matches!(event, Event::CurrencyChanged { balance: 500, .. })));
    }

    #[test]
    fn first_step_drops_a_sky_sun() {
        let mut session = Session::new(&quiet_config());
        let events = session.step(FRAME, PlayerInput::default());
        assert!(events.iter().any(|event| matches!(
            event,
            Event::SunSpawned {
                origin: SunOrigin::Sky,
                ..
            }
        )));
    }

    #[test]
    fn clicking_a_sun_collects_it() {
        let mut session = Session::new(&quiet_config());
        let _ = session.step(FRAME, PlayerInput::default());
        let sun = query::suns(session.world())[0];

        let events = session.step(
            FRAME,
            PlayerInput {
                click: Some(sun.position),
                ..PlayerInput::default()
            },
        );
        assert!(events.contains(&Event::SunCollected {
            sun: sun.id,
            value: SUN_VALUE
        }));
        assert_eq!(session.scoreboard().balance, 500 + SUN_VALUE);
    }

    #[test]
    fn selecting_and_clicking_places_a_plant() {
        let mut session = Session::new(&quiet_config());
        let geometry = *query::geometry(session.world());
        let cell = CellCoord::new(0, 4);

        let _ = session.step(
            FRAME,
            PlayerInput {
                select: Some(PlantKind::Peashooter),
                ..PlayerInput::default()
            },
        );
        let events = session.step(
            FRAME,
            PlayerInput {
                click: Some(geometry.cell_center(cell)),
                ..PlayerInput::default()
            },
        );

        assert!(events.iter().any(|event| matches!(
            event,
            Event::PlantPlaced { kind: PlantKind::Peashooter, cell: placed, .. } if *placed == cell
        )));
        assert_eq!(session.scoreboard().balance, 400);

        let _ = session.step(FRAME, PlayerInput::default());
        assert_eq!(session.planting().selected(), None);
    }

    #[test]
    fn clicks_outside_the_lawn_are_ignored() {
        let mut session = Session::new(&quiet_config());
        let _ = session.step(
            FRAME,
            PlayerInput {
                select: Some(PlantKind::Sunflower),
                ..PlayerInput::default()
            },
        );
        let events = session.step(
            FRAME,
            PlayerInput {
                click: Some(LawnPoint::new(10.0, 590.0)),
                ..PlayerInput::default()
            },
        );
        assert!(!events.iter().any(|event| matches!(
            event,
            Event::PlantPlaced { .. } | Event::PlantPlacementRejected { .. }
        )));
    }
}
