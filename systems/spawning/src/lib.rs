#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic spawning system responsible for emitting zombie spawn and sky
//! sun commands.

use std::time::Duration;

use lawn_defence_core::{Command, Event, SessionStatus, ZombieKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SKY_DROP_MARGIN: f32 = 50.0;
const SKY_REST_MIN_Y: f32 = 150.0;
const SKY_REST_MAX_Y: f32 = 500.0;

/// Configuration parameters required to construct the spawning system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    initial_delay: Duration,
    delay_step: Duration,
    minimum_delay: Duration,
    sun_interval: Duration,
    zombie_cap: usize,
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided cadences, cap and seed.
    #[must_use]
    pub const fn new(
        initial_delay: Duration,
        delay_step: Duration,
        minimum_delay: Duration,
        sun_interval: Duration,
        zombie_cap: usize,
        rng_seed: u64,
    ) -> Self {
        Self {
            initial_delay,
            delay_step,
            minimum_delay,
            sun_interval,
            zombie_cap,
            rng_seed,
        }
    }

    /// Returns a copy of the configuration using a different seed.
    #[must_use]
    pub const fn with_seed(self, rng_seed: u64) -> Self {
        Self { rng_seed, ..self }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(3_000),
            Duration::from_millis(50),
            Duration::from_millis(1_500),
            Duration::from_millis(10_000),
            64,
            0x5eed_1a57,
        )
    }
}

/// Read-only facts about the lawn that spawning decisions depend on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LawnFacts {
    /// Number of lanes zombies may be spawned into.
    pub lanes: u32,
    /// Width of the visible playfield.
    pub field_width: f32,
    /// Number of zombies currently on the lawn.
    pub live_zombies: usize,
}

/// Pure system that emits zombie and sky sun commands on their timers.
#[derive(Debug)]
pub struct Spawning {
    config: Config,
    zombie_delay: Duration,
    since_zombie: Duration,
    since_sun: Duration,
    opening_sun_pending: bool,
    rng: ChaCha8Rng,
}

impl Spawning {
    /// Creates a new spawning system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            zombie_delay: config.initial_delay,
            since_zombie: Duration::ZERO,
            since_sun: Duration::ZERO,
            opening_sun_pending: true,
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
            config,
        }
    }

    /// Delay that the next zombie spawn waits for.
    #[must_use]
    pub fn zombie_delay(&self) -> Duration {
        self.zombie_delay
    }

    /// Consumes events and lawn facts to emit spawn commands.
    ///
    /// A sun is dropped on the first call of a running session, before any
    /// time has passed.
    pub fn handle(
        &mut self,
        events: &[Event],
        status: SessionStatus,
        lawn: LawnFacts,
        out: &mut Vec<Command>,
    ) {
        if status != SessionStatus::Running {
            return;
        }

        if self.opening_sun_pending {
            self.opening_sun_pending = false;
            out.push(self.sky_sun(lawn.field_width));
        }

        let elapsed = events
            .iter()
            .filter_map(|event| match event {
                Event::TimeAdvanced { dt } => Some(*dt),
                _ => None,
            })
            .fold(Duration::ZERO, Duration::saturating_add);
        if elapsed.is_zero() {
            return;
        }

        self.since_zombie = self.since_zombie.saturating_add(elapsed);
        self.since_sun = self.since_sun.saturating_add(elapsed);

        if self.since_zombie > self.zombie_delay
            && lawn.lanes > 0
            && lawn.live_zombies < self.config.zombie_cap
        {
            self.since_zombie = Duration::ZERO;
            self.zombie_delay = self
                .zombie_delay
                .saturating_sub(self.config.delay_step)
                .max(self.config.minimum_delay);
            out.push(self.zombie(lawn.lanes));
        }

        if !self.config.sun_interval.is_zero() && self.since_sun > self.config.sun_interval {
            self.since_sun = Duration::ZERO;
            out.push(self.sky_sun(lawn.field_width));
        }
    }

    fn zombie(&mut self, lanes: u32) -> Command {
        let lane = self.rng.gen_range(0..lanes);
        let kind = ZombieKind::ALL[self.rng.gen_range(0..ZombieKind::ALL.len())];
        Command::SpawnZombie { kind, lane }
    }

    fn sky_sun(&mut self, field_width: f32) -> Command {
        let far_edge = (field_width - SKY_DROP_MARGIN).max(SKY_DROP_MARGIN);
        let x = self.rng.gen_range(SKY_DROP_MARGIN..=far_edge);
        let rest_y = self.rng.gen_range(SKY_REST_MIN_Y..=SKY_REST_MAX_Y);
        Command::DropSun { x, rest_y }
    }
}
