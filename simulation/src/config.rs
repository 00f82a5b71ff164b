//! Tuning tables for a session, loadable from TOML.

use std::{fs, path::Path, time::Duration};

use lawn_defence_core::{CellCoord, LawnGeometry, LawnPoint, PlantKind, SessionRules};
use lawn_defence_system_spawning::Config as SpawningConfig;
use serde::{Deserialize, Serialize};

/// Errors raised while loading or validating a [`SessionConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read session config at {path}")]
    Read {
        /// Path that was being read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The configuration text is not valid TOML for the schema.
    #[error("failed to parse session config")]
    Parse(#[from] toml::de::Error),
    /// A value is outside the range the simulation accepts.
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Human-readable constraint that was violated.
        reason: &'static str,
    },
}

/// Complete tuning for one session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Seed for every random decision of the session.
    pub seed: u64,
    /// Lawn layout.
    pub lawn: LawnSection,
    /// Starting currency.
    pub economy: EconomySection,
    /// Zombie spawn cadence.
    pub spawning: SpawningSection,
    /// Sky sun cadence.
    pub sun: SunSection,
    /// Loss threshold and population cap.
    pub limits: LimitsSection,
    /// Scripted placements an autopilot performs at the start of the session.
    pub opening: Vec<OpeningMove>,
}

/// Lawn layout section.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LawnSection {
    /// Number of placement columns.
    pub columns: u32,
    /// Number of lanes.
    pub rows: u32,
    /// Width of a cell in world units.
    pub cell_width: f32,
    /// Height of a cell in world units.
    pub cell_height: f32,
    /// Horizontal position of the grid's left edge.
    pub origin_x: f32,
    /// Vertical position of the grid's top edge.
    pub origin_y: f32,
    /// Width of the visible playfield.
    pub field_width: f32,
}

impl Default for LawnSection {
    fn default() -> Self {
        let geometry = LawnGeometry::default();
        Self {
            columns: geometry.columns(),
            rows: geometry.rows(),
            cell_width: geometry.cell_width(),
            cell_height: geometry.cell_height(),
            origin_x: geometry.origin().x,
            origin_y: geometry.origin().y,
            field_width: geometry.field_width(),
        }
    }
}

/// Economy section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EconomySection {
    /// Currency available when the session starts.
    pub starting_balance: u32,
}

impl Default for EconomySection {
    fn default() -> Self {
        Self {
            starting_balance: SessionRules::default().starting_balance,
        }
    }
}

/// Zombie spawn cadence section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpawningSection {
    /// Delay before the first zombie, in milliseconds.
    pub initial_delay_ms: u64,
    /// Amount the delay shrinks after every spawn, in milliseconds.
    pub delay_step_ms: u64,
    /// Floor of the spawn delay, in milliseconds.
    pub minimum_delay_ms: u64,
}

impl Default for SpawningSection {
    fn default() -> Self {
        Self {
            initial_delay_ms: 3_000,
            delay_step_ms: 50,
            minimum_delay_ms: 1_500,
        }
    }
}

/// Sky sun cadence section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SunSection {
    /// Interval between two sky suns, in milliseconds. Zero disables the timer.
    pub sky_interval_ms: u64,
}

impl Default for SunSection {
    fn default() -> Self {
        Self {
            sky_interval_ms: 10_000,
        }
    }
}

/// Limits section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitsSection {
    /// Number of lost plants tolerated before the session is lost.
    pub plants_lost: u32,
    /// Maximum number of zombies on the lawn at once.
    pub zombie_cap: usize,
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            plants_lost: SessionRules::default().plants_lost_limit,
            zombie_cap: 64,
        }
    }
}

/// Placement performed by an autopilot once the session clock reaches `at_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpeningMove {
    /// Session time at which the placement is attempted, in milliseconds.
    pub at_ms: u64,
    /// Kind of plant to place.
    pub kind: PlantKind,
    /// Target column.
    pub column: u32,
    /// Target row.
    pub row: u32,
}

impl OpeningMove {
    /// Session time at which the placement is attempted.
    #[must_use]
    pub fn at(&self) -> Duration {
        Duration::from_millis(self.at_ms)
    }

    /// Target cell.
    #[must_use]
    pub fn cell(&self) -> CellCoord {
        CellCoord::new(self.column, self.row)
    }
}

impl SessionConfig {
    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Checks every value the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lawn = &self.lawn;
        if lawn.columns == 0 || lawn.rows == 0 {
            return Err(invalid("lawn", "the lawn needs at least one cell"));
        }
        if !(lawn.cell_width > 0.0 && lawn.cell_height > 0.0) {
            return Err(invalid("lawn.cell_width", "cells need a positive size"));
        }
        if !(lawn.field_width > 0.0) {
            return Err(invalid("lawn.field_width", "must be positive"));
        }

        let spawning = &self.spawning;
        if spawning.minimum_delay_ms == 0 {
            return Err(invalid("spawning.minimum_delay_ms", "must be positive"));
        }
        if spawning.minimum_delay_ms > spawning.initial_delay_ms {
            return Err(invalid(
                "spawning.minimum_delay_ms",
                "must not exceed spawning.initial_delay_ms",
            ));
        }
        if self.limits.zombie_cap == 0 {
            return Err(invalid("limits.zombie_cap", "must be positive"));
        }

        let geometry = self.geometry();
        if self.opening.iter().any(|step| !geometry.contains(step.cell())) {
            return Err(invalid("opening", "every scripted cell must lie on the lawn"));
        }
        Ok(())
    }

    /// Lawn geometry described by the `lawn` section.
    #[must_use]
    pub fn geometry(&self) -> LawnGeometry {
        let lawn = &self.lawn;
        LawnGeometry::new(
            lawn.columns,
            lawn.rows,
            lawn.cell_width,
            lawn.cell_height,
            LawnPoint::new(lawn.origin_x, lawn.origin_y),
            lawn.field_width,
        )
    }

    /// Session rules described by the `economy` and `limits` sections.
    #[must_use]
    pub fn rules(&self) -> SessionRules {
        SessionRules {
            starting_balance: self.economy.starting_balance,
            plants_lost_limit: self.limits.plants_lost,
        }
    }

    /// Spawning configuration described by the `spawning`, `sun` and `limits` sections.
    #[must_use]
    pub fn spawning(&self) -> SpawningConfig {
        SpawningConfig::new(
            Duration::from_millis(self.spawning.initial_delay_ms),
            Duration::from_millis(self.spawning.delay_step_ms),
            Duration::from_millis(self.spawning.minimum_delay_ms),
            Duration::from_millis(self.sun.sky_interval_ms),
            self.limits.zombie_cap,
            self.seed,
        )
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
