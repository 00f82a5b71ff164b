//! Sun pickups and their falling, resting, collecting and fading lifecycle.

use std::time::Duration;

use lawn_defence_core::{
    LawnPoint, SunId, SunOrigin, SunPhase, SunSnapshot, SUN_COLLECT_DURATION,
    SUN_FADE_DURATION, SUN_FALL_ACCELERATION, SUN_INITIAL_FALL_SPEED, SUN_LIFETIME, SUN_VALUE,
};

/// Lifecycle change produced by a sun update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SunTransition {
    Expired,
    Finished,
}

#[derive(Clone, Debug)]
pub(crate) struct Sun {
    pub(crate) id: SunId,
    pub(crate) origin: SunOrigin,
    pub(crate) position: LawnPoint,
    rest_y: f32,
    fall_speed: f32,
    created_at: Duration,
    phase: SunPhase,
    phase_started: Duration,
}

impl Sun {
    /// Creates a sun that falls from `position` until it reaches `rest_y`.
    pub(crate) fn falling(
        id: SunId,
        origin: SunOrigin,
        position: LawnPoint,
        rest_y: f32,
        created_at: Duration,
    ) -> Self {
        Self {
            id,
            origin,
            position,
            rest_y,
            fall_speed: SUN_INITIAL_FALL_SPEED,
            created_at,
            phase: SunPhase::Falling,
            phase_started: created_at,
        }
    }

    /// Creates a sun that rests where it appears.
    pub(crate) fn resting(
        id: SunId,
        origin: SunOrigin,
        position: LawnPoint,
        created_at: Duration,
    ) -> Self {
        Self {
            phase: SunPhase::Resting,
            ..Self::falling(id, origin, position, position.y, created_at)
        }
    }

    pub(crate) fn phase(&self) -> SunPhase {
        self.phase
    }

    pub(crate) fn update(&mut self, clock: Duration) -> Option<SunTransition> {
        match self.phase {
            SunPhase::Falling | SunPhase::Resting => {
                if clock.saturating_sub(self.created_at) > SUN_LIFETIME {
                    self.enter(SunPhase::Fading, clock);
                    return Some(SunTransition::Expired);
                }

                if self.phase == SunPhase::Falling {
                    self.fall();
                }
                None
            }
            SunPhase::Collecting => {
                (clock.saturating_sub(self.phase_started) >= SUN_COLLECT_DURATION)
                    .then_some(SunTransition::Finished)
            }
            SunPhase::Fading => (clock.saturating_sub(self.phase_started) >= SUN_FADE_DURATION)
                .then_some(SunTransition::Finished),
        }
    }

    /// Starts the collection animation, yielding the value exactly once.
    pub(crate) fn collect(&mut self, clock: Duration) -> Option<u32> {
        if !self.phase.is_collectable() {
            return None;
        }

        self.enter(SunPhase::Collecting, clock);
        Some(SUN_VALUE)
    }

    fn fall(&mut self) {
        if self.position.y >= self.rest_y {
            self.position.y = self.rest_y;
            self.phase = SunPhase::Resting;
            return;
        }

        self.position.y += self.fall_speed;
        self.fall_speed += SUN_FALL_ACCELERATION;
        if self.position.y >= self.rest_y {
            self.position.y = self.rest_y;
            self.phase = SunPhase::Resting;
        }
    }

    fn enter(&mut self, phase: SunPhase, clock: Duration) {
        self.phase = phase;
        self.phase_started = clock;
    }

    pub(crate) fn snapshot(&self) -> SunSnapshot {
        SunSnapshot {
            id: self.id,
            origin: self.origin,
            position: self.position,
            value: SUN_VALUE,
            phase: self.phase,
        }
    }
}
