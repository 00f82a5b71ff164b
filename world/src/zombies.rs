//! Zombie state, its walking and eating modes, and scheduled speed effects.

use std::time::Duration;

use lawn_defence_core::{
    LawnPoint, PlantId, ZombieId, ZombieKind, ZombieSnapshot, ZOMBIE_ATTACK_INTERVAL,
    ZOMBIE_KNOCKBACK,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ZombieState {
    Walking,
    Eating {
        plant: PlantId,
        last_bite: Option<Duration>,
    },
}

/// Pending reversal of a slow, evaluated against the simulation clock.
#[derive(Clone, Copy, Debug, PartialEq)]
struct SpeedRestore {
    due_at: Duration,
    factor: f32,
}

#[derive(Clone, Debug)]
pub(crate) struct Zombie {
    pub(crate) id: ZombieId,
    pub(crate) kind: ZombieKind,
    pub(crate) lane: u32,
    pub(crate) position: LawnPoint,
    pub(crate) health: u32,
    state: ZombieState,
    speed_multiplier: f32,
    restorations: Vec<SpeedRestore>,
}

impl Zombie {
    pub(crate) fn new(id: ZombieId, kind: ZombieKind, lane: u32, position: LawnPoint) -> Self {
        Self {
            id,
            kind,
            lane,
            position,
            health: kind.stats().health,
            state: ZombieState::Walking,
            speed_multiplier: 1.0,
            restorations: Vec::new(),
        }
    }

    pub(crate) fn is_dead(&self) -> bool {
        self.health == 0
    }

    pub(crate) fn eating(&self) -> Option<PlantId> {
        match self.state {
            ZombieState::Walking => None,
            ZombieState::Eating { plant, .. } => Some(plant),
        }
    }

    pub(crate) fn bite_damage(&self) -> u32 {
        self.kind.stats().damage
    }

    /// Moves the zombie one tick towards the defended edge.
    pub(crate) fn walk(&mut self) {
        self.position.x -= self.kind.stats().speed * self.speed_multiplier;
    }

    pub(crate) fn start_eating(&mut self, plant: PlantId) {
        self.state = ZombieState::Eating {
            plant,
            last_bite: None,
        };
    }

    /// Returns to walking and yields the plant that was being eaten.
    pub(crate) fn stop_eating(&mut self) -> Option<PlantId> {
        let previous = self.eating();
        self.state = ZombieState::Walking;
        previous
    }

    /// Reports whether a bite lands now, restarting the attack timer if so.
    ///
    /// The first bite lands on the first update after eating starts.
    pub(crate) fn bite_due(&mut self, clock: Duration) -> bool {
        let ZombieState::Eating { last_bite, .. } = &mut self.state else {
            return false;
        };

        let due = match *last_bite {
            None => true,
            Some(previous) => clock.saturating_sub(previous) >= ZOMBIE_ATTACK_INTERVAL,
        };
        if due {
            *last_bite = Some(clock);
        }
        due
    }

    /// Applies damage, pushes the zombie back and reports the remaining health.
    pub(crate) fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.position.x += ZOMBIE_KNOCKBACK;
        self.health
    }

    /// Scales the speed multiplier and schedules the matching restoration.
    pub(crate) fn slow(&mut self, factor: f32, duration: Duration, clock: Duration) -> f32 {
        if factor <= 0.0 {
            return self.speed_multiplier;
        }

        self.speed_multiplier *= factor;
        self.restorations.push(SpeedRestore {
            due_at: clock.saturating_add(duration),
            factor,
        });
        self.speed_multiplier
    }

    /// Reverts every slow whose restoration is due, returning the new multiplier
    /// when anything changed.
    pub(crate) fn restore_due(&mut self, clock: Duration) -> Option<f32> {
        let before = self.restorations.len();
        let mut multiplier = self.speed_multiplier;
        self.restorations.retain(|restore| {
            if restore.due_at <= clock {
                multiplier /= restore.factor;
                false
            } else {
                true
            }
        });

        if self.restorations.len() == before {
            return None;
        }

        if self.restorations.is_empty() {
            multiplier = 1.0;
        }
        self.speed_multiplier = multiplier;
        Some(multiplier)
    }

    pub(crate) fn snapshot(&self) -> ZombieSnapshot {
        ZombieSnapshot {
            id: self.id,
            kind: self.kind,
            lane: self.lane,
            position: self.position,
            health: self.health,
            max_health: self.kind.stats().health,
            speed_multiplier: self.speed_multiplier,
            eating: self.eating(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic() -> Zombie {
        Zombie::new(
            ZombieId::new(0),
            ZombieKind::Basic,
            1,
            LawnPoint::new(1_250.0, 250.0),
        )
    }

    #[test]
    fn walking_uses_kind_speed() {
        let mut zombie = basic();
        zombie.walk();
        zombie.walk();
        assert_eq!(zombie.position.x, 1_249.0);
    }

    #[test]
    fn damage_knocks_back_and_saturates() {
        let mut zombie = basic();
        assert_eq!(zombie.take_damage(20), 80);
        assert_eq!(zombie.position.x, 1_255.0);
        assert_eq!(zombie.take_damage(1_800), 0);
        assert!(zombie.is_dead());
    }

    #[test]
    fn first_bite_is_immediate_then_paced() {
        let mut zombie = basic();
        zombie.start_eating(PlantId::new(3));
        assert!(zombie.bite_due(Duration::from_millis(100)));
        assert!(!zombie.bite_due(Duration::from_millis(1_099)));
        assert!(zombie.bite_due(Duration::from_millis(1_100)));
    }

    #[test]
    fn walking_zombies_never_bite() {
        let mut zombie = basic();
        assert!(!zombie.bite_due(Duration::from_secs(5)));
    }

    #[test]
    fn stop_eating_returns_target() {
        let mut zombie = basic();
        zombie.start_eating(PlantId::new(3));
        assert_eq!(zombie.eating(), Some(PlantId::new(3)));
        assert_eq!(zombie.stop_eating(), Some(PlantId::new(3)));
        assert_eq!(zombie.eating(), None);
    }

    #[test]
    fn slows_stack_and_restore_on_schedule() {
        let mut zombie = basic();
        assert_eq!(zombie.slow(0.5, Duration::from_secs(3), Duration::ZERO), 0.5);
        assert_eq!(
            zombie.slow(0.5, Duration::from_secs(3), Duration::from_secs(1)),
            0.25
        );

        assert_eq!(zombie.restore_due(Duration::from_millis(2_999)), None);
        assert_eq!(zombie.restore_due(Duration::from_secs(3)), Some(0.5));
        assert_eq!(zombie.restore_due(Duration::from_secs(4)), Some(1.0));
        assert_eq!(zombie.restore_due(Duration::from_secs(9)), None);
    }

    #[test]
    fn slowed_zombie_walks_slower() {
        let mut zombie = basic();
        let _ = zombie.slow(0.5, Duration::from_secs(3), Duration::ZERO);
        zombie.walk();
        assert_eq!(zombie.position.x, 1_249.75);
    }
}
