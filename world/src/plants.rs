//! Plant state and its timed action.

use std::time::Duration;

use lawn_defence_core::{
    CellCoord, LawnPoint, PlantId, PlantKind, PlantRole, PlantSnapshot, ZombieId,
};

#[derive(Clone, Debug)]
pub(crate) struct Plant {
    pub(crate) id: PlantId,
    pub(crate) kind: PlantKind,
    pub(crate) cell: CellCoord,
    pub(crate) position: LawnPoint,
    pub(crate) health: u32,
    pub(crate) eaten_by: Option<ZombieId>,
    last_action: Duration,
}

impl Plant {
    /// Creates a plant whose action timer starts at `placed_at`.
    pub(crate) fn new(
        id: PlantId,
        kind: PlantKind,
        cell: CellCoord,
        position: LawnPoint,
        placed_at: Duration,
    ) -> Self {
        Self {
            id,
            kind,
            cell,
            position,
            health: kind.stats().health,
            eaten_by: None,
            last_action: placed_at,
        }
    }

    pub(crate) fn lane(&self) -> u32 {
        self.cell.row()
    }

    pub(crate) fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Returns the role to perform when the action interval has elapsed.
    ///
    /// The timer restarts whenever an action is due, whether or not the
    /// caller ends up doing anything with it.
    pub(crate) fn poll_action(&mut self, clock: Duration) -> Option<PlantRole> {
        if self.is_dead() {
            return None;
        }

        let stats = self.kind.stats();
        if matches!(stats.role, PlantRole::Wall) {
            return None;
        }

        if clock.saturating_sub(self.last_action) < stats.action_interval {
            return None;
        }

        self.last_action = clock;
        Some(stats.role)
    }

    /// Applies damage and reports the remaining health.
    pub(crate) fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    pub(crate) fn snapshot(&self) -> PlantSnapshot {
        PlantSnapshot {
            id: self.id,
            kind: self.kind,
            cell: self.cell,
            position: self.position,
            health: self.health,
            max_health: self.kind.stats().health,
            eaten_by: self.eaten_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(kind: PlantKind) -> Plant {
        Plant::new(
            PlantId::new(0),
            kind,
            CellCoord::new(0, 0),
            LawnPoint::new(240.0, 150.0),
            Duration::from_secs(2),
        )
    }

    #[test]
    fn action_waits_for_full_interval_from_placement() {
        let mut shooter = plant(PlantKind::Peashooter);
        assert_eq!(shooter.poll_action(Duration::from_millis(3_499)), None);
        assert!(matches!(
            shooter.poll_action(Duration::from_millis(3_500)),
            Some(PlantRole::Shooter { .. })
        ));
        assert_eq!(shooter.poll_action(Duration::from_millis(3_600)), None);
    }

    #[test]
    fn walls_never_act() {
        let mut wall = plant(PlantKind::WallNut);
        assert_eq!(wall.poll_action(Duration::from_secs(600)), None);
    }

    #[test]
    fn dead_plants_never_act() {
        let mut bomb = plant(PlantKind::CherryBomb);
        let _ = bomb.take_damage(u32::MAX);
        assert!(bomb.is_dead());
        assert_eq!(bomb.poll_action(Duration::from_secs(60)), None);
    }

    #[test]
    fn damage_saturates_at_zero() {
        let mut sunflower = plant(PlantKind::Sunflower);
        assert_eq!(sunflower.take_damage(30), 70);
        assert_eq!(sunflower.take_damage(500), 0);
    }

    #[test]
    fn snapshot_reports_kind_health() {
        let wall = plant(PlantKind::WallNut);
        let snapshot = wall.snapshot();
        assert_eq!(snapshot.health, 300);
        assert_eq!(snapshot.max_health, 300);
        assert_eq!(snapshot.eaten_by, None);
    }
}
