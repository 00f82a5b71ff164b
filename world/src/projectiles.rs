//! Projectiles travelling along a lane.

use lawn_defence_core::{LawnPoint, ProjectileId, ProjectileKind, ProjectileSnapshot};

#[derive(Clone, Debug)]
pub(crate) struct Projectile {
    pub(crate) id: ProjectileId,
    pub(crate) kind: ProjectileKind,
    pub(crate) lane: u32,
    pub(crate) position: LawnPoint,
    /// Set once the projectile struck a zombie; it is removed on the next update.
    pub(crate) spent: bool,
}

impl Projectile {
    pub(crate) fn new(id: ProjectileId, kind: ProjectileKind, lane: u32, position: LawnPoint) -> Self {
        Self {
            id,
            kind,
            lane,
            position,
            spent: false,
        }
    }

    pub(crate) fn advance(&mut self) {
        self.position.x += self.kind.stats().speed;
    }

    pub(crate) fn snapshot(&self) -> ProjectileSnapshot {
        ProjectileSnapshot {
            id: self.id,
            kind: self.kind,
            lane: self.lane,
            position: self.position,
            spent: self.spent,
        }
    }
}
