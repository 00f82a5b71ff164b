//! Pairwise contact detection between entities sharing a lane.

use lawn_defence_core::{
    ImpactEffect, PlantId, ProjectileKind, ZombieId, ZombieKind, EATING_REACH, PROJECTILE_REACH,
};

use crate::{plants::Plant, projectiles::Projectile, zombies::Zombie};

/// First living zombie, in identifier order, struck by the projectile.
pub(crate) fn projectile_target<'a>(
    projectile: &Projectile,
    zombies: impl IntoIterator<Item = &'a Zombie>,
) -> Option<ZombieId> {
    if projectile.spent {
        return None;
    }

    zombies
        .into_iter()
        .find(|zombie| {
            !zombie.is_dead()
                && zombie.lane == projectile.lane
                && zombie
                    .position
                    .within_axis_reach(projectile.position, PROJECTILE_REACH)
        })
        .map(|zombie| zombie.id)
}

/// First living plant, in identifier order, that a walking zombie reaches.
pub(crate) fn bite_target<'a>(
    zombie: &Zombie,
    plants: impl IntoIterator<Item = &'a Plant>,
) -> Option<PlantId> {
    if zombie.is_dead() || zombie.eating().is_some() {
        return None;
    }

    plants
        .into_iter()
        .find(|plant| {
            !plant.is_dead()
                && plant.lane() == zombie.lane
                && plant.position.within_axis_reach(zombie.position, EATING_REACH)
        })
        .map(|plant| plant.id)
}

/// Living zombies caught by a splash around the struck zombie, which is excluded.
pub(crate) fn splash_victims<'a>(
    projectile: &Projectile,
    struck: ZombieId,
    radius: f32,
    zombies: impl IntoIterator<Item = &'a Zombie>,
) -> Vec<ZombieId> {
    zombies
        .into_iter()
        .filter(|zombie| {
            zombie.id != struck
                && !zombie.is_dead()
                && zombie.lane == projectile.lane
                && zombie.position.distance(projectile.position) <= radius
        })
        .map(|zombie| zombie.id)
        .collect()
}

/// Damage a projectile deals to the zombie it strikes directly.
pub(crate) fn impact_damage(kind: ProjectileKind, target: ZombieKind) -> u32 {
    let stats = kind.stats();
    match stats.effect {
        ImpactEffect::ArmourPiercing { bonus_percent } if target.stats().armoured => {
            stats.damage + percent_of(stats.damage, bonus_percent)
        }
        _ => stats.damage,
    }
}

pub(crate) fn percent_of(amount: u32, percent: u32) -> u32 {
    let scaled = u64::from(amount) * u64::from(percent) / 100;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}
