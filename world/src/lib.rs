#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Lawn Defence.
//!
//! The world exclusively owns every entity collection. Adapters and systems
//! mutate it only through [`apply`] and observe it through [`query`] and the
//! emitted [`Event`] stream.

mod collisions;
mod economy;
mod lawn;
mod plants;
mod projectiles;
mod registry;
mod suns;
mod zombies;

use std::time::Duration;

use lawn_defence_core::{
    CellCoord, Command, Event, ImpactEffect, LawnGeometry, LawnPoint, LossReason, PlacementError,
    PlantId, PlantKind, PlantRole, ProjectileId, ProjectileKind, SessionRules, SessionStatus,
    SunId, SunOrigin, ZombieId, ZombieKind, EATING_RELEASE_DISTANCE, PROJECTILE_MUZZLE_OFFSET,
    SUN_PRODUCER_OFFSET_Y, SUN_SKY_START_Y, WELCOME_BANNER,
};
use tracing::{debug, info};

use crate::{
    economy::Economy,
    lawn::LawnGrid,
    plants::Plant,
    projectiles::Projectile,
    registry::Registry,
    suns::{Sun, SunTransition},
    zombies::Zombie,
};

/// Represents the authoritative Lawn Defence world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    geometry: LawnGeometry,
    rules: SessionRules,
    lawn: LawnGrid,
    plants: Registry<PlantId, Plant>,
    zombies: Registry<ZombieId, Zombie>,
    projectiles: Registry<ProjectileId, Projectile>,
    suns: Registry<SunId, Sun>,
    economy: Economy,
    status: SessionStatus,
    pending_breach: Option<ZombieId>,
    clock: Duration,
    tick_index: u64,
}

/// Projectile requested by a shooter; it enters the lawn once the tick ends.
#[derive(Clone, Copy, Debug)]
struct PendingShot {
    plant: PlantId,
    kind: ProjectileKind,
    lane: u32,
    position: LawnPoint,
}

impl World {
    /// Creates a new Lawn Defence world with the default lawn and rules.
    #[must_use]
    pub fn new() -> Self {
        let geometry = LawnGeometry::default();
        let rules = SessionRules::default();
        Self {
            banner: WELCOME_BANNER,
            lawn: LawnGrid::new(geometry.columns(), geometry.rows()),
            geometry,
            economy: Economy::new(rules.starting_balance),
            rules,
            plants: Registry::new(),
            zombies: Registry::new(),
            projectiles: Registry::new(),
            suns: Registry::new(),
            status: SessionStatus::Running,
            pending_breach: None,
            clock: Duration::ZERO,
            tick_index: 0,
        }
    }

    fn is_lost(&self) -> bool {
        matches!(self.status, SessionStatus::Lost { .. })
    }

    fn configure_lawn(&mut self, geometry: LawnGeometry) {
        self.geometry = geometry;
        self.lawn = LawnGrid::new(geometry.columns(), geometry.rows());
        self.plants.clear();
        self.zombies.clear();
        self.projectiles.clear();
        self.suns.clear();
        self.pending_breach = None;
    }

    fn configure_rules(&mut self, rules: SessionRules, out_events: &mut Vec<Event>) {
        if self.is_lost() {
            return;
        }

        let previous = i64::from(self.economy.balance());
        self.rules = rules;
        self.economy = Economy::new(rules.starting_balance);
        self.pending_breach = None;
        out_events.push(Event::CurrencyChanged {
            balance: rules.starting_balance,
            delta: i64::from(rules.starting_balance) - previous,
        });
    }

    fn place_plant(&mut self, kind: PlantKind, cell: CellCoord, out_events: &mut Vec<Event>) {
        match self.try_place(kind, cell) {
            Ok((plant, position, balance)) => {
                info!(
                    plant = plant.get(),
                    ?kind,
                    column = cell.column(),
                    row = cell.row(),
                    balance,
                    "plant placed"
                );
                out_events.push(Event::PlantPlaced {
                    plant,
                    kind,
                    cell,
                    position,
                });
                out_events.push(Event::CurrencyChanged {
                    balance,
                    delta: -i64::from(kind.cost()),
                });
            }
            Err(reason) => {
                debug!(?kind, ?cell, %reason, "placement rejected");
                out_events.push(Event::PlantPlacementRejected { kind, cell, reason });
            }
        }
    }

    fn try_place(
        &mut self,
        kind: PlantKind,
        cell: CellCoord,
    ) -> Result<(PlantId, LawnPoint, u32), PlacementError> {
        if self.is_lost() {
            return Err(PlacementError::SessionOver);
        }
        if !self.geometry.contains(cell) {
            return Err(PlacementError::OutOfBounds);
        }
        if !self.lawn.is_free(cell) {
            return Err(PlacementError::Occupied);
        }

        let balance = self.economy.try_debit(kind.cost())?;
        let position = self.geometry.cell_center(cell);
        let clock = self.clock;
        let plant = self
            .plants
            .insert_with(|id| Plant::new(id, kind, cell, position, clock));
        self.lawn.occupy(plant, cell);
        Ok((plant, position, balance))
    }

    fn spawn_zombie(&mut self, kind: ZombieKind, lane: u32, out_events: &mut Vec<Event>) {
        if self.is_lost() {
            return;
        }
        if lane >= self.geometry.rows() {
            debug!(lane, "zombie spawn outside the lawn ignored");
            return;
        }

        let position = LawnPoint::new(self.geometry.zombie_spawn_x(), self.geometry.lane_y(lane));
        let zombie = self
            .zombies
            .insert_with(|id| Zombie::new(id, kind, lane, position));
        debug!(zombie = zombie.get(), ?kind, lane, "zombie spawned");
        out_events.push(Event::ZombieSpawned {
            zombie,
            kind,
            lane,
            position,
        });
    }

    fn drop_sun(&mut self, x: f32, rest_y: f32, out_events: &mut Vec<Event>) {
        if self.is_lost() {
            return;
        }

        let position = LawnPoint::new(x, SUN_SKY_START_Y);
        let clock = self.clock;
        let sun = self
            .suns
            .insert_with(|id| Sun::falling(id, SunOrigin::Sky, position, rest_y, clock));
        out_events.push(Event::SunSpawned {
            sun,
            origin: SunOrigin::Sky,
            position,
        });
    }

    fn collect_sun(&mut self, sun: SunId, out_events: &mut Vec<Event>) {
        if self.is_lost() {
            return;
        }

        let clock = self.clock;
        let Some(value) = self.suns.get_mut(sun).and_then(|entry| entry.collect(clock)) else {
            return;
        };

        let balance = self.economy.credit(value);
        debug!(sun = sun.get(), value, balance, "sun collected");
        out_events.push(Event::SunCollected { sun, value });
        out_events.push(Event::CurrencyChanged {
            balance,
            delta: i64::from(value),
        });
    }

    fn tick(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        if self.is_lost() {
            return;
        }

        self.clock = self.clock.saturating_add(dt);
        self.tick_index = self.tick_index.saturating_add(1);
        out_events.push(Event::TimeAdvanced { dt });

        let shots = self.update_plants(out_events);
        self.evict_casualties(out_events);
        self.update_zombies(out_events);
        self.evict_casualties(out_events);
        self.update_projectiles(out_events);
        self.update_suns(out_events);
        self.resolve_collisions(out_events);
        self.evict_casualties(out_events);
        self.launch(shots, out_events);
        self.evaluate_loss(out_events);
    }

    fn update_plants(&mut self, out_events: &mut Vec<Event>) -> Vec<PendingShot> {
        let clock = self.clock;
        let mut shots = Vec::new();
        for id in self.plants.keys() {
            let Some(plant) = self.plants.get_mut(id) else {
                continue;
            };
            let Some(role) = plant.poll_action(clock) else {
                continue;
            };
            let position = plant.position;
            let lane = plant.lane();

            match role {
                PlantRole::Producer => self.produce_sun(id, position, out_events),
                PlantRole::Shooter { projectile } => {
                    if self.zombie_ahead(lane, position.x) {
                        shots.push(PendingShot {
                            plant: id,
                            kind: projectile,
                            lane,
                            position: LawnPoint::new(
                                position.x + PROJECTILE_MUZZLE_OFFSET,
                                position.y,
                            ),
                        });
                    }
                }
                PlantRole::Bomb { radius, damage } => {
                    self.detonate(id, position, radius, damage, out_events)
                }
                PlantRole::Wall => {}
            }
        }
        shots
    }

    fn zombie_ahead(&self, lane: u32, x: f32) -> bool {
        self.zombies
            .values()
            .any(|zombie| !zombie.is_dead() && zombie.lane == lane && zombie.position.x > x)
    }

    fn produce_sun(&mut self, plant: PlantId, position: LawnPoint, out_events: &mut Vec<Event>) {
        let origin = SunOrigin::Plant { plant };
        let spawn = LawnPoint::new(position.x, position.y + SUN_PRODUCER_OFFSET_Y);
        let clock = self.clock;
        let sun = self
            .suns
            .insert_with(|id| Sun::resting(id, origin, spawn, clock));
        out_events.push(Event::SunSpawned {
            sun,
            origin,
            position: spawn,
        });
    }

    fn detonate(
        &mut self,
        plant: PlantId,
        position: LawnPoint,
        radius: f32,
        damage: u32,
        out_events: &mut Vec<Event>,
    ) {
        out_events.push(Event::BombDetonated {
            plant,
            position,
            radius,
        });

        let mut caught = 0_u32;
        for zombie in self.zombies.values_mut() {
            if zombie.is_dead() || zombie.position.distance(position) > radius {
                continue;
            }
            let health = zombie.take_damage(damage);
            caught += 1;
            out_events.push(Event::ZombieDamaged {
                zombie: zombie.id,
                health,
            });
        }

        if let Some(bomb) = self.plants.get_mut(plant) {
            bomb.health = 0;
        }
        info!(plant = plant.get(), caught, "bomb detonated");
    }

    fn update_zombies(&mut self, out_events: &mut Vec<Event>) {
        let clock = self.clock;
        let breach_x = self.geometry.breach_x();
        let mut breached = Vec::new();
        let mut released = Vec::new();

        for id in self.zombies.keys() {
            let Some(zombie) = self.zombies.get_mut(id) else {
                continue;
            };

            if let Some(multiplier) = zombie.restore_due(clock) {
                out_events.push(Event::ZombieSpeedChanged {
                    zombie: id,
                    multiplier,
                });
            }

            if let Some(target) = zombie.eating() {
                let holding = self.plants.get(target).is_some_and(|plant| {
                    !plant.is_dead()
                        && (plant.position.x - zombie.position.x).abs() <= EATING_RELEASE_DISTANCE
                });

                if holding {
                    if zombie.bite_due(clock) {
                        let damage = zombie.bite_damage();
                        if let Some(plant) = self.plants.get_mut(target) {
                            let health = plant.take_damage(damage);
                            out_events.push(Event::PlantDamaged {
                                plant: target,
                                health,
                            });
                        }
                    }
                    continue;
                }

                let _ = zombie.stop_eating();
                released.push(target);
                out_events.push(Event::ZombieStoppedEating { zombie: id });
            }

            zombie.walk();
            if zombie.position.x < breach_x {
                breached.push(id);
            }
        }

        for plant in released {
            self.refresh_eater(plant);
        }

        for id in breached {
            if self.zombies.remove(id).is_none() {
                continue;
            }
            info!(zombie = id.get(), tick = self.tick_index, "zombie breached the lawn");
            out_events.push(Event::ZombieBreached { zombie: id });
            if self.pending_breach.is_none() {
                self.pending_breach = Some(id);
            }
        }
    }

    fn update_projectiles(&mut self, out_events: &mut Vec<Event>) {
        let exit_x = self.geometry.projectile_exit_x();
        for id in self.projectiles.keys() {
            let leaving = match self.projectiles.get_mut(id) {
                None => continue,
                Some(projectile) if projectile.spent => true,
                Some(projectile) => {
                    projectile.advance();
                    projectile.position.x > exit_x
                }
            };

            if leaving {
                let _ = self.projectiles.remove(id);
                out_events.push(Event::ProjectileRemoved { projectile: id });
            }
        }
    }

    fn update_suns(&mut self, out_events: &mut Vec<Event>) {
        let clock = self.clock;
        for id in self.suns.keys() {
            let transition = match self.suns.get_mut(id) {
                Some(sun) => sun.update(clock),
                None => continue,
            };

            match transition {
                Some(SunTransition::Expired) => out_events.push(Event::SunExpired { sun: id }),
                Some(SunTransition::Finished) => {
                    let _ = self.suns.remove(id);
                    out_events.push(Event::SunRemoved { sun: id });
                }
                None => {}
            }
        }
    }

    fn resolve_collisions(&mut self, out_events: &mut Vec<Event>) {
        for id in self.projectiles.keys() {
            let Some(projectile) = self.projectiles.get(id) else {
                continue;
            };
            let Some(target) = collisions::projectile_target(projectile, self.zombies.values())
            else {
                continue;
            };

            let projectile = projectile.clone();
            self.strike(&projectile, target, out_events);
            if let Some(entry) = self.projectiles.get_mut(id) {
                entry.spent = true;
            }
        }

        for id in self.zombies.keys() {
            let Some(zombie) = self.zombies.get(id) else {
                continue;
            };
            let Some(target) = collisions::bite_target(zombie, self.plants.values()) else {
                continue;
            };

            if let Some(zombie) = self.zombies.get_mut(id) {
                zombie.start_eating(target);
            }
            if let Some(plant) = self.plants.get_mut(target) {
                if plant.eaten_by.is_none() {
                    plant.eaten_by = Some(id);
                }
            }
            out_events.push(Event::ZombieStartedEating {
                zombie: id,
                plant: target,
            });
        }
    }

    fn strike(&mut self, projectile: &Projectile, target: ZombieId, out_events: &mut Vec<Event>) {
        out_events.push(Event::ProjectileHit {
            projectile: projectile.id,
            zombie: target,
        });

        let clock = self.clock;
        let stats = projectile.kind.stats();
        if let Some(zombie) = self.zombies.get_mut(target) {
            let damage = collisions::impact_damage(projectile.kind, zombie.kind);
            let health = zombie.take_damage(damage);
            out_events.push(Event::ZombieDamaged {
                zombie: target,
                health,
            });

            if let ImpactEffect::Slow {
                multiplier,
                duration,
            } = stats.effect
            {
                let multiplier = zombie.slow(multiplier, duration, clock);
                out_events.push(Event::ZombieSpeedChanged {
                    zombie: target,
                    multiplier,
                });
            }
        }

        if let ImpactEffect::Splash { radius, percent } = stats.effect {
            let splash = collisions::percent_of(stats.damage, percent);
            let victims =
                collisions::splash_victims(projectile, target, radius, self.zombies.values());
            for victim in victims {
                if let Some(zombie) = self.zombies.get_mut(victim) {
                    let health = zombie.take_damage(splash);
                    out_events.push(Event::ZombieDamaged {
                        zombie: victim,
                        health,
                    });
                }
            }
        }
    }

    fn evict_casualties(&mut self, out_events: &mut Vec<Event>) {
        let fallen: Vec<PlantId> = self
            .plants
            .values()
            .filter(|plant| plant.is_dead())
            .map(|plant| plant.id)
            .collect();
        for id in fallen {
            let Some(plant) = self.plants.remove(id) else {
                continue;
            };
            self.lawn.vacate(id, plant.cell);

            for zombie in self.zombies.values_mut() {
                if zombie.eating() == Some(id) {
                    let _ = zombie.stop_eating();
                    out_events.push(Event::ZombieStoppedEating { zombie: zombie.id });
                }
            }

            let plants_lost = self.economy.record_plant_lost();
            debug!(plant = id.get(), kind = ?plant.kind, plants_lost, "plant removed");
            out_events.push(Event::PlantRemoved {
                plant: id,
                cell: plant.cell,
            });
        }

        let dead: Vec<ZombieId> = self
            .zombies
            .values()
            .filter(|zombie| zombie.is_dead())
            .map(|zombie| zombie.id)
            .collect();
        for id in dead {
            let Some(zombie) = self.zombies.remove(id) else {
                continue;
            };
            if let Some(target) = zombie.eating() {
                self.refresh_eater(target);
            }

            self.economy.record_kill();
            debug!(zombie = id.get(), kind = ?zombie.kind, "zombie killed");
            out_events.push(Event::ZombieKilled { zombie: id });
        }
    }

    fn launch(&mut self, shots: Vec<PendingShot>, out_events: &mut Vec<Event>) {
        for shot in shots {
            let projectile = self
                .projectiles
                .insert_with(|id| Projectile::new(id, shot.kind, shot.lane, shot.position));
            out_events.push(Event::ProjectileFired {
                projectile,
                kind: shot.kind,
                plant: shot.plant,
                lane: shot.lane,
                position: shot.position,
            });
        }
    }

    /// Keeps a plant's eater pointing at a zombie that still eats it.
    ///
    /// The first eater holds the slot; once it lets go, the slot passes to the
    /// lowest-id zombie still eating the plant, or is cleared.
    fn refresh_eater(&mut self, plant: PlantId) {
        let Some(current) = self.plants.get(plant).map(|entry| entry.eaten_by) else {
            return;
        };
        let holds = current
            .and_then(|zombie| self.zombies.get(zombie))
            .is_some_and(|zombie| eats(zombie, plant));
        if holds {
            return;
        }

        let successor = self
            .zombies
            .values()
            .find(|zombie| eats(zombie, plant))
            .map(|zombie| zombie.id);
        if let Some(entry) = self.plants.get_mut(plant) {
            entry.eaten_by = successor;
        }
    }

    fn evaluate_loss(&mut self, out_events: &mut Vec<Event>) {
        if let Some(zombie) = self.pending_breach.take() {
            self.declare_loss(LossReason::Breach { zombie }, out_events);
            return;
        }

        let plants_lost = self.economy.scoreboard().plants_lost;
        if plants_lost > self.rules.plants_lost_limit {
            self.declare_loss(LossReason::PlantsLost { count: plants_lost }, out_events);
        }
    }

    /// Ends the session. Later calls have no effect.
    fn declare_loss(&mut self, reason: LossReason, out_events: &mut Vec<Event>) {
        if self.is_lost() {
            return;
        }

        self.status = SessionStatus::Lost { reason };
        let score = self.economy.scoreboard().score;
        info!(?reason, score, tick = self.tick_index, "session lost");
        out_events.push(Event::SessionLost { reason, score });
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

fn eats(zombie: &Zombie, plant: PlantId) -> bool {
    !zombie.is_dead() && zombie.eating() == Some(plant)
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureLawn { geometry } => world.configure_lawn(geometry),
        Command::ConfigureRules { rules } => world.configure_rules(rules, out_events),
        Command::Tick { dt } => world.tick(dt, out_events),
        Command::PlacePlant { kind, cell } => world.place_plant(kind, cell, out_events),
        Command::SpawnZombie { kind, lane } => world.spawn_zombie(kind, lane, out_events),
        Command::DropSun { x, rest_y } => world.drop_sun(x, rest_y, out_events),
        Command::CollectSun { sun } => world.collect_sun(sun, out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::time::Duration;

    use super::{lawn::LawnGrid, World};
    use lawn_defence_core::{
        CellCoord, LawnGeometry, LawnPoint, PlantId, PlantSnapshot, ProjectileSnapshot,
        Scoreboard, SessionRules, SessionStatus, SunId, SunSnapshot, ZombieId, ZombieSnapshot,
    };

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Provides read-only access to the lawn geometry.
    #[must_use]
    pub fn geometry(world: &World) -> &LawnGeometry {
        &world.geometry
    }

    /// Rules currently applied to the session.
    #[must_use]
    pub fn rules(world: &World) -> SessionRules {
        world.rules
    }

    /// Reports whether the session is still running or how it ended.
    #[must_use]
    pub fn status(world: &World) -> SessionStatus {
        world.status
    }

    /// Total simulated time.
    #[must_use]
    pub fn clock(world: &World) -> Duration {
        world.clock
    }

    /// Number of ticks simulated so far.
    #[must_use]
    pub fn tick_index(world: &World) -> u64 {
        world.tick_index
    }

    /// Current currency balance.
    #[must_use]
    pub fn balance(world: &World) -> u32 {
        world.economy.balance()
    }

    /// Balance, score and loss counters.
    #[must_use]
    pub fn scoreboard(world: &World) -> Scoreboard {
        world.economy.scoreboard()
    }

    /// Snapshots of every plant in identifier order.
    #[must_use]
    pub fn plants(world: &World) -> Vec<PlantSnapshot> {
        world.plants.values().map(|plant| plant.snapshot()).collect()
    }

    /// Snapshot of a single plant, if it is still on the lawn.
    #[must_use]
    pub fn plant(world: &World, plant: PlantId) -> Option<PlantSnapshot> {
        world.plants.get(plant).map(|entry| entry.snapshot())
    }

    /// Snapshots of every zombie in identifier order.
    #[must_use]
    pub fn zombies(world: &World) -> Vec<ZombieSnapshot> {
        world.zombies.values().map(|zombie| zombie.snapshot()).collect()
    }

    /// Snapshot of a single zombie, if it is still on the lawn.
    #[must_use]
    pub fn zombie(world: &World, zombie: ZombieId) -> Option<ZombieSnapshot> {
        world.zombies.get(zombie).map(|entry| entry.snapshot())
    }

    /// Number of zombies currently on the lawn.
    #[must_use]
    pub fn live_zombie_count(world: &World) -> usize {
        world.zombies.len()
    }

    /// Snapshots of every projectile in identifier order.
    #[must_use]
    pub fn projectiles(world: &World) -> Vec<ProjectileSnapshot> {
        world
            .projectiles
            .values()
            .map(|projectile| projectile.snapshot())
            .collect()
    }

    /// Snapshots of every sun in identifier order.
    #[must_use]
    pub fn suns(world: &World) -> Vec<SunSnapshot> {
        world.suns.values().map(|sun| sun.snapshot()).collect()
    }

    /// Finds the collectable sun closest to `point` within `radius`.
    #[must_use]
    pub fn pick_sun(world: &World, point: LawnPoint, radius: f32) -> Option<SunId> {
        world
            .suns
            .values()
            .filter(|sun| sun.phase().is_collectable())
            .map(|sun| (sun.id, sun.position.distance(point)))
            .filter(|(_, distance)| *distance <= radius)
            .min_by(|left, right| left.1.total_cmp(&right.1))
            .map(|(id, _)| id)
    }

    /// Exposes a read-only view of the placement grid.
    #[must_use]
    pub fn lawn_view(world: &World) -> LawnView<'_> {
        LawnView { grid: &world.lawn }
    }

    /// Read-only view into the placement grid.
    #[derive(Clone, Copy, Debug)]
    pub struct LawnView<'a> {
        grid: &'a LawnGrid,
    }

    impl LawnView<'_> {
        /// Returns the plant occupying the provided cell, if any.
        #[must_use]
        pub fn occupant(&self, cell: CellCoord) -> Option<PlantId> {
            self.grid.occupant(cell)
        }

        /// Reports whether the cell lies on the lawn and is free for planting.
        #[must_use]
        pub fn is_free(&self, cell: CellCoord) -> bool {
            self.grid.is_free(cell)
        }

        /// Number of cells holding a plant.
        #[must_use]
        pub fn occupied_count(&self) -> usize {
            self.grid.occupied_count()
        }
    }
}

/// Helpers that stage entities directly, bypassing spawning and placement
/// rules, so scenarios can be arranged precisely.
#[cfg(any(test, feature = "scenario_scaffolding"))]
pub mod scaffold {
    use lawn_defence_core::{LawnPoint, ProjectileId, ProjectileKind, ZombieId, ZombieKind};

    use super::{projectiles::Projectile, zombies::Zombie, World};

    /// Places a zombie at an arbitrary horizontal position of a lane.
    pub fn place_zombie(world: &mut World, kind: ZombieKind, lane: u32, x: f32) -> ZombieId {
        let position = LawnPoint::new(x, world.geometry.lane_y(lane));
        world
            .zombies
            .insert_with(|id| Zombie::new(id, kind, lane, position))
    }

    /// Launches a projectile from an arbitrary horizontal position of a lane.
    pub fn launch_projectile(
        world: &mut World,
        kind: ProjectileKind,
        lane: u32,
        x: f32,
    ) -> ProjectileId {
        let position = LawnPoint::new(x, world.geometry.lane_y(lane));
        world
            .projectiles
            .insert_with(|id| Projectile::new(id, kind, lane, position))
    }
}
