use std::time::Duration;

use lawn_defence_core::{
    CellCoord, Command, Event, LawnGeometry, LawnPoint, LossReason, PlantKind, ProjectileKind,
    SessionRules, SessionStatus, ZombieId, ZombieKind,
};
use lawn_defence_world::{apply, query, scaffold, World};

fn world_with_rules(starting_balance: u32, plants_lost_limit: u32) -> World {
    let mut world = World::new();
    let mut events = Vec::new();
    apply(
        &mut world,
        Command::ConfigureRules {
            rules: SessionRules {
                starting_balance,
                plants_lost_limit,
            },
        },
        &mut events,
    );
    world
}

fn run(world: &mut World, command: Command) -> Vec<Event> {
    let mut events = Vec::new();
    apply(world, command, &mut events);
    events
}

fn tick(world: &mut World, dt: Duration) -> Vec<Event> {
    run(world, Command::Tick { dt })
}

#[test]
fn lone_zombie_crosses_an_empty_lawn_and_ends_the_session() {
    let mut world = World::new();
    let _ = run(
        &mut world,
        Command::SpawnZombie {
            kind: ZombieKind::Basic,
            lane: 2,
        },
    );

    let mut losses = Vec::new();
    for _ in 0..3_000 {
        for event in tick(&mut world, Duration::from_millis(16)) {
            if let Event::SessionLost { reason, .. } = event {
                losses.push(reason);
            }
        }
    }

    assert_eq!(
        losses,
        vec![LossReason::Breach {
            zombie: ZombieId::new(0)
        }]
    );
    assert_eq!(query::live_zombie_count(&world), 0);
    // 1250 to below -50 at 0.5 per tick.
    assert_eq!(query::tick_index(&world), 2_601);
}

#[test]
fn several_breaches_in_one_tick_lose_once() {
    let mut world = World::new();
    for lane in 0..3 {
        let _ = scaffold::place_zombie(&mut world, ZombieKind::Basic, lane, -49.9);
    }

    let events = tick(&mut world, Duration::from_millis(16));
    let breaches = events
        .iter()
        .filter(|event| matches!(event, Event::ZombieBreached { .. }))
        .count();
    let losses = events
        .iter()
        .filter(|event| matches!(event, Event::SessionLost { .. }))
        .count();

    assert_eq!(breaches, 3);
    assert_eq!(losses, 1);
    assert!(tick(&mut world, Duration::from_millis(16)).is_empty());
}

#[test]
fn wall_survives_exactly_fifteen_bites_then_zombie_walks_on() {
    let mut world = world_with_rules(50, 10);
    let cell = CellCoord::new(0, 0);
    let _ = run(
        &mut world,
        Command::PlacePlant {
            kind: PlantKind::WallNut,
            cell,
        },
    );
    let zombie = scaffold::place_zombie(&mut world, ZombieKind::Basic, 0, 270.0);

    let mut bites = 0;
    let mut removed = false;
    for _ in 0..400 {
        let events = tick(&mut world, Duration::from_millis(100));
        bites += events
            .iter()
            .filter(|event| matches!(event, Event::PlantDamaged { .. }))
            .count();
        if events
            .iter()
            .any(|event| matches!(event, Event::PlantRemoved { .. }))
        {
            assert!(events.contains(&Event::ZombieStoppedEating { zombie }));
            removed = true;
            break;
        }
    }

    assert!(removed);
    assert_eq!(bites, 15);
    assert!(query::lawn_view(&world).is_free(cell));
    assert_eq!(query::scoreboard(&world).plants_lost, 1);

    let before = query::zombie(&world, zombie).expect("zombie alive").position.x;
    let _ = tick(&mut world, Duration::from_millis(100));
    let after = query::zombie(&world, zombie).expect("zombie alive");
    assert_eq!(after.eating, None);
    assert!(after.position.x < before);
}

#[test]
fn bomb_clears_its_radius_across_lanes_and_spares_the_rest() {
    let mut world = world_with_rules(150, 10);
    let geometry = LawnGeometry::new(9, 5, 80.0, 60.0, LawnPoint::new(200.0, 100.0), 1_200.0);
    let _ = run(&mut world, Command::ConfigureLawn { geometry });

    let bomb_cell = CellCoord::new(3, 2);
    let bomb_x = geometry.cell_center(bomb_cell).x;
    let _ = run(
        &mut world,
        Command::PlacePlant {
            kind: PlantKind::CherryBomb,
            cell: bomb_cell,
        },
    );

    let same_lane = scaffold::place_zombie(&mut world, ZombieKind::Buckethead, 2, bomb_x + 60.0);
    let next_lane = scaffold::place_zombie(&mut world, ZombieKind::Basic, 1, bomb_x + 20.0);
    let far_lane = scaffold::place_zombie(&mut world, ZombieKind::Basic, 4, bomb_x);
    let far_along = scaffold::place_zombie(&mut world, ZombieKind::Basic, 2, bomb_x + 300.0);

    for _ in 0..2 {
        let events = tick(&mut world, Duration::from_secs(1));
        assert!(!events
            .iter()
            .any(|event| matches!(event, Event::BombDetonated { .. })));
    }

    let events = tick(&mut world, Duration::from_secs(1));
    assert!(events
        .iter()
        .any(|event| matches!(event, Event::BombDetonated { .. })));
    for killed in [same_lane, next_lane] {
        assert!(events.contains(&Event::ZombieKilled { zombie: killed }));
        assert!(query::zombie(&world, killed).is_none());
    }
    for spared in [far_lane, far_along] {
        let snapshot = query::zombie(&world, spared).expect("zombie spared");
        assert_eq!(snapshot.health, snapshot.max_health);
    }
    assert!(query::plants(&world).is_empty());
    assert!(query::lawn_view(&world).is_free(bomb_cell));
    assert_eq!(query::scoreboard(&world).zombies_killed, 2);
    assert_eq!(query::scoreboard(&world).score, 20);
}

#[test]
fn projectile_in_reach_deals_exact_damage_and_is_flagged() {
    let mut world = World::new();
    let zombie = scaffold::place_zombie(&mut world, ZombieKind::Conehead, 1, 500.0);
    let projectile = scaffold::launch_projectile(&mut world, ProjectileKind::Pea, 1, 480.0);

    let events = tick(&mut world, Duration::from_millis(16));
    assert!(events.contains(&Event::ProjectileHit { projectile, zombie }));
    assert!(events.contains(&Event::ZombieDamaged {
        zombie,
        health: 180
    }));
    let flagged = query::projectiles(&world);
    assert_eq!(flagged.len(), 1);
    assert!(flagged[0].spent);

    let events = tick(&mut world, Duration::from_millis(16));
    assert!(events.contains(&Event::ProjectileRemoved { projectile }));
    assert!(!events
        .iter()
        .any(|event| matches!(event, Event::ProjectileHit { .. })));
    assert_eq!(
        query::zombie(&world, zombie).map(|snapshot| snapshot.health),
        Some(180)
    );
}

#[test]
fn projectile_in_another_lane_passes_by() {
    let mut world = World::new();
    let zombie = scaffold::place_zombie(&mut world, ZombieKind::Basic, 1, 500.0);
    let _ = scaffold::launch_projectile(&mut world, ProjectileKind::Pea, 0, 495.0);

    let events = tick(&mut world, Duration::from_millis(16));
    assert!(!events
        .iter()
        .any(|event| matches!(event, Event::ProjectileHit { .. })));
    assert_eq!(
        query::zombie(&world, zombie).map(|snapshot| snapshot.health),
        Some(100)
    );
}

#[test]
fn exceeding_the_plants_lost_limit_ends_the_session() {
    let mut world = world_with_rules(150, 0);
    let _ = run(
        &mut world,
        Command::PlacePlant {
            kind: PlantKind::CherryBomb,
            cell: CellCoord::new(0, 0),
        },
    );

    let events = tick(&mut world, Duration::from_secs(3));
    assert!(events.contains(&Event::SessionLost {
        reason: LossReason::PlantsLost { count: 1 },
        score: 0,
    }));
    assert_eq!(
        query::status(&world),
        SessionStatus::Lost {
            reason: LossReason::PlantsLost { count: 1 }
        }
    );
}

#[test]
fn health_never_increases_during_a_skirmish() {
    let mut world = world_with_rules(1_000, 10);
    for row in 0..3 {
        let _ = run(
            &mut world,
            Command::PlacePlant {
                kind: PlantKind::Peashooter,
                cell: CellCoord::new(0, row),
            },
        );
        let _ = run(
            &mut world,
            Command::PlacePlant {
                kind: PlantKind::WallNut,
                cell: CellCoord::new(3, row),
            },
        );
        let _ = run(
            &mut world,
            Command::SpawnZombie {
                kind: ZombieKind::Buckethead,
                lane: row,
            },
        );
    }

    let mut last_health = std::collections::BTreeMap::new();
    for _ in 0..2_000 {
        let events = tick(&mut world, Duration::from_millis(50));
        for event in events {
            let (key, health) = match event {
                Event::ZombieDamaged { zombie, health } => (("zombie", zombie.get()), health),
                Event::PlantDamaged { plant, health } => (("plant", plant.get()), health),
                _ => continue,
            };
            if let Some(previous) = last_health.insert(key, health) {
                assert!(health <= previous, "{key:?} healed from {previous} to {health}");
            }
        }
        if query::status(&world) != SessionStatus::Running {
            break;
        }
    }
    assert!(!last_health.is_empty());
}
