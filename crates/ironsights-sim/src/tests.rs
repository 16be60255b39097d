//! Tests for the simulation engine, world generation, combat rules,
//! and the respawn pipeline.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ironsights_assets::{BattlefieldData, WireModel};
use ironsights_core::components::{
    Bullet, BulletOwner, Chassis, Enemy, Heading, Player,
};
use ironsights_core::constants::{
    BATTLEFIELD_SIZE, BOUNDS_MARGIN, ENEMY_CAP, FLASH_DURATION, GRACE_END_DELAY_BASE,
    GRACE_END_DELAY_JITTER, INVULNERABILITY_SECS, MAX_FRAME_DT, MOUNTAIN_MAX_HEIGHT,
    MOUNTAIN_MIN_HEIGHT, MOUNTAIN_SEGMENTS, OBSTACLE_COUNT, PLAYER_SIZE, PLAYER_SPEED,
    RESPAWN_DELAY_BASE, RESPAWN_DELAY_JITTER,
};
use ironsights_core::events::AudioEvent;
use ironsights_core::input::InputState;
use ironsights_core::types::Position;

use crate::engine::{FrameClock, SimConfig, SimulationEngine};
use crate::systems::projectiles;
use crate::systems::respawn::SpawnSchedule;

const DT: f64 = 1.0 / 60.0;

fn test_assets() -> BattlefieldData {
    BattlefieldData {
        cube_positions: vec![-1.0, -1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0],
        enemy_tank: WireModel {
            vertices: vec![[0.0, 0.0, 1.0], [-0.5, 0.0, -1.0], [0.5, 0.0, -1.0]],
            edges: vec![[0, 1], [1, 2], [2, 0]],
        },
    }
}

fn new_engine(seed: u64) -> SimulationEngine {
    SimulationEngine::new(SimConfig { seed }, test_assets())
}

fn idle() -> InputState {
    InputState::default()
}

fn fire() -> InputState {
    InputState {
        fire: true,
        ..Default::default()
    }
}

fn forward() -> InputState {
    InputState {
        forward: true,
        ..Default::default()
    }
}

fn enemy_bullets(snapshot: &ironsights_core::state::FrameSnapshot) -> usize {
    snapshot
        .bullets
        .iter()
        .filter(|b| b.owner == BulletOwner::Enemy)
        .count()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = new_engine(12345);
    let mut engine_b = new_engine(12345);

    for frame in 0..300u64 {
        let input = InputState {
            forward: frame % 120 < 60,
            turn_left: frame % 90 < 30,
            fire: frame % 45 == 0,
            ..Default::default()
        };
        let snap_a = engine_a.step(&input, DT);
        let snap_b = engine_b.step(&input, DT);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = new_engine(111);
    let mut engine_b = new_engine(222);

    // World generation consumes the RNG, so even the first snapshots
    // carry different obstacle layouts.
    let snap_a = engine_a.step(&idle(), DT);
    let snap_b = engine_b.step(&idle(), DT);
    let json_a = serde_json::to_string(&snap_a).unwrap();
    let json_b = serde_json::to_string(&snap_b).unwrap();
    assert_ne!(json_a, json_b, "Different seeds produced identical worlds");
}

// ---- Frame timing ----

#[test]
fn test_dt_is_clamped() {
    let mut engine = new_engine(1);
    engine.step(&idle(), 1.0);
    assert_eq!(engine.time().elapsed_secs, MAX_FRAME_DT);
    assert_eq!(engine.time().frame, 1);

    engine.step(&idle(), -5.0);
    assert_eq!(engine.time().elapsed_secs, MAX_FRAME_DT);
    assert_eq!(engine.time().frame, 2);
}

#[test]
fn test_frame_clock_differences_and_clamps() {
    let mut clock = FrameClock::default();
    assert_eq!(clock.delta(10.0), 0.0);
    assert!((clock.delta(10.016) - 0.016).abs() < 1e-9);
    assert_eq!(clock.delta(11.0), MAX_FRAME_DT);
    // A backwards reading never produces a negative delta.
    assert_eq!(clock.delta(10.5), 0.0);
}

// ---- World generation ----

#[test]
fn test_world_generation_layout() {
    let mut engine = new_engine(7);
    let snapshot = engine.step(&idle(), DT);

    assert_eq!(snapshot.obstacles.len(), OBSTACLE_COUNT);
    for obstacle in &snapshot.obstacles {
        assert!(obstacle.position.x.abs() <= 51.1);
        assert!(obstacle.position.z.abs() <= 51.1);
    }

    assert_eq!(snapshot.enemies.len(), 1);
    assert_eq!(snapshot.player.position, Position::new(0.0, 0.0));
    assert_eq!(snapshot.player.heading, 0.0);
    assert!(snapshot.grace_period);
}

#[test]
fn test_mountain_ridge_shape() {
    let engine = new_engine(7);
    let ridge = engine.mountain_ridge();
    assert_eq!(ridge.len(), MOUNTAIN_SEGMENTS);
    for window in ridge.windows(2) {
        assert!(window[0].angle < window[1].angle);
    }
    for peak in ridge {
        assert!(peak.height >= MOUNTAIN_MIN_HEIGHT);
        assert!(peak.height <= MOUNTAIN_MAX_HEIGHT);
    }
}

// ---- Grace period ----

#[test]
fn test_grace_period_holds_until_first_shot() {
    let mut engine = new_engine(3);
    for _ in 0..10 {
        let snapshot = engine.step(&idle(), DT);
        assert!(snapshot.grace_period);
    }
}

#[test]
fn test_grace_period_blocks_enemy_fire() {
    let mut engine = new_engine(3);
    engine.clear_obstacles();
    engine.clear_enemies();
    engine.spawn_enemy_at(0.0, 20.0, 0.0, -1.0);

    for _ in 0..5 {
        let snapshot = engine.step(&idle(), DT);
        assert_eq!(enemy_bullets(&snapshot), 0);
    }
}

#[test]
fn test_first_shot_ends_grace_and_staggers_enemies() {
    let mut engine = new_engine(3);
    let snapshot = engine.step(&fire(), DT);
    assert!(!snapshot.grace_period);

    let now = engine.time().elapsed_secs;
    for (_entity, enemy) in engine.world().query::<&Enemy>().iter() {
        let delay = enemy.next_shot_at - now;
        assert!(delay >= GRACE_END_DELAY_BASE);
        assert!(delay < GRACE_END_DELAY_BASE + GRACE_END_DELAY_JITTER);
    }
}

// ---- Bullet exclusivity ----

#[test]
fn test_player_bullet_is_exclusive() {
    let mut engine = new_engine(5);
    engine.clear_obstacles();
    engine.clear_enemies();

    let mut shots = 0;
    for _ in 0..10 {
        let snapshot = engine.step(&fire(), DT);
        let live = snapshot
            .bullets
            .iter()
            .filter(|b| b.owner == BulletOwner::Player)
            .count();
        assert!(live <= 1);
        shots += snapshot
            .audio_events
            .iter()
            .filter(|e| matches!(e, AudioEvent::ShotFired { owner: BulletOwner::Player }))
            .count();
    }
    assert_eq!(shots, 1, "Held trigger refired while a bullet was live");
}

#[test]
fn test_enemy_bullet_is_exclusive() {
    let mut engine = new_engine(5);
    engine.clear_obstacles();
    engine.clear_enemies();
    engine.set_grace(false);
    engine.spawn_enemy_at(0.0, 20.0, 0.0, -1.0);
    engine.spawn_enemy_at(20.0, 0.0, 0.0, -1.0);

    let snapshot = engine.step(&idle(), DT);
    assert_eq!(enemy_bullets(&snapshot), 1);
    let shots = snapshot
        .audio_events
        .iter()
        .filter(|e| matches!(e, AudioEvent::ShotFired { owner: BulletOwner::Enemy }))
        .count();
    assert_eq!(shots, 1);
}

// ---- Kill and respawn pipeline ----

#[test]
fn test_kill_schedules_and_releases_respawn() {
    let mut engine = new_engine(9);
    engine.clear_obstacles();
    engine.clear_enemies();
    engine.spawn_enemy_at(0.0, 6.0, 0.0, 1000.0);

    let mut killed_at = None;
    for _ in 0..10 {
        let snapshot = engine.step(&fire(), DT);
        if snapshot
            .audio_events
            .iter()
            .any(|e| matches!(e, AudioEvent::EnemyDestroyed { .. }))
        {
            assert!(snapshot.enemies.is_empty());
            killed_at = Some(engine.time().elapsed_secs);
            break;
        }
    }
    let killed_at = killed_at.expect("bullet never reached the enemy");

    assert_eq!(engine.pending_respawns(), 1);
    let due = engine.respawn_due_times()[0];
    assert!(due >= killed_at + RESPAWN_DELAY_BASE);
    assert!(due < killed_at + RESPAWN_DELAY_BASE + RESPAWN_DELAY_JITTER);

    // Run past the due time; the replacement must appear.
    let mut respawned = false;
    for _ in 0..180 {
        let snapshot = engine.step(&idle(), DT);
        if !snapshot.enemies.is_empty() {
            respawned = true;
            assert!(engine.time().elapsed_secs >= due);
            break;
        }
    }
    assert!(respawned, "Replacement enemy never spawned");
}

#[test]
fn test_respawns_dropped_at_enemy_cap() {
    let mut engine = new_engine(9);
    for _ in 0..20 {
        engine.schedule_respawn(0.0);
    }
    let snapshot = engine.step(&idle(), DT);
    assert_eq!(snapshot.enemies.len(), ENEMY_CAP);
    assert_eq!(engine.pending_respawns(), 0);
}

// ---- Movement and collision ----

#[test]
fn test_blocked_move_is_all_or_nothing() {
    let mut engine = new_engine(2);
    engine.clear_obstacles();
    engine.clear_enemies();
    engine.spawn_obstacle_at(0.0, 2.0, 2.0);

    let mut last = Position::new(0.0, 0.0);
    for _ in 0..60 {
        let snapshot = engine.step(&forward(), DT);
        // Rejected moves leave the position untouched, so the player
        // parks short of the contact line rather than sliding onto it.
        assert!(snapshot.player.position.z < 0.5);
        last = snapshot.player.position;
    }
    let settled = engine.step(&forward(), DT).player.position;
    assert_eq!(settled.x, last.x);
    assert_eq!(settled.z, last.z);
}

#[test]
fn test_player_blocked_by_enemy_tank() {
    let mut engine = new_engine(2);
    engine.clear_obstacles();
    engine.clear_enemies();
    engine.spawn_enemy_at(0.0, 1.1, 0.0, 1000.0);

    for _ in 0..5 {
        let snapshot = engine.step(&forward(), DT);
        assert_eq!(snapshot.player.position, Position::new(0.0, 0.0));
    }
}

#[test]
fn test_actors_stay_in_bounds() {
    let mut engine = new_engine(99);
    let input = InputState {
        forward: true,
        turn_left: true,
        fire: true,
        ..Default::default()
    };
    let limit = BATTLEFIELD_SIZE - BOUNDS_MARGIN;
    for _ in 0..1200 {
        let snapshot = engine.step(&input, DT);
        assert!(snapshot.player.position.x.abs() <= limit);
        assert!(snapshot.player.position.z.abs() <= limit);
        for enemy in &snapshot.enemies {
            assert!(enemy.position.x.abs() <= limit);
            assert!(enemy.position.z.abs() <= limit);
        }
    }
}

#[test]
fn test_enemy_holds_at_standoff_range() {
    let mut engine = new_engine(2);
    engine.clear_obstacles();
    engine.clear_enemies();
    engine.spawn_enemy_at(0.0, 10.0, 0.0, 1000.0);

    let snapshot = engine.step(&idle(), DT);
    assert_eq!(snapshot.enemies.len(), 1);
    assert_eq!(snapshot.enemies[0].position, Position::new(0.0, 10.0));
    assert_ne!(snapshot.enemies[0].heading, 0.0);
}

// ---- Enemy fire gate ----

#[test]
fn test_fire_gate_only_suppresses_the_shot() {
    let mut engine = new_engine(4);
    engine.clear_obstacles();
    engine.clear_enemies();
    engine.set_grace(false);
    // Out of the fire envelope (corner to corner is over 70 units),
    // but the enemy still steers and closes.
    engine.spawn_enemy_at(50.0, 50.0, 0.0, -1.0);

    let snapshot = engine.step(&idle(), DT);
    assert_eq!(enemy_bullets(&snapshot), 0);
    let enemy = &snapshot.enemies[0];
    assert_ne!(enemy.heading, 0.0);
    assert_ne!(enemy.position, Position::new(50.0, 50.0));
}

#[test]
fn test_occlusion_blocks_enemy_fire() {
    let mut engine = new_engine(4);
    engine.clear_obstacles();
    engine.clear_enemies();
    engine.set_grace(false);
    engine.spawn_enemy_at(0.0, 50.0, std::f64::consts::PI, -1.0);
    engine.spawn_obstacle_at(0.0, 25.0, 2.0);

    let snapshot = engine.step(&idle(), DT);
    assert_eq!(enemy_bullets(&snapshot), 0);

    // With the obstacle gone the same enemy fires immediately; a
    // suppressed shot never consumed its cooldown.
    engine.clear_obstacles();
    let snapshot = engine.step(&idle(), DT);
    assert_eq!(enemy_bullets(&snapshot), 1);
}

// ---- Player hits and invulnerability ----

#[test]
fn test_hit_starts_flash_and_invulnerability() {
    let mut world = hecs::World::new();
    world.spawn((
        Player::default(),
        Position::new(0.0, 0.0),
        Heading::default(),
        Chassis {
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
        },
    ));
    world.spawn((
        Position::new(0.0, 0.5),
        Bullet {
            dir_x: 0.0,
            dir_z: -1.0,
            owner: BulletOwner::Enemy,
        },
    ));

    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut flash = 0.0;
    let mut respawns = SpawnSchedule::default();
    let mut events = Vec::new();
    projectiles::run(&mut world, &mut rng, 1.0, 0.0, &mut flash, &mut respawns, &mut events);

    assert_eq!(flash, FLASH_DURATION);
    assert_eq!(world.query::<&Bullet>().iter().count(), 0);
    assert_eq!(
        events.iter().filter(|e| matches!(e, AudioEvent::PlayerHit)).count(),
        1
    );
    let player = world
        .query::<&Player>()
        .iter()
        .next()
        .map(|(_, p)| *p)
        .unwrap();
    assert_eq!(player.invulnerable_until, 1.0 + INVULNERABILITY_SECS);
}

#[test]
fn test_invulnerability_absorbs_repeat_hits() {
    let mut world = hecs::World::new();
    world.spawn((
        Player::default(),
        Position::new(0.0, 0.0),
        Heading::default(),
        Chassis {
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
        },
    ));

    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut flash = 0.0;
    let mut respawns = SpawnSchedule::default();
    let mut events = Vec::new();

    let strike = |world: &mut hecs::World| {
        world.spawn((
            Position::new(0.0, 0.5),
            Bullet {
                dir_x: 0.0,
                dir_z: -1.0,
                owner: BulletOwner::Enemy,
            },
        ));
    };

    strike(&mut world);
    projectiles::run(&mut world, &mut rng, 1.0, 0.0, &mut flash, &mut respawns, &mut events);

    // Second hit inside the window: flash restarts, nothing else.
    flash = 0.3;
    strike(&mut world);
    projectiles::run(&mut world, &mut rng, 1.5, 0.0, &mut flash, &mut respawns, &mut events);

    assert_eq!(flash, FLASH_DURATION);
    let player = world
        .query::<&Player>()
        .iter()
        .next()
        .map(|(_, p)| *p)
        .unwrap();
    assert_eq!(player.invulnerable_until, 1.0 + INVULNERABILITY_SECS);
    assert_eq!(
        events.iter().filter(|e| matches!(e, AudioEvent::PlayerHit)).count(),
        1
    );
    assert_eq!(world.query::<&Bullet>().iter().count(), 0);
}

#[test]
fn test_flash_decays_to_zero() {
    let mut engine = new_engine(6);
    engine.clear_obstacles();
    engine.clear_enemies();
    engine.set_grace(false);
    engine.spawn_enemy_at(0.0, 12.0, std::f64::consts::PI, -1.0);

    let mut hit = false;
    for _ in 0..100 {
        let snapshot = engine.step(&idle(), DT);
        if snapshot.flash_timer > 0.0 {
            assert!(snapshot.flash_timer <= FLASH_DURATION);
            assert!(snapshot.player.invulnerable);
            hit = true;
            break;
        }
    }
    assert!(hit, "Enemy bullet never reached the player");

    let mut last = f64::MAX;
    for _ in 0..70 {
        let snapshot = engine.step(&idle(), DT);
        assert!(snapshot.flash_timer <= last);
        last = snapshot.flash_timer;
    }
    assert_eq!(last, 0.0);
}

// ---- Control inversion ----

#[test]
fn test_inversion_toggle_and_turn_mapping() {
    let mut engine = new_engine(8);
    engine.clear_obstacles();
    engine.clear_enemies();

    let toggle = InputState {
        toggle_invert: true,
        ..Default::default()
    };
    assert!(engine.step(&toggle, DT).inverted);
    assert!(engine.step(&idle(), DT).inverted);

    // Inverted left turn decreases the heading.
    let left = InputState {
        turn_left: true,
        ..Default::default()
    };
    let snapshot = engine.step(&left, DT);
    assert!(snapshot.player.heading < 0.0);

    assert!(!engine.step(&toggle, DT).inverted);
}

// ---- Aim lock ----

#[test]
fn test_aim_lock_tracks_forward_cone() {
    let mut engine = new_engine(8);
    engine.clear_obstacles();
    engine.clear_enemies();

    engine.spawn_enemy_at(0.0, 40.0, 0.0, 1000.0);
    assert!(engine.aim_locked());

    engine.clear_enemies();
    engine.spawn_enemy_at(-40.0, 0.0, 0.0, 1000.0);
    assert!(!engine.aim_locked());

    // Dead ahead but beyond aiming range.
    engine.clear_enemies();
    engine.spawn_enemy_at(0.0, 90.0, 0.0, 1000.0);
    assert!(!engine.aim_locked());
}
