//! World generation: player, obstacle ring, mountain ridge, and the
//! enemy spawn factory.

use std::f64::consts::{PI, TAU};

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use ironsights_core::components::{Chassis, Enemy, Heading, Obstacle, Player};
use ironsights_core::constants::{
    BATTLEFIELD_SIZE, ENEMY_BASE_SPEED, ENEMY_FIRST_SHOT_DELAY, ENEMY_SIZE, ENEMY_SPEED_JITTER,
    MOUNTAIN_BASE_HEIGHT, MOUNTAIN_BASE_JITTER, MOUNTAIN_HEIGHT_STEP, MOUNTAIN_MAX_HEIGHT,
    MOUNTAIN_MIN_HEIGHT, MOUNTAIN_SEGMENTS, OBSTACLE_COUNT, OBSTACLE_JITTER, OBSTACLE_RING_MAX,
    OBSTACLE_RING_MIN, OBSTACLE_SIZE, PLAYER_SIZE, PLAYER_SPEED, SPAWN_ARC_HALF_WIDTH,
    SPAWN_MARGIN, SPAWN_MAX_DISTANCE, SPAWN_MIN_DISTANCE,
};
use ironsights_core::types::{MountainPeak, Position};

use crate::systems::player;

/// Populate a fresh world: player at the origin, the obstacle ring,
/// and one enemy so the arena is never empty.
pub fn setup_battlefield(world: &mut World, rng: &mut ChaCha8Rng) {
    spawn_player(world);
    build_obstacles(world, rng);
    spawn_enemy(world, rng, 0.0);
}

/// Spawn the player's tank at the origin, facing +Z.
pub fn spawn_player(world: &mut World) -> Entity {
    world.spawn((
        Player::default(),
        Position::new(0.0, 0.0),
        Heading::default(),
        Chassis {
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
        },
    ))
}

/// Scatter obstacles on a ring around the origin with per-axis jitter.
fn build_obstacles(world: &mut World, rng: &mut ChaCha8Rng) {
    for _ in 0..OBSTACLE_COUNT {
        let angle: f64 = rng.gen_range(0.0..TAU);
        let radius: f64 = rng.gen_range(OBSTACLE_RING_MIN..OBSTACLE_RING_MAX);
        let x = angle.cos() * radius + (rng.gen::<f64>() - 0.5) * OBSTACLE_JITTER;
        let z = angle.sin() * radius + (rng.gen::<f64>() - 0.5) * OBSTACLE_JITTER;
        world.spawn((Position::new(x, z), Obstacle { size: OBSTACLE_SIZE }));
    }
}

/// Generate the horizon silhouette: a height random walk around the
/// compass, clamped to keep the ridge visible but never towering.
pub fn build_mountain_ridge(rng: &mut ChaCha8Rng) -> Vec<MountainPeak> {
    let mut peaks = Vec::with_capacity(MOUNTAIN_SEGMENTS);
    let mut height = MOUNTAIN_BASE_HEIGHT + rng.gen::<f64>() * MOUNTAIN_BASE_JITTER;
    for segment in 0..MOUNTAIN_SEGMENTS {
        let angle = segment as f64 / MOUNTAIN_SEGMENTS as f64 * TAU;
        height += (rng.gen::<f64>() - 0.5) * MOUNTAIN_HEIGHT_STEP;
        height = height.clamp(MOUNTAIN_MIN_HEIGHT, MOUNTAIN_MAX_HEIGHT);
        peaks.push(MountainPeak { angle, height });
    }
    peaks
}

/// Spawn an enemy behind the player, outside the immediate view, with
/// randomized heading and speed. Its first shot waits out a fixed
/// delay from `now`.
pub fn spawn_enemy(world: &mut World, rng: &mut ChaCha8Rng, now: f64) -> Option<Entity> {
    let (player_pos, player_heading) = player::player_pose(world)?;

    let angle = player_heading + PI + rng.gen_range(-SPAWN_ARC_HALF_WIDTH..SPAWN_ARC_HALF_WIDTH);
    let distance = rng.gen_range(SPAWN_MIN_DISTANCE..SPAWN_MAX_DISTANCE);
    let mut position = Position::new(
        player_pos.x + angle.sin() * distance,
        player_pos.z + angle.cos() * distance,
    );
    position.clamp_to(BATTLEFIELD_SIZE - SPAWN_MARGIN);

    Some(world.spawn((
        Enemy {
            next_shot_at: now + ENEMY_FIRST_SHOT_DELAY,
        },
        position,
        Heading {
            radians: rng.gen_range(0.0..TAU),
        },
        Chassis {
            size: ENEMY_SIZE,
            speed: ENEMY_BASE_SPEED + rng.gen::<f64>() * ENEMY_SPEED_JITTER,
        },
    )))
}
