//! Simulation constants and tuning parameters.

// --- World bounds ---

/// Battlefield half-extent. Positions live in the square
/// [-BATTLEFIELD_SIZE, BATTLEFIELD_SIZE] on both axes.
pub const BATTLEFIELD_SIZE: f64 = 60.0;

/// Actor positions are clamped to BATTLEFIELD_SIZE minus this margin
/// after a successful move.
pub const BOUNDS_MARGIN: f64 = 1.0;

/// Enemy spawn positions are clamped to BATTLEFIELD_SIZE minus this
/// larger margin so fresh enemies never appear wedged into a wall.
pub const SPAWN_MARGIN: f64 = 4.0;

// --- Frame timing ---

/// Ceiling on the per-frame time delta (seconds). Frame hitches are
/// clamped to this to bound per-step displacement.
pub const MAX_FRAME_DT: f64 = 0.05;

// --- Player ---

/// Player collision diameter.
pub const PLAYER_SIZE: f64 = 1.0;

/// Player movement speed (units/s).
pub const PLAYER_SPEED: f64 = 12.0;

/// Player turn rate (rad/s).
pub const PLAYER_TURN_RATE: f64 = 0.5;

/// Bullet spawn offset ahead of the player's position.
pub const MUZZLE_OFFSET: f64 = 0.8;

/// Window during which repeated enemy hits are suppressed (seconds).
pub const INVULNERABILITY_SECS: f64 = 2.0;

/// Hit-flash timer value set when an enemy bullet strikes the player.
pub const FLASH_DURATION: f64 = 1.0;

// --- Enemies ---

/// Enemy collision diameter.
pub const ENEMY_SIZE: f64 = 1.0;

/// Base enemy movement speed (units/s); each spawn adds jitter.
pub const ENEMY_BASE_SPEED: f64 = 1.6;

/// Uniform jitter added to the base speed at spawn.
pub const ENEMY_SPEED_JITTER: f64 = 0.3;

/// Maximum enemy angular rate toward the player (rad/s).
pub const ENEMY_TURN_RATE: f64 = 1.8;

/// Wander noise amplitude: heading shifts by U(-0.5, 0.5) times this
/// per second.
pub const ENEMY_WANDER_RATE: f64 = 0.3;

/// Enemies hold position once within this distance of the player.
pub const ENEMY_STANDOFF: f64 = 15.0;

/// Delay before a newly spawned enemy may take its first shot.
pub const ENEMY_FIRST_SHOT_DELAY: f64 = 2.0;

/// Base cooldown between enemy shots (seconds).
pub const ENEMY_COOLDOWN_BASE: f64 = 3.3;

/// Uniform jitter added to the cooldown.
pub const ENEMY_COOLDOWN_JITTER: f64 = 2.0;

/// Base delay applied to every enemy's next shot when the grace period
/// ends on the player's first shot.
pub const GRACE_END_DELAY_BASE: f64 = 1.0;

/// Uniform jitter added to the grace-end delay.
pub const GRACE_END_DELAY_JITTER: f64 = 2.0;

/// Enemies will not fire at targets closer than this.
pub const ENEMY_MIN_FIRE_RANGE: f64 = 10.0;

/// Enemies will not fire at targets farther than this.
pub const ENEMY_MAX_FIRE_RANGE: f64 = 60.0;

/// Clearance added to an obstacle's half-size in the occlusion test.
pub const OCCLUSION_CLEARANCE: f64 = 0.8;

/// Upper bound on live enemies; due respawns are dropped at the cap.
pub const ENEMY_CAP: usize = 8;

// --- Enemy spawning ---

/// Minimum spawn distance from the player.
pub const SPAWN_MIN_DISTANCE: f64 = 35.0;

/// Maximum spawn distance from the player.
pub const SPAWN_MAX_DISTANCE: f64 = 80.0;

/// Spawns land behind the player within this half-arc (radians).
pub const SPAWN_ARC_HALF_WIDTH: f64 = 0.75;

/// Base delay before a killed enemy's replacement spawns.
pub const RESPAWN_DELAY_BASE: f64 = 1.0;

/// Uniform jitter added to the respawn delay.
pub const RESPAWN_DELAY_JITTER: f64 = 1.0;

// --- Bullets ---

/// Bullet travel speed (units/s).
pub const BULLET_SPEED: f64 = 60.0;

/// Impact tolerance added to an obstacle's half-size for bullet hits.
pub const BULLET_OBSTACLE_TOLERANCE: f64 = 0.6;

/// A player bullet within this distance of an enemy destroys it.
pub const ENEMY_HIT_RADIUS: f64 = 1.5;

/// An enemy bullet within this distance of the player registers a hit.
pub const PLAYER_HIT_RADIUS: f64 = 1.3;

// --- Obstacles ---

/// Number of obstacles generated at world start.
pub const OBSTACLE_COUNT: usize = 12;

/// Inner radius of the obstacle placement ring.
pub const OBSTACLE_RING_MIN: f64 = 20.0;

/// Outer radius of the obstacle placement ring.
pub const OBSTACLE_RING_MAX: f64 = 50.0;

/// Obstacle collision diameter.
pub const OBSTACLE_SIZE: f64 = 2.0;

/// Positional jitter applied to each obstacle axis: U(-0.5, 0.5) * 2.
pub const OBSTACLE_JITTER: f64 = 2.0;

// --- Mountain ridge ---

/// Number of silhouette segments around the horizon.
pub const MOUNTAIN_SEGMENTS: usize = 64;

/// Lowest possible starting peak height for the ridge random walk.
pub const MOUNTAIN_BASE_HEIGHT: f64 = 0.35;

/// Uniform jitter added to the starting peak height.
pub const MOUNTAIN_BASE_JITTER: f64 = 0.2;

/// Lower clamp on peak height.
pub const MOUNTAIN_MIN_HEIGHT: f64 = 0.2;

/// Upper clamp on peak height.
pub const MOUNTAIN_MAX_HEIGHT: f64 = 0.55;

/// Per-segment random walk amplitude on peak height.
pub const MOUNTAIN_HEIGHT_STEP: f64 = 0.15;

// --- Aiming (crosshair query) ---

/// Maximum range for the forward aim-cone query.
pub const AIM_MAX_RANGE: f64 = 80.0;

/// Angular tolerance of the aim cone (radians).
pub const AIM_TOLERANCE: f64 = 0.05;
