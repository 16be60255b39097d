//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic; the systems
//! in ironsights-sim own all behavior.

use serde::{Deserialize, Serialize};

/// Marks the player's tank and carries its hit-suppression window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Player {
    /// Absolute simulation time before which enemy hits are absorbed
    /// without re-triggering effects. Monotonically non-decreasing.
    pub invulnerable_until: f64,
}

/// Marks an enemy tank and carries its fire cooldown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Absolute simulation time at which this enemy may next fire.
    pub next_shot_at: f64,
}

/// Collision and movement parameters shared by player and enemies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Chassis {
    /// Collision diameter; the square footprint has half-size size/2.
    pub size: f64,
    /// Movement speed (units/s).
    pub speed: f64,
}

impl Chassis {
    /// Footprint half-size.
    pub fn half_size(&self) -> f64 {
        self.size / 2.0
    }
}

/// Facing direction in radians (0 = +Z axis).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Heading {
    pub radians: f64,
}

/// A static collidable block. Immutable after world generation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    /// Collision diameter.
    pub size: f64,
}

impl Obstacle {
    /// Footprint half-size.
    pub fn half_size(&self) -> f64 {
        self.size / 2.0
    }
}

/// Which side fired a bullet. At most one bullet per owner may be
/// live at any time; the fire operations enforce this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    Enemy,
}

/// A projectile in flight. Ephemeral: created on fire, destroyed on
/// leaving the battlefield or on impact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    /// Normalized travel direction.
    pub dir_x: f64,
    pub dir_z: f64,
    pub owner: BulletOwner,
}
