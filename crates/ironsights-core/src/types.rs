//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position on the ground plane. Heights are visual-only and never
/// enter the simulation, so only x and z are carried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Euclidean distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Bearing to another position in radians (0 = +Z axis).
    pub fn bearing_to(&self, other: &Position) -> f64 {
        (other.x - self.x).atan2(other.z - self.z)
    }

    /// Clamp both coordinates to [-limit, limit].
    pub fn clamp_to(&mut self, limit: f64) {
        self.x = self.x.clamp(-limit, limit);
        self.z = self.z.clamp(-limit, limit);
    }
}

/// Square-footprint overlap test. Two footprints overlap iff both
/// axis separations are within the sum of half-sizes (Chebyshev, not
/// circular).
pub fn footprints_overlap(a: &Position, half_a: f64, b: &Position, half_b: f64) -> bool {
    let reach = half_a + half_b;
    (a.x - b.x).abs() <= reach && (a.z - b.z).abs() <= reach
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Frame counter (increments by 1 each step).
    pub frame: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }
}

/// One segment of the horizon silhouette: angle around the compass and
/// the peak height at that angle. Generated once at world start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MountainPeak {
    pub angle: f64,
    pub height: f64,
}
