//! Fire-gate evaluation: range envelope, segment occlusion, and the
//! forward aim-cone query used by the crosshair.

use glam::DVec2;

use ironsights_core::constants::{
    AIM_MAX_RANGE, AIM_TOLERANCE, ENEMY_MAX_FIRE_RANGE, ENEMY_MIN_FIRE_RANGE, OCCLUSION_CLEARANCE,
};

/// Outcome of evaluating a shot from shooter to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotAssessment {
    /// Range and sightline both permit firing.
    Clear,
    /// Target closer than the minimum or beyond the maximum
    /// engagement range.
    OutOfEnvelope,
    /// An obstacle sits on the shooter-to-target segment.
    Occluded,
}

/// Evaluate whether a shot from `shooter` to `target` is viable.
///
/// Obstacles are (center, half_size) pairs. An obstacle blocks the
/// shot when its projection onto the shooter-to-target segment falls
/// strictly between the endpoints and its perpendicular offset from
/// the segment is within half_size plus a clearance margin.
///
/// A coincident shooter and target (zero range) report
/// `OutOfEnvelope`; the degenerate direction is never formed.
pub fn assess_shot(shooter: DVec2, target: DVec2, obstacles: &[(DVec2, f64)]) -> ShotAssessment {
    let to_target = target - shooter;
    let range = to_target.length();
    if range < ENEMY_MIN_FIRE_RANGE || range > ENEMY_MAX_FIRE_RANGE {
        return ShotAssessment::OutOfEnvelope;
    }

    let dir = to_target / range;
    for &(center, half_size) in obstacles {
        let rel = center - shooter;
        let along = rel.dot(dir);
        if along > 0.0 && along < range {
            let offset = rel.perp_dot(dir).abs();
            if offset < half_size + OCCLUSION_CLEARANCE {
                return ShotAssessment::Occluded;
            }
        }
    }

    ShotAssessment::Clear
}

/// Pure crosshair query: is `target` inside the narrow forward cone
/// and within aiming range of an observer at `origin` facing
/// `heading`? Side-effect free; distinct from the enemy fire gate.
pub fn in_aim_cone(origin: DVec2, heading: f64, target: DVec2) -> bool {
    let to_target = target - origin;
    let range = to_target.length();
    if range <= 0.0 || range > AIM_MAX_RANGE {
        return false;
    }
    let forward = DVec2::new(heading.sin(), heading.cos());
    let dot = forward.dot(to_target / range).clamp(-1.0, 1.0);
    dot.acos() < AIM_TOLERANCE
}
