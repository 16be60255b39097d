//! Angle normalization and bounded rotation.

/// Wrap an angle to (-pi, pi].
pub fn normalize_angle(a: f64) -> f64 {
    a.sin().atan2(a.cos())
}

/// Rotate `current` toward `target` by at most `max_turn` radians,
/// returning the normalized result. The turn takes the short way
/// around.
pub fn rotate_toward(current: f64, target: f64, max_turn: f64) -> f64 {
    let delta = normalize_angle(target - current).clamp(-max_turn, max_turn);
    normalize_angle(current + delta)
}
