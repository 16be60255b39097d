//! Frame snapshot: the complete visible state handed to the
//! rendering and audio layers after each step.

use serde::{Deserialize, Serialize};

use crate::components::BulletOwner;
use crate::events::AudioEvent;
use crate::types::{Position, SimTime};

/// Read-only view of one simulation frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub obstacles: Vec<ObstacleView>,
    /// Hit-flash timer, decaying toward zero; drives the cracked-glass
    /// overlay.
    pub flash_timer: f64,
    /// Control-inversion toggle state (also flips the HUD palette).
    pub inverted: bool,
    /// True until the player's first shot.
    pub grace_period: bool,
    /// True when an enemy sits inside the forward aim cone; switches
    /// the crosshair style.
    pub aim_locked: bool,
    /// Events raised during this step, drained into the snapshot.
    pub audio_events: Vec<AudioEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub heading: f64,
    /// True while enemy hits are being absorbed.
    pub invulnerable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub heading: f64,
    pub size: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Position,
    pub dir_x: f64,
    pub dir_z: f64,
    pub owner: BulletOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub position: Position,
    pub size: f64,
}
