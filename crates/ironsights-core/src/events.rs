//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::components::BulletOwner;
use crate::types::Position;

/// Audio events for the frontend sound system. The core never plays
/// sound; it reports what happened and the host decides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A bullet left a barrel.
    ShotFired { owner: BulletOwner },
    /// A player bullet destroyed an enemy tank.
    EnemyDestroyed { position: Position },
    /// An enemy bullet struck the player outside the invulnerability
    /// window.
    PlayerHit,
}
