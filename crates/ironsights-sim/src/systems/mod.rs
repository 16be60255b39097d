//! Per-frame systems, invoked by the engine in a fixed order.

pub mod collision;
pub mod enemy;
pub mod player;
pub mod projectiles;
pub mod respawn;
pub mod snapshot;
