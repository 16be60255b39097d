//! Enemy AI for IRONSIGHTS.
//!
//! Pure steering and gunnery functions: bounded rotation toward a
//! bearing, the fire-gate range envelope, and segment occlusion.
//! No ECS dependency; operates on plain data.

pub mod gunnery;
pub mod steering;

pub use ironsights_core as core;
