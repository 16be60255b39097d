//! Simulation engine for IRONSIGHTS.
//!
//! Owns the hecs ECS world, advances it one clamped-delta frame at a
//! time in a fixed system order, and produces FrameSnapshots for the
//! rendering and audio layers. Completely headless, enabling
//! deterministic testing.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{FrameClock, SimConfig, SimulationEngine};
pub use ironsights_core as core;

#[cfg(test)]
mod tests;
