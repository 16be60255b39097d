//! Battlefield asset loading for IRONSIGHTS.
//!
//! Parses and validates the static geometry payload: the obstacle cube
//! template and the enemy tank wireframe. Validation happens up front:
//! a malformed payload fails initialization and the simulation never
//! starts with a partial world.

mod battlefield;

pub use battlefield::{load_battlefield, parse_battlefield, BattlefieldData, WireModel};
