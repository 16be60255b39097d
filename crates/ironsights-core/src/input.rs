//! Resolved player input for one frame.

use serde::{Deserialize, Serialize};

/// The set of logical actions held during one frame, polled by the
/// host before the simulation steps. The core never touches input
/// devices; it only consumes this snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub turn_left: bool,
    pub turn_right: bool,
    pub forward: bool,
    pub backward: bool,
    pub fire: bool,
    /// Edge-triggered: true only on the frame the inversion key was
    /// pressed. Flips the control-inversion toggle.
    pub toggle_invert: bool,
}
