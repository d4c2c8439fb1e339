//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::PointerEvent;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave the start screen and begin playing.
    Start,
    /// Start over after a win or loss.
    Restart,
    /// Fire at a point already in playfield coordinates.
    Fire { x: f32, y: f32 },
    /// Fire at a raw pointer/tap position in device pixels.
    Pointer { event: PointerEvent },
}
