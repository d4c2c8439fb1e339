//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to start.
    #[default]
    Start,
    /// Simulation running.
    Playing,
    /// Score reached the target.
    Won,
    /// Every turret was destroyed.
    Lost,
}

impl GamePhase {
    /// Whether the game has reached an end state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// What a rocket was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    City,
    Turret,
}
