//! Events emitted by the simulation for presentation feedback.
//!
//! Events accumulate during a tick and ship with that tick's snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, TargetKind};
use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A rocket entered the playfield.
    RocketLaunched { id: u64, x: f32, target_kind: TargetKind },
    /// A turret fired.
    InterceptorLaunched { id: u64, turret: u32, target: Position },
    /// An interceptor reached its point and exploded.
    Detonation { id: u64, at: Position },
    /// A rocket was caught by an explosion.
    RocketDestroyed { id: u64, at: Position, reward: u32 },
    /// A rocket reached its target.
    Impact { id: u64, target_kind: TargetKind, target_index: u32 },
    /// Difficulty increased and turrets were restocked.
    LevelUp { level: u32 },
    /// The game phase changed.
    PhaseChanged { from: GamePhase, to: GamePhase },
}
