//! Systems that operate on the entity store each tick.
//!
//! Systems are plain functions over the store and the engine's counters.
//! They hold no state of their own.

pub mod explosion;
pub mod impact;
pub mod movement;
pub mod progression;
pub mod snapshot;
pub mod spawner;
pub mod targeting;
