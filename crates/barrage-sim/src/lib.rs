//! Simulation engine for BARRAGE.
//!
//! Owns the hecs world, runs systems once per host frame,
//! and produces GameStateSnapshots for the presentation layer.

pub mod engine;
pub mod kinematics;
pub mod score;
pub mod store;
pub mod systems;

pub use barrage_core as core;
pub use engine::{SimConfig, SimulationEngine};
