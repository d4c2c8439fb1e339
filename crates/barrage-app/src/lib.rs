//! BARRAGE host application.
//!
//! Runs the simulation on a frame loop thread and hands snapshots to a
//! presentation sink. Ships a headless demo with a simple autoplayer.

pub mod autoplay;
pub mod game_loop;
pub mod state;

pub use barrage_core as core;
pub use game_loop::FrameLoop;
