//! State shared between the host and the frame loop thread.

use std::sync::{Arc, Mutex};

use barrage_core::commands::PlayerCommand;
use barrage_core::config::ConfigError;
use barrage_core::state::GameStateSnapshot;

/// Commands sent from the host to the frame loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the frame loop thread.
    Shutdown,
}

/// Latest snapshot, written by the loop thread after every frame.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Presentation boundary. Receives every snapshot on the loop thread.
pub trait SnapshotSink: Send + 'static {
    fn present(&mut self, snapshot: &GameStateSnapshot);
}

impl<F> SnapshotSink for F
where
    F: FnMut(&GameStateSnapshot) + Send + 'static,
{
    fn present(&mut self, snapshot: &GameStateSnapshot) {
        self(snapshot)
    }
}

/// Errors from starting or talking to the frame loop.
#[derive(Debug, thiserror::Error)]
pub enum LoopError {
    #[error("invalid game config: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to spawn frame loop thread: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("frame loop is not running")]
    Disconnected,
    #[error("frame loop thread panicked")]
    Panicked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_sink() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let mut sink = move |_: &GameStateSnapshot| {
            counter.fetch_add(1, Ordering::Relaxed);
        };
        sink.present(&GameStateSnapshot::default());
        sink.present(&GameStateSnapshot::default());
        assert_eq!(seen.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_error_messages() {
        let err = LoopError::from(ConfigError::NoTurrets);
        assert!(err.to_string().starts_with("invalid game config"));
        assert_eq!(LoopError::Disconnected.to_string(), "frame loop is not running");
    }
}
