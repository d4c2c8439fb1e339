//! Frame loop thread: drives the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is built and validated on the caller's thread, then moved into
//! the loop thread, which is its only owner. Commands arrive via `mpsc`.
//! Snapshots go to a `SnapshotSink` and are stored for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use barrage_core::commands::PlayerCommand;
use barrage_core::constants::FRAME_RATE;
use barrage_core::state::GameStateSnapshot;
use barrage_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, LoopError, SharedSnapshot, SnapshotSink};

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Handle to a running frame loop. Dropping it stops and joins the thread.
pub struct FrameLoop {
    cmd_tx: mpsc::Sender<GameLoopCommand>,
    latest_snapshot: SharedSnapshot,
    handle: Option<JoinHandle<()>>,
}

impl FrameLoop {
    /// Validate `config`, build the engine and start the loop thread.
    pub fn spawn<S: SnapshotSink>(config: SimConfig, sink: S) -> Result<Self, LoopError> {
        let engine = SimulationEngine::new(config)?;
        let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
        let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));

        let shared = Arc::clone(&latest_snapshot);
        let handle = std::thread::Builder::new()
            .name("barrage-frame-loop".into())
            .spawn(move || run_frame_loop(engine, cmd_rx, sink, &shared))
            .map_err(LoopError::Spawn)?;

        log::info!("frame loop started at {FRAME_RATE}Hz");
        Ok(Self {
            cmd_tx,
            latest_snapshot,
            handle: Some(handle),
        })
    }

    /// Forward a player command to the engine.
    pub fn send(&self, command: PlayerCommand) -> Result<(), LoopError> {
        self.cmd_tx
            .send(GameLoopCommand::Player(command))
            .map_err(|_| LoopError::Disconnected)
    }

    /// The snapshot from the most recent frame, if any frame has run.
    pub fn latest_snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the loop and wait for the thread to exit. Safe to call twice.
    pub fn stop(&mut self) -> Result<(), LoopError> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        // The thread may already be gone; joining still reaps it.
        let _ = self.cmd_tx.send(GameLoopCommand::Shutdown);
        handle.join().map_err(|_| LoopError::Panicked)?;
        log::info!("frame loop stopped");
        Ok(())
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            log::error!("{e}");
        }
    }
}

/// The frame loop. Runs until Shutdown or until every sender is gone.
fn run_frame_loop<S: SnapshotSink>(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    mut sink: S,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let started = Instant::now();
    let mut next_frame_time = started;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. One simulation step against the loop's own clock
        let now_ms = started.elapsed().as_secs_f64() * 1000.0;
        let snapshot = engine.advance(now_ms);

        // 3. Present
        sink.present(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind; reset instead of bursting frames
            next_frame_time = now;
        }
    }
}
