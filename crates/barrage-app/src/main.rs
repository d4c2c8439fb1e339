use std::time::{Duration, Instant};

use barrage_app::autoplay;
use barrage_app::state::LoopError;
use barrage_app::FrameLoop;
use barrage_core::commands::PlayerCommand;
use barrage_core::config::GameConfig;
use barrage_core::events::GameEvent;
use barrage_core::state::GameStateSnapshot;
use barrage_sim::engine::SimConfig;

/// Give up on a session that has not ended after this long.
const SESSION_LIMIT: Duration = Duration::from_secs(600);
/// Minimum gap between autoplayer shots.
const SHOT_COOLDOWN: Duration = Duration::from_millis(250);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), LoopError> {
    let game = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading config from {path}");
            GameConfig::load(&path)?
        }
        None => GameConfig::default(),
    };
    let seed = std::env::var("BARRAGE_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(SimConfig::default().seed);
    log::info!("seed {seed}");

    let mut frame_loop = FrameLoop::spawn(SimConfig { seed, game }, log_events)?;
    frame_loop.send(PlayerCommand::Start)?;

    let started = Instant::now();
    let mut last_shot = started;
    let outcome = loop {
        std::thread::sleep(Duration::from_millis(10));
        let Some(snapshot) = frame_loop.latest_snapshot() else {
            continue;
        };
        if snapshot.phase.is_terminal() {
            break Some(snapshot);
        }
        if started.elapsed() > SESSION_LIMIT {
            break None;
        }
        if last_shot.elapsed() >= SHOT_COOLDOWN {
            if let Some(aim) = autoplay::choose_shot(&snapshot) {
                frame_loop.send(PlayerCommand::Fire { x: aim.x, y: aim.y })?;
                last_shot = Instant::now();
            }
        }
    };
    frame_loop.stop()?;

    match outcome {
        Some(snapshot) => log::info!(
            "{:?} with score {} at level {} after {} ticks ({} destroyed, {} impacts, {} fired, {}/{} cities standing)",
            snapshot.phase,
            snapshot.score,
            snapshot.level,
            snapshot.time.tick,
            snapshot.stats.rockets_destroyed,
            snapshot.stats.rockets_impacted,
            snapshot.stats.interceptors_fired,
            snapshot.active_cities(),
            snapshot.cities.len()
        ),
        None => log::warn!("session limit reached without a result"),
    }
    Ok(())
}

fn log_events(snapshot: &GameStateSnapshot) {
    for event in &snapshot.events {
        match event {
            GameEvent::Impact {
                target_kind,
                target_index,
                ..
            } => log::info!("{target_kind:?} {target_index} destroyed"),
            GameEvent::LevelUp { level } => log::info!("level {level}"),
            _ => {}
        }
    }
}
