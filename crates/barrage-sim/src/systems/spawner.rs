//! Rocket spawner: time-gated, level-scaled, aimed at a random live target.

use hecs::Entity;
use rand::Rng;

use barrage_core::components::Rocket;
use barrage_core::config::GameConfig;
use barrage_core::events::GameEvent;
use barrage_core::types::Position;

use crate::score::ScoreState;
use crate::store::{entity_id, EntityStore};

/// When the last rocket appeared, in host milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnClock {
    pub last_spawn_ms: f64,
}

/// Spawn a rocket if the level's interval has elapsed and something is left
/// to aim at. Neither condition failing is an error; the clock is only
/// reset by an actual spawn.
pub fn run<R: Rng + ?Sized>(
    store: &mut EntityStore,
    rng: &mut R,
    config: &GameConfig,
    clock: &mut SpawnClock,
    score: &mut ScoreState,
    now_ms: f64,
    events: &mut Vec<GameEvent>,
) -> Option<Entity> {
    let interval = config.spawn_interval_ms(score.level);
    if now_ms - clock.last_spawn_ms <= interval {
        return None;
    }

    let targets = store.active_targets();
    if targets.is_empty() {
        return None;
    }

    let target = targets[rng.gen_range(0..targets.len())];
    let x = rng.gen_range(0.0..config.playfield_width);

    let rocket = Rocket {
        target: target.position,
        speed: config.rocket_speed(score.level),
        progress: 0.0,
    };
    let entity = store.add_rocket(Position::new(x, 0.0), rocket, target.link);

    clock.last_spawn_ms = now_ms;
    score.rockets_spawned += 1;

    log::debug!(
        "rocket {} launched from x={x:.1} toward {:?} at ({:.0}, {:.0})",
        entity_id(entity),
        target.link.kind,
        target.position.x,
        target.position.y
    );
    events.push(GameEvent::RocketLaunched {
        id: entity_id(entity),
        x,
        target_kind: target.link.kind,
    });

    Some(entity)
}
