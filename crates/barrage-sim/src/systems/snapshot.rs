//! Snapshot system: reads the store and builds a complete GameStateSnapshot.
//!
//! This system is read-only.

use barrage_core::components::*;
use barrage_core::config::GameConfig;
use barrage_core::enums::GamePhase;
use barrage_core::events::GameEvent;
use barrage_core::state::*;
use barrage_core::types::{Position, SimTime};

use crate::score::ScoreState;
use crate::store::{entity_id, EntityStore};

/// Build a complete GameStateSnapshot from the current store.
pub fn build_snapshot(
    store: &EntityStore,
    time: &SimTime,
    phase: GamePhase,
    score: &ScoreState,
    config: &GameConfig,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        score: score.score,
        level: score.level,
        target_score: config.target_score,
        stats: score.stats(),
        rockets: build_rockets(store),
        interceptors: build_interceptors(store),
        explosions: build_explosions(store),
        cities: build_cities(store),
        turrets: build_turrets(store),
        events,
    }
}

fn build_rockets(store: &EntityStore) -> Vec<RocketView> {
    let mut rockets: Vec<RocketView> = store
        .world()
        .query::<(&Position, &Rocket)>()
        .iter()
        .map(|(entity, (pos, rocket))| RocketView {
            id: entity_id(entity),
            position: *pos,
            target: rocket.target,
            progress: rocket.progress,
        })
        .collect();
    rockets.sort_by_key(|r| r.id);
    rockets
}

fn build_interceptors(store: &EntityStore) -> Vec<InterceptorView> {
    let mut interceptors: Vec<InterceptorView> = store
        .world()
        .query::<(&Position, &Interceptor)>()
        .iter()
        .map(|(entity, (pos, interceptor))| InterceptorView {
            id: entity_id(entity),
            position: *pos,
            origin: interceptor.origin,
            target: interceptor.target,
            progress: interceptor.progress,
        })
        .collect();
    interceptors.sort_by_key(|i| i.id);
    interceptors
}

fn build_explosions(store: &EntityStore) -> Vec<ExplosionView> {
    let mut explosions: Vec<ExplosionView> = store
        .world()
        .query::<(&Position, &Explosion)>()
        .iter()
        .map(|(entity, (pos, explosion))| ExplosionView {
            id: entity_id(entity),
            position: *pos,
            radius: explosion.radius,
            max_radius: explosion.max_radius,
            life: explosion.life,
        })
        .collect();
    explosions.sort_by_key(|e| e.id);
    explosions
}

/// Cities in layout order.
fn build_cities(store: &EntityStore) -> Vec<CityView> {
    let world = store.world();
    store
        .city_ids()
        .iter()
        .filter_map(|&entity| {
            let city = *world.get::<&City>(entity).ok()?;
            Some(CityView {
                id: entity_id(entity),
                index: city.index,
                position: store.position(entity)?,
                active: city.active,
            })
        })
        .collect()
}

/// Turrets in layout order.
fn build_turrets(store: &EntityStore) -> Vec<TurretView> {
    let world = store.world();
    store
        .turret_ids()
        .iter()
        .filter_map(|&entity| {
            let turret = *world.get::<&Turret>(entity).ok()?;
            Some(TurretView {
                id: entity_id(entity),
                index: turret.index,
                position: store.position(entity)?,
                ammo: turret.ammo,
                max_ammo: turret.max_ammo,
                active: turret.active,
            })
        })
        .collect()
}
