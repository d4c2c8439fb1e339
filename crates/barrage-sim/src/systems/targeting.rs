//! Input resolver: pick the firing turret for a player-chosen point and launch.

use hecs::Entity;

use barrage_core::components::{Interceptor, Turret};
use barrage_core::config::GameConfig;
use barrage_core::events::GameEvent;
use barrage_core::types::Position;

use crate::store::{entity_id, EntityStore};

/// The active turret horizontally closest to `point`. Ties go to the
/// earlier turret in layout order.
pub fn nearest_active_turret(store: &EntityStore, point: Position) -> Option<Entity> {
    let world = store.world();
    let mut best: Option<(Entity, f32)> = None;

    for &entity in store.turret_ids() {
        let active = world.get::<&Turret>(entity).map_or(false, |t| t.active);
        if !active {
            continue;
        }
        let Some(position) = store.position(entity) else {
            continue;
        };
        let distance = position.horizontal_distance_to(&point);
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((entity, distance));
        }
    }

    best.map(|(entity, _)| entity)
}

/// Fire from the nearest active turret toward `point`.
///
/// The firing turret is the active turret with the smallest `|turret.x - point.x|`;
/// on a tie the earlier turret in layout order wins. Ammo plays no part in
/// the choice: if the chosen turret is empty the shot is dropped, its ammo
/// stays at zero and the next-nearest turret is not tried. Returns the new
/// interceptor on launch.
pub fn fire(
    store: &mut EntityStore,
    point: Position,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) -> Option<Entity> {
    let turret_entity = nearest_active_turret(store, point)?;
    let origin = store.position(turret_entity)?;

    let turret_index = {
        let mut turret = store.world().get::<&mut Turret>(turret_entity).ok()?;
        if turret.ammo == 0 {
            log::debug!("turret {} is empty, shot ignored", turret.index);
            return None;
        }
        turret.ammo -= 1;
        turret.index
    };

    let interceptor = store.add_interceptor(Interceptor {
        origin,
        target: point,
        speed: config.interceptor_speed,
        progress: 0.0,
        turret: turret_index,
    });

    log::debug!(
        "turret {turret_index} fired interceptor {} at ({:.0}, {:.0})",
        entity_id(interceptor),
        point.x,
        point.y
    );
    events.push(GameEvent::InterceptorLaunched {
        id: entity_id(interceptor),
        turret: turret_index,
        target: point,
    });

    Some(interceptor)
}
