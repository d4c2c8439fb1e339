//! Impact system: rockets that completed their path knock out their target.

use barrage_core::components::{City, Turret};
use barrage_core::enums::TargetKind;
use barrage_core::events::GameEvent;

use crate::score::ScoreState;
use crate::store::{entity_id, EntityStore};
use crate::systems::movement::Arrival;

/// Remove arrived rockets and deactivate whatever each one was aimed at.
/// A target that is already inactive stays inactive.
pub fn run(
    store: &mut EntityStore,
    arrivals: &mut Vec<Arrival>,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    for arrival in arrivals.drain(..) {
        if !store.remove(arrival.rocket) {
            continue;
        }
        score.rockets_impacted += 1;

        let target = arrival.target;
        let world = store.world();
        let index = match target.kind {
            TargetKind::City => world.get::<&mut City>(target.entity).ok().map(|mut city| {
                city.active = false;
                city.index
            }),
            TargetKind::Turret => world.get::<&mut Turret>(target.entity).ok().map(|mut turret| {
                turret.active = false;
                turret.index
            }),
        };

        let Some(target_index) = index else {
            continue;
        };
        log::debug!(
            "rocket {} hit {:?} {target_index}",
            entity_id(arrival.rocket),
            target.kind
        );
        events.push(GameEvent::Impact {
            id: entity_id(arrival.rocket),
            target_kind: target.kind,
            target_index,
        });
    }
}
