//! Explosion system: detonation, two-phase blast lifecycle, and rocket kills.

use hecs::Entity;

use barrage_core::components::{Explosion, Rocket};
use barrage_core::config::GameConfig;
use barrage_core::events::GameEvent;
use barrage_core::types::Position;

use crate::score::ScoreState;
use crate::store::{entity_id, EntityStore};
use crate::systems::movement::Detonation;

/// Replace each arrived interceptor with a fresh explosion at its target point.
pub fn detonate(
    store: &mut EntityStore,
    detonations: &mut Vec<Detonation>,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) {
    for detonation in detonations.drain(..) {
        if !store.remove(detonation.interceptor) {
            continue;
        }
        let blast = store.add_explosion(
            detonation.at,
            Explosion {
                radius: 0.0,
                max_radius: config.explosion_max_radius,
                expanding: true,
                life: 1.0,
            },
        );
        log::debug!(
            "interceptor {} detonated at ({:.0}, {:.0})",
            entity_id(detonation.interceptor),
            detonation.at.x,
            detonation.at.y
        );
        events.push(GameEvent::Detonation {
            id: entity_id(blast),
            at: detonation.at,
        });
    }
}

/// Advance one explosion by a tick.
///
/// Expanding: radius grows up to `max_radius`, then the phase flips.
/// Contracting: life and radius shrink; radius never drops below zero.
pub fn step(explosion: &mut Explosion, config: &GameConfig) {
    if explosion.expanding {
        explosion.radius =
            (explosion.radius + config.explosion_expansion_rate).min(explosion.max_radius);
        if explosion.radius >= explosion.max_radius {
            explosion.expanding = false;
        }
    } else {
        explosion.life -= config.explosion_life_decay;
        explosion.radius = (explosion.radius - config.explosion_contraction_rate).max(0.0);
    }
}

/// Scratch space reused across ticks by [`run`].
#[derive(Debug, Default)]
pub struct CollisionBuffers {
    blasts: Vec<(Position, f32)>,
    rockets: Vec<(Entity, Position)>,
    despawn: Vec<Entity>,
}

/// Advance every explosion, destroy rockets strictly inside a blast, and
/// remove spent explosions. Returns the number of rockets destroyed.
pub fn run(
    store: &mut EntityStore,
    config: &GameConfig,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    buffers: &mut CollisionBuffers,
) -> u32 {
    let CollisionBuffers {
        blasts,
        rockets,
        despawn,
    } = buffers;
    blasts.clear();
    rockets.clear();
    despawn.clear();

    for (entity, (center, explosion)) in store
        .world_mut()
        .query_mut::<(&Position, &mut Explosion)>()
    {
        step(explosion, config);
        blasts.push((*center, explosion.radius));
        if explosion.life <= 0.0 {
            despawn.push(entity);
        }
    }

    rockets.extend(
        store
            .world()
            .query::<(&Position, &Rocket)>()
            .iter()
            .map(|(entity, (position, _))| (entity, *position)),
    );

    let mut kills = 0;
    for (center, radius) in blasts.iter() {
        // A rocket caught by several blasts is credited once.
        rockets.retain(|(entity, position)| {
            if position.distance_to(center) >= *radius {
                return true;
            }
            kills += 1;
            score.record_kill(config.kill_reward);
            despawn.push(*entity);

            log::debug!(
                "rocket {} destroyed at ({:.0}, {:.0})",
                entity_id(*entity),
                position.x,
                position.y
            );
            events.push(GameEvent::RocketDestroyed {
                id: entity_id(*entity),
                at: *position,
                reward: config.kill_reward,
            });
            false
        });
    }

    for entity in despawn.drain(..) {
        store.remove(entity);
    }

    kills
}
