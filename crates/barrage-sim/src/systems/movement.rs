//! Movement system: advances rockets and interceptors along their paths.
//!
//! Entities that complete their path are reported through pre-allocated
//! buffers; the impact and explosion systems resolve them.

use hecs::{Entity, World};

use barrage_core::components::{Interceptor, Rocket};
use barrage_core::types::Position;

use crate::kinematics;
use crate::store::TargetLink;

/// A rocket that reached progress 1 this tick.
#[derive(Debug, Clone, Copy)]
pub struct Arrival {
    pub rocket: Entity,
    pub target: TargetLink,
}

/// An interceptor that reached its target point this tick.
#[derive(Debug, Clone, Copy)]
pub struct Detonation {
    pub interceptor: Entity,
    pub at: Position,
}

/// Move every rocket one tick and collect the ones that arrived.
pub fn advance_rockets(world: &mut World, epsilon: f32, arrivals: &mut Vec<Arrival>) {
    arrivals.clear();

    for (entity, (position, rocket, target)) in
        world.query_mut::<(&mut Position, &mut Rocket, &TargetLink)>()
    {
        let (next, progress) = kinematics::rocket_step(
            position.as_vec2(),
            rocket.target.as_vec2(),
            rocket.speed,
            rocket.progress,
            epsilon,
        );
        *position = next.into();
        rocket.progress = progress;

        if rocket.progress >= 1.0 {
            arrivals.push(Arrival {
                rocket: entity,
                target: *target,
            });
        }
    }
}

/// Move every interceptor one tick and collect the ones that arrived.
pub fn advance_interceptors(world: &mut World, detonations: &mut Vec<Detonation>) {
    detonations.clear();

    for (entity, (position, interceptor)) in
        world.query_mut::<(&mut Position, &mut Interceptor)>()
    {
        let (next, progress) = kinematics::interceptor_step(
            interceptor.origin.as_vec2(),
            interceptor.target.as_vec2(),
            interceptor.speed,
            interceptor.progress,
        );
        *position = next.into();
        interceptor.progress = progress;

        if interceptor.progress >= 1.0 {
            detonations.push(Detonation {
                interceptor: entity,
                at: interceptor.target,
            });
        }
    }
}
