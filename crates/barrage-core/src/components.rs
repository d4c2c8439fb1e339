//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Enemy rocket falling toward a city or turret.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rocket {
    /// Where the targeted entity stood at spawn time.
    pub target: Position,
    /// Progress gained per tick.
    pub speed: f32,
    /// Completion fraction. Reaching 1.0 means impact.
    pub progress: f32,
}

/// Player interceptor flying a straight line to a chosen point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Interceptor {
    /// Launch point (the firing turret's position).
    pub origin: Position,
    /// Player-chosen detonation point.
    pub target: Position,
    /// Progress gained per tick.
    pub speed: f32,
    /// Completion fraction. Reaching 1.0 means detonation.
    pub progress: f32,
    /// Layout index of the turret that fired it.
    pub turret: u32,
}

/// Blast left by a detonated interceptor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    /// Current damaging radius.
    pub radius: f32,
    /// Radius at which expansion stops.
    pub max_radius: f32,
    /// True while growing; flips to false once, never back.
    pub expanding: bool,
    /// Fade scalar in (0, 1]. Removed at or below zero.
    pub life: f32,
}

/// Defended city. Inactive cities stay on the field as ruins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct City {
    /// Position in the starting layout.
    pub index: u32,
    pub active: bool,
}

/// Player firing position with finite ammo.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Turret {
    /// Position in the starting layout (also the targeting tie-break order).
    pub index: u32,
    pub ammo: u32,
    pub max_ammo: u32,
    pub active: bool,
}
