//! Game state snapshot: the complete visible state handed to the presentation layer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    pub level: u32,
    pub target_score: u32,
    pub stats: StatsView,
    pub rockets: Vec<RocketView>,
    pub interceptors: Vec<InterceptorView>,
    pub explosions: Vec<ExplosionView>,
    pub cities: Vec<CityView>,
    pub turrets: Vec<TurretView>,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocketView {
    pub id: u64,
    pub position: Position,
    pub target: Position,
    pub progress: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterceptorView {
    pub id: u64,
    pub position: Position,
    pub origin: Position,
    pub target: Position,
    pub progress: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub id: u64,
    pub position: Position,
    pub radius: f32,
    pub max_radius: f32,
    /// Fade scalar in (0, 1] for drawing opacity.
    pub life: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityView {
    pub id: u64,
    pub index: u32,
    pub position: Position,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurretView {
    pub id: u64,
    pub index: u32,
    pub position: Position,
    pub ammo: u32,
    pub max_ammo: u32,
    pub active: bool,
}

/// Running counters for the current game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsView {
    pub rockets_spawned: u32,
    pub rockets_destroyed: u32,
    pub rockets_impacted: u32,
    pub interceptors_fired: u32,
}

impl GameStateSnapshot {
    pub fn active_turrets(&self) -> usize {
        self.turrets.iter().filter(|t| t.active).count()
    }

    pub fn active_cities(&self) -> usize {
        self.cities.iter().filter(|c| c.active).count()
    }
}
