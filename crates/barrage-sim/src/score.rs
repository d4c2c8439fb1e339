//! Score, level and running counters.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

use barrage_core::constants::STARTING_LEVEL;
use barrage_core::state::StatsView;

/// Running score state tracked by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u32,
    pub level: u32,
    pub rockets_spawned: u32,
    pub rockets_destroyed: u32,
    pub rockets_impacted: u32,
    pub interceptors_fired: u32,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            score: 0,
            level: STARTING_LEVEL,
            rockets_spawned: 0,
            rockets_destroyed: 0,
            rockets_impacted: 0,
            interceptors_fired: 0,
        }
    }
}

impl ScoreState {
    /// Credit one rocket destroyed by an explosion.
    pub fn record_kill(&mut self, reward: u32) {
        self.score = self.score.saturating_add(reward);
        self.rockets_destroyed += 1;
    }

    pub fn stats(&self) -> StatsView {
        StatsView {
            rockets_spawned: self.rockets_spawned,
            rockets_destroyed: self.rockets_destroyed,
            rockets_impacted: self.rockets_impacted,
            interceptors_fired: self.interceptors_fired,
        }
    }
}
