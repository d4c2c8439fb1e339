//! Game configuration: every tunable the simulation reads.
//!
//! `GameConfig::default()` is built from `constants`. A JSON document may
//! override any subset of fields; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::types::Position;

/// Reasons a configuration is rejected before a game can be built from it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("playfield must have positive size, got {width}x{height}")]
    Playfield { width: f32, height: f32 },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("spawn interval floor {min_ms}ms exceeds base interval {base_ms}ms")]
    SpawnInterval { min_ms: f64, base_ms: f64 },
    #[error("explosion life decay {0} must be in (0, 1]")]
    LifeDecay(f32),
    #[error("layout needs at least one turret")]
    NoTurrets,
    #[error("{kind} {index} at ({x}, {y}) lies outside the playfield")]
    OutOfBounds {
        kind: &'static str,
        index: usize,
        x: f32,
        y: f32,
    },
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Complete tuning surface for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub playfield_width: f32,
    pub playfield_height: f32,

    /// Turret positions in tie-break order.
    pub turrets: Vec<Position>,
    pub turret_max_ammo: u32,
    pub cities: Vec<Position>,

    pub spawn_base_interval_ms: f64,
    pub spawn_level_step_ms: f64,
    pub spawn_min_interval_ms: f64,

    pub rocket_base_speed: f32,
    pub rocket_level_speed_step: f32,
    pub rocket_approach_epsilon: f32,

    pub interceptor_speed: f32,

    pub explosion_max_radius: f32,
    pub explosion_expansion_rate: f32,
    pub explosion_contraction_rate: f32,
    pub explosion_life_decay: f32,

    pub kill_reward: u32,
    pub target_score: u32,
    pub level_score_step: u32,
    pub max_level: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            turrets: TURRET_POSITIONS.iter().copied().map(Position::from).collect(),
            turret_max_ammo: TURRET_MAX_AMMO,
            cities: CITY_POSITIONS.iter().copied().map(Position::from).collect(),
            spawn_base_interval_ms: SPAWN_BASE_INTERVAL_MS,
            spawn_level_step_ms: SPAWN_LEVEL_STEP_MS,
            spawn_min_interval_ms: SPAWN_MIN_INTERVAL_MS,
            rocket_base_speed: ROCKET_BASE_SPEED,
            rocket_level_speed_step: ROCKET_LEVEL_SPEED_STEP,
            rocket_approach_epsilon: ROCKET_APPROACH_EPSILON,
            interceptor_speed: INTERCEPTOR_SPEED,
            explosion_max_radius: EXPLOSION_MAX_RADIUS,
            explosion_expansion_rate: EXPLOSION_EXPANSION_RATE,
            explosion_contraction_rate: EXPLOSION_CONTRACTION_RATE,
            explosion_life_decay: EXPLOSION_LIFE_DECAY,
            kill_reward: KILL_REWARD,
            target_score: TARGET_SCORE,
            level_score_step: LEVEL_SCORE_STEP,
            max_level: MAX_LEVEL,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Spawn interval at `level`: `max(min, base - level * step)`.
    pub fn spawn_interval_ms(&self, level: u32) -> f64 {
        (self.spawn_base_interval_ms - level as f64 * self.spawn_level_step_ms)
            .max(self.spawn_min_interval_ms)
    }

    /// Rocket speed at `level`: `base + level * step`.
    pub fn rocket_speed(&self, level: u32) -> f32 {
        self.rocket_base_speed + level as f32 * self.rocket_level_speed_step
    }

    /// Reject values that would corrupt gameplay.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.playfield_width > 0.0 && self.playfield_height > 0.0) {
            return Err(ConfigError::Playfield {
                width: self.playfield_width,
                height: self.playfield_height,
            });
        }

        positive("rocket_base_speed", self.rocket_base_speed as f64)?;
        positive("rocket_approach_epsilon", self.rocket_approach_epsilon as f64)?;
        positive("interceptor_speed", self.interceptor_speed as f64)?;
        positive("explosion_max_radius", self.explosion_max_radius as f64)?;
        positive("explosion_expansion_rate", self.explosion_expansion_rate as f64)?;
        positive("spawn_base_interval_ms", self.spawn_base_interval_ms)?;
        positive("turret_max_ammo", self.turret_max_ammo as f64)?;
        positive("kill_reward", self.kill_reward as f64)?;
        positive("target_score", self.target_score as f64)?;
        positive("level_score_step", self.level_score_step as f64)?;
        positive("max_level", self.max_level as f64)?;

        non_negative("rocket_level_speed_step", self.rocket_level_speed_step as f64)?;
        non_negative("spawn_level_step_ms", self.spawn_level_step_ms)?;
        non_negative("spawn_min_interval_ms", self.spawn_min_interval_ms)?;
        non_negative(
            "explosion_contraction_rate",
            self.explosion_contraction_rate as f64,
        )?;

        if self.spawn_min_interval_ms > self.spawn_base_interval_ms {
            return Err(ConfigError::SpawnInterval {
                min_ms: self.spawn_min_interval_ms,
                base_ms: self.spawn_base_interval_ms,
            });
        }

        if !(self.explosion_life_decay > 0.0 && self.explosion_life_decay <= 1.0) {
            return Err(ConfigError::LifeDecay(self.explosion_life_decay));
        }

        if self.turrets.is_empty() {
            return Err(ConfigError::NoTurrets);
        }
        self.check_in_bounds("turret", &self.turrets)?;
        self.check_in_bounds("city", &self.cities)?;

        Ok(())
    }

    fn check_in_bounds(&self, kind: &'static str, positions: &[Position]) -> Result<(), ConfigError> {
        for (index, pos) in positions.iter().enumerate() {
            let inside = (0.0..=self.playfield_width).contains(&pos.x)
                && (0.0..=self.playfield_height).contains(&pos.y);
            if !inside {
                return Err(ConfigError::OutOfBounds {
                    kind,
                    index,
                    x: pos.x,
                    y: pos.y,
                });
            }
        }
        Ok(())
    }
}

// NaN fails both checks.
fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
