//! Simulation engine: the single owner of all game state.
//!
//! `SimulationEngine` owns the entity store, processes player input, runs
//! the per-tick systems, and produces `GameStateSnapshot`s. Completely
//! headless, so the same seed and the same timestamps replay exactly.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use barrage_core::commands::PlayerCommand;
use barrage_core::config::{ConfigError, GameConfig};
use barrage_core::enums::GamePhase;
use barrage_core::events::GameEvent;
use barrage_core::state::GameStateSnapshot;
use barrage_core::types::{PointerEvent, Position, SimTime};

use crate::score::ScoreState;
use crate::store::EntityStore;
use crate::systems;
use crate::systems::explosion::CollisionBuffers;
use crate::systems::movement::{Arrival, Detonation};
use crate::systems::spawner::SpawnClock;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Gameplay tuning.
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

/// The simulation engine. Owns the store and all sim state.
pub struct SimulationEngine {
    config: GameConfig,
    store: EntityStore,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    score: ScoreState,
    spawn_clock: SpawnClock,
    command_queue: VecDeque<PlayerCommand>,
    arrivals: Vec<Arrival>,
    detonations: Vec<Detonation>,
    collision: CollisionBuffers,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create an engine in the START phase. The game config is validated
    /// first; a bad config never produces an engine.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config.game, rng)
    }

    /// Create an engine with an explicit random source.
    pub fn with_rng(config: GameConfig, rng: ChaCha8Rng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            store: EntityStore::new(&config),
            config,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng,
            score: ScoreState::default(),
            spawn_clock: SpawnClock::default(),
            command_queue: VecDeque::new(),
            arrivals: Vec::new(),
            detonations: Vec::new(),
            collision: CollisionBuffers::default(),
            events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next `advance`.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// START -> PLAYING. Returns false in any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Start {
            return false;
        }
        self.begin_round();
        true
    }

    /// WON/LOST -> PLAYING with a fresh layout, score and level.
    /// Returns false unless the game has ended.
    pub fn restart(&mut self) -> bool {
        if !self.phase.is_terminal() {
            return false;
        }
        self.begin_round();
        true
    }

    /// Fire at a point in playfield coordinates. Returns whether an
    /// interceptor was launched.
    pub fn fire(&mut self, point: Position) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        let launched =
            systems::targeting::fire(&mut self.store, point, &self.config, &mut self.events)
                .is_some();
        if launched {
            self.score.interceptors_fired += 1;
        }
        launched
    }

    /// Fire at a raw pointer position in device pixels.
    pub fn pointer(&mut self, event: PointerEvent) -> bool {
        let point = event.to_playfield(self.config.playfield_width, self.config.playfield_height);
        self.fire(point)
    }

    /// Apply queued input, then run one simulation step if playing.
    ///
    /// `timestamp_ms` is the host's frame clock. It only gates spawning; a
    /// timestamp behind the current clock is ignored and the clock holds.
    pub fn advance(&mut self, timestamp_ms: f64) -> GameStateSnapshot {
        if !self.time.observe(timestamp_ms) {
            log::warn!(
                "frame clock went backwards ({timestamp_ms:.1}ms < {:.1}ms), holding",
                self.time.now_ms
            );
        }

        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.store,
            &self.time,
            self.phase,
            &self.score,
            &self.config,
            events,
        )
    }

    /// Current state without stepping. Pending events are included but kept.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.store,
            &self.time,
            self.phase,
            &self.score,
            &self.config,
            self.events.clone(),
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only access to the entity store.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    #[cfg(test)]
    pub(crate) fn score_mut(&mut self) -> &mut ScoreState {
        &mut self.score
    }

    /// Place a rocket aimed at `target` (a city or turret handle).
    #[cfg(test)]
    pub(crate) fn spawn_test_rocket(
        &mut self,
        position: Position,
        target: crate::store::TargetLink,
        speed: f32,
    ) -> hecs::Entity {
        let target_position = self.store.position(target.entity).unwrap_or_default();
        self.store.add_rocket(
            position,
            barrage_core::components::Rocket {
                target: target_position,
                speed,
                progress: 0.0,
            },
            target,
        )
    }

    /// Place an explosion that is already at `radius`.
    #[cfg(test)]
    pub(crate) fn spawn_test_explosion(&mut self, center: Position, radius: f32) -> hecs::Entity {
        self.store.add_explosion(
            center,
            barrage_core::components::Explosion {
                radius,
                max_radius: self.config.explosion_max_radius,
                expanding: true,
                life: 1.0,
            },
        )
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Start => {
                self.start();
            }
            PlayerCommand::Restart => {
                self.restart();
            }
            PlayerCommand::Fire { x, y } => {
                self.fire(Position::new(x, y));
            }
            PlayerCommand::Pointer { event } => {
                self.pointer(event);
            }
        }
    }

    /// Reset everything a round owns and enter PLAYING. The frame clock
    /// keeps running so the first spawn waits a full interval.
    fn begin_round(&mut self) {
        self.store.reset(&self.config);
        self.score = ScoreState::default();
        self.spawn_clock = SpawnClock {
            last_spawn_ms: self.time.now_ms,
        };
        self.time.tick = 0;
        self.set_phase(GamePhase::Playing);
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase == phase {
            return;
        }
        log::info!(
            "phase {:?} -> {:?} (score {}, level {})",
            self.phase,
            phase,
            self.score.score,
            self.score.level
        );
        self.events.push(GameEvent::PhaseChanged {
            from: self.phase,
            to: phase,
        });
        self.phase = phase;
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // Level-up sees kills from this tick on the next one.
        let settled_score = self.score.score;

        // 1. Spawning
        systems::spawner::run(
            &mut self.store,
            &mut self.rng,
            &self.config,
            &mut self.spawn_clock,
            &mut self.score,
            self.time.now_ms,
            &mut self.events,
        );

        // 2. Rockets and impacts
        systems::movement::advance_rockets(
            self.store.world_mut(),
            self.config.rocket_approach_epsilon,
            &mut self.arrivals,
        );
        systems::impact::run(
            &mut self.store,
            &mut self.arrivals,
            &mut self.score,
            &mut self.events,
        );
        if self.store.all_turrets_inactive() {
            self.set_phase(GamePhase::Lost);
            return;
        }

        // 3. Interceptors and detonation
        systems::movement::advance_interceptors(self.store.world_mut(), &mut self.detonations);
        systems::explosion::detonate(
            &mut self.store,
            &mut self.detonations,
            &self.config,
            &mut self.events,
        );

        // 4. Explosions and kills
        systems::explosion::run(
            &mut self.store,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.collision,
        );
        if self.score.score >= self.config.target_score {
            self.set_phase(GamePhase::Won);
            return;
        }

        // 5. Level-up
        systems::progression::run(
            &mut self.store,
            &self.config,
            &mut self.score,
            settled_score,
            &mut self.events,
        );
    }
}
