//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind `GameConfig::default()`. Every value can be
//! overridden through the config surface; nothing in the simulation reads
//! these directly except to build the default config.

/// Nominal host frame rate (Hz). The simulation steps once per frame.
pub const FRAME_RATE: u32 = 60;

// --- Playfield ---

/// Logical playfield width.
pub const PLAYFIELD_WIDTH: f32 = 800.0;

/// Logical playfield height. y = 0 is the top edge.
pub const PLAYFIELD_HEIGHT: f32 = 600.0;

// --- Layout ---

/// Turret positions, left to right. Order is the targeting tie-break order.
pub const TURRET_POSITIONS: [(f32, f32); 3] = [(100.0, 550.0), (400.0, 550.0), (700.0, 550.0)];

/// Interceptors per turret at full load.
pub const TURRET_MAX_AMMO: u32 = 10;

/// City positions, left to right.
pub const CITY_POSITIONS: [(f32, f32); 6] = [
    (180.0, 570.0),
    (260.0, 570.0),
    (330.0, 570.0),
    (470.0, 570.0),
    (540.0, 570.0),
    (620.0, 570.0),
];

// --- Spawning ---

/// Spawn interval at level 0 (milliseconds).
pub const SPAWN_BASE_INTERVAL_MS: f64 = 2000.0;

/// Interval reduction per level (milliseconds).
pub const SPAWN_LEVEL_STEP_MS: f64 = 150.0;

/// Floor for the spawn interval (milliseconds).
pub const SPAWN_MIN_INTERVAL_MS: f64 = 500.0;

/// Rocket progress per tick at level 0.
pub const ROCKET_BASE_SPEED: f32 = 0.001;

/// Additional rocket progress per tick for each level.
pub const ROCKET_LEVEL_SPEED_STEP: f32 = 0.0003;

/// Keeps the rocket approach factor finite as progress nears 1.
pub const ROCKET_APPROACH_EPSILON: f32 = 0.001;

// --- Interceptors and explosions ---

/// Interceptor progress per tick. Not level dependent.
pub const INTERCEPTOR_SPEED: f32 = 0.02;

/// Radius an explosion grows to before contracting.
pub const EXPLOSION_MAX_RADIUS: f32 = 50.0;

/// Radius gained per tick while expanding.
pub const EXPLOSION_EXPANSION_RATE: f32 = 2.0;

/// Radius lost per tick while contracting.
pub const EXPLOSION_CONTRACTION_RATE: f32 = 1.0;

/// Life lost per tick while contracting. Life starts at 1.0.
pub const EXPLOSION_LIFE_DECAY: f32 = 0.02;

// --- Scoring and progression ---

/// Points for each rocket destroyed by an explosion.
pub const KILL_REWARD: u32 = 20;

/// Score at which the game is won.
pub const TARGET_SCORE: u32 = 1000;

/// Level-up happens once score exceeds `level * LEVEL_SCORE_STEP`.
pub const LEVEL_SCORE_STEP: u32 = 200;

/// Highest reachable level.
pub const MAX_LEVEL: u32 = 5;

/// Level a fresh game starts at.
pub const STARTING_LEVEL: u32 = 1;
