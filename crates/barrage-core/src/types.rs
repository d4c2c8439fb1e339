//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D position in playfield space. x grows right, y grows down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulation steps run while playing.
    pub tick: u64,
    /// Latest host timestamp handed to `advance` (milliseconds).
    pub now_ms: f64,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.as_vec2().distance(other.as_vec2())
    }

    /// Horizontal distance only.
    pub fn horizontal_distance_to(&self, other: &Position) -> f32 {
        (self.x - other.x).abs()
    }
}

impl From<Vec2> for Position {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<(f32, f32)> for Position {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl SimTime {
    /// Record a host timestamp. The clock never runs backwards.
    /// Returns false when the timestamp was behind the current clock.
    pub fn observe(&mut self, timestamp_ms: f64) -> bool {
        if timestamp_ms >= self.now_ms {
            self.now_ms = timestamp_ms;
            true
        } else {
            false
        }
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

/// A pointer or tap event in device pixels, as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Pointer x in device pixels.
    pub x: f32,
    /// Pointer y in device pixels.
    pub y: f32,
    /// Left edge of the displayed canvas in the same pixel space.
    #[serde(default)]
    pub origin_x: f32,
    /// Top edge of the displayed canvas in the same pixel space.
    #[serde(default)]
    pub origin_y: f32,
    /// Displayed canvas width in device pixels.
    pub display_width: f32,
    /// Displayed canvas height in device pixels.
    pub display_height: f32,
}

/// Ratio between the logical playfield and the displayed canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasScale {
    pub x: f32,
    pub y: f32,
}

impl CanvasScale {
    /// Scale for a canvas displayed at `display_width` x `display_height`
    /// showing a playfield of `playfield_width` x `playfield_height`.
    /// A degenerate display size maps 1:1.
    pub fn from_display(
        display_width: f32,
        display_height: f32,
        playfield_width: f32,
        playfield_height: f32,
    ) -> Self {
        let x = if display_width > 0.0 {
            playfield_width / display_width
        } else {
            1.0
        };
        let y = if display_height > 0.0 {
            playfield_height / display_height
        } else {
            1.0
        };
        Self { x, y }
    }
}

impl PointerEvent {
    /// Convert to playfield coordinates.
    pub fn to_playfield(&self, playfield_width: f32, playfield_height: f32) -> Position {
        let scale = CanvasScale::from_display(
            self.display_width,
            self.display_height,
            playfield_width,
            playfield_height,
        );
        Position::new(
            (self.x - self.origin_x) * scale.x,
            (self.y - self.origin_y) * scale.y,
        )
    }
}
