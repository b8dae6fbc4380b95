//! Drawing sink
//!
//! The simulation never talks to a canvas directly. It emits draw requests in
//! resolution order to a [`DrawSink`]; the host maps each [`Style`] to a stroke.

pub mod draw_list;
pub mod shapes;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use draw_list::{DrawCommand, DrawList};

/// Stroke colours cycled through successive bounce segments
pub const BOUNCE_PALETTE: [[f32; 4]; 4] = [
    [1.0, 0.0, 0.0, 1.0],   // red
    [0.0, 0.5, 0.0, 1.0],   // green
    [0.0, 0.0, 1.0, 1.0],   // blue
    [0.5, 0.0, 0.5, 1.0],   // purple
];

/// What a draw request depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    /// Obstacle bounding box
    BoundingBox,
    /// Lines joining an obstacle's control points
    ControlPolygon,
    /// The obstacle itself
    Obstacle,
    /// A ball's full travel vector before resolution
    BallVector,
    /// Travel completed up to the n-th collision of a frame (0-based)
    Bounce(u32),
    /// Unobstructed travel left after the last collision
    Remainder,
    /// Highlighted collision point
    Intersection,
}

impl Style {
    /// RGBA stroke colour
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            Style::BoundingBox => [0.0, 1.0, 0.0, 0.3],
            Style::ControlPolygon => [0.0, 0.0, 0.0, 0.1],
            Style::Obstacle | Style::BallVector | Style::Remainder => [0.0, 0.0, 0.0, 1.0],
            Style::Bounce(n) => BOUNCE_PALETTE[*n as usize % BOUNCE_PALETTE.len()],
            Style::Intersection => [0.0, 0.5, 0.0, 1.0],
        }
    }
}

/// Receives draw requests from the simulation
pub trait DrawSink {
    /// Clear the whole surface before redraw
    fn clear(&mut self, width: f32, height: f32);

    /// Polyline through `points`
    fn lines(&mut self, points: &[Vec2], style: Style);

    /// Quadratic Bézier: start, control, end
    fn curve(&mut self, curve: [Vec2; 3], style: Style);

    /// Mark points (collision highlights)
    fn intersections(&mut self, points: &[Vec2], style: Style);
}

/// Discards everything; for headless runs and benchmarks
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DrawSink for NullSink {
    fn clear(&mut self, _width: f32, _height: f32) {}
    fn lines(&mut self, _points: &[Vec2], _style: Style) {}
    fn curve(&mut self, _curve: [Vec2; 3], _style: Style) {}
    fn intersections(&mut self, _points: &[Vec2], _style: Style) {}
}
