//! Bezier Pinball - ball travel against curved playfield obstacles
//!
//! Core modules:
//! - `sim`: Geometry and per-frame collision resolution (pure, no rendering)
//! - `renderer`: Drawing sink abstraction consumed by the host canvas
//! - `settings`: Collision tunables
//! - `layout`: Playfield description (obstacles, balls, canvas)

pub mod error;
pub mod layout;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{PlayfieldError, Result};
pub use layout::PlayfieldLayout;
pub use settings::SimSettings;

/// Simulation constants
pub mod consts {
    use glam::Vec2;

    /// Maximum bounces resolved per ball per frame
    pub const BOUNCE_LIMIT: u32 = 8;
    /// Hits closer than this to the travel origin are the surface just left
    pub const MIN_HIT_DISTANCE: f32 = 1.0;
    /// Distance the next travel origin is pushed past the surface after a bounce
    pub const EXIT_OFFSET: f32 = 5.0;
    /// Length of the normal probe used to derive the surface angle
    pub const NORMAL_PROBE_LENGTH: f32 = 50.0;

    /// Surface dampening (metal is low). Not applied yet.
    pub const DEFAULT_DAMPENING: f32 = 0.01;

    /// Playfield gravity (pixels per frame², +y is down). Not integrated yet.
    pub const GRAVITY: Vec2 = Vec2::new(0.0, 10.0);

    /// Default canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Slack applied to the segment bounds check of curve intersections
    pub const BOUNDS_TOLERANCE: f32 = 1e-3;
}
