//! Playfield simulation module
//!
//! All collision logic lives here. This module must stay pure:
//! - No canvas or platform dependencies (drawing goes through `DrawSink`)
//! - Obstacles are read-only during a frame
//! - Each ball resolves independently of the others

pub mod collision;
pub mod geometry;
pub mod obstacle;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{BallFrame, Hit, bounce, find_candidates, nearest_hit, resolve_ball};
pub use geometry::{
    Curve, CurveHit, Segment, any_segment_intersects, curve_segment_intersect,
    derivative_at_curve, line_segment_intersect, normal_at_curve, point_at_curve,
    point_in_triangle, segments_intersect, travel_angle, travel_length,
};
pub use obstacle::{Aabb, Obstacle, Shape, Trigger};
pub use state::{Ball, CanvasSize, Playfield};
pub use tick::{FrameReport, draw_obstacles, frame};
pub use vector::{Heading, Vector2};
