//! Static playfield obstacles
//!
//! An obstacle is either a straight segment or a quadratic Bézier curve. Its
//! control points are fixed at construction; the bounding box is derived from
//! them once.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{
    CurveHit, Segment, curve_segment_intersect, line_segment_intersect, normal_at_curve,
    normal_of, point_in_triangle, segments_intersect,
};
use crate::consts::DEFAULT_DAMPENING;
use crate::error::{PlayfieldError, Result};

/// Obstacle outline, decided once at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Start, end
    Segment([Vec2; 2]),
    /// Quadratic Bézier: start, control, end
    Curve([Vec2; 3]),
}

impl Shape {
    /// Build from 2 (segment) or 3 (curve) points
    pub fn from_points(points: &[Vec2]) -> Result<Self> {
        match *points {
            [start, end] => Ok(Shape::Segment([start, end])),
            [start, control, end] => Ok(Shape::Curve([start, control, end])),
            _ => Err(PlayfieldError::InvalidArity {
                count: points.len(),
            }),
        }
    }

    /// Control points in order
    pub fn points(&self) -> &[Vec2] {
        match self {
            Shape::Segment(points) => points,
            Shape::Curve(points) => points,
        }
    }

    /// Unit surface normal at `t`, `None` where the tangent vanishes
    pub fn normal_at(&self, t: f32) -> Option<Vec2> {
        match *self {
            Shape::Segment([start, end]) => normal_of(end - start),
            Shape::Curve(curve) => normal_at_curve(curve, t),
        }
    }

    /// Where `travel` crosses this shape
    pub fn intersect(&self, travel: Segment) -> Vec<CurveHit> {
        match *self {
            Shape::Segment(line) => line_segment_intersect(line, travel),
            Shape::Curve(curve) => curve_segment_intersect(curve, travel),
        }
    }

    /// Broad-phase test: could `travel` touch this shape?
    ///
    /// A curve lies inside its control triangle, so the travel must end in it
    /// or cross one of its edges. A segment's "triangle" has no area and only
    /// the crossing test remains.
    pub fn may_collide(&self, travel: Segment) -> bool {
        match *self {
            Shape::Segment(line) => segments_intersect(travel, line),
            Shape::Curve(tri @ [p0, p1, p2]) => {
                point_in_triangle(travel[1], tri)
                    || segments_intersect(travel, [p0, p1])
                    || segments_intersect(travel, [p1, p2])
                    || segments_intersect(travel, [p0, p2])
            }
        }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Smallest box holding all `points`
    pub fn from_points(points: &[Vec2]) -> Self {
        let (min, max) = points.iter().fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(min, max), &p| (min.min(p), max.max(p)),
        );
        Self { min, max }
    }

    /// Closed outline starting and ending at `min`
    pub fn outline(&self) -> [Vec2; 5] {
        let Self { min, max } = *self;
        [
            min,
            Vec2::new(min.x, max.y),
            max,
            Vec2::new(max.x, min.y),
            min,
        ]
    }
}

/// What an obstacle does to a ball that strikes it.
///
/// None of these alter collision resolution yet; hits report the trigger so a
/// host can act on it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Trigger {
    /// Plain surface, bounce only
    #[default]
    None,
    /// Scale outbound speed down by the factor
    Dampen(f32),
    /// Scale outbound speed up by the factor
    Accelerate(f32),
    /// Replace the outbound direction
    SetVector(Vec2),
    /// Raise a named playfield flag
    SetFlag(String),
    /// Hold the ball (saucer, kickout hole)
    CaptureBall,
    /// Move the ball onto a ramp layer
    SetElevation(f32),
}

/// A static playfield boundary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Obstacle {
    shape: Shape,
    bounds: Aabb,
    dampening: f32,
    trigger: Trigger,
}

impl Obstacle {
    pub fn new(shape: Shape, trigger: Trigger) -> Result<Self> {
        if !shape.points().iter().all(|p| p.is_finite()) {
            return Err(PlayfieldError::NonFinite("obstacle point"));
        }
        Ok(Self {
            bounds: Aabb::from_points(shape.points()),
            shape,
            dampening: DEFAULT_DAMPENING,
            trigger,
        })
    }

    /// Build from 2 or 3 points
    pub fn from_points(points: &[Vec2], trigger: Trigger) -> Result<Self> {
        Self::new(Shape::from_points(points)?, trigger)
    }

    pub fn segment(start: Vec2, end: Vec2) -> Result<Self> {
        Self::new(Shape::Segment([start, end]), Trigger::None)
    }

    pub fn curve(start: Vec2, control: Vec2, end: Vec2) -> Result<Self> {
        Self::new(Shape::Curve([start, control, end]), Trigger::None)
    }

    /// Override the surface dampening
    pub fn with_dampening(mut self, dampening: f32) -> Self {
        self.dampening = dampening;
        self
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn points(&self) -> &[Vec2] {
        self.shape.points()
    }

    /// Box around the raw control points. For curves this is looser than the
    /// drawn curve.
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn dampening(&self) -> f32 {
        self.dampening
    }

    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }
}
