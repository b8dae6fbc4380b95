//! Polyline generation for sinks without native curve or circle support

use glam::Vec2;
use std::f32::consts::PI;

use super::{DrawSink, Style};
use crate::sim::geometry::point_at_curve;

/// Radius of an intersection marker
pub const MARKER_RADIUS: f32 = 4.0;

/// Sample a quadratic Bézier into `segments + 1` points, ends included
pub fn curve_polyline(curve: [Vec2; 3], segments: u32) -> Vec<Vec2> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| point_at_curve(curve, i as f32 / segments as f32))
        .collect()
}

/// Closed circle outline around an intersection point
pub fn marker(center: Vec2, radius: f32, segments: u32) -> Vec<Vec2> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * 2.0 * PI;
            Vec2::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            )
        })
        .collect()
}

/// Adapts a lines-only sink: curves become polylines, intersections become
/// circle outlines.
#[derive(Debug)]
pub struct Flatten<S> {
    pub inner: S,
    /// Polyline segments per curve
    pub curve_segments: u32,
    /// Polyline segments per marker circle
    pub marker_segments: u32,
}

impl<S: DrawSink> Flatten<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            curve_segments: 32,
            marker_segments: 12,
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: DrawSink> DrawSink for Flatten<S> {
    fn clear(&mut self, width: f32, height: f32) {
        self.inner.clear(width, height);
    }

    fn lines(&mut self, points: &[Vec2], style: Style) {
        self.inner.lines(points, style);
    }

    fn curve(&mut self, curve: [Vec2; 3], style: Style) {
        let points = curve_polyline(curve, self.curve_segments);
        self.inner.lines(&points, style);
    }

    fn intersections(&mut self, points: &[Vec2], style: Style) {
        for &p in points {
            let circle = marker(p, MARKER_RADIUS, self.marker_segments);
            self.inner.lines(&circle, style);
        }
    }
}
