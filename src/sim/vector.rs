//! Playfield angle conventions on top of `glam::Vec2`
//!
//! Headings are measured clockwise from screen "up" (-y), in [0, 2π).
//! Rotation carries a half-turn offset so that `Vec2::new(0.0, r).rot(h)`
//! points along heading `h`; the bounce formula depends on both.

use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// 2D vector value. All arithmetic (`+`, `-`, `* f32`, `/ f32`, `length`) is glam's.
pub type Vector2 = Vec2;

/// Heading and rotation in the playfield convention
pub trait Heading {
    /// Direction angle in [0, 2π): 0 is up, π/2 is right, π is down
    fn heading(self) -> f32;

    /// Rotate by `radians` using the matrix at `π + radians`
    fn rot(self, radians: f32) -> Self;
}

impl Heading for Vec2 {
    #[inline]
    fn heading(self) -> f32 {
        let a = self.x.atan2(self.y);
        let h = if a < 0.0 { a.abs() + PI } else { PI - a };
        // atan2(-0.0, y < 0) is -π
        if h >= TAU { h - TAU } else { h }
    }

    #[inline]
    fn rot(self, radians: f32) -> Self {
        let (sin, cos) = (PI + radians).sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}
