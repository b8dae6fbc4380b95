//! Playfield state: balls and the obstacles they travel through

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Segment;
use super::obstacle::Obstacle;
use super::vector::Heading;
use crate::consts::*;
use crate::error::{PlayfieldError, Result};
use crate::layout::PlayfieldLayout;
use crate::settings::SimSettings;

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    /// Travel for this frame, tail to head
    pub direction: Vec2,
    /// Ramp layer for rails and crossovers (always 0 for now)
    #[serde(default)]
    pub elevation: f32,
    /// Radius (point ball for now)
    #[serde(default)]
    pub size: f32,
}

impl Ball {
    pub fn new(position: Vec2, direction: Vec2) -> Self {
        Self {
            position,
            direction,
            elevation: 0.0,
            size: 0.0,
        }
    }

    /// Start and destination of this frame's travel
    #[inline]
    pub fn points(&self) -> Segment {
        [self.position, self.position + self.direction]
    }

    /// Heading of the ball's direction
    #[inline]
    pub fn heading(&self) -> f32 {
        self.direction.heading()
    }
}

/// Canvas dimensions, used only to clear before redraw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

/// Owns the balls and obstacles of one table
#[derive(Debug, Clone)]
pub struct Playfield {
    pub gravity: Vec2,
    pub balls: Vec<Ball>,
    obstacles: Vec<Obstacle>,
    pub canvas: CanvasSize,
    pub settings: SimSettings,
    /// Frames run so far
    pub frame_count: u64,
}

impl Playfield {
    pub fn new(obstacles: Vec<Obstacle>, balls: Vec<Ball>, settings: SimSettings) -> Result<Self> {
        if !balls
            .iter()
            .all(|b| b.position.is_finite() && b.direction.is_finite())
        {
            return Err(PlayfieldError::NonFinite("ball"));
        }
        settings.validate()?;

        log::info!(
            "Playfield created: {} obstacles, {} balls",
            obstacles.len(),
            balls.len()
        );

        Ok(Self {
            gravity: GRAVITY,
            balls,
            obstacles,
            canvas: CanvasSize::default(),
            settings,
            frame_count: 0,
        })
    }

    /// Build from a layout description
    pub fn from_layout(layout: &PlayfieldLayout, settings: SimSettings) -> Result<Self> {
        let obstacles = layout.build_obstacles()?;
        let balls = layout.balls.iter().map(|b| Ball::new(b.position, b.direction)).collect();

        let mut playfield = Self::new(obstacles, balls, settings)?;
        playfield.gravity = layout.gravity;
        playfield.canvas = layout.canvas;
        Ok(playfield)
    }

    /// Static obstacles, read-only for the playfield's lifetime
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }
}
