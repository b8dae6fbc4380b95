//! Playfield layout: what is on the table at start
//!
//! ```json
//! {
//!   "canvas": { "width": 800, "height": 600 },
//!   "gravity": [0, 10],
//!   "balls": [{ "position": [30, 125], "direction": [300, 150] }],
//!   "obstacles": [
//!     { "points": [[125, 300], [570, 280], [275, 100]], "trigger": { "Dampen": 0.1 } },
//!     { "points": [[0, 0], [0, 600]] }
//!   ]
//! }
//! ```

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DAMPENING, GRAVITY};
use crate::error::{PlayfieldError, Result};
use crate::sim::obstacle::{Obstacle, Trigger};
use crate::sim::state::CanvasSize;

/// Initial ball placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallSpec {
    pub position: Vec2,
    pub direction: Vec2,
}

/// One obstacle: 2 points for a segment, 3 for a curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpec {
    pub points: Vec<Vec2>,
    #[serde(default)]
    pub trigger: Trigger,
    #[serde(default = "default_dampening")]
    pub dampening: f32,
}

fn default_dampening() -> f32 {
    DEFAULT_DAMPENING
}

impl ObstacleSpec {
    pub fn new(points: Vec<Vec2>, trigger: Trigger) -> Self {
        Self {
            points,
            trigger,
            dampening: DEFAULT_DAMPENING,
        }
    }
}

/// Everything needed to construct a playfield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayfieldLayout {
    #[serde(default)]
    pub canvas: CanvasSize,
    #[serde(default = "default_gravity")]
    pub gravity: Vec2,
    #[serde(default)]
    pub balls: Vec<BallSpec>,
    #[serde(default)]
    pub obstacles: Vec<ObstacleSpec>,
}

fn default_gravity() -> Vec2 {
    GRAVITY
}

impl Default for PlayfieldLayout {
    /// Two nested curves and one ball heading into them
    fn default() -> Self {
        let p1 = Vec2::new(125.0, 300.0);
        let p2 = Vec2::new(570.0, 280.0); // Control point
        let p3 = Vec2::new(275.0, 100.0);

        Self {
            canvas: CanvasSize::default(),
            gravity: GRAVITY,
            balls: vec![BallSpec {
                position: Vec2::new(30.0, 125.0),
                direction: Vec2::new(300.0, 150.0),
            }],
            obstacles: vec![
                ObstacleSpec::new(
                    vec![
                        p1 + Vec2::new(10.0, -50.0),
                        p2 + Vec2::new(10.0, 0.0),
                        p3 + Vec2::new(10.0, 10.0),
                    ],
                    Trigger::Dampen(DEFAULT_DAMPENING),
                ),
                ObstacleSpec::new(vec![p1, p2, p3], Trigger::Dampen(DEFAULT_DAMPENING)),
            ],
        }
    }
}

impl PlayfieldLayout {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let layout = Self::from_json(&json)?;
        log::info!(
            "Loaded layout from {}: {} obstacles, {} balls",
            path.as_ref().display(),
            layout.obstacles.len(),
            layout.balls.len()
        );
        Ok(layout)
    }

    /// Validate and build every obstacle, reporting the first bad one by index
    pub fn build_obstacles(&self) -> Result<Vec<Obstacle>> {
        self.obstacles
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                Obstacle::from_points(&spec.points, spec.trigger.clone())
                    .map(|o| o.with_dampening(spec.dampening))
                    .map_err(|source| PlayfieldError::Obstacle {
                        index,
                        source: Box::new(source),
                    })
            })
            .collect()
    }
}
