//! One render tick of the playfield
//!
//! Draws the static obstacles, then resolves each ball's travel for the frame.
//! Ball position and direction are left as they were: committing the outbound
//! travel and integrating gravity are up to the host for now.

use serde::Serialize;

use super::collision::{BallFrame, resolve_ball};
use super::obstacle::Shape;
use super::state::Playfield;
use crate::renderer::{DrawSink, Style};

/// What happened to every ball this frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    /// Frame number, starting at 0
    pub frame: u64,
    /// One entry per ball, in ball order
    pub balls: Vec<BallFrame>,
}

impl FrameReport {
    pub fn total_bounces(&self) -> u32 {
        self.balls.iter().map(|b| b.bounces).sum()
    }
}

/// Draw every obstacle: bounding box, control polygon, then the obstacle itself
pub fn draw_obstacles(playfield: &Playfield, sink: &mut impl DrawSink) {
    for obstacle in playfield.obstacles() {
        sink.lines(&obstacle.bounds().outline(), Style::BoundingBox);

        match *obstacle.shape() {
            Shape::Segment(points) => sink.lines(&points, Style::Obstacle),
            Shape::Curve(curve) => {
                sink.lines(&curve, Style::ControlPolygon);
                sink.curve(curve, Style::Obstacle);
            }
        }
    }
}

/// Advance the playfield by one frame
pub fn frame(playfield: &mut Playfield, sink: &mut impl DrawSink) -> FrameReport {
    sink.clear(playfield.canvas.width, playfield.canvas.height);
    draw_obstacles(playfield, sink);

    for ball in &playfield.balls {
        sink.lines(&ball.points(), Style::BallVector);
    }

    let balls = playfield
        .balls
        .iter()
        .map(|ball| resolve_ball(ball.points(), playfield.obstacles(), &playfield.settings, sink))
        .collect();

    let report = FrameReport {
        frame: playfield.frame_count,
        balls,
    };
    playfield.frame_count += 1;

    log::debug!(
        "Frame {}: {} balls, {} bounces",
        report.frame,
        report.balls.len(),
        report.total_bounces()
    );

    report
}

impl Playfield {
    /// Advance by one frame, emitting draw requests to `sink`
    pub fn frame(&mut self, sink: &mut impl DrawSink) -> FrameReport {
        frame(self, sink)
    }
}
