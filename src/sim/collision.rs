//! Per-frame collision resolution for curved and straight obstacles
//!
//! The tricky part of the playfield: a ball's travel for one frame may strike
//! several obstacles in turn. Each pass finds the nearest hit along the
//! current travel vector, splits the travel there and reflects the rest about
//! the surface normal, until nothing is hit or the bounce budget runs out.

use glam::Vec2;
use serde::Serialize;
use std::f32::consts::PI;

use super::geometry::{Segment, travel_angle, travel_length};
use super::obstacle::{Obstacle, Shape};
use super::vector::Heading;
use crate::renderer::{DrawSink, Style};
use crate::settings::SimSettings;

/// Nearest collision along a travel vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hit {
    /// Collision point
    pub point: Vec2,
    /// Parameter along the struck obstacle
    pub root: f32,
    /// Index into the playfield's obstacles
    pub obstacle: usize,
    /// Distance from the travel origin
    pub distance: f32,
}

/// Outcome of one ball's frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallFrame {
    /// Travelled pieces in order; the last is the unobstructed remainder
    /// unless the bounce budget ran out
    pub segments: Vec<Segment>,
    /// Collisions in order
    pub hits: Vec<Hit>,
    /// Travel vector when resolution stopped
    pub travel: Segment,
    pub bounces: u32,
    /// Bounce budget ran out with travel left over
    pub exhausted: bool,
}

impl BallFrame {
    /// Direction of the final travel vector
    pub fn outbound(&self) -> Vec2 {
        self.travel[1] - self.travel[0]
    }
}

/// Indices of obstacles the travel vector may touch
pub fn find_candidates(travel: Segment, obstacles: &[Obstacle]) -> Vec<usize> {
    obstacles
        .iter()
        .enumerate()
        .filter(|(_, o)| o.shape().may_collide(travel))
        .map(|(i, _)| i)
        .collect()
}

/// Nearest intersection among `candidates`, ignoring points within
/// `min_distance` of the travel origin (the surface just bounced off) and
/// points where the surface normal is undefined.
pub fn nearest_hit(
    travel: Segment,
    obstacles: &[Obstacle],
    candidates: &[usize],
    min_distance: f32,
) -> Option<Hit> {
    let origin = travel[0];
    let mut best: Option<Hit> = None;

    for &index in candidates {
        for hit in obstacles[index].shape().intersect(travel) {
            let distance = (hit.point - origin).length();
            if distance < min_distance {
                continue;
            }
            if obstacles[index].shape().normal_at(hit.root).is_none() {
                log::trace!("Skipping hit on obstacle {index} with no surface normal");
                continue;
            }
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(Hit {
                    point: hit.point,
                    root: hit.root,
                    obstacle: index,
                    distance,
                });
            }
        }
    }

    best
}

/// Reflect the travel left after `hit` off `shape`.
///
/// Returns the next travel vector, starting `exit_offset` past the surface.
/// `None` where the surface normal is undefined.
pub fn bounce(travel: Segment, hit: &Hit, shape: &Shape, settings: &SimSettings) -> Option<Segment> {
    let normal = shape.normal_at(hit.root)? * settings.normal_probe_length;

    let ball_angle = travel_angle(travel);
    // Incoming heading turned around; may exceed 2π
    let reverse_angle = ball_angle + PI;
    let normal_angle = normal.heading();
    let outbound_angle = normal_angle - (reverse_angle - normal_angle);

    let remainder = travel_length([hit.point, travel[1]]);
    let origin = hit.point + Vec2::new(0.0, settings.exit_offset).rot(outbound_angle);
    let end = origin + Vec2::new(0.0, remainder).rot(outbound_angle);

    Some([origin, end])
}

/// Resolve one ball's travel for this frame against every obstacle.
///
/// Pure in its inputs: balls resolved in any order get the same result.
/// Travelled pieces and hit points are emitted to `sink` as they resolve.
pub fn resolve_ball(
    travel: Segment,
    obstacles: &[Obstacle],
    settings: &SimSettings,
    sink: &mut impl DrawSink,
) -> BallFrame {
    let mut frame = BallFrame {
        segments: Vec::new(),
        hits: Vec::new(),
        travel,
        bounces: 0,
        exhausted: false,
    };

    loop {
        if frame.bounces >= settings.bounce_limit {
            frame.exhausted = true;
            log::debug!(
                "Bounce limit {} reached, dropping {:.1} units of travel",
                settings.bounce_limit,
                travel_length(frame.travel)
            );
            break;
        }

        let candidates = find_candidates(frame.travel, obstacles);
        let next = nearest_hit(frame.travel, obstacles, &candidates, settings.min_hit_distance)
            .and_then(|hit| {
                let shape = obstacles[hit.obstacle].shape();
                bounce(frame.travel, &hit, shape, settings).map(|next| (hit, next))
            });

        let Some((hit, next)) = next else {
            // Unobstructed remainder
            sink.lines(&frame.travel, Style::Remainder);
            frame.segments.push(frame.travel);
            break;
        };

        log::trace!(
            "Bounce {}: obstacle {} at ({:.2}, {:.2}), t={:.4}",
            frame.bounces,
            hit.obstacle,
            hit.point.x,
            hit.point.y,
            hit.root
        );

        let travelled = [frame.travel[0], hit.point];
        sink.lines(&travelled, Style::Bounce(frame.bounces));
        sink.intersections(&[hit.point], Style::Intersection);

        frame.segments.push(travelled);
        frame.hits.push(hit);
        frame.travel = next;
        frame.bounces += 1;
    }

    frame
}
