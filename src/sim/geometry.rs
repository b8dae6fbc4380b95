//! Stateless intersection and containment routines
//!
//! Curves are quadratic Béziers given as `[start, control, end]`, segments and
//! travel vectors as `[from, to]`. Degenerate inputs never fail: they produce
//! "no containment", "no intersection" or `None`.

use glam::{DVec2, Vec2};

use super::vector::Heading;
use crate::consts::BOUNDS_TOLERANCE;

/// A quadratic Bézier curve: start, control, end
pub type Curve = [Vec2; 3];

/// A directed line segment: from, to
pub type Segment = [Vec2; 2];

/// Where a segment crosses an obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveHit {
    /// Parameter along the obstacle, 0 at start and 1 at end
    pub root: f32,
    /// Point on the obstacle at `root`
    pub point: Vec2,
}

/// Barycentric sign test; accepts either winding order.
///
/// Points on an edge count as inside. A zero-area triangle contains nothing.
pub fn point_in_triangle(point: Vec2, triangle: [Vec2; 3]) -> bool {
    let [p0, p1, p2] = triangle;

    let d = point - p0;
    let d20 = p2 - p0;
    let d10 = p1 - p0;

    let s_p = d20.y * d.x - d20.x * d.y;
    let t_p = d10.x * d.y - d10.y * d.x;
    let det = d10.x * d20.y - d10.y * d20.x;

    if det > 0.0 {
        s_p >= 0.0 && t_p >= 0.0 && s_p + t_p <= det
    } else if det < 0.0 {
        s_p <= 0.0 && t_p <= 0.0 && s_p + t_p >= det
    } else {
        false
    }
}

/// True if the two segments cross strictly inside both.
///
/// Touching endpoints do not count, so a ball resting on a boundary does not
/// collide again. Parallel and collinear segments never intersect.
pub fn segments_intersect(seg_a: Segment, seg_b: Segment) -> bool {
    let [a, b] = seg_a;
    let [c, d] = seg_b;

    let det = (b.x - a.x) * (d.y - c.y) - (d.x - c.x) * (b.y - a.y);
    if det == 0.0 {
        return false;
    }

    let lambda = ((d.y - c.y) * (d.x - a.x) + (c.x - d.x) * (d.y - a.y)) / det;
    let gamma = ((a.y - b.y) * (d.x - a.x) + (b.x - a.x) * (d.y - a.y)) / det;
    (0.0 < lambda && lambda < 1.0) && (0.0 < gamma && gamma < 1.0)
}

/// True if `segment` crosses any of `others`
pub fn any_segment_intersects(segment: Segment, others: &[Segment]) -> bool {
    others.iter().any(|&other| segments_intersect(segment, other))
}

/// Keep roots in [0, 1] whose obstacle point lies within the segment's bounds.
///
/// Axis-aligned segments only bound the axis they extend along.
fn filter_roots<F>(roots: &[f32], segment: Segment, point_at: F) -> Vec<CurveHit>
where
    F: Fn(f32) -> Vec2,
{
    let [a1, a2] = segment;
    let min = a1.min(a2) - Vec2::splat(BOUNDS_TOLERANCE);
    let max = a1.max(a2) + Vec2::splat(BOUNDS_TOLERANCE);

    roots
        .iter()
        .copied()
        .filter(|t| (0.0..=1.0).contains(t))
        .filter_map(|root| {
            let point = point_at(root);
            let in_x = point.x >= min.x && point.x <= max.x;
            let in_y = point.y >= min.y && point.y <= max.y;

            let inside = if a1.x == a2.x {
                // Vertical
                in_y
            } else if a1.y == a2.y {
                // Horizontal
                in_x
            } else {
                in_x && in_y
            };

            inside.then_some(CurveHit { root, point })
        })
        .collect()
}

/// Line through `segment` as `(normal, constant)` with `normal·p + constant == 0`,
/// widened to f64 for root solving
#[inline]
fn line_equation(segment: Segment) -> (DVec2, f64) {
    let [a1, a2] = segment.map(|p| p.as_dvec2());
    let normal = DVec2::new(a1.y - a2.y, a2.x - a1.x);
    let constant = a1.x * a2.y - a2.x * a1.y;
    (normal, constant)
}

/// Real roots of `a·t² + b·t + c`, one root where the discriminant is zero.
///
/// Uses `q = -(b + sign(b)·√d) / 2` so neither root is the difference of two
/// nearly equal terms; flat curves crossed steeply have a tiny `a`.
fn quadratic_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a == 0.0 {
        return if b != 0.0 { vec![-c / b] } else { Vec::new() };
    }

    let d = b * b - 4.0 * a * c;
    if d > 0.0 {
        // Nonzero: |q| >= max(|b|, √d) / 2
        let q = -0.5 * (b + b.signum() * d.sqrt());
        vec![q / a, c / q]
    } else if d == 0.0 {
        vec![-b / (2.0 * a)]
    } else {
        Vec::new()
    }
}

/// Intersect a quadratic Bézier with a segment.
///
/// The curve `c2·t² + c1·t + c0` is projected onto the segment's line normal,
/// giving a quadratic in `t`. A vanishing leading coefficient leaves a linear
/// equation, solved directly.
pub fn curve_segment_intersect(curve: Curve, segment: Segment) -> Vec<CurveHit> {
    let [p1, pc, p2] = curve.map(|p| p.as_dvec2());
    let (normal, constant) = line_equation(segment);

    let c2 = p1 - 2.0 * pc + p2;
    let c1 = 2.0 * (pc - p1);
    let c0 = p1;

    let roots: Vec<f32> = quadratic_roots(normal.dot(c2), normal.dot(c1), normal.dot(c0) + constant)
        .into_iter()
        .map(|t| t as f32)
        .collect();

    filter_roots(&roots, segment, |t| point_at_curve(curve, t))
}

/// Intersect a straight obstacle `line` with `segment`; at most one hit.
pub fn line_segment_intersect(line: Segment, segment: Segment) -> Vec<CurveHit> {
    let [start, end] = line;
    let (normal, constant) = line_equation(segment);

    let denom = normal.dot((end - start).as_dvec2());
    if denom == 0.0 {
        return Vec::new();
    }
    let root = -(normal.dot(start.as_dvec2()) + constant) / denom;

    filter_roots(&[root as f32], segment, |t| start.lerp(end, t))
}

/// Point on the curve at `t`
pub fn point_at_curve(curve: Curve, t: f32) -> Vec2 {
    let [p1, pc, p2] = curve;
    let u = 1.0 - t;
    p1 * (u * u) + pc * (2.0 * u * t) + p2 * (t * t)
}

/// Unnormalized tangent at `t`, pointing from start towards end
pub fn derivative_at_curve(curve: Curve, t: f32) -> Vec2 {
    let [p1, pc, p2] = curve;
    let d1 = 2.0 * (pc - p1);
    let d2 = 2.0 * (p2 - pc);
    d1 * (1.0 - t) + d2 * t
}

/// Unit normal at `t`: the tangent rotated -90°.
///
/// `None` where the tangent vanishes (control point coincides with an end).
pub fn normal_at_curve(curve: Curve, t: f32) -> Option<Vec2> {
    normal_of(derivative_at_curve(curve, t))
}

/// Unit normal of a tangent, `None` for a zero tangent
#[inline]
pub fn normal_of(tangent: Vec2) -> Option<Vec2> {
    let q = tangent.length();
    if q == 0.0 || !q.is_finite() {
        return None;
    }
    Some(Vec2::new(tangent.y / q, -tangent.x / q))
}

/// Heading of a travel vector
pub fn travel_angle(points: Segment) -> f32 {
    let [v1, v2] = points;
    (v2 - v1).heading()
}

/// Length of a travel vector
pub fn travel_length(points: Segment) -> f32 {
    let [v1, v2] = points;
    (v2 - v1).length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    fn cross(a: Vec2, b: Vec2) -> f32 {
        a.x * b.y - a.y * b.x
    }

    #[test]
    fn test_point_in_triangle_inside_and_outside() {
        let tri = [v(0.0, 0.0), v(100.0, 0.0), v(0.0, 100.0)];
        assert!(point_in_triangle(v(10.0, 10.0), tri));
        assert!(point_in_triangle(v(0.0, 0.0), tri)); // vertex counts
        assert!(point_in_triangle(v(50.0, 50.0), tri)); // hypotenuse counts
        assert!(!point_in_triangle(v(60.0, 60.0), tri));
        assert!(!point_in_triangle(v(-1.0, 10.0), tri));
    }

    #[test]
    fn test_point_in_degenerate_triangle() {
        let tri = [v(0.0, 0.0), v(50.0, 50.0), v(100.0, 100.0)];
        assert!(!point_in_triangle(v(0.0, 0.0), tri));
        assert!(!point_in_triangle(v(50.0, 50.0), tri));
    }

    #[test]
    fn test_segments_cross() {
        assert!(segments_intersect(
            [v(0.0, 0.0), v(100.0, 100.0)],
            [v(0.0, 100.0), v(100.0, 0.0)]
        ));
        assert!(!segments_intersect(
            [v(0.0, 0.0), v(40.0, 40.0)],
            [v(0.0, 100.0), v(100.0, 0.0)]
        ));
    }

    #[test]
    fn test_segments_touching_endpoint_do_not_intersect() {
        // T junction exactly at the end of the first segment
        assert!(!segments_intersect(
            [v(0.0, 0.0), v(50.0, 0.0)],
            [v(50.0, -50.0), v(50.0, 50.0)]
        ));
    }

    #[test]
    fn test_parallel_and_collinear_segments() {
        assert!(!segments_intersect(
            [v(0.0, 0.0), v(100.0, 0.0)],
            [v(0.0, 10.0), v(100.0, 10.0)]
        ));
        assert!(!segments_intersect(
            [v(0.0, 0.0), v(100.0, 0.0)],
            [v(50.0, 0.0), v(150.0, 0.0)]
        ));
    }

    #[test]
    fn test_any_segment_intersects() {
        let travel = [v(0.0, 0.0), v(100.0, 0.0)];
        let miss = [v(0.0, 10.0), v(100.0, 10.0)];
        let hit = [v(50.0, -10.0), v(50.0, 10.0)];
        assert!(!any_segment_intersects(travel, &[]));
        assert!(!any_segment_intersects(travel, &[miss]));
        assert!(any_segment_intersects(travel, &[miss, hit]));
    }

    #[test]
    fn test_curve_vertical_segment_single_root() {
        let curve = [v(0.0, 0.0), v(50.0, 100.0), v(100.0, 0.0)];
        let hits = curve_segment_intersect(curve, [v(50.0, -10.0), v(50.0, 110.0)]);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].root - 0.5).abs() < 1e-6);
        assert!((hits[0].point - v(50.0, 50.0)).length() < 1e-4);
    }

    #[test]
    fn test_curve_horizontal_segment_two_roots() {
        // Parabola apex at y=50; the line y=25 crosses it twice
        let curve = [v(0.0, 0.0), v(50.0, 100.0), v(100.0, 0.0)];
        let hits = curve_segment_intersect(curve, [v(-10.0, 25.0), v(110.0, 25.0)]);
        assert_eq!(hits.len(), 2);
        for hit in &hits {
            assert!((hit.point.y - 25.0).abs() < 1e-3);
            assert!((point_at_curve(curve, hit.root) - hit.point).length() < 1e-4);
        }
        assert!(hits[0].root != hits[1].root);
    }

    #[test]
    fn test_curve_tangent_segment_single_root() {
        // y=50 touches the parabola only at its apex
        let curve = [v(0.0, 0.0), v(50.0, 100.0), v(100.0, 0.0)];
        let hits = curve_segment_intersect(curve, [v(0.0, 50.0), v(100.0, 50.0)]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].root, 0.5);
        assert_eq!(hits[0].point, v(50.0, 50.0));
    }

    #[test]
    fn test_nearly_flat_curve_crossed_steeply() {
        // Leading coefficient is tiny next to the linear one
        let curve = [v(0.0, 0.0), v(50.0, 0.01), v(100.0, 0.0)];
        let hits = curve_segment_intersect(curve, [v(30.0, -50.0), v(31.0, 50.0)]);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].root - 0.305).abs() < 1e-4, "root {}", hits[0].root);
        assert!((hits[0].point - v(30.5, 0.004)).length() < 1e-2);
    }

    #[test]
    fn test_quadratic_roots_stable() {
        assert_eq!(quadratic_roots(0.0, 0.0, 1.0), Vec::<f64>::new());
        assert_eq!(quadratic_roots(0.0, 2.0, -1.0), vec![0.5]);
        assert_eq!(quadratic_roots(1.0, 0.0, 1.0), Vec::<f64>::new());
        assert_eq!(quadratic_roots(1.0, -2.0, 1.0), vec![1.0]);

        let mut roots = quadratic_roots(1.0, 0.0, -4.0);
        roots.sort_by(f64::total_cmp);
        assert_eq!(roots, vec![-2.0, 2.0]);

        // Small root of t² + 1e8·t + 1 is about -1e-8; the textbook form gives 0
        let roots = quadratic_roots(1.0, 1e8, 1.0);
        assert!(roots.iter().any(|r| (r + 1e-8).abs() < 1e-15));
    }

    #[test]
    fn test_curve_segment_out_of_bounds() {
        let curve = [v(0.0, 0.0), v(50.0, 100.0), v(100.0, 0.0)];
        // Same line as above, but the segment stops short of both crossings
        let hits = curve_segment_intersect(curve, [v(40.0, 25.0), v(60.0, 25.0)]);
        assert!(hits.is_empty());
        // Line above the apex
        let hits = curve_segment_intersect(curve, [v(-10.0, 80.0), v(110.0, 80.0)]);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_curve_diagonal_segment() {
        let curve = [v(125.0, 300.0), v(570.0, 280.0), v(275.0, 100.0)];
        let travel = [v(30.0, 125.0), v(330.0, 275.0)];
        let hits = curve_segment_intersect(curve, travel);
        assert!(!hits.is_empty());
        for hit in &hits {
            assert!((0.0..=1.0).contains(&hit.root));
            // Hit lies on the travel line
            let along = hit.point - travel[0];
            let dir = travel[1] - travel[0];
            assert!(cross(along, dir).abs() / dir.length() < 1e-2);
        }
    }

    #[test]
    fn test_line_segment_intersect() {
        let wall = [v(50.0, -50.0), v(50.0, 50.0)];
        let hits = line_segment_intersect(wall, [v(0.0, 0.0), v(100.0, 0.0)]);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].root - 0.5).abs() < 1e-6);
        assert_eq!(hits[0].point, v(50.0, 0.0));

        // Short of the wall
        assert!(line_segment_intersect(wall, [v(0.0, 0.0), v(40.0, 0.0)]).is_empty());
        // Parallel
        assert!(line_segment_intersect(wall, [v(0.0, -50.0), v(0.0, 50.0)]).is_empty());
        // Past the wall's end
        assert!(line_segment_intersect(wall, [v(0.0, 80.0), v(100.0, 80.0)]).is_empty());
    }

    #[test]
    fn test_point_at_curve_midpoint() {
        let curve = [v(0.0, 0.0), v(50.0, 100.0), v(100.0, 0.0)];
        assert_eq!(point_at_curve(curve, 0.5), v(50.0, 50.0));
    }

    #[test]
    fn test_derivative_at_curve_endpoints() {
        let curve = [v(0.0, 0.0), v(50.0, 100.0), v(100.0, 0.0)];
        assert_eq!(derivative_at_curve(curve, 0.0), v(100.0, 200.0));
        assert_eq!(derivative_at_curve(curve, 1.0), v(100.0, -200.0));
        assert_eq!(derivative_at_curve(curve, 0.5), v(100.0, 0.0));
    }

    #[test]
    fn test_normal_at_curve_apex() {
        let curve = [v(0.0, 0.0), v(50.0, 100.0), v(100.0, 0.0)];
        let n = normal_at_curve(curve, 0.5).unwrap();
        assert!((n - v(0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_normal_undefined_for_zero_tangent() {
        // Control point on the start point: tangent vanishes at t=0
        let curve = [v(10.0, 10.0), v(10.0, 10.0), v(100.0, 0.0)];
        assert!(normal_at_curve(curve, 0.0).is_none());
        assert!(normal_at_curve(curve, 0.5).is_some());
    }

    #[test]
    fn test_travel_angle_and_length() {
        let travel = [v(10.0, 10.0), v(13.0, 14.0)];
        assert!((travel_length(travel) - 5.0).abs() < 1e-6);
        assert!((travel_angle([v(0.0, 0.0), v(10.0, 0.0)]) - FRAC_PI_2).abs() < 1e-6);
        assert!((travel_angle([v(0.0, 0.0), v(0.0, 10.0)]) - PI).abs() < 1e-6);
    }

    fn grid_point() -> impl Strategy<Value = Vec2> {
        (-200i32..=200, -200i32..=200).prop_map(|(x, y)| v(x as f32, y as f32))
    }

    fn any_point() -> impl Strategy<Value = Vec2> {
        (-500.0f32..500.0, -500.0f32..500.0).prop_map(|(x, y)| v(x, y))
    }

    proptest! {
        #[test]
        fn prop_segments_intersect_symmetric(
            a in grid_point(), b in grid_point(), c in grid_point(), d in grid_point()
        ) {
            prop_assert_eq!(segments_intersect([a, b], [c, d]), segments_intersect([c, d], [a, b]));
        }

        #[test]
        fn prop_point_in_triangle_winding_invariant(
            p in grid_point(), p0 in grid_point(), p1 in grid_point(), p2 in grid_point()
        ) {
            prop_assert_eq!(
                point_in_triangle(p, [p0, p1, p2]),
                point_in_triangle(p, [p2, p1, p0])
            );
        }

        #[test]
        fn prop_point_at_curve_endpoints_exact(p1 in any_point(), pc in any_point(), p2 in any_point()) {
            let curve = [p1, pc, p2];
            prop_assert_eq!(point_at_curve(curve, 0.0), p1);
            prop_assert_eq!(point_at_curve(curve, 1.0), p2);
        }

        #[test]
        fn prop_normal_is_unit(p1 in any_point(), pc in any_point(), p2 in any_point(), t in 0.0f32..=1.0) {
            let curve = [p1, pc, p2];
            prop_assume!(derivative_at_curve(curve, t).length() > 1e-3);
            let n = normal_at_curve(curve, t).unwrap();
            prop_assert!((n.length() - 1.0).abs() < 1e-4);
            // Perpendicular to the tangent
            let tangent = derivative_at_curve(curve, t).normalize();
            prop_assert!(n.dot(tangent).abs() < 1e-3);
        }
    }
}
