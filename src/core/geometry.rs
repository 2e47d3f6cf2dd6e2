/// Geometry primitive generators — polygons and curved paths.
///
/// All randomness is drawn from the caller's RNG in a fixed order, so a
/// seeded generator reproduces the same shapes exactly. Nothing here
/// validates its output: zero radii or zero sides yield degenerate shapes.
use rand::Rng;
use std::f64::consts::PI;

use crate::schema::element::{PathCommand, PathData, Point};

/// Vertex `i` of `sides` evenly spaced around `center`.
fn vertex(center: Point, radius: f64, i: u32, sides: u32) -> Point {
    let angle = (i as f64 * 2.0 * PI) / sides as f64;
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Uniform draw in [0.5, 1.0).
fn radius_jitter<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    0.5 + rng.gen::<f64>() * 0.5
}

pub fn regular_polygon(center: Point, radius: f64, sides: u32) -> Vec<Point> {
    (0..sides).map(|i| vertex(center, radius, i, sides)).collect()
}

/// Same angular spacing as [`regular_polygon`], each vertex radius scaled
/// independently by a factor in [0.5, 1.0).
pub fn irregular_polygon<R: Rng + ?Sized>(
    center: Point,
    base_radius: f64,
    sides: u32,
    rng: &mut R,
) -> Vec<Point> {
    (0..sides)
        .map(|i| vertex(center, base_radius * radius_jitter(rng), i, sides))
        .collect()
}

/// Closed blob of 6–9 control points around `origin`.
///
/// The first curve segment is a bare quadratic to point 1. Each later
/// segment adds a control point at 0.7 of the current radius, placed at
/// the previous vertex angle plus 0.5 rad, followed by the vertex itself.
pub fn organic_path<R: Rng + ?Sized>(origin: Point, size: f64, rng: &mut R) -> PathData {
    let num_points: u32 = 6 + rng.gen_range(0..4);
    let mut curve = Vec::with_capacity(2 * num_points as usize);

    for i in 1..num_points {
        let radius = size * radius_jitter(rng);
        let point = vertex(origin, radius, i, num_points);

        if i == 1 {
            curve.push(point);
        } else {
            let prev_angle = ((i - 1) as f64 * 2.0 * PI) / num_points as f64;
            let control = Point::new(
                origin.x + (radius * 0.7) * (prev_angle + 0.5).cos(),
                origin.y + (radius * 0.7) * (prev_angle + 0.5).sin(),
            );
            curve.push(control);
            curve.push(point);
        }
    }

    PathData {
        commands: vec![
            PathCommand::MoveTo(origin),
            PathCommand::QuadTo(curve),
            PathCommand::Close,
        ],
    }
}

/// Open stroke of 5–9 quadratic segments, each `length / segments` long
/// and heading in its own random direction. The control point sits on the
/// heading at half the segment length.
pub fn flowing_line<R: Rng + ?Sized>(start: Point, length: f64, rng: &mut R) -> PathData {
    let segments: u32 = 5 + rng.gen_range(0..5);
    let segment_length = length / segments as f64;

    let mut commands = Vec::with_capacity(segments as usize + 1);
    commands.push(PathCommand::MoveTo(start));

    let mut current = start;
    for _ in 0..segments {
        let angle = rng.gen::<f64>() * PI * 2.0;
        let control = Point::new(
            current.x + angle.cos() * segment_length * 0.5,
            current.y + angle.sin() * segment_length * 0.5,
        );
        current = Point::new(
            current.x + angle.cos() * segment_length,
            current.y + angle.sin() * segment_length,
        );
        commands.push(PathCommand::QuadTo(vec![control, current]));
    }

    PathData { commands }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f64 = 1e-9;

    #[test]
    fn square_vertices_on_circle() {
        let center = Point::new(100.0, 50.0);
        let points = regular_polygon(center, 40.0, 4);
        assert_eq!(points.len(), 4);
        for p in &points {
            assert!((p.distance_to(center) - 40.0).abs() < EPS);
        }
        // First vertex sits at angle zero.
        assert!((points[0].x - 140.0).abs() < EPS);
        assert!((points[0].y - 50.0).abs() < EPS);
    }

    #[test]
    fn zero_sides_is_empty() {
        assert!(regular_polygon(Point::new(0.0, 0.0), 10.0, 0).is_empty());
    }

    #[test]
    fn irregular_radii_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let center = Point::new(0.0, 0.0);
        for sides in 3..=8 {
            let points = irregular_polygon(center, 100.0, sides, &mut rng);
            assert_eq!(points.len(), sides as usize);
            for p in &points {
                let d = p.distance_to(center);
                assert!((50.0 - EPS..=100.0 + EPS).contains(&d), "radius {d} out of range");
            }
        }
    }

    #[test]
    fn irregular_deterministic_for_seed() {
        let center = Point::new(10.0, 20.0);
        let a = irregular_polygon(center, 30.0, 6, &mut StdRng::seed_from_u64(42));
        let b = irregular_polygon(center, 30.0, 6, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn organic_path_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let path = organic_path(Point::new(400.0, 300.0), 120.0, &mut rng);
            assert!(path.is_closed());
            assert_eq!(path.commands.len(), 3);
            let PathCommand::QuadTo(ref curve) = path.commands[1] else {
                panic!("expected quadratic curve");
            };
            // n control points give 1 + 2 * (n - 2) coordinates.
            let n = (curve.len() + 3) / 2;
            assert!((6..=9).contains(&n), "unexpected point count {n}");
            assert_eq!(curve.len() % 2, 1);
        }
    }

    #[test]
    fn organic_control_point_leans_from_previous_angle() {
        let mut rng = StdRng::seed_from_u64(11);
        let origin = Point::new(0.0, 0.0);
        let path = organic_path(origin, 100.0, &mut rng);
        let PathCommand::QuadTo(ref curve) = path.commands[1] else {
            panic!("expected quadratic curve");
        };
        let n = ((curve.len() + 3) / 2) as f64;
        // curve[1] is the control for vertex 2, curve[2] is vertex 2.
        let control = curve[1];
        let vertex2 = curve[2];
        let radius = vertex2.distance_to(origin);
        assert!((control.distance_to(origin) - radius * 0.7).abs() < 1e-6);
        let expected_angle = (2.0 * PI / n) + 0.5;
        assert!((control.y.atan2(control.x) - expected_angle).abs() < 1e-6);
    }

    #[test]
    fn flowing_line_is_open_and_connected() {
        let mut rng = StdRng::seed_from_u64(5);
        let start = Point::new(50.0, 60.0);
        let path = flowing_line(start, 300.0, &mut rng);
        assert!(!path.is_closed());
        assert_eq!(path.commands[0], PathCommand::MoveTo(start));

        let segments = path.commands.len() - 1;
        assert!((5..=9).contains(&segments));
        let segment_length = 300.0 / segments as f64;

        let mut current = start;
        for cmd in &path.commands[1..] {
            let PathCommand::QuadTo(pair) = cmd else {
                panic!("expected quadratic segment");
            };
            assert_eq!(pair.len(), 2);
            assert!((pair[0].distance_to(current) - segment_length * 0.5).abs() < 1e-6);
            assert!((pair[1].distance_to(current) - segment_length).abs() < 1e-6);
            current = pair[1];
        }
    }
}
