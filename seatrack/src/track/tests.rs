//! Tests for planar track generation

use super::*;

const TOLERANCE: f64 = 1e-6;

fn pole() -> Vec<PlanarPoint> {
    vec![PlanarPoint::default()]
}

fn assert_point_near(actual: PlanarPoint, x: f64, y: f64) {
    assert!(
        (actual.x - x).abs() < TOLERANCE && (actual.y - y).abs() < TOLERANCE,
        "Expected ({}, {}), got ({}, {})",
        x,
        y,
        actual.x,
        actual.y
    );
}

// ==================== line tests ====================

#[test]
fn test_line_due_north() {
    let mut path = pole();
    line(&mut path, 10.0, 0.0, 2);

    assert_eq!(path.len(), 3);
    assert_point_near(path[1], 0.0, 5.0);
    assert_point_near(path[2], 0.0, 10.0);
}

#[test]
fn test_line_due_east() {
    let mut path = pole();
    line(&mut path, 10.0, 0.5 * PI, 2);

    assert_point_near(path[1], 5.0, 0.0);
    assert_point_near(path[2], 10.0, 0.0);
}

#[test]
fn test_line_zero_points_appends_nothing() {
    let mut path = pole();
    line(&mut path, 10.0, 0.0, 0);

    assert_eq!(path.len(), 1, "Zero points should leave the path untouched");
}

#[test]
fn test_line_anchors_on_last_point() {
    let mut path = pole();
    line(&mut path, 10.0, 0.0, 1);
    line(&mut path, 10.0, 0.5 * PI, 1);

    assert_point_near(path[1], 0.0, 10.0);
    assert_point_near(path[2], 10.0, 10.0);
}

// ==================== rectangle / square tests ====================

#[test]
fn test_rectangle_point_count() {
    let mut path = pole();
    rectangle(&mut path, 20.0, 10.0, 0.0, 4);

    assert_eq!(path.len(), 1 + 4 * 4, "Four sides of four points each");
}

#[test]
fn test_rectangle_alternates_side_lengths() {
    let mut path = pole();
    rectangle(&mut path, 20.0, 10.0, 0.0, 1);

    assert_point_near(path[1], 0.0, 20.0);
    assert_point_near(path[2], 10.0, 20.0);
    assert_point_near(path[3], 10.0, 0.0);
    assert_point_near(path[4], 0.0, 0.0);
}

#[test]
fn test_square_closes_on_the_pole() {
    let mut path = pole();
    square(&mut path, 10.0, 0.0, 1);

    assert_eq!(path.len(), 5, "Square with one point per side appends 4");
    assert_point_near(path[1], 0.0, 10.0);
    assert_point_near(path[2], 10.0, 10.0);
    assert_point_near(path[3], 10.0, 0.0);
    assert_point_near(path[4], 0.0, 0.0);
}

#[test]
fn test_square_with_tilt_still_closes() {
    let mut path = pole();
    square(&mut path, 10.0, 0.3 * PI, 8);

    let last = *path.last().unwrap();
    assert_point_near(last, 0.0, 0.0);
}

// ==================== spiral / sector / circle tests ====================

#[test]
fn test_spiral_interpolates_radius_and_angle() {
    let mut path = pole();
    // Center sits at (0, -10); radius grows 10 -> 20 over a half turn.
    spiral(&mut path, 10.0, 0.0, 20.0, PI, 2);

    assert_eq!(path.len(), 3);
    assert_point_near(path[1], 15.0, -10.0);
    assert_point_near(path[2], 0.0, -30.0);
}

#[test]
fn test_sector_quarter_turn() {
    let mut path = pole();
    sector(&mut path, 10.0, 0.0, 0.5 * PI, 1);

    assert_point_near(path[1], 10.0, -10.0);
}

#[test]
fn test_sector_starts_at_current_last_point() {
    let mut path = vec![PlanarPoint::new(3.0, 4.0)];
    sector(&mut path, 10.0, 0.25 * PI, 0.75 * PI, 64);

    // The arc's parametrisation passes through the anchor at its initial
    // angle, so the first appended point is one step along it, close by.
    let step = ((path[1].x - 3.0).powi(2) + (path[1].y - 4.0).powi(2)).sqrt();
    assert!(
        step < 10.0 * 0.5 * PI / 64.0 + TOLERANCE,
        "First arc point should be one step from the anchor, got {}",
        step
    );
}

#[test]
fn test_circle_returns_to_its_start() {
    let mut path = vec![PlanarPoint::new(2.0, 7.0)];
    circle(&mut path, 5.0, 0.3, 16);

    assert_eq!(path.len(), 17);
    let last = *path.last().unwrap();
    assert_point_near(last, 2.0, 7.0);
}

#[test]
fn test_circle_stays_on_the_radius() {
    let radius = 5.0;
    let mut path = pole();
    circle(&mut path, radius, 0.0, 32);

    // Center is offset from the pole by the initial radius vector.
    let center = PlanarPoint::new(0.0, -radius);
    for point in path.iter().skip(1) {
        let r = ((point.x - center.x).powi(2) + (point.y - center.y).powi(2)).sqrt();
        assert!(
            (r - radius).abs() < TOLERANCE,
            "Point ({}, {}) is off the circle: r = {}",
            point.x,
            point.y,
            r
        );
    }
}

// ==================== squiggle tests ====================

#[test]
fn test_squiggle_point_count() {
    let mut path = pole();
    squiggle(&mut path, 10.0, 5.0, 0.0, 0.5 * PI, 4, 3);

    // 4 lines and 3 connecting turns, 3 points each.
    assert_eq!(path.len(), 1 + 4 * 3 + 3 * 3);
}

#[test]
fn test_squiggle_single_line_is_a_line() {
    let mut squiggle_path = pole();
    squiggle(&mut squiggle_path, 10.0, 5.0, 0.0, 0.5 * PI, 1, 4);

    let mut line_path = pole();
    line(&mut line_path, 10.0, 0.0, 4);

    assert_eq!(squiggle_path, line_path);
}

#[test]
fn test_squiggle_first_turn_geometry() {
    let mut path = pole();
    squiggle(&mut path, 10.0, 5.0, 0.0, 0.5 * PI, 2, 1);

    // North run, quarter turn to the east, east run.
    assert_point_near(path[1], 0.0, 10.0);
    assert_point_near(path[2], 5.0, 15.0);
    assert_point_near(path[3], 15.0, 15.0);
}

// ==================== letter_pi tests ====================

#[test]
fn test_letter_pi_point_count() {
    let mut path = pole();
    letter_pi(&mut path, 50.0, 40.0, 10.0, 0.0, 6);

    // Four arcs and three straight runs.
    assert_eq!(path.len(), 1 + 7 * 6);
}

#[test]
fn test_letter_pi_points_are_finite() {
    let mut path = pole();
    letter_pi(&mut path, 50.0, 40.0, 10.0, 0.3 * PI, 16);

    for point in &path {
        assert!(point.x.is_finite() && point.y.is_finite());
    }
}

// ==================== append-only guarantees ====================

#[test]
fn test_generators_never_touch_existing_points() {
    let mut path = vec![PlanarPoint::new(1.0, 2.0)];
    line(&mut path, 10.0, 0.0, 2);
    let snapshot = path.clone();

    square(&mut path, 10.0, 0.0, 2);
    circle(&mut path, 5.0, 0.0, 8);
    squiggle(&mut path, 10.0, 5.0, 0.0, 0.5 * PI, 3, 2);

    assert_eq!(
        &path[..snapshot.len()],
        &snapshot[..],
        "Existing points must stay in place and in order"
    );
}

#[test]
fn test_zero_points_everywhere_is_a_no_op() {
    let mut path = pole();
    rectangle(&mut path, 10.0, 5.0, 0.0, 0);
    circle(&mut path, 5.0, 0.0, 0);
    letter_pi(&mut path, 10.0, 10.0, 2.0, 0.0, 0);

    assert_eq!(path.len(), 1);
}
