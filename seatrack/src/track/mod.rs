//! Planar test-track generators.
//!
//! Generators append waypoints to a caller-owned path measured in meters
//! from a fixed pole, the path's first element. Angles are radians,
//! clockwise from the vertical north axis, so a heading taken from a
//! generated segment converts straight into a [`crate::geodesy`] bearing.
//!
//! Every generator only appends: existing points are never removed or
//! reordered, and composing generators chains figures end to end. A
//! `number_of_points` of zero appends nothing.
//!
//! # Panics
//!
//! All generators anchor on the path's last point and panic if the path
//! is empty. Seed it with the pole first:
//!
//! ```
//! use seatrack::track::{self, PlanarPoint};
//!
//! let mut path = vec![PlanarPoint::default()];
//! track::line(&mut path, 10.0, 0.0, 2);
//! assert_eq!(path.len(), 3);
//! ```

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::coord::PI;

/// A waypoint in meters east (`x`) and north (`y`) of the pole.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Appends `number_of_points` evenly spaced waypoints along a straight
/// segment of `length` meters from the path's last point.
pub fn line(path: &mut Vec<PlanarPoint>, length: f64, angle: f64, number_of_points: usize) {
    let origin = path[path.len() - 1];
    let x_length = length * angle.sin();
    let y_length = length * angle.cos();

    for i in 1..=number_of_points {
        let cut = i as f64 / number_of_points as f64;

        path.push(PlanarPoint::new(
            origin.x + cut * x_length,
            origin.y + cut * y_length,
        ));
    }
}

/// Appends a rectangle: four lines, each turning 90° clockwise from the
/// previous, with side lengths alternating width/height.
pub fn rectangle(
    path: &mut Vec<PlanarPoint>,
    width: f64,
    height: f64,
    angle: f64,
    number_of_points: usize,
) {
    let mut angle = angle;
    let mut length = width;

    for i in 0..4 {
        line(path, length, angle, number_of_points);
        angle += 0.5 * PI;

        length = if i % 2 == 0 { height } else { width };
    }
}

/// Appends a square with side `length`.
pub fn square(path: &mut Vec<PlanarPoint>, length: f64, angle: f64, number_of_points: usize) {
    rectangle(path, length, length, angle, number_of_points);
}

/// Appends an arc whose radius and angle interpolate linearly from the
/// initial to the finish values.
///
/// The arc's center is offset from the path's last point by the initial
/// radius and angle, so the first interpolated point continues the path
/// without a jump.
pub fn spiral(
    path: &mut Vec<PlanarPoint>,
    initial_radius: f64,
    initial_angle: f64,
    finish_radius: f64,
    finish_angle: f64,
    number_of_points: usize,
) {
    let last = path[path.len() - 1];
    let x_offset = last.x - initial_radius * initial_angle.sin();
    let y_offset = last.y - initial_radius * initial_angle.cos();

    for i in 1..=number_of_points {
        let cut = i as f64 / number_of_points as f64;
        let radius = initial_radius + cut * (finish_radius - initial_radius);
        let angle = initial_angle + cut * (finish_angle - initial_angle);

        path.push(PlanarPoint::new(
            x_offset + radius * angle.sin(),
            y_offset + radius * angle.cos(),
        ));
    }
}

/// Appends a circular arc of constant `radius` between two angles.
pub fn sector(
    path: &mut Vec<PlanarPoint>,
    radius: f64,
    initial_angle: f64,
    finish_angle: f64,
    number_of_points: usize,
) {
    spiral(
        path,
        radius,
        initial_angle,
        radius,
        finish_angle,
        number_of_points,
    );
}

/// Appends a full circle starting and ending at `angle`.
pub fn circle(path: &mut Vec<PlanarPoint>, radius: f64, angle: f64, number_of_points: usize) {
    sector(path, radius, angle, angle + 2.0 * PI, number_of_points);
}

/// Appends a squiggle: straight runs of `length` meters joined by
/// alternating left/right turns of `rotation_angle`.
///
/// Tuned for a `rotation_angle` of π/2; other values still yield a valid
/// path, just a differently shaped one.
pub fn squiggle(
    path: &mut Vec<PlanarPoint>,
    length: f64,
    radius: f64,
    angle: f64,
    rotation_angle: f64,
    number_of_lines: usize,
    number_of_points: usize,
) {
    line(path, length, angle, number_of_points);

    let mut angle = angle;
    let mut next_angle = angle + rotation_angle;
    let mut turn_offset = -0.5 * PI;

    for i in 1..number_of_lines {
        sector(
            path,
            radius,
            angle + turn_offset,
            next_angle + turn_offset,
            number_of_points,
        );

        angle = next_angle;
        turn_offset = -turn_offset;

        line(path, length, angle, number_of_points);

        if i % 2 == 0 {
            next_angle += rotation_angle;
        } else {
            next_angle -= rotation_angle;
        }
    }

    debug!(
        points = path.len(),
        lines = number_of_lines,
        "generated squiggle"
    );
}

/// Appends a stylised Π glyph: four arcs and three straight runs in a
/// fixed sequence.
///
/// Worked example of composing [`sector`] and [`line`] into a compound
/// figure; the angle bookkeeping between steps is part of the shape.
pub fn letter_pi(
    path: &mut Vec<PlanarPoint>,
    vertical_length: f64,
    horizontal_length: f64,
    radius: f64,
    angle: f64,
    number_of_points: usize,
) {
    let mut angle = angle + PI;
    let mut rotation_angle = -0.5 * PI;

    sector(path, radius, angle, angle + rotation_angle, number_of_points);

    angle += 2.0 * rotation_angle;

    line(path, vertical_length, angle, number_of_points);

    angle -= rotation_angle;
    rotation_angle *= 3.0;

    sector(path, radius, angle, angle + rotation_angle, number_of_points);

    line(path, horizontal_length, angle, number_of_points);

    angle += -rotation_angle / 3.0;

    sector(path, radius, angle, angle + rotation_angle, number_of_points);

    line(path, vertical_length, angle, number_of_points);

    rotation_angle /= 3.0;
    angle -= rotation_angle;

    sector(path, radius, angle, angle + rotation_angle, number_of_points);

    debug!(points = path.len(), "generated letter pi");
}
