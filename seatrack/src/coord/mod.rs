//! GPS coordinate conversions and textual rendering.
//!
//! A coordinate is a `[degrees, minutes, seconds]` triple and a point is a
//! `[latitude, longitude]` pair of triples. Shapes are validated at run
//! time and nothing else is: degrees, minutes and seconds are deliberately
//! left unnormalised.
//!
//! # Known quirks, kept for compatibility
//!
//! - [`coordinate_from_degrees`] decomposes with `floor`, not rounding:
//!   the conversion is lossy and produces surprising component signs for
//!   negative input.
//! - [`point_from_radians`] decomposes both axes with the degrees
//!   converter, exactly like [`point_from_degrees`]. Callers that hold
//!   radians must convert with [`degrees_from_radians`] first.

mod types;


pub use types::{
    Coordinate, CoordError, Point, EARTH_RADIUS, PI, SEMI_MAJOR_AXIS, SEMI_MINOR_AXIS,
};

/// Checks that a coordinate is a degrees-minutes-seconds triple.
pub fn validate_coordinate(coordinate: &[f64]) -> Result<(), CoordError> {
    if coordinate.len() != 3 {
        return Err(CoordError::InvalidCoordinateShape(coordinate.len()));
    }
    Ok(())
}

/// Checks that a point is a pair of well-formed coordinates.
pub fn validate_point(point: &[Coordinate]) -> Result<(), CoordError> {
    if point.len() != 2 {
        return Err(CoordError::InvalidPointShape(point.len()));
    }

    validate_coordinate(&point[0])?;
    validate_coordinate(&point[1])?;
    Ok(())
}

/// Converts decimal degrees to radians using the library pi.
#[inline]
pub fn radians_from_degrees(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts radians to decimal degrees using the library pi.
#[inline]
pub fn degrees_from_radians(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Converts a DMS coordinate to decimal degrees.
///
/// # Example
///
/// ```
/// use seatrack::coord::degrees_from_coordinate;
///
/// let degrees = degrees_from_coordinate(&[41.0, 59.0, 4.0]).unwrap();
/// assert!((degrees - 41.984_444_444_444).abs() < 1e-9);
/// ```
pub fn degrees_from_coordinate(coordinate: &[f64]) -> Result<f64, CoordError> {
    validate_coordinate(coordinate)?;

    Ok(coordinate[0] + coordinate[1] / 60.0 + coordinate[2] / 3600.0)
}

/// Converts a DMS coordinate to radians.
pub fn radians_from_coordinate(coordinate: &[f64]) -> Result<f64, CoordError> {
    Ok(radians_from_degrees(degrees_from_coordinate(coordinate)?))
}

/// Converts a point to decimal degrees as a `(latitude, longitude)` pair.
pub fn degrees_from_point(point: &[Coordinate]) -> Result<(f64, f64), CoordError> {
    validate_point(point)?;

    Ok((
        degrees_from_coordinate(&point[0])?,
        degrees_from_coordinate(&point[1])?,
    ))
}

/// Converts a point to radians as a `(latitude, longitude)` pair.
pub fn radians_from_point(point: &[Coordinate]) -> Result<(f64, f64), CoordError> {
    validate_point(point)?;

    Ok((
        radians_from_coordinate(&point[0])?,
        radians_from_coordinate(&point[1])?,
    ))
}

/// Decomposes decimal degrees into a DMS triple.
///
/// Each component is truncated with `floor` in turn, so the conversion is
/// lossy and never rounds up. Negative input pushes the degrees component
/// below the intuitive value and flips the remainder.
///
/// # Example
///
/// ```
/// use seatrack::coord::coordinate_from_degrees;
///
/// assert_eq!(coordinate_from_degrees(41.9999), vec![41.0, 59.0, 59.0]);
/// assert_eq!(coordinate_from_degrees(-0.5), vec![-1.0, 30.0, 0.0]);
/// ```
pub fn coordinate_from_degrees(degrees: f64) -> Coordinate {
    let d = degrees.floor();
    let m = ((degrees - d) * 60.0).floor();
    let s = ((degrees - d - m / 60.0) * 3600.0).floor();

    vec![d, m, s]
}

/// Decomposes radians into a DMS triple.
pub fn coordinate_from_radians(radians: f64) -> Coordinate {
    coordinate_from_degrees(degrees_from_radians(radians))
}

/// Builds a point from decimal-degree latitude and longitude.
pub fn point_from_degrees(latitude: f64, longitude: f64) -> Point {
    vec![
        coordinate_from_degrees(latitude),
        coordinate_from_degrees(longitude),
    ]
}

/// Builds a point from radian latitude and longitude.
///
/// Both axes are decomposed with the degrees converter, exactly like
/// [`point_from_degrees`]; see the module docs on kept quirks.
pub fn point_from_radians(latitude: f64, longitude: f64) -> Point {
    vec![
        coordinate_from_degrees(latitude),
        coordinate_from_degrees(longitude),
    ]
}

/// Renders a coordinate as `41º 59' 4"`, components truncated to whole
/// numbers.
pub fn text_from_coordinate(coordinate: &[f64]) -> Result<String, CoordError> {
    validate_coordinate(coordinate)?;

    Ok(format!(
        "{}º {}' {}\"",
        coordinate[0] as i64, coordinate[1] as i64, coordinate[2] as i64
    ))
}

/// Renders a coordinate with an `N`/`S` or `E`/`W` hemisphere suffix.
///
/// The hemisphere follows the sign of the degrees component: positive is
/// north/east, zero and negative are south/west.
pub fn text_from_coordinate_with_hemisphere(
    coordinate: &[f64],
    is_latitude: bool,
) -> Result<String, CoordError> {
    let mut text = text_from_coordinate(coordinate)?;

    let suffix = match (is_latitude, coordinate[0] > 0.0) {
        (true, true) => " N",
        (true, false) => " S",
        (false, true) => " E",
        (false, false) => " W",
    };
    text.push_str(suffix);

    Ok(text)
}

/// Renders a point as latitude and longitude texts with hemispheres.
///
/// # Example
///
/// ```
/// use seatrack::coord::text_from_point;
///
/// let point = vec![vec![41.0, 59.0, 4.0], vec![2.0, 49.0, 16.0]];
/// assert_eq!(
///     text_from_point(&point).unwrap(),
///     "41º 59' 4\" N 2º 49' 16\" E"
/// );
/// ```
pub fn text_from_point(point: &[Coordinate]) -> Result<String, CoordError> {
    validate_point(point)?;

    Ok(format!(
        "{} {}",
        text_from_coordinate_with_hemisphere(&point[0], true)?,
        text_from_coordinate_with_hemisphere(&point[1], false)?
    ))
}
