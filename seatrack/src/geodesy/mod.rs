//! Great-circle geodesy on a spherical or ellipsoidal Earth model.
//!
//! Distances use the haversine formula, which is numerically stable at
//! short range; for long-range work look at Vincenty's algorithm instead.
//! Destinations come from the standard spherical forward solution.
//!
//! # Coordinate System
//!
//! - Latitude: degrees north
//! - Longitude: degrees east
//! - Bearing: degrees true, clockwise from north
//! - Distance: meters
//!
//! All trigonometry runs in radians internally via the library pi; the
//! public surface is decimal degrees throughout. Scalar functions perform
//! no validation and can return NaN for out-of-domain input; that
//! propagates per IEEE-754, unguarded.

use tracing::trace;

use crate::coord::{
    self, CoordError, Coordinate, Point, EARTH_RADIUS, SEMI_MAJOR_AXIS, SEMI_MINOR_AXIS,
};

/// Ellipsoidal Earth radius of curvature at a latitude, in meters.
///
/// Interpolates between the WGS-84 semi-axes:
/// `R(β) = sqrt((a²A + b²B) / (A + B))` with `A = (a cos β)²` and
/// `B = (b sin β)²`, β being the latitude in radians.
///
/// # Example
///
/// ```
/// use seatrack::geodesy::earth_radius;
/// use seatrack::coord::{SEMI_MAJOR_AXIS, SEMI_MINOR_AXIS};
///
/// let radius = earth_radius(45.0);
/// assert!(radius > SEMI_MINOR_AXIS && radius < SEMI_MAJOR_AXIS);
/// ```
pub fn earth_radius(latitude: f64) -> f64 {
    let beta = coord::radians_from_degrees(latitude);
    let a = SEMI_MAJOR_AXIS;
    let b = SEMI_MINOR_AXIS;
    let cos_term = (a * beta.cos()).powi(2);
    let sin_term = (b * beta.sin()).powi(2);

    ((a.powi(2) * cos_term + b.powi(2) * sin_term) / (cos_term + sin_term)).sqrt()
}

/// Ellipsoidal Earth radius for a latitude given as a DMS coordinate.
pub fn earth_radius_from_coordinate(latitude: &[f64]) -> Result<f64, CoordError> {
    Ok(earth_radius(coord::degrees_from_coordinate(latitude)?))
}

/// Ellipsoidal Earth radius at a GPS point, using its latitude axis.
pub fn earth_radius_from_point(point: &[Coordinate]) -> Result<f64, CoordError> {
    coord::validate_point(point)?;

    Ok(earth_radius(coord::degrees_from_coordinate(&point[0])?))
}

/// Haversine great-circle distance between two positions, in meters.
///
/// With `use_ellipsoidal_radius` set, the sphere radius is the WGS-84
/// radius of curvature evaluated at the midpoint latitude; otherwise the
/// mean Earth radius is used.
///
/// # Example
///
/// ```
/// use seatrack::geodesy::distance;
///
/// // One degree of latitude is ~111.2 km on the mean-radius sphere.
/// let d = distance(0.0, 0.0, 1.0, 0.0, false);
/// assert!((d - 111_195.0).abs() < 10.0);
/// ```
pub fn distance(
    latitude1: f64,
    longitude1: f64,
    latitude2: f64,
    longitude2: f64,
    use_ellipsoidal_radius: bool,
) -> f64 {
    let radius = if use_ellipsoidal_radius {
        earth_radius(0.5 * (latitude1 + latitude2))
    } else {
        EARTH_RADIUS
    };

    let lat1 = coord::radians_from_degrees(latitude1);
    let lon1 = coord::radians_from_degrees(longitude1);
    let lat2 = coord::radians_from_degrees(latitude2);
    let lon2 = coord::radians_from_degrees(longitude2);

    let delta_lat = lat2 - lat1;
    let delta_lon = lon2 - lon1;

    let a = (0.5 * delta_lat).sin().powi(2)
        + lat1.cos() * lat2.cos() * (0.5 * delta_lon).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}

/// Haversine distance between two GPS points, in meters.
///
/// Validates both points, extracts decimal degrees and delegates to
/// [`distance`]. The point form always measures on the mean Earth radius;
/// `use_ellipsoidal_radius` is kept in the signature for parity with
/// [`distance`] but is not forwarded.
pub fn distance_between_points(
    point1: &[Coordinate],
    point2: &[Coordinate],
    use_ellipsoidal_radius: bool,
) -> Result<f64, CoordError> {
    let (lat1, lon1) = coord::degrees_from_point(point1)?;
    let (lat2, lon2) = coord::degrees_from_point(point2)?;

    let _ = use_ellipsoidal_radius;
    Ok(distance(lat1, lon1, lat2, lon2, false))
}

/// Solves the direct geodesic problem: the position reached from a start
/// point after traveling `distance` meters along `bearing`.
///
/// Returns `(latitude, longitude)` in decimal degrees with the longitude
/// normalised into `(-180, 180]`. With `use_ellipsoidal_radius` set, the
/// sphere radius is the WGS-84 radius at the start latitude, unlike
/// [`distance`] which evaluates it at the midpoint.
pub fn destination(
    latitude: f64,
    longitude: f64,
    distance: f64,
    bearing: f64,
    use_ellipsoidal_radius: bool,
) -> (f64, f64) {
    let radius = if use_ellipsoidal_radius {
        earth_radius(latitude)
    } else {
        EARTH_RADIUS
    };

    let angular_distance = distance / radius;

    let bearing = coord::radians_from_degrees(bearing);
    let lat1 = coord::radians_from_degrees(latitude);
    let lon1 = coord::radians_from_degrees(longitude);

    let sin_lat1 = lat1.sin();
    let cos_lat1 = lat1.cos();
    let sin_d = angular_distance.sin();
    let cos_d = angular_distance.cos();

    let sin_lat2 = sin_lat1 * cos_d + cos_lat1 * sin_d * bearing.cos();
    let lat2 = sin_lat2.asin();

    let y = bearing.sin() * sin_d * cos_lat1;
    let x = cos_d - sin_lat1 * sin_lat2;
    let lon2 = lon1 + y.atan2(x);

    let latitude2 = coord::degrees_from_radians(lat2);
    let longitude2 = (coord::degrees_from_radians(lon2) + 540.0) % 360.0 - 180.0;
    trace!(latitude2, longitude2, "projected destination");

    (latitude2, longitude2)
}

/// Same as [`destination`], returning a full GPS [`Point`].
pub fn destination_point(
    latitude: f64,
    longitude: f64,
    distance: f64,
    bearing: f64,
    use_ellipsoidal_radius: bool,
) -> Point {
    let (lat, lon) = destination(latitude, longitude, distance, bearing, use_ellipsoidal_radius);

    coord::point_from_degrees(lat, lon)
}
