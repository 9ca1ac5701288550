//! SeaTrack - navigation math for exercising a surface vehicle's autopilot
//!
//! This library converts between GPS coordinate representations
//! (degrees-minutes-seconds triples, decimal degrees, radians), solves the
//! great-circle distance and destination problems on a spherical or
//! ellipsoidal Earth model, and generates planar waypoint tracks (lines,
//! squares, spirals, squiggles and friends) for feeding a navigation stack
//! under test.
//!
//! # High-Level API
//!
//! Generate a figure in local meters, then project its waypoints from a
//! GPS start point:
//!
//! ```
//! use seatrack::coord;
//! use seatrack::geodesy;
//! use seatrack::track::{self, PlanarPoint};
//!
//! // A 4-corner square track anchored at the pole.
//! let mut path = vec![PlanarPoint::default()];
//! track::square(&mut path, 100.0, 0.0, 1);
//!
//! // Project the first corner from a GPS start point.
//! let corner = &path[1];
//! let range = corner.x.hypot(corner.y);
//! let bearing = coord::degrees_from_radians(corner.x.atan2(corner.y));
//! let (lat, lon) = geodesy::destination(41.98, 2.82, range, bearing, false);
//!
//! assert!(lat > 41.98, "corner is due north of the start");
//! assert!((lon - 2.82).abs() < 1e-9, "longitude is unchanged");
//! ```

pub mod coord;
pub mod geodesy;
pub mod logging;
pub mod track;

/// Version of the SeaTrack library and CLI.
///
/// Synchronized across all workspace members; injected at compile time
/// from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version string.
pub fn version() -> &'static str {
    VERSION
}
