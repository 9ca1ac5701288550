//! SeaTrack CLI - prints generated test tracks as GPS points.
//!
//! Seeds a planar path at the pole, generates the requested figure, then
//! projects every waypoint from the start position by its range and
//! bearing from the pole and prints it in DMS notation, one point per
//! line. The output is meant to be piped into a navigation stack under
//! test.

use clap::{Parser, ValueEnum};
use tracing::info;

use seatrack::coord::{self, PI};
use seatrack::geodesy;
use seatrack::logging;
use seatrack::track::{self, PlanarPoint};

mod error;

use error::CliError;

#[derive(Debug, Clone, ValueEnum)]
enum Shape {
    /// Straight line of `--length` meters
    Line,
    /// Rectangle of `--length` by `--height`
    Rectangle,
    /// Square with side `--length`
    Square,
    /// Full circle of radius `--radius`
    Circle,
    /// Spiral opening from `--radius` to `--finish-radius` over one turn
    Spiral,
    /// Straight runs joined by alternating turns
    Squiggle,
    /// Stylised Π glyph (vertical `--length`, horizontal `--height`)
    LetterPi,
}

/// A degrees-minutes-seconds triple parsed from "D,M,S".
#[derive(Debug, Clone)]
struct Dms(Vec<f64>);

fn parse_dms(input: &str) -> Result<Dms, String> {
    let values = input
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|e| format!("invalid number in '{}': {}", input, e))?;

    coord::validate_coordinate(&values).map_err(|e| e.to_string())?;

    Ok(Dms(values))
}

#[derive(Parser)]
#[command(name = "seatrack")]
#[command(version = seatrack::VERSION)]
#[command(about = "Generate GPS test tracks for a vehicle navigation stack", long_about = None)]
struct Args {
    /// Track shape to generate
    #[arg(long, value_enum, default_value = "squiggle")]
    shape: Shape,

    /// Start latitude as a "D,M,S" triple
    #[arg(long, value_parser = parse_dms, default_value = "41,59,4")]
    lat: Dms,

    /// Start longitude as a "D,M,S" triple
    #[arg(long, value_parser = parse_dms, default_value = "2,49,16")]
    lon: Dms,

    /// Straight-segment length in meters
    #[arg(long, default_value_t = 1000.0)]
    length: f64,

    /// Rectangle height / letter-pi horizontal length in meters
    #[arg(long, default_value_t = 500.0)]
    height: f64,

    /// Turn, circle or spiral radius in meters
    #[arg(long, default_value_t = 1000.0)]
    radius: f64,

    /// Spiral finish radius in meters
    #[arg(long, default_value_t = 2000.0)]
    finish_radius: f64,

    /// Initial heading in degrees clockwise from north
    #[arg(long, default_value_t = 90.0)]
    angle: f64,

    /// Squiggle turn sweep in degrees
    #[arg(long, default_value_t = 180.0)]
    rotation: f64,

    /// Number of straight lines in a squiggle
    #[arg(long, default_value_t = 8)]
    lines: usize,

    /// Points per elementary figure
    #[arg(long, default_value_t = 16)]
    points: usize,

    /// Evaluate the WGS-84 radius at the start latitude instead of using
    /// the mean Earth radius
    #[arg(long)]
    ellipsoidal: bool,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_directive = if args.verbose { "debug" } else { "info" };
    if let Err(e) = logging::init_logging(default_directive) {
        CliError::LoggingInit(e).exit();
    }

    if let Err(e) = run(&args) {
        e.exit();
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let latitude = coord::degrees_from_coordinate(&args.lat.0)?;
    let longitude = coord::degrees_from_coordinate(&args.lon.0)?;

    let angle = coord::radians_from_degrees(args.angle);
    let rotation = coord::radians_from_degrees(args.rotation);

    let mut path = vec![PlanarPoint::default()];
    match args.shape {
        Shape::Line => track::line(&mut path, args.length, angle, args.points),
        Shape::Rectangle => {
            track::rectangle(&mut path, args.length, args.height, angle, args.points)
        }
        Shape::Square => track::square(&mut path, args.length, angle, args.points),
        Shape::Circle => track::circle(&mut path, args.radius, angle, args.points),
        Shape::Spiral => track::spiral(
            &mut path,
            args.radius,
            angle,
            args.finish_radius,
            angle + 2.0 * PI,
            args.points,
        ),
        Shape::Squiggle => track::squiggle(
            &mut path,
            args.length,
            args.radius,
            angle,
            rotation,
            args.lines,
            args.points,
        ),
        Shape::LetterPi => track::letter_pi(
            &mut path,
            args.length,
            args.height,
            args.radius,
            angle,
            args.points,
        ),
    }

    info!(
        shape = ?args.shape,
        waypoints = path.len() - 1,
        "generated track"
    );

    // Start point first, then every waypoint projected from it.
    let start = vec![args.lat.0.clone(), args.lon.0.clone()];
    println!("{}", coord::text_from_point(&start)?);

    for point in path.iter().skip(1) {
        let range = point.x.hypot(point.y);
        let bearing = coord::degrees_from_radians(point.x.atan2(point.y));
        let gps = geodesy::destination_point(latitude, longitude, range, bearing, args.ellipsoidal);

        println!("{}", coord::text_from_point(&gps)?);
    }

    Ok(())
}
