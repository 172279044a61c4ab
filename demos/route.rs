use serde_json::json;
use spherical_nav::{Point, Sphere};
use std::env;

/// Converts a list of points to GeoJSON `[lon, lat]` positions
fn positions(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.lon(), p.lat()]).collect()
}

/// Samples the great-circle route between two points
fn great_circle_route(from: &Point, to: &Point, segments: usize) -> spherical_nav::Result<Vec<Point>> {
    (0..=segments)
        .map(|i| from.intermediate_point_to(to, i as f64 / segments as f64))
        .collect()
}

/// Samples the rhumb-line route between two points
fn rhumb_route(
    sphere: &Sphere,
    from: &Point,
    to: &Point,
    segments: usize,
) -> spherical_nav::Result<Vec<Point>> {
    let distance = sphere.rhumb_distance(from, to);
    let bearing = from.rhumb_bearing_to(to);

    (0..=segments)
        .map(|i| sphere.rhumb_destination(from, distance * i as f64 / segments as f64, bearing))
        .collect()
}

fn route_feature(name: &str, points: &[Point], distance: f64, bearing: f64) -> serde_json::Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": positions(points)
        },
        "properties": {
            "name": name,
            "distance_km": distance / 1000.0,
            "initial_bearing": bearing
        }
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 5 && args.len() != 6 {
        eprintln!("Usage: {} <lat1> <lon1> <lat2> <lon2> [segments]", args[0]);
        std::process::exit(1);
    }

    let from = Point::new(args[1].parse()?, args[2].parse()?)?;
    let to = Point::new(args[3].parse()?, args[4].parse()?)?;
    let segments: usize = match args.get(5) {
        Some(arg) => arg.parse()?,
        None => 32,
    };
    if segments == 0 {
        return Err("segments must be at least 1".into());
    }

    let sphere = Sphere::default();

    let great_circle = great_circle_route(&from, &to, segments)?;
    let rhumb = rhumb_route(&sphere, &from, &to, segments)?;

    let collection = json!({
        "type": "FeatureCollection",
        "features": [
            route_feature("great circle", &great_circle, sphere.distance(&from, &to), from.bearing_to(&to)),
            route_feature("rhumb line", &rhumb, sphere.rhumb_distance(&from, &to), from.rhumb_bearing_to(&to)),
        ]
    });

    println!("{}", serde_json::to_string_pretty(&collection)?);

    Ok(())
}
