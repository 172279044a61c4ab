use float_cmp::approx_eq;
use insta::assert_snapshot;
use spherical_nav::{EARTH_RADIUS, Point, Sphere};

fn point(lat: f64, lon: f64) -> Point {
    Point::new(lat, lon).expect("valid coordinates")
}

fn sample_points() -> Vec<Point> {
    [
        (0.0, 0.0),
        (52.205, 0.119),
        (48.857, 2.351),
        (-33.87, 151.21),
        (40.64, -73.78),
        (89.5, 45.0),
        (-89.9, -120.0),
        (90.0, 0.0),
        (-90.0, 0.0),
        (10.0, 179.9),
        (-10.0, -179.9),
        (35.0, 139.7),
        (1.0, 1.0),
        (1.0, 2.0),
    ]
    .into_iter()
    .map(|(lat, lon)| point(lat, lon))
    .collect()
}

#[test]
fn never_shorter_than_great_circle() {
    let points = sample_points();

    for a in &points {
        for b in &points {
            let rhumb = a.rhumb_angular_distance_to(b);
            let great_circle = a.angular_distance_to(b);
            assert!(rhumb + 1e-12 >= great_circle, "{a:?} {b:?}: {rhumb} < {great_circle}");
            assert!(approx_eq!(f64, rhumb, b.rhumb_angular_distance_to(a), epsilon = 1e-12));
        }
    }
}

#[test]
fn destination_round_trip() {
    let sphere = Sphere::default();
    let points = sample_points();

    for a in &points {
        for b in &points {
            if a.angular_distance_to(b) < 1e-9 || a.lat().abs() == 90.0 || b.lat().abs() == 90.0 {
                continue;
            }

            let distance = sphere.rhumb_distance(a, b);
            let bearing = a.rhumb_bearing_to(b);
            let reached = sphere.rhumb_destination(a, distance, bearing).unwrap();

            assert!(reached.angular_distance_to(b) < 1e-9, "{a:?} -> {b:?} reached {reached:?}");
        }
    }
}

#[test]
fn reverse_bearing_is_opposite() {
    let points = sample_points();

    for a in &points {
        for b in &points {
            if a.angular_distance_to(b) < 1e-9 || a.lat().abs() == 90.0 || b.lat().abs() == 90.0 {
                continue;
            }

            let forward = a.rhumb_bearing_to(b);
            let back = b.rhumb_bearing_to(a);
            let diff = (back - forward).rem_euclid(360.0);
            assert!(approx_eq!(f64, diff, 180.0, epsilon = 1e-9), "{a:?} {b:?}");
        }
    }
}

#[test]
fn midpoint_splits_the_distance() {
    let points = sample_points();

    for a in &points {
        for b in &points {
            if a.lat().abs() == 90.0 || b.lat().abs() == 90.0 {
                continue;
            }

            let mid = a.rhumb_midpoint_to(b);
            let half = a.rhumb_angular_distance_to(b) / 2.0;

            assert!(approx_eq!(f64, a.rhumb_angular_distance_to(&mid), half, epsilon = 1e-9));
            assert!(approx_eq!(f64, mid.rhumb_angular_distance_to(b), half, epsilon = 1e-9));
        }
    }
}

#[test]
fn along_a_parallel() {
    let a = point(1.0, 1.0);
    let b = point(1.0, 2.0);

    let distance = a.rhumb_distance_to(&b, EARTH_RADIUS).unwrap();
    assert_snapshot!(format!("{distance:.1}"), @"111178.0");
    assert_eq!(a.rhumb_bearing_to(&b), 90.0);

    let mid = a.rhumb_midpoint_to(&b);
    assert_snapshot!(format!("{:.4}, {:.4}", mid.lat(), mid.lon()), @"1.0000, 1.5000");

    let reached = a.rhumb_destination_point(distance, 90.0, EARTH_RADIUS).unwrap();
    assert!(reached.angular_distance_to(&b) < 1e-12);
}

#[test]
fn across_the_date_line() {
    let a = point(10.0, 179.9);
    let b = point(10.0, -179.9);

    let distance = a.rhumb_distance_to(&b, EARTH_RADIUS).unwrap();
    assert_snapshot!(format!("{distance:.0}"), @"21901");
    assert_eq!(a.rhumb_bearing_to(&b), 90.0);
    assert_eq!(b.rhumb_bearing_to(&a), 270.0);

    let mid = a.rhumb_midpoint_to(&b);
    assert!(approx_eq!(f64, mid.lat(), 10.0, epsilon = 1e-12));
    assert!(mid.lon().abs() > 179.99, "{mid:?}");
}
