use stronghold_locator::geometry::Point;
use stronghold_locator::Observation;

/// Pairs of throw positions pointing in assorted directions, including
/// off-axis and far-out ones.
pub fn bearing_pairs() -> Vec<(Point, Point)> {
    vec![
        (Point::new(0.0, 0.0), Point::new(1000.0, 0.0)),
        (Point::new(0.0, 0.0), Point::new(0.0, -250.0)),
        (Point::new(120.0, -40.0), Point::new(300.0, 45.0)),
        (Point::new(-500.0, 800.0), Point::new(-650.0, 1000.0)),
        (Point::new(2400.0, -1800.0), Point::new(2350.0, -1750.0)),
        (Point::new(-33.3, 17.9), Point::new(-80.1, -190.4)),
        (Point::new(10.0, 10.0), Point::new(10.0, 60.0)),
    ]
}

/// Coordinate-only and distance-based observations for every bearing pair.
pub fn mixed_observations() -> Vec<Observation> {
    let mut out = Vec::new();
    for (a, b) in bearing_pairs() {
        out.push(Observation::new(a, b));
        for delta in [1.5, 2.0, 5.0] {
            out.push(Observation::new(a, b).with_delta(delta));
        }
    }
    out
}
