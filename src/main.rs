use stronghold_locator::geometry::Point;
use stronghold_locator::{report, Estimator, Observation};

fn main() {
    // Demo stub: two throws about 200 blocks apart, then the same pair with a
    // measured pixel change.
    let estimator = Estimator::default();
    let coords = Observation::new(Point::new(120.0, -40.0), Point::new(300.0, 45.0));
    let with_delta = coords.with_delta(2.5);

    for obs in [coords, with_delta] {
        let result = estimator.estimate(&obs);
        println!("{}\n", report::render_text(&result));
    }
}
