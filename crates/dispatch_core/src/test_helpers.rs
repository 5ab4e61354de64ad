//! Shared fixtures for integration tests and benches.
//!
//! Compiled behind the default `test-helpers` feature.

use crate::engine::DispatchEngine;
use crate::geo::Point;

/// Origin used as the default rider position in fixtures.
pub const TEST_ORIGIN: Point = Point { x: 0.0, y: 0.0 };

/// Engine with `driver_count` drivers on the x axis (D1 at x=1, D2 at x=2,
/// and so on) and one rider R1 at the origin. Nearest driver is always D1.
pub fn engine_with_line_of_drivers(driver_count: usize) -> DispatchEngine {
    let mut engine = DispatchEngine::new();
    for i in 1..=driver_count {
        engine
            .add_driver(format!("D{i}"), Point::new(i as f64, 0.0))
            .expect("fixture driver ids are unique");
    }
    engine
        .add_rider("R1", TEST_ORIGIN)
        .expect("fixture rider id is unique");
    engine
}

/// Engine where RIDE1 has already completed: D1 drove R1 from the origin to
/// (0, 5) in 10 minutes, and a second driver D2 never left.
pub fn engine_with_completed_ride() -> DispatchEngine {
    let mut engine = DispatchEngine::new();
    engine
        .add_driver("D1", Point::new(0.0, 1.0))
        .expect("fixture driver D1");
    engine
        .add_driver("D2", Point::new(0.0, 2.0))
        .expect("fixture driver D2");
    engine
        .add_rider("R1", TEST_ORIGIN)
        .expect("fixture rider R1");
    engine
        .start_ride("RIDE1", 1, "R1")
        .expect("fixture ride starts");
    engine
        .stop_ride("RIDE1", Point::new(0.0, 5.0), 10.0)
        .expect("fixture ride stops");
    engine
}
