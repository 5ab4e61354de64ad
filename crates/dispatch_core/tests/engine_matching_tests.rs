mod support;

use dispatch_core::engine::MAX_MATCHED_DRIVERS;
use dispatch_core::error::DispatchError;
use support::roster::RosterBuilder;

#[test]
fn match_returns_nearest_drivers_first() {
    let engine = RosterBuilder::new()
        .driver("D1", 0.0, 1.0)
        .driver("D2", 0.0, 3.0)
        .driver("D3", 0.0, 2.0)
        .rider("R1", 0.0, 0.0)
        .build();

    let matched = engine.match_rider("R1").expect("rider is registered");
    assert_eq!(matched.rider_id, "R1");
    assert_eq!(matched.driver_ids, vec!["D1", "D3", "D2"]);
}

#[test]
fn match_caps_results_at_five() {
    let mut builder = RosterBuilder::new().rider("R1", 0.0, 0.0);
    for i in 1..=8 {
        builder = builder.driver(&format!("D{i}"), i as f64, 0.0);
    }
    let engine = builder.build();

    let matched = engine.match_rider("R1").expect("rider is registered");
    assert_eq!(matched.driver_ids.len(), MAX_MATCHED_DRIVERS);
    assert_eq!(matched.driver_ids, vec!["D1", "D2", "D3", "D4", "D5"]);
}

#[test]
fn match_returns_all_drivers_when_fewer_than_five() {
    let engine = RosterBuilder::new()
        .driver("D1", 0.0, 1.0)
        .driver("D2", 0.0, 2.0)
        .rider("R1", 0.0, 0.0)
        .build();

    let matched = engine.match_rider("R1").expect("rider is registered");
    assert_eq!(matched.driver_ids, vec!["D1", "D2"]);
}

#[test]
fn equal_distances_tie_break_on_driver_id() {
    // registration order deliberately disagrees with id order
    let engine = RosterBuilder::new()
        .driver("D2", 0.0, 3.0)
        .driver("D1", 3.0, 0.0)
        .rider("R1", 0.0, 0.0)
        .build();

    let matched = engine.match_rider("R1").expect("rider is registered");
    assert_eq!(matched.driver_ids, vec!["D1", "D2"]);
}

#[test]
fn distances_tie_after_rounding() {
    // sqrt(2) = 1.41421... rounds to 1.41, exactly the axis driver's distance,
    // so the nearer-in-raw-terms driver wins only by id
    let engine = RosterBuilder::new()
        .driver("DB", 1.0, 1.0)
        .driver("DA", 1.41, 0.0)
        .rider("R1", 0.0, 0.0)
        .build();

    let matched = engine.match_rider("R1").expect("rider is registered");
    assert_eq!(matched.driver_ids, vec!["DA", "DB"]);
}

#[test]
fn match_unknown_rider_fails() {
    let engine = RosterBuilder::new().driver("D1", 0.0, 1.0).build();

    assert_eq!(
        engine.match_rider("R9"),
        Err(DispatchError::RiderNotFound("R9".to_string()))
    );
}

#[test]
fn match_without_registered_drivers_reports_none_available() {
    let engine = RosterBuilder::new().rider("R1", 0.0, 0.0).build();

    assert_eq!(
        engine.match_rider("R1"),
        Err(DispatchError::NoDriversAvailable)
    );
}

#[test]
fn match_skips_drivers_on_rides() {
    let mut engine = RosterBuilder::new()
        .driver("D1", 0.0, 1.0)
        .driver("D2", 0.0, 2.0)
        .rider("R1", 0.0, 0.0)
        .build();

    engine.start_ride("RIDE1", 1, "R1").expect("driver D1 is available");

    let matched = engine.match_rider("R1").expect("rider is registered");
    assert_eq!(matched.driver_ids, vec!["D2"]);
}

#[test]
fn match_with_every_driver_busy_reports_none_available() {
    let mut engine = RosterBuilder::new()
        .driver("D1", 0.0, 1.0)
        .rider("R1", 0.0, 0.0)
        .build();

    engine.start_ride("RIDE1", 1, "R1").expect("driver D1 is available");

    assert_eq!(
        engine.match_rider("R1"),
        Err(DispatchError::NoDriversAvailable)
    );
}

#[test]
fn match_does_not_mutate_registries() {
    let engine = RosterBuilder::new()
        .driver("D1", 0.0, 1.0)
        .rider("R1", 0.0, 0.0)
        .build();

    let before = engine.counts();
    engine.match_rider("R1").expect("rider is registered");
    assert_eq!(engine.counts(), before);
}
