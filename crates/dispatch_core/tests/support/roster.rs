#![allow(dead_code)]

use dispatch_core::engine::DispatchEngine;
use dispatch_core::geo::Point;

/// Builder that registers a roster of drivers and riders for integration
/// tests.
#[derive(Debug, Default)]
pub struct RosterBuilder {
    drivers: Vec<(String, Point)>,
    riders: Vec<(String, Point)>,
}

impl RosterBuilder {
    /// Create a new empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a driver at the given coordinates.
    pub fn driver(mut self, id: &str, x: f64, y: f64) -> Self {
        self.drivers.push((id.to_string(), Point::new(x, y)));
        self
    }

    /// Add a rider at the given coordinates.
    pub fn rider(mut self, id: &str, x: f64, y: f64) -> Self {
        self.riders.push((id.to_string(), Point::new(x, y)));
        self
    }

    /// Build the engine with every driver and rider registered.
    pub fn build(self) -> DispatchEngine {
        let mut engine = DispatchEngine::new();
        for (id, location) in self.drivers {
            engine.add_driver(id, location).expect("roster driver id is unique");
        }
        for (id, location) in self.riders {
            engine.add_rider(id, location).expect("roster rider id is unique");
        }
        engine
    }
}

/// Billed amount for the given rounded distance and minutes, computed
/// independently from the published fare formula.
pub fn expected_fare(distance: f64, minutes: f64) -> f64 {
    let subtotal = 50.0 + 6.5 * distance + 2.0 * minutes;
    (subtotal * 1.2 * 100.0).round() / 100.0
}
