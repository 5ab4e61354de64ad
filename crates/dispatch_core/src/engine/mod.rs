//! The dispatch engine: entity registries plus the match, start, stop, and
//! bill operations.
//!
//! Registries are insertion-ordered and searched by linear scan on id.
//! There is no secondary index, so lookup cost grows with registry size;
//! acceptable at interpreter scale, a known limit beyond it.

mod billing;
mod lifecycle;
mod matching;

pub use billing::Bill;
pub use lifecycle::{RideStarted, RideStopped};
pub use matching::{MatchedDrivers, MAX_MATCHED_DRIVERS};

use tracing::debug;

use crate::entities::{Driver, DriverIdx, Ride, RideIdx, Rider, RiderIdx};
use crate::error::DispatchError;
use crate::geo::Point;
use crate::pricing::FareSchedule;
use crate::telemetry::DispatchCounts;

/// In-memory dispatch state: three append-only registries and the fare
/// schedule used for billing.
#[derive(Debug, Default)]
pub struct DispatchEngine {
    drivers: Vec<Driver>,
    riders: Vec<Rider>,
    rides: Vec<Ride>,
    schedule: FareSchedule,
}

impl DispatchEngine {
    /// Engine with the default fare schedule and empty registries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine billing against a custom fare schedule.
    pub fn with_schedule(schedule: FareSchedule) -> Self {
        Self {
            schedule,
            ..Self::default()
        }
    }

    /// Register a driver at the given location, initially available.
    ///
    /// Fails with [`DispatchError::DuplicateId`] when the id is taken; the
    /// registry is left unchanged in that case.
    pub fn add_driver(
        &mut self,
        id: impl Into<String>,
        location: Point,
    ) -> Result<DriverIdx, DispatchError> {
        let id = id.into();
        if self.find_driver(&id).is_some() {
            return Err(DispatchError::DuplicateId(id));
        }
        debug!(driver = %id, "driver registered");
        self.drivers.push(Driver::new(id, location));
        Ok(DriverIdx(self.drivers.len() - 1))
    }

    /// Register a rider at the given location.
    pub fn add_rider(
        &mut self,
        id: impl Into<String>,
        location: Point,
    ) -> Result<RiderIdx, DispatchError> {
        let id = id.into();
        if self.find_rider(&id).is_some() {
            return Err(DispatchError::DuplicateId(id));
        }
        debug!(rider = %id, "rider registered");
        self.riders.push(Rider::new(id, location));
        Ok(RiderIdx(self.riders.len() - 1))
    }

    /// All registered drivers in insertion order.
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// All registered riders in insertion order.
    pub fn riders(&self) -> &[Rider] {
        &self.riders
    }

    /// All rides in start order.
    pub fn rides(&self) -> &[Ride] {
        &self.rides
    }

    /// Aggregate registry counts at this point in time.
    pub fn counts(&self) -> DispatchCounts {
        let mut counts = DispatchCounts::default();
        for driver in &self.drivers {
            counts.add_driver(driver.state);
        }
        for _ in &self.riders {
            counts.add_rider();
        }
        for ride in &self.rides {
            counts.add_ride(ride.is_completed());
        }
        counts
    }

    fn find_driver(&self, id: &str) -> Option<DriverIdx> {
        self.drivers.iter().position(|d| d.id == id).map(DriverIdx)
    }

    fn find_rider(&self, id: &str) -> Option<RiderIdx> {
        self.riders.iter().position(|r| r.id == id).map(RiderIdx)
    }

    fn find_ride(&self, id: &str) -> Option<RideIdx> {
        self.rides.iter().position(|r| r.id == id).map(RideIdx)
    }

    /// Available drivers in registry insertion order. Start-ride indexes
    /// resolve against this order, not proximity order.
    fn available_drivers(&self) -> Vec<DriverIdx> {
        self.drivers
            .iter()
            .enumerate()
            .filter(|(_, driver)| driver.is_available())
            .map(|(idx, _)| DriverIdx(idx))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_driver_rejects_duplicate_id() {
        let mut engine = DispatchEngine::new();
        engine
            .add_driver("D1", Point::new(0.0, 0.0))
            .expect("first registration");
        let err = engine.add_driver("D1", Point::new(5.0, 5.0));
        assert_eq!(err, Err(DispatchError::DuplicateId("D1".to_string())));
        assert_eq!(engine.drivers().len(), 1);
        // original location is untouched by the rejected registration
        assert_eq!(engine.drivers()[0].location, Point::new(0.0, 0.0));
    }

    #[test]
    fn add_rider_rejects_duplicate_id() {
        let mut engine = DispatchEngine::new();
        engine
            .add_rider("R1", Point::new(0.0, 0.0))
            .expect("first registration");
        let err = engine.add_rider("R1", Point::new(1.0, 1.0));
        assert_eq!(err, Err(DispatchError::DuplicateId("R1".to_string())));
        assert_eq!(engine.riders().len(), 1);
    }

    #[test]
    fn driver_and_rider_ids_are_separate_namespaces() {
        let mut engine = DispatchEngine::new();
        engine
            .add_driver("X1", Point::new(0.0, 0.0))
            .expect("driver");
        engine
            .add_rider("X1", Point::new(0.0, 0.0))
            .expect("rider id may equal a driver id");
    }

    #[test]
    fn counts_reflect_registry_state() {
        let mut engine = DispatchEngine::new();
        engine
            .add_driver("D1", Point::new(0.0, 1.0))
            .expect("driver");
        engine
            .add_driver("D2", Point::new(0.0, 2.0))
            .expect("driver");
        engine.add_rider("R1", Point::new(0.0, 0.0)).expect("rider");
        engine.start_ride("RIDE1", 1, "R1").expect("start");

        let counts = engine.counts();
        assert_eq!(counts.drivers_available, 1);
        assert_eq!(counts.drivers_on_ride, 1);
        assert_eq!(counts.riders, 1);
        assert_eq!(counts.rides_in_progress, 1);
        assert_eq!(counts.rides_completed, 0);
    }
}
