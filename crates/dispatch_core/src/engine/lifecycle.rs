//! Ride lifecycle: starting and stopping rides drives driver availability.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::DispatchEngine;
use crate::entities::{DriverState, Ride, RideCompletion};
use crate::error::DispatchError;
use crate::geo::Point;

/// A successfully started ride.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideStarted {
    pub ride_id: String,
    pub driver_id: String,
}

/// A successfully stopped ride.
///
/// `driver_available` reports the released driver's state after the stop.
/// It travels in the structured result for observers; the wire line carries
/// only the ride id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideStopped {
    pub ride_id: String,
    pub driver_available: bool,
}

impl DispatchEngine {
    /// Start a ride with the n-th currently available driver, 1-indexed.
    ///
    /// `n` indexes into availability order (registry insertion order), not
    /// the proximity order a previous match returned. Fails with
    /// [`DispatchError::InvalidRide`] when `n` is out of range, including
    /// `n == 0`, or when the ride id is already taken.
    pub fn start_ride(
        &mut self,
        ride_id: &str,
        n: usize,
        rider_id: &str,
    ) -> Result<RideStarted, DispatchError> {
        let rider_idx = self
            .find_rider(rider_id)
            .ok_or_else(|| DispatchError::RiderNotFound(rider_id.to_string()))?;

        let available = self.available_drivers();
        if n == 0 || n > available.len() {
            return Err(DispatchError::InvalidRide(ride_id.to_string()));
        }
        if self.find_ride(ride_id).is_some() {
            return Err(DispatchError::InvalidRide(ride_id.to_string()));
        }

        let driver_idx = available[n - 1];
        self.drivers[driver_idx.0].state = DriverState::OnRide;
        self.rides.push(Ride::new(ride_id, rider_idx, driver_idx));
        let driver_id = self.drivers[driver_idx.0].id.clone();
        info!(ride = ride_id, driver = %driver_id, rider = rider_id, "ride started");

        Ok(RideStarted {
            ride_id: ride_id.to_string(),
            driver_id,
        })
    }

    /// Stop a ride: record destination and duration, release the driver.
    ///
    /// Fails with [`DispatchError::InvalidRide`] when the ride is unknown or
    /// already completed; no state changes on failure.
    pub fn stop_ride(
        &mut self,
        ride_id: &str,
        destination: Point,
        time_taken_minutes: f64,
    ) -> Result<RideStopped, DispatchError> {
        let ride_idx = self
            .find_ride(ride_id)
            .ok_or_else(|| DispatchError::InvalidRide(ride_id.to_string()))?;
        if self.rides[ride_idx.0].is_completed() {
            return Err(DispatchError::InvalidRide(ride_id.to_string()));
        }

        self.rides[ride_idx.0].completion = Some(RideCompletion {
            destination,
            time_taken_minutes,
        });
        let driver_idx = self.rides[ride_idx.0].driver;
        self.drivers[driver_idx.0].state = DriverState::Available;
        info!(ride = ride_id, driver = %self.drivers[driver_idx.0].id, "ride stopped");

        Ok(RideStopped {
            ride_id: ride_id.to_string(),
            driver_available: self.drivers[driver_idx.0].is_available(),
        })
    }
}
