//! Billing for completed rides.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::DispatchEngine;
use crate::error::DispatchError;

/// Bill for one completed ride; the amount is rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub ride_id: String,
    pub driver_id: String,
    pub amount: f64,
}

impl DispatchEngine {
    /// Compute the bill for a completed ride.
    ///
    /// The distance charge runs from the rider's registered location to the
    /// recorded destination. Repeatable; no state change, so billing twice
    /// returns the same amount.
    pub fn generate_bill(&self, ride_id: &str) -> Result<Bill, DispatchError> {
        let ride_idx = self
            .find_ride(ride_id)
            .ok_or_else(|| DispatchError::InvalidRide(ride_id.to_string()))?;
        let ride = &self.rides[ride_idx.0];
        let completion = ride
            .completion
            .ok_or_else(|| DispatchError::InvalidRide(ride_id.to_string()))?;

        let rider = &self.riders[ride.rider.0];
        let amount = self.schedule.fare(
            rider.location,
            completion.destination,
            completion.time_taken_minutes,
        );
        debug!(ride = ride_id, amount, "bill generated");

        Ok(Bill {
            ride_id: ride_id.to_string(),
            driver_id: self.drivers[ride.driver.0].id.clone(),
            amount,
        })
    }
}
