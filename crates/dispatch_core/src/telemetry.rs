//! Aggregated registry counts for run summaries and tests.

use serde::{Deserialize, Serialize};

use crate::entities::DriverState;

/// Counts of registered entities by state at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchCounts {
    pub drivers_available: usize,
    pub drivers_on_ride: usize,
    pub riders: usize,
    pub rides_in_progress: usize,
    pub rides_completed: usize,
}

impl DispatchCounts {
    pub fn add_driver(&mut self, state: DriverState) {
        match state {
            DriverState::Available => self.drivers_available += 1,
            DriverState::OnRide => self.drivers_on_ride += 1,
        }
    }

    pub fn add_rider(&mut self) {
        self.riders += 1;
    }

    pub fn add_ride(&mut self, completed: bool) {
        if completed {
            self.rides_completed += 1;
        } else {
            self.rides_in_progress += 1;
        }
    }

    /// Total drivers regardless of state.
    pub fn drivers(&self) -> usize {
        self.drivers_available + self.drivers_on_ride
    }

    /// Total rides regardless of stage.
    pub fn rides(&self) -> usize {
        self.rides_in_progress + self.rides_completed
    }
}
