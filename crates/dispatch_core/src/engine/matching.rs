//! Rider-to-driver matching: nearest available drivers by rounded distance.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::DispatchEngine;
use crate::error::DispatchError;
use crate::geo::distance;

/// Maximum number of drivers returned by one match.
pub const MAX_MATCHED_DRIVERS: usize = 5;

/// A successful match: driver ids ordered by rounded distance, nearest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedDrivers {
    pub rider_id: String,
    pub driver_ids: Vec<String>,
}

impl DispatchEngine {
    /// Find the nearest available drivers for a rider.
    ///
    /// Distances are rounded to two decimals before sorting, so drivers at
    /// different raw distances can tie; ties break on lexicographic driver
    /// id. At most [`MAX_MATCHED_DRIVERS`] ids are returned. Read-only.
    pub fn match_rider(&self, rider_id: &str) -> Result<MatchedDrivers, DispatchError> {
        let rider_idx = self
            .find_rider(rider_id)
            .ok_or_else(|| DispatchError::RiderNotFound(rider_id.to_string()))?;
        let rider = &self.riders[rider_idx.0];

        let mut candidates: Vec<(f64, &str)> = self
            .drivers
            .iter()
            .filter(|driver| driver.is_available())
            .map(|driver| (distance(rider.location, driver.location), driver.id.as_str()))
            .collect();
        if candidates.is_empty() {
            return Err(DispatchError::NoDriversAvailable);
        }

        candidates.sort_by(|(dist_a, id_a), (dist_b, id_b)| {
            dist_a.total_cmp(dist_b).then_with(|| id_a.cmp(id_b))
        });

        let driver_ids: Vec<String> = candidates
            .iter()
            .take(MAX_MATCHED_DRIVERS)
            .map(|(_, id)| (*id).to_string())
            .collect();
        debug!(rider = rider_id, matched = driver_ids.len(), "drivers matched");

        Ok(MatchedDrivers {
            rider_id: rider_id.to_string(),
            driver_ids,
        })
    }
}
