//! Fare calculation for completed rides.

use serde::{Deserialize, Serialize};

use crate::geo::{distance, round2, Point};

/// Base fare in currency units, charged on every ride.
pub const BASE_FARE: f64 = 50.0;

/// Charge per unit of distance between the rider's origin and destination.
pub const PER_DISTANCE_UNIT_RATE: f64 = 6.5;

/// Charge per minute of ride time.
pub const PER_MINUTE_RATE: f64 = 2.0;

/// Service tax applied to the subtotal (0.2 = 20%).
pub const SERVICE_TAX_RATE: f64 = 0.2;

/// Fare schedule applied when billing a completed ride.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareSchedule {
    pub base_fare: f64,
    pub per_distance_unit: f64,
    pub per_minute: f64,
    pub service_tax_rate: f64,
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            base_fare: BASE_FARE,
            per_distance_unit: PER_DISTANCE_UNIT_RATE,
            per_minute: PER_MINUTE_RATE,
            service_tax_rate: SERVICE_TAX_RATE,
        }
    }
}

impl FareSchedule {
    pub fn with_base_fare(mut self, base_fare: f64) -> Self {
        self.base_fare = base_fare;
        self
    }

    pub fn with_per_distance_unit(mut self, rate: f64) -> Self {
        self.per_distance_unit = rate;
        self
    }

    pub fn with_per_minute(mut self, rate: f64) -> Self {
        self.per_minute = rate;
        self
    }

    pub fn with_service_tax_rate(mut self, rate: f64) -> Self {
        self.service_tax_rate = rate;
        self
    }

    /// Compute the billed amount for a ride from `origin` to `destination`
    /// taking `minutes` of ride time.
    ///
    /// Formula: `round2((1 + tax) * (base + per_distance * d + per_minute * minutes))`
    /// where `d` is the two-decimal-rounded origin-to-destination distance.
    pub fn fare(&self, origin: Point, destination: Point, minutes: f64) -> f64 {
        let d = distance(origin, destination);
        let subtotal = self.base_fare + self.per_distance_unit * d + self.per_minute * minutes;
        let tax = self.service_tax_rate * subtotal;
        round2(subtotal + tax)
    }
}
