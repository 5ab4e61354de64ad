//! Domain records: drivers, riders, rides, and their registry handles.

use serde::{Deserialize, Serialize};

use crate::geo::Point;

/// Position of a driver in the engine's driver registry.
///
/// Handles are minted by the engine that owns the registry; they are plain
/// indexes, not owning references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverIdx(pub usize);

/// Position of a rider in the engine's rider registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiderIdx(pub usize);

/// Position of a ride in the engine's ride registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideIdx(pub usize);

/// Driver availability state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverState {
    Available,
    OnRide,
}

/// A registered driver. Never deleted; availability flips with ride
/// start/stop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub location: Point,
    pub state: DriverState,
}

impl Driver {
    pub fn new(id: impl Into<String>, location: Point) -> Self {
        Self {
            id: id.into(),
            location,
            state: DriverState::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.state == DriverState::Available
    }
}

/// A registered rider. Immutable after creation, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rider {
    pub id: String,
    pub location: Point,
}

impl Rider {
    pub fn new(id: impl Into<String>, location: Point) -> Self {
        Self {
            id: id.into(),
            location,
        }
    }
}

/// Destination and duration recorded when a ride stops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RideCompletion {
    pub destination: Point,
    pub time_taken_minutes: f64,
}

/// One driver-rider assignment, from start until stop.
///
/// The completion record is absent exactly until the ride stops; billing is
/// only defined once it is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ride {
    pub id: String,
    pub rider: RiderIdx,
    pub driver: DriverIdx,
    pub completion: Option<RideCompletion>,
}

impl Ride {
    pub fn new(id: impl Into<String>, rider: RiderIdx, driver: DriverIdx) -> Self {
        Self {
            id: id.into(),
            rider,
            driver,
            completion: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completion.is_some()
    }
}
