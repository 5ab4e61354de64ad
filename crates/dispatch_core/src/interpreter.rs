//! Line-by-line command interpretation over a dispatch engine.

use serde::Serialize;
use tracing::warn;

use crate::command::Command;
use crate::engine::{Bill, DispatchEngine, MatchedDrivers, RideStarted, RideStopped};
use crate::error::DispatchError;

/// Structured result of one successfully handled command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    DriverAdded { id: String },
    RiderAdded { id: String },
    DriversMatched(MatchedDrivers),
    RideStarted(RideStarted),
    RideStopped(RideStopped),
    Billed(Bill),
}

impl Outcome {
    /// Wire rendering of this outcome. Registrations are silent, so they
    /// return `None`.
    pub fn wire_line(&self) -> Option<String> {
        match self {
            Self::DriverAdded { .. } | Self::RiderAdded { .. } => None,
            Self::DriversMatched(matched) => Some(format!(
                "DRIVERS_MATCHED {}",
                matched.driver_ids.join(" ")
            )),
            Self::RideStarted(started) => Some(format!("RIDE_STARTED {}", started.ride_id)),
            Self::RideStopped(stopped) => Some(format!("RIDE_STOPPED {}", stopped.ride_id)),
            Self::Billed(bill) => Some(format!(
                "BILL {} {} {:.2}",
                bill.ride_id, bill.driver_id, bill.amount
            )),
        }
    }
}

/// Owns a [`DispatchEngine`] and feeds it one parsed command per line.
#[derive(Debug, Default)]
pub struct Interpreter {
    engine: DispatchEngine,
}

impl Interpreter {
    /// Interpreter over a fresh engine with the default fare schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpreter over an existing engine, e.g. one with a custom fare
    /// schedule.
    pub fn with_engine(engine: DispatchEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &DispatchEngine {
        &self.engine
    }

    /// Parse and execute one command line.
    pub fn handle(&mut self, line: &str) -> Result<Outcome, DispatchError> {
        let command = Command::parse(line)?;
        self.dispatch(command)
    }

    /// Execute an already-parsed command.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, DispatchError> {
        match command {
            Command::AddDriver { id, location } => {
                self.engine.add_driver(id.clone(), location)?;
                Ok(Outcome::DriverAdded { id })
            }
            Command::AddRider { id, location } => {
                self.engine.add_rider(id.clone(), location)?;
                Ok(Outcome::RiderAdded { id })
            }
            Command::Match { rider_id } => {
                Ok(Outcome::DriversMatched(self.engine.match_rider(&rider_id)?))
            }
            Command::StartRide {
                ride_id,
                n,
                rider_id,
            } => Ok(Outcome::RideStarted(
                self.engine.start_ride(&ride_id, n, &rider_id)?,
            )),
            Command::StopRide {
                ride_id,
                destination,
                time_taken_minutes,
            } => Ok(Outcome::RideStopped(self.engine.stop_ride(
                &ride_id,
                destination,
                time_taken_minutes,
            )?)),
            Command::Bill { ride_id } => {
                Ok(Outcome::Billed(self.engine.generate_bill(&ride_id)?))
            }
        }
    }

    /// Run a whole script, collecting the wire line of every command.
    ///
    /// Blank lines are skipped. A failing line contributes its diagnostic
    /// and processing continues with the next line; nothing aborts the run.
    pub fn run_script<'a, I>(&mut self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut output = Vec::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            match self.handle(line) {
                Ok(outcome) => {
                    if let Some(wire) = outcome.wire_line() {
                        output.push(wire);
                    }
                }
                Err(error) => {
                    warn!(%error, line, "command failed");
                    output.push(error.wire_line());
                }
            }
        }
        output
    }
}
