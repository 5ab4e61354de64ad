//! Dispatch errors and their wire diagnostics.

use thiserror::Error;

/// Everything that can go wrong while handling one dispatch command.
///
/// All variants are recoverable at the per-line level: the interpreter
/// reports the condition and moves on to the next command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("rider {0} is not registered")]
    RiderNotFound(String),
    #[error("no drivers are available")]
    NoDriversAvailable,
    #[error("ride {0} cannot be processed")]
    InvalidRide(String),
    #[error("id {0} is already registered")]
    DuplicateId(String),
    #[error("unrecognized command {0}")]
    InvalidCommand(String),
    #[error("invalid {argument}: {value}")]
    InvalidArgument {
        argument: &'static str,
        value: String,
    },
}

impl DispatchError {
    /// Single-line wire diagnostic for this error.
    ///
    /// `InvalidRide` renders without the offending id; the id still travels
    /// in the variant for logging.
    pub fn wire_line(&self) -> String {
        match self {
            Self::RiderNotFound(id) => format!("RIDER_NOT_FOUND {id}"),
            Self::NoDriversAvailable => "NO_DRIVERS_AVAILABLE".to_string(),
            Self::InvalidRide(_) => "INVALID_RIDE".to_string(),
            Self::DuplicateId(id) => format!("DUPLICATE_ID {id}"),
            Self::InvalidCommand(verb) => format!("INVALID_COMMAND {verb}"),
            Self::InvalidArgument { value, .. } => format!("INVALID_ARGUMENT {value}"),
        }
    }
}
