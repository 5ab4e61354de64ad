//! Typed command parsing for the wire vocabulary.

use crate::error::DispatchError;
use crate::geo::Point;

/// One parsed command, ready for dispatch.
///
/// A single parse step produces the variant with type-checked fields;
/// exhaustive matching downstream replaces string-based branching.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddDriver {
        id: String,
        location: Point,
    },
    AddRider {
        id: String,
        location: Point,
    },
    Match {
        rider_id: String,
    },
    StartRide {
        ride_id: String,
        n: usize,
        rider_id: String,
    },
    StopRide {
        ride_id: String,
        destination: Point,
        time_taken_minutes: f64,
    },
    Bill {
        ride_id: String,
    },
}

impl Command {
    /// Parse one whitespace-delimited command line.
    ///
    /// Token counts are strict and numeric fields must parse as finite
    /// numbers; anything else fails fast with
    /// [`DispatchError::InvalidArgument`] instead of letting bad values
    /// propagate into arithmetic.
    pub fn parse(line: &str) -> Result<Self, DispatchError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (verb, args) = tokens
            .split_first()
            .ok_or_else(|| DispatchError::InvalidCommand(String::new()))?;

        match *verb {
            "ADD_DRIVER" => match args {
                [id, x, y] => Ok(Self::AddDriver {
                    id: (*id).to_string(),
                    location: Point::new(parse_number("x", x)?, parse_number("y", y)?),
                }),
                _ => Err(wrong_arity("ADD_DRIVER", args.len(), 3)),
            },
            "ADD_RIDER" => match args {
                [id, x, y] => Ok(Self::AddRider {
                    id: (*id).to_string(),
                    location: Point::new(parse_number("x", x)?, parse_number("y", y)?),
                }),
                _ => Err(wrong_arity("ADD_RIDER", args.len(), 3)),
            },
            "MATCH" => match args {
                [rider_id] => Ok(Self::Match {
                    rider_id: (*rider_id).to_string(),
                }),
                _ => Err(wrong_arity("MATCH", args.len(), 1)),
            },
            "START_RIDE" => match args {
                [ride_id, n, rider_id] => Ok(Self::StartRide {
                    ride_id: (*ride_id).to_string(),
                    n: parse_index("n", n)?,
                    rider_id: (*rider_id).to_string(),
                }),
                _ => Err(wrong_arity("START_RIDE", args.len(), 3)),
            },
            "STOP_RIDE" => match args {
                [ride_id, x, y, time_taken] => Ok(Self::StopRide {
                    ride_id: (*ride_id).to_string(),
                    destination: Point::new(parse_number("x", x)?, parse_number("y", y)?),
                    time_taken_minutes: parse_number("time_taken", time_taken)?,
                }),
                _ => Err(wrong_arity("STOP_RIDE", args.len(), 4)),
            },
            "BILL" => match args {
                [ride_id] => Ok(Self::Bill {
                    ride_id: (*ride_id).to_string(),
                }),
                _ => Err(wrong_arity("BILL", args.len(), 1)),
            },
            other => Err(DispatchError::InvalidCommand(other.to_string())),
        }
    }
}

/// Finite f64 or bust; `NaN` and infinities are rejected like any other
/// malformed token so they never reach distance or fare arithmetic.
fn parse_number(argument: &'static str, token: &str) -> Result<f64, DispatchError> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DispatchError::InvalidArgument {
            argument,
            value: token.to_string(),
        }),
    }
}

fn parse_index(argument: &'static str, token: &str) -> Result<usize, DispatchError> {
    token
        .parse::<usize>()
        .map_err(|_| DispatchError::InvalidArgument {
            argument,
            value: token.to_string(),
        })
}

fn wrong_arity(verb: &'static str, got: usize, expected: usize) -> DispatchError {
    DispatchError::InvalidArgument {
        argument: "argument count",
        value: format!("{got} for {verb}, expected {expected}"),
    }
}
