pub mod command;
pub mod engine;
pub mod entities;
pub mod error;
pub mod geo;
pub mod interpreter;
pub mod pricing;
pub mod scenario;
pub mod telemetry;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
