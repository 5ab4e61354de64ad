//! Synthetic command scripts for benches, load tests, and the CLI.
//!
//! Generated scripts are deterministic per seed and internally consistent:
//! every ride start has an available driver and every stop and bill targets
//! a ride that exists, so a fresh engine replays them without diagnostics.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Default number of drivers in a generated script.
pub const DEFAULT_NUM_DRIVERS: usize = 100;

/// Default number of riders in a generated script.
pub const DEFAULT_NUM_RIDERS: usize = 500;

/// Default number of ride sequences (start, stop, bill) in a generated script.
pub const DEFAULT_NUM_RIDES: usize = 200;

/// Default half-width of the square spawn area.
pub const DEFAULT_EXTENT: f64 = 100.0;

/// Parameters for generating a synthetic command script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioParams {
    pub num_drivers: usize,
    pub num_riders: usize,
    /// Number of start/stop/bill ride sequences to interleave.
    pub num_rides: usize,
    /// Seed for RNG (for reproducibility).
    pub seed: u64,
    /// Coordinates are sampled uniformly from [-extent, extent].
    pub extent: f64,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            num_drivers: DEFAULT_NUM_DRIVERS,
            num_riders: DEFAULT_NUM_RIDERS,
            num_rides: DEFAULT_NUM_RIDES,
            seed: 0,
            extent: DEFAULT_EXTENT,
        }
    }
}

impl ScenarioParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the half-width of the square area coordinates are sampled from.
    pub fn with_extent(mut self, extent: f64) -> Self {
        self.extent = extent;
        self
    }

    /// Set the number of ride sequences to generate.
    pub fn with_rides(mut self, num_rides: usize) -> Self {
        self.num_rides = num_rides;
        self
    }
}

/// Generate a command script for the given parameters.
///
/// Registrations come first, then ride sequences: each sequence matches its
/// rider, starts a ride with a random valid availability index, and is
/// stopped and billed once the driver pool saturates or the script ends.
pub fn generate_script(params: &ScenarioParams) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut lines = Vec::new();

    for i in 0..params.num_drivers {
        let (x, y) = sample_point(&mut rng, params.extent);
        lines.push(format!("ADD_DRIVER D{} {x} {y}", i + 1));
    }
    for i in 0..params.num_riders {
        let (x, y) = sample_point(&mut rng, params.extent);
        lines.push(format!("ADD_RIDER R{} {x} {y}", i + 1));
    }

    if params.num_drivers == 0 || params.num_riders == 0 {
        return lines;
    }

    let mut open_rides: VecDeque<usize> = VecDeque::new();
    let mut available = params.num_drivers;
    for ride in 0..params.num_rides {
        if available == 0 {
            // pool saturated; finish the oldest open ride first
            if let Some(finished) = open_rides.pop_front() {
                push_stop_and_bill(&mut rng, &mut lines, finished, params.extent);
                available += 1;
            }
        }

        let rider = ride % params.num_riders + 1;
        lines.push(format!("MATCH R{rider}"));
        let n = rng.gen_range(1..=available);
        lines.push(format!("START_RIDE RIDE{} {} R{}", ride + 1, n, rider));
        open_rides.push_back(ride + 1);
        available -= 1;
    }

    while let Some(finished) = open_rides.pop_front() {
        push_stop_and_bill(&mut rng, &mut lines, finished, params.extent);
    }

    lines
}

fn sample_point(rng: &mut StdRng, extent: f64) -> (String, String) {
    // one-decimal coordinates keep generated scripts readable
    let x: f64 = rng.gen_range(-extent..=extent);
    let y: f64 = rng.gen_range(-extent..=extent);
    (format!("{x:.1}"), format!("{y:.1}"))
}

fn push_stop_and_bill(rng: &mut StdRng, lines: &mut Vec<String>, ride: usize, extent: f64) {
    let (x, y) = sample_point(rng, extent);
    let minutes = rng.gen_range(5..=120);
    lines.push(format!("STOP_RIDE RIDE{ride} {x} {y} {minutes}"));
    lines.push(format!("BILL RIDE{ride}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::Interpreter;

    #[test]
    fn same_seed_generates_identical_scripts() {
        let params = ScenarioParams::default().with_seed(7);
        assert_eq!(generate_script(&params), generate_script(&params));
    }

    #[test]
    fn different_seeds_generate_different_scripts() {
        let a = generate_script(&ScenarioParams::default().with_seed(1));
        let b = generate_script(&ScenarioParams::default().with_seed(2));
        assert_ne!(a, b);
    }

    #[test]
    fn generated_script_replays_without_diagnostics() {
        let params = ScenarioParams {
            num_drivers: 10,
            num_riders: 25,
            num_rides: 40,
            ..Default::default()
        }
        .with_seed(42);
        let script = generate_script(&params);

        let mut interpreter = Interpreter::new();
        for line in &script {
            interpreter
                .handle(line)
                .unwrap_or_else(|error| panic!("line {line:?} failed: {error}"));
        }

        let counts = interpreter.engine().counts();
        assert_eq!(counts.drivers(), 10);
        assert_eq!(counts.drivers_available, 10);
        assert_eq!(counts.riders, 25);
        assert_eq!(counts.rides_completed, 40);
        assert_eq!(counts.rides_in_progress, 0);
    }

    #[test]
    fn no_rides_generated_without_drivers_or_riders() {
        let no_drivers = ScenarioParams {
            num_drivers: 0,
            num_riders: 5,
            num_rides: 10,
            ..Default::default()
        };
        let script = generate_script(&no_drivers);
        assert_eq!(script.len(), 5);
        assert!(script.iter().all(|line| line.starts_with("ADD_RIDER")));
    }

    #[test]
    fn saturating_the_pool_interleaves_stops() {
        let params = ScenarioParams {
            num_drivers: 2,
            num_riders: 4,
            num_rides: 6,
            ..Default::default()
        }
        .with_seed(3);
        let script = generate_script(&params);

        let stops = script
            .iter()
            .filter(|line| line.starts_with("STOP_RIDE"))
            .count();
        let starts = script
            .iter()
            .filter(|line| line.starts_with("START_RIDE"))
            .count();
        assert_eq!(starts, 6);
        assert_eq!(stops, 6);
        // with only two drivers, some stop must appear before the last start
        let first_stop = script
            .iter()
            .position(|line| line.starts_with("STOP_RIDE"))
            .expect("a stop exists");
        let last_start = script
            .iter()
            .rposition(|line| line.starts_with("START_RIDE"))
            .expect("a start exists");
        assert!(first_stop < last_start);
    }
}
