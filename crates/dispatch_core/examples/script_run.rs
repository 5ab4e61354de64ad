//! Generate and run a 100 driver / 500 rider workload, then print a summary.
//!
//! Run with: cargo run -p dispatch_core --example script_run

use dispatch_core::interpreter::Interpreter;
use dispatch_core::scenario::{generate_script, ScenarioParams};

fn main() {
    const NUM_DRIVERS: usize = 100;
    const NUM_RIDERS: usize = 500;
    const NUM_RIDES: usize = 400;

    let params = ScenarioParams {
        num_drivers: NUM_DRIVERS,
        num_riders: NUM_RIDERS,
        num_rides: NUM_RIDES,
        ..Default::default()
    }
    .with_seed(123);
    let script = generate_script(&params);

    let mut interpreter = Interpreter::new();
    let output = interpreter.run_script(script.iter().map(String::as_str));

    let counts = interpreter.engine().counts();
    println!(
        "--- Script run ({NUM_DRIVERS} drivers, {NUM_RIDERS} riders, {NUM_RIDES} rides, seed 123) ---"
    );
    println!("Commands executed: {}", script.len());
    println!("Wire lines emitted: {}", output.len());
    println!(
        "Drivers: {} available / {} on ride",
        counts.drivers_available, counts.drivers_on_ride
    );
    println!("Riders: {}", counts.riders);
    println!(
        "Rides: {} in progress / {} completed",
        counts.rides_in_progress, counts.rides_completed
    );

    const SAMPLE: usize = 20;
    println!("\nSample output (first {SAMPLE} lines):");
    for line in output.iter().take(SAMPLE) {
        println!("  {line}");
    }
    if output.len() > SAMPLE {
        println!("  ... and {} more", output.len() - SAMPLE);
    }
}
