// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with logging:
//     cargo run --example basic_usage --features logging

use calculator::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    if let Err(e) = calculator::utils::init_logging(tracing::Level::DEBUG) {
        eprintln!("logging disabled: {}", e);
    }

    println!("=== Calculator Example ===\n");

    println!("add(2, 2)            = {}", add(2.0, 2.0));
    println!("subtract(5, 3)       = {}", subtract(5.0, 3.0));
    println!("multiply(2.5, 4)     = {}", multiply(2.5, 4.0));
    println!("add_many(1, 2, 3, 4) = {}", add_many(&[1.0, 2.0, 3.0, 4.0]));

    match subtract_many(&[10.0, 3.0, 2.0]) {
        Ok(v) => println!("subtract_many(10, 3, 2) = {}", v),
        Err(e) => println!("subtract_many failed: {}", e),
    }

    println!("\n=== Fallible Operations ===");
    for (a, b) in [(3.0, 2.0), (6.0, 0.0)] {
        match divide(a, b) {
            Ok(v) => println!("divide({}, {}) = {}", a, b, v),
            Err(e) => println!("divide({}, {}) failed: {}", a, b, e),
        }
    }
    for x in [9.0, -100.0] {
        match sqrt(x) {
            Ok(v) => println!("sqrt({}) = {}", x, v),
            Err(e) => println!("sqrt({}) failed: {}", x, e),
        }
    }

    println!("\n=== Expressions ===");
    let evaluator = match EvaluatorBuilder::new().max_input_len(64).finite_only().build() {
        Ok(evaluator) => evaluator,
        Err(e) => {
            eprintln!("bad evaluator configuration: {}", e);
            return;
        },
    };

    for input in ["2 * 2", "1 + 1.5", "18  /   6", "6 / 0", "2 % 2", "1 + 2 + 3", "inf + 1"] {
        match evaluator.evaluate(input) {
            Ok(v) => println!("  {:<12} => {}", input, v),
            Err(e) => println!("  {:<12} => error: {}", input, e),
        }
    }
}
