// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_calculator::prelude::*;
use decimal_calculator::utils::init_logging;
use rust_decimal::Decimal;
use std::sync::Arc;

fn main() {
    if let Err(e) = init_logging(tracing::Level::DEBUG) {
        eprintln!("{}", e);
    }

    println!("=== Decimal Calculator Example ===\n");

    // Standard limits, events logged through tracing
    let calculator = CalculatorBuilder::new()
        .with_range(
            Decimal::new(-1_000_000_000_000, 0),
            Decimal::new(1_000_000_000_000, 0),
        )
        .build(Arc::new(LoggingEventHandler))
        .unwrap();

    println!("Created calculator with range ±1 000 000 000 000\n");

    // Precedence: the trailing operator decides where the bracket binds
    println!("=== Precedence ===");
    for (numbers, operators) in [
        (["1", "2", "3", "4"], ["+", "+", "*"]),
        (["2", "1", "1", "1"], ["*", "+", "+"]),
    ] {
        let result = calculator.calculate_tags(numbers, operators, "MATHEMATICAL");
        println!(
            "  {} {} ({} {} {}) {} {} = {:?}",
            numbers[0],
            operators[0],
            numbers[1],
            operators[1],
            numbers[2],
            operators[2],
            numbers[3],
            result.result()
        );
    }

    // Rounding policies on a tie
    println!("\n=== Rounding Policies ===");
    for policy in RoundingPolicy::ALL {
        let result = calculator.calculate_tags(["0", "-5", "2", "0"], ["+", "/", "+"], policy.tag());
        println!(
            "  {:<12} {:?} -> {:?}",
            policy.tag(),
            result.result(),
            result.rounded_result()
        );
    }

    // Grouped, comma-decimal input
    println!("\n=== Grouped Input ===");
    let request = EvaluationRequest::new(["986 282 584 876,635029", "", "", ""]);
    let result = calculator.calculate(&request);
    println!("  {} = {:?}", request.expression(), result);

    // Typed evaluation with the stage trace
    println!("\n=== Stage Trace ===");
    let request = EvaluationRequest::new(["10", "1", "3", "3"])
        .with_operators(Operator::Subtract, Operator::Divide, Operator::Multiply)
        .with_rounding(RoundingPolicy::Bankers);
    match calculator.evaluate(&request) {
        Ok(evaluation) => {
            println!("  Bracket:      {}", evaluation.trace.bracket);
            println!(
                "  {}: {}",
                evaluation.trace.intermediate_stage().label(),
                evaluation.trace.intermediate
            );
            println!("  Result:       {}", evaluation.raw);
            println!("  Rounded:      {}", evaluation.rounded);
        },
        Err(e) => println!("  Error: {}", e),
    }

    // Failures come back as messages
    println!("\n=== Failures ===");
    for (numbers, operators) in [
        (["1e5", "", "", ""], ["+", "+", "+"]),
        (["1", "1", "0", ""], ["+", "/", "+"]),
        (["999999999999.9", "999999999999.9", "", ""], ["+", "+", "+"]),
    ] {
        let result = calculator.calculate_tags(numbers, operators, "");
        println!("  {:?}: {:?}", numbers, result.error());
    }

    println!("\n=== Example Complete ===");
}
