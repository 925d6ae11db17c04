// ============================================================================
// Basic Usage Example
// ============================================================================

use land_calculator::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Land Calculator Example ===\n");

    let handler: Arc<dyn EventHandler> = Arc::new(LoggingEventHandler);

    // Jamabandi: shares of 10 Kanal 5 Marla
    let mut worksheet = JamabandiCalculator::new(handler.clone())
        .with_land(KanalMarla::new(10, 5));

    for share in ["3/10", "1/4", "9/20"] {
        match worksheet.add_share(share) {
            Ok(next) => worksheet = next,
            Err(e) => println!("Could not add {}: {}", share, e),
        }
    }

    match worksheet.calculate() {
        Ok(report) => {
            println!("Total land: {} Farrad", report.total_land);
            for share in &report.shares {
                println!("  {} -> {} Farrad", share.fraction, share.value);
            }
            println!("Sum of share values: {} Farrad", report.sum_of_shares);
            println!("Final ratio: {}\n", report.final_ratio);
        },
        Err(e) => println!("Jamabandi failed: {}\n", e),
    }

    // Kanal/Marla addition
    let land = LandCalculator::new(handler.clone());
    match land.add(KanalMarla::new(10, 15), KanalMarla::new(5, 10)) {
        Ok(sum) => println!("10 Kanal 15 Marla + 5 Kanal 10 Marla = {}", sum),
        Err(e) => println!("Addition failed: {}", e),
    }
    if let Err(e) = land.add(KanalMarla::new(1, 20), KanalMarla::new(0, 0)) {
        println!("Rejected: {}\n", e);
    }

    // Fraction arithmetic
    let mut fractions = FractionCalculator::new(handler);
    for (a, op, b) in [
        ("1/10", FractionOperator::Add, "1/30"),
        ("1/2", FractionOperator::Subtract, "1/3"),
        ("1/2", FractionOperator::Add, "x/3"),
    ] {
        match fractions.apply(a, op, b) {
            Ok(next) => fractions = next,
            Err(e) => println!("{} {} {}: {}", a, op, b, e),
        }
    }

    println!("\nFraction history (newest first):");
    for entry in fractions.operations() {
        println!(
            "  {} ({} / {})",
            entry, entry.result.decimal, entry.result.percentage
        );
    }
}
