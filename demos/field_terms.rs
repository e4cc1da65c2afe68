//! Field Terms Example
//!
//! Builds a provider for a unit bar split into 20 elements and prints the
//! discretization summary and the first rows of the sample-function table.
//! Set `RUST_LOG=spectral_field=debug` to see the construction log.

use spectral_field::sim::{draw_random_variables, element_midpoints, sample_function_set};
use spectral_field::{
    Direction, FieldError, PowerSpectrumProvider, RandomVariablesHolder, Selectors,
    SpectrumParams,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FieldError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let params = SpectrumParams::new(
        1.0,  // correlation length b
        0.2,  // standard deviation
        0.05, // cutoff error
        10,   // phase partitions
        30,   // realization samples
        Direction::X,
    );
    let mut provider = PowerSpectrumProvider::new(params)?;
    provider.set_random_variables(draw_random_variables(4, 42));

    let report = provider.cutoff_report();
    println!("Discretization:");
    println!("  Cutoff frequency wu: {:.3}", provider.wu());
    println!("  Search steps: {}", report.steps);
    println!(
        "  Variance coverage: {:.4}",
        report.coverage(provider.spectrum())
    );
    println!("  Early exit: {}", report.early_exit);
    println!("  Bins: {}", provider.frequency_intervals());
    println!("  Period: {:.3}", provider.period());
    println!("  Min sample points: {}", provider.min_sample_points());
    println!();

    let midpoints = element_midpoints(1.0, 20);
    let table = sample_function_set(&provider, &midpoints)?;

    println!("Perturbations, frequency 0, first 3 phases:");
    for (c, row) in table[0].iter().take(3).enumerate() {
        let cells: Vec<String> = row.iter().take(6).map(|v| format!("{v:+.4}")).collect();
        println!("  phase {c}: {}", cells.join(" "));
    }
    println!();

    let mean = 210.0e9;
    let coefficient = provider.evaluate(mean, &[midpoints[7], 0.0], Selectors::new(2, 5))?;
    println!(
        "Young's modulus at x={:.3}, phase 2, frequency 5: {:.4e}",
        midpoints[7], coefficient
    );
    println!("Attached random variables: {:?}", provider.random_variables());

    Ok(())
}
