//! Driver helpers
//!
//! Building blocks for a Monte Carlo driver: element midpoint grids, the
//! table of unit-mean perturbations for every term, and reproducible
//! auxiliary random variables. Summation of terms into full realizations is
//! left to the driver.

use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

use crate::provider::PowerSpectrumProvider;
use crate::synthesis::Selectors;
use crate::FieldError;

/// Sample-function table indexed `[frequency][realization][point]`
pub type SampleFunctionSet = Vec<Vec<Vec<f64>>>;

/// Midpoints of `elements` equal elements on [0, length]
pub fn element_midpoints(length: f64, elements: usize) -> Vec<f64> {
    let le = length / elements as f64;
    (0..elements).map(|i| le / 2.0 + i as f64 * le).collect()
}

/// Perturbation sqrt(2) sigma cos(k_j x + phi_c) for every term and point.
///
/// Each point is a scalar coordinate along the provider's field direction.
pub fn sample_function_set(
    provider: &PowerSpectrumProvider,
    points: &[f64],
) -> Result<SampleFunctionSet, FieldError> {
    let offset = provider.params().direction.offset();
    let mut coordinate = vec![0.0; offset + 1];

    let mut table = Vec::with_capacity(provider.realization_samples());
    for frequency in 0..provider.realization_samples() {
        let mut by_phase = Vec::with_capacity(provider.phase_partitions());
        for realization in 0..provider.phase_partitions() {
            let selectors = Selectors::new(realization, frequency);
            let mut row = Vec::with_capacity(points.len());
            for &x in points {
                coordinate[offset] = x;
                row.push(provider.evaluate(1.0, &coordinate, selectors)? - 1.0);
            }
            by_phase.push(row);
        }
        table.push(by_phase);
    }

    Ok(table)
}

/// Draw `count` standard normal variables from a seeded generator
pub fn draw_random_variables(count: usize, seed: u64) -> Vec<f64> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let value: f64 = StandardNormal.sample(&mut rng);
            value
        })
        .collect()
}

/// Root mean square of a sample
pub fn rms(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = values.iter().map(|&v| v * v).sum();
    (sum_sq / values.len() as f64).sqrt()
}
