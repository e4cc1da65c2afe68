//! Term synthesis
//!
//! Evaluates one cosine term of the spectral representation
//!
//! ```text
//! f(x) = mean * (1 + sqrt(2) * sigma * cos(k_j * x + phi_c))
//! ```
//!
//! on a grid of `realization_samples` frequencies in [0, wu] that is
//! independent of the variance-accounting grid, with phase angles at the
//! midpoints of `phase_partitions` equal bins of one period.

use std::f64::consts::{PI, SQRT_2};

use tracing::trace;

use crate::direction::Direction;
use crate::FieldError;

/// Term selectors passed to every evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selectors {
    /// Phase bin index c in [0, P)
    pub realization: usize,
    /// Frequency index j in [0, M)
    pub frequency: usize,
}

impl Selectors {
    pub fn new(realization: usize, frequency: usize) -> Self {
        Self {
            realization,
            frequency,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermSynthesizer {
    pub wu: f64,
    pub standard_deviation: f64,
    pub realization_samples: usize,
    pub phase_partitions: usize,
    pub direction: Direction,
}

impl TermSynthesizer {
    pub fn new(
        wu: f64,
        standard_deviation: f64,
        realization_samples: usize,
        phase_partitions: usize,
        direction: Direction,
    ) -> Self {
        Self {
            wu,
            standard_deviation,
            realization_samples,
            phase_partitions,
            direction,
        }
    }

    /// Spacing wu / M of the synthesis grid.
    pub fn frequency_step(&self) -> f64 {
        self.wu / self.realization_samples as f64
    }

    /// Wavenumber at the midpoint of frequency bin `frequency`.
    pub fn wavenumber(&self, frequency: usize) -> f64 {
        let dw = self.frequency_step();
        dw / 2.0 + frequency as f64 * dw
    }

    /// Phase at the midpoint of phase bin `realization`.
    pub fn phase_angle(&self, realization: usize) -> f64 {
        let p = self.phase_partitions as f64;
        realization as f64 * 2.0 * PI / p + PI / p
    }

    /// Perturbed coefficient for one term.
    ///
    /// Only the configured direction component of `coordinate` is read.
    /// Selectors outside [0, P) x [0, M) are not rejected.
    pub fn evaluate(
        &self,
        mean_value: f64,
        coordinate: &[f64],
        selectors: Selectors,
    ) -> Result<f64, FieldError> {
        let offset = self.direction.offset();
        let x = *coordinate
            .get(offset)
            .ok_or(FieldError::DirectionOutOfRange {
                direction: self.direction,
                offset,
                len: coordinate.len(),
            })?;

        let argument =
            self.wavenumber(selectors.frequency) * x + self.phase_angle(selectors.realization);
        let value = mean_value * (1.0 + SQRT_2 * self.standard_deviation * argument.cos());

        trace!(
            realization = selectors.realization,
            frequency = selectors.frequency,
            x,
            value,
            "term evaluated"
        );
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // wu = 2, M = 4 -> dw = 0.5, k_0 = 0.25; P = 4 -> phi_0 = pi/4
    fn synth(sigma: f64) -> TermSynthesizer {
        TermSynthesizer::new(2.0, sigma, 4, 4, Direction::X)
    }

    #[test]
    fn grid_conventions() {
        let s = synth(0.2);
        assert_eq!(s.frequency_step(), 0.5);
        assert_eq!(s.wavenumber(0), 0.25);
        assert_eq!(s.wavenumber(3), 1.75);
        assert!((s.phase_angle(0) - PI / 4.0).abs() < 1e-12);
        assert!((s.phase_angle(3) - 7.0 * PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn zero_cosine_returns_mean() {
        // k_0 x + pi/4 = pi/2 at x = pi
        let value = synth(0.2)
            .evaluate(5.0, &[PI], Selectors::new(0, 0))
            .unwrap();
        assert!((value - 5.0).abs() < 1e-12);
    }

    #[test]
    fn cosine_extremes() {
        let s = synth(0.2);
        // k_0 x + pi/4 = 0 at x = -pi
        let high = s.evaluate(5.0, &[-PI], Selectors::new(0, 0)).unwrap();
        // k_0 x + pi/4 = pi at x = 3 pi
        let low = s.evaluate(5.0, &[3.0 * PI], Selectors::new(0, 0)).unwrap();

        assert!((high - 5.0 * (1.0 + SQRT_2 * 0.2)).abs() < 1e-12);
        assert!((high - 6.41421).abs() < 1e-5);
        assert!((low - 5.0 * (1.0 - SQRT_2 * 0.2)).abs() < 1e-12);
        assert!((low - 3.58579).abs() < 1e-5);
    }

    #[test]
    fn zero_mean_gives_zero() {
        let s = synth(0.7);
        for c in 0..4 {
            for j in 0..4 {
                let value = s.evaluate(0.0, &[0.37], Selectors::new(c, j)).unwrap();
                assert_eq!(value, 0.0);
            }
        }
    }

    #[test]
    fn zero_sigma_returns_mean() {
        let s = synth(0.0);
        let value = s.evaluate(3.25, &[1.1], Selectors::new(2, 3)).unwrap();
        assert_eq!(value, 3.25);
    }

    #[test]
    fn deterministic_and_history_free() {
        let s = synth(0.3);
        let first = s.evaluate(2.0, &[0.8], Selectors::new(1, 2)).unwrap();
        let _ = s.evaluate(9.0, &[4.0], Selectors::new(3, 0)).unwrap();
        let again = s.evaluate(2.0, &[0.8], Selectors::new(1, 2)).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn reads_configured_component() {
        let s = TermSynthesizer::new(2.0, 0.2, 4, 4, Direction::Y);
        let a = s.evaluate(1.0, &[100.0, 0.5, -7.0], Selectors::new(1, 1)).unwrap();
        let b = s.evaluate(1.0, &[-3.0, 0.5, 42.0], Selectors::new(1, 1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn short_coordinate_is_rejected() {
        let s = TermSynthesizer::new(2.0, 0.2, 4, 4, Direction::Z);
        let err = s.evaluate(1.0, &[0.0, 1.0], Selectors::default()).unwrap_err();
        assert!(matches!(
            err,
            FieldError::DirectionOutOfRange {
                direction: Direction::Z,
                offset: 2,
                len: 2,
            }
        ));
    }
}
