//! Frequency discretization
//!
//! Splits [0, wu] into `frequency_intervals` equal bins and samples the
//! target spectrum at every bin midpoint.

use std::f64::consts::PI;

use tracing::debug;

use crate::spectrum::SpectrumModel;

/// Variance-accounting grid, built once per provider
#[derive(Debug, Clone, PartialEq)]
pub struct Discretization {
    /// Cutoff frequency
    pub wu: f64,
    /// Bin midpoints, strictly increasing with spacing wu / N
    pub omegas: Vec<f64>,
    /// Target spectrum ordinates S(omega_i)
    pub target_spectrum: Vec<f64>,
    /// Period 2 pi / dw of the implied signal
    pub period: f64,
    /// floor(period * wu / pi)
    pub min_sample_points: usize,
}

impl Discretization {
    /// Bin width wu / N.
    pub fn bin_width(&self) -> f64 {
        self.wu / self.omegas.len() as f64
    }

    pub fn len(&self) -> usize {
        self.omegas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.omegas.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyDiscretizer {
    pub frequency_intervals: usize,
}

impl FrequencyDiscretizer {
    pub fn new(frequency_intervals: usize) -> Self {
        Self {
            frequency_intervals,
        }
    }

    pub fn discretize(&self, model: &SpectrumModel, wu: f64) -> Discretization {
        let n = self.frequency_intervals;
        let dw = wu / n as f64;

        let omegas: Vec<f64> = (0..n).map(|i| dw / 2.0 + i as f64 * dw).collect();
        let target_spectrum: Vec<f64> = omegas.iter().map(|&omega| model.psd(omega)).collect();

        let period = 2.0 * PI / dw;
        let min_sample_points = (period * wu / PI) as usize;

        debug!(wu, bins = n, period, min_sample_points, "spectrum discretized");

        Discretization {
            wu,
            omegas,
            target_spectrum,
            period,
            min_sample_points,
        }
    }
}
