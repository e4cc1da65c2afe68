//! Target spectrum
//!
//! Exponential autocorrelation and its one-sided power spectral density.

use std::f64::consts::PI;

/// Closed-form spectrum of the target process
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumModel {
    /// Correlation length scale b
    pub correlation_length: f64,
    /// Standard deviation sigma
    pub standard_deviation: f64,
}

impl SpectrumModel {
    pub fn new(correlation_length: f64, standard_deviation: f64) -> Self {
        Self {
            correlation_length,
            standard_deviation,
        }
    }

    pub fn variance(&self) -> f64 {
        self.standard_deviation * self.standard_deviation
    }

    /// R(tau) = sigma^2 exp(-|tau| / b)
    ///
    /// Not guarded against b = 0; R(0) is then NaN.
    pub fn autocorrelation(&self, tau: f64) -> f64 {
        self.variance() * (-tau.abs() / self.correlation_length).exp()
    }

    /// S(omega) = sigma^2 b / (pi (1 + b^2 omega^2))
    pub fn psd(&self, omega: f64) -> f64 {
        let b = self.correlation_length;
        self.variance() * b / (PI * (1.0 + b * b * omega * omega))
    }

    /// Variance carried by the one-sided spectrum on [0, inf).
    pub fn one_sided_variance(&self) -> f64 {
        self.autocorrelation(0.0) / 2.0
    }
}
