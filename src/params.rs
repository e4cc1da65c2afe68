//! Spectrum parameters
//!
//! Construction-time configuration of the target process and of the two
//! frequency grids derived from it.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::FieldError;

pub const DEFAULT_FREQUENCY_INCREMENT: f64 = 0.1;
pub const DEFAULT_FREQUENCY_INTERVALS: usize = 256;
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Parameters of the target spectrum and its discretization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumParams {
    /// Correlation length scale b
    pub correlation_length: f64,
    /// Target standard deviation of the process
    pub standard_deviation: f64,
    /// Fraction of one-sided variance allowed beyond the cutoff, in (0, 1)
    pub cutoff_error: f64,
    /// Number of phase partitions P
    pub phase_partitions: usize,
    /// Sample count M of the synthesis frequency grid
    pub realization_samples: usize,
    /// Coordinate component the field varies along
    pub direction: Direction,
    /// Step of the cutoff search grid
    #[serde(default = "default_frequency_increment")]
    pub frequency_increment: f64,
    /// Bin count N of the variance-accounting grid
    #[serde(default = "default_frequency_intervals")]
    pub frequency_intervals: usize,
    /// Trapezoid area below which the cutoff search stops
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_frequency_increment() -> f64 {
    DEFAULT_FREQUENCY_INCREMENT
}

fn default_frequency_intervals() -> usize {
    DEFAULT_FREQUENCY_INTERVALS
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

impl SpectrumParams {
    /// Create parameters with the default search step, bin count and tolerance
    pub fn new(
        correlation_length: f64,
        standard_deviation: f64,
        cutoff_error: f64,
        phase_partitions: usize,
        realization_samples: usize,
        direction: Direction,
    ) -> Self {
        Self {
            correlation_length,
            standard_deviation,
            cutoff_error,
            phase_partitions,
            realization_samples,
            direction,
            frequency_increment: DEFAULT_FREQUENCY_INCREMENT,
            frequency_intervals: DEFAULT_FREQUENCY_INTERVALS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn with_frequency_increment(mut self, frequency_increment: f64) -> Self {
        self.frequency_increment = frequency_increment;
        self
    }

    pub fn with_frequency_intervals(mut self, frequency_intervals: usize) -> Self {
        self.frequency_intervals = frequency_intervals;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Parse parameters from JSON and validate them
    pub fn from_json_str(json: &str) -> Result<Self, FieldError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if !self.correlation_length.is_finite() || self.correlation_length <= 0.0 {
            return Err(FieldError::InvalidConfig(
                "correlation_length must be finite and greater than zero".to_string(),
            ));
        }

        if !self.standard_deviation.is_finite() || self.standard_deviation < 0.0 {
            return Err(FieldError::InvalidConfig(
                "standard_deviation must be finite and non-negative".to_string(),
            ));
        }

        if !(self.cutoff_error > 0.0 && self.cutoff_error < 1.0) {
            return Err(FieldError::InvalidConfig(
                "cutoff_error must be in (0, 1)".to_string(),
            ));
        }

        if !self.frequency_increment.is_finite() || self.frequency_increment <= 0.0 {
            return Err(FieldError::InvalidConfig(
                "frequency_increment must be finite and greater than zero".to_string(),
            ));
        }

        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(FieldError::InvalidConfig(
                "tolerance must be finite and greater than zero".to_string(),
            ));
        }

        if self.frequency_intervals == 0 {
            return Err(FieldError::InvalidConfig(
                "frequency_intervals must be greater than zero".to_string(),
            ));
        }

        if self.realization_samples == 0 {
            return Err(FieldError::InvalidConfig(
                "realization_samples must be greater than zero".to_string(),
            ));
        }

        if self.phase_partitions == 0 {
            return Err(FieldError::InvalidConfig(
                "phase_partitions must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
