//! Spectral-representation stochastic field
//!
//! Discretizes the power spectral density of a stationary Gaussian process
//! with exponential autocorrelation and evaluates single cosine terms of a
//! field realization. Used to perturb material coefficients at integration
//! points inside a Monte Carlo loop owned by the caller.

pub mod cutoff;
pub mod direction;
pub mod discretization;
pub mod params;
pub mod provider;
pub mod sim;
pub mod spectrum;
pub mod synthesis;

use thiserror::Error;

// Re-export main types
pub use cutoff::{CutoffFrequencySolver, CutoffReport};
pub use direction::Direction;
pub use discretization::{Discretization, FrequencyDiscretizer};
pub use params::SpectrumParams;
pub use provider::{PowerSpectrumProvider, RandomVariablesHolder, StochasticCoefficientsProvider};
pub use spectrum::SpectrumModel;
pub use synthesis::{Selectors, TermSynthesizer};

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("direction {direction:?} maps to coordinate offset {offset}, but the coordinate has {len} components")]
    DirectionOutOfRange {
        direction: Direction,
        offset: usize,
        len: usize,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
