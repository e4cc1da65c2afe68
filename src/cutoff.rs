//! Cutoff frequency search
//!
//! Walks the spectrum in steps of `frequency_increment`, accumulating
//! trapezoid areas until the requested share of the one-sided variance is
//! covered.
//!
//! The search also stops as soon as a single trapezoid falls below
//! `tolerance`, even if the variance target has not been reached. With a
//! small `cutoff_error` and a loose tolerance the cutoff is then
//! under-resolved. That exit is kept as is and surfaced through
//! [`CutoffReport::early_exit`].

use tracing::{debug, warn};

use crate::spectrum::SpectrumModel;

/// Outcome of the cutoff search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutoffReport {
    /// Cutoff frequency wu = steps * frequency_increment
    pub wu: f64,
    /// Final step counter k
    pub steps: usize,
    /// Variance the search tried to reach
    pub target: f64,
    /// Accumulated trapezoid sum when the search stopped
    pub captured: f64,
    /// Search ended on the tolerance branch before reaching `target`
    pub early_exit: bool,
}

impl CutoffReport {
    /// Share of the one-sided variance below the cutoff.
    pub fn coverage(&self, model: &SpectrumModel) -> f64 {
        let total = model.one_sided_variance();
        if total > 0.0 {
            self.captured / total
        } else {
            1.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutoffFrequencySolver {
    pub cutoff_error: f64,
    pub frequency_increment: f64,
    pub tolerance: f64,
}

impl CutoffFrequencySolver {
    pub fn new(cutoff_error: f64, frequency_increment: f64, tolerance: f64) -> Self {
        Self {
            cutoff_error,
            frequency_increment,
            tolerance,
        }
    }

    pub fn solve(&self, model: &SpectrumModel) -> CutoffReport {
        let dw = self.frequency_increment;
        let target = (1.0 - self.cutoff_error) * model.one_sided_variance();

        let mut steps = 1usize;
        let mut captured = 0.0;
        let mut early_exit = false;

        while captured < target {
            let area =
                0.5 * (model.psd((steps - 1) as f64 * dw) + model.psd(steps as f64 * dw)) * dw;
            if area < self.tolerance {
                early_exit = true;
                break;
            }

            captured += area;
            steps += 1;
        }

        let wu = steps as f64 * dw;
        if early_exit {
            warn!(
                wu,
                steps,
                captured,
                target,
                tolerance = self.tolerance,
                "cutoff search stopped on tolerance before reaching the variance target"
            );
        } else {
            debug!(wu, steps, captured, target, "cutoff frequency found");
        }

        CutoffReport {
            wu,
            steps,
            target,
            captured,
            early_exit,
        }
    }
}
