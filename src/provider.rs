//! Power spectrum coefficient provider
//!
//! Runs the cutoff search and the frequency discretization once at
//! construction and then hands out perturbed material coefficients for any
//! (realization, frequency) term. Holds no selector state, so a single
//! provider can be shared between threads evaluating different terms.

use tracing::debug;

use crate::cutoff::{CutoffFrequencySolver, CutoffReport};
use crate::discretization::{Discretization, FrequencyDiscretizer};
use crate::params::SpectrumParams;
use crate::spectrum::SpectrumModel;
use crate::synthesis::{Selectors, TermSynthesizer};
use crate::FieldError;

/// Source of stochastic material coefficients at integration points
pub trait StochasticCoefficientsProvider {
    fn coefficient(
        &self,
        mean_value: f64,
        coordinate: &[f64],
        selectors: Selectors,
    ) -> Result<f64, FieldError>;
}

/// Attached random variables owned by an external driver
pub trait RandomVariablesHolder {
    fn random_variables(&self) -> &[f64];
    fn set_random_variables(&mut self, values: Vec<f64>);
}

/// Spectral-representation coefficient provider
#[derive(Debug, Clone)]
pub struct PowerSpectrumProvider {
    /// Construction parameters
    params: SpectrumParams,
    /// Target spectrum
    model: SpectrumModel,
    /// Cutoff search outcome
    cutoff: CutoffReport,
    /// Variance-accounting grid
    discretization: Discretization,
    /// Term evaluator on the synthesis grid
    synthesizer: TermSynthesizer,
    /// Opaque driver data
    random_variables: Vec<f64>,
}

impl PowerSpectrumProvider {
    /// Validate the parameters and build the discretization
    pub fn new(params: SpectrumParams) -> Result<Self, FieldError> {
        params.validate()?;

        let model = SpectrumModel::new(params.correlation_length, params.standard_deviation);
        let cutoff = CutoffFrequencySolver::new(
            params.cutoff_error,
            params.frequency_increment,
            params.tolerance,
        )
        .solve(&model);
        let discretization =
            FrequencyDiscretizer::new(params.frequency_intervals).discretize(&model, cutoff.wu);
        let synthesizer = TermSynthesizer::new(
            cutoff.wu,
            params.standard_deviation,
            params.realization_samples,
            params.phase_partitions,
            params.direction,
        );

        debug!(
            wu = cutoff.wu,
            coverage = cutoff.coverage(&model),
            realization_samples = params.realization_samples,
            phase_partitions = params.phase_partitions,
            "power spectrum provider ready"
        );

        Ok(Self {
            params,
            model,
            cutoff,
            discretization,
            synthesizer,
            random_variables: Vec::new(),
        })
    }

    /// Evaluate one term of the field for the given selectors
    pub fn evaluate(
        &self,
        mean_value: f64,
        coordinate: &[f64],
        selectors: Selectors,
    ) -> Result<f64, FieldError> {
        self.synthesizer.evaluate(mean_value, coordinate, selectors)
    }

    pub fn params(&self) -> &SpectrumParams {
        &self.params
    }

    pub fn spectrum(&self) -> &SpectrumModel {
        &self.model
    }

    pub fn cutoff_report(&self) -> &CutoffReport {
        &self.cutoff
    }

    pub fn discretization(&self) -> &Discretization {
        &self.discretization
    }

    pub fn synthesizer(&self) -> &TermSynthesizer {
        &self.synthesizer
    }

    pub fn spectrum_standard_deviation(&self) -> f64 {
        self.params.standard_deviation
    }

    /// Target spectrum ordinates S[i]
    pub fn target_spectrum(&self) -> &[f64] {
        &self.discretization.target_spectrum
    }

    /// Bin midpoints omega[i]
    pub fn omegas(&self) -> &[f64] {
        &self.discretization.omegas
    }

    /// Cutoff frequency
    pub fn wu(&self) -> f64 {
        self.cutoff.wu
    }

    pub fn period(&self) -> f64 {
        self.discretization.period
    }

    pub fn min_sample_points(&self) -> usize {
        self.discretization.min_sample_points
    }

    /// Synthesis grid size M
    pub fn realization_samples(&self) -> usize {
        self.params.realization_samples
    }

    /// Variance-accounting grid size N
    pub fn frequency_intervals(&self) -> usize {
        self.params.frequency_intervals
    }

    /// Phase partition count P
    pub fn phase_partitions(&self) -> usize {
        self.params.phase_partitions
    }

    /// All selector pairs in [0, P) x [0, M), realization-major
    pub fn selectors(&self) -> impl Iterator<Item = Selectors> + '_ {
        let m = self.params.realization_samples;
        (0..self.params.phase_partitions)
            .flat_map(move |realization| (0..m).map(move |j| Selectors::new(realization, j)))
    }
}

impl StochasticCoefficientsProvider for PowerSpectrumProvider {
    fn coefficient(
        &self,
        mean_value: f64,
        coordinate: &[f64],
        selectors: Selectors,
    ) -> Result<f64, FieldError> {
        self.evaluate(mean_value, coordinate, selectors)
    }
}

impl RandomVariablesHolder for PowerSpectrumProvider {
    fn random_variables(&self) -> &[f64] {
        &self.random_variables
    }

    fn set_random_variables(&mut self, values: Vec<f64>) {
        self.random_variables = values;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use std::f64::consts::PI;

    fn provider() -> PowerSpectrumProvider {
        let params = SpectrumParams::new(1.0, 0.2, 0.05, 10, 30, Direction::X);
        PowerSpectrumProvider::new(params).unwrap()
    }

    #[test]
    fn construction_pipeline_is_consistent() {
        let p = provider();
        let model = SpectrumModel::new(1.0, 0.2);
        let expected = CutoffFrequencySolver::new(0.05, 0.1, 1e-10).solve(&model);

        assert_eq!(p.wu(), expected.wu);
        assert_eq!(p.omegas().len(), 256);
        assert_eq!(p.target_spectrum().len(), 256);
        assert_eq!(p.frequency_intervals(), 256);
        assert_eq!(p.realization_samples(), 30);
        assert_eq!(p.phase_partitions(), 10);
        assert_eq!(p.spectrum_standard_deviation(), 0.2);

        let dw = p.wu() / 256.0;
        assert!((p.omegas()[0] - dw / 2.0).abs() < 1e-15);
        assert!((p.omegas()[255] - (p.wu() - dw / 2.0)).abs() < 1e-12);
        assert!((p.period() - 2.0 * PI * 256.0 / p.wu()).abs() < 1e-9);
        assert_eq!(
            p.min_sample_points(),
            (p.period() * p.wu() / PI).floor() as usize
        );
        for (omega, s) in p.omegas().iter().zip(p.target_spectrum()) {
            assert_eq!(*s, p.spectrum().psd(*omega));
        }
    }

    #[test]
    fn synthesis_grid_is_independent_of_bin_count() {
        let narrow = PowerSpectrumProvider::new(
            SpectrumParams::new(1.0, 0.2, 0.05, 10, 30, Direction::X).with_frequency_intervals(16),
        )
        .unwrap();
        let wide = provider();
        let coordinate = [0.35, 0.0, 0.0];
        let selectors = Selectors::new(4, 17);

        assert_eq!(narrow.wu(), wide.wu());
        assert_eq!(
            narrow.evaluate(2.0, &coordinate, selectors).unwrap(),
            wide.evaluate(2.0, &coordinate, selectors).unwrap()
        );
        assert_eq!(narrow.synthesizer().frequency_step(), wide.wu() / 30.0);
    }

    #[test]
    fn invalid_params_fail_construction() {
        let params = SpectrumParams::new(-1.0, 0.2, 0.05, 10, 30, Direction::X);
        assert!(matches!(
            PowerSpectrumProvider::new(params),
            Err(FieldError::InvalidConfig(_))
        ));
    }

    #[test]
    fn trait_matches_inherent_evaluate() {
        let p = provider();
        let via_trait: &dyn StochasticCoefficientsProvider = &p;
        let selectors = Selectors::new(3, 5);
        assert_eq!(
            via_trait.coefficient(1.5, &[0.2], selectors).unwrap(),
            p.evaluate(1.5, &[0.2], selectors).unwrap()
        );
    }

    #[test]
    fn random_variables_are_stored_as_given() {
        let mut p = provider();
        assert!(p.random_variables().is_empty());
        p.set_random_variables(vec![0.3, -1.2, 2.5]);
        assert_eq!(p.random_variables(), &[0.3, -1.2, 2.5]);

        // the slot never feeds the evaluation
        let before = provider().evaluate(1.0, &[0.4], Selectors::new(1, 1)).unwrap();
        assert_eq!(p.evaluate(1.0, &[0.4], Selectors::new(1, 1)).unwrap(), before);
    }

    #[test]
    fn selectors_cover_all_terms() {
        let p = provider();
        let all: Vec<Selectors> = p.selectors().collect();
        assert_eq!(all.len(), 300);
        assert_eq!(all[0], Selectors::new(0, 0));
        assert_eq!(all[29], Selectors::new(0, 29));
        assert_eq!(all[30], Selectors::new(1, 0));
        assert_eq!(all[299], Selectors::new(9, 29));
    }

    #[test]
    fn shared_across_threads() {
        let p = provider();
        let serial: Vec<f64> = (0..10)
            .map(|c| p.evaluate(1.0, &[0.6], Selectors::new(c, 2)).unwrap())
            .collect();

        let parallel: Vec<f64> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..10)
                .map(|c| {
                    let p = &p;
                    scope.spawn(move || p.evaluate(1.0, &[0.6], Selectors::new(c, 2)).unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(serial, parallel);
    }
}
