//! AR model specification (unfitted).

use crate::config::FitConfig;
use crate::error::ArError;
use crate::fit::ArFit;
use crate::solver;

/// An unfitted AR(p) model specification.
///
/// This is the entry point of the typestate workflow. Create a spec with
/// [`ArSpec::new()`], then call [`ArSpec::fit()`] to obtain an [`ArFit`].
/// The order is fixed at construction and never mutated.
///
/// # Typestate Workflow
///
/// ```mermaid
/// graph LR
///     A["ArSpec::new(p)"] -->|".fit(&data)?"| B["ArFit"]
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArSpec {
    p: usize,
}

impl ArSpec {
    /// Creates a new AR(p) specification with model order `p`.
    ///
    /// The order must be positive; `fit` rejects `p == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use delphi_ar::ArSpec;
    ///
    /// let spec = ArSpec::new(2);
    /// assert_eq!(spec.p(), 2);
    /// ```
    pub fn new(p: usize) -> Self {
        Self { p }
    }

    /// Returns the model order (`p`).
    pub fn p(&self) -> usize {
        self.p
    }

    /// Fits this AR(p) specification to observed data by exact conditional
    /// maximum likelihood, with the default numerical configuration.
    ///
    /// The coefficients are the unique stationary point of the conditional
    /// Gaussian log-likelihood (equivalently, the least-squares solution of
    /// the lag regression); the variance estimate is unbiased with `n - 2p`
    /// residual degrees of freedom.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArError::InvalidInput`] | `data` is empty or has non-finite values |
    /// | [`ArError::InvalidOrder`] | `p == 0` |
    /// | [`ArError::InsufficientData`] | `data.len() <= p + 1` |
    /// | [`ArError::SingularDesign`] | singular normal equations (constant data, dependent lag columns, fewer equations than unknowns) |
    /// | [`ArError::DegenerateVariance`] | `data.len() <= 2p` |
    pub fn fit(&self, data: &[f64]) -> Result<ArFit, ArError> {
        self.fit_with(data, &FitConfig::default())
    }

    /// Fits with an explicit [`FitConfig`] (e.g. a custom singularity
    /// tolerance). See [`ArSpec::fit()`] for semantics and errors.
    pub fn fit_with(&self, data: &[f64], config: &FitConfig) -> Result<ArFit, ArError> {
        let solution = solver::fit_ar(self.p, data, config)?;
        Ok(ArFit::new(*self, solution.phi, solution.sigma2))
    }
}
