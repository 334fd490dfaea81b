//! Fitted AR model results.

use crate::error::ArError;
use crate::forecast::Forecast;
use crate::solver;
use crate::spec::ArSpec;

/// One-step AR prediction from a trailing window.
///
/// `window` holds the `p` most recent values, oldest first, so the lag-`j+1`
/// input is `window[p - 1 - j]`.
pub(crate) fn predict_one(phi: &[f64], window: &[f64]) -> f64 {
    let p = phi.len();
    phi.iter()
        .enumerate()
        .map(|(j, c)| c * window[p - 1 - j])
        .sum()
}

/// A fitted AR(p) model produced by [`ArSpec::fit()`].
///
/// Contains the estimated AR coefficients (`phi`) and the unbiased noise
/// variance estimate (`sigma2`), jointly derived from one observation
/// sequence in a single fit. The value is immutable after construction; a
/// failed fit produces no `ArFit` at all.
///
/// # Typestate Workflow
///
/// ```mermaid
/// graph LR
///     B["ArFit"] --> C[".phi() — AR coefficients"]
///     B --> D[".sigma2() — noise variance"]
///     B --> E[".residuals(&y) — in-sample diagnostics"]
///     B --> F[".forecast(&history, h)"]
/// ```
#[derive(Clone, Debug)]
pub struct ArFit {
    spec: ArSpec,
    phi: Vec<f64>,
    sigma2: f64,
}

impl ArFit {
    /// Creates a new `ArFit` (crate-internal constructor).
    pub(crate) fn new(spec: ArSpec, phi: Vec<f64>, sigma2: f64) -> Self {
        Self { spec, phi, sigma2 }
    }

    /// Returns the [`ArSpec`] that produced this fit.
    pub fn spec(&self) -> ArSpec {
        self.spec
    }

    /// Returns the model order (`p`).
    pub fn order(&self) -> usize {
        self.spec.p()
    }

    /// Returns the AR coefficients (`phi`), ordered by lag.
    pub fn phi(&self) -> &[f64] {
        &self.phi
    }

    /// Returns the unbiased noise variance estimate (`sigma2`).
    ///
    /// The estimate divides the residual sum of squares by `n - 2p`: the
    /// `p` estimated coefficients and the `p` burned initial observations
    /// both cost a degree of freedom each.
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// Computes the in-sample residuals `e(t) = y(t) - sum_j phi_j y(t-j)`
    /// for `t = p+1..=n` against caller-supplied data.
    ///
    /// Residuals are recomputed on every call rather than cached at fit
    /// time, so they can never disagree with the caller's copy of the data.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArError::InvalidInput`] | `y` is empty or contains non-finite values |
    /// | [`ArError::InsufficientData`] | `y` is too short to yield one residual |
    pub fn residuals(&self, y: &[f64]) -> Result<Vec<f64>, ArError> {
        solver::validate_sequence(y)?;
        let p = self.order();
        let n = y.len();
        if n <= p {
            return Err(ArError::InsufficientData { n, min: p + 1 });
        }
        Ok((p..n)
            .map(|t| y[t] - predict_one(&self.phi, &y[t - p..t]))
            .collect())
    }

    /// Residual sum of squares against caller-supplied data.
    pub fn rss(&self, y: &[f64]) -> Result<f64, ArError> {
        Ok(self.residuals(y)?.iter().map(|e| e * e).sum())
    }

    /// Rolls the model forward `horizon` steps from the tail of `history`.
    ///
    /// Returns a lazy [`Forecast`] iterator; see its documentation for the
    /// recurrence. The history may itself contain previously forecast
    /// values.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArError::InvalidInput`] | `history` contains non-finite values |
    /// | [`ArError::InsufficientHistory`] | fewer than `p` history values |
    pub fn forecast(&self, history: &[f64], horizon: usize) -> Result<Forecast<'_>, ArError> {
        Forecast::new(self, history, horizon)
    }
}
