//! Numerical configuration for AR fitting.

/// Configuration for [`ArSpec::fit_with()`](crate::ArSpec::fit_with).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use delphi_ar::FitConfig;
///
/// let config = FitConfig::new().with_singular_tol(1e-8);
/// assert_eq!(config.singular_tol(), 1e-8);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FitConfig {
    /// Relative pivot tolerance for the singularity check.
    singular_tol: f64,
}

impl FitConfig {
    /// Creates a configuration with the default singularity tolerance
    /// (`1e-10`).
    pub fn new() -> Self {
        Self {
            singular_tol: 1e-10,
        }
    }

    /// Sets the relative pivot tolerance below which the normal-equations
    /// matrix is reported singular.
    ///
    /// A Cholesky pivot at or below `tol * max_diag` fails the fit with
    /// [`ArError::SingularDesign`](crate::ArError::SingularDesign).
    pub fn with_singular_tol(mut self, tol: f64) -> Self {
        self.singular_tol = tol;
        self
    }

    /// Returns the singularity tolerance.
    pub fn singular_tol(&self) -> f64 {
        self.singular_tol
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self::new()
    }
}
