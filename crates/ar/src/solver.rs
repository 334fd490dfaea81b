//! Exact conditional maximum-likelihood solver for AR(p) coefficients.
//!
//! The conditional Gaussian log-likelihood
//!
//! ```text
//! L(phi, sigma2) = -((n-p)/2) ln(2 pi sigma2)
//!                  - (1/(2 sigma2)) sum_{t=p+1}^{n} (y(t) - sum_j phi_j y(t-j))^2
//! ```
//!
//! has a unique stationary point in `phi` wherever the design has full
//! column rank: differentiating in each `phi_j` and setting to zero yields
//! the least-squares normal equations `X^T X phi = X^T t`, independent of
//! `sigma2`. The solver forms those equations over the lag design, solves
//! them by Cholesky factorization, and plugs the minimizer into the
//! unbiased variance formula. There is no iterative fallback: an
//! ill-conditioned system is reported, never regularized.
//!
//! **Not part of the public API.**

use ndarray::{Array1, Array2};
use tracing::debug;

use crate::config::FitConfig;
use crate::design::LagDesign;
use crate::error::ArError;
use crate::fit::predict_one;

/// Jointly estimated coefficients and noise variance.
pub(crate) struct Solution {
    pub(crate) phi: Vec<f64>,
    pub(crate) sigma2: f64,
}

/// Fits an AR(p) model to `y` by exact conditional least squares.
///
/// Pipeline:
/// 1. Validate the sequence and order.
/// 2. Build the lag design (first `p` observations are context only).
/// 3. Solve the normal equations for `phi`.
/// 4. Estimate `sigma2` with `n - 2p` residual degrees of freedom
///    (`p` coefficients estimated, `p` observations burned).
pub(crate) fn fit_ar(p: usize, y: &[f64], config: &FitConfig) -> Result<Solution, ArError> {
    validate_sequence(y)?;
    if p == 0 {
        return Err(ArError::InvalidOrder);
    }

    let design = LagDesign::build(y, p)?;

    // A constant sequence carries no lag information. For p >= 2 the lag
    // columns are exactly dependent and the factorization below would catch
    // it, but the p = 1 normal matrix is formally invertible, so the
    // refusal must happen here.
    let spread = y.iter().fold(f64::NEG_INFINITY, |m, v| m.max(*v))
        - y.iter().fold(f64::INFINITY, |m, v| m.min(*v));
    if spread.abs() < f64::EPSILON {
        return Err(ArError::SingularDesign);
    }

    let a = design.x.t().dot(&design.x);
    let b = design.x.t().dot(&design.targets);
    let phi = cholesky_solve(&a, &b, config.singular_tol())?;

    let n = y.len();
    if n <= 2 * p {
        return Err(ArError::DegenerateVariance { n, p });
    }
    let dof = (n - 2 * p) as f64;
    let rss: f64 = (p..n)
        .map(|t| {
            let e = y[t] - predict_one(&phi, &y[t - p..t]);
            e * e
        })
        .sum();
    let sigma2 = rss / dof;

    debug!(
        p,
        n,
        n_equations = design.n_equations(),
        sigma2,
        "solved normal equations"
    );

    Ok(Solution { phi, sigma2 })
}

/// Rejects empty sequences and sequences with NaN/infinite values before
/// they can reach the linear algebra.
pub(crate) fn validate_sequence(y: &[f64]) -> Result<(), ArError> {
    if y.is_empty() {
        return Err(ArError::InvalidInput {
            reason: "sequence is empty",
        });
    }
    if y.iter().any(|v| !v.is_finite()) {
        return Err(ArError::InvalidInput {
            reason: "sequence contains non-finite values",
        });
    }
    Ok(())
}

/// Solves the symmetric positive-definite system `a x = b` via the
/// Cholesky factorization `a = L L^T`.
///
/// A pivot at or below `tol * max_diag(a)` means the design is
/// rank-deficient (fewer equations than unknowns, or linearly dependent
/// lag columns) and fails with [`ArError::SingularDesign`].
fn cholesky_solve(a: &Array2<f64>, b: &Array1<f64>, tol: f64) -> Result<Vec<f64>, ArError> {
    let p = a.nrows();
    let max_diag = (0..p).map(|k| a[[k, k]]).fold(0.0_f64, f64::max);
    let threshold = tol * max_diag;

    let mut l = Array2::<f64>::zeros((p, p));
    for k in 0..p {
        let mut d = a[[k, k]];
        for j in 0..k {
            d -= l[[k, j]] * l[[k, j]];
        }
        if !d.is_finite() || d <= threshold {
            return Err(ArError::SingularDesign);
        }
        l[[k, k]] = d.sqrt();
        for i in (k + 1)..p {
            let mut s = a[[i, k]];
            for j in 0..k {
                s -= l[[i, j]] * l[[k, j]];
            }
            l[[i, k]] = s / l[[k, k]];
        }
    }

    // Forward substitution: L z = b
    let mut z = vec![0.0; p];
    for i in 0..p {
        let mut s = b[i];
        for j in 0..i {
            s -= l[[i, j]] * z[j];
        }
        z[i] = s / l[[i, i]];
    }

    // Back substitution: L^T x = z
    let mut x = vec![0.0; p];
    for i in (0..p).rev() {
        let mut s = z[i];
        for j in (i + 1)..p {
            s -= l[[j, i]] * x[j];
        }
        x[i] = s / l[[i, i]];
    }

    Ok(x)
}
