//! Error types for the delphi-ar crate.

/// Error type for all fallible operations in the delphi-ar crate.
///
/// This enum covers input validation failures and the numerical refusal
/// cases of the exact solver. Estimation is deterministic, so no error is
/// ever retried internally; callers must treat every variant as a fit or
/// forecast refusal, never a partial result.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ArError {
    /// Returned when the input sequence is empty or contains NaN/infinite
    /// values.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: &'static str,
    },

    /// Returned when the model order is zero.
    #[error("model order must be positive")]
    InvalidOrder,

    /// Returned when the sequence has too few observations to form even one
    /// regression equation.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when the normal-equations matrix is numerically singular,
    /// including rank-deficient designs (fewer equations than unknowns) and
    /// constant sequences whose lag columns carry no information.
    #[error("design matrix is numerically singular")]
    SingularDesign,

    /// Returned when the residual degrees of freedom are non-positive, so
    /// no unbiased variance estimate exists.
    #[error("no residual degrees of freedom: {n} observations, order {p}")]
    DegenerateVariance {
        /// Number of observations provided.
        n: usize,
        /// Model order.
        p: usize,
    },

    /// Returned when a forecast is requested with fewer history values than
    /// the model order.
    #[error("insufficient history: got {n} values, need at least {min}")]
    InsufficientHistory {
        /// Number of history values provided.
        n: usize,
        /// Minimum number of history values required.
        min: usize,
    },
}
