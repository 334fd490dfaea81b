//! Lag-design construction for the conditional AR(p) likelihood.
//!
//! Conditioning on the first `p` observations turns AR estimation into a
//! linear regression: each remaining observation is a target, its `p`
//! predecessors are the features. This module is pure data reshaping; all
//! numerical work happens in [`crate::solver`].

use ndarray::{Array1, Array2};

use crate::error::ArError;

/// Lag matrix and target vector for the conditional least-squares problem.
///
/// Row `i` pairs target `y[p + i]` with the lag features
/// `[y[p+i-1], y[p+i-2], ..., y[i]]` (most recent lag first). The first `p`
/// observations appear only as lag context, never as targets.
#[derive(Clone, Debug)]
pub(crate) struct LagDesign {
    /// `(n - p) x p` lag matrix.
    pub(crate) x: Array2<f64>,
    /// Length `n - p` target vector `[y[p], ..., y[n-1]]`.
    pub(crate) targets: Array1<f64>,
}

impl LagDesign {
    /// Builds the design for sequence `y` and order `p`.
    ///
    /// Requires `y.len() > p + 1` so that more than one regression equation
    /// exists; shorter sequences fail with [`ArError::InsufficientData`].
    pub(crate) fn build(y: &[f64], p: usize) -> Result<Self, ArError> {
        let n = y.len();
        if n <= p + 1 {
            return Err(ArError::InsufficientData { n, min: p + 2 });
        }

        let rows = n - p;
        let mut x = Array2::zeros((rows, p));
        let mut targets = Array1::zeros(rows);
        for i in 0..rows {
            let t = p + i;
            targets[i] = y[t];
            for j in 0..p {
                x[[i, j]] = y[t - 1 - j];
            }
        }

        Ok(Self { x, targets })
    }

    /// Returns the number of regression equations.
    pub(crate) fn n_equations(&self) -> usize {
        self.x.nrows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_shapes() {
        let y = [1.0, 2.0, 2.0, 5.0, 8.0, 14.0];
        let design = LagDesign::build(&y, 2).unwrap();
        assert_eq!(design.x.shape(), &[4, 2]);
        assert_eq!(design.targets.len(), 4);
        assert_eq!(design.n_equations(), 4);
    }

    #[test]
    fn build_row_contents() {
        // Targets are y[2..], each row holds [y[t-1], y[t-2]].
        let y = [1.0, 2.0, 2.0, 5.0, 8.0, 14.0];
        let design = LagDesign::build(&y, 2).unwrap();

        assert_eq!(design.targets.to_vec(), vec![2.0, 5.0, 8.0, 14.0]);
        assert_eq!(design.x.row(0).to_vec(), vec![2.0, 1.0]);
        assert_eq!(design.x.row(1).to_vec(), vec![2.0, 2.0]);
        assert_eq!(design.x.row(2).to_vec(), vec![5.0, 2.0]);
        assert_eq!(design.x.row(3).to_vec(), vec![8.0, 5.0]);
    }

    #[test]
    fn build_order_one() {
        let y = [3.0, 6.0, 12.0, 24.0];
        let design = LagDesign::build(&y, 1).unwrap();
        assert_eq!(design.targets.to_vec(), vec![6.0, 12.0, 24.0]);
        assert_eq!(design.x.column(0).to_vec(), vec![3.0, 6.0, 12.0]);
    }

    #[test]
    fn build_initial_values_never_targets() {
        let y = [10.0, 20.0, 1.0, 2.0, 3.0];
        let design = LagDesign::build(&y, 2).unwrap();
        // The burned-in prefix [10, 20] must not appear among targets.
        assert!(design.targets.iter().all(|&t| t != 10.0 && t != 20.0));
        // It does appear as lag context in the first row.
        assert_eq!(design.x.row(0).to_vec(), vec![20.0, 10.0]);
    }

    #[test]
    fn build_rejects_boundary_length() {
        // n == p + 1 is one observation short of a usable design.
        let err = LagDesign::build(&[1.0, 2.0, 3.0], 2).unwrap_err();
        assert!(matches!(err, ArError::InsufficientData { n: 3, min: 4 }));
    }

    #[test]
    fn build_rejects_short_sequences() {
        assert!(matches!(
            LagDesign::build(&[], 1),
            Err(ArError::InsufficientData { .. })
        ));
        assert!(matches!(
            LagDesign::build(&[1.0, 2.0], 3),
            Err(ArError::InsufficientData { n: 2, min: 5 })
        ));
    }

    #[test]
    fn build_minimal_accepted_length() {
        // n == p + 2 yields exactly two equations.
        let design = LagDesign::build(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
        assert_eq!(design.n_equations(), 2);
    }
}
