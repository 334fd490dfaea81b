//! End-to-end fit + forecast tests on a hand-solved scenario.

use approx::assert_relative_eq;
use delphi_ar::{ArError, ArSpec};

const SERIES: [f64; 6] = [1.0, 2.0, 2.0, 5.0, 8.0, 14.0];

#[test]
fn fit_reproduces_hand_solved_least_squares() {
    // Rows t = 3..6 give 4 equations in 2 unknowns with solution
    // phi = [26/27, 35/27]; the unbiased variance is 19/18.
    let fit = ArSpec::new(2).fit(&SERIES).unwrap();
    assert_relative_eq!(fit.phi()[0], 26.0 / 27.0, epsilon = 1e-9);
    assert_relative_eq!(fit.phi()[1], 35.0 / 27.0, epsilon = 1e-9);
    assert_relative_eq!(fit.sigma2(), 19.0 / 18.0, epsilon = 1e-9);
}

#[test]
fn residuals_are_orthogonal_to_lags() {
    // Equivalent to the normal equations X^T X phi = X^T t: at the
    // least-squares solution every lag column is orthogonal to the
    // residual vector.
    let fit = ArSpec::new(2).fit(&SERIES).unwrap();
    let residuals = fit.residuals(&SERIES).unwrap();
    assert_eq!(residuals.len(), 4);

    for lag in 1..=2 {
        let dot: f64 = residuals
            .iter()
            .enumerate()
            .map(|(i, e)| e * SERIES[2 + i - lag])
            .sum();
        assert_relative_eq!(dot, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn forecast_follows_the_fitted_recurrence() {
    let fit = ArSpec::new(2).fit(&SERIES).unwrap();
    let forecast: Vec<f64> = fit.forecast(&SERIES, 3).unwrap().collect();
    assert_eq!(forecast.len(), 3);
    assert!(forecast.iter().all(|v| v.is_finite()));

    // Three sequential applications of the recurrence, each step's newest
    // input being the immediately preceding forecast (no lookahead).
    let phi = fit.phi();
    let f1 = phi[0] * SERIES[5] + phi[1] * SERIES[4];
    let f2 = phi[0] * f1 + phi[1] * SERIES[5];
    let f3 = phi[0] * f2 + phi[1] * f1;
    assert_relative_eq!(forecast[0], f1, epsilon = 1e-6);
    assert_relative_eq!(forecast[1], f2, epsilon = 1e-6);
    assert_relative_eq!(forecast[2], f3, epsilon = 1e-6);
}

#[test]
fn forecast_is_idempotent() {
    let fit = ArSpec::new(2).fit(&SERIES).unwrap();
    let a: Vec<f64> = fit.forecast(&SERIES, 10).unwrap().collect();
    let b: Vec<f64> = fit.forecast(&SERIES, 10).unwrap().collect();
    assert_eq!(a, b, "repeated forecasts must be bit-identical");
}

#[test]
fn forecast_horizon_one_uses_true_observations() {
    let fit = ArSpec::new(2).fit(&SERIES).unwrap();
    let one: Vec<f64> = fit.forecast(&SERIES, 1).unwrap().collect();
    let manual = fit.phi()[0] * 14.0 + fit.phi()[1] * 8.0;
    assert_relative_eq!(one[0], manual, epsilon = 1e-6);
}

#[test]
fn boundary_errors_surface_through_public_api() {
    // n == p + 1
    assert!(matches!(
        ArSpec::new(2).fit(&SERIES[..3]),
        Err(ArError::InsufficientData { n: 3, min: 4 })
    ));
    // constant sequence
    assert!(matches!(
        ArSpec::new(1).fit(&[4.0; 10]),
        Err(ArError::SingularDesign)
    ));
    // forecast history shorter than p
    let fit = ArSpec::new(2).fit(&SERIES).unwrap();
    assert!(matches!(
        fit.forecast(&SERIES[..1], 1),
        Err(ArError::InsufficientHistory { n: 1, min: 2 })
    ));
}

#[test]
fn model_usable_from_multiple_threads() {
    let fit = ArSpec::new(2).fit(&SERIES).unwrap();
    let baseline: Vec<f64> = fit.forecast(&SERIES, 4).unwrap().collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let forecast: Vec<f64> = fit.forecast(&SERIES, 4).unwrap().collect();
                assert_eq!(forecast, baseline);
            });
        }
    });
}
