//! Fit command: estimate AR coefficients for an observed series.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use delphi_ar::{ArSpec, FitConfig};

use crate::cli::FitArgs;
use crate::config;
use crate::input;

/// Run the fit pipeline and print the estimated model.
pub fn run(args: FitArgs) -> Result<()> {
    let _cmd = info_span!("fit").entered();

    let config = config::load(args.config.as_deref())?;
    let order = args.order.unwrap_or(config.fit.order);
    let tolerance = args.tolerance.unwrap_or(config.fit.tolerance);

    let series = input::read_series(&args.input)?;
    info!(n = series.len(), order, "series loaded");

    let fit_config = FitConfig::new().with_singular_tol(tolerance);
    let fit = ArSpec::new(order)
        .fit_with(&series, &fit_config)
        .with_context(|| format!("failed to fit AR({order}) model"))?;
    info!(sigma2 = fit.sigma2(), "model fitted");

    println!("order: {}", fit.order());
    for (lag, phi) in fit.phi().iter().enumerate() {
        println!("phi[{}]: {:.6}", lag + 1, phi);
    }
    println!("sigma2: {:.6}", fit.sigma2());

    Ok(())
}
