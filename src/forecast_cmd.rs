//! Forecast command: fit an AR model and roll it forward.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use delphi_ar::{ArSpec, FitConfig};

use crate::cli::ForecastArgs;
use crate::config;
use crate::input;

/// Run the fit-then-forecast pipeline and print one value per line.
pub fn run(args: ForecastArgs) -> Result<()> {
    let _cmd = info_span!("forecast").entered();

    let config = config::load(args.config.as_deref())?;
    let order = args.order.unwrap_or(config.fit.order);
    let tolerance = args.tolerance.unwrap_or(config.fit.tolerance);
    let steps = args.steps.unwrap_or(config.forecast.horizon);

    let series = input::read_series(&args.input)?;
    info!(n = series.len(), order, steps, "series loaded");

    let fit_config = FitConfig::new().with_singular_tol(tolerance);
    let fit = ArSpec::new(order)
        .fit_with(&series, &fit_config)
        .with_context(|| format!("failed to fit AR({order}) model"))?;
    info!(sigma2 = fit.sigma2(), "model fitted");

    let forecast = fit
        .forecast(&series, steps)
        .context("failed to seed forecast")?;
    for value in forecast {
        println!("{value:.6}");
    }

    Ok(())
}
