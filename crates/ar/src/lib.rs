//! # delphi-ar
//!
//! Exact AR(p) model fitting and forecasting via the conditional Gaussian
//! likelihood.
//!
//! The estimator is closed-form: maximizing the conditional likelihood over
//! the coefficients is an ordinary least-squares problem on the lag design,
//! solved directly through the normal equations. There is no iterative
//! optimization and no regularization fallback; ill-posed systems fail with
//! a descriptive error.
//!
//! ## Typestate Workflow
//!
//! ```mermaid
//! graph LR
//!     A["ArSpec::new(p)"] -->|".fit(&data)?"| B["ArFit"]
//!     B --> C[".phi() — AR coefficients"]
//!     B --> D[".sigma2() — noise variance"]
//!     B --> E[".residuals(&data) — in-sample diagnostics"]
//!     B -->|".forecast(&history, h)?"| F["Forecast (lazy iterator)"]
//! ```
//!
//! ## Example
//!
//! ```
//! use delphi_ar::ArSpec;
//!
//! let data = [1.0, 2.0, 2.0, 5.0, 8.0, 14.0];
//! let fit = ArSpec::new(2).fit(&data)?;
//! let ahead: Vec<f64> = fit.forecast(&data, 3)?.collect();
//! assert_eq!(ahead.len(), 3);
//! # Ok::<(), delphi_ar::ArError>(())
//! ```
//!
//! ## Mathematical Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | phi | [`ArFit::phi()`] | AR coefficients: weights on past observations |
//! | sigma2 | [`ArFit::sigma2()`] | Noise variance, unbiased for `n - 2p` degrees of freedom |
//! | p | [`ArSpec::p()`] | Model order: number of lagged values fed to the recurrence |

mod config;
mod design;
mod error;
mod fit;
mod forecast;
mod spec;

pub(crate) mod solver;

pub use config::FitConfig;
pub use error::ArError;
pub use fit::ArFit;
pub use forecast::Forecast;
pub use spec::ArSpec;
