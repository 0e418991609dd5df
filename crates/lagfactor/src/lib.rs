//! # lagfactor
//!
//! Latent factor estimation for high-dimensional stationary time series,
//! using the cumulative-autocovariance method of Lam, Yao and Bathia.
//!
//! This crate provides a unified interface to the lagfactor crates.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Core type definitions
//! - `traits`: Trait abstractions
//! - `math`: Covariance, eigendecomposition and eigenvalue-ratio kernels
//! - `model`: Factor estimation
//!
//! ## Example
//!
//! ```rust,ignore
//! use lagfactor::model::estimate_factors;
//!
//! // series: T x n ndarray, 2 lags, 3 factors
//! let fit = estimate_factors(series.view(), 2, 3)?;
//! let (factors, loadings, common, eigenvalues, icstar) = fit.into_parts();
//! ```

#![doc(
    html_logo_url = "https://raw.githubusercontent.com/factordynamics/lagfactor/main/assets/logo.png",
    html_favicon_url = "https://raw.githubusercontent.com/factordynamics/lagfactor/main/assets/favicon.ico"
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use lagfactor_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use lagfactor_traits as traits;
#[cfg(feature = "math")]
#[doc(inline)]
pub use lagfactor_math as math;
#[cfg(feature = "model")]
#[doc(inline)]
pub use lagfactor_model as model;
