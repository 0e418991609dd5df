#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/lagfactor/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod covariance;
pub use covariance::{cumulative_covariance, lagged_cross_covariance};

mod eigen;
pub use eigen::{EigenConfig, SymmetricEigen, symmetric_eigen};

mod ratio;
pub use ratio::{FactorCountEstimate, eigenvalue_ratio};

mod error;
pub use error::MathError;
