#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/lagfactor/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod cumulative;
pub use cumulative::{
    CumulativeCovarianceEstimator, EstimatorConfig, FactorSelection, estimate_factors,
};

mod fit;
pub use fit::FactorModelFit;

mod error;
pub use error::ModelError;

/// Re-export commonly used types.
pub mod prelude {
    pub use lagfactor_traits::FactorEstimator;

    pub use super::{
        CumulativeCovarianceEstimator, EstimatorConfig, FactorModelFit, FactorSelection,
        ModelError, estimate_factors,
    };
}
