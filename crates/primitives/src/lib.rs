#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/lagfactor/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod params;
pub use params::{FactorCount, MaxLag};

mod series;
pub use series::{ObservedSeries, SeriesError, VariableName};

mod spectrum;
pub use spectrum::EigenSpectrum;
