//! Pipeline module - the ordered cleaning stages, feature engineering,
//! and the fitted preprocessing transform

pub mod binning;
pub mod coerce;
pub mod impute;
pub mod label;
pub mod loader;
pub mod normalize;
pub mod preprocessor;
pub mod schema;
pub mod stages;
pub mod stats;
pub mod winsorize;

pub use binning::*;
pub use coerce::*;
pub use impute::*;
pub use label::*;
pub use loader::*;
pub use normalize::*;
pub use preprocessor::*;
pub use schema::*;
pub use stages::*;
pub use stats::*;
pub use winsorize::*;
