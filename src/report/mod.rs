//! Report module - summarizing prep run results

pub mod summary;

pub use summary::*;
