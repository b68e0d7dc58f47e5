//! The analysis pipeline: validate, index, aggregate, rank, report

pub mod analyzer;
pub mod error;
pub mod options;

pub(crate) mod aggregate;
pub(crate) mod index;
pub(crate) mod parallel;
pub(crate) mod rank;
pub(crate) mod validate;

// Re-export commonly used types
pub use analyzer::{analyze, analyze_parallel, analyze_value};
pub use error::AnalyzeError;
pub use options::AnalyzeOptions;
