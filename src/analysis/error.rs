use thiserror::Error;

use crate::input::InputError;

/// Errors raised by `analyze` before or during a pipeline run
///
/// All validation failures are raised before aggregation begins; the only
/// mid-run failure is a strategy violating its finite-return contract.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Empty dataset: {0} has no elements")]
    EmptyDataset(&'static str),

    #[error("Missing options: {0} strategy not provided")]
    MissingOptions(&'static str),

    #[error("Invalid strategy: {0} returned a non-finite number")]
    InvalidStrategy(&'static str),

    #[error("Input error: {0}")]
    Input(#[from] InputError),
}
