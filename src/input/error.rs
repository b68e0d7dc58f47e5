use thiserror::Error;

/// Errors raised while decoding untyped input into `SalesData`
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid input format: {0}")]
    InvalidInputFormat(String),
}
