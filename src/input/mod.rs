//! Untyped input decoding
//!
//! Callers holding already-parsed JSON (the common shape this data arrives
//! in) can decode it here; the typed `SalesData` API never produces format
//! errors because the type system discharges them.

pub mod error;

pub use error::InputError;

use serde_json::Value;

use crate::domain::SalesData;

const REQUIRED_FIELDS: [&str; 3] = ["products", "sellers", "purchase_records"];

/// Decode a JSON value into `SalesData`
///
/// Fails when the value is not an object, a required field is missing or not
/// an array, or an element does not match the expected record shape.
pub fn sales_data_from_value(value: &Value) -> Result<SalesData, InputError> {
    let object = value
        .as_object()
        .ok_or_else(|| InputError::InvalidInputFormat("sales data is not an object".to_string()))?;

    for field in REQUIRED_FIELDS {
        match object.get(field) {
            None => {
                return Err(InputError::InvalidInputFormat(format!(
                    "missing field: {field}"
                )));
            }
            Some(v) if !v.is_array() => {
                return Err(InputError::InvalidInputFormat(format!(
                    "{field} is not an array"
                )));
            }
            Some(_) => {}
        }
    }

    serde_json::from_value(value.clone())
        .map_err(|e| InputError::InvalidInputFormat(e.to_string()))
}
