use serde::{Deserialize, Serialize};

/// Catalog entry for a single product, keyed by SKU
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    /// Unit cost paid to the supplier, used for profit calculation
    pub purchase_price: f64,
}

impl Product {
    /// Create a new catalog entry
    pub fn new(sku: impl Into<String>, purchase_price: f64) -> Self {
        Self {
            sku: sku.into(),
            purchase_price,
        }
    }
}
