use serde::{Deserialize, Serialize};

/// One entry of a seller's top-products list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

/// Final per-seller statistics produced by the pipeline
///
/// Monetary fields are rounded to 2 decimal places; `top_products` holds at
/// most 10 entries ordered by quantity descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub bonus: f64,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
}
