use serde::{Deserialize, Serialize};

/// One line of a receipt: a quantity of a single SKU at a sale price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub quantity: u32,
    pub sale_price: f64,
    /// Percentage discount in [0, 100]
    pub discount: f64,
}

impl LineItem {
    pub fn new(sku: impl Into<String>, quantity: u32, sale_price: f64, discount: f64) -> Self {
        Self {
            sku: sku.into(),
            quantity,
            sale_price,
            discount,
        }
    }
}

/// One receipt: a seller's transaction with its line items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    pub receipt_id: String,
    /// Receipt-level total as charged; accumulated as seller revenue
    pub total_amount: f64,
    pub items: Vec<LineItem>,
}

impl PurchaseRecord {
    pub fn new(
        seller_id: impl Into<String>,
        receipt_id: impl Into<String>,
        total_amount: f64,
        items: Vec<LineItem>,
    ) -> Self {
        Self {
            seller_id: seller_id.into(),
            receipt_id: receipt_id.into(),
            total_amount,
            items,
        }
    }
}
