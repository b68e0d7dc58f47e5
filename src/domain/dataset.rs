use serde::{Deserialize, Serialize};

use super::product::Product;
use super::purchase::PurchaseRecord;
use super::seller::Seller;

/// The complete input to one pipeline run: catalog, roster, and receipts
///
/// Reference data (`products`, `sellers`) is read-only to the pipeline;
/// ownership stays with the caller across invocations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SalesData {
    pub products: Vec<Product>,
    pub sellers: Vec<Seller>,
    pub purchase_records: Vec<PurchaseRecord>,
}

impl SalesData {
    pub fn new(
        products: Vec<Product>,
        sellers: Vec<Seller>,
        purchase_records: Vec<PurchaseRecord>,
    ) -> Self {
        Self {
            products,
            sellers,
            purchase_records,
        }
    }
}
