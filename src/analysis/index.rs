use std::collections::HashMap;

use crate::domain::{Product, Seller};

/// Index sellers by id in one pass
///
/// Duplicate keys are last-write-wins; duplicate reference data is a caller
/// data-quality issue, not a validation failure.
pub(crate) fn index_sellers(sellers: &[Seller]) -> HashMap<&str, &Seller> {
    sellers
        .iter()
        .map(|seller| (seller.id.as_str(), seller))
        .collect()
}

/// Index products by SKU in one pass, last-write-wins
pub(crate) fn index_products(products: &[Product]) -> HashMap<&str, &Product> {
    products
        .iter()
        .map(|product| (product.sku.as_str(), product))
        .collect()
}
