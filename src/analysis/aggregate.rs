use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use super::error::AnalyzeError;
use crate::domain::{Product, PurchaseRecord, Seller, SellerTotals};
use crate::strategy::RevenueStrategy;

/// Accumulators keyed by seller id, in first-encounter order
///
/// Insertion order matters: the profit sort is stable, so equal-profit
/// sellers keep this order in the final ranking.
pub(crate) type TotalsMap = IndexMap<String, SellerTotals>;

/// Fold a run of purchase records into per-seller totals
///
/// Receipts credit `revenue` and `sales_count` at the receipt level; line
/// items contribute profit and unit counts. A line item whose SKU is not in
/// the catalog is skipped silently (catalog drift must not abort a run),
/// while its receipt's totals still count.
pub(crate) fn aggregate(
    records: &[PurchaseRecord],
    sellers: &HashMap<&str, &Seller>,
    products: &HashMap<&str, &Product>,
    calculate_revenue: &dyn RevenueStrategy,
) -> Result<TotalsMap, AnalyzeError> {
    let mut totals_by_seller = TotalsMap::new();

    for record in records {
        let totals = totals_by_seller
            .entry(record.seller_id.clone())
            .or_insert_with(|| {
                let name = sellers.get(record.seller_id.as_str()).map_or_else(
                    || {
                        debug!(seller_id = %record.seller_id, "Seller id not in roster");
                        String::new()
                    },
                    |seller| seller.full_name(),
                );
                SellerTotals::new(name)
            });

        totals.record_receipt(record.total_amount);

        for item in &record.items {
            let Some(product) = products.get(item.sku.as_str()) else {
                debug!(
                    sku = %item.sku,
                    receipt_id = %record.receipt_id,
                    "Unknown SKU, skipping line item"
                );
                continue;
            };

            let revenue = calculate_revenue.item_revenue(item, product);
            if !revenue.is_finite() {
                return Err(AnalyzeError::InvalidStrategy("calculate_revenue"));
            }

            let cost = product.purchase_price * f64::from(item.quantity);
            totals.record_item(&item.sku, item.quantity, revenue - cost);
        }
    }

    Ok(totals_by_seller)
}
