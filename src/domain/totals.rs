use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Running totals for one seller, accumulated over one pipeline run
///
/// Created lazily on the seller's first receipt and discarded once projected
/// into a `SellerReport`. Bonus strategies receive a reference to the final
/// totals, which is why this type is public.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SellerTotals {
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    /// Quantity sold per SKU, in first-sold order
    pub products_sold: IndexMap<String, u64>,
    pub name: String,
}

impl SellerTotals {
    /// Fresh totals for a seller with the given display name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Record one receipt: counts the transaction and credits its total
    pub fn record_receipt(&mut self, total_amount: f64) {
        self.sales_count += 1;
        self.revenue += total_amount;
    }

    /// Record one matched line item's contribution
    pub fn record_item(&mut self, sku: &str, quantity: u32, profit: f64) {
        self.profit += profit;
        *self.products_sold.entry(sku.to_string()).or_insert(0) += u64::from(quantity);
    }

    /// Fold another totals for the same seller into this one
    ///
    /// Used when merging sharded accumulators after partitioned aggregation.
    pub fn merge(&mut self, other: &SellerTotals) {
        self.revenue += other.revenue;
        self.profit += other.profit;
        self.sales_count += other.sales_count;
        for (sku, quantity) in &other.products_sold {
            *self.products_sold.entry(sku.clone()).or_insert(0) += quantity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_receipt_counts_and_credits() {
        let mut totals = SellerTotals::new("Ada Lovelace");

        totals.record_receipt(180.0);
        totals.record_receipt(20.0);

        assert_eq!(totals.sales_count, 2);
        assert_eq!(totals.revenue, 200.0);
        assert_eq!(totals.profit, 0.0);
    }

    #[test]
    fn record_item_accumulates_profit_and_quantities() {
        let mut totals = SellerTotals::new("Ada Lovelace");

        totals.record_item("A", 2, 80.0);
        totals.record_item("B", 1, 5.0);
        totals.record_item("A", 3, 120.0);

        assert_eq!(totals.profit, 205.0);
        assert_eq!(totals.products_sold["A"], 5);
        assert_eq!(totals.products_sold["B"], 1);
    }

    #[test]
    fn products_sold_preserves_first_sold_order() {
        let mut totals = SellerTotals::new("");

        totals.record_item("C", 1, 0.0);
        totals.record_item("A", 1, 0.0);
        totals.record_item("B", 1, 0.0);
        totals.record_item("A", 1, 0.0);

        let skus: Vec<&str> = totals.products_sold.keys().map(String::as_str).collect();
        assert_eq!(skus, ["C", "A", "B"]);
    }

    #[test]
    fn merge_folds_all_fields() {
        let mut left = SellerTotals::new("Ada Lovelace");
        left.record_receipt(100.0);
        left.record_item("A", 2, 30.0);

        let mut right = SellerTotals::new("Ada Lovelace");
        right.record_receipt(50.0);
        right.record_item("A", 1, 10.0);
        right.record_item("B", 4, 20.0);

        left.merge(&right);

        assert_eq!(left.revenue, 150.0);
        assert_eq!(left.profit, 60.0);
        assert_eq!(left.sales_count, 2);
        assert_eq!(left.products_sold["A"], 3);
        assert_eq!(left.products_sold["B"], 4);
    }
}
