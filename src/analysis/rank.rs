use super::aggregate::TotalsMap;
use super::error::AnalyzeError;
use crate::domain::{SellerReport, TopProduct};
use crate::strategy::BonusStrategy;

/// How many products a seller's report lists
const TOP_PRODUCTS_LIMIT: usize = 10;

/// Round to 2 decimal places for monetary report fields
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rank sellers by profit, assign bonuses, and project the final reports
///
/// The sort is stable, so equal-profit sellers keep their first-encounter
/// order from aggregation. Bonuses are computed from the unrounded totals;
/// rounding happens only at projection.
pub(crate) fn rank_and_report(
    totals_by_seller: TotalsMap,
    calculate_bonus: &dyn BonusStrategy,
) -> Result<Vec<SellerReport>, AnalyzeError> {
    let mut ranked: Vec<_> = totals_by_seller.into_iter().collect();
    ranked.sort_by(|(_, a), (_, b)| b.profit.total_cmp(&a.profit));

    let total_sellers = ranked.len();
    let mut reports = Vec::with_capacity(total_sellers);

    for (rank, (seller_id, totals)) in ranked.into_iter().enumerate() {
        let bonus = calculate_bonus.bonus(rank, total_sellers, &totals);
        if !bonus.is_finite() {
            return Err(AnalyzeError::InvalidStrategy("calculate_bonus"));
        }

        let mut products: Vec<_> = totals.products_sold.into_iter().collect();
        products.sort_by(|(_, a), (_, b)| b.cmp(a));
        products.truncate(TOP_PRODUCTS_LIMIT);

        reports.push(SellerReport {
            seller_id,
            name: totals.name,
            revenue: round2(totals.revenue),
            profit: round2(totals.profit),
            bonus: round2(bonus),
            sales_count: totals.sales_count,
            top_products: products
                .into_iter()
                .map(|(sku, quantity)| TopProduct { sku, quantity })
                .collect(),
        });
    }

    Ok(reports)
}
