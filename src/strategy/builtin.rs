use super::{BonusStrategy, RevenueStrategy};
use crate::domain::{LineItem, Product, SellerTotals};

/// Discounted list-price revenue: `sale_price × quantity × (1 − discount/100)`
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenueStrategy for SimpleRevenue {
    fn item_revenue(&self, item: &LineItem, _product: &Product) -> f64 {
        let discount_rate = item.discount / 100.0;
        item.sale_price * f64::from(item.quantity) * (1.0 - discount_rate)
    }
}

/// Rank-tiered bonus ladder over profit
///
/// First matching tier wins: rank 0 gets 15% of profit, ranks 1 and 2 get
/// 10%, the last rank gets 5%, everyone else gets nothing. With a single
/// seller the top tier matches first, so rank 0 of 1 receives 15%.
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredBonus;

const TOP_RATE: f64 = 0.15;
const RUNNER_UP_RATE: f64 = 0.10;
const LAST_RATE: f64 = 0.05;

impl BonusStrategy for TieredBonus {
    fn bonus(&self, rank: usize, total_sellers: usize, totals: &SellerTotals) -> f64 {
        if rank == 0 {
            totals.profit * TOP_RATE
        } else if rank == 1 || rank == 2 {
            totals.profit * RUNNER_UP_RATE
        } else if rank + 1 == total_sellers {
            totals.profit * LAST_RATE
        } else {
            0.0
        }
    }
}
