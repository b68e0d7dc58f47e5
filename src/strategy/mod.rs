//! Pluggable business-formula seams
//!
//! Revenue and bonus math is injected by the caller rather than hardcoded,
//! so the aggregation and ranking stages stay agnostic to formula changes.
//! Plain closures with the matching signature implement the traits directly.

pub mod builtin;

pub use builtin::{SimpleRevenue, TieredBonus};

use crate::domain::{LineItem, Product, SellerTotals};

/// Computes the revenue of one matched line item
pub trait RevenueStrategy: Send + Sync {
    /// Revenue for `item` sold against its catalog entry `product`
    ///
    /// Must return a finite number; a non-finite result aborts the run.
    fn item_revenue(&self, item: &LineItem, product: &Product) -> f64;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem, &Product) -> f64 + Send + Sync,
{
    fn item_revenue(&self, item: &LineItem, product: &Product) -> f64 {
        self(item, product)
    }
}

/// Computes a seller's bonus from their position in the profit ranking
pub trait BonusStrategy: Send + Sync {
    /// Bonus for the seller at zero-based `rank` out of `total_sellers`
    ///
    /// Must return a finite number; a non-finite result aborts the run.
    fn bonus(&self, rank: usize, total_sellers: usize, totals: &SellerTotals) -> f64;
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerTotals) -> f64 + Send + Sync,
{
    fn bonus(&self, rank: usize, total_sellers: usize, totals: &SellerTotals) -> f64 {
        self(rank, total_sellers, totals)
    }
}
