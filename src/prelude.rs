//! Prelude module for convenient imports
//!
//! Import everything you need with: `use salestat::prelude::*;`

// Domain types
pub use crate::domain::{
    LineItem, Product, PurchaseRecord, SalesData, Seller, SellerReport, SellerTotals, TopProduct,
};

// Input decoding
pub use crate::input::{InputError, sales_data_from_value};

// Strategy types
pub use crate::strategy::{BonusStrategy, RevenueStrategy, SimpleRevenue, TieredBonus};

// Analysis entry points
pub use crate::analysis::{AnalyzeError, AnalyzeOptions, analyze, analyze_parallel, analyze_value};
