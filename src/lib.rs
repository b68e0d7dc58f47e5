//! Per-seller sales performance analytics
//!
//! A pure in-memory pipeline: purchase records are joined against a product
//! catalog and a seller roster, folded into per-seller running totals,
//! ranked by profit, and projected into bonus-bearing reports. Revenue and
//! bonus formulas are injected by the caller as strategies.
//!
//! ```
//! use salestat::prelude::*;
//!
//! let data = SalesData::new(
//!     vec![Product::new("A", 50.0)],
//!     vec![Seller::new("s1", "Ada", "Lovelace")],
//!     vec![PurchaseRecord::new(
//!         "s1",
//!         "r-1",
//!         180.0,
//!         vec![LineItem::new("A", 2, 100.0, 10.0)],
//!     )],
//! );
//!
//! let reports = analyze(&data, &AnalyzeOptions::builtin()).unwrap();
//! assert_eq!(reports[0].profit, 80.0);
//! assert_eq!(reports[0].bonus, 12.0);
//! ```

pub mod analysis;
pub mod domain;
pub mod input;
pub mod prelude;
pub mod strategy;

pub use analysis::{AnalyzeError, AnalyzeOptions, analyze, analyze_parallel, analyze_value};
