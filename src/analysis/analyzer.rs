use serde_json::Value;
use tracing::debug;

use super::aggregate::aggregate;
use super::error::AnalyzeError;
use super::index::{index_products, index_sellers};
use super::options::AnalyzeOptions;
use super::parallel::aggregate_parallel;
use super::rank::rank_and_report;
use super::validate::validate;
use crate::domain::{SalesData, SellerReport};
use crate::input::sales_data_from_value;

/// Run the full pipeline: validate, index, aggregate, rank, report
///
/// Pure in-memory computation; every invocation owns its accumulator state,
/// so repeated calls with the same inputs yield identical output.
pub fn analyze(
    data: &SalesData,
    options: &AnalyzeOptions,
) -> Result<Vec<SellerReport>, AnalyzeError> {
    validate(data)?;
    let (calculate_revenue, calculate_bonus) = options.require()?;

    let sellers = index_sellers(&data.sellers);
    let products = index_products(&data.products);
    debug!(
        sellers = sellers.len(),
        products = products.len(),
        records = data.purchase_records.len(),
        "Analyzing sales data"
    );

    let totals = aggregate(&data.purchase_records, &sellers, &products, calculate_revenue)?;
    debug!(active_sellers = totals.len(), "Aggregation complete");

    rank_and_report(totals, calculate_bonus)
}

/// Like `analyze`, but runs the aggregation stage over fixed-size record
/// partitions on the rayon pool, merging sharded accumulators afterward
///
/// Integer report fields match `analyze` exactly; monetary f64 fields may
/// differ in the last ulp because shard subtotals are summed.
pub fn analyze_parallel(
    data: &SalesData,
    options: &AnalyzeOptions,
) -> Result<Vec<SellerReport>, AnalyzeError> {
    validate(data)?;
    let (calculate_revenue, calculate_bonus) = options.require()?;

    let sellers = index_sellers(&data.sellers);
    let products = index_products(&data.products);
    debug!(
        sellers = sellers.len(),
        products = products.len(),
        records = data.purchase_records.len(),
        "Analyzing sales data (partitioned)"
    );

    let totals =
        aggregate_parallel(&data.purchase_records, &sellers, &products, calculate_revenue)?;
    debug!(active_sellers = totals.len(), "Aggregation complete");

    rank_and_report(totals, calculate_bonus)
}

/// Decode an untyped JSON value into `SalesData` and analyze it
pub fn analyze_value(
    value: &Value,
    options: &AnalyzeOptions,
) -> Result<Vec<SellerReport>, AnalyzeError> {
    let data = sales_data_from_value(value)?;
    analyze(&data, options)
}
