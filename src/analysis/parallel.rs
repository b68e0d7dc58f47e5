use std::collections::HashMap;

use rayon::prelude::*;

use super::aggregate::{TotalsMap, aggregate};
use super::error::AnalyzeError;
use crate::domain::{Product, PurchaseRecord, Seller};
use crate::strategy::RevenueStrategy;

/// Records per shard; fixed so the shard layout (and therefore the merge
/// order and float summation order) does not depend on thread count.
const SHARD_SIZE: usize = 1024;

/// Aggregate purchase records across fixed-size partitions in parallel
///
/// Each shard owns its accumulator map; shards are merged afterward in
/// partition order, so concurrent increments to the same seller never
/// happen and the result is deterministic for a given input. Integer fields
/// match the sequential path exactly; f64 sums may differ in the last ulp
/// because shard subtotals are added instead of individual records.
pub(crate) fn aggregate_parallel(
    records: &[PurchaseRecord],
    sellers: &HashMap<&str, &Seller>,
    products: &HashMap<&str, &Product>,
    calculate_revenue: &dyn RevenueStrategy,
) -> Result<TotalsMap, AnalyzeError> {
    let shards: Vec<TotalsMap> = records
        .par_chunks(SHARD_SIZE)
        .map(|chunk| aggregate(chunk, sellers, products, calculate_revenue))
        .collect::<Result<_, _>>()?;

    let mut merged = TotalsMap::new();
    for shard in shards {
        for (seller_id, totals) in shard {
            match merged.entry(seller_id) {
                indexmap::map::Entry::Occupied(mut entry) => entry.get_mut().merge(&totals),
                indexmap::map::Entry::Vacant(entry) => {
                    entry.insert(totals);
                }
            }
        }
    }

    Ok(merged)
}
