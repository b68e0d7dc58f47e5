use super::error::AnalyzeError;
use crate::domain::SalesData;

/// Reject trivially empty datasets before any work is done
///
/// Reporting over an empty roster, catalog, or receipt list is a caller
/// mistake, not a degenerate-but-valid run.
pub(crate) fn validate(data: &SalesData) -> Result<(), AnalyzeError> {
    if data.sellers.is_empty() {
        return Err(AnalyzeError::EmptyDataset("sellers"));
    }
    if data.products.is_empty() {
        return Err(AnalyzeError::EmptyDataset("products"));
    }
    if data.purchase_records.is_empty() {
        return Err(AnalyzeError::EmptyDataset("purchase_records"));
    }
    Ok(())
}
