use super::error::AnalyzeError;
use crate::strategy::{BonusStrategy, RevenueStrategy, SimpleRevenue, TieredBonus};

/// Strategy configuration for one pipeline run
///
/// Both strategies are required; `analyze` fails with `MissingOptions` when
/// either slot is unset. `builtin()` wires the canonical policies.
pub struct AnalyzeOptions {
    calculate_revenue: Option<Box<dyn RevenueStrategy>>,
    calculate_bonus: Option<Box<dyn BonusStrategy>>,
}

impl AnalyzeOptions {
    /// Empty options with no strategies configured; same as `default()`
    pub fn new() -> Self {
        Self {
            calculate_revenue: None,
            calculate_bonus: None,
        }
    }

    /// Options wired with the built-in revenue and bonus policies
    pub fn builtin() -> Self {
        Self::new()
            .with_revenue(SimpleRevenue)
            .with_bonus(TieredBonus)
    }

    pub fn with_revenue(mut self, strategy: impl RevenueStrategy + 'static) -> Self {
        self.calculate_revenue = Some(Box::new(strategy));
        self
    }

    pub fn with_bonus(mut self, strategy: impl BonusStrategy + 'static) -> Self {
        self.calculate_bonus = Some(Box::new(strategy));
        self
    }

    /// Resolve both strategies or fail with `MissingOptions`
    pub(crate) fn require(
        &self,
    ) -> Result<(&dyn RevenueStrategy, &dyn BonusStrategy), AnalyzeError> {
        let revenue = self
            .calculate_revenue
            .as_deref()
            .ok_or(AnalyzeError::MissingOptions("calculate_revenue"))?;
        let bonus = self
            .calculate_bonus
            .as_deref()
            .ok_or(AnalyzeError::MissingOptions("calculate_bonus"))?;
        Ok((revenue, bonus))
    }
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self::new()
    }
}
