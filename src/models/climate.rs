use super::Month;
use serde::{Deserialize, Serialize};

/// One month of long-term average climate for a state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyClimate {
    pub month: Month,
    pub avg_rainfall_mm: f64,
    pub avg_temp_c: f64,
}

/// Per-state climate series: exactly 12 entries in calendar order.
///
/// The 12-entry calendar-order invariant is enforced at dataset load time;
/// lookups here assume it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateRecord {
    pub state: String,
    pub monthly: Vec<MonthlyClimate>,
}

impl ClimateRecord {
    pub fn rainfall_for(&self, month: Month) -> Option<f64> {
        self.monthly
            .iter()
            .find(|m| m.month == month)
            .map(|m| m.avg_rainfall_mm)
    }

    /// True when the series covers all 12 months in calendar order.
    pub fn is_calendar_complete(&self) -> bool {
        self.monthly.len() == 12
            && self
                .monthly
                .iter()
                .zip(Month::ALL.iter())
                .all(|(entry, month)| entry.month == *month)
    }
}
