use crate::models::{ClimateClass, ClimateRecord, Month};

/// Rainfall sum below this over the 3-month window classifies as Low.
const LOW_RAINFALL_MM: f64 = 100.0;
/// Rainfall sum below this (and at least LOW) classifies as Medium.
const HIGH_RAINFALL_MM: f64 = 200.0;

/// Sum rainfall for the planting month and the two months that follow,
/// wrapping at the year boundary. Months missing from the series contribute
/// nothing; the load-time invariant guarantees a full series in practice.
pub fn window_rainfall_mm(planting_month: Month, series: &ClimateRecord) -> f64 {
    let mut month = planting_month;
    let mut sum = 0.0;
    for _ in 0..3 {
        sum += series.rainfall_for(month).unwrap_or(0.0);
        month = month.next();
    }
    sum
}

/// Bucket the 3-month rainfall sum into a climate suitability class.
pub fn classify_climate(planting_month: Month, series: &ClimateRecord) -> ClimateClass {
    let rainfall = window_rainfall_mm(planting_month, series);
    let class = if rainfall < LOW_RAINFALL_MM {
        ClimateClass::Low
    } else if rainfall < HIGH_RAINFALL_MM {
        ClimateClass::Medium
    } else {
        ClimateClass::High
    };
    tracing::debug!(
        month = %planting_month,
        rainfall_mm = rainfall,
        class = %class,
        "climate classified"
    );
    class
}
