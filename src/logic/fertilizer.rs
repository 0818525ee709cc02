use crate::models::{FertilizerPlan, RiskLevel};

/// Fixed N/P2O5/K2O rates keyed on soil fertility risk. Rates are table
/// constants, never interpolated.
pub fn recommend_fertilizer(soil_risk: RiskLevel) -> FertilizerPlan {
    match soil_risk {
        RiskLevel::High => FertilizerPlan {
            nitrogen_kg_ha: 120,
            p2o5_kg_ha: 60,
            k2o_kg_ha: 60,
            notes: "Basal NPK 15-15-15 at 400 kg/ha + Urea top-dress at 125 kg/ha and \
                    MOP 100 kg/ha recommended. Split N: half at planting, half 4-6 weeks later."
                .to_string(),
        },
        RiskLevel::Medium => FertilizerPlan {
            nitrogen_kg_ha: 60,
            p2o5_kg_ha: 30,
            k2o_kg_ha: 30,
            notes: "NPK 15-15-15 at moderate levels required + split Urea fertilizer application."
                .to_string(),
        },
        RiskLevel::Low => FertilizerPlan {
            nitrogen_kg_ha: 30,
            p2o5_kg_ha: 0,
            k2o_kg_ha: 0,
            notes: "Minimal fertilizer (only urea) input required.".to_string(),
        },
    }
}
