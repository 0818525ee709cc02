use crate::models::{ClimateClass, IrrigationPlan, RiskLevel};

/// Irrigation guidance keyed on drought risk. The climate class rides along
/// so the report narrative can cite it.
pub fn recommend_irrigation(climate: ClimateClass, drought_risk: RiskLevel) -> IrrigationPlan {
    let guidance = match drought_risk {
        RiskLevel::High => {
            "Frequent supplemental irrigation required; prioritize the first six weeks \
             after planting."
        }
        RiskLevel::Medium => "Moderate irrigation recommended during dry spells.",
        RiskLevel::Low => "Irrigation usually not required; rainfall should be sufficient.",
    };
    IrrigationPlan {
        climate,
        drought_risk,
        guidance: guidance.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_drought_risk_means_frequent_irrigation() {
        let plan = recommend_irrigation(ClimateClass::Low, RiskLevel::High);
        assert!(plan.guidance.contains("Frequent"));
        assert_eq!(plan.drought_risk, RiskLevel::High);
    }

    #[test]
    fn low_drought_risk_means_rainfed() {
        let plan = recommend_irrigation(ClimateClass::High, RiskLevel::Low);
        assert!(plan.guidance.contains("not required"));
    }

    #[test]
    fn climate_class_is_carried_for_narrative() {
        let plan = recommend_irrigation(ClimateClass::Medium, RiskLevel::Medium);
        assert_eq!(plan.climate, ClimateClass::Medium);
        assert!(plan.guidance.contains("Moderate"));
    }
}
