use crate::models::{ClimateClass, FertilityLevel, RiskLevel, RiskProfile};

/// Drought risk is the inverse of climate suitability: the drier the
/// 3-month window, the higher the risk.
pub fn drought_risk(climate: ClimateClass) -> RiskLevel {
    match climate {
        ClimateClass::Low => RiskLevel::High,
        ClimateClass::Medium => RiskLevel::Medium,
        ClimateClass::High => RiskLevel::Low,
    }
}

/// Soil fertility risk is the inverse of the fertility class.
pub fn soil_fertility_risk(fertility: FertilityLevel) -> RiskLevel {
    match fertility {
        FertilityLevel::Low => RiskLevel::High,
        FertilityLevel::Medium => RiskLevel::Medium,
        FertilityLevel::High => RiskLevel::Low,
    }
}

/// Elevated stress on either axis escalates pest/disease concern: High if
/// either input is High, Low only when both are Low, Medium otherwise.
pub fn pest_disease_risk(drought: RiskLevel, soil: RiskLevel) -> RiskLevel {
    if drought == RiskLevel::High || soil == RiskLevel::High {
        RiskLevel::High
    } else if drought == RiskLevel::Low && soil == RiskLevel::Low {
        RiskLevel::Low
    } else {
        RiskLevel::Medium
    }
}

pub fn pest_disease_guidance(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::High => "Intensive monitoring and timely pesticide application recommended.",
        RiskLevel::Medium => "Regular monitoring with targeted interventions if needed.",
        RiskLevel::Low => "Routine monitoring sufficient.",
    }
}

/// Assemble the full risk profile for one request.
pub fn assess(climate: ClimateClass, fertility: FertilityLevel) -> RiskProfile {
    let drought = drought_risk(climate);
    let soil = soil_fertility_risk(fertility);
    let pest_disease = pest_disease_risk(drought, soil);
    RiskProfile {
        climate,
        drought,
        soil_fertility: soil,
        pest_disease,
    }
}
