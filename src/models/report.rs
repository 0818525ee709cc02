use super::{AgroZone, ClimateClass, FertilityLevel, Month, RiskLevel, VarietyRecord};
use crate::error::{AdvisoryError, Result};
use serde::{Deserialize, Serialize};

/// Validated inputs for one advisory run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryRequest {
    pub state: String,
    pub planting_month: Month,
    pub soil_fertility: FertilityLevel,
}

impl AdvisoryRequest {
    /// Parse raw CLI strings into a typed request.
    ///
    /// State existence is checked later against the reference data; month
    /// and fertility names fail here.
    pub fn parse(state: &str, month: &str, soil_fertility: &str) -> Result<Self> {
        let planting_month = Month::from_name(month)
            .ok_or_else(|| AdvisoryError::InvalidMonth(month.to_string()))?;
        let soil_fertility = FertilityLevel::from_str(soil_fertility).ok_or_else(|| {
            AdvisoryError::Validation(format!(
                "soil fertility level '{}' is not one of Low, Medium, High",
                soil_fertility
            ))
        })?;
        Ok(Self {
            state: state.trim().to_string(),
            planting_month,
            soil_fertility,
        })
    }
}

/// Derived risk levels for one request. Built once, read-only afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub climate: ClimateClass,
    pub drought: RiskLevel,
    pub soil_fertility: RiskLevel,
    pub pest_disease: RiskLevel,
}

/// Nutrient application rates in kg/ha plus agronomic notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilizerPlan {
    pub nitrogen_kg_ha: u32,
    pub p2o5_kg_ha: u32,
    pub k2o_kg_ha: u32,
    pub notes: String,
}

/// Irrigation guidance keyed on drought risk; climate class is carried
/// through for the report narrative only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrigationPlan {
    pub climate: ClimateClass,
    pub drought_risk: RiskLevel,
    pub guidance: String,
}

/// Terminal artifact of the advisory pipeline. Plain structured data;
/// rendering and color coding belong to the console layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub request: AdvisoryRequest,
    pub agro_zone: AgroZone,
    pub risks: RiskProfile,
    pub fertilizer: FertilizerPlan,
    pub irrigation: IrrigationPlan,
    pub pest_guidance: String,
    pub varieties: Vec<VarietyRecord>,
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_request() {
        let request = AdvisoryRequest::parse("Oyo", "June", "Medium").unwrap();
        assert_eq!(request.state, "Oyo");
        assert_eq!(request.planting_month, Month::June);
        assert_eq!(request.soil_fertility, FertilityLevel::Medium);
    }

    #[test]
    fn parse_misspelled_month() {
        let err = AdvisoryRequest::parse("Oyo", "Febuary", "Medium").unwrap_err();
        assert!(matches!(err, AdvisoryError::InvalidMonth(_)));
    }

    #[test]
    fn parse_out_of_domain_fertility() {
        let err = AdvisoryRequest::parse("Oyo", "June", "Very Low").unwrap_err();
        assert!(matches!(err, AdvisoryError::Validation(_)));
    }
}
