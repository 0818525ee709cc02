use serde::{Deserialize, Serialize};

/// Bucket for the summed 3-month rainfall following planting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClimateClass {
    Low,
    Medium,
    High,
}

impl ClimateClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClimateClass::Low => "Low",
            ClimateClass::Medium => "Medium",
            ClimateClass::High => "High",
        }
    }
}

impl std::fmt::Display for ClimateClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived risk level. Ordinal: Low < Medium < High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = crate::error::AdvisoryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(crate::error::AdvisoryError::InvalidRiskLevel(s.to_string())),
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Soil fertility class recorded per state, also the user-declared level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FertilityLevel {
    Low,
    Medium,
    High,
}

impl FertilityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FertilityLevel::Low => "Low",
            FertilityLevel::Medium => "Medium",
            FertilityLevel::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(FertilityLevel::Low),
            "medium" => Some(FertilityLevel::Medium),
            "high" => Some(FertilityLevel::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for FertilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stress tolerance rating of a maize variety.
///
/// Ordinal so the tolerance bar can be checked with `>=` instead of
/// string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tolerance {
    Low,
    Medium,
    High,
}

impl Tolerance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tolerance::Low => "Low",
            Tolerance::Medium => "Medium",
            Tolerance::High => "High",
        }
    }
}

impl std::fmt::Display for Tolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_parses_case_insensitively() {
        assert_eq!("Low".parse::<RiskLevel>().unwrap(), RiskLevel::Low);
        assert_eq!("medium".parse::<RiskLevel>().unwrap(), RiskLevel::Medium);
        assert_eq!(" HIGH ".parse::<RiskLevel>().unwrap(), RiskLevel::High);
    }

    #[test]
    fn out_of_domain_risk_level_is_rejected() {
        use crate::error::AdvisoryError;
        for raw in ["Very Low", "Unknown", ""] {
            let err = raw.parse::<RiskLevel>().unwrap_err();
            assert!(matches!(err, AdvisoryError::InvalidRiskLevel(_)));
        }
    }

    #[test]
    fn fertility_level_from_str_invalid() {
        assert_eq!(FertilityLevel::from_str("Very Low"), None);
        assert_eq!(FertilityLevel::from_str("rich"), None);
    }

    #[test]
    fn tolerance_is_ordinal() {
        assert!(Tolerance::Low < Tolerance::Medium);
        assert!(Tolerance::Medium < Tolerance::High);
        assert!(Tolerance::High >= Tolerance::Medium);
    }

    #[test]
    fn risk_level_is_ordinal() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }
}
