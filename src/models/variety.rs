use super::{AgroZone, Tolerance};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaturityGroup {
    ExtraEarly,
    Early,
    Intermediate,
    Late,
}

impl MaturityGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaturityGroup::ExtraEarly => "Extra Early",
            MaturityGroup::Early => "Early",
            MaturityGroup::Intermediate => "Intermediate",
            MaturityGroup::Late => "Late",
        }
    }
}

impl std::fmt::Display for MaturityGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrainType {
    White,
    Yellow,
}

impl GrainType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrainType::White => "White",
            GrainType::Yellow => "Yellow",
        }
    }
}

impl std::fmt::Display for GrainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of the static maize variety catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarietyRecord {
    pub name: String,
    pub maturity_group: MaturityGroup,
    pub adaptation_zone: AgroZone,
    pub drought_tolerance: Tolerance,
    pub low_n_tolerance: Tolerance,
    pub yield_potential_t_ha: f64,
    pub grain_type: GrainType,
}
