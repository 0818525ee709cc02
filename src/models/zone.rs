use serde::{Deserialize, Serialize};

/// Agro-ecological zone a Nigerian state belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgroZone {
    Rainforest,
    SouthernGuineaSavanna,
    NorthernGuineaSavanna,
    SudanSavanna,
}

impl AgroZone {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgroZone::Rainforest => "Rainforest",
            AgroZone::SouthernGuineaSavanna => "Southern Guinea Savanna",
            AgroZone::NorthernGuineaSavanna => "Northern Guinea Savanna",
            AgroZone::SudanSavanna => "Sudan Savanna",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rainforest" => Some(AgroZone::Rainforest),
            "southernguineasavanna" | "southern guinea savanna" => {
                Some(AgroZone::SouthernGuineaSavanna)
            }
            "northernguineasavanna" | "northern guinea savanna" => {
                Some(AgroZone::NorthernGuineaSavanna)
            }
            "sudansavanna" | "sudan savanna" => Some(AgroZone::SudanSavanna),
            _ => None,
        }
    }
}

impl std::fmt::Display for AgroZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// State-to-zone mapping record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateProfile {
    pub state: String,
    pub agro_zone: AgroZone,
}
