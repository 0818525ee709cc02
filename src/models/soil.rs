use super::FertilityLevel;
use serde::{Deserialize, Serialize};

/// Authoritative soil fertility class recorded for a state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilRecord {
    pub state: String,
    pub fertility: FertilityLevel,
}
