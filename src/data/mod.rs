use crate::error::{AdvisoryError, Result};
use crate::models::{
    AgroZone, ClimateRecord, FertilityLevel, SoilRecord, StateProfile, VarietyRecord,
};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

const STATE_PROFILES_YAML: &str = include_str!("../../data/state_profiles.yaml");
const CLIMATE_MONTHLY_YAML: &str = include_str!("../../data/climate_monthly.yaml");
const SOIL_FERTILITY_YAML: &str = include_str!("../../data/soil_fertility.yaml");
const MAIZE_VARIETIES_YAML: &str = include_str!("../../data/maize_varieties.yaml");

/// In-memory reference datasets. Loaded once before any advisory runs and
/// treated as read-only afterward.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    states: Vec<StateProfile>,
    climate: Vec<ClimateRecord>,
    soil: Vec<SoilRecord>,
    varieties: Vec<VarietyRecord>,
}

impl ReferenceData {
    /// Load the reference datasets.
    ///
    /// Defaults are embedded in the binary. A YAML file with the matching
    /// name inside `data_dir` (or, failing that, the XDG data directory)
    /// replaces the embedded default for that dataset only.
    pub fn load(data_dir: Option<&Path>) -> Result<Self> {
        let search_dir = data_dir.map(Path::to_path_buf).or_else(Self::default_data_dir);

        let data = Self {
            states: load_dataset(search_dir.as_deref(), "state_profiles.yaml", STATE_PROFILES_YAML)?,
            climate: load_dataset(
                search_dir.as_deref(),
                "climate_monthly.yaml",
                CLIMATE_MONTHLY_YAML,
            )?,
            soil: load_dataset(search_dir.as_deref(), "soil_fertility.yaml", SOIL_FERTILITY_YAML)?,
            varieties: load_dataset(
                search_dir.as_deref(),
                "maize_varieties.yaml",
                MAIZE_VARIETIES_YAML,
            )?,
        };
        data.validate()?;
        Ok(data)
    }

    fn default_data_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("maize-advisor"))
    }

    /// Cross-dataset consistency: every state has one zone, one soil record,
    /// and a full calendar-ordered climate series.
    fn validate(&self) -> Result<()> {
        if self.varieties.is_empty() {
            return Err(AdvisoryError::Data(
                "maize variety catalog is empty".to_string(),
            ));
        }
        for profile in &self.states {
            let climate = self
                .climate
                .iter()
                .find(|c| c.state == profile.state)
                .ok_or_else(|| {
                    AdvisoryError::Data(format!("no climate series for state '{}'", profile.state))
                })?;
            if !climate.is_calendar_complete() {
                return Err(AdvisoryError::Data(format!(
                    "climate series for state '{}' must have 12 entries in calendar order",
                    profile.state
                )));
            }
            if !self.soil.iter().any(|s| s.state == profile.state) {
                return Err(AdvisoryError::Data(format!(
                    "no soil fertility record for state '{}'",
                    profile.state
                )));
            }
        }
        tracing::debug!(
            states = self.states.len(),
            varieties = self.varieties.len(),
            "reference datasets loaded"
        );
        Ok(())
    }

    pub fn zone(&self, state: &str) -> Result<AgroZone> {
        self.states
            .iter()
            .find(|p| p.state == state)
            .map(|p| p.agro_zone)
            .ok_or_else(|| AdvisoryError::NotFound(format!("state '{}'", state)))
    }

    pub fn rainfall_series(&self, state: &str) -> Result<&ClimateRecord> {
        self.climate
            .iter()
            .find(|c| c.state == state)
            .ok_or_else(|| AdvisoryError::NotFound(format!("climate series for state '{}'", state)))
    }

    pub fn soil_fertility(&self, state: &str) -> Result<FertilityLevel> {
        self.soil
            .iter()
            .find(|s| s.state == state)
            .map(|s| s.fertility)
            .ok_or_else(|| AdvisoryError::NotFound(format!("soil record for state '{}'", state)))
    }

    pub fn varieties(&self) -> &[VarietyRecord] {
        &self.varieties
    }

    pub fn state_profiles(&self) -> &[StateProfile] {
        &self.states
    }
}

fn load_dataset<T: DeserializeOwned>(
    dir: Option<&Path>,
    file_name: &str,
    embedded: &str,
) -> Result<Vec<T>> {
    if let Some(dir) = dir {
        let path = dir.join(file_name);
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading dataset override");
            let raw = std::fs::read_to_string(&path)?;
            return serde_yaml::from_str(&raw).map_err(|e| {
                AdvisoryError::Data(format!("failed to parse {}: {}", path.display(), e))
            });
        }
    }
    serde_yaml::from_str(embedded)
        .map_err(|e| AdvisoryError::Data(format!("failed to parse embedded {}: {}", file_name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;

    #[test]
    fn embedded_datasets_load_and_validate() {
        let data = ReferenceData::load(None).unwrap();
        assert!(!data.state_profiles().is_empty());
        assert!(data.varieties().len() >= 80);
    }

    #[test]
    fn every_state_resolves_fully() {
        let data = ReferenceData::load(None).unwrap();
        for profile in data.state_profiles() {
            let state = profile.state.clone();
            data.zone(&state).unwrap();
            data.soil_fertility(&state).unwrap();
            let series = data.rainfall_series(&state).unwrap();
            assert_eq!(series.monthly.len(), 12);
            assert!(series.rainfall_for(Month::January).is_some());
        }
    }

    #[test]
    fn known_fixture_states_present() {
        let data = ReferenceData::load(None).unwrap();
        assert_eq!(data.zone("Oyo").unwrap(), AgroZone::Rainforest);
        assert_eq!(
            data.zone("Kaduna").unwrap(),
            AgroZone::NorthernGuineaSavanna
        );
        assert_eq!(data.zone("Kano").unwrap(), AgroZone::SudanSavanna);
    }

    #[test]
    fn unknown_state_is_not_found() {
        let data = ReferenceData::load(None).unwrap();
        let err = data.zone("Atlantis").unwrap_err();
        assert!(matches!(err, AdvisoryError::NotFound(_)));
    }

    #[test]
    fn variety_catalog_covers_all_zones() {
        let data = ReferenceData::load(None).unwrap();
        for zone in [
            AgroZone::Rainforest,
            AgroZone::SouthernGuineaSavanna,
            AgroZone::NorthernGuineaSavanna,
            AgroZone::SudanSavanna,
        ] {
            assert!(
                data.varieties().iter().any(|v| v.adaptation_zone == zone),
                "no varieties adapted to {}",
                zone
            );
        }
    }
}
