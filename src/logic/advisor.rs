use super::{climate, fertilizer, irrigation, risk, varieties};
use crate::data::ReferenceData;
use crate::error::Result;
use crate::models::{AdvisoryReport, AdvisoryRequest};

/// Runs the advisory pipeline against loaded reference data. Each request
/// is processed to completion independently; nothing is shared or retried.
pub struct Advisor<'a> {
    data: &'a ReferenceData,
}

impl<'a> Advisor<'a> {
    pub fn new(data: &'a ReferenceData) -> Self {
        Self { data }
    }

    /// Validate the request, derive the risk profile, and assemble the
    /// report. Fixed sequence: validation, climate classification, risk
    /// assessment, then the fertilizer/irrigation/variety advisors.
    pub fn build_report(&self, request: &AdvisoryRequest) -> Result<AdvisoryReport> {
        // Validation: every lookup fails fast with NotFound on an unknown
        // state. Month and fertility level are already typed.
        let agro_zone = self.data.zone(&request.state)?;
        let series = self.data.rainfall_series(&request.state)?;
        let recorded = self.data.soil_fertility(&request.state)?;

        // Reconcile the declared fertility level against the state record:
        // warn and proceed with the declared value.
        let mut warnings = Vec::new();
        if recorded != request.soil_fertility {
            tracing::warn!(
                state = %request.state,
                declared = %request.soil_fertility,
                recorded = %recorded,
                "declared soil fertility differs from state record"
            );
            warnings.push(format!(
                "Declared soil fertility '{}' differs from the recorded level '{}' for {}; \
                 proceeding with the declared value.",
                request.soil_fertility, recorded, request.state
            ));
        }

        let climate_class = climate::classify_climate(request.planting_month, series);
        let risks = risk::assess(climate_class, request.soil_fertility);

        let fertilizer = fertilizer::recommend_fertilizer(risks.soil_fertility);
        let irrigation = irrigation::recommend_irrigation(climate_class, risks.drought);
        let pest_guidance = risk::pest_disease_guidance(risks.pest_disease).to_string();
        let bar = varieties::tolerance_bar(&risks);
        let picks = varieties::recommend_varieties(agro_zone, bar, self.data.varieties());

        tracing::debug!(
            state = %request.state,
            zone = %agro_zone,
            varieties = picks.len(),
            "advisory report assembled"
        );

        Ok(AdvisoryReport {
            request: request.clone(),
            agro_zone,
            risks,
            fertilizer,
            irrigation,
            pest_guidance,
            varieties: picks,
            warnings,
        })
    }
}
