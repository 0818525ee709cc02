use crate::models::{AgroZone, RiskLevel, RiskProfile, Tolerance, VarietyRecord};

const MAX_RECOMMENDATIONS: usize = 3;

/// Minimum stress tolerance a variety must meet. Elevated drought or
/// pest/disease risk raises the bar to Medium; otherwise any rating
/// qualifies.
pub fn tolerance_bar(risks: &RiskProfile) -> Tolerance {
    if risks.drought == RiskLevel::High || risks.pest_disease == RiskLevel::High {
        Tolerance::Medium
    } else {
        Tolerance::Low
    }
}

/// Filter the catalog to zone-adapted varieties meeting the tolerance bar
/// on both the drought and low-nitrogen axes, then rank by yield potential
/// descending. Ties keep catalog order. At most three entries; an empty
/// result is a valid outcome, not an error.
pub fn recommend_varieties(
    zone: AgroZone,
    bar: Tolerance,
    catalog: &[VarietyRecord],
) -> Vec<VarietyRecord> {
    let mut matches: Vec<VarietyRecord> = catalog
        .iter()
        .filter(|v| {
            v.adaptation_zone == zone && v.drought_tolerance >= bar && v.low_n_tolerance >= bar
        })
        .cloned()
        .collect();

    matches.sort_by(|a, b| {
        b.yield_potential_t_ha
            .partial_cmp(&a.yield_potential_t_ha)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(MAX_RECOMMENDATIONS);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClimateClass, GrainType, MaturityGroup};

    fn variety(
        name: &str,
        zone: AgroZone,
        drought: Tolerance,
        low_n: Tolerance,
        yield_t_ha: f64,
    ) -> VarietyRecord {
        VarietyRecord {
            name: name.to_string(),
            maturity_group: MaturityGroup::Early,
            adaptation_zone: zone,
            drought_tolerance: drought,
            low_n_tolerance: low_n,
            yield_potential_t_ha: yield_t_ha,
            grain_type: GrainType::White,
        }
    }

    fn catalog() -> Vec<VarietyRecord> {
        vec![
            variety(
                "V1",
                AgroZone::NorthernGuineaSavanna,
                Tolerance::High,
                Tolerance::High,
                6.0,
            ),
            variety(
                "V2",
                AgroZone::NorthernGuineaSavanna,
                Tolerance::Medium,
                Tolerance::Medium,
                5.0,
            ),
            variety(
                "V3",
                AgroZone::NorthernGuineaSavanna,
                Tolerance::High,
                Tolerance::High,
                7.0,
            ),
            variety(
                "V4",
                AgroZone::NorthernGuineaSavanna,
                Tolerance::Low,
                Tolerance::High,
                8.0,
            ),
            variety(
                "V5",
                AgroZone::Rainforest,
                Tolerance::High,
                Tolerance::High,
                9.0,
            ),
        ]
    }

    fn risks(drought: RiskLevel, pest: RiskLevel) -> RiskProfile {
        RiskProfile {
            climate: ClimateClass::Medium,
            drought,
            soil_fertility: RiskLevel::Medium,
            pest_disease: pest,
        }
    }

    #[test]
    fn bar_raised_by_high_drought_risk() {
        assert_eq!(
            tolerance_bar(&risks(RiskLevel::High, RiskLevel::High)),
            Tolerance::Medium
        );
    }

    #[test]
    fn bar_raised_by_high_pest_risk_alone() {
        assert_eq!(
            tolerance_bar(&risks(RiskLevel::Low, RiskLevel::High)),
            Tolerance::Medium
        );
    }

    #[test]
    fn bar_stays_low_without_elevated_risk() {
        assert_eq!(
            tolerance_bar(&risks(RiskLevel::Medium, RiskLevel::Medium)),
            Tolerance::Low
        );
    }

    #[test]
    fn ranks_by_yield_descending_and_truncates() {
        let picks =
            recommend_varieties(AgroZone::NorthernGuineaSavanna, Tolerance::Low, &catalog());
        assert_eq!(picks.len(), 3);
        assert_eq!(picks[0].name, "V4");
        assert_eq!(picks[1].name, "V3");
        assert_eq!(picks[2].name, "V1");
        assert!(picks
            .windows(2)
            .all(|w| w[0].yield_potential_t_ha >= w[1].yield_potential_t_ha));
    }

    #[test]
    fn tolerance_bar_filters_on_both_axes() {
        let picks = recommend_varieties(
            AgroZone::NorthernGuineaSavanna,
            Tolerance::Medium,
            &catalog(),
        );
        // V4 fails the drought axis despite high low-N tolerance.
        assert!(picks.iter().all(|v| v.name != "V4"));
        assert_eq!(picks[0].name, "V3");
    }

    #[test]
    fn no_zone_leakage() {
        let picks =
            recommend_varieties(AgroZone::NorthernGuineaSavanna, Tolerance::Low, &catalog());
        assert!(picks
            .iter()
            .all(|v| v.adaptation_zone == AgroZone::NorthernGuineaSavanna));
    }

    #[test]
    fn empty_result_is_ok() {
        let picks =
            recommend_varieties(AgroZone::SudanSavanna, Tolerance::Low, &catalog());
        assert!(picks.is_empty());
    }

    #[test]
    fn stable_order_on_yield_ties() {
        let tied = vec![
            variety("A", AgroZone::Rainforest, Tolerance::High, Tolerance::High, 6.0),
            variety("B", AgroZone::Rainforest, Tolerance::High, Tolerance::High, 6.0),
            variety("C", AgroZone::Rainforest, Tolerance::High, Tolerance::High, 6.0),
        ];
        let picks = recommend_varieties(AgroZone::Rainforest, Tolerance::Low, &tied);
        let names: Vec<&str> = picks.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }
}
