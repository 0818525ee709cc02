use crate::models::{AdvisoryReport, AgroZone, RiskLevel, StateProfile, VarietyRecord};
use crossterm::style::Stylize;

/// Color-coded risk label for the console.
fn risk_label(risk: RiskLevel) -> String {
    match risk {
        RiskLevel::High => risk.as_str().red().to_string(),
        RiskLevel::Medium => risk.as_str().yellow().to_string(),
        RiskLevel::Low => risk.as_str().green().to_string(),
    }
}

fn heading(title: &str) {
    println!();
    println!("{}", title);
    println!("{}", "-".repeat(title.len()));
}

fn row(label: &str, value: impl std::fmt::Display) {
    println!("  {:<24} {}", label, value);
}

pub fn print_report(report: &AdvisoryReport) {
    println!("{}", "=".repeat(50));
    println!("INTEGRATED MAIZE ADVISORY REPORT");
    println!("{}", "=".repeat(50));

    row("State", &report.request.state);
    row("Agro-ecological zone", report.agro_zone);
    row("Planting month", report.request.planting_month);
    row("Soil fertility", report.request.soil_fertility);
    row("Climate class", report.risks.climate);

    for warning in &report.warnings {
        println!();
        println!("  {} {}", "WARNING:".yellow(), warning);
    }

    heading("RISK INDICATORS");
    row("Drought risk", risk_label(report.risks.drought));
    row("Soil fertility risk", risk_label(report.risks.soil_fertility));
    row("Pest/Disease risk", risk_label(report.risks.pest_disease));

    heading("FERTILIZER RECOMMENDATION (kg/ha)");
    row("N", report.fertilizer.nitrogen_kg_ha);
    row("P2O5", report.fertilizer.p2o5_kg_ha);
    row("K2O", report.fertilizer.k2o_kg_ha);
    println!("  Notes: {}", report.fertilizer.notes);

    heading("IRRIGATION RECOMMENDATION");
    println!("  {}", report.irrigation.guidance);

    heading("PEST/DISEASE RECOMMENDATION");
    println!("  {}", report.pest_guidance);

    heading("RECOMMENDED MAIZE VARIETIES");
    if report.varieties.is_empty() {
        println!("  No suitable varieties found for the selected conditions.");
    } else {
        for (i, variety) in report.varieties.iter().enumerate() {
            println!();
            println!("  Variety {}", i + 1);
            row("Name", &variety.name);
            row("Maturity group", variety.maturity_group);
            row("Drought tolerance", variety.drought_tolerance);
            row("Low-N tolerance", variety.low_n_tolerance);
            row("Yield potential (t/ha)", variety.yield_potential_t_ha);
            row("Grain type", variety.grain_type);
        }
    }
    println!();
}

pub fn print_states(profiles: &[StateProfile]) {
    println!("{:<16} {}", "State", "Agro-ecological zone");
    println!("{}", "-".repeat(44));
    for profile in profiles {
        println!("{:<16} {}", profile.state, profile.agro_zone);
    }
}

pub fn print_varieties(catalog: &[VarietyRecord], zone: Option<AgroZone>) {
    println!(
        "{:<20} {:<26} {:<12} {:<10} {:<8} {}",
        "Variety", "Zone", "Maturity", "Drought", "Low-N", "Yield (t/ha)"
    );
    println!("{}", "-".repeat(92));
    for variety in catalog {
        if let Some(zone) = zone {
            if variety.adaptation_zone != zone {
                continue;
            }
        }
        println!(
            "{:<20} {:<26} {:<12} {:<10} {:<8} {:.1}",
            variety.name,
            variety.adaptation_zone.as_str(),
            variety.maturity_group.as_str(),
            variety.drought_tolerance.as_str(),
            variety.low_n_tolerance.as_str(),
            variety.yield_potential_t_ha
        );
    }
}
