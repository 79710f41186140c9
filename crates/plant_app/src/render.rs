use std::fmt::Write;

use chrono::{DateTime, Local};
use plant_core::{DiseaseInfo, HistoryItem, Plant, PlantIdentificationResult, PlantSearchResult};

pub fn identification(result: &PlantIdentificationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", result.scientific_name);
    let _ = writeln!(out, "  {}", result.common_name);
    let _ = writeln!(out, "  Confidence: {}", result.confidence_percent());
    care_section(&mut out, &result.care_instructions);
    if let Some(diseases) = result.diseases.as_deref() {
        disease_section(&mut out, diseases);
    }
    out
}

pub fn search_results(results: &[PlantSearchResult]) -> String {
    if results.is_empty() {
        return "No plants found.\n".to_string();
    }
    let mut out = String::new();
    for result in results {
        let _ = writeln!(
            out,
            "[{}] {} ({})",
            result.id, result.common_name, result.scientific_name
        );
        let _ = writeln!(out, "      {}", result.description);
    }
    out
}

pub fn plant(plant: &Plant) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", plant.common_name, plant.scientific_name);
    let _ = writeln!(out, "  {}", plant.description);
    care_section(&mut out, &plant.care_instructions);
    disease_section(&mut out, &plant.diseases);
    out
}

pub fn history(items: &[HistoryItem]) -> String {
    if items.is_empty() {
        return "No search history yet. Your identified plants will appear here.\n".to_string();
    }
    let mut out = String::new();
    for item in items {
        let _ = writeln!(
            out,
            "{}  {} ({})",
            local_time(&item.timestamp),
            item.plant.common_name,
            item.plant.scientific_name
        );
    }
    out
}

fn care_section(out: &mut String, care: &plant_core::CareInstructions) {
    let _ = writeln!(out, "  Care Instructions");
    let _ = writeln!(out, "    Watering: {}", care.watering);
    let _ = writeln!(out, "    Sunlight: {}", care.sunlight);
    let _ = writeln!(out, "    Soil:     {}", care.soil);
}

fn disease_section(out: &mut String, diseases: &[DiseaseInfo]) {
    if diseases.is_empty() {
        return;
    }
    let _ = writeln!(out, "  Potential Diseases");
    for disease in diseases {
        let _ = writeln!(out, "    - {}", disease.name());
        if disease.has_detail() {
            let _ = writeln!(out, "      {}", disease.description());
            let _ = writeln!(out, "      Treatment: {}", disease.treatment());
        }
    }
}

/// Falls back to the raw text for timestamps that do not parse.
fn local_time(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|parsed| {
            parsed
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
        .unwrap_or_else(|_| timestamp.to_string())
}
