use plant_core::{
    find_sample_plant, normalize, sample_catalog, DiseaseInfo, ImageRef, Plant,
    DESCRIPTION_UNAVAILABLE,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn sample_lookup_matches_common_and_scientific_names() {
    assert_eq!(find_sample_plant("  ROSE ").map(|p| p.id), Some("1".to_string()));
    assert_eq!(find_sample_plant("helianthus").map(|p| p.id), Some("2".to_string()));
    assert_eq!(find_sample_plant("monst").map(|p| p.common_name), Some("Monstera".to_string()));
}

#[test]
fn sample_lookup_misses_return_none() {
    assert_eq!(find_sample_plant("cactus"), None);
    assert_eq!(find_sample_plant("   "), None);
}

#[test]
fn sample_catalog_has_five_named_disease_lists() {
    let catalog = sample_catalog();
    assert_eq!(catalog.len(), 5);
    assert!(catalog
        .iter()
        .all(|plant| plant.diseases.len() == 3 && plant.diseases.iter().all(|d| !d.has_detail())));
}

#[test]
fn named_disease_reads_as_empty_detail() {
    let disease = DiseaseInfo::named("Rust");
    assert_eq!(disease.name(), "Rust");
    assert_eq!(disease.description(), "");
    assert_eq!(disease.treatment(), "");
}

#[test]
fn disease_shapes_keep_their_wire_form() {
    let named = serde_json::to_value(DiseaseInfo::named("Rust")).expect("serialize");
    assert_eq!(named, json!("Rust"));

    let detailed: DiseaseInfo = serde_json::from_value(json!({
        "name": "Black spot",
        "description": "Dark spots",
        "treatment": "Prune",
    }))
    .expect("deserialize");
    assert!(detailed.has_detail());
    assert_eq!(detailed.treatment(), "Prune");
}

#[test]
fn plant_from_identification_carries_result_fields() {
    let result = normalize(
        r#"{"scientificName":"Rosa","commonName":"Rose","confidence":0.9,
            "diseases":[{"name":"Rust"}]}"#,
    )
    .expect("normalize");

    let plant = Plant::from_identification("rosa", &result, ImageRef::new("photos/rose.jpg"));

    assert_eq!(plant.id, "rosa");
    assert_eq!(plant.common_name, "Rose");
    assert_eq!(plant.image.as_str(), "photos/rose.jpg");
    assert_eq!(plant.description, DESCRIPTION_UNAVAILABLE);
    assert_eq!(plant.care_instructions, result.care_instructions);
    assert_eq!(plant.diseases.len(), 1);
    assert_eq!(plant.diseases[0].name(), "Rust");
}

#[test]
fn plant_from_identification_without_diseases_is_empty_list() {
    let result = normalize("{}").expect("normalize");
    let plant = Plant::from_identification("x", &result, ImageRef::default());
    assert!(plant.diseases.is_empty());
}

#[test]
fn history_plant_serializes_diseases_as_names() {
    let plant = find_sample_plant("lavender").expect("lavender");
    let value = serde_json::to_value(&plant).expect("serialize");
    assert_eq!(value["diseases"], json!(["Root rot", "Leaf spot", "Botrytis blight"]));
    assert_eq!(value["image"], json!("assets/lavender.png"));
    assert_eq!(value["commonName"], json!("Lavender"));
}
