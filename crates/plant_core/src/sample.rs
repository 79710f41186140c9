//! Built-in plants available without any network access.

use crate::plant::{ImageRef, Plant};
use crate::result::{CareInstructions, DiseaseInfo};

struct SampleEntry {
    id: &'static str,
    common_name: &'static str,
    scientific_name: &'static str,
    description: &'static str,
    image: &'static str,
    watering: &'static str,
    sunlight: &'static str,
    soil: &'static str,
    diseases: [&'static str; 3],
}

const SAMPLES: [SampleEntry; 5] = [
    SampleEntry {
        id: "1",
        common_name: "Rose",
        scientific_name: "Rosa",
        description: "A woody perennial flowering plant known for its beauty and fragrance.",
        image: "assets/rose.png",
        watering: "Water deeply but infrequently, provide full sun, prune regularly.",
        sunlight: "Full sun",
        soil: "Well-draining, rich soil with pH between 6.0 and 6.5.",
        diseases: ["Black spot", "Powdery mildew", "Rust"],
    },
    SampleEntry {
        id: "2",
        common_name: "Sunflower",
        scientific_name: "Helianthus annuus",
        description: "Tall annual plant with large yellow flower heads that track the sun.",
        image: "assets/sunflower.png",
        watering: "Regular watering, especially during dry periods.",
        sunlight: "Full sun, at least 6-8 hours of direct sunlight daily.",
        soil: "Well-draining, nutrient-rich soil.",
        diseases: ["Downy mildew", "Rust", "Stem rot"],
    },
    SampleEntry {
        id: "3",
        common_name: "Lavender",
        scientific_name: "Lavandula",
        description: "Aromatic herb known for its purple flowers and calming fragrance.",
        image: "assets/lavender.png",
        watering: "Plant in full sun, well-draining soil, prune after flowering.",
        sunlight: "Full sun",
        soil: "Well-draining, nutrient-rich soil.",
        diseases: ["Root rot", "Leaf spot", "Botrytis blight"],
    },
    SampleEntry {
        id: "4",
        common_name: "Monstera",
        scientific_name: "Monstera deliciosa",
        description: "Tropical plant with large, split leaves, also known as Swiss cheese plant.",
        image: "assets/monstera.png",
        watering: "Bright indirect light, moderate water, high humidity.",
        sunlight: "Bright indirect light",
        soil: "Moderately moist, well-draining soil.",
        diseases: ["Root rot", "Leaf spot", "Spider mites"],
    },
    SampleEntry {
        id: "5",
        common_name: "Orchid",
        scientific_name: "Phalaenopsis",
        description: "Elegant flowering plant with long-lasting blooms in various colors.",
        image: "assets/orchid.png",
        watering: "Indirect light, weekly watering, high humidity, specialized potting mix.",
        sunlight: "Indirect light",
        soil: "Well-draining, nutrient-rich soil.",
        diseases: ["Crown rot", "Root rot", "Bacterial brown spot"],
    },
];

impl SampleEntry {
    fn to_plant(&self) -> Plant {
        Plant {
            id: self.id.to_string(),
            scientific_name: self.scientific_name.to_string(),
            common_name: self.common_name.to_string(),
            image: ImageRef::new(self.image),
            description: self.description.to_string(),
            care_instructions: CareInstructions {
                watering: self.watering.to_string(),
                sunlight: self.sunlight.to_string(),
                soil: self.soil.to_string(),
            },
            diseases: self.diseases.iter().copied().map(DiseaseInfo::named).collect(),
        }
    }
}

pub fn sample_catalog() -> Vec<Plant> {
    SAMPLES.iter().map(SampleEntry::to_plant).collect()
}

/// First sample whose common or scientific name contains `query`,
/// ignoring case and surrounding whitespace.
pub fn find_sample_plant(query: &str) -> Option<Plant> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    SAMPLES
        .iter()
        .find(|entry| {
            entry.common_name.to_lowercase().contains(&needle)
                || entry.scientific_name.to_lowercase().contains(&needle)
        })
        .map(SampleEntry::to_plant)
}
