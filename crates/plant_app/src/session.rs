use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use plant_core::{
    find_sample_plant, HistoryStore, ImageRef, Plant, PlantSearchResult, UNKNOWN_NAME,
};
use plant_engine::EngineHandle;
use plant_logging::{plant_info, plant_warn};

use crate::cli::Command;
use crate::render;

/// What the shell should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Quit,
}

/// One user session: the engine plus the history it owns.
pub struct Session {
    engine: EngineHandle,
    history: HistoryStore,
    last_search: Vec<PlantSearchResult>,
}

impl Session {
    pub fn new(engine: EngineHandle, history: HistoryStore) -> Self {
        Self {
            engine,
            history,
            last_search: Vec::new(),
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn handle(&mut self, command: Command) -> Outcome {
        match command {
            Command::Identify { photo } => Outcome::Print(self.identify(&photo)),
            Command::Search { words } => Outcome::Print(self.search(&words.join(" "))),
            Command::Details { id } => Outcome::Print(self.details(&id)),
            Command::Sample { words } => Outcome::Print(self.sample(&words.join(" "))),
            Command::History => Outcome::Print(render::history(self.history.items())),
            Command::Clear => {
                self.history.clear();
                Outcome::Print("History cleared.\n".to_string())
            }
            Command::Quit => Outcome::Quit,
        }
    }

    fn identify(&mut self, photo: &Path) -> String {
        let bytes = match fs::read(photo) {
            Ok(bytes) => bytes,
            Err(err) => {
                plant_warn!("cannot read photo {:?}: {}", photo, err);
                return format!("Cannot read {}: {}\n", photo.display(), err);
            }
        };
        plant_info!("identify photo={:?} bytes={}", photo, bytes.len());

        match self.engine.identify(&STANDARD.encode(&bytes)) {
            Ok(result) => {
                // Unrecognized photos share no name, so each one keeps its own entry.
                let id = if result.scientific_name == UNKNOWN_NAME {
                    format!("photo:{}", photo.display())
                } else {
                    format!("vision:{}", result.scientific_name.to_lowercase())
                };
                let image = ImageRef::new(photo.display().to_string());
                self.history.add(Plant::from_identification(id, &result, image));
                render::identification(&result)
            }
            Err(err) => failure("identify plant", &err),
        }
    }

    fn search(&mut self, query: &str) -> String {
        match self.engine.search(query) {
            Ok(results) => {
                let text = render::search_results(&results);
                self.last_search = results;
                text
            }
            Err(err) => failure("search plants", &err),
        }
    }

    fn details(&mut self, id: &str) -> String {
        let result = match self.engine.get_details(id) {
            Ok(result) => result,
            Err(err) => return failure("get plant details", &err),
        };

        let mut plant = Plant::from_identification(format!("catalog:{id}"), &result, ImageRef::default());
        if let Some(found) = self.last_search.iter().find(|found| found.id == id) {
            plant.image = ImageRef::new(found.thumbnail_url.clone());
            plant.description = found.description.clone();
        }
        self.history.add(plant);
        render::identification(&result)
    }

    fn sample(&mut self, query: &str) -> String {
        match find_sample_plant(query) {
            Some(plant) => {
                let text = render::plant(&plant);
                self.history.add(plant);
                text
            }
            None => "Plant not found. Try searching for \"rose\", \"sunflower\", \"lavender\", \"monstera\", or \"orchid\".\n"
                .to_string(),
        }
    }
}

fn failure(action: &str, err: &plant_engine::ClientError) -> String {
    plant_warn!("failed to {}: kind={} message={}", action, err.kind, err.message);
    format!("Failed to {action}: {err}. Please try again.\n")
}
