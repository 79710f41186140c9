use std::sync::Arc;

use plant_core::{PlantIdentificationResult, PlantSearchResult};

use crate::{ClientError, PlantCatalog, PlantIdentifier};

/// Owns a tokio runtime and drives client calls for synchronous callers.
///
/// Calls are independent; nothing is cached, coalesced or cancelled.
pub struct EngineHandle {
    runtime: tokio::runtime::Runtime,
    identifier: Arc<dyn PlantIdentifier>,
    catalog: Arc<dyn PlantCatalog>,
}

impl EngineHandle {
    pub fn new(
        identifier: Arc<dyn PlantIdentifier>,
        catalog: Arc<dyn PlantCatalog>,
    ) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        Ok(Self {
            runtime,
            identifier,
            catalog,
        })
    }

    pub fn identify(&self, image_base64: &str) -> Result<PlantIdentificationResult, ClientError> {
        self.runtime.block_on(self.identifier.identify(image_base64))
    }

    pub fn search(&self, query: &str) -> Result<Vec<PlantSearchResult>, ClientError> {
        self.runtime.block_on(self.catalog.search(query))
    }

    pub fn get_details(&self, id: &str) -> Result<PlantIdentificationResult, ClientError> {
        self.runtime.block_on(self.catalog.get_details(id))
    }
}
