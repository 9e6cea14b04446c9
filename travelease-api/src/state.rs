use std::sync::Arc;
use travelease_catalog::{CatalogService, ContactIntake, SearchEngine};
use travelease_store::MemoryStore;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub search: SearchEngine,
    pub contact: ContactIntake,
}

impl AppState {
    /// Wires every service to the same store.
    pub fn new(store: Arc<MemoryStore>) -> Self {
        let catalog = CatalogService::new(store.clone(), store.clone());
        Self {
            search: SearchEngine::new(catalog.clone()),
            contact: ContactIntake::new(store),
            catalog,
        }
    }
}
