use bl_core::{ArticleCatalog, StaticCatalog};
use std::sync::Arc;

pub struct AppState {
    pub catalog: Arc<dyn ArticleCatalog>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn ArticleCatalog>) -> Self {
        Self { catalog }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(StaticCatalog::new()))
    }
}
