use std::sync::Arc;

use crate::catalog::CatalogLoader;

/// How the catalog section is populated for this process.
#[derive(Clone)]
pub enum CatalogMode {
    Static,
    Remote(Arc<CatalogLoader>),
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogMode,
    pub client: reqwest::Client,
    pub public_base_url: String,
    pub wb_api_base_url: String,
    pub wb_api_token: String,
    pub custom_css: Option<String>,
}

impl AppState {
    pub fn loader(&self) -> Option<&Arc<CatalogLoader>> {
        match &self.catalog {
            CatalogMode::Remote(loader) => Some(loader),
            CatalogMode::Static => None,
        }
    }
}
