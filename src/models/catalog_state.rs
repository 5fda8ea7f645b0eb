use std::sync::Arc;

use crate::error::{CatalogError, FETCH_FAILED_MESSAGE};
use crate::models::product::Product;

/// Where the catalog section is in its one-shot load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Snapshot of the catalog view. Cloning is cheap; products are shared.
#[derive(Debug, Clone)]
pub struct CatalogState {
    phase: LoadPhase,
    products: Arc<[Product]>,
    error: Option<String>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Idle,
            products: Arc::from(Vec::new()),
            error: None,
        }
    }
}

impl CatalogState {
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.phase, LoadPhase::Success | LoadPhase::Error)
    }

    /// Idle -> Loading. Returns false from any other phase.
    pub fn begin_loading(&mut self) -> bool {
        if self.phase != LoadPhase::Idle {
            return false;
        }
        self.phase = LoadPhase::Loading;
        true
    }

    /// Loading -> Success (list replaced, error cleared) or
    /// Loading -> Error (list kept as is). Returns false if not loading.
    pub fn settle(&mut self, outcome: Result<Vec<Product>, CatalogError>) -> bool {
        if self.phase != LoadPhase::Loading {
            return false;
        }
        match outcome {
            Ok(products) => {
                self.products = Arc::from(products);
                self.error = None;
                self.phase = LoadPhase::Success;
            }
            Err(e) => {
                self.error = Some(e.user_message().to_string());
                self.phase = LoadPhase::Error;
            }
        }
        true
    }

    /// Leave Loading without a result (task dropped or panicked).
    pub fn abandon(&mut self) -> bool {
        if self.phase != LoadPhase::Loading {
            return false;
        }
        self.error = Some(FETCH_FAILED_MESSAGE.to_string());
        self.phase = LoadPhase::Error;
        true
    }
}
