//! Catalog section: the one-shot product fetch and the state-to-cards
//! rendering that feeds the page template.

mod loader;
mod renderer;

pub use loader::CatalogLoader;
pub use renderer::{
    render_catalog, render_static_catalog, CatalogSection, ProductCard, SpecRow,
    DESCRIPTION_PREVIEW_CHARS, PREVIEW_CHARACTERISTICS,
};
