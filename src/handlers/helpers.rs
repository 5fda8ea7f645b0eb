use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::catalog::{render_catalog, render_static_catalog, CatalogSection};
use crate::models::{static_products, AppState, CatalogMode};
use crate::templates::{CatalogSectionTemplate, LOADING_REFRESH_SECS, SITE_NAME};

#[derive(Default)]
pub struct TemplateGlobals {
    pub site_name: String,
    pub base_url: String,
    pub refresh_after_secs: u32,
}

pub fn build_template_globals(state: &AppState, section: &CatalogSection) -> TemplateGlobals {
    TemplateGlobals {
        site_name: SITE_NAME.to_string(),
        base_url: state.public_base_url.clone(),
        refresh_after_secs: if section.is_loading() { LOADING_REFRESH_SECS } else { 0 },
    }
}

/// Catalog content for this render pass. Reads state only, never fetches.
pub fn current_section(state: &AppState) -> CatalogSection {
    match &state.catalog {
        CatalogMode::Static => render_static_catalog(static_products()),
        CatalogMode::Remote(loader) => render_catalog(&loader.snapshot()),
    }
}

pub fn render_catalog_html(section: &CatalogSection) -> askama::Result<String> {
    CatalogSectionTemplate::new(section).render()
}

/// Turn a rendered template into a response; render failures become a 500.
pub fn html_or_500(rendered: askama::Result<String>) -> Response {
    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "template render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
