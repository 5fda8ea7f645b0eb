use askama::Template;
use axum::extract::State;
use axum::response::Response;

use crate::models::AppState;
use crate::templates::IndexTemplate;

use super::helpers::{build_template_globals, current_section, html_or_500, render_catalog_html, TemplateGlobals};

pub async fn index_get(State(state): State<AppState>) -> Response {
    let section = current_section(&state);
    let catalog_html = match render_catalog_html(&section) {
        Ok(html) => html,
        Err(e) => return html_or_500(Err(e)),
    };
    let TemplateGlobals {
        site_name,
        base_url,
        refresh_after_secs,
    } = build_template_globals(&state, &section);
    html_or_500(
        IndexTemplate {
            site_name,
            base_url,
            refresh_after_secs,
            catalog_html,
        }
        .render(),
    )
}

/// Just the catalog section, for polling while the fetch is outstanding.
pub async fn catalog_get(State(state): State<AppState>) -> Response {
    let section = current_section(&state);
    html_or_500(render_catalog_html(&section))
}
