use axum::{
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::HeaderValue;

use crate::config::PRODUCTS_API_PATH;
use crate::models::AppState;
use crate::handlers;

// Embed the default stylesheet in the binary
pub const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

/// Directory served under `/assets` (favicon, images).
pub const ASSETS_DIR: &str = "assets";

pub fn build_router(state: AppState) -> Router {
    // Always serve styles.css - use custom if provided, otherwise use embedded default
    let stylesheet_content = state.custom_css.clone().unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    Router::new()
        .route("/", get(handlers::site::index_get))
        .route("/catalog", get(handlers::site::catalog_get))
        .route(
            PRODUCTS_API_PATH,
            get(handlers::products_api::products_get)
                .options(handlers::products_api::products_options)
                .fallback(handlers::products_api::method_not_allowed),
        )
        .route("/static/styles.css", get(move || {
            let css = stylesheet_content.clone();
            async move {
                (
                    [(CONTENT_TYPE, "text/css")],
                    css
                )
            }
        }))
        .nest_service(
            "/assets",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=31536000, immutable"),
                ))
                .service(ServeDir::new(ASSETS_DIR)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
