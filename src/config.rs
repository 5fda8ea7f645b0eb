use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CATALOG_ENDPOINT: &str = "";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "";
pub const DEFAULT_WB_API_BASE_URL: &str = "https://suppliers-api.wildberries.ru";
pub const DEFAULT_WB_API_TOKEN: &str = "";
pub const PRODUCTS_API_PATH: &str = "/api/products";

/// Where the catalog section takes its products from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// Fetch once from the configured endpoint.
    Remote,
    /// Render the built-in wire assortment, no fetch.
    Static,
}

impl CatalogSource {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "static" | "fixed" | "builtin" => CatalogSource::Static,
            _ => CatalogSource::Remote,
        }
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_catalog_source() -> CatalogSource {
    CatalogSource::parse(&env::var("CATALOG_SOURCE").unwrap_or_default())
}

/// Configured catalog endpoint, or an empty string when the site should use
/// its own product proxy.
pub fn get_catalog_endpoint() -> String {
    env::var("CATALOG_ENDPOINT")
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|_| DEFAULT_CATALOG_ENDPOINT.to_string())
}

/// The endpoint the loader fetches: `CATALOG_ENDPOINT` if set, otherwise the
/// `/api/products` proxy under `PUBLIC_BASE_URL`.
pub fn resolve_catalog_endpoint(public_base_url: &str) -> String {
    let configured = get_catalog_endpoint();
    if configured.is_empty() {
        format!("{}{}", public_base_url, PRODUCTS_API_PATH)
    } else {
        configured
    }
}

pub fn get_public_base_url() -> String {
    sanitize_base_url(&env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string()))
}

/// Base URL used when `PUBLIC_BASE_URL` is not set: the address the server binds.
pub fn public_base_url_for(host: &str, port: u16) -> String {
    match env::var("PUBLIC_BASE_URL") {
        Ok(v) if !v.trim().is_empty() => sanitize_base_url(&v),
        _ => format!("http://{}:{}", host, port),
    }
}

pub fn get_wb_api_token() -> String {
    env::var("WB_API_TOKEN").unwrap_or_else(|_| DEFAULT_WB_API_TOKEN.to_string())
}

pub fn get_wb_api_base_url() -> String {
    let raw = env::var("WB_API_BASE_URL").unwrap_or_default();
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_WB_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        format!("http://{}:{}", DEFAULT_HOST, DEFAULT_PORT)
    } else {
        trimmed.to_string()
    }
}
