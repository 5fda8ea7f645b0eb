/// Error types for catalog loading and the product proxy
use thiserror::Error;

/// The one message shown to visitors whatever made the fetch fail.
pub const FETCH_FAILED_MESSAGE: &str = "Не удалось загрузить товары. Попробуйте обновить страницу позже.";

/// Errors that can occur while fetching the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure (DNS, connect, reset, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not the expected JSON document
    #[error("Invalid catalog payload: {0}")]
    Parse(String),
}

impl CatalogError {
    /// Text for the error panel. Causes are not distinguished for visitors.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

/// Errors raised by the marketplace product proxy
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("WB_API_TOKEN not configured")]
    MissingToken,

    /// Marketplace API returned a non-2xx status
    #[error("WB API error: {status}")]
    Upstream { status: u16, details: String },

    #[error("{0}")]
    Request(String),
}
