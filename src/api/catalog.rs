use crate::error::CatalogError;
use crate::models::{CatalogPayload, Product};
use super::client::{log_request, log_response};

/// Fetch the product list with a single GET. No retry.
///
/// A missing `products` field yields an empty list. Transport failures,
/// non-2xx statuses and malformed bodies each map to their own
/// [`CatalogError`] variant so the cause can be logged.
pub async fn fetch_catalog(client: &reqwest::Client, endpoint: &str) -> Result<Vec<Product>, CatalogError> {
    log_request("GET", endpoint, &[], None);

    let response = client
        .get(endpoint)
        .send()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;
    log_response(status, &text);

    if !status.is_success() {
        return Err(CatalogError::Status {
            status: status.as_u16(),
            body: text,
        });
    }

    let payload: CatalogPayload =
        serde_json::from_str(&text).map_err(|e| CatalogError::Parse(e.to_string()))?;
    Ok(payload.products)
}
