use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::api::WbClient;
use crate::error::ProxyError;
use crate::models::AppState;

fn with_cors(status: StatusCode, body: Value) -> Response {
    let mut response = (status, Json(body)).into_response();
    response
        .headers_mut()
        .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            ProxyError::MissingToken => with_cors(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
            ProxyError::Upstream { status, ref details } => with_cors(
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                json!({ "error": self.to_string(), "details": details }),
            ),
            ProxyError::Request(ref message) => with_cors(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": message }),
            ),
        }
    }
}

/// `GET /api/products`: the seller's marketplace cards as catalog products.
pub async fn products_get(State(state): State<AppState>) -> Response {
    let client = WbClient::new(
        state.client.clone(),
        state.wb_api_base_url.clone(),
        state.wb_api_token.clone(),
    );
    match client.list_products().await {
        Ok(products) => {
            let total = products.len();
            with_cors(StatusCode::OK, json!({ "products": products, "total": total }))
        }
        Err(e) => {
            tracing::warn!(error = %e, "product proxy request failed");
            e.into_response()
        }
    }
}

/// CORS preflight.
pub async fn products_options() -> Response {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
            (header::ACCESS_CONTROL_MAX_AGE, "86400"),
        ],
        "",
    )
        .into_response()
}

pub async fn method_not_allowed() -> Response {
    with_cors(StatusCode::METHOD_NOT_ALLOWED, json!({ "error": "Method not allowed" }))
}
