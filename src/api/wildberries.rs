/// Wildberries content API client used by the product proxy
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use crate::error::ProxyError;
use crate::models::{Characteristics, Product};
use crate::utils::value_to_short_string;
use super::client::{log_request, log_response};

pub const CARDS_LIST_PATH: &str = "/content/v2/get/cards/list";
pub const CARDS_PAGE_LIMIT: u32 = 100;
pub const MAX_CARD_IMAGES: usize = 3;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct CardsListResponse {
    #[serde(default)]
    cards: Vec<WbCard>,
}

#[derive(Debug, Deserialize)]
struct WbCard {
    #[serde(rename = "nmID", default)]
    nm_id: i64,
    #[serde(default)]
    object: String,
    #[serde(default)]
    brand: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    photos: Vec<WbPhoto>,
    #[serde(default)]
    sizes: Vec<WbSize>,
    characteristics: Option<Vec<WbCharacteristic>>,
}

#[derive(Debug, Deserialize)]
struct WbPhoto {
    big: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WbSize {
    price: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct WbCharacteristic {
    #[serde(default)]
    name: String,
    #[serde(default)]
    value: Value,
}

/// Public product page for a marketplace article number.
pub fn product_link(nm_id: i64) -> String {
    format!("https://www.wildberries.ru/catalog/{}/detail.aspx", nm_id)
}

/// Request body for the seller's card list.
pub fn cards_list_request() -> Value {
    json!({
        "settings": {
            "cursor": { "limit": CARDS_PAGE_LIMIT },
            "filter": { "withPhoto": -1 }
        }
    })
}

fn card_to_product(card: WbCard) -> Product {
    let images = card
        .photos
        .into_iter()
        .take(MAX_CARD_IMAGES)
        .filter_map(|p| p.big)
        .collect();

    let price = card
        .sizes
        .first()
        .and_then(|s| s.price.as_ref())
        .and_then(|p| p.as_i64().or_else(|| p.as_f64().map(|f| f.round() as i64)));

    let characteristics = card.characteristics.map(|list| {
        let mut out = Characteristics::default();
        for c in list {
            let value = value_to_short_string(&c.value);
            if !c.name.is_empty() && !value.is_empty() {
                out.push(c.name, value);
            }
        }
        out
    });

    Product {
        id: card.nm_id,
        name: card.object,
        brand: Some(card.brand),
        description: card.description,
        link: product_link(card.nm_id),
        images,
        price,
        characteristics,
    }
}

/// Map a raw cards-list body into catalog products, keeping card order.
pub fn parse_cards_response(text: &str) -> Result<Vec<Product>, serde_json::Error> {
    let parsed: CardsListResponse = serde_json::from_str(text)?;
    Ok(parsed.cards.into_iter().map(card_to_product).collect())
}

pub struct WbClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl WbClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Pull the first page of seller cards and reshape them into products.
    ///
    /// # Errors
    ///
    /// `ProxyError::MissingToken` when no token is configured,
    /// `ProxyError::Upstream` for non-2xx answers (status and body kept),
    /// `ProxyError::Request` for transport or decoding failures.
    pub async fn list_products(&self) -> Result<Vec<Product>, ProxyError> {
        if self.token.trim().is_empty() {
            return Err(ProxyError::MissingToken);
        }

        let url = format!("{}{}", self.base_url, CARDS_LIST_PATH);
        let body = cards_list_request();
        log_request(
            "POST",
            &url,
            &[("Authorization", self.token.as_str()), ("Content-Type", "application/json")],
            Some(&body),
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.token)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProxyError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProxyError::Request(e.to_string()))?;
        log_response(status, &text);

        if !status.is_success() {
            let details = if text.is_empty() { "No error details".to_string() } else { text };
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                details,
            });
        }

        parse_cards_response(&text).map_err(|e| ProxyError::Request(e.to_string()))
    }
}
