//! Helpers shared by the integration tests: throwaway upstream servers and
//! app state builders.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::Router;
use serde_json::{json, Value};

use electropastuh::catalog::CatalogLoader;
use electropastuh::models::{AppState, CatalogMode};

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn spawn_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A local URL nothing listens on.
pub async fn dead_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/products", addr)
}

#[derive(Clone, Default)]
pub struct HitCounter(Arc<AtomicUsize>);

impl HitCounter {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

pub fn product_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "brand": "Гален",
        "description": "Оцинкованная проволока",
        "link": format!("https://shop.test/item/{}", id),
        "images": [format!("https://img.test/{}.jpg", id)],
        "price": 250000
    })
}

pub fn test_state(catalog: CatalogMode) -> AppState {
    AppState {
        catalog,
        client: reqwest::Client::new(),
        public_base_url: "http://127.0.0.1:8080".to_string(),
        wb_api_base_url: "http://127.0.0.1:9".to_string(),
        wb_api_token: String::new(),
        custom_css: None,
    }
}

pub fn remote_loader(endpoint: impl Into<String>) -> Arc<CatalogLoader> {
    Arc::new(CatalogLoader::new(reqwest::Client::new(), endpoint))
}
