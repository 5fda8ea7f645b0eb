/// Router-level tests: page rendering and the /api/products proxy
mod common;

use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{product_json, remote_loader, spawn_upstream, test_state, HitCounter};
use electropastuh::models::{AppState, CatalogMode, LoadPhase};
use electropastuh::routes::build_router;

async fn send(state: AppState, method: Method, uri: &str) -> Response {
    build_router(state)
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

#[tokio::test]
async fn test_index_static_catalog() {
    let response = send(test_state(CatalogMode::Static), Method::GET, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Оцинкованная проволока для электропастуха"));
    assert!(html.contains("Каталог проволоки"));
    assert!(html.contains("Доставка и оплата"));
    assert_eq!(html.matches("class=\"card product-card\"").count(), 3);
    assert!(!html.contains("http-equiv=\"refresh\""));
}

#[tokio::test]
async fn test_index_while_loading_asks_for_refresh() {
    let loader = remote_loader("http://127.0.0.1:9/api/products");
    let response = send(test_state(CatalogMode::Remote(loader)), Method::GET, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("http-equiv=\"refresh\""));
    assert!(html.contains("spinner"));
}

#[tokio::test]
async fn test_rerenders_do_not_refetch() {
    let hits = HitCounter::default();
    let counter = hits.clone();
    let upstream = Router::new().route(
        "/api/products",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.hit();
                Json(json!({ "products": [product_json(1, "Проволока 2.0"), product_json(2, "Проволока 2.5")] }))
            }
        }),
    );
    let base = spawn_upstream(upstream).await;
    let loader = remote_loader(format!("{}/api/products", base));
    loader.mount();
    loader.wait_settled().await;

    let state = test_state(CatalogMode::Remote(loader.clone()));
    for _ in 0..3 {
        let response = send(state.clone(), Method::GET, "/catalog").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert_eq!(html.matches("class=\"card product-card\"").count(), 2);
        assert!(html.contains("Проволока 2.5"));
    }
    let page = body_text(send(state, Method::GET, "/").await).await;
    assert!(!page.contains("http-equiv=\"refresh\""));
    assert_eq!(hits.count(), 1);
}

#[tokio::test]
async fn test_stylesheet_and_assets() {
    let response = send(test_state(CatalogMode::Static), Method::GET, "/static/styles.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");

    let response = send(test_state(CatalogMode::Static), Method::GET, "/assets/favicon.svg").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(header::CACHE_CONTROL));
}

#[tokio::test]
async fn test_custom_stylesheet_is_served() {
    let mut state = test_state(CatalogMode::Static);
    state.custom_css = Some("body { color: red; }".to_string());
    let response = send(state, Method::GET, "/static/styles.css").await;
    assert_eq!(body_text(response).await, "body { color: red; }");
}

#[tokio::test]
async fn test_products_api_preflight() {
    let response = send(test_state(CatalogMode::Static), Method::OPTIONS, "/api/products").await;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET, OPTIONS");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
    assert!(body_text(response).await.is_empty());
}

#[tokio::test]
async fn test_products_api_rejects_other_methods() {
    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let response = send(test_state(CatalogMode::Static), method, "/api/products").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(body_json(response).await, json!({ "error": "Method not allowed" }));
    }
}

#[tokio::test]
async fn test_products_api_without_token() {
    let response = send(test_state(CatalogMode::Static), Method::GET, "/api/products").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({ "error": "WB_API_TOKEN not configured" }));
}

#[derive(Clone, Default)]
struct Captured {
    authorization: Arc<Mutex<Option<String>>>,
    body: Arc<Mutex<Option<Value>>>,
}

async fn fake_cards(State(captured): State<Captured>, headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    *captured.authorization.lock().unwrap() = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *captured.body.lock().unwrap() = Some(body);
    Json(json!({
        "cards": [
            {
                "nmID": 111,
                "object": "Проволока оцинкованная",
                "brand": "Гален",
                "description": "Для электропастуха",
                "photos": [{ "big": "https://img.test/1.jpg" }, { "big": "https://img.test/2.jpg" },
                           { "big": "https://img.test/3.jpg" }, { "big": "https://img.test/4.jpg" }],
                "sizes": [{ "price": 250000 }, { "price": 1 }],
                "characteristics": [
                    { "name": "Диаметр", "value": "2 мм" },
                    { "name": "", "value": "skip" },
                    { "name": "Пусто", "value": "" },
                    { "name": "Материал", "value": ["сталь", "цинк"] }
                ]
            },
            { "nmID": 222, "object": "Изолятор" }
        ]
    }))
}

fn proxy_state(wb_base: String) -> AppState {
    let mut state = test_state(CatalogMode::Static);
    state.wb_api_base_url = wb_base;
    state.wb_api_token = "wb-secret".to_string();
    state
}

#[tokio::test]
async fn test_products_api_maps_marketplace_cards() {
    let captured = Captured::default();
    let wb = Router::new()
        .route("/content/v2/get/cards/list", post(fake_cards))
        .with_state(captured.clone());
    let wb_base = spawn_upstream(wb).await;

    let response = send(proxy_state(wb_base), Method::GET, "/api/products").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let body = body_json(response).await;
    assert_eq!(body["total"], 2);
    let first = &body["products"][0];
    assert_eq!(first["id"], 111);
    assert_eq!(first["name"], "Проволока оцинкованная");
    assert_eq!(first["brand"], "Гален");
    assert_eq!(first["link"], "https://www.wildberries.ru/catalog/111/detail.aspx");
    assert_eq!(first["images"].as_array().unwrap().len(), 3);
    assert_eq!(first["price"], 250000);
    assert_eq!(first["characteristics"], json!({ "Диаметр": "2 мм", "Материал": "сталь, цинк" }));

    let second = &body["products"][1];
    assert_eq!(second["images"], json!([]));
    assert!(second.get("price").is_none());
    assert!(second.get("characteristics").is_none());

    assert_eq!(captured.authorization.lock().unwrap().as_deref(), Some("wb-secret"));
    let sent = captured.body.lock().unwrap().clone().unwrap();
    assert_eq!(sent["settings"]["cursor"]["limit"], 100);
    assert_eq!(sent["settings"]["filter"]["withPhoto"], -1);
}

#[tokio::test]
async fn test_products_api_passes_upstream_status_through() {
    let wb = Router::new().route(
        "/content/v2/get/cards/list",
        post(|| async { (StatusCode::UNAUTHORIZED, "token expired") }),
    );
    let wb_base = spawn_upstream(wb).await;

    let response = send(proxy_state(wb_base), Method::GET, "/api/products").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "WB API error: 401", "details": "token expired" })
    );
}

#[tokio::test]
async fn test_products_api_unreachable_upstream_is_500() {
    let dead = common::dead_endpoint().await.replace("/api/products", "");
    let response = send(proxy_state(dead), Method::GET, "/api/products").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_loader_reads_catalog_through_the_proxy() {
    let wb = Router::new()
        .route("/content/v2/get/cards/list", post(fake_cards))
        .with_state(Captured::default());
    let wb_base = spawn_upstream(wb).await;

    let site = build_router(proxy_state(wb_base));
    let site_base = spawn_upstream(site).await;

    let loader = remote_loader(format!("{}/api/products", site_base));
    loader.mount();
    let state = loader.wait_settled().await;

    assert_eq!(state.phase(), LoadPhase::Success);
    assert_eq!(state.products().len(), 2);
    assert_eq!(state.products()[0].link, "https://www.wildberries.ru/catalog/111/detail.aspx");
}
