//! Handler tests for Products domain
//!
//! These drive the products router end to end against the in-memory
//! repository:
//! - Request decoding and validation (400 "Invalid parameters")
//! - Response envelopes and status codes per route
//! - Read vs write error policies

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(ProductService::new(InMemoryProductRepository::new()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn create(app: &Router, name: &str, price: f64) -> Value {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/",
            json!({"name": name, "description": format!("{} description", name), "price": price}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {}", body);
    body["data"][0].clone()
}

#[tokio::test]
async fn test_create_returns_single_item_list() {
    let app = app();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/",
            json!({"name": "Coffee Mug", "description": "Ceramic", "price": 12.5}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "OK");
    assert!(body.get("error").is_none());

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Coffee Mug");
    assert_eq!(data[0]["price"], 12.5);
    assert_eq!(data[0]["active"], true);
    assert!(data[0]["code"].as_str().unwrap().starts_with("PRD-"));
}

#[tokio::test]
async fn test_create_with_missing_fields_is_invalid() {
    let app = app();

    let (status, body) = send(&app, json_request("POST", "/", json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid parameters");
    assert_eq!(body["data"], Value::Null);
    for field in ["name", "description", "price"] {
        assert!(body["error"][field].is_array(), "missing error for {}", field);
    }
}

#[tokio::test]
async fn test_create_with_malformed_json_is_invalid() {
    let app = app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid parameters");
}

#[tokio::test]
async fn test_duplicate_create_is_server_error() {
    let app = app();
    create(&app, "Teapot", 20.0).await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/",
            json!({"name": "teapot", "description": "again", "price": 21.0}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Something went wrong");
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn test_get_by_id_is_idempotent() {
    let app = app();
    let created = create(&app, "Kettle", 35.0).await;
    let uri = format!("/{}", created["id"].as_str().unwrap());

    let (first_status, first) = send(&app, get(&uri)).await;
    let (second_status, second) = send(&app, get(&uri)).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first, second);
    assert_eq!(first["data"], created);
}

#[tokio::test]
async fn test_get_missing_product_is_bad_request() {
    let app = app();
    let missing = uuid::Uuid::now_v7();

    let (status, body) = send(&app, get(&format!("/{}", missing))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["message"], format!("Product not found: {}", missing));
}

#[tokio::test]
async fn test_get_malformed_id_is_bad_request() {
    let app = app();

    let (status, body) = send(&app, get("/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid product id: abc");
}

#[tokio::test]
async fn test_empty_list_has_pagination() {
    let app = app();

    let (status, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "OK");
    assert_eq!(body["data"]["products"], json!([]));
    assert_eq!(
        body["data"]["pagination"],
        json!({"current_page": 1, "limit": 20, "total": 0, "total_page": 0})
    );
}

#[tokio::test]
async fn test_list_filters_orders_and_pages() {
    let app = app();
    create(&app, "Blue Mug", 8.0).await;
    create(&app, "Red Mug", 6.0).await;
    create(&app, "Plate", 4.0).await;

    let (status, body) = send(&app, get("/?name=mug&order_by=price&limit=1")).await;

    assert_eq!(status, StatusCode::OK);
    let products = body["data"]["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Red Mug");
    assert_eq!(body["data"]["pagination"]["total"], 2);
    assert_eq!(body["data"]["pagination"]["total_page"], 2);

    let (_, body) = send(&app, get("/?order_by=price&order_desc=true")).await;
    assert_eq!(body["data"]["products"][0]["name"], "Blue Mug");
}

#[tokio::test]
async fn test_list_rejects_bad_query() {
    let app = app();

    let (status, body) = send(&app, get("/?limit=500")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid parameters");

    let (status, _) = send(&app, get("/?order_by=colour")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_changes_only_given_fields() {
    let app = app();
    let created = create(&app, "Spoon", 2.0).await;
    let uri = format!("/{}", created["id"].as_str().unwrap());

    let (status, body) = send(
        &app,
        json_request("PUT", &uri, json!({"price": 2.5, "active": false})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let updated = &body["data"][0];
    assert_eq!(updated["price"], 2.5);
    assert_eq!(updated["active"], false);
    assert_eq!(updated["name"], "Spoon");
    assert_eq!(updated["code"], created["code"]);
}

#[tokio::test]
async fn test_update_missing_product_is_server_error() {
    let app = app();
    let uri = format!("/{}", uuid::Uuid::now_v7());

    let (status, body) = send(&app, json_request("PUT", &uri, json!({"price": 1.0}))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Something went wrong");
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_update_with_blank_description_is_invalid() {
    let app = app();
    let created = create(&app, "Fork", 1.5).await;
    let uri = format!("/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, json_request("PUT", &uri, json!({"description": "   "}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid parameters");
    assert!(body["error"]["description"].is_array());

    let (_, body) = send(&app, get(&uri)).await;
    assert_eq!(body["data"]["description"], created["description"]);
}

#[tokio::test]
async fn test_code_filter_is_exact() {
    let app = app();
    let created = create(&app, "Ladle", 6.0).await;
    let code = created["code"].as_str().unwrap();

    let (status, body) = send(&app, get(&format!("/?code={}", code))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pagination"]["total"], 1);

    let (status, body) = send(&app, get(&format!("/?code={}", code.to_lowercase()))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pagination"]["total"], 0);
    assert_eq!(body["data"]["products"], json!([]));
}
