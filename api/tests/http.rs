use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use serde_json::{Value, json};

use kidney_compass_api::application::http::server::http_server;
use kidney_compass_api::args::Args;

/// Server with no store, LLM or auth delegate configured; every request is
/// answered from the curated dataset.
fn server() -> TestServer {
    let args = Arc::new(Args::parse_from(["kidney-compass-api"]));
    let state = http_server::state(args);
    let router = http_server::router(state).expect("router must assemble");
    TestServer::new(router)
}

#[tokio::test]
async fn root_reports_liveness() {
    let response = server().get("/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Kidney Compass Backend is running!");
}

#[tokio::test]
async fn health_reflects_missing_adapters() {
    let response = server().get("/api/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "partial");
    assert_eq!(body["services"]["database"], "disconnected");
    assert_eq!(body["services"]["ai"], "unavailable");
}

#[tokio::test]
async fn classify_resolves_curated_food() {
    let response = server()
        .post("/api/classify")
        .json(&json!({ "query": "苹果" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "苹果");
    assert_eq!(body["level"], "green");
    assert_eq!(body["type"], "food");
    assert!(!body["reason"].as_str().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn classify_unknown_item_defaults_to_yellow() {
    let response = server()
        .post("/api/classify")
        .json(&json!({ "query": "完全未知的项目", "type": "medicine" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["level"], "yellow");
    assert_eq!(body["type"], "medicine");
}

#[tokio::test]
async fn classify_rejects_an_empty_query() {
    let response = server()
        .post("/api/classify")
        .json(&json!({ "query": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "bad_request");
}

#[tokio::test]
async fn recipe_is_served_from_the_curated_set() {
    let response = server().post("/api/recipe").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(!body["dishName"].as_str().unwrap_or_default().is_empty());
    assert!(!body["ingredients"].as_array().unwrap().is_empty());
    assert!(!body["steps"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn whitelist_and_blacklist_do_not_overlap() {
    let server = server();

    let whitelist: Vec<Value> = server.get("/api/food-whitelist").await.json();
    let blacklist: Vec<Value> = server.get("/api/food-blacklist").await.json();

    assert!(!whitelist.is_empty());
    assert!(!blacklist.is_empty());

    let green: Vec<&str> = whitelist.iter().filter_map(|i| i["name"].as_str()).collect();
    for item in &blacklist {
        assert_eq!(item["level"], "red");
        assert!(!green.contains(&item["name"].as_str().unwrap()));
    }
}

#[tokio::test]
async fn fallback_tables_are_exposed() {
    let server = server();

    let foods: Vec<Value> = server.get("/api/fallback/foods").await.json();
    let recipes: Vec<Value> = server.get("/api/fallback/recipes").await.json();

    assert!(foods.len() > 100);
    assert!(!recipes.is_empty());
}

#[tokio::test]
async fn signup_without_delegate_is_unavailable() {
    let response = server()
        .post("/auth/signup")
        .json(&json!({ "email": "patient@example.com", "password": "secret-1" }))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["code"], "service_unavailable");
}

#[tokio::test]
async fn login_rejects_a_malformed_email() {
    let response = server()
        .post("/auth/login")
        .json(&json!({ "email": "not-an-email", "password": "secret-1" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn metrics_endpoint_renders() {
    let server = server();
    server.get("/api/health").await.assert_status_ok();

    let response = server.get("/metrics").await;
    response.assert_status_ok();
}
