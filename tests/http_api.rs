//! End-to-end tests over a real socket against an in-memory store loaded
//! with the sample rows.

#![allow(clippy::panic)]

use std::net::SocketAddr;

use reqwest::StatusCode;
use serde_json::{Value, json};

use pizza_restaurants::api;
use pizza_restaurants::app_state::AppState;
use pizza_restaurants::persistence::SqliteStore;
use pizza_restaurants::seed;
use pizza_restaurants::service::CatalogService;

/// Starts the server on an ephemeral port and returns its base URL.
async fn spawn_server() -> (String, CatalogService) {
    let Ok(store) = SqliteStore::in_memory().await else {
        panic!("in-memory store should open");
    };
    if seed::sample_data(&store).await.is_err() {
        panic!("sample data failed");
    }
    let service = CatalogService::new(store);
    let app = api::build_router().with_state(AppState::new(service.clone()));

    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind failed");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("no local addr");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (base_url(addr), service)
}

fn base_url(addr: SocketAddr) -> String {
    format!("http://{addr}")
}

async fn json_body(response: reqwest::Response) -> Value {
    let Ok(body) = response.json::<Value>().await else {
        panic!("response should be JSON");
    };
    body
}

async fn association_count(service: &CatalogService) -> i64 {
    let Ok(counts) = service.counts().await else {
        panic!("count failed");
    };
    counts.restaurant_pizzas
}

#[tokio::test]
async fn lists_sample_restaurants_and_pizzas() {
    let (base, _) = spawn_server().await;
    let client = reqwest::Client::new();

    let Ok(response) = client.get(format!("{base}/restaurants")).send().await else {
        panic!("request failed");
    };
    assert_eq!(response.status(), StatusCode::OK);
    let Value::Array(restaurants) = json_body(response).await else {
        panic!("expected a list");
    };
    assert_eq!(restaurants.len(), 3);
    assert_eq!(
        restaurants.first(),
        Some(&json!({ "id": 1, "name": "Karen's Pizza Shack", "address": "address1" }))
    );

    let Ok(response) = client.get(format!("{base}/pizzas")).send().await else {
        panic!("request failed");
    };
    assert_eq!(response.status(), StatusCode::OK);
    let Value::Array(pizzas) = json_body(response).await else {
        panic!("expected a list");
    };
    let names: Vec<&str> = pizzas
        .iter()
        .filter_map(|p| p.get("name").and_then(Value::as_str))
        .collect();
    assert_eq!(names, vec!["Emma", "Geri", "Melanie"]);
}

#[tokio::test]
async fn restaurant_detail_carries_its_prices() {
    let (base, _) = spawn_server().await;
    let Ok(response) = reqwest::get(format!("{base}/restaurants/3")).await else {
        panic!("request failed");
    };
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({
            "id": 3,
            "name": "Kiki's Pizza",
            "address": "address3",
            "restaurant_pizzas": [
                { "id": 3, "price": 20, "pizza_id": 3, "restaurant_id": 3 },
            ],
        })
    );
}

#[tokio::test]
async fn unknown_restaurant_is_404() {
    let (base, _) = spawn_server().await;
    let Ok(response) = reqwest::get(format!("{base}/restaurants/999")).await else {
        panic!("request failed");
    };
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Restaurant not found" })
    );
}

#[tokio::test]
async fn create_price_entry_returns_nested_entities() {
    let (base, service) = spawn_server().await;
    let client = reqwest::Client::new();
    let Ok(response) = client
        .post(format!("{base}/restaurant_pizzas"))
        .json(&json!({ "price": 5, "pizza_id": 2, "restaurant_id": 3 }))
        .send()
        .await
    else {
        panic!("request failed");
    };
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        json_body(response).await,
        json!({
            "id": 4,
            "price": 5,
            "pizza_id": 2,
            "restaurant_id": 3,
            "pizza": {
                "id": 2,
                "name": "Geri",
                "ingredients": "Dough, Tomato Sauce, Cheese, Pepperoni",
            },
            "restaurant": { "id": 3, "name": "Kiki's Pizza", "address": "address3" },
        })
    );
    assert_eq!(association_count(&service).await, 4);
}

#[tokio::test]
async fn out_of_range_price_is_rejected_without_writing() {
    let (base, service) = spawn_server().await;
    let client = reqwest::Client::new();
    for price in [0, 31] {
        let Ok(response) = client
            .post(format!("{base}/restaurant_pizzas"))
            .json(&json!({ "price": price, "pizza_id": 1, "restaurant_id": 1 }))
            .send()
            .await
        else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        let Some(Value::Array(errors)) = body.get("errors") else {
            panic!("expected an errors list, got {body}");
        };
        assert!(!errors.is_empty());
    }
    assert_eq!(association_count(&service).await, 3);
}

#[tokio::test]
async fn delete_removes_restaurant_and_its_prices() {
    let (base, service) = spawn_server().await;
    let client = reqwest::Client::new();

    let Ok(response) = client.delete(format!("{base}/restaurants/1")).send().await else {
        panic!("request failed");
    };
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let Ok(bytes) = response.bytes().await else {
        panic!("body should be readable");
    };
    assert!(bytes.is_empty());
    assert_eq!(association_count(&service).await, 2);

    let Ok(response) = client.get(format!("{base}/restaurants/1")).send().await else {
        panic!("request failed");
    };
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let Ok(response) = client.get(format!("{base}/pizzas")).send().await else {
        panic!("request failed");
    };
    let Value::Array(pizzas) = json_body(response).await else {
        panic!("expected a list");
    };
    assert_eq!(pizzas.len(), 3);
}
