//! End-to-end walk through the cafe lifecycle over HTTP.

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use cafe_store_sqlite::SqliteCafeRepository;
use cafe_transport_http::{build_router, AppState};

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("req");
    let resp = app.clone().oneshot(req).await.expect("resp");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024)
        .await
        .expect("body");
    (status, serde_json::from_slice(&bytes).expect("json"))
}

fn names(body: &Value) -> Vec<String> {
    body["cafes"]
        .as_array()
        .expect("cafes array")
        .iter()
        .filter_map(|c| c["name"].as_str().map(String::from))
        .collect()
}

#[tokio::test]
async fn add_search_reprice_and_close() {
    let repo = Arc::new(SqliteCafeRepository::open_in_memory().expect("db"));
    let app = build_router(AppState::new(repo, "TopSecretAPIKey"));

    let (status, _) = send(
        &app,
        "POST",
        "/add?name=Brew&map_url=https%3A%2F%2Fmaps.example%2Fbrew&img_url=https%3A%2F%2Fimg.example%2Fbrew.jpg\
         &location=Peckham&seats=10-20&has_wifi=true&has_sockets=1&coffee_price=2.40",
    )
    .await;
    assert_eq!(status, 200);

    let (_, all) = send(&app, "GET", "/all").await;
    assert_eq!(names(&all), vec!["Brew".to_string()]);

    let (_, found) = send(&app, "GET", "/search?loc=Peckham").await;
    let cafe = &found["cafe"];
    assert_eq!(cafe["name"], "Brew");
    assert_eq!(cafe["seats"], "10-20");
    assert_eq!(cafe["has_wifi"], true);
    assert_eq!(cafe["has_toilet"], false);
    let id = cafe["id"].as_i64().expect("id");

    let (status, _) = send(&app, "PATCH", &format!("/update-price/{id}?new_price=3.50")).await;
    assert_eq!(status, 200);

    let (_, found) = send(&app, "GET", "/search?loc=Peckham").await;
    assert_eq!(found["cafe"]["coffee_price"], "3.50");
    assert_eq!(found["cafe"]["id"], id);

    let (status, _) = send(&app, "DELETE", &format!("/report-closed/{id}?api-key=wrong")).await;
    assert_eq!(status, 403);
    let (_, all) = send(&app, "GET", "/all").await;
    assert_eq!(names(&all).len(), 1);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/report-closed/{id}?api-key=TopSecretAPIKey"),
    )
    .await;
    assert_eq!(status, 200);

    let (_, all) = send(&app, "GET", "/all").await;
    assert!(names(&all).is_empty());

    let (status, _) = send(&app, "PATCH", &format!("/update-price/{id}?new_price=4.00")).await;
    assert_eq!(status, 404);
}
