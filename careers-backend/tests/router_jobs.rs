#![cfg(feature = "sqlite")]

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use careers_backend::build_router;
use tower::ServiceExt;

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn app() -> Router {
    build_router(common::sqlite_state().await, common::API_ROOT)
}

#[tokio::test]
async fn post_then_get_round_trip() {
    let app = app().await;

    let res = app
        .clone()
        .oneshot(post_json(
            "/career/job-list",
            common::software_engineer().to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = common::read_json(res).await;
    let id = created["id"].as_str().expect("id").to_string();

    let mut expected = common::software_engineer();
    expected["id"] = serde_json::Value::String(id.clone());
    assert_eq!(created, expected);

    let res = app
        .clone()
        .oneshot(get(&format!("/career/job-list/{id}")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(common::read_json(res).await, expected);

    let res = app.oneshot(get("/career/job-list")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let list = common::read_json(res).await;
    let list = list.as_array().expect("array");
    assert!(list.iter().any(|j| j["id"] == id.as_str()));
}

#[tokio::test]
async fn unknown_id_returns_404_with_message() {
    let res = app()
        .await
        .oneshot(get("/career/job-list/does-not-exist"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = common::read_json(res).await;
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], "Job not found");
}

#[tokio::test]
async fn undecodable_id_is_a_json_404() {
    let res = app()
        .await
        .oneshot(get("/career/job-list/%FF"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        res.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let body = common::read_json(res).await;
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], "Job not found");
}

#[tokio::test]
async fn invalid_fields_are_rejected_with_validation_map() {
    let mut payload = common::software_engineer();
    payload["vacancy"] = 0.into();
    payload["title"] = "   ".into();

    let res = app()
        .await
        .oneshot(post_json("/career/job-list", payload.to_string()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = common::read_json(res).await;
    assert_eq!(body["message"], "validation failed");
    assert_eq!(body["validation"]["vacancy"]["code"], "min");
    assert_eq!(body["validation"]["title"]["code"], "required");
}

#[tokio::test]
async fn malformed_or_incomplete_bodies_are_bad_requests() {
    let app = app().await;

    let res = app
        .clone()
        .oneshot(post_json("/career/job-list", "{ not json".into()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = common::read_json(res).await;
    assert!(!body["message"].as_str().unwrap_or_default().is_empty());

    let mut missing = common::software_engineer();
    missing.as_object_mut().unwrap().remove("lastDate");
    let res = app
        .clone()
        .oneshot(post_json("/career/job-list", missing.to_string()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/career/job-list")
                .body(Body::from(common::software_engineer().to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn routes_follow_configured_api_root() {
    let app = build_router(common::sqlite_state().await, "/v2/jobs/");
    let res = app
        .clone()
        .oneshot(get("/v2/jobs/job-list"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.oneshot(get("/career/job-list")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn probes_live_at_server_root() {
    let app = app().await;
    let res = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let res = app.oneshot(get("/ready")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
