#![cfg(feature = "http_api")]

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use study_plan::{PlanDocument, http_api};
use tower::util::ServiceExt;

fn new_router() -> axum::Router {
    http_api::router(http_api::AppState::default())
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get(new_router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], "ok");
}

#[tokio::test]
async fn fixed_schedule_endpoint_returns_thirty_items() {
    let (status, body) = get(new_router(), "/schedule/fixed").await;
    assert_eq!(status, StatusCode::OK);
    let document: PlanDocument = serde_json::from_slice(&body).unwrap();
    assert_eq!(document.title, "AI Auto-Generated Schedule (Mockup)");
    assert_eq!(document.items.len(), 30);
}

#[tokio::test]
async fn adaptive_endpoint_honours_query() {
    let (status, body) = get(
        new_router(),
        "/schedule/adaptive?minutes_per_week=100&focus=exam&weeks=3",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let document: PlanDocument = serde_json::from_slice(&body).unwrap();
    assert_eq!(document.items.len(), 15);
    assert_eq!(document.items[3].module, "L1-1-Exam");
    assert_eq!(document.items[0].duration_minutes, 20);
}

#[tokio::test]
async fn adaptive_endpoint_rejects_zero_minutes() {
    let (status, body) = get(new_router(), "/schedule/adaptive?minutes_per_week=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["error"], "invalid_request");
}

#[tokio::test]
async fn out_of_range_weeks_are_rejected() {
    for uri in [
        "/schedule/adaptive?weeks=4294967295",
        "/schedule/adaptive?weeks=53",
        "/schedule/adaptive?weeks=0",
        "/schedule/table?mode=adaptive&weeks=4294967295",
        "/calendar?start=2025-01-06&mode=adaptive&weeks=4294967295",
    ] {
        let (status, body) = get(new_router(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "invalid_request");
        assert!(value["message"].as_str().unwrap().contains("weeks"));
    }

    let (status, body) = get(new_router(), "/schedule/adaptive?weeks=52").await;
    assert_eq!(status, StatusCode::OK);
    let document: PlanDocument = serde_json::from_slice(&body).unwrap();
    assert_eq!(document.items.len(), 52 * 5);
}

#[tokio::test]
async fn table_endpoint_returns_text() {
    let (status, body) = get(new_router(), "/schedule/table?mode=adaptive&weeks=1").await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert_eq!(text.lines().count(), 1 + 2 + 5);
    assert!(text.starts_with("AI Personalized Schedule\n"));
}

#[tokio::test]
async fn calendar_requires_a_valid_start() {
    let (status, _) = get(new_router(), "/calendar").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = get(new_router(), "/calendar?start=tomorrow").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get(new_router(), "/calendar?start=2025-01-06").await;
    assert_eq!(status, StatusCode::OK);
    let entries: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(entries.len(), 30);
    assert_eq!(entries[9]["date"], "2025-01-19");
}

#[tokio::test]
async fn locale_switch_changes_generated_text() {
    let app = new_router();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/locale")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"locale":"ja"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (_, body) = get(app.clone(), "/locale").await;
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["locale"], "ja");

    let (_, body) = get(app, "/schedule/fixed").await;
    let document: PlanDocument = serde_json::from_slice(&body).unwrap();
    assert_eq!(document.items[0].activity, "オンデマンド");
}
