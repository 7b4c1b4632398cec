use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::util::ServiceExt;
use tripapi_api::{ApiConfig, AppState, build_app};

fn create_test_app() -> axum::Router {
    build_app(AppState::default(), &ApiConfig::default())
}

/// Send a request and return status plus parsed JSON body
async fn json_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request_builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    let request = match body {
        Some(body) => request_builder
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => request_builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body: Value = if body_bytes.is_empty() {
        json!(null)
    } else {
        serde_json::from_slice(&body_bytes)
            .unwrap_or_else(|_| json!(String::from_utf8_lossy(&body_bytes).to_string()))
    };

    (status, body)
}

#[tokio::test]
async fn test_root_reports_running() {
    let app = create_test_app();

    let (status, body) = json_request(&app, "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "API is running" }));
}

#[tokio::test]
async fn test_calculate_sum() {
    let app = create_test_app();

    let (status, body) = json_request(
        &app,
        "POST",
        "/calculate",
        Some(json!({ "value1": 2.5, "value2": 3.5 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "value3": 6.0 }));
}

#[tokio::test]
async fn test_calculate_with_and_without_trailing_slash() {
    let app = create_test_app();
    let payload = json!({ "value1": -1.25, "value2": 10.0 });

    let (status_plain, body_plain) =
        json_request(&app, "POST", "/calculate", Some(payload.clone())).await;
    let (status_slash, body_slash) = json_request(&app, "POST", "/calculate/", Some(payload)).await;

    assert_eq!(status_plain, StatusCode::OK);
    assert_eq!(status_slash, StatusCode::OK);
    assert_eq!(body_plain, body_slash);
    assert_eq!(body_plain["value3"], 8.75);
}

#[tokio::test]
async fn test_calculate_accepts_integers() {
    let app = create_test_app();

    let (status, body) = json_request(
        &app,
        "POST",
        "/calculate/",
        Some(json!({ "value1": 2, "value2": 3 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value3"], 5.0);
}

#[tokio::test]
async fn test_calculate_is_commutative() {
    let app = create_test_app();

    let (_, forward) = json_request(
        &app,
        "POST",
        "/calculate",
        Some(json!({ "value1": 0.1, "value2": 0.2 })),
    )
    .await;
    let (_, backward) = json_request(
        &app,
        "POST",
        "/calculate",
        Some(json!({ "value1": 0.2, "value2": 0.1 })),
    )
    .await;

    assert_eq!(forward, backward);
    assert_eq!(forward["value3"], 0.1 + 0.2);
}

#[tokio::test]
async fn test_calculate_overflow_is_null() {
    let app = create_test_app();

    let (status, body) = json_request(
        &app,
        "POST",
        "/calculate",
        Some(json!({ "value1": 1.7e308, "value2": 1.7e308 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "value3": null }));
}

#[tokio::test]
async fn test_calculate_rejects_non_numeric() {
    let app = create_test_app();

    let (status, body) = json_request(
        &app,
        "POST",
        "/calculate",
        Some(json!({ "value1": "two", "value2": 3.5 })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["body", "value1"]));
    assert_eq!(body["detail"][0]["type"], "invalid_data");
}

#[tokio::test]
async fn test_calculate_rejects_missing_value() {
    let app = create_test_app();

    let (status, body) =
        json_request(&app, "POST", "/calculate", Some(json!({ "value1": 1.0 }))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["body", "value2"]));
    assert_eq!(body["detail"][0]["type"], "missing");
}

#[tokio::test]
async fn test_calculate_rejects_malformed_json() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/calculate")
        .header("content-type", "application/json")
        .body(Body::from("{\"value1\": 1.0,"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_calculate_rejects_trailing_data() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/calculate")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"value1": 1.0, "value2": 2.0} {}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_calculate_only_accepts_post() {
    let app = create_test_app();

    let (status, _) = json_request(&app, "GET", "/calculate", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
