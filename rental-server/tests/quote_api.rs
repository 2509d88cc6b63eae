//! Quote service endpoints, called in-process through the router

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use rental_server::api::build_app;
use rental_server::{AppError, AppResult, AuthContext, Config, CreditsClient, ServerState, StaticCredits};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Credits source that always fails with the given error
struct FailingCredits(fn() -> AppError);

#[async_trait]
impl CreditsClient for FailingCredits {
    async fn available_credits(&self, _auth: &AuthContext) -> AppResult<f64> {
        Err((self.0)())
    }

    async fn ping(&self) -> AppResult<()> {
        Err((self.0)())
    }
}

fn app_with(credits: Arc<dyn CreditsClient>) -> Router {
    let config = Config::with_overrides("http://127.0.0.1:9", 0);
    build_app().with_state(ServerState::new(config, credits))
}

fn app(balance: f64) -> Router {
    app_with(Arc::new(StaticCredits::new(balance)))
}

fn quote_body(return_date: &str) -> Value {
    json!({
        "car": { "_id": "car-1", "dailyRate": 50, "tier": 0 },
        "period": { "startDate": "2024-05-01", "returnDate": return_date },
        "services": [
            { "_id": "gps", "name": "GPS", "rate": 10, "daily": true },
            { "_id": "clean", "rate": 20, "daily": false }
        ],
        "selectedServiceIds": ["gps", "clean"],
        "tier": 2
    })
}

async fn send(app: Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

// ==================== Health ====================

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(0.0), Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["data"]["uptimeSeconds"].is_u64());
}

#[tokio::test]
async fn test_detailed_health_reports_degraded_upstream() {
    let app = app_with(Arc::new(FailingCredits(|| AppError::credits_unavailable("down"))));
    let (status, body) = send(app, Method::GET, "/health/detailed", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "degraded");
    assert_eq!(body["data"]["checks"]["rentalApi"]["status"], "error");
}

// ==================== Quotes ====================

#[tokio::test]
async fn test_quote_breakdown() {
    let (status, body) = send(app(0.0), Method::POST, "/api/quotes", None, Some(quote_body("2024-05-03"))).await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["rentalDays"], 3);
    assert_eq!(data["basePrice"], 150.0);
    assert_eq!(data["servicePrice"], 50.0);
    assert_eq!(data["subtotal"], 200.0);
    assert_eq!(data["discountPercentage"], 10);
    assert_eq!(data["discountAmount"], 20.0);
    assert_eq!(data["finalPrice"], 180.0);
    assert_eq!(data["depositAmount"], 18.0);
}

#[tokio::test]
async fn test_quote_rejects_reversed_period() {
    let (status, body) = send(app(0.0), Method::POST, "/api/quotes", None, Some(quote_body("2024-04-30"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4001);
    assert_eq!(body["details"]["field"], "returnDate");
}

#[tokio::test]
async fn test_quote_rejects_negative_rate() {
    let mut request = quote_body("2024-05-03");
    request["car"]["dailyRate"] = json!(-10);
    let (status, body) = send(app(0.0), Method::POST, "/api/quotes", None, Some(request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6002);
}

#[tokio::test]
async fn test_quote_malformed_body_uses_envelope() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/quotes")
        .header("Content-Type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app(0.0).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], 6);
}

#[tokio::test]
async fn test_deposit_delta_threshold() {
    let (status, body) = send(
        app(0.0),
        Method::POST,
        "/api/quotes/deposit-delta",
        None,
        Some(json!({ "oldDeposit": 100.0, "newDeposit": 100.005 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["action"].is_null());
}

#[tokio::test]
async fn test_deposit_delta_refund() {
    let (_, body) = send(
        app(0.0),
        Method::POST,
        "/api/quotes/deposit-delta",
        None,
        Some(json!({ "oldDeposit": 18.0, "newDeposit": 7.2 })),
    )
    .await;
    assert_eq!(body["data"]["action"], "refund");
    assert_eq!(body["data"]["amount"], 10.8);
}

#[tokio::test]
async fn test_deposit_delta_rejects_out_of_range_amounts() {
    let cases = [
        json!({ "oldDeposit": 0.0, "newDeposit": 1e30 }),
        json!({ "oldDeposit": -7e28, "newDeposit": 7e28 }),
        json!({ "oldDeposit": -1.0, "newDeposit": 5.0 }),
    ];
    for request in cases {
        let (status, body) = send(
            app(0.0),
            Method::POST,
            "/api/quotes/deposit-delta",
            None,
            Some(request.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "request {}", request);
        assert_eq!(body["code"], 8, "request {}", request);
    }
}

// ==================== Reservation edit ====================

#[tokio::test]
async fn test_edit_quote_requires_token() {
    let mut request = quote_body("2024-05-05");
    request["previousDeposit"] = json!(18.0);
    let (status, body) = send(app(100.0), Method::POST, "/api/reservations/edit-quote", None, Some(request)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1001);
}

#[tokio::test]
async fn test_edit_quote_insufficient_credits_is_not_an_error() {
    let mut request = quote_body("2024-05-05");
    request["previousDeposit"] = json!(18.0);
    let (status, body) = send(
        app(4.0),
        Method::POST,
        "/api/reservations/edit-quote",
        Some("customer-token"),
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["breakdown"]["depositAmount"], 28.8);
    assert_eq!(data["depositDelta"]["action"], "charge");
    assert_eq!(data["depositDelta"]["amount"], 10.8);
    assert_eq!(data["creditCheck"]["requiredAmount"], 10.8);
    assert_eq!(data["creditCheck"]["shortfall"], 6.8);
    assert_eq!(data["creditCheck"]["canConfirm"], false);
}

#[tokio::test]
async fn test_edit_quote_refund_can_confirm_without_credits() {
    let mut request = quote_body("2024-05-01");
    request["previousDeposit"] = json!(18.0);
    let (status, body) = send(
        app(0.0),
        Method::POST,
        "/api/reservations/edit-quote",
        Some("customer-token"),
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["depositDelta"]["action"], "refund");
    assert_eq!(body["data"]["creditCheck"]["canConfirm"], true);
}

#[tokio::test]
async fn test_edit_quote_rejects_out_of_range_previous_deposit() {
    let mut request = quote_body("2024-05-05");
    request["previousDeposit"] = json!(1e30);
    let (status, body) = send(
        app(100.0),
        Method::POST,
        "/api/reservations/edit-quote",
        Some("customer-token"),
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8);
    assert_eq!(body["details"]["field"], "previousDeposit");
}

// ==================== Payment ====================

#[tokio::test]
async fn test_deposit_check() {
    let (status, body) = send(
        app(25.0),
        Method::POST,
        "/api/payments/deposit-check",
        Some("customer-token"),
        Some(quote_body("2024-05-03")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["breakdown"]["depositAmount"], 18.0);
    assert_eq!(body["data"]["creditCheck"]["requiredAmount"], 18.0);
    assert_eq!(body["data"]["creditCheck"]["canConfirm"], true);
}

#[tokio::test]
async fn test_deposit_check_credits_unavailable() {
    let app = app_with(Arc::new(FailingCredits(|| AppError::credits_unavailable("timeout"))));
    let (status, body) = send(
        app,
        Method::POST,
        "/api/payments/deposit-check",
        Some("customer-token"),
        Some(quote_body("2024-05-03")),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], 5002);
}

#[tokio::test]
async fn test_deposit_check_upstream_error() {
    let app = app_with(Arc::new(FailingCredits(|| AppError::upstream("bad gateway"))));
    let (status, body) = send(
        app,
        Method::POST,
        "/api/payments/deposit-check",
        Some("customer-token"),
        Some(quote_body("2024-05-03")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], 9006);
}
