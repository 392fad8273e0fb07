//! Shared helpers for the API integration tests.
//!
//! Builds the same router/middleware stack that production uses and
//! provides fixture inserts for the read-only passenger table.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use titanic_api::config::ServerConfig;
use titanic_api::router::build_app_router;
use titanic_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool. Mirrors the construction in `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Issue a GET request against the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    )
    .await
    .expect("response")
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// One passenger fixture row. Defaults describe an unremarkable
/// third-class passenger so tests override only what they assert on.
#[derive(Debug, Clone)]
pub struct TestPassenger {
    pub survived: i32,
    pub pclass: i32,
    pub sex: Option<&'static str>,
    pub age: Option<f64>,
    pub fare: Option<f64>,
    pub adult_male: bool,
    pub alone: bool,
    pub embarked: Option<&'static str>,
}

impl Default for TestPassenger {
    fn default() -> Self {
        Self {
            survived: 0,
            pclass: 3,
            sex: Some("male"),
            age: Some(30.0),
            fare: Some(10.0),
            adult_male: true,
            alone: true,
            embarked: Some("S"),
        }
    }
}

/// Insert one passenger row, resolving the lookup ids the same way the
/// external loader does.
pub async fn insert_passenger(pool: &PgPool, passenger: &TestPassenger) {
    let sex_id: Option<i64> = passenger.sex.map(|s| if s == "male" { 1 } else { 2 });
    let embark_port_id: Option<i64> = passenger.embarked.map(|e| match e {
        "C" => 1,
        "Q" => 2,
        _ => 3,
    });
    let class_id = i64::from(passenger.pclass);
    let who_id: Option<i64> = match (passenger.sex, passenger.age) {
        (_, Some(age)) if age < 18.0 => Some(3),
        (Some("female"), _) => Some(2),
        (Some("male"), _) => Some(1),
        _ => None,
    };
    let alive_id: i64 = if passenger.survived == 1 { 2 } else { 1 };

    sqlx::query(
        "INSERT INTO passengers \
            (survived, pclass, sex_id, age, sibsp, parch, fare, adult_male, \
             alone, embark_port_id, class_id, who_id, alive_id) \
         VALUES ($1, $2, $3, $4, 0, 0, $5, $6, $7, $8, $9, $10, $11)",
    )
    .bind(passenger.survived)
    .bind(passenger.pclass)
    .bind(sex_id)
    .bind(passenger.age)
    .bind(passenger.fare)
    .bind(passenger.adult_male)
    .bind(passenger.alone)
    .bind(embark_port_id)
    .bind(class_id)
    .bind(who_id)
    .bind(alive_id)
    .execute(pool)
    .await
    .expect("insert passenger fixture");
}

/// Insert `count` interchangeable passengers for pagination tests.
pub async fn seed_passengers(pool: &PgPool, count: usize) {
    for i in 0..count {
        insert_passenger(
            pool,
            &TestPassenger {
                age: Some(20.0 + i as f64),
                ..Default::default()
            },
        )
        .await;
    }
}
