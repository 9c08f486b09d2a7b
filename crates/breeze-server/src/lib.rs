//! Sensor ingest/readout HTTP service
//!
//! Two data routes: `POST /api/sensor` stores a sample under a
//! server-assigned timestamp, `GET /api/sensor` returns the whole batch
//! ascending by timestamp. Aggregation happens on the consumer side; this
//! service only persists and serves.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use breeze_store::ReadingStore;
use chrono::Utc;
use opentelemetry::metrics::{Counter, MeterProvider};
use opentelemetry_prometheus::exporter;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use prometheus::{Encoder, Registry, TextEncoder};
use serde::Deserialize;

pub struct AppState {
    ready: AtomicBool,
    registry: Registry,
    #[allow(dead_code)]
    provider: SdkMeterProvider,
    requests_total: Counter<u64>,
    store: Arc<dyn ReadingStore>,
}

pub fn build_app(store: Arc<dyn ReadingStore>) -> (Router, Arc<AppState>) {
    // Prometheus exporter via OpenTelemetry
    let registry = Registry::new();
    let reader = exporter()
        .with_registry(registry.clone())
        .build()
        .expect("prom exporter");
    let provider = SdkMeterProvider::builder().with_reader(reader).build();
    let meter = provider.meter("breeze-server");

    let requests_total = meter
        .u64_counter("breeze_requests_total")
        .with_description("Total HTTP requests served")
        .init();

    let state = Arc::new(AppState {
        ready: AtomicBool::new(false),
        registry,
        provider,
        requests_total,
        store,
    });

    let router = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/metrics", get(metrics))
        .route("/api/sensor", get(list_readings).post(store_reading))
        .with_state(Arc::clone(&state));

    (router, state)
}

pub fn set_ready(state: &Arc<AppState>, is_ready: bool) {
    state.ready.store(is_ready, Ordering::Relaxed);
}

async fn healthz(State(state): State<Arc<AppState>>) -> StatusCode {
    state.requests_total.add(1, &[]);
    StatusCode::OK
}

async fn readyz(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.ready.load(Ordering::Relaxed) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

async fn metrics(
    State(state): State<Arc<AppState>>,
) -> (
    [(axum::http::header::HeaderName, axum::http::HeaderValue); 1],
    String,
) {
    let encoder = TextEncoder::new();
    let metric_families = state.registry.gather();
    let mut buf = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buf) {
        tracing::warn!(error=?e, "failed to encode metrics");
    }
    let body = String::from_utf8(buf).unwrap_or_default();
    let header = (
        header::CONTENT_TYPE,
        axum::http::HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
    );
    ([header], body)
}

/// Body of `POST /api/sensor`. Fields are optional so a missing one maps to
/// 400 rather than a deserialization rejection.
#[derive(Deserialize)]
struct SensorBody {
    temperature: Option<f64>,
    humidity: Option<f64>,
}

async fn store_reading(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SensorBody>,
) -> impl IntoResponse {
    state.requests_total.add(1, &[]);

    let (Some(temperature), Some(humidity)) = (body.temperature, body.humidity) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "missing data fields"})),
        )
            .into_response();
    };

    // The server owns the clock: clients send values only.
    match state.store.insert(temperature, humidity, Utc::now()).await {
        Ok(reading) => {
            tracing::debug!(timestamp = %reading.timestamp, "reading stored");
            (
                StatusCode::CREATED,
                Json(serde_json::json!({"status": "ok"})),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error=?e, "failed to store reading");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

async fn list_readings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.requests_total.add(1, &[]);

    match state.store.fetch_all().await {
        Ok(readings) => (StatusCode::OK, Json(readings)).into_response(),
        Err(e) => {
            tracing::error!(error=?e, "failed to fetch readings");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}
