//! Top-level router: API routes, auth middleware and tower-http layers.

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::middleware::{auth_middleware, AuthState};
use super::preferences::{preferences_routes, PreferencesAppState};

/// HTTP-layer settings taken from `ServerConfig`.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub request_timeout: Duration,
    /// Allowed origins; `*` allows any. Empty disables CORS headers.
    pub cors_origins: Vec<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
        }
    }
}

/// Builds the complete application router.
///
/// ```text
/// /health        liveness, no auth
/// /api/...       preference routes behind auth_middleware
/// ```
pub fn build_router(
    state: PreferencesAppState,
    validator: AuthState,
    settings: &HttpSettings,
) -> Router {
    let api = preferences_routes()
        .layer(from_fn_with_state(validator, auth_middleware))
        .with_state(state);

    let mut router = Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(&settings.cors_origins) {
        router = router.layer(cors);
    }

    // Registered last so the id exists before the trace span opens
    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn build_cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS allows any origin");
        return Some(layer.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    Some(layer.allow_origin(origins))
}
