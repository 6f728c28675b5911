use axum::{extract::State, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::models::{MatchSnapshot, SharedMatch};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime_seconds: u64,
    #[serde(rename = "match")]
    pub game: MatchSnapshot,
}

#[derive(Clone)]
pub struct AppState {
    pub state: SharedMatch,
    pub start_time: DateTime<Utc>,
}

pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(state: SharedMatch) -> Self {
        let state = AppState {
            state,
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        Self { router }
    }
}

async fn health_check(State(app): State<AppState>) -> Json<HealthResponse> {
    let game = app.state.lock().await.snapshot();
    let uptime = Utc::now()
        .signed_duration_since(app.start_time)
        .num_seconds()
        .max(0) as u64;

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
        game,
    })
}

async fn readiness_check() -> Json<&'static str> {
    // Match state lives in memory, so once serving we are ready
    Json("ready")
}

async fn liveness_check() -> Json<&'static str> {
    Json("alive")
}
