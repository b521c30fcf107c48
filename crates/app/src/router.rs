use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::{debug, warn};

use bobapp_core::{Joke, JokeProvider};

use crate::problem::ProblemResponse;
use crate::telemetry;

#[derive(Clone)]
pub struct AppState {
    metrics: PrometheusHandle,
    jokes: Arc<JokeProvider>,
}

impl AppState {
    pub fn new(metrics: PrometheusHandle, jokes: JokeProvider) -> Self {
        Self {
            metrics,
            jokes: Arc::new(jokes),
        }
    }

    pub fn metrics(&self) -> &PrometheusHandle {
        &self.metrics
    }

    pub fn jokes(&self) -> &JokeProvider {
        &self.jokes
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/metrics", get(metrics))
        .route("/api/joke", get(random_joke))
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = telemetry::render_metrics(state.metrics());
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
}

async fn random_joke(State(state): State<AppState>) -> Result<Json<Joke>, ProblemResponse> {
    match state.jokes().random_joke() {
        Ok(joke) => {
            metrics::counter!("joke_requests_total", "result" => "ok").increment(1);
            debug!(stage = "api", joke_id = joke.id, "serving joke");
            Ok(Json(joke.clone()))
        }
        Err(err) => {
            metrics::counter!("joke_requests_total", "result" => "empty").increment(1);
            warn!(stage = "api", error = %err, "joke requested from an empty collection");
            Err(err.into())
        }
    }
}
