//! Greeting endpoint reporting the app version and deployment environment.

use axum::Json;
use serde::Serialize;

use crate::config;

pub const GREETING: &str = "Hello from Jenkins deployed Python app!";
pub const VERSION: &str = "1.0.0";

#[derive(Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub environment: String,
}

/// GET / — returns the greeting, version and current `ENV` value.
pub async fn index() -> Json<HomeResponse> {
    metrics::counter!("http_requests_total", "route" => "/").increment(1);

    let environment = config::current_environment();
    tracing::debug!(%environment, "serving greeting");

    Json(HomeResponse {
        message: GREETING,
        version: VERSION,
        environment,
    })
}
