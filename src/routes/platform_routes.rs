use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::models::platform::{platform_policy, PlatformPolicy, KNOWN_PLATFORMS};
use crate::state::AppState;

/// Plataforma con su política, para armar el formulario de entregas
#[derive(Debug, Serialize)]
pub struct PlatformResponse {
    pub name: &'static str,
    #[serde(flatten)]
    pub policy: PlatformPolicy,
}

pub fn create_platform_router() -> Router<AppState> {
    Router::new().route("/", get(list_platforms))
}

async fn list_platforms() -> Json<Vec<PlatformResponse>> {
    let platforms = KNOWN_PLATFORMS
        .iter()
        .map(|&name| PlatformResponse {
            name,
            policy: platform_policy(name),
        })
        .collect();
    Json(platforms)
}
