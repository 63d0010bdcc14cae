use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;

use crate::infrastructure::db;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResp {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub service: &'static str,
    pub version: &'static str,
    /// `ok` when the database answered a ping, `degraded` otherwise.
    pub database: &'static str,
}

#[utoipa::path(
    get,
    path = "/auth/health",
    tag = "Health",
    security(()),
    responses((status = 200, body = HealthResp))
)]
pub async fn health(State(pool): State<PgPool>) -> Json<HealthResp> {
    let database = if db::ping(&pool).await { "ok" } else { "degraded" };
    Json(HealthResp {
        status: "UP",
        timestamp: Utc::now(),
        service: "Self Help Backend",
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}

pub fn routes(pool: PgPool) -> Router {
    Router::new().route("/health", get(health)).with_state(pool)
}
