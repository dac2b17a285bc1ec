//! Reporting API consumed by the external automation system.

use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use hormiga_core::{
    reports::{ActiveUsersReport, UserCompleteReport},
    utils::time_utils::local_today,
};

async fn active_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<ActiveUsersReport>> {
    let report = state.report_service.active_users(local_today(), Utc::now())?;
    tracing::info!("Reporting: {} active users", report.total_active_users);
    Ok(Json(report))
}

async fn complete_user_report(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<UserCompleteReport>> {
    Ok(Json(
        state.report_service.complete_user_report(&id, Utc::now())?,
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/active", get(active_users))
        .route("/users/{id}/complete", get(complete_user_report))
}
