use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use hormiga_core::{dashboard::Dashboard, utils::time_utils::local_today};
use serde::Deserialize;

#[derive(Deserialize)]
struct DashboardQuery {
    #[serde(default)]
    period: Option<String>,
}

async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<Json<Dashboard>> {
    let period = query.period.unwrap_or_default();
    let dashboard = state
        .dashboard_service
        .get_dashboard(&user.id, &period, local_today())?;
    Ok(Json(dashboard))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}
