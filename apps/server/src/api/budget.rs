use std::sync::Arc;

use crate::{
    auth::CurrentUser,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{extract::State, http::StatusCode, routing::get, Extension, Json, Router};
use hormiga_core::{
    budgets::{Budget, BudgetCheck, BudgetInput},
    utils::time_utils::local_today,
};

async fn get_budget(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Budget>> {
    state
        .budget_service
        .get_budget(&user.id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Budget not configured".to_string()))
}

async fn save_budget(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(input): Json<BudgetInput>,
) -> ApiResult<Json<Budget>> {
    let budget = state.budget_service.save_budget(&user.id, input).await?;
    Ok(Json(budget))
}

async fn delete_budget(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<StatusCode> {
    state.budget_service.delete_budget(&user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn budget_status(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<BudgetCheck>> {
    let check = state
        .budget_service
        .evaluate_current_month(&user.id, local_today())?;
    Ok(Json(check))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/budget",
            get(get_budget).put(save_budget).delete(delete_budget),
        )
        .route("/budget/status", get(budget_status))
}
