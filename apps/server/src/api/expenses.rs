use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use hormiga_core::{
    constants::RECENT_EXPENSES_LIMIT,
    expenses::{Expense, NewExpense},
    filters::{ExpenseFilterInput, FilteredExpenses},
    utils::time_utils::local_today,
};
use serde::Deserialize;

/// Upper bound for `GET /expenses/recent?limit=`.
const MAX_RECENT_LIMIT: usize = 100;

#[derive(Deserialize)]
struct RecentQuery {
    limit: Option<usize>,
}

async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Query(filters): Query<ExpenseFilterInput>,
) -> ApiResult<Json<FilteredExpenses>> {
    let result = state
        .expense_service
        .list_expenses(&user.id, filters, local_today())?;
    Ok(Json(result))
}

async fn recent_expenses(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<RecentQuery>,
) -> ApiResult<Json<Vec<Expense>>> {
    let limit = query
        .limit
        .unwrap_or(RECENT_EXPENSES_LIMIT)
        .min(MAX_RECENT_LIMIT);
    Ok(Json(state.expense_service.recent_expenses(&user.id, limit)?))
}

async fn get_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Expense>> {
    Ok(Json(state.expense_service.get_expense(&user.id, &id)?))
}

async fn create_expense(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(expense): Json<NewExpense>,
) -> ApiResult<(StatusCode, Json<Expense>)> {
    let created = state
        .expense_service
        .create_expense(&user.id, expense, local_today())
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(expense): Json<NewExpense>,
) -> ApiResult<Json<Expense>> {
    let updated = state
        .expense_service
        .update_expense(&user.id, &id, expense, local_today())
        .await?;
    Ok(Json(updated))
}

async fn delete_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<StatusCode> {
    state.expense_service.delete_expense(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/recent", get(recent_expenses))
        .route(
            "/expenses/{id}",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
}
