use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Extension, Json, Router};
use hormiga_core::users::{ProfileUpdate, User};

async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<User>> {
    Ok(Json(state.user_service.get_user(&user.id)?))
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(update): Json<ProfileUpdate>,
) -> ApiResult<Json<User>> {
    let updated = state.user_service.update_profile(&user.id, update).await?;
    Ok(Json(updated))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}
