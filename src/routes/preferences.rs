use axum::{Json, extract::State};
use recetario_user::UserPreferences;

use crate::{auth::AuthUser, error::AppResult, extract::JsonBody, routes::AppState};

#[tracing::instrument(skip(state), fields(user_id = %user.id))]
pub async fn show(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<UserPreferences>> {
    Ok(Json(state.preferences.load(&user.id).await?))
}

#[tracing::instrument(skip(state, preferences), fields(user_id = %user.id))]
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(preferences): JsonBody<UserPreferences>,
) -> AppResult<Json<UserPreferences>> {
    state.preferences.save(&user.id, &preferences).await?;

    Ok(Json(preferences))
}
