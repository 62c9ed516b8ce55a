use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use recetario_shopping::ShoppingItem;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    auth::AuthUser,
    error::{AppResult, not_found},
    extract::JsonBody,
    routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct AddItemInput {
    pub nombre: String,
    #[serde(default)]
    pub cantidad: Option<String>,
}

#[tracing::instrument(skip(state), fields(user_id = %user.id))]
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<ShoppingItem>>> {
    Ok(Json(state.shopping_query.list(&user.id).await?))
}

#[tracing::instrument(skip(state, input), fields(user_id = %user.id))]
pub async fn add(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(input): JsonBody<AddItemInput>,
) -> AppResult<(StatusCode, Json<ShoppingItem>)> {
    let item = state
        .shopping_command
        .add(&user.id, &input.nombre, input.cantidad.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

#[tracing::instrument(skip(state), fields(user_id = %user.id))]
pub async fn toggle(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<ShoppingItem>> {
    Ok(Json(state.shopping_command.toggle(&user.id, &id).await?))
}

#[tracing::instrument(skip(state), fields(user_id = %user.id))]
pub async fn remove(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.shopping_command.remove(&user.id, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[tracing::instrument(skip(state), fields(user_id = %user.id))]
pub async fn clear_checked(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Value>> {
    let removed = state.shopping_command.clear_checked(&user.id).await?;

    Ok(Json(json!({"removed": removed})))
}

#[tracing::instrument(skip(state), fields(user_id = %user.id))]
pub async fn add_recipe(
    State(state): State<AppState>,
    user: AuthUser,
    Path(recipe_id): Path<String>,
) -> AppResult<Json<Vec<ShoppingItem>>> {
    let Some(recipe) = state.recipe_query.find(&recipe_id).await? else {
        return Err(not_found(format!("recipe {recipe_id}")));
    };

    Ok(Json(state.shopping_command.add_recipe(&user.id, &recipe).await?))
}
