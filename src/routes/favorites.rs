use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use recetario_recipe::Recipe;

use crate::{
    auth::AuthUser,
    error::{AppResult, not_found},
    routes::AppState,
};

/// Favorite recipes, most recently added first. Favorites whose recipe was
/// deleted are skipped.
#[tracing::instrument(skip(state), fields(user_id = %user.id))]
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Recipe>>> {
    let mut recipes = Vec::new();

    for recipe_id in state.preferences.favorites(&user.id).await? {
        if let Some(recipe) = state.recipe_query.find(&recipe_id).await? {
            recipes.push(recipe);
        }
    }

    Ok(Json(recipes))
}

#[tracing::instrument(skip(state), fields(user_id = %user.id))]
pub async fn add(
    State(state): State<AppState>,
    user: AuthUser,
    Path(recipe_id): Path<String>,
) -> AppResult<StatusCode> {
    if !state.recipe_query.exists(&recipe_id).await? {
        return Err(not_found(format!("recipe {recipe_id}")));
    }

    state.preferences.add_favorite(&user.id, &recipe_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[tracing::instrument(skip(state), fields(user_id = %user.id))]
pub async fn remove(
    State(state): State<AppState>,
    user: AuthUser,
    Path(recipe_id): Path<String>,
) -> AppResult<StatusCode> {
    state.preferences.remove_favorite(&user.id, &recipe_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
