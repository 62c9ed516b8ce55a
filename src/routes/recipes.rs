use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use recetario_recipe::{
    Recipe, RecipeInput, Region, ScoredRecipe, SearchQuery, recommend_scored, search,
};
use serde::Deserialize;

use crate::{
    auth::AuthUser,
    error::{AppResult, not_found},
    extract::{JsonBody, QueryParams},
    routes::AppState,
};

#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Recipe>>> {
    Ok(Json(state.recipe_query.list().await?))
}

#[tracing::instrument(skip(state, input))]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RecipeInput>,
) -> AppResult<(StatusCode, Json<Recipe>)> {
    let recipe = state.recipe_command.create(input).await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

#[tracing::instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Recipe>> {
    match state.recipe_query.find(&id).await? {
        Some(recipe) => Ok(Json(recipe)),
        None => Err(not_found(format!("recipe {id}"))),
    }
}

#[tracing::instrument(skip(state, input))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<RecipeInput>,
) -> AppResult<Json<Recipe>> {
    Ok(Json(state.recipe_command.update(id, input).await?))
}

#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.recipe_command.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct RecommendedParams {
    pub q: Option<String>,
    pub region: Option<Region>,
}

/// Catalog narrowed by the search, filtered by the caller's restrictions and
/// ranked by their preferences. A non-blank `q` is recorded as a recent search.
#[tracing::instrument(skip(state), fields(user_id = %user.id))]
pub async fn recommended(
    State(state): State<AppState>,
    user: AuthUser,
    QueryParams(params): QueryParams<RecommendedParams>,
) -> AppResult<Json<Vec<ScoredRecipe>>> {
    let query = SearchQuery {
        text: params.q,
        region: params.region,
    };

    let preferences = match query.text.as_deref() {
        Some(text) if query.term().is_some() => {
            state
                .preferences
                .record_search(&user.id, text, state.recent_searches_limit)
                .await?
        }
        _ => state.preferences.load(&user.id).await?,
    };

    let recipes = state.recipe_query.list().await?;
    let candidates = search(&recipes, &query);

    Ok(Json(recommend_scored(&candidates, &preferences)))
}
