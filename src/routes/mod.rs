use axum::{
    Router,
    routing::{get, post, put},
};
use sqlx::SqlitePool;

mod favorites;
mod health;
mod preferences;
mod recipes;
mod shopping;

#[derive(Clone)]
pub struct AppState {
    pub recipe_command: recetario_recipe::Command,
    pub recipe_query: recetario_recipe::Query,
    pub preferences: recetario_user::PreferenceStore,
    pub shopping_command: recetario_shopping::Command,
    pub shopping_query: recetario_shopping::Query,
    pub recent_searches_limit: usize,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool, recent_searches_limit: usize) -> Self {
        Self {
            recipe_command: recetario_recipe::Command(pool.clone()),
            recipe_query: recetario_recipe::Query(pool.clone()),
            preferences: recetario_user::PreferenceStore(pool.clone()),
            shopping_command: recetario_shopping::Command(pool.clone()),
            shopping_query: recetario_shopping::Query(pool.clone()),
            recent_searches_limit,
            pool,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no user required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/recipes", get(recipes::list).post(recipes::create))
        .route("/recipes/recommended", get(recipes::recommended))
        .route(
            "/recipes/{id}",
            get(recipes::show)
                .put(recipes::update)
                .delete(recipes::delete),
        )
        .route(
            "/preferences",
            get(preferences::show).put(preferences::update),
        )
        .route("/favorites", get(favorites::list))
        .route(
            "/favorites/{recipe_id}",
            put(favorites::add).delete(favorites::remove),
        )
        .route("/shopping", get(shopping::list).post(shopping::add))
        .route("/shopping/clear-checked", post(shopping::clear_checked))
        .route("/shopping/recipes/{recipe_id}", post(shopping::add_recipe))
        .route("/shopping/{id}", axum::routing::delete(shopping::remove))
        .route("/shopping/{id}/toggle", post(shopping::toggle))
        .with_state(app_state)
}
