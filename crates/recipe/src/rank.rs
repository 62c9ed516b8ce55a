use recetario_shared::{recipe::Recipe, user::UserPreferences};
use serde::Serialize;

use crate::{
    normalize::normalized_ingredients,
    score::{favorite_terms, score_normalized},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecipe {
    pub score: u32,
    #[serde(flatten)]
    pub recipe: Recipe,
}

/// Sorts recipes by descending relevance score.
///
/// The sort is stable: recipes with equal scores keep their input order.
pub fn rank_recipes(recipes: &[Recipe], preferences: &UserPreferences) -> Vec<Recipe> {
    rank_scored(recipes, preferences)
        .into_iter()
        .map(|scored| scored.recipe)
        .collect()
}

/// Like [`rank_recipes`] but keeps each recipe's score.
pub fn rank_scored(recipes: &[Recipe], preferences: &UserPreferences) -> Vec<ScoredRecipe> {
    let favorites = favorite_terms(&preferences.ingredientes_favoritos);

    let scored = recipes
        .iter()
        .map(|recipe| ScoredRecipe {
            score: score_normalized(
                &normalized_ingredients(recipe),
                &recipe.dificultad,
                &favorites,
                &preferences.difficulty,
            ),
            recipe: recipe.clone(),
        })
        .collect();

    sort_by_score(scored)
}

pub(crate) fn sort_by_score(mut scored: Vec<ScoredRecipe>) -> Vec<ScoredRecipe> {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}
