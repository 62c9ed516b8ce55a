use recetario_shared::{
    recipe::{DIFFICULTY_ADVANCED, DIFFICULTY_EASY, DIFFICULTY_INTERMEDIATE, Recipe},
    user::{DifficultyFlags, UserPreferences},
};

use crate::normalize::normalized_ingredients;

pub const FAVORITE_INGREDIENT_POINTS: u32 = 10;
pub const DIFFICULTY_POINTS: u32 = 5;

/// Relevance of `recipe` for `preferences`.
///
/// Each distinct favorite ingredient contained (case-insensitively) in any of
/// the recipe's ingredients adds [`FAVORITE_INGREDIENT_POINTS`]. Each enabled
/// difficulty flag whose label equals the recipe's `dificultad` exactly adds
/// [`DIFFICULTY_POINTS`].
///
/// The favorite set is taken after trimming and case-folding, so `"Papa"` and
/// `"papa"` are one favorite.
pub fn score_recipe(recipe: &Recipe, preferences: &UserPreferences) -> u32 {
    let favorites = favorite_terms(&preferences.ingredientes_favoritos);

    score_normalized(
        &normalized_ingredients(recipe),
        &recipe.dificultad,
        &favorites,
        &preferences.difficulty,
    )
}

/// Lowercased, trimmed, de-duplicated favorites; blank entries are ignored.
pub(crate) fn favorite_terms(favorites: &[String]) -> Vec<String> {
    let mut terms: Vec<String> = Vec::with_capacity(favorites.len());

    for favorite in favorites {
        let term = favorite.trim().to_lowercase();
        if !term.is_empty() && !terms.contains(&term) {
            terms.push(term);
        }
    }

    terms
}

pub(crate) fn score_normalized(
    ingredients: &[String],
    dificultad: &str,
    favorites: &[String],
    difficulty: &DifficultyFlags,
) -> u32 {
    let favorite_matches = favorites
        .iter()
        .filter(|favorite| {
            ingredients
                .iter()
                .any(|ingredient| ingredient.contains(favorite.as_str()))
        })
        .count() as u32;

    favorite_matches * FAVORITE_INGREDIENT_POINTS + difficulty_bonus(dificultad, difficulty)
}

fn difficulty_bonus(dificultad: &str, difficulty: &DifficultyFlags) -> u32 {
    [
        (difficulty.facil, DIFFICULTY_EASY),
        (difficulty.intermedio, DIFFICULTY_INTERMEDIATE),
        (difficulty.avanzado, DIFFICULTY_ADVANCED),
    ]
    .into_iter()
    .filter(|(enabled, label)| *enabled && dificultad == *label)
    .count() as u32
        * DIFFICULTY_POINTS
}
