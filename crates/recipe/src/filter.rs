use recetario_shared::{recipe::Recipe, user::UserPreferences};

use crate::{active_restrictions, normalize::normalized_ingredients, restriction::allowed_under_all};

/// Keeps the recipes that satisfy every active restriction in `preferences`.
///
/// The relative order of surviving recipes is unchanged. With no
/// restrictions (or only unknown labels) the input is returned as-is.
pub fn filter_recipes(recipes: &[Recipe], preferences: &UserPreferences) -> Vec<Recipe> {
    let active = active_restrictions(&preferences.restricciones);

    if active.is_empty() {
        return recipes.to_vec();
    }

    let filtered: Vec<Recipe> = recipes
        .iter()
        .filter(|recipe| allowed_under_all(&normalized_ingredients(recipe), &active))
        .cloned()
        .collect();

    tracing::debug!(
        input = recipes.len(),
        kept = filtered.len(),
        restrictions = ?active,
        "filtered recipes by dietary restrictions"
    );

    filtered
}
