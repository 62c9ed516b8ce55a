use recetario_shared::{recipe::Recipe, user::UserPreferences};

use crate::{
    active_restrictions,
    normalize::normalized_ingredients,
    rank::{ScoredRecipe, sort_by_score},
    restriction::allowed_under_all,
    score::{favorite_terms, score_normalized},
};

/// `rank_recipes(&filter_recipes(recipes, preferences), preferences)`,
/// normalizing each recipe's ingredients only once.
pub fn recommend(recipes: &[Recipe], preferences: &UserPreferences) -> Vec<Recipe> {
    recommend_scored(recipes, preferences)
        .into_iter()
        .map(|scored| scored.recipe)
        .collect()
}

pub fn recommend_scored(recipes: &[Recipe], preferences: &UserPreferences) -> Vec<ScoredRecipe> {
    let active = active_restrictions(&preferences.restricciones);
    let favorites = favorite_terms(&preferences.ingredientes_favoritos);

    let candidates: Vec<ScoredRecipe> = recipes
        .iter()
        .filter_map(|recipe| {
            let ingredients = normalized_ingredients(recipe);

            if !allowed_under_all(&ingredients, &active) {
                tracing::trace!(recipe_id = %recipe.id, "recipe excluded by restrictions");
                return None;
            }

            Some(ScoredRecipe {
                score: score_normalized(
                    &ingredients,
                    &recipe.dificultad,
                    &favorites,
                    &preferences.difficulty,
                ),
                recipe: recipe.clone(),
            })
        })
        .collect();

    tracing::debug!(
        input = recipes.len(),
        kept = candidates.len(),
        "recommended recipes"
    );

    sort_by_score(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{filter_recipes, rank_recipes};
    use recetario_shared::{
        recipe::{Region, TextList},
        user::DifficultyFlags,
    };

    fn recipe(id: &str, ingredientes: TextList, dificultad: &str) -> Recipe {
        Recipe {
            id: id.to_owned(),
            nombre: id.to_owned(),
            region: Region::Altiplano,
            ingredientes: Some(ingredientes),
            dificultad: dificultad.to_owned(),
            etiquetas: None,
            descripcion: None,
            pasos: None,
            nutricion: None,
            video: None,
        }
    }

    fn catalog() -> Vec<Recipe> {
        vec![
            recipe("lomo", vec!["Carne de res", "Papa"].into(), "Intermedio"),
            recipe("causa", "Papa amarilla, Limón, Palta".into(), "Fácil"),
            recipe("pachamanca", vec!["Cerdo", "Pollo", "Papa"].into(), "Avanzado"),
            recipe("humitas", vec!["Choclo", "Mantequilla"].into(), "Intermedio"),
        ]
    }

    #[test]
    fn matches_filter_then_rank() {
        let preferences = UserPreferences {
            ingredientes_favoritos: vec!["Papa".to_owned(), "Pollo".to_owned()],
            difficulty: DifficultyFlags {
                facil: true,
                intermedio: true,
                avanzado: false,
            },
            restricciones: vec!["Sin lactosa".to_owned()],
            ..Default::default()
        };
        let recipes = catalog();

        assert_eq!(
            recommend(&recipes, &preferences),
            rank_recipes(&filter_recipes(&recipes, &preferences), &preferences)
        );
    }

    #[test]
    fn excluded_recipe_is_never_readmitted_by_its_score() {
        let preferences = UserPreferences {
            ingredientes_favoritos: vec!["Cerdo".to_owned(), "Pollo".to_owned(), "Papa".to_owned()],
            difficulty: DifficultyFlags {
                facil: false,
                intermedio: false,
                avanzado: true,
            },
            restricciones: vec!["Vegetariano".to_owned()],
            ..Default::default()
        };

        let recommended = recommend_scored(&catalog(), &preferences);
        let ids: Vec<&str> = recommended.iter().map(|s| s.recipe.id.as_str()).collect();

        assert_eq!(ids, vec!["causa", "humitas"]);
        assert_eq!(recommended[0].score, 10);
        assert_eq!(recommended[1].score, 0);
    }

    #[test]
    fn identical_ingredients_in_either_shape_score_identically() {
        let preferences = UserPreferences {
            ingredientes_favoritos: vec!["Cebolla".to_owned()],
            restricciones: vec!["Sin gluten".to_owned()],
            ..Default::default()
        };
        let recipes = vec![
            recipe("joined", "Carne de res, Papa, Cebolla".into(), "Fácil"),
            recipe("items", vec!["Carne de res", "Papa", "Cebolla"].into(), "Fácil"),
        ];

        let recommended = recommend_scored(&recipes, &preferences);

        assert_eq!(recommended.len(), 2);
        assert_eq!(recommended[0].score, recommended[1].score);
        assert_eq!(recommended[0].recipe.id, "joined");
    }

    #[test]
    fn no_preferences_keeps_catalog_order() {
        let preferences = UserPreferences {
            difficulty: DifficultyFlags::default(),
            ..Default::default()
        };

        let ids: Vec<String> = recommend(&catalog(), &preferences)
            .into_iter()
            .map(|r| r.id)
            .collect();

        assert_eq!(ids, vec!["lomo", "causa", "pachamanca", "humitas"]);
    }
}
