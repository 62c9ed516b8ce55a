use recetario_shared::recipe::{Recipe, Region};
use serde::Deserialize;

use crate::normalize::{normalized_ingredients, normalized_tags};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchQuery {
    pub text: Option<String>,
    pub region: Option<Region>,
}

impl SearchQuery {
    /// Trimmed, lowercased search text, or `None` when blank.
    pub fn term(&self) -> Option<String> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_lowercase)
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_with(recipe, self.term().as_deref())
    }

    fn matches_with(&self, recipe: &Recipe, term: Option<&str>) -> bool {
        self.region.is_none_or(|region| region == recipe.region)
            && term.is_none_or(|term| matches_term(recipe, term))
    }
}

fn matches_term(recipe: &Recipe, term: &str) -> bool {
    recipe.nombre.to_lowercase().contains(term)
        || normalized_ingredients(recipe)
            .iter()
            .any(|ingredient| ingredient.contains(term))
        || normalized_tags(recipe).iter().any(|tag| tag.contains(term))
}

/// Recipes matching `query`, in their original order.
pub fn search(recipes: &[Recipe], query: &SearchQuery) -> Vec<Recipe> {
    let term = query.term();

    recipes
        .iter()
        .filter(|recipe| query.matches_with(recipe, term.as_deref()))
        .cloned()
        .collect()
}
