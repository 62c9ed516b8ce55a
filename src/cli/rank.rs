use anyhow::{Context, Result};
use recetario_recipe::{Recipe, ScoredRecipe, UserPreferences, recommend_scored};
use std::path::Path;

/// Runs filter and rank over a JSON recipe array, with optional stored
/// preferences, and returns the ranked recipes.
pub fn rank_files(recipes: &Path, preferences: Option<&Path>) -> Result<Vec<ScoredRecipe>> {
    let content = std::fs::read_to_string(recipes)
        .with_context(|| format!("reading {}", recipes.display()))?;
    let recipes: Vec<Recipe> = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", recipes.display()))?;

    let preferences = match preferences {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<UserPreferences>(&content)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => UserPreferences::default(),
    };

    Ok(recommend_scored(&recipes, &preferences))
}

/// `score<TAB>id<TAB>nombre`
pub fn format_ranked(ranked: &[ScoredRecipe]) -> String {
    ranked
        .iter()
        .map(|scored| {
            format!(
                "{}\t{}\t{}\n",
                scored.score, scored.recipe.id, scored.recipe.nombre
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_recipe_and_preference_files() {
        let dir = temp_dir::TempDir::new().unwrap();
        let recipes = dir.child("recipes.json");
        let preferences = dir.child("preferences.json");

        std::fs::write(
            &recipes,
            r#"[
                {"id": 1, "nombre": "Lomo saltado", "ingredientes": "Carne de res, Papa", "dificultad": "Intermedio"},
                {"id": "2", "nombre": "Causa", "ingredientes": ["Papa amarilla", "Limón"], "dificultad": "Fácil"},
                {"id": 3, "nombre": "Solterito", "ingredientes": null, "dificultad": "Fácil"}
            ]"#,
        )
        .unwrap();
        std::fs::write(
            &preferences,
            r#"{"ingredientesFavoritos": ["papa"], "restricciones": ["Vegetariano"]}"#,
        )
        .unwrap();

        let ranked = rank_files(&recipes, Some(preferences.as_path())).unwrap();

        assert_eq!(format_ranked(&ranked), "15\t2\tCausa\n5\t3\tSolterito\n");
    }

    #[test]
    fn missing_preferences_file_uses_defaults() {
        let dir = temp_dir::TempDir::new().unwrap();
        let recipes = dir.child("recipes.json");
        std::fs::write(
            &recipes,
            r#"[{"id": 1, "nombre": "Pachamanca", "dificultad": "Avanzado"},
                {"id": 2, "nombre": "Humitas", "dificultad": "Fácil"}]"#,
        )
        .unwrap();

        let ranked = rank_files(&recipes, None).unwrap();

        assert_eq!(format_ranked(&ranked), "5\t2\tHumitas\n0\t1\tPachamanca\n");
        assert!(rank_files(&dir.child("nope.json"), None).is_err());
    }
}
