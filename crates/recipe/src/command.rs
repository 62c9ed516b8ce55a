use recetario_db::table::Recipe as RecipeTable;
use recetario_shared::recipe::{Recipe, Region, TextList, opt_id_from_text_or_number};
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

use crate::Query;

/// Payload accepted when creating or replacing a recipe.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RecipeInput {
    #[serde(default, deserialize_with = "opt_id_from_text_or_number")]
    #[validate(length(min = 1, max = 64))]
    pub id: Option<String>,
    #[validate(length(min = 1, max = 120))]
    pub nombre: String,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub ingredientes: Option<TextList>,
    #[serde(default)]
    #[validate(length(max = 25))]
    pub dificultad: String,
    #[serde(default)]
    pub etiquetas: Option<TextList>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub pasos: Option<serde_json::Value>,
    #[serde(default)]
    pub nutricion: Option<serde_json::Value>,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub video: Option<String>,
}

impl RecipeInput {
    fn trimmed(mut self) -> Self {
        self.nombre = self.nombre.trim().to_owned();
        self.id = self.id.map(|id| id.trim().to_owned());
        self
    }

    fn into_recipe(self, id: String) -> Recipe {
        Recipe {
            id,
            nombre: self.nombre,
            region: self.region,
            ingredientes: self.ingredientes,
            dificultad: self.dificultad,
            etiquetas: self.etiquetas,
            descripcion: self.descripcion,
            pasos: self.pasos,
            nutricion: self.nutricion,
            video: self.video,
        }
    }
}

impl From<Recipe> for RecipeInput {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: Some(recipe.id),
            nombre: recipe.nombre,
            region: recipe.region,
            ingredientes: recipe.ingredientes,
            dificultad: recipe.dificultad,
            etiquetas: recipe.etiquetas,
            descripcion: recipe.descripcion,
            pasos: recipe.pasos,
            nutricion: recipe.nutricion,
            video: recipe.video,
        }
    }
}

fn json<T: Serialize>(value: Option<&T>) -> recetario_shared::Result<Option<String>> {
    Ok(value.map(serde_json::to_string).transpose()?)
}

fn content_values(recipe: &Recipe) -> recetario_shared::Result<Vec<(RecipeTable, Expr)>> {
    Ok(vec![
        (RecipeTable::Nombre, recipe.nombre.clone().into()),
        (RecipeTable::Region, recipe.region.to_string().into()),
        (
            RecipeTable::Ingredientes,
            json(recipe.ingredientes.as_ref())?.into(),
        ),
        (RecipeTable::Dificultad, recipe.dificultad.clone().into()),
        (RecipeTable::Etiquetas, json(recipe.etiquetas.as_ref())?.into()),
        (RecipeTable::Descripcion, recipe.descripcion.clone().into()),
        (RecipeTable::Pasos, json(recipe.pasos.as_ref())?.into()),
        (RecipeTable::Nutricion, json(recipe.nutricion.as_ref())?.into()),
        (RecipeTable::Video, recipe.video.clone().into()),
    ])
}

/// Write side of the recipe catalog.
#[derive(Clone)]
pub struct Command(pub SqlitePool);

impl Command {
    pub async fn create(&self, input: RecipeInput) -> recetario_shared::Result<Recipe> {
        let mut input = input.trimmed();
        input.validate()?;

        let id = input.id.take().unwrap_or_else(|| Ulid::new().to_string());

        if Query(self.0.clone()).exists(&id).await? {
            recetario_shared::user!("recipe {id} already exists");
        }

        let recipe = input.into_recipe(id);
        let mut values = content_values(&recipe)?;
        values.push((RecipeTable::Id, recipe.id.clone().into()));
        values.push((
            RecipeTable::CreatedAt,
            OffsetDateTime::now_utc().unix_timestamp().into(),
        ));

        let (columns, values): (Vec<_>, Vec<_>) = values.into_iter().unzip();
        let (sql, values) = sea_query::Query::insert()
            .into_table(RecipeTable::Table)
            .columns(columns)
            .values_panic(values)
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.0).await?;

        tracing::info!(recipe_id = %recipe.id, "recipe created");

        Ok(recipe)
    }

    /// Replaces every field of an existing recipe. Any id in `input` is
    /// ignored in favour of `id`.
    pub async fn update(
        &self,
        id: impl Into<String>,
        input: RecipeInput,
    ) -> recetario_shared::Result<Recipe> {
        let input = input.trimmed();
        input.validate()?;

        let recipe = input.into_recipe(id.into());

        let (sql, values) = sea_query::Query::update()
            .table(RecipeTable::Table)
            .values(content_values(&recipe)?)
            .and_where(Expr::col(RecipeTable::Id).eq(&recipe.id))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;
        if result.rows_affected() == 0 {
            recetario_shared::not_found!("recipe {}", recipe.id);
        }

        tracing::info!(recipe_id = %recipe.id, "recipe updated");

        Ok(recipe)
    }

    pub async fn delete(&self, id: impl AsRef<str>) -> recetario_shared::Result<()> {
        let id = id.as_ref();

        let (sql, values) = sea_query::Query::delete()
            .from_table(RecipeTable::Table)
            .and_where(Expr::col(RecipeTable::Id).eq(id))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;
        if result.rows_affected() == 0 {
            recetario_shared::not_found!("recipe {id}");
        }

        tracing::info!(recipe_id = %id, "recipe deleted");

        Ok(())
    }
}
