use recetario_db::table::Recipe as RecipeTable;
use recetario_shared::recipe::{Recipe, Region, TextList};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow, types::Json};

#[derive(FromRow)]
pub struct RecipeRow {
    pub id: String,
    pub nombre: String,
    pub region: sqlx::types::Text<Region>,
    pub ingredientes: Option<Json<TextList>>,
    pub dificultad: String,
    pub etiquetas: Option<Json<TextList>>,
    pub descripcion: Option<String>,
    pub pasos: Option<Json<serde_json::Value>>,
    pub nutricion: Option<Json<serde_json::Value>>,
    pub video: Option<String>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Self {
            id: row.id,
            nombre: row.nombre,
            region: row.region.0,
            ingredientes: row.ingredientes.map(|v| v.0),
            dificultad: row.dificultad,
            etiquetas: row.etiquetas.map(|v| v.0),
            descripcion: row.descripcion,
            pasos: row.pasos.map(|v| v.0),
            nutricion: row.nutricion.map(|v| v.0),
            video: row.video,
        }
    }
}

fn columns() -> [RecipeTable; 10] {
    [
        RecipeTable::Id,
        RecipeTable::Nombre,
        RecipeTable::Region,
        RecipeTable::Ingredientes,
        RecipeTable::Dificultad,
        RecipeTable::Etiquetas,
        RecipeTable::Descripcion,
        RecipeTable::Pasos,
        RecipeTable::Nutricion,
        RecipeTable::Video,
    ]
}

/// Read side of the recipe catalog.
#[derive(Clone)]
pub struct Query(pub SqlitePool);

impl Query {
    pub async fn find(&self, id: impl AsRef<str>) -> recetario_shared::Result<Option<Recipe>> {
        let (sql, values) = sea_query::Query::select()
            .columns(columns())
            .from(RecipeTable::Table)
            .and_where(Expr::col(RecipeTable::Id).eq(id.as_ref()))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        let row = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Every recipe, oldest first.
    pub async fn list(&self) -> recetario_shared::Result<Vec<Recipe>> {
        let (sql, values) = sea_query::Query::select()
            .columns(columns())
            .from(RecipeTable::Table)
            .order_by(RecipeTable::CreatedAt, Order::Asc)
            .order_by_expr(Expr::cust("rowid"), Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn exists(&self, id: impl AsRef<str>) -> recetario_shared::Result<bool> {
        let (sql, values) = sea_query::Query::select()
            .expr(Expr::val(1))
            .from(RecipeTable::Table)
            .and_where(Expr::col(RecipeTable::Id).eq(id.as_ref()))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        let row = sqlx::query_with(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.is_some())
    }
}
