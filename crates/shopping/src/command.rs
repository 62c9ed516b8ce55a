use recetario_db::table::ShoppingItem as ShoppingItemTable;
use recetario_recipe::{Recipe, normalized_ingredients};
use recetario_shared::shopping::ShoppingItem;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;
use time::OffsetDateTime;
use ulid::Ulid;

use crate::{Query, item_key};

const MAX_NAME_LEN: usize = 120;
const MAX_QUANTITY_LEN: usize = 50;

#[derive(Clone)]
pub struct Command(pub SqlitePool);

impl Command {
    fn query(&self) -> Query {
        Query(self.0.clone())
    }

    /// Adds an item to the user's list. When an unchecked item with the same
    /// name is already there, that item is returned unchanged instead.
    pub async fn add(
        &self,
        user_id: impl AsRef<str>,
        nombre: &str,
        cantidad: Option<&str>,
    ) -> recetario_shared::Result<ShoppingItem> {
        let user_id = user_id.as_ref();
        let nombre = nombre.trim();

        if nombre.is_empty() {
            recetario_shared::user!("item name is required");
        }

        if nombre.chars().count() > MAX_NAME_LEN {
            recetario_shared::user!("item name is longer than {MAX_NAME_LEN} characters");
        }

        let cantidad = cantidad
            .map(str::trim)
            .filter(|cantidad| !cantidad.is_empty())
            .map(str::to_owned);

        if cantidad
            .as_ref()
            .is_some_and(|cantidad| cantidad.chars().count() > MAX_QUANTITY_LEN)
        {
            recetario_shared::user!("quantity is longer than {MAX_QUANTITY_LEN} characters");
        }

        let key = item_key(nombre);
        if let Some(existing) = self
            .query()
            .list(user_id)
            .await?
            .into_iter()
            .find(|item| !item.checked && item_key(&item.nombre) == key)
        {
            tracing::debug!(item_id = %existing.id, "shopping item already listed");
            return Ok(existing);
        }

        let item = ShoppingItem {
            id: Ulid::new().to_string(),
            nombre: nombre.to_owned(),
            cantidad,
            checked: false,
        };

        let (sql, values) = sea_query::Query::insert()
            .into_table(ShoppingItemTable::Table)
            .columns([
                ShoppingItemTable::Id,
                ShoppingItemTable::UserId,
                ShoppingItemTable::Nombre,
                ShoppingItemTable::Cantidad,
                ShoppingItemTable::Checked,
                ShoppingItemTable::CreatedAt,
            ])
            .values_panic([
                item.id.clone().into(),
                user_id.into(),
                item.nombre.clone().into(),
                item.cantidad.clone().into(),
                false.into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(item)
    }

    /// Adds every ingredient of `recipe`, skipping those already listed.
    pub async fn add_recipe(
        &self,
        user_id: impl AsRef<str>,
        recipe: &Recipe,
    ) -> recetario_shared::Result<Vec<ShoppingItem>> {
        let user_id = user_id.as_ref();
        let mut items = Vec::new();

        for ingredient in normalized_ingredients(recipe) {
            let item = self.add(user_id, &ingredient, None).await?;
            if !items.contains(&item) {
                items.push(item);
            }
        }

        tracing::info!(recipe_id = %recipe.id, items = items.len(), "recipe added to shopping list");

        Ok(items)
    }

    pub async fn toggle(
        &self,
        user_id: impl AsRef<str>,
        id: impl AsRef<str>,
    ) -> recetario_shared::Result<ShoppingItem> {
        let user_id = user_id.as_ref();
        let id = id.as_ref();

        let Some(mut item) = self.query().find(user_id, id).await? else {
            recetario_shared::not_found!("shopping item {id}");
        };

        item.checked = !item.checked;

        let (sql, values) = sea_query::Query::update()
            .table(ShoppingItemTable::Table)
            .values([(ShoppingItemTable::Checked, item.checked.into())])
            .and_where(Expr::col(ShoppingItemTable::UserId).eq(user_id))
            .and_where(Expr::col(ShoppingItemTable::Id).eq(id))
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(item)
    }

    pub async fn remove(
        &self,
        user_id: impl AsRef<str>,
        id: impl AsRef<str>,
    ) -> recetario_shared::Result<()> {
        let id = id.as_ref();

        let (sql, values) = sea_query::Query::delete()
            .from_table(ShoppingItemTable::Table)
            .and_where(Expr::col(ShoppingItemTable::UserId).eq(user_id.as_ref()))
            .and_where(Expr::col(ShoppingItemTable::Id).eq(id))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;
        if result.rows_affected() == 0 {
            recetario_shared::not_found!("shopping item {id}");
        }

        Ok(())
    }

    /// Removes every checked item and returns how many were removed.
    pub async fn clear_checked(&self, user_id: impl AsRef<str>) -> recetario_shared::Result<u64> {
        let (sql, values) = sea_query::Query::delete()
            .from_table(ShoppingItemTable::Table)
            .and_where(Expr::col(ShoppingItemTable::UserId).eq(user_id.as_ref()))
            .and_where(Expr::col(ShoppingItemTable::Checked).eq(true))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(result.rows_affected())
    }
}
