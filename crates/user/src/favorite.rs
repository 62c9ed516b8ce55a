use recetario_db::table::UserFavorite;
use sea_query::{Expr, ExprTrait, OnConflict, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;

use crate::PreferenceStore;

impl PreferenceStore {
    /// Marks `recipe_id` as a favorite. Adding it twice keeps the first entry.
    pub async fn add_favorite(
        &self,
        user_id: impl AsRef<str>,
        recipe_id: impl AsRef<str>,
    ) -> recetario_shared::Result<()> {
        let (sql, values) = sea_query::Query::insert()
            .into_table(UserFavorite::Table)
            .columns([
                UserFavorite::UserId,
                UserFavorite::RecipeId,
                UserFavorite::CreatedAt,
            ])
            .values_panic([
                user_id.as_ref().into(),
                recipe_id.as_ref().into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .on_conflict(
                OnConflict::columns([UserFavorite::UserId, UserFavorite::RecipeId])
                    .do_nothing()
                    .to_owned(),
            )
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }

    pub async fn remove_favorite(
        &self,
        user_id: impl AsRef<str>,
        recipe_id: impl AsRef<str>,
    ) -> recetario_shared::Result<()> {
        let (sql, values) = sea_query::Query::delete()
            .from_table(UserFavorite::Table)
            .and_where(Expr::col(UserFavorite::UserId).eq(user_id.as_ref()))
            .and_where(Expr::col(UserFavorite::RecipeId).eq(recipe_id.as_ref()))
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }

    /// Favorite recipe ids, most recently added first.
    pub async fn favorites(&self, user_id: impl AsRef<str>) -> recetario_shared::Result<Vec<String>> {
        let (sql, values) = sea_query::Query::select()
            .column(UserFavorite::RecipeId)
            .from(UserFavorite::Table)
            .and_where(Expr::col(UserFavorite::UserId).eq(user_id.as_ref()))
            .order_by(UserFavorite::CreatedAt, Order::Desc)
            .order_by_expr(Expr::cust("rowid"), Order::Desc)
            .build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(|(recipe_id,)| recipe_id).collect())
    }
}
