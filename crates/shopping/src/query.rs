use recetario_db::table::ShoppingItem as ShoppingItemTable;
use recetario_shared::shopping::ShoppingItem;
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(FromRow)]
pub struct ShoppingItemRow {
    pub id: String,
    pub nombre: String,
    pub cantidad: Option<String>,
    pub checked: bool,
}

impl From<ShoppingItemRow> for ShoppingItem {
    fn from(row: ShoppingItemRow) -> Self {
        Self {
            id: row.id,
            nombre: row.nombre,
            cantidad: row.cantidad,
            checked: row.checked,
        }
    }
}

#[derive(Clone)]
pub struct Query(pub SqlitePool);

impl Query {
    /// The user's items in the order they were added.
    pub async fn list(&self, user_id: impl AsRef<str>) -> recetario_shared::Result<Vec<ShoppingItem>> {
        let (sql, values) = sea_query::Query::select()
            .columns([
                ShoppingItemTable::Id,
                ShoppingItemTable::Nombre,
                ShoppingItemTable::Cantidad,
                ShoppingItemTable::Checked,
            ])
            .from(ShoppingItemTable::Table)
            .and_where(Expr::col(ShoppingItemTable::UserId).eq(user_id.as_ref()))
            .order_by(ShoppingItemTable::CreatedAt, Order::Asc)
            .order_by_expr(Expr::cust("rowid"), Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, ShoppingItemRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn find(
        &self,
        user_id: impl AsRef<str>,
        id: impl AsRef<str>,
    ) -> recetario_shared::Result<Option<ShoppingItem>> {
        let (sql, values) = sea_query::Query::select()
            .columns([
                ShoppingItemTable::Id,
                ShoppingItemTable::Nombre,
                ShoppingItemTable::Cantidad,
                ShoppingItemTable::Checked,
            ])
            .from(ShoppingItemTable::Table)
            .and_where(Expr::col(ShoppingItemTable::UserId).eq(user_id.as_ref()))
            .and_where(Expr::col(ShoppingItemTable::Id).eq(id.as_ref()))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        let row = sqlx::query_as_with::<_, ShoppingItemRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.map(Into::into))
    }
}
