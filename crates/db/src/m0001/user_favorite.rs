use sea_query::{ColumnDef, Index, Table, TableCreateStatement, TableDropStatement};

use crate::table::UserFavorite;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(UserFavorite::Table)
        .col(
            ColumnDef::new(UserFavorite::UserId)
                .string()
                .not_null()
                .string_len(64),
        )
        .col(
            ColumnDef::new(UserFavorite::RecipeId)
                .string()
                .not_null()
                .string_len(64),
        )
        .col(
            ColumnDef::new(UserFavorite::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .primary_key(
            Index::create()
                .col(UserFavorite::UserId)
                .col(UserFavorite::RecipeId),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(UserFavorite::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
