use recetario_db::table::UserPreference;
use recetario_shared::user::UserPreferences;
use sea_query::{Expr, ExprTrait, OnConflict, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow, sqlite::SqliteExecutor, types::Json};
use time::OffsetDateTime;

use crate::push_recent_search;

#[derive(FromRow)]
struct PreferenceRow {
    data: Json<UserPreferences>,
}

/// Stored preferences and favorites, keyed by user id.
#[derive(Clone)]
pub struct PreferenceStore(pub SqlitePool);

impl PreferenceStore {
    /// Stored preferences, or the defaults when the user has none yet.
    pub async fn load(&self, user_id: impl AsRef<str>) -> recetario_shared::Result<UserPreferences> {
        Ok(fetch(&self.0, user_id.as_ref()).await?.unwrap_or_default())
    }

    pub async fn save(
        &self,
        user_id: impl AsRef<str>,
        preferences: &UserPreferences,
    ) -> recetario_shared::Result<()> {
        upsert(&self.0, user_id.as_ref(), preferences, true).await?;

        tracing::debug!(user_id = user_id.as_ref(), "preferences saved");

        Ok(())
    }

    /// Pushes `term` onto the user's recent searches and persists the result.
    ///
    /// Runs in one transaction that writes before it reads, so concurrent
    /// searches by the same user queue on the SQLite write lock.
    pub async fn record_search(
        &self,
        user_id: impl AsRef<str>,
        term: &str,
        limit: usize,
    ) -> recetario_shared::Result<UserPreferences> {
        let user_id = user_id.as_ref();
        let mut tx = self.0.begin().await?;

        upsert(&mut *tx, user_id, &UserPreferences::default(), false).await?;
        let mut preferences = fetch(&mut *tx, user_id).await?.unwrap_or_default();

        if push_recent_search(&mut preferences.ultimas_busquedas, term, limit) {
            upsert(&mut *tx, user_id, &preferences, true).await?;
        }

        tx.commit().await?;

        Ok(preferences)
    }
}

async fn fetch<'e>(
    executor: impl SqliteExecutor<'e>,
    user_id: &str,
) -> recetario_shared::Result<Option<UserPreferences>> {
    let (sql, values) = sea_query::Query::select()
        .column(UserPreference::Data)
        .from(UserPreference::Table)
        .and_where(Expr::col(UserPreference::UserId).eq(user_id))
        .limit(1)
        .build_sqlx(SqliteQueryBuilder);

    let row = sqlx::query_as_with::<_, PreferenceRow, _>(&sql, values)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(|row| row.data.0))
}

/// Inserts the row; an existing row is overwritten only when `overwrite` is set.
async fn upsert<'e>(
    executor: impl SqliteExecutor<'e>,
    user_id: &str,
    preferences: &UserPreferences,
    overwrite: bool,
) -> recetario_shared::Result<()> {
    let on_conflict = if overwrite {
        OnConflict::column(UserPreference::UserId)
            .update_columns([UserPreference::Data, UserPreference::UpdatedAt])
            .to_owned()
    } else {
        OnConflict::column(UserPreference::UserId)
            .do_nothing()
            .to_owned()
    };

    let (sql, values) = sea_query::Query::insert()
        .into_table(UserPreference::Table)
        .columns([
            UserPreference::UserId,
            UserPreference::Data,
            UserPreference::UpdatedAt,
        ])
        .values_panic([
            user_id.into(),
            serde_json::to_string(preferences)?.into(),
            OffsetDateTime::now_utc().unix_timestamp().into(),
        ])
        .on_conflict(on_conflict)
        .build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(executor).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn store() -> PreferenceStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(":memory:")
            .await
            .unwrap();
        recetario_db::migrate(&pool).await.unwrap();

        PreferenceStore(pool)
    }

    #[tokio::test]
    async fn first_use_returns_defaults() {
        let preferences = store().await.load("ana").await.unwrap();

        assert_eq!(preferences, UserPreferences::default());
        assert!(preferences.difficulty.facil);
    }

    #[tokio::test]
    async fn save_overwrites_previous_value() {
        let store = store().await;
        let mut preferences = UserPreferences {
            ingredientes_favoritos: vec!["Papa".to_owned()],
            ..Default::default()
        };

        store.save("ana", &preferences).await.unwrap();
        preferences.restricciones = vec!["Vegano".to_owned()];
        store.save("ana", &preferences).await.unwrap();

        assert_eq!(store.load("ana").await.unwrap(), preferences);
        assert_eq!(store.load("luis").await.unwrap(), UserPreferences::default());
    }

    #[tokio::test]
    async fn record_search_persists_recency_list() {
        let store = store().await;

        store.record_search("ana", "ceviche", 2).await.unwrap();
        store.record_search("ana", "lomo", 2).await.unwrap();
        store.record_search("ana", "  ", 2).await.unwrap();
        let preferences = store.record_search("ana", "Ceviche", 2).await.unwrap();

        assert_eq!(preferences.ultimas_busquedas, vec!["Ceviche", "lomo"]);
        assert_eq!(
            store.load("ana").await.unwrap().ultimas_busquedas,
            vec!["Ceviche", "lomo"]
        );
    }

    #[tokio::test]
    async fn concurrent_searches_are_all_recorded() {
        let dir = temp_dir::TempDir::new().unwrap();
        let options = sqlx::sqlite::SqliteConnectOptions::new()
            .filename(dir.child("db.sqlite3"))
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await
            .unwrap();
        recetario_db::migrate(&pool).await.unwrap();
        let store = PreferenceStore(pool);

        let terms = ["ceviche", "lomo", "causa", "juane", "rocoto", "anticucho"];
        let handles: Vec<_> = terms
            .into_iter()
            .map(|term| {
                let store = store.clone();
                tokio::spawn(async move { store.record_search("ana", term, 10).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let mut recorded = store.load("ana").await.unwrap().ultimas_busquedas;
        recorded.sort();
        let mut expected: Vec<String> = terms.iter().map(|t| t.to_string()).collect();
        expected.sort();

        assert_eq!(recorded, expected);
    }
}
