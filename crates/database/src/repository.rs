use crate::DbError;
use crate::source::ScoreSource;
use async_trait::async_trait;
use core_types::{PlayerIdentity, ScoreRecord};
use sqlx::FromRow;
use sqlx::postgres::PgPool;

/// The `DbRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

// This struct represents a row fetched from the player_ids table.
#[derive(FromRow, Debug, Clone)]
struct DbPlayerIdentity {
    first_name: String,
    last_name: String,
    rguru_id: i64,
}

impl From<DbPlayerIdentity> for PlayerIdentity {
    fn from(row: DbPlayerIdentity) -> Self {
        Self {
            first_name: row.first_name,
            last_name: row.last_name,
            external_id: row.rguru_id,
        }
    }
}

impl DbRepository {
    /// Creates a new `DbRepository` over an established connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScoreSource for DbRepository {
    async fn list_identities(&self) -> Result<Vec<PlayerIdentity>, DbError> {
        let rows = sqlx::query_as::<_, DbPlayerIdentity>(
            r#"
            SELECT
                COALESCE(first_name, '') AS first_name,
                COALESCE(last_name, '') AS last_name,
                rguru_id::int8 AS rguru_id
            FROM player_ids
            WHERE rguru_id IS NOT NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = rows.len(), "Loaded player identities.");
        Ok(rows.into_iter().map(PlayerIdentity::from).collect())
    }

    async fn list_scores(&self, external_id: i64) -> Result<Vec<ScoreRecord>, DbError> {
        let scores = sqlx::query_scalar::<_, Option<f64>>(
            "SELECT dk_pts::float8 FROM rguru_hitters WHERE id = $1",
        )
        .bind(external_id)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(external_id, count = scores.len(), "Loaded score history.");
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_rows_map_external_id() {
        let row = DbPlayerIdentity {
            first_name: "Mike".to_string(),
            last_name: "Trout".to_string(),
            rguru_id: 10155,
        };
        let identity = PlayerIdentity::from(row);
        assert_eq!(identity.first_name, "Mike");
        assert_eq!(identity.last_name, "Trout");
        assert_eq!(identity.external_id, 10155);
    }
}
