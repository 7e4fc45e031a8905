use crate::error::DbError;
use async_trait::async_trait;
use core_types::{PlayerIdentity, ScoreRecord};

/// The read operations the report needs from its data source.
///
/// `DbRepository` implements this against PostgreSQL; tests implement it in memory.
#[async_trait]
pub trait ScoreSource: Send + Sync {
    /// Lists every player that has an external id, in store order.
    async fn list_identities(&self) -> Result<Vec<PlayerIdentity>, DbError>;

    /// Lists every historical score recorded for one player, nulls included.
    async fn list_scores(&self, external_id: i64) -> Result<Vec<ScoreRecord>, DbError>;
}
