use crate::enums::Ratio;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single historical fantasy score. `None` when the provider recorded no value.
pub type ScoreRecord = Option<f64>;

/// A row from the player identity table. Only players with an external id are loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub first_name: String,
    pub last_name: String,
    /// The id linking this player to the external scoring provider.
    pub external_id: i64,
}

/// Consistency statistics for one qualifying player.
///
/// Computed fresh on every run and never persisted. All decimal fields are
/// rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatSummary {
    pub first_name: String,
    pub last_name: String,
    pub external_id: i64,
    pub mean: Decimal,
    pub stdev: Decimal,
    pub ratio: Ratio,
}

impl PlayerStatSummary {
    pub fn from_identity(identity: PlayerIdentity, mean: Decimal, stdev: Decimal, ratio: Ratio) -> Self {
        Self {
            first_name: identity.first_name,
            last_name: identity.last_name,
            external_id: identity.external_id,
            mean,
            stdev,
            ratio,
        }
    }
}
