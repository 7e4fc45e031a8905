use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Database error: {0}")]
    Database(#[from] database::DbError),

    #[error("Statistics for player {external_id} could not be computed: {source}")]
    Calculation {
        external_id: i64,
        #[source]
        source: analytics::AnalyticsError,
    },
}
