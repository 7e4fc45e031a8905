use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresenterError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to load scores for plotting: {0}")]
    Database(#[from] database::DbError),
}
