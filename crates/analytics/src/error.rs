use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Not enough data to perform calculation: {0}")]
    NotEnoughData(String),

    #[error("Sample contains a non-finite value: {0}")]
    NonFiniteValue(f64),

    #[error("Failed to convert statistic '{0}' to a decimal")]
    Conversion(String),
}
