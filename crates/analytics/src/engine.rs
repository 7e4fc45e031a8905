use crate::error::AnalyticsError;
use crate::report::{ConsistencyReport, SampleStatistics};
use core_types::Ratio;
use rust_decimal::Decimal;

/// Number of decimal places every published statistic carries.
const REPORTED_SCALE: u32 = 2;

/// A stateless calculator for player consistency statistics.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the mean and population standard deviation of a sample.
    ///
    /// # Arguments
    ///
    /// * `sample` - The non-null scores of one player.
    ///
    /// # Returns
    ///
    /// A `Result` containing the unrounded `SampleStatistics`, or an
    /// `AnalyticsError` if the sample is empty or holds a non-finite value.
    pub fn describe(&self, sample: &[f64]) -> Result<SampleStatistics, AnalyticsError> {
        let first = *sample
            .first()
            .ok_or_else(|| AnalyticsError::NotEnoughData("sample is empty".to_string()))?;

        if let Some(bad) = sample.iter().find(|v| !v.is_finite()) {
            return Err(AnalyticsError::NonFiniteValue(*bad));
        }

        let n = sample.len() as f64;
        let mean = sample.iter().sum::<f64>() / n;

        // A constant sample has zero variance by definition. Checking for it
        // directly keeps float noise in the mean from producing a tiny stdev.
        let stdev = if sample.iter().all(|v| *v == first) {
            0.0
        } else {
            let variance = sample.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
            variance.sqrt()
        };

        Ok(SampleStatistics {
            sample_size: sample.len(),
            mean,
            stdev,
        })
    }

    /// Rounds raw statistics into the published two-decimal report.
    ///
    /// The ratio is taken from the unrounded mean and stdev before it is rounded.
    pub fn summarize(&self, stats: &SampleStatistics) -> Result<ConsistencyReport, AnalyticsError> {
        let ratio = match stats.ratio() {
            Some(ratio) => Ratio::Defined(round_to_cents(ratio, "ratio")?),
            None => Ratio::Undefined,
        };

        Ok(ConsistencyReport {
            mean: round_to_cents(stats.mean, "mean")?,
            stdev: round_to_cents(stats.stdev, "stdev")?,
            ratio,
        })
    }
}

/// Converts a statistic to a `Decimal` rounded to, and scaled at, two decimal places.
///
/// Rounds the exact binary value of the float, so `2.675` (stored as 2.67499...)
/// becomes `2.67`. True midpoints round to even.
pub fn round_to_cents(value: f64, metric: &str) -> Result<Decimal, AnalyticsError> {
    let mut rounded = Decimal::from_f64_retain(value)
        .ok_or_else(|| AnalyticsError::Conversion(metric.to_string()))?
        .round_dp(REPORTED_SCALE);
    rounded.rescale(REPORTED_SCALE);
    Ok(rounded)
}
