use core_types::Ratio;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unrounded descriptive statistics of one score sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleStatistics {
    pub sample_size: usize,
    pub mean: f64,
    /// Population standard deviation. Exactly zero when every value is identical.
    pub stdev: f64,
}

impl SampleStatistics {
    /// The mean/stdev ratio, or `None` for a zero-variance sample.
    pub fn ratio(&self) -> Option<f64> {
        if self.stdev == 0.0 {
            None
        } else {
            Some(self.mean / self.stdev)
        }
    }
}

/// The published, two-decimal view of a `SampleStatistics`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub mean: Decimal,
    pub stdev: Decimal,
    pub ratio: Ratio,
}
