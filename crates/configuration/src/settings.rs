use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section falls back to its defaults, so an absent config file is valid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
    pub plot: PlotConfig,
}

/// Hard filters applied to each player before it is ranked.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Minimum number of non-null scores. Players below it are skipped.
    pub min_sample_size: usize,
    /// Minimum average score (inclusive).
    pub min_mean: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where `csv` mode writes its report.
    pub csv_path: PathBuf,
}

/// Layout of the terminal histograms drawn by `plot` mode.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Number of equal-width bins per histogram.
    pub bins: usize,
    /// Character width of the longest bar.
    pub bar_width: usize,
}

impl Config {
    /// Rejects settings the report cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.min_sample_size == 0 {
            return Err(invalid("analysis.min_sample_size", "must be at least 1"));
        }
        if !self.analysis.min_mean.is_finite() {
            return Err(invalid("analysis.min_mean", "must be a finite number"));
        }
        if self.output.csv_path.as_os_str().is_empty() {
            return Err(invalid("output.csv_path", "must not be empty"));
        }
        if self.plot.bins == 0 || self.plot.bar_width == 0 {
            let key = if self.plot.bins == 0 { "plot.bins" } else { "plot.bar_width" };
            return Err(invalid(key, "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(key: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid { key, reason: reason.to_string() }
}

// --- Default Implementations ---

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_sample_size: 30,
            min_mean: 4.0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("scores_data.csv"),
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            bins: 10,
            bar_width: 40,
        }
    }
}
