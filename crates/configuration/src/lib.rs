//! # Player Scores Configuration
//!
//! Loads the tunable settings of the consistency report: the sample-size and
//! average-score filters, the CSV output location and the histogram layout.
//!
//! Sources are layered in increasing priority: built-in defaults, an optional
//! `player_scores.toml` in the working directory, then environment variables
//! prefixed with `PLAYER_SCORES__` (e.g. `PLAYER_SCORES__ANALYSIS__MIN_MEAN=5`).

use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{AnalysisConfig, Config, OutputConfig, PlotConfig};

const CONFIG_FILE_NAME: &str = "player_scores";
const ENV_PREFIX: &str = "PLAYER_SCORES";

/// Loads the application configuration from the optional `player_scores.toml`
/// file and the environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

    finish(builder)
}

/// Loads the configuration from an explicit file, which must exist.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder().add_source(config::File::from(path));
    finish(builder)
}

fn finish(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Config, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.build()?.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn file_overrides_only_the_keys_it_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("player_scores.toml");
        fs::write(
            &path,
            "[analysis]\nmin_mean = 5.5\n\n[output]\ncsv_path = \"out/ranks.csv\"\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.analysis.min_mean, 5.5);
        assert_eq!(config.analysis.min_sample_size, 30);
        assert_eq!(config.output.csv_path.to_str(), Some("out/ranks.csv"));
        assert_eq!(config.plot.bins, 10);
    }

    #[test]
    fn invalid_file_values_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("player_scores.toml");
        fs::write(&path, "[plot]\nbins = 0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn missing_explicit_file_is_a_load_error() {
        let dir = tempdir().unwrap();
        let err = load_config_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }
}
