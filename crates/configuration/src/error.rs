use thiserror::Error;

/// Why the player_scores settings could not be produced.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A settings file or `PLAYER_SCORES__*` variable could not be read or deserialized.
    #[error("Failed to read player_scores settings: {0}")]
    Load(#[from] config::ConfigError),

    /// The settings were read but hold a value the analysis cannot use.
    #[error("Invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
