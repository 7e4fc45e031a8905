pub mod enums;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::Ratio;
pub use structs::{PlayerIdentity, PlayerStatSummary, ScoreRecord};
