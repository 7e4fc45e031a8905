//! # Player Scores Analytics
//!
//! Descriptive statistics over a player's score sample: arithmetic mean,
//! population standard deviation and the mean/stdev consistency ratio.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No I/O and no knowledge of where samples come from.
//! - **Two Stages:** `AnalyticsEngine::describe` produces raw `f64` statistics so
//!   callers can filter on exact values; `AnalyticsEngine::summarize` rounds them
//!   into the two-decimal `ConsistencyReport` that gets published.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The stateless calculator.
//! - `SampleStatistics`: Unrounded mean, stdev and sample size.
//! - `ConsistencyReport`: The rounded mean, stdev and `Ratio`.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{AnalyticsEngine, round_to_cents};
pub use error::AnalyticsError;
pub use report::{ConsistencyReport, SampleStatistics};
