//! # Player Scores Database Crate
//!
//! This crate is the read-only gateway to the PostgreSQL store holding the
//! player identity table (`player_ids`) and the per-game score history
//! (`rguru_hitters`).
//!
//! ## Architectural Principles
//!
//! - **Adapter:** All SQL lives here. The rest of the application sees only the
//!   `ScoreSource` trait and plain `core-types` values.
//! - **Explicit Handle:** The connection pool is created once by the caller and
//!   handed to a `DbRepository`; there is no global database state.
//! - **Read-Only:** No statement issued by this crate mutates the store.
//!
//! ## Public API
//!
//! - `connect`: Establishes the connection pool from `DATABASE_URL`.
//! - `ScoreSource`: The two read operations the report consumes.
//! - `DbRepository`: The `sqlx`-backed `ScoreSource`.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;
pub mod source;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, connect_with_url};
pub use error::DbError;
pub use repository::DbRepository;
pub use source::ScoreSource;
