//! # Player Scores Presenter
//!
//! Renders the ranked `PlayerStatSummary` list. Each output mode is a pure
//! rendering step over data the analyzer has already produced:
//!
//! - `render_table`: a fixed-width console table.
//! - `write_csv`: the same rows as a CSV file.
//! - `check_plot_ids` then `HistogramPlotter::render_histograms`: per-player
//!   score histograms.
//!
//! All column formatting is driven by the `ColumnKind` tag of each entry in
//! `REPORT_COLUMNS`, so the table and the CSV file always agree.

pub mod columns;
pub mod csv_report;
pub mod error;
pub mod histogram;
pub mod table;

pub use columns::{Column, ColumnKind, REPORT_COLUMNS};
pub use csv_report::{write_csv, write_csv_to};
pub use error::PresenterError;
pub use histogram::{
    Bin, Histogram, HistogramPlotter, MISSING_IDS_MESSAGE, TerminalHistogramPlotter, check_plot_ids,
};
pub use table::{TableLayout, render_table};
