use crate::error::PresenterError;
use async_trait::async_trait;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, Table};
use configuration::PlotConfig;
use database::ScoreSource;
use std::io::Write;

/// Shown when `plot` mode is requested without any player ids.
pub const MISSING_IDS_MESSAGE: &str =
    "No player ids entered. Enter player ids (ints separated by spaces) following -i arg.";

/// Draws score distributions for a set of players.
#[async_trait]
pub trait HistogramPlotter: Send + Sync {
    async fn render_histograms(&self, ids: &[i64]) -> Result<(), PresenterError>;
}

/// Tells the user when there is nothing to plot. Returns whether plotting should go ahead.
pub fn check_plot_ids<W: Write>(ids: &[i64], out: &mut W) -> Result<bool, PresenterError> {
    if ids.is_empty() {
        writeln!(out, "{MISSING_IDS_MESSAGE}")?;
        return Ok(false);
    }
    Ok(true)
}

/// One equal-width bin of a histogram. The last bin is closed on both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// The distribution of one player's scores.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bins: Vec<Bin>,
    pub sample_size: usize,
}

impl Histogram {
    /// Buckets a sample into `bin_count` equal-width bins spanning its range.
    ///
    /// Returns `None` for an empty sample. A constant sample produces one bin.
    pub fn from_sample(sample: &[f64], bin_count: usize) -> Option<Self> {
        let min = sample.iter().copied().reduce(f64::min)?;
        let max = sample.iter().copied().reduce(f64::max)?;

        if min == max || bin_count <= 1 {
            let bins = vec![Bin { lower: min, upper: max, count: sample.len() }];
            return Some(Self { bins, sample_size: sample.len() });
        }

        let width = (max - min) / bin_count as f64;
        let mut bins: Vec<Bin> = (0..bin_count)
            .map(|i| Bin {
                lower: min + width * i as f64,
                upper: if i + 1 == bin_count { max } else { min + width * (i + 1) as f64 },
                count: 0,
            })
            .collect();

        for value in sample {
            let index = (((value - min) / width).floor() as usize).min(bin_count - 1);
            bins[index].count += 1;
        }

        Some(Self { bins, sample_size: sample.len() })
    }

    /// Lays the bins out as a table of range, count and a bar scaled to `bar_width`.
    pub fn to_table(&self, bar_width: usize) -> Table {
        let tallest = self.bins.iter().map(|b| b.count).max().unwrap_or(0);

        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec!["score range", "games", ""]);
        for bin in &self.bins {
            table.add_row(vec![
                format!("{:.2} - {:.2}", bin.lower, bin.upper),
                bin.count.to_string(),
                "#".repeat(bar_length(bin.count, tallest, bar_width)),
            ]);
        }
        if let Some(column) = table.column_mut(1) {
            column.set_cell_alignment(CellAlignment::Right);
        }
        table
    }
}

/// Bars are proportional to the tallest bin; a non-empty bin always gets at least one mark.
fn bar_length(count: usize, tallest: usize, bar_width: usize) -> usize {
    if count == 0 || tallest == 0 {
        return 0;
    }
    let scaled = (count as f64 / tallest as f64 * bar_width as f64).round() as usize;
    scaled.max(1)
}

/// Prints one text histogram per player to stdout, reading scores from a `ScoreSource`.
pub struct TerminalHistogramPlotter<S> {
    source: S,
    config: PlotConfig,
}

impl<S: ScoreSource> TerminalHistogramPlotter<S> {
    pub fn new(source: S, config: PlotConfig) -> Self {
        Self { source, config }
    }

    /// Builds the printable chart for one player.
    async fn chart(&self, id: i64) -> Result<String, PresenterError> {
        let sample: Vec<f64> = self
            .source
            .list_scores(id)
            .await?
            .into_iter()
            .flatten()
            .collect();

        Ok(match Histogram::from_sample(&sample, self.config.bins) {
            Some(histogram) => format!(
                "Score distribution for player {id} ({} games)\n{}",
                histogram.sample_size,
                histogram.to_table(self.config.bar_width)
            ),
            None => format!("No scores recorded for player {id}."),
        })
    }
}

#[async_trait]
impl<S: ScoreSource> HistogramPlotter for TerminalHistogramPlotter<S> {
    async fn render_histograms(&self, ids: &[i64]) -> Result<(), PresenterError> {
        tracing::info!(players = ids.len(), "Plotting score distributions.");
        for id in ids {
            let chart = self.chart(*id).await?;
            writeln!(std::io::stdout().lock(), "{chart}\n")?;
        }
        Ok(())
    }
}
