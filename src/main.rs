use analyzer::Analyzer;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use configuration::{Config, load_config};
use core_types::PlayerStatSummary;
use database::{DbRepository, connect};
use indicatif::{ProgressBar, ProgressStyle};
use presenter::{
    HistogramPlotter, REPORT_COLUMNS, TerminalHistogramPlotter, check_plot_ids, render_table,
    write_csv,
};
use std::io;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Ranks fantasy players by scoring consistency.
///
/// Consistent players (high mean/stdev ratio) suit cash games; volatile players
/// with upside suit GPPs.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    run(OutputMode::from(cli)).await
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Prints, writes to CSV, or plots consistency statistics for player scores.
#[derive(Parser, Debug)]
#[command(name = "player_scores", author, version, about, long_about = None)]
struct Cli {
    /// Prints or writes csv file for data on the player scores, or plots score distributions.
    #[arg(short, long, value_enum)]
    mode: Mode,

    /// Player ids to plot point distributions for. Format = ints separated by spaces.
    #[arg(short, long, num_args = 1..)]
    ids: Option<Vec<i64>>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Csv,
    Print,
    Plot,
}

/// The selected renderer, with the ids it needs.
#[derive(Debug, PartialEq, Eq)]
enum OutputMode {
    Print,
    Csv,
    Plot(Vec<i64>),
}

impl From<Cli> for OutputMode {
    fn from(cli: Cli) -> Self {
        match cli.mode {
            Mode::Plot => OutputMode::Plot(cli.ids.unwrap_or_default()),
            Mode::Print | Mode::Csv => {
                if cli.ids.is_some() {
                    tracing::warn!("--ids is only used by plot mode; ignoring it.");
                }
                if cli.mode == Mode::Print { OutputMode::Print } else { OutputMode::Csv }
            }
        }
    }
}

// ==============================================================================
// Report Orchestration
// ==============================================================================

async fn run(mode: OutputMode) -> anyhow::Result<()> {
    let mut stdout = io::stdout();

    // Missing plot ids are reported here, before any data access. This is the
    // only check; the plotter is never called with an empty list.
    if let OutputMode::Plot(ids) = &mode {
        if !check_plot_ids(ids, &mut stdout)? {
            return Ok(());
        }
    }

    let config = load_config().context("Failed to load configuration")?;
    let pool = connect().await.context("Failed to connect to the database")?;
    let repository = DbRepository::new(pool);

    match mode {
        OutputMode::Print => {
            let rankings = rank_players(&config, &repository).await?;
            render_table(&REPORT_COLUMNS, &rankings, &mut stdout)?;
        }
        OutputMode::Csv => {
            let rankings = rank_players(&config, &repository).await?;
            let path = &config.output.csv_path;
            write_csv(&REPORT_COLUMNS, &rankings, path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        OutputMode::Plot(ids) => {
            let plotter = TerminalHistogramPlotter::new(repository, config.plot);
            plotter.render_histograms(&ids).await?;
        }
    }

    Ok(())
}

/// Runs the analyzer once over every player in the database.
async fn rank_players(
    config: &Config,
    repository: &DbRepository,
) -> anyhow::Result<Vec<PlayerStatSummary>> {
    let progress_bar = ProgressBar::new(0);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} players ({eta})")?
            .progress_chars("#>-"),
    );

    let rankings = Analyzer::new(config.analysis.clone())
        .with_progress(progress_bar)
        .run(repository)
        .await
        .context("Failed to compute player rankings")?;

    Ok(rankings)
}

/// Logs go to stderr so stdout carries only the report. `RUST_LOG` overrides the `info` default.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
