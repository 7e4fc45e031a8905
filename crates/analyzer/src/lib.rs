//! # Player Consistency Analyzer
//!
//! Fetches every player's score history, drops players that fail the sample
//! size or average score filters, computes their consistency statistics and
//! ranks them by mean/stdev ratio.

use crate::error::AnalyzerError;
use analytics::AnalyticsEngine;
use configuration::AnalysisConfig;
use core_types::{PlayerIdentity, PlayerStatSummary, ScoreRecord};
use database::ScoreSource;
use indicatif::ProgressBar;

pub mod error;

/// The main analysis engine.
pub struct Analyzer {
    config: AnalysisConfig,
    engine: AnalyticsEngine,
    progress: ProgressBar,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            engine: AnalyticsEngine::new(),
            progress: ProgressBar::hidden(),
        }
    }

    /// Reports per-player progress on the given bar. Its length is set by `run`.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Fetches, filters, summarizes, and ranks every player known to `source`.
    ///
    /// The result is ordered by ratio, highest first. Players whose ratio is
    /// undefined come last. Ties keep the order the identities were listed in.
    pub async fn run<S>(&self, source: &S) -> Result<Vec<PlayerStatSummary>, AnalyzerError>
    where
        S: ScoreSource + ?Sized,
    {
        // 1. Fetch identities
        let identities = source.list_identities().await?;
        tracing::info!(players = identities.len(), "Computing player consistency statistics.");
        self.progress.set_length(identities.len() as u64);

        // 2. Fetch, filter, and summarize each player
        let mut summaries = Vec::new();
        for identity in identities {
            let scores = source.list_scores(identity.external_id).await?;
            if let Some(summary) = self.evaluate(identity, scores)? {
                summaries.push(summary);
            }
            self.progress.inc(1);
        }
        self.progress.finish_and_clear();

        // 3. Rank. `sort_by` is stable, so ties keep their fetch order.
        summaries.sort_by(|a, b| a.ratio.rank_cmp(&b.ratio));

        tracing::info!(qualified = summaries.len(), "Ranking complete.");
        Ok(summaries)
    }

    /// Applies the filters to one player and builds its summary if it qualifies.
    fn evaluate(
        &self,
        identity: PlayerIdentity,
        scores: Vec<ScoreRecord>,
    ) -> Result<Option<PlayerStatSummary>, AnalyzerError> {
        let external_id = identity.external_id;
        let sample: Vec<f64> = scores.into_iter().flatten().collect();

        if sample.len() < self.config.min_sample_size {
            tracing::debug!(external_id, sample_size = sample.len(), "Skipping player: sample too small.");
            return Ok(None);
        }

        let stats = self
            .engine
            .describe(&sample)
            .map_err(|source| AnalyzerError::Calculation { external_id, source })?;

        if stats.mean < self.config.min_mean {
            tracing::debug!(external_id, mean = stats.mean, "Skipping player: average below threshold.");
            return Ok(None);
        }

        let report = self
            .engine
            .summarize(&stats)
            .map_err(|source| AnalyzerError::Calculation { external_id, source })?;

        if !report.ratio.is_defined() {
            tracing::warn!(
                external_id,
                "Player has zero score variance; ratio reported as undefined."
            );
        }

        Ok(Some(PlayerStatSummary::from_identity(
            identity,
            report.mean,
            report.stdev,
            report.ratio,
        )))
    }
}
