//! Content synthesizer
//!
//! Produces a simulated truthfulness analysis. There is no language model or
//! fact-checking service behind it: a uniform base value is nudged by keyword
//! lexicons, clamped, and every other field is derived from that score plus
//! further random draws.
//!
//! Draw order within one analysis is fixed:
//! 1. base score
//! 2. one jitter per metric dimension, in `Dimension::ALL` order
//! 3. one pick per red flag
//! 4. URL only: source count, then one pick per source
//! 5. title
//!
//! `synthesize` draws the simulated latency before any of these.

pub mod catalog;
pub mod lexicon;
pub mod random;

pub use lexicon::KeywordHits;
pub use random::{RandomSource, RngSource, SequenceSource};

use chrono::Utc;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use crate::content::{
    AnalysisDraft, AnalyzedContent, ContentKind, ContentMetric, Dimension, Score, MAX_RED_FLAGS,
    MAX_SOURCES,
};
use crate::error::AnalysisFailure;

/// Half-width of the per-metric jitter around the truth score
pub const METRIC_JITTER: f64 = 0.2;

/// Simulated analysis latency, drawn uniformly from `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    min: Duration,
    max: Duration,
}

impl Latency {
    /// `min` and `max` are swapped if given in the wrong order
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    pub fn is_none(&self) -> bool {
        self.max.is_zero()
    }

    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.is_none() {
            return Duration::ZERO;
        }
        let span = (self.max - self.min).as_secs_f64();
        self.min + Duration::from_secs_f64(rng.next_unit() * span)
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500), Duration::from_millis(2500))
    }
}

/// Maps submitted content to an `AnalyzedContent` record.
///
/// Holds no mutable state: concurrent calls with their own random sources
/// produce independent results.
#[derive(Debug, Clone, Default)]
pub struct ContentSynthesizer {
    latency: Latency,
}

impl ContentSynthesizer {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    /// Run an analysis, pausing for the simulated latency first.
    ///
    /// `content` is assumed non-empty; validating input is the caller's job.
    /// Needs a Tokio runtime with the time driver enabled.
    pub async fn synthesize<R: RandomSource + ?Sized>(
        &self,
        content: &str,
        kind: ContentKind,
        rng: &mut R,
    ) -> Result<AnalyzedContent, AnalysisFailure> {
        tokio::runtime::Handle::try_current()
            .map_err(|e| AnalysisFailure::environment(format!("no async runtime: {}", e)))?;

        let delay = self.latency.sample(rng);
        debug!(delay_ms = delay.as_millis() as u64, "simulating analysis latency");
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.compose(content, kind, rng)
    }

    /// Build the record synchronously, with no latency.
    pub fn compose<R: RandomSource + ?Sized>(
        &self,
        content: &str,
        kind: ContentKind,
        rng: &mut R,
    ) -> Result<AnalyzedContent, AnalysisFailure> {
        let hits = lexicon::scan(content);
        let base = rng.next_unit();
        let truth_score = Score::clamped(base + hits.bias());
        debug!(
            base,
            suspicion = ?hits.suspicion,
            credibility = ?hits.credibility,
            truth_score = truth_score.value(),
            "scored content"
        );

        let metrics = Dimension::ALL
            .iter()
            .map(|&dimension| ContentMetric {
                dimension,
                score: Score::clamped(
                    truth_score.value() + rng.uniform(-METRIC_JITTER, METRIC_JITTER),
                ),
            })
            .collect();

        let red_flags = (0..red_flag_count(truth_score))
            .map(|_| catalog::RED_FLAGS[rng.pick_index(catalog::RED_FLAGS.len())].to_string())
            .collect();

        let factual_assessment =
            catalog::FACTUAL_ASSESSMENTS[catalog::assessment_index(truth_score.value())].to_string();

        let sources = match kind {
            ContentKind::Url => {
                let count = rng.range_inclusive(1, MAX_SOURCES);
                (0..count)
                    .map(|_| catalog::source(rng.pick_index(catalog::SOURCES.len())))
                    .collect()
            }
            ContentKind::Text => Vec::new(),
        };

        let title = catalog::TITLES[rng.pick_index(catalog::TITLES.len())].to_string();

        let record = AnalyzedContent::new(AnalysisDraft {
            id: Uuid::new_v4().to_string(),
            kind,
            title,
            content: content.to_string(),
            analyzed_at: Utc::now(),
            truth_score,
            metrics,
            red_flags,
            factual_assessment,
            sources,
        })?;

        info!(
            id = record.id(),
            kind = %kind,
            truth_score = truth_score.value(),
            red_flags = record.red_flags().len(),
            sources = record.sources().len(),
            "analysis complete"
        );
        Ok(record)
    }
}

/// Steps 2-4 of the scoring formula: lexicon bias on top of `base`, clamped.
pub fn score_content(content: &str, base: f64) -> Score {
    Score::clamped(base + lexicon::scan(content).bias())
}

/// `round((1 - score) * 6)`, capped at `MAX_RED_FLAGS`. Count of draws before
/// deduplication.
pub fn red_flag_count(truth_score: Score) -> usize {
    let raw = ((1.0 - truth_score.value()) * 6.0).round();
    (raw.max(0.0) as usize).min(MAX_RED_FLAGS)
}
