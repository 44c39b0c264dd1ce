//! Terminal rendering of analyses and history
//!
//! Each view is a small `Display` wrapper so callers can `print!` it
//! directly or collect it with `to_string()`.

use std::fmt;

use crate::content::{AnalyzedContent, Score};
use crate::history::HistoryBuffer;
use crate::synth::KeywordHits;

const METER_WIDTH: usize = 40;
const BAR_WIDTH: usize = 20;

fn bar(score: Score, width: usize) -> String {
    let filled = ((score.value() * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Full report for one analysis
pub struct Report<'a>(&'a AnalyzedContent);

pub fn report(record: &AnalyzedContent) -> Report<'_> {
    Report(record)
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        let score = record.truth_score();
        let band = score.band();

        writeln!(f, "\n{}", "=".repeat(80))?;
        writeln!(f, "{}", record.title())?;
        writeln!(
            f,
            "{} content | {} | {}",
            record.kind().display_name(),
            record.analyzed_at().format("%Y-%m-%d %H:%M:%S UTC"),
            record.short_id()
        )?;
        writeln!(f, "{}", "=".repeat(80))?;

        writeln!(f, "\nAnalysis Result: {} {}", band.marker(), band.label())?;
        writeln!(f, "[{}] {} Truth Score", bar(score, METER_WIDTH), score)?;
        writeln!(f, " {:<13}{:^14}{:>13}", "Misleading", "Neutral", "Truthful")?;

        writeln!(f, "\nDetailed Analysis")?;
        writeln!(f, "{}", "-".repeat(40))?;
        for metric in record.metrics() {
            // Same banding as the meter: on the rounded percentage
            writeln!(
                f,
                "{} {:<20} [{}] {:>4}",
                metric.score.band().marker(),
                metric.name(),
                bar(metric.score, BAR_WIDTH),
                metric.score.to_string()
            )?;
            writeln!(f, "   {}", metric.description())?;
        }

        if !record.red_flags().is_empty() {
            writeln!(f, "\nPotential Issues Detected")?;
            for flag in record.red_flags() {
                writeln!(f, "  ⚠ {}", flag)?;
            }
        }

        writeln!(f, "\nFactual Assessment")?;
        writeln!(f, "  {}", record.factual_assessment())?;

        if !record.sources().is_empty() {
            writeln!(f, "\nRelated Information Sources")?;
            for source in record.sources() {
                writeln!(f, "  🔗 {} <{}>", source.title, source.url)?;
                writeln!(f, "     {}", source.description)?;
            }
        }

        Ok(())
    }
}

/// One-line completion notice
pub fn notice(record: &AnalyzedContent) -> String {
    let band = record.truth_score().band();
    format!(
        "{} {} (Truth score: {})",
        band.marker(),
        band.notice(),
        record.truth_score()
    )
}

/// Which lexicon phrases moved the score
pub struct Explain<'a>(&'a KeywordHits);

pub fn explain(hits: &KeywordHits) -> Explain<'_> {
    Explain(hits)
}

impl fmt::Display for Explain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hits = self.0;
        if hits.is_empty() {
            return f.write_str("No lexicon phrases matched; score is the random base value.");
        }
        writeln!(f, "Lexicon matches:")?;
        for phrase in &hits.suspicion {
            writeln!(f, "  - \"{}\" (suspicion)", phrase)?;
        }
        for phrase in &hits.credibility {
            writeln!(f, "  + \"{}\" (credibility)", phrase)?;
        }
        write!(f, "Net bias: {:+.2}", hits.bias())
    }
}

/// History table, newest first, numbered from 1
pub struct History<'a>(&'a HistoryBuffer);

pub fn history(history: &HistoryBuffer) -> History<'_> {
    History(history)
}

impl fmt::Display for History<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let history = self.0;
        if history.is_empty() {
            return f.write_str(
                "No Analysis History\nArticles you analyze will appear here for easy reference.",
            );
        }

        writeln!(
            f,
            "Previously Analyzed Content ({} items, last {} kept)\n",
            history.len(),
            history.capacity()
        )?;
        writeln!(
            f,
            "{:<4} {:<12} {:<10} {:<16} {:<6} {}",
            "#", "Analyzed", "ID", "Score", "Type", "Title"
        )?;
        writeln!(f, "{}", "-".repeat(100))?;

        for (index, record) in history.iter().enumerate() {
            let score = record.truth_score();
            let badge = format!("{} {}", score, score.band().badge());
            let title = if record.title().chars().count() > 45 {
                format!("{}...", record.title().chars().take(42).collect::<String>())
            } else {
                record.title().to_string()
            };
            writeln!(
                f,
                "{:<4} {:<12} {:<10} {:<16} {:<6} {}",
                index + 1,
                record.analyzed_at().format("%b %d %H:%M").to_string(),
                record.short_id(),
                badge,
                record.kind().display_name(),
                title,
            )?;
            writeln!(f, "     {}", record.excerpt().lines().next().unwrap_or(""))?;
        }

        Ok(())
    }
}
