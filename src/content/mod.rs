//! Analyzed content records
//!
//! An `AnalyzedContent` is built once per analysis request from an
//! `AnalysisDraft` and never mutated afterwards. The constructor enforces the
//! record invariants (metric set, red-flag and source bounds, deduplication,
//! excerpt length) so a record that exists is always well-formed.

mod score;

pub use score::{Score, ScoreBand, MAX_SCORE, MIN_SCORE};

use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisFailure;

/// Maximum excerpt length in characters, ellipsis included
pub const EXCERPT_LIMIT: usize = 150;
pub const ELLIPSIS: &str = "...";
pub const MAX_RED_FLAGS: usize = 5;
pub const MAX_SOURCES: usize = 3;

/// What the user submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Url,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Url => "url",
        }
    }

    /// Capitalised form for listings ("Text", "Url")
    pub fn display_name(&self) -> &'static str {
        match self {
            ContentKind::Text => "Text",
            ContentKind::Url => "Url",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ContentKind::Text),
            "url" => Ok(ContentKind::Url),
            other => Err(format!("unknown content type '{}' (expected text or url)", other)),
        }
    }
}

/// The five fixed dimensions every analysis reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    SourceCredibility,
    FactualAccuracy,
    ContextFairness,
    EmotionalLanguage,
    CitationQuality,
}

impl Dimension {
    /// All dimensions, in report order
    pub const ALL: [Dimension; 5] = [
        Dimension::SourceCredibility,
        Dimension::FactualAccuracy,
        Dimension::ContextFairness,
        Dimension::EmotionalLanguage,
        Dimension::CitationQuality,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::SourceCredibility => "Source Credibility",
            Dimension::FactualAccuracy => "Factual Accuracy",
            Dimension::ContextFairness => "Context Fairness",
            Dimension::EmotionalLanguage => "Emotional Language",
            Dimension::CitationQuality => "Citation Quality",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Dimension::SourceCredibility => "Evaluation of the source's reputation and reliability",
            Dimension::FactualAccuracy => "Assessment of verifiable facts presented in the content",
            Dimension::ContextFairness => "Whether appropriate context is provided for claims",
            Dimension::EmotionalLanguage => "Presence of manipulative or highly charged language",
            Dimension::CitationQuality => "Credibility and relevance of sources cited",
        }
    }
}

/// Per-dimension sub-score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentMetric {
    pub dimension: Dimension,
    pub score: Score,
}

impl ContentMetric {
    pub fn name(&self) -> &'static str {
        self.dimension.name()
    }

    pub fn description(&self) -> &'static str {
        self.dimension.description()
    }
}

impl Serialize for ContentMetric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ContentMetric", 3)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("description", self.description())?;
        state.serialize_field("score", &self.score)?;
        state.end()
    }
}

/// Citation record attached to URL analyses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentSource {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl ContentSource {
    pub fn new(title: &str, url: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            description: description.to_string(),
        }
    }
}

/// Raw parts of an analysis before invariants are checked
#[derive(Debug, Clone)]
pub struct AnalysisDraft {
    pub id: String,
    pub kind: ContentKind,
    pub title: String,
    pub content: String,
    pub analyzed_at: DateTime<Utc>,
    pub truth_score: Score,
    pub metrics: Vec<ContentMetric>,
    pub red_flags: Vec<String>,
    pub factual_assessment: String,
    pub sources: Vec<ContentSource>,
}

/// Result of one analysis. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedContent {
    id: String,
    #[serde(rename = "type")]
    kind: ContentKind,
    title: String,
    content: String,
    excerpt: String,
    analyzed_at: DateTime<Utc>,
    truth_score: Score,
    metrics: Vec<ContentMetric>,
    red_flags: Vec<String>,
    factual_assessment: String,
    sources: Vec<ContentSource>,
}

impl AnalyzedContent {
    /// Validate a draft and freeze it into a record.
    ///
    /// Duplicate red flags and duplicate source URLs are dropped, keeping the
    /// first occurrence. Anything that cannot be repaired that way is
    /// rejected.
    pub fn new(draft: AnalysisDraft) -> Result<Self, AnalysisFailure> {
        if draft.id.is_empty() {
            return Err(AnalysisFailure::invalid_record("record id is empty"));
        }

        let dimensions: Vec<Dimension> = draft.metrics.iter().map(|m| m.dimension).collect();
        if dimensions != Dimension::ALL {
            return Err(AnalysisFailure::invalid_record(format!(
                "expected metrics {:?}, got {:?}",
                Dimension::ALL,
                dimensions
            )));
        }

        let red_flags = dedup_by(draft.red_flags, |flag| flag.clone());
        if red_flags.len() > MAX_RED_FLAGS {
            return Err(AnalysisFailure::invalid_record(format!(
                "{} red flags exceeds the limit of {}",
                red_flags.len(),
                MAX_RED_FLAGS
            )));
        }

        let sources = dedup_by(draft.sources, |source| source.url.clone());
        match draft.kind {
            ContentKind::Text if !sources.is_empty() => {
                return Err(AnalysisFailure::invalid_record(
                    "text analyses cannot carry sources",
                ));
            }
            ContentKind::Url if sources.len() > MAX_SOURCES => {
                return Err(AnalysisFailure::invalid_record(format!(
                    "{} sources exceeds the limit of {}",
                    sources.len(),
                    MAX_SOURCES
                )));
            }
            _ => {}
        }

        let excerpt = excerpt(&draft.content);

        Ok(Self {
            id: draft.id,
            kind: draft.kind,
            title: draft.title,
            content: draft.content,
            excerpt,
            analyzed_at: draft.analyzed_at,
            truth_score: draft.truth_score,
            metrics: draft.metrics,
            red_flags,
            factual_assessment: draft.factual_assessment,
            sources,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// First eight characters of the id, for listings
    pub fn short_id(&self) -> String {
        self.id.chars().take(8).collect()
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    pub fn analyzed_at(&self) -> DateTime<Utc> {
        self.analyzed_at
    }

    pub fn truth_score(&self) -> Score {
        self.truth_score
    }

    pub fn metrics(&self) -> &[ContentMetric] {
        &self.metrics
    }

    pub fn red_flags(&self) -> &[String] {
        &self.red_flags
    }

    pub fn factual_assessment(&self) -> &str {
        &self.factual_assessment
    }

    pub fn sources(&self) -> &[ContentSource] {
        &self.sources
    }
}

/// Truncate content for listings: at most `EXCERPT_LIMIT` characters, with
/// the last three replaced by `...` when anything was cut.
pub fn excerpt(content: &str) -> String {
    if content.chars().count() <= EXCERPT_LIMIT {
        return content.to_string();
    }
    let keep = EXCERPT_LIMIT - ELLIPSIS.chars().count();
    let mut truncated: String = content.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Order-preserving deduplication on a derived key
fn dedup_by<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + std::hash::Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(key(item))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics_at(score: f64) -> Vec<ContentMetric> {
        Dimension::ALL
            .iter()
            .map(|&dimension| ContentMetric {
                dimension,
                score: Score::clamped(score),
            })
            .collect()
    }

    fn draft(kind: ContentKind) -> AnalysisDraft {
        AnalysisDraft {
            id: "a1".to_string(),
            kind,
            title: "Headline".to_string(),
            content: "Some article text".to_string(),
            analyzed_at: Utc::now(),
            truth_score: Score::clamped(0.5),
            metrics: metrics_at(0.5),
            red_flags: vec![],
            factual_assessment: "Assessment".to_string(),
            sources: vec![],
        }
    }

    #[test]
    fn test_excerpt_short_content_unchanged() {
        let text = "a".repeat(EXCERPT_LIMIT);
        assert_eq!(excerpt(&text), text);
        assert_eq!(excerpt(""), "");
    }

    #[test]
    fn test_excerpt_truncates_long_content() {
        let text = "b".repeat(EXCERPT_LIMIT + 1);
        let out = excerpt(&text);
        assert_eq!(out.chars().count(), EXCERPT_LIMIT);
        assert!(out.ends_with(ELLIPSIS));
        assert_eq!(&out[..147], &text[..147]);
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let text = "é".repeat(200);
        let out = excerpt(&text);
        assert_eq!(out.chars().count(), EXCERPT_LIMIT);
        assert!(out.starts_with("ééé"));
    }

    #[test]
    fn test_red_flags_deduplicated_in_order() {
        let mut d = draft(ContentKind::Text);
        d.red_flags = vec!["b".into(), "a".into(), "b".into(), "c".into(), "a".into()];
        let record = AnalyzedContent::new(d).unwrap();
        assert_eq!(record.red_flags(), &["b", "a", "c"]);
    }

    #[test]
    fn test_too_many_red_flags_rejected() {
        let mut d = draft(ContentKind::Text);
        d.red_flags = (0..6).map(|i| format!("flag {}", i)).collect();
        assert!(matches!(
            AnalyzedContent::new(d),
            Err(AnalysisFailure::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_sources_deduplicated_by_url() {
        let mut d = draft(ContentKind::Url);
        d.sources = vec![
            ContentSource::new("One", "https://one.example", "first"),
            ContentSource::new("One again", "https://one.example", "dupe"),
            ContentSource::new("Two", "https://two.example", "second"),
        ];
        let record = AnalyzedContent::new(d).unwrap();
        let urls: Vec<&str> = record.sources().iter().map(|s| s.url.as_str()).collect();
        assert_eq!(urls, vec!["https://one.example", "https://two.example"]);
        assert_eq!(record.sources()[0].title, "One");
    }

    #[test]
    fn test_text_with_sources_rejected() {
        let mut d = draft(ContentKind::Text);
        d.sources = vec![ContentSource::new("One", "https://one.example", "first")];
        assert!(AnalyzedContent::new(d).is_err());
    }

    #[test]
    fn test_metric_set_must_be_complete() {
        let mut d = draft(ContentKind::Text);
        d.metrics.pop();
        assert!(AnalyzedContent::new(d).is_err());

        let mut d = draft(ContentKind::Text);
        d.metrics.swap(0, 1);
        assert!(AnalyzedContent::new(d).is_err());
    }

    #[test]
    fn test_short_id_counts_characters() {
        let mut d = draft(ContentKind::Text);
        d.id = "aéééééééé".to_string();
        let record = AnalyzedContent::new(d).unwrap();
        assert_eq!(record.short_id(), "aééééééé");

        let record = AnalyzedContent::new(draft(ContentKind::Text)).unwrap();
        assert_eq!(record.short_id(), "a1");
    }

    #[test]
    fn test_content_kind_parsing() {
        assert_eq!("URL".parse::<ContentKind>().unwrap(), ContentKind::Url);
        assert_eq!(" text ".parse::<ContentKind>().unwrap(), ContentKind::Text);
        assert!("pdf".parse::<ContentKind>().is_err());
        let kind: ContentKind = serde_yaml::from_str("url").unwrap();
        assert_eq!(kind, ContentKind::Url);
    }

    #[test]
    fn test_json_shape() {
        let record = AnalyzedContent::new(draft(ContentKind::Text)).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["truthScore"], 0.5);
        assert_eq!(json["metrics"][0]["name"], "Source Credibility");
        assert!(json.get("redFlags").is_some());
        assert!(json.get("factualAssessment").is_some());
    }
}
