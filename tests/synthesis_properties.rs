//! Property-based tests for the synthesis invariants.
//!
//! Uses proptest to fuzz-verify record bounds over arbitrary content and
//! seeds, and the direction of the lexicon bias under fixed randomness.

use proptest::prelude::*;
use std::collections::HashSet;

use truthguard::content::{ContentKind, Dimension, ELLIPSIS, EXCERPT_LIMIT, MAX_SCORE, MIN_SCORE};
use truthguard::synth::lexicon::{CREDIBILITY, SUSPICION};
use truthguard::synth::{ContentSynthesizer, RngSource, SequenceSource};
use truthguard::AnalyzedContent;

fn arb_kind() -> impl Strategy<Value = ContentKind> {
    prop_oneof![Just(ContentKind::Text), Just(ContentKind::Url)]
}

fn analyze(content: &str, kind: ContentKind, seed: u64) -> AnalyzedContent {
    let mut rng = RngSource::seeded(seed);
    ContentSynthesizer::default()
        .compose(content, kind, &mut rng)
        .unwrap()
}

fn score_with_base(content: &str, base: f64) -> f64 {
    let mut rng = SequenceSource::constant(base);
    ContentSynthesizer::default()
        .compose(content, ContentKind::Text, &mut rng)
        .unwrap()
        .truth_score()
        .value()
}

// ── Record bounds ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn truth_score_bounded(content in "\\PC{1,300}", kind in arb_kind(), seed in any::<u64>()) {
        let record = analyze(&content, kind, seed);
        let score = record.truth_score().value();
        prop_assert!((MIN_SCORE..=MAX_SCORE).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn five_fixed_metrics_bounded(content in "\\PC{1,300}", kind in arb_kind(), seed in any::<u64>()) {
        let record = analyze(&content, kind, seed);
        let dimensions: Vec<Dimension> = record.metrics().iter().map(|m| m.dimension).collect();
        prop_assert_eq!(dimensions, Dimension::ALL.to_vec());
        for metric in record.metrics() {
            let score = metric.score.value();
            prop_assert!((MIN_SCORE..=MAX_SCORE).contains(&score));
        }
    }

    #[test]
    fn red_flags_bounded_and_unique(content in "\\PC{1,300}", kind in arb_kind(), seed in any::<u64>()) {
        let record = analyze(&content, kind, seed);
        prop_assert!(record.red_flags().len() <= 5);
        let unique: HashSet<&String> = record.red_flags().iter().collect();
        prop_assert_eq!(unique.len(), record.red_flags().len());
    }

    #[test]
    fn sources_follow_content_kind(content in "\\PC{1,300}", kind in arb_kind(), seed in any::<u64>()) {
        let record = analyze(&content, kind, seed);
        match kind {
            ContentKind::Text => prop_assert!(record.sources().is_empty()),
            ContentKind::Url => {
                prop_assert!((1..=3).contains(&record.sources().len()));
                let urls: HashSet<&str> = record.sources().iter().map(|s| s.url.as_str()).collect();
                prop_assert_eq!(urls.len(), record.sources().len());
            }
        }
    }

    #[test]
    fn excerpt_rule(content in "\\PC{1,400}", seed in any::<u64>()) {
        let record = analyze(&content, ContentKind::Text, seed);
        if content.chars().count() <= EXCERPT_LIMIT {
            prop_assert_eq!(record.excerpt(), content.as_str());
        } else {
            prop_assert_eq!(record.excerpt().chars().count(), EXCERPT_LIMIT);
            prop_assert!(record.excerpt().ends_with(ELLIPSIS));
        }
        prop_assert_eq!(record.content(), content.as_str());
    }
}

// ── Lexicon bias under fixed randomness ───────────────────────────────────

proptest! {
    #[test]
    fn suspicion_phrase_lowers_score(
        neutral in "[0-9 ]{0,40}",
        phrase in prop::sample::select(SUSPICION),
        base in 0.11f64..0.999,
    ) {
        let without = score_with_base(&neutral, base);
        let with = score_with_base(&format!("{} {}", neutral, phrase), base);
        prop_assert!(with < without, "{} !< {}", with, without);
    }

    #[test]
    fn credibility_phrase_raises_score(
        neutral in "[0-9 ]{0,40}",
        phrase in prop::sample::select(CREDIBILITY),
        base in 0.01f64..0.89,
    ) {
        let without = score_with_base(&neutral, base);
        let with = score_with_base(&format!("{} {}", neutral, phrase), base);
        prop_assert!(with > without, "{} !> {}", with, without);
    }
}
