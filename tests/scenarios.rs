use truthguard::synth::{catalog, red_flag_count, ContentSynthesizer, Latency, SequenceSource};
use truthguard::{ContentKind, HistoryBuffer, RngSource, ScoreBand};

const CREDIBLE: &str = "This is backed by peer-reviewed research and data shows consistent results";
const SUSPICIOUS: &str = "shocking secret cover-up they don't want you to know";

#[test]
fn credible_text_scores_high() {
    let synthesizer = ContentSynthesizer::default();
    for base in [0.0, 0.25, 0.5, 0.75, 0.95] {
        let mut rng = SequenceSource::constant(base);
        let record = synthesizer.compose(CREDIBLE, ContentKind::Text, &mut rng).unwrap();
        let expected = (base + 0.3).clamp(0.1, 0.9);
        assert!((record.truth_score().value() - expected).abs() < 1e-9);
        assert!(record.red_flags().len() <= red_flag_count(record.truth_score()));
        assert!(record.sources().is_empty());
    }

    let mut rng = SequenceSource::constant(0.6);
    let record = synthesizer.compose(CREDIBLE, ContentKind::Text, &mut rng).unwrap();
    assert_eq!(record.truth_score().band(), ScoreBand::LikelyTruthful);
    assert_eq!(
        record.factual_assessment(),
        catalog::FACTUAL_ASSESSMENTS[catalog::FACTUAL_ASSESSMENTS.len() - 1]
    );
}

#[test]
fn suspicious_text_pinned_to_floor() {
    let synthesizer = ContentSynthesizer::default();
    for base in [0.0, 0.3, 0.69] {
        let mut rng = SequenceSource::constant(base);
        let record = synthesizer.compose(SUSPICIOUS, ContentKind::Text, &mut rng).unwrap();
        assert_eq!(record.truth_score().value(), 0.1);
        assert_eq!(red_flag_count(record.truth_score()), 5);
        assert_eq!(record.truth_score().band(), ScoreBand::LikelyMisleading);
    }
}

#[tokio::test]
async fn history_keeps_ten_most_recent() {
    let synthesizer = ContentSynthesizer::new(Latency::none());
    let mut rng = RngSource::seeded(99);
    let mut history = HistoryBuffer::default();
    let mut ids = Vec::new();

    for i in 0..12 {
        let record = synthesizer
            .synthesize(&format!("article number {}", i), ContentKind::Text, &mut rng)
            .await
            .unwrap();
        ids.push(record.id().to_string());
        history.push(record);
    }

    assert_eq!(history.len(), 10);
    let kept: Vec<&str> = history.iter().map(|r| r.id()).collect();
    let expected: Vec<&str> = ids[2..].iter().rev().map(String::as_str).collect();
    assert_eq!(kept, expected);
    assert_eq!(history.get(9).map(|r| r.content()), Some("article number 2"));
}
