//! Keyword lexicons that bias the truth score

/// Phrases that pull the score down
pub const SUSPICION: &[&str] = &[
    "secret",
    "shocking",
    "they don't want you to know",
    "conspiracy",
    "never reported",
    "mainstream media",
    "cover-up",
    "hoax",
];

/// Phrases that push the score up
pub const CREDIBILITY: &[&str] = &[
    "research",
    "study",
    "evidence",
    "according to experts",
    "verified",
    "peer-reviewed",
    "multiple sources",
    "data shows",
];

/// Subtracted once per suspicion phrase found
pub const SUSPICION_PENALTY: f64 = 0.15;
/// Added once per credibility phrase found
pub const CREDIBILITY_BONUS: f64 = 0.10;

/// Lexicon phrases present in a piece of content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordHits {
    pub suspicion: Vec<&'static str>,
    pub credibility: Vec<&'static str>,
}

impl KeywordHits {
    /// Net adjustment to apply to the base score. Uncapped.
    pub fn bias(&self) -> f64 {
        self.credibility.len() as f64 * CREDIBILITY_BONUS
            - self.suspicion.len() as f64 * SUSPICION_PENALTY
    }

    pub fn is_empty(&self) -> bool {
        self.suspicion.is_empty() && self.credibility.is_empty()
    }
}

/// Case-insensitive substring scan. Each phrase counts at most once, however
/// often it appears.
pub fn scan(content: &str) -> KeywordHits {
    let lower = content.to_lowercase();
    let matching = |lexicon: &[&'static str]| {
        lexicon
            .iter()
            .copied()
            .filter(|phrase| lower.contains(phrase))
            .collect::<Vec<_>>()
    };
    KeywordHits {
        suspicion: matching(SUSPICION),
        credibility: matching(CREDIBILITY),
    }
}
