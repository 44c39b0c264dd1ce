//! Fixed pools the synthesizer draws from

use crate::content::ContentSource;

pub const RED_FLAGS: &[&str] = &[
    "Uses emotional language to manipulate readers",
    "Contains unverified claims without sources",
    "Presents opinions as facts without distinction",
    "Uses misleading statistics without context",
    "Omits important context that changes interpretation",
    "Contains logical fallacies in reasoning",
    "Attributes claims to unnamed or vague sources",
    "Uses loaded language designed to provoke emotion",
    "Makes claims that contradict established scientific consensus",
    "Uses old information presented as current",
];

/// Narrative assessments, indexed by `floor(truth_score * len)`
pub const FACTUAL_ASSESSMENTS: &[&str] = &[
    "The content makes several claims that are not substantiated by evidence. While some elements may be factual, the overall framing is misleading.",
    "Our analysis found that while the basic facts presented are accurate, important context is missing that would significantly change how readers interpret the information.",
    "The content appears to be mostly factual, with proper attributions and verifiable claims. There are some minor inaccuracies but they don't significantly impact the overall message.",
    "Our analysis indicates that this content contains several factual inaccuracies and misleading statements. The central claims are not supported by available evidence.",
    "The content presents accurate information and properly attributes sources. Claims made are in line with expert consensus on the subject.",
    "While some facts presented are accurate, they are arranged in a way that creates a misleading narrative. Several claims lack proper context or substantiation.",
];

/// (title, url, description)
pub const SOURCES: &[(&str, &str, &str)] = &[
    (
        "Reuters Fact Check",
        "https://www.reuters.com/fact-check",
        "Independent verification of related claims",
    ),
    (
        "Associated Press Fact Check",
        "https://apnews.com/hub/ap-fact-check",
        "Additional context on this topic",
    ),
    (
        "PolitiFact",
        "https://www.politifact.com/",
        "Rating of similar claims",
    ),
    (
        "FactCheck.org",
        "https://www.factcheck.org/",
        "Detailed analysis of this subject",
    ),
    (
        "Snopes",
        "https://www.snopes.com/",
        "Investigation of viral claims on this topic",
    ),
];

pub const TITLES: &[&str] = &[
    "New Study Reveals Surprising Link Between Diet and Longevity",
    "Government Announces Major Policy Change on Climate Initiatives",
    "Tech Company Unveils Revolutionary AI Technology",
    "Scientists Discover Potential Breakthrough in Cancer Treatment",
    "Economic Report Shows Unexpected Growth in Third Quarter",
    "Health Officials Issue Warning About New Virus Strain",
    "International Relations Strained After Diplomatic Incident",
    "Research Suggests Benefits of New Educational Approach",
    "Environmental Group Challenges Industrial Development Plan",
    "Financial Markets React to Central Bank's Interest Rate Decision",
];

pub fn source(index: usize) -> ContentSource {
    let (title, url, description) = SOURCES[index];
    ContentSource::new(title, url, description)
}

/// Bank entry for a score, clamped to the last entry at the top boundary
pub fn assessment_index(truth_score: f64) -> usize {
    let index = (truth_score * FACTUAL_ASSESSMENTS.len() as f64).floor() as usize;
    index.min(FACTUAL_ASSESSMENTS.len() - 1)
}
