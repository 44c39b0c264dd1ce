pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod history;
pub mod synth;

pub use config::Config;
pub use content::{AnalyzedContent, ContentKind, Score, ScoreBand};
pub use error::AnalysisFailure;
pub use history::HistoryBuffer;
pub use synth::{ContentSynthesizer, Latency, RandomSource, RngSource, SequenceSource};
