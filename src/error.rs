//! Error types for the synthesis core

use thiserror::Error;

/// Failure of a synthesis call.
///
/// The scoring formula itself cannot fail on non-empty input, so this only
/// covers the environment the call runs in and records that break the
/// `AnalyzedContent` invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisFailure {
    #[error("Analysis environment unavailable: {message}")]
    Environment { message: String },

    #[error("Analysis produced an invalid record: {message}")]
    InvalidRecord { message: String },
}

impl AnalysisFailure {
    pub fn environment(message: impl Into<String>) -> Self {
        AnalysisFailure::Environment {
            message: message.into(),
        }
    }

    pub fn invalid_record(message: impl Into<String>) -> Self {
        AnalysisFailure::InvalidRecord {
            message: message.into(),
        }
    }
}
