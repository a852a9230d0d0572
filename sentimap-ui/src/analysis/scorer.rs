//! Scoring capability boundary
//!
//! The lexicon scorer is an external capability behind an injectable trait,
//! so the normalizer/classifier logic can be tested against stub backends.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scoring backend errors
#[derive(Debug, Error)]
pub enum ScorerError {
    #[error("Scoring backend failure: {0}")]
    Backend(String),
}

/// Sub-score breakdown produced by a scoring backend
///
/// `positive`/`negative`/`neutral` are proportions in [0, 1];
/// `compound` is the overall polarity in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
}

/// Text scoring capability
pub trait TextScorer: Send + Sync {
    /// Score cleaned text, returning the sub-score breakdown
    fn score(&self, text: &str) -> Result<ScoreBreakdown, ScorerError>;
}

/// Default backend wrapping the VADER lexicon analyzer
pub struct VaderScorer;

impl TextScorer for VaderScorer {
    fn score(&self, text: &str) -> Result<ScoreBreakdown, ScorerError> {
        // Analyzer construction borrows the crate's lazily-parsed lexicon
        // tables, so building one per call is inexpensive
        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
        let raw = analyzer.polarity_scores(text);

        let sub = |key: &str| {
            raw.get(key)
                .copied()
                .ok_or_else(|| ScorerError::Backend(format!("missing '{}' sub-score", key)))
        };

        Ok(ScoreBreakdown {
            positive: sub("pos")?,
            negative: sub("neg")?,
            neutral: sub("neu")?,
            compound: sub("compound")?,
        })
    }
}
