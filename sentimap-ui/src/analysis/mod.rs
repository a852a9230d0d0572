//! Sentiment analysis pipeline
//!
//! Two deterministic stages wrapped around an injected scoring backend:
//! normalize the raw text, score it, then map the compound score to a label
//! and derive a confidence value. Stateless and synchronous; one analyzer
//! instance is shared read-only across requests.

pub mod classifier;
pub mod normalizer;
pub mod scorer;

pub use classifier::{classify, confidence, round_to, SentimentLabel};
pub use normalizer::normalize;
pub use scorer::{ScoreBreakdown, ScorerError, TextScorer, VaderScorer};

use serde::Serialize;

/// Result bundle for one analysis request
///
/// Constructed once and never mutated; serializes directly as the API
/// response payload.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Original text as submitted
    pub text: String,
    /// Normalized text actually scored
    pub cleaned_text: String,
    /// Label derived from the compound score
    pub sentiment: SentimentLabel,
    /// Compound score, rounded to 4 decimals
    pub score: f64,
    /// |compound|, rounded to 3 decimals
    pub confidence: f64,
    /// Full sub-score breakdown from the backend
    pub details: ScoreBreakdown,
}

/// Pipeline orchestrator holding the injected scoring backend
pub struct SentimentAnalyzer {
    scorer: Box<dyn TextScorer>,
}

impl SentimentAnalyzer {
    pub fn new(scorer: Box<dyn TextScorer>) -> Self {
        Self { scorer }
    }

    /// Analyzer backed by the VADER lexicon scorer
    pub fn with_default_scorer() -> Self {
        Self::new(Box::new(VaderScorer))
    }

    /// Run the full pipeline: normalize, score, classify, bundle.
    ///
    /// The only failure surface is the scoring backend; its error is
    /// propagated as-is for the caller to surface.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, ScorerError> {
        let cleaned = normalize(text);
        let details = self.scorer.score(&cleaned)?;
        let label = classify(details.compound);

        Ok(AnalysisResult {
            text: text.to_string(),
            cleaned_text: cleaned,
            sentiment: label,
            score: round_to(details.compound, 4),
            confidence: confidence(details.compound),
            details,
        })
    }
}
