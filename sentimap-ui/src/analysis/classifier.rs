//! Compound score to label classification
//!
//! Maps a continuous compound score in [-1, 1] into one of five discrete
//! labels via fixed, non-overlapping threshold bands. Pure total function
//! over any finite float.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Five-valued sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "Very Positive")]
    VeryPositive,
    #[serde(rename = "Positive")]
    Positive,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Negative")]
    Negative,
    #[serde(rename = "Very Negative")]
    VeryNegative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::VeryPositive => "Very Positive",
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::VeryNegative => "Very Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a compound score into a label.
///
/// Band edges: ties at +0.25 and +0.7 resolve to the higher-sentiment band,
/// ties at -0.25 and -0.7 resolve to the lower-sentiment band.
pub fn classify(score: f64) -> SentimentLabel {
    if score >= 0.7 {
        SentimentLabel::VeryPositive
    } else if score >= 0.25 {
        SentimentLabel::Positive
    } else if score > -0.25 {
        SentimentLabel::Neutral
    } else if score > -0.7 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::VeryNegative
    }
}

/// Confidence proxy: absolute compound score, rounded to 3 decimals
pub fn confidence(score: f64) -> f64 {
    round_to(score.abs(), 3)
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(places as i32);
    (value * factor).round() / factor
}
