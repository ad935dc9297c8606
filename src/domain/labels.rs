use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores at or above this are labelled High.
pub const HIGH_SCORE_THRESHOLD: f64 = 0.33;

/// Scores at or above this, but below the high cut, are labelled Medium.
pub const LOW_SCORE_THRESHOLD: f64 = 0.06;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuccessLabel {
    High,
    Medium,
    Low,
}

impl SuccessLabel {
    /// Upper-inclusive cuts: a score exactly at a threshold takes the higher
    /// label. NaN fails both comparisons and lands on Low.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_SCORE_THRESHOLD {
            SuccessLabel::High
        } else if score >= LOW_SCORE_THRESHOLD {
            SuccessLabel::Medium
        } else {
            SuccessLabel::Low
        }
    }
}

impl fmt::Display for SuccessLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuccessLabel::High => write!(f, "High"),
            SuccessLabel::Medium => write!(f, "Medium"),
            SuccessLabel::Low => write!(f, "Low"),
        }
    }
}
