// Scoring domain models - data structures for the moderation pipeline.
//
// These are pure domain types with no transport dependencies. The
// ingestion layer supplies `Post` values and `ModerationRules`; the
// reporting layer consumes `FlaggedPost` values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One incoming post, exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub username: String,
    pub content: String,
}

impl Post {
    pub fn new(username: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            content: content.into(),
        }
    }
}

/// Review urgency bucket, derived from severity and never stored on its
/// own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Derive the tier using the default thresholds (severity >= 6 is
    /// high, 3..=5 medium, anything below low).
    pub fn from_severity(severity: u32) -> Self {
        ScoringConfig::default().priority_for(severity)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "HIGH"),
            Priority::Medium => write!(f, "MEDIUM"),
            Priority::Low => write!(f, "LOW"),
        }
    }
}

/// A post that violated policy, with everything a reviewer needs.
///
/// Created once per violating post during scoring, immutable afterwards,
/// consumed when the review queue is drained. `content` keeps the original
/// casing; `reputation` is a snapshot taken at scoring time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedPost {
    pub username: String,
    pub content: String,
    pub severity: u32,
    pub priority: Priority,
    pub is_bot: bool,
    pub reputation: i32,
}

/// Signal weights and thresholds for the scoring policy.
///
/// The defaults ARE the policy contract - change them only if the
/// downstream review tooling changes with you.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Severity added per banned-word token.
    pub word_weight: u32,
    /// Severity added per banned phrase found in the content.
    pub phrase_weight: u32,
    /// Severity added when the author has no social connections.
    pub bot_weight: u32,
    /// Severity added when the author's reputation is below the threshold.
    pub low_reputation_weight: u32,
    /// Reputation scores below this count as low.
    pub low_reputation_threshold: i32,
    /// Severity at or above this is high priority.
    pub high_priority_threshold: u32,
    /// Severity at or above this (but below high) is medium priority.
    pub medium_priority_threshold: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            word_weight: 1,
            phrase_weight: 2,
            bot_weight: 2,
            low_reputation_weight: 1,
            low_reputation_threshold: 5,
            high_priority_threshold: 6,
            medium_priority_threshold: 3,
        }
    }
}

impl ScoringConfig {
    pub fn priority_for(&self, severity: u32) -> Priority {
        if severity >= self.high_priority_threshold {
            Priority::High
        } else if severity >= self.medium_priority_threshold {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

/// Everything the engine is configured with: the banned-word list, the
/// banned-phrase list, reputation scores, and the social edge list.
///
/// Sections absent from a rule file simply default to empty - an engine
/// with no rules flags posts only on the bot/reputation signals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModerationRules {
    #[serde(default)]
    pub banned_words: Vec<String>,
    #[serde(default)]
    pub banned_phrases: Vec<String>,
    #[serde(default)]
    pub reputation: HashMap<String, i32>,
    #[serde(default)]
    pub connections: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_thresholds() {
        assert_eq!(Priority::from_severity(1), Priority::Low);
        assert_eq!(Priority::from_severity(2), Priority::Low);
        assert_eq!(Priority::from_severity(3), Priority::Medium);
        assert_eq!(Priority::from_severity(5), Priority::Medium);
        assert_eq!(Priority::from_severity(6), Priority::High);
        assert_eq!(Priority::from_severity(42), Priority::High);
    }

    #[test]
    fn priority_labels_match_report_format() {
        assert_eq!(Priority::High.to_string(), "HIGH");
        assert_eq!(Priority::Medium.to_string(), "MEDIUM");
        assert_eq!(Priority::Low.to_string(), "LOW");
    }

    #[test]
    fn rules_deserialize_with_missing_sections() {
        let rules: ModerationRules =
            serde_json::from_str(r#"{ "banned_words": ["spam"] }"#).unwrap();

        assert_eq!(rules.banned_words, vec!["spam"]);
        assert!(rules.banned_phrases.is_empty());
        assert!(rules.reputation.is_empty());
        assert!(rules.connections.is_empty());
    }
}
