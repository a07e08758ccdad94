// Scoring service - core business logic for the moderation pipeline.
//
// The service compiles the rule set once at construction (dictionary,
// per-phrase matchers, trust graph, reputation table) and is read-only
// afterwards, so scoring is a pure function of the post. It combines
// four independent signals:
// - banned-word tokens        (+1 each)
// - banned phrases            (+2 each)
// - isolated (bot-like) user  (+2)
// - low reputation            (+1)
//
// NO transport or storage dependencies here - just pure domain logic.

use super::scoring_models::{FlaggedPost, ModerationRules, Post, ScoringConfig};
use crate::core::dictionary::WordDictionary;
use crate::core::matcher::PhraseMatcher;
use crate::core::review::ReviewQueue;
use crate::core::trust::{ReputationTable, TrustGraph};
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

/// Scoring itself is total and never fails; only rule loading can.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Failed to read rule file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse rules: {0}")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// RULE STORE TRAIT (PORT)
// ============================================================================

/// Trait for supplying the engine's rule set at startup.
///
/// The core defines WHAT it needs; the infra layer decides where the
/// rules actually come from (a JSON file in this repo).
pub trait RuleStore {
    fn load_rules(&self) -> Result<ModerationRules, RuleError>;
}

// ============================================================================
// CORE SERVICE
// ============================================================================

/// The moderation scoring engine.
///
/// Construction is the only mutating phase; a built service hands out
/// `&self` methods exclusively, so it can be shared across threads
/// freely if the caller parallelizes over posts.
pub struct ModerationService {
    dictionary: WordDictionary,
    phrases: Vec<PhraseMatcher>,
    graph: TrustGraph,
    reputation: ReputationTable,
    config: ScoringConfig,
}

impl ModerationService {
    /// Build an engine with the default (contract) scoring weights.
    pub fn new(rules: &ModerationRules) -> Self {
        Self::with_config(rules, ScoringConfig::default())
    }

    /// Build an engine with explicit weights/thresholds.
    pub fn with_config(rules: &ModerationRules, config: ScoringConfig) -> Self {
        let dictionary: WordDictionary = rules.banned_words.iter().collect();

        // Compile each phrase once so the failure table is not rebuilt
        // per post.
        let phrases: Vec<PhraseMatcher> = rules
            .banned_phrases
            .iter()
            .map(|p| PhraseMatcher::new(p.as_str()))
            .collect();

        let mut graph = TrustGraph::new();
        for (u, v) in &rules.connections {
            graph.add_edge(u, v);
        }

        let reputation: ReputationTable = rules
            .reputation
            .iter()
            .map(|(user, score)| (user.as_str(), *score))
            .collect();

        tracing::info!(
            banned_words = dictionary.len(),
            banned_phrases = phrases.len(),
            "moderation rules compiled"
        );

        Self {
            dictionary,
            phrases,
            graph,
            reputation,
            config,
        }
    }

    /// Build an engine from whatever rule source the caller injected.
    pub fn from_store(store: &impl RuleStore) -> Result<Self, RuleError> {
        Ok(Self::new(&store.load_rules()?))
    }

    /// Score a single post.
    ///
    /// Returns `None` when the post is clean (severity 0); a clean post
    /// never enters the review report. The additive weights and the
    /// priority thresholds are a fixed contract with the review tooling.
    pub fn score_post(&self, username: &str, content: &str) -> Option<FlaggedPost> {
        let mut severity = 0u32;

        // Signal 1: banned words, checked token by token. Every hit
        // counts, so "spam spam" scores twice.
        for token in content.split_whitespace() {
            let token = token.to_lowercase();
            if self.dictionary.contains(&token) {
                severity += self.config.word_weight;
                tracing::debug!(user = username, word = %token, "banned word detected");
            }
        }

        // Signal 2: banned phrases against the lower-cased content.
        // Each phrase counts once no matter how often it occurs.
        let lowered = content.to_lowercase();
        for matcher in &self.phrases {
            if matcher.is_match(&lowered) {
                severity += self.config.phrase_weight;
                tracing::debug!(
                    user = username,
                    phrase = matcher.pattern(),
                    "banned phrase detected"
                );
            }
        }

        // Signal 3: accounts with no social connections are bot-like.
        let is_bot = self.graph.degree(username) == 0;
        if is_bot {
            severity += self.config.bot_weight;
            tracing::debug!(user = username, "isolated account, applying bot penalty");
        }

        // Signal 4: low (or unknown, defaulting to 0) reputation.
        let reputation = self.reputation.get(username);
        if reputation < self.config.low_reputation_threshold {
            severity += self.config.low_reputation_weight;
        }

        if severity == 0 {
            return None;
        }

        Some(FlaggedPost {
            username: username.to_owned(),
            content: content.to_owned(),
            severity,
            priority: self.config.priority_for(severity),
            is_bot,
            reputation,
        })
    }

    /// Score a batch of posts and return the flagged ones in descending
    /// severity order (ties broken by submission order).
    pub fn review<I>(&self, posts: I) -> Vec<FlaggedPost>
    where
        I: IntoIterator<Item = Post>,
    {
        let mut queue = ReviewQueue::new();

        for post in posts {
            if let Some(flagged) = self.score_post(&post.username, &post.content) {
                tracing::info!(
                    user = %flagged.username,
                    severity = flagged.severity,
                    priority = %flagged.priority,
                    "post flagged for review"
                );
                queue.push(flagged);
            }
        }

        queue.drain_ordered()
    }
}

// ============================================================================
// TESTS
// ============================================================================
