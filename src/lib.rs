//! Content-moderation scoring engine.
//!
//! **Architecture Overview:**
//! - `core/`  = Business logic (transport-agnostic)
//! - `infra/` = Implementations of core traits (rule files)
//!
//! The engine is purely in-process: the embedding application feeds it
//! (username, content) posts plus a rule set, and receives flagged posts
//! back in descending-severity order. Post ingestion and report rendering
//! live with the caller, not here.
//!
//! Typical wiring:
//!
//! ```no_run
//! use moderation_engine::{JsonRuleStore, ModerationService, Post};
//!
//! # fn main() -> Result<(), moderation_engine::RuleError> {
//! let store = JsonRuleStore::new("rules.json");
//! let engine = ModerationService::from_store(&store)?;
//!
//! let report = engine.review(vec![
//!     Post::new("bob", "this is a scam"),
//!     Post::new("alice", "this is a great product"),
//! ]);
//!
//! for flagged in report {
//!     println!("[{}] {}: {}", flagged.priority, flagged.username, flagged.content);
//! }
//! # Ok(())
//! # }
//! ```

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
pub mod core;
#[path = "infra/infra_layer.rs"]
pub mod infra;

pub use crate::core::dictionary::WordDictionary;
pub use crate::core::matcher::{contains_pattern, find_occurrences, PhraseMatcher};
pub use crate::core::review::ReviewQueue;
pub use crate::core::scoring::{
    FlaggedPost, ModerationRules, ModerationService, Post, Priority, RuleError, RuleStore,
    ScoringConfig,
};
pub use crate::core::trust::{ReputationTable, TrustGraph};
pub use crate::infra::rules::JsonRuleStore;
