// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "dictionary/word_dictionary.rs"]
pub mod dictionary;

#[path = "matcher/phrase_matcher.rs"]
pub mod matcher;

#[path = "trust/trust_graph.rs"]
pub mod trust;

#[path = "review/review_queue.rs"]
pub mod review;

#[path = "scoring/mod.rs"]
pub mod scoring;
