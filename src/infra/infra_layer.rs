// The infra module contains implementations of core traits.
// Each feature implementation goes in its own submodule.

#[path = "rules/json_rule_store.rs"]
pub mod rules;
