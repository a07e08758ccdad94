// JSON-backed rule store.
//
// Rules are read once at engine startup; there is no caching or reload
// because the compiled engine never consults the file again.
//
// Expected file shape:
//
// {
//   "banned_words":   ["spam", "scam"],
//   "banned_phrases": ["click here"],
//   "reputation":     { "alice": 10 },
//   "connections":    [["alice", "bob"]]
// }

use crate::core::scoring::{ModerationRules, RuleError, RuleStore};
use std::path::PathBuf;

pub struct JsonRuleStore {
    path: PathBuf,
}

impl JsonRuleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RuleStore for JsonRuleStore {
    fn load_rules(&self) -> Result<ModerationRules, RuleError> {
        let file = std::fs::File::open(&self.path)?;
        let rules = serde_json::from_reader(file)?;
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_rule_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_complete_rule_file() {
        let file = write_rule_file(
            r#"{
                "banned_words": ["spam", "fake", "scam", "hate"],
                "banned_phrases": ["click here", "free money"],
                "reputation": { "alice": 10, "bob": 3 },
                "connections": [["alice", "bob"], ["bob", "charlie"]]
            }"#,
        );

        let rules = JsonRuleStore::new(file.path()).load_rules().unwrap();

        assert_eq!(rules.banned_words.len(), 4);
        assert_eq!(rules.banned_phrases.len(), 2);
        assert_eq!(rules.reputation["alice"], 10);
        assert_eq!(rules.connections.len(), 2);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let file = write_rule_file(r#"{ "banned_words": ["spam"] }"#);

        let rules = JsonRuleStore::new(file.path()).load_rules().unwrap();

        assert_eq!(rules.banned_words, vec!["spam"]);
        assert!(rules.banned_phrases.is_empty());
        assert!(rules.reputation.is_empty());
        assert!(rules.connections.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = JsonRuleStore::new("/definitely/not/here.json")
            .load_rules()
            .unwrap_err();
        assert!(matches!(err, RuleError::Io(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let file = write_rule_file("{ not json");
        let err = JsonRuleStore::new(file.path()).load_rules().unwrap_err();
        assert!(matches!(err, RuleError::Parse(_)));
    }
}
