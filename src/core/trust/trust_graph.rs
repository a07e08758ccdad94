// Social trust signals - connection graph and reputation table.
//
// Both are built once at startup from caller-supplied data and read-only
// during scoring. Accounts with no connections are treated as bot-like.

use std::collections::HashMap;

/// Undirected social graph over user names (adjacency lists).
#[derive(Debug, Default, Clone)]
pub struct TrustGraph {
    adjacency: HashMap<String, Vec<String>>,
}

impl TrustGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mutual connection: `v` joins `u`'s neighbor list and vice
    /// versa. Adding the same edge twice is tolerated and counts twice in
    /// both degrees - callers own deduplication if they want it.
    pub fn add_edge(&mut self, u: &str, v: &str) {
        self.adjacency
            .entry(u.to_owned())
            .or_default()
            .push(v.to_owned());
        self.adjacency
            .entry(v.to_owned())
            .or_default()
            .push(u.to_owned());
    }

    /// Number of connections for a user. Unknown users have degree 0,
    /// which the scoring policy reads as an isolated (bot-like) account.
    pub fn degree(&self, user: &str) -> usize {
        self.adjacency.get(user).map_or(0, Vec::len)
    }
}

/// Per-user reputation scores. Unknown users default to 0; values are
/// passed through unvalidated (negative scores are the caller's business).
#[derive(Debug, Default, Clone)]
pub struct ReputationTable {
    scores: HashMap<String, i32>,
}

impl ReputationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, user: &str, score: i32) {
        self.scores.insert(user.to_owned(), score);
    }

    pub fn get(&self, user: &str) -> i32 {
        self.scores.get(user).copied().unwrap_or(0)
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for ReputationTable {
    fn from_iter<I: IntoIterator<Item = (S, i32)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().map(|(u, s)| (u.into(), s)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_symmetric() {
        let mut graph = TrustGraph::new();
        graph.add_edge("alice", "bob");

        assert_eq!(graph.degree("alice"), 1);
        assert_eq!(graph.degree("bob"), 1);

        graph.add_edge("bob", "charlie");
        assert_eq!(graph.degree("bob"), 2);
        assert_eq!(graph.degree("charlie"), 1);
    }

    #[test]
    fn unknown_user_has_degree_zero() {
        let graph = TrustGraph::new();
        assert_eq!(graph.degree("botuser"), 0);
    }

    #[test]
    fn duplicate_edges_are_counted() {
        let mut graph = TrustGraph::new();
        graph.add_edge("alice", "bob");
        graph.add_edge("alice", "bob");

        assert_eq!(graph.degree("alice"), 2);
        assert_eq!(graph.degree("bob"), 2);
    }

    #[test]
    fn reputation_defaults_to_zero() {
        let mut table = ReputationTable::new();
        table.set("alice", 10);
        table.set("grump", -4);

        assert_eq!(table.get("alice"), 10);
        assert_eq!(table.get("grump"), -4);
        assert_eq!(table.get("nobody"), 0);
    }
}
