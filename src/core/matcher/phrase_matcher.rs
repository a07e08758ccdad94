// Banned-phrase matcher - linear-time substring search (Knuth-Morris-Pratt).
//
// A `PhraseMatcher` is built once per banned phrase at engine startup; the
// failure table is precomputed so every post scan is O(text + phrase) with
// no re-scanning of text characters after a mismatch.
//
// Matching is byte-exact and case-sensitive; the scoring policy lower-cases
// content before scanning because phrases are case-insensitive by policy.

/// Compiled search pattern with its precomputed failure (LPS) table.
///
/// `lps[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it - the position to fall back to on mismatch.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    pattern: String,
    lps: Vec<usize>,
}

impl PhraseMatcher {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let lps = compute_lps(pattern.as_bytes());
        Self { pattern, lps }
    }

    /// The phrase this matcher was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// All start offsets (byte positions) where the pattern occurs in
    /// `text`, in ascending order. Overlapping occurrences are reported:
    /// after a full match the scan falls back through the failure table
    /// instead of restarting past the match.
    ///
    /// An empty pattern yields no occurrences, by definition.
    pub fn find_occurrences(&self, text: &str) -> Vec<usize> {
        let text = text.as_bytes();
        let pattern = self.pattern.as_bytes();
        let (n, m) = (text.len(), pattern.len());

        let mut occurrences = Vec::new();
        if m == 0 {
            return occurrences;
        }

        let mut i = 0; // text index
        let mut j = 0; // pattern index
        while i < n {
            if text[i] == pattern[j] {
                i += 1;
                j += 1;
                if j == m {
                    occurrences.push(i - m);
                    // Keep going - the next occurrence may overlap this one.
                    j = self.lps[m - 1];
                }
            } else if j > 0 {
                // Mismatch with a partial match in flight: fall back in the
                // pattern only, never move the text pointer backwards.
                j = self.lps[j - 1];
            } else {
                i += 1;
            }
        }

        occurrences
    }

    /// Whether the pattern occurs in `text` at least once.
    pub fn is_match(&self, text: &str) -> bool {
        !self.find_occurrences(text).is_empty()
    }
}

/// One-shot search without keeping the compiled matcher around.
pub fn find_occurrences(text: &str, pattern: &str) -> Vec<usize> {
    PhraseMatcher::new(pattern).find_occurrences(text)
}

/// One-shot existence check.
pub fn contains_pattern(text: &str, pattern: &str) -> bool {
    PhraseMatcher::new(pattern).is_match(text)
}

/// Build the failure table. Left-to-right, maintaining the length of the
/// current longest prefix-suffix: extend it on a match, otherwise fall back
/// to `lps[len - 1]` until it reaches zero.
fn compute_lps(pattern: &[u8]) -> Vec<usize> {
    let mut lps = vec![0; pattern.len()];
    let mut len = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len > 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// O(n*m) reference scanner the linear matcher must agree with.
    fn brute_force(text: &str, pattern: &str) -> Vec<usize> {
        let (t, p) = (text.as_bytes(), pattern.as_bytes());
        if p.is_empty() || p.len() > t.len() {
            return Vec::new();
        }
        (0..=t.len() - p.len())
            .filter(|&i| &t[i..i + p.len()] == p)
            .collect()
    }

    #[test]
    fn failure_table_matches_known_values() {
        assert_eq!(compute_lps(b"ababaca"), vec![0, 0, 1, 2, 3, 0, 1]);
        assert_eq!(compute_lps(b"aaaa"), vec![0, 1, 2, 3]);
        assert_eq!(compute_lps(b"abcd"), vec![0, 0, 0, 0]);
        assert_eq!(compute_lps(b""), Vec::<usize>::new());
    }

    #[test]
    fn finds_single_occurrence() {
        let matcher = PhraseMatcher::new("free money");
        assert_eq!(matcher.find_occurrences("get free money now"), vec![4]);
        assert!(matcher.is_match("get free money now"));
    }

    #[test]
    fn finds_nothing_when_absent() {
        let matcher = PhraseMatcher::new("click here");
        assert!(matcher.find_occurrences("this is a great product").is_empty());
        assert!(!matcher.is_match("this is a great product"));
    }

    #[test]
    fn overlapping_occurrences_are_all_reported() {
        assert_eq!(find_occurrences("aaaa", "aa"), vec![0, 1, 2]);
        assert_eq!(find_occurrences("abababab", "abab"), vec![0, 2, 4]);
    }

    #[test]
    fn empty_pattern_never_matches() {
        assert!(find_occurrences("anything at all", "").is_empty());
        assert!(find_occurrences("", "").is_empty());
        assert!(!contains_pattern("anything at all", ""));
    }

    #[test]
    fn pattern_longer_than_text_never_matches() {
        assert!(find_occurrences("hi", "hello there").is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        // Case folding is the caller's job (the policy lower-cases content
        // before scanning).
        let matcher = PhraseMatcher::new("click here");
        assert!(!matcher.is_match("Click Here"));
        assert!(matcher.is_match("Click Here".to_lowercase().as_str()));
    }

    #[test]
    fn agrees_with_brute_force_on_random_inputs() {
        // Small alphabet so overlaps and near-misses are common.
        let mut rng = StdRng::seed_from_u64(0x5EED);

        for case in 0..150 {
            let text_len = rng.gen_range(0..40);
            let text: String = (0..text_len)
                .map(|_| rng.gen_range(b'a'..=b'c') as char)
                .collect();
            let pattern_len = rng.gen_range(1..6);
            let pattern: String = (0..pattern_len)
                .map(|_| rng.gen_range(b'a'..=b'c') as char)
                .collect();

            let matcher = PhraseMatcher::new(pattern.as_str());
            assert_eq!(
                matcher.find_occurrences(&text),
                brute_force(&text, &pattern),
                "case {}: text {:?} pattern {:?}",
                case,
                text,
                pattern
            );
        }
    }
}
