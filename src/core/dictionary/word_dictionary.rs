// Banned-word dictionary - an AVL-balanced ordered set of words.
//
// The moderation pipeline looks up every token of every post here, so the
// structure guarantees O(log n) search by rebalancing itself on insert.
// Nodes exclusively own their children (no shared references, no cycles),
// which keeps rotations simple pointer reassignment.
//
// NO I/O and no engine-specific logic here - just the data structure.

use std::cmp::Ordering;

// ============================================================================
// NODE
// ============================================================================

/// One tree node. `height` is cached so balance factors are O(1).
#[derive(Debug)]
struct Node {
    word: String,
    height: i32,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(word: String) -> Self {
        Self {
            word,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Recompute this node's cached height from its children.
    /// Must be called after any change to either subtree.
    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Balance factor = height(left) - height(right).
    /// The AVL invariant keeps this in [-1, 1] for every node.
    fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

/// Height of an optional subtree (0 for an empty one).
fn height(node: &Option<Box<Node>>) -> i32 {
    node.as_ref().map_or(0, |n| n.height)
}

// ============================================================================
// DICTIONARY
// ============================================================================

/// Self-balancing ordered set of banned words.
///
/// Words are stored exactly as inserted; callers that want case-insensitive
/// matching lower-case before calling `insert`/`contains` (the scoring
/// policy does this per token).
#[derive(Debug, Default)]
pub struct WordDictionary {
    root: Option<Box<Node>>,
    len: usize,
}

impl WordDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words in the dictionary.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a word. Duplicates are silently ignored; the tree is left
    /// byte-for-byte unchanged when the word is already present.
    pub fn insert(&mut self, word: &str) {
        let mut added = false;
        self.root = Some(Self::insert_at(self.root.take(), word, &mut added));
        if added {
            self.len += 1;
        }
    }

    /// Ordered descent. O(log n) because the balance invariant bounds the
    /// tree height.
    pub fn contains(&self, word: &str) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match word.cmp(node.word.as_str()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// All words in sorted (in-order) sequence.
    pub fn words(&self) -> Vec<&str> {
        fn walk<'a>(node: Option<&'a Node>, out: &mut Vec<&'a str>) {
            if let Some(n) = node {
                walk(n.left.as_deref(), out);
                out.push(n.word.as_str());
                walk(n.right.as_deref(), out);
            }
        }

        let mut out = Vec::with_capacity(self.len);
        walk(self.root.as_deref(), &mut out);
        out
    }

    /// Standard BST insert followed by the four AVL rebalance cases.
    /// Returns the (possibly new) subtree root.
    fn insert_at(node: Option<Box<Node>>, word: &str, added: &mut bool) -> Box<Node> {
        let mut node = match node {
            None => {
                *added = true;
                return Box::new(Node::new(word.to_owned()));
            }
            Some(n) => n,
        };

        match word.cmp(node.word.as_str()) {
            Ordering::Less => node.left = Some(Self::insert_at(node.left.take(), word, added)),
            Ordering::Greater => node.right = Some(Self::insert_at(node.right.take(), word, added)),
            // Duplicate - nothing to do, subtree stays as-is.
            Ordering::Equal => return node,
        }

        node.update_height();
        Self::rebalance(node, word)
    }

    /// Restore the balance invariant at `node` after inserting `word`
    /// somewhere below it. Which rotation applies depends on which side of
    /// the heavy child the new word landed on:
    ///
    /// - left-heavy,  word < left child  -> single right rotation
    /// - left-heavy,  word > left child  -> rotate left child left, then right
    /// - right-heavy, word > right child -> single left rotation
    /// - right-heavy, word < right child -> rotate right child right, then left
    fn rebalance(mut node: Box<Node>, word: &str) -> Box<Node> {
        let balance = node.balance_factor();

        if balance > 1 {
            let left_right_case = node
                .left
                .as_deref()
                .is_some_and(|l| word > l.word.as_str());
            if left_right_case {
                node.left = node.left.take().map(Self::rotate_left);
            }
            return Self::rotate_right(node);
        }

        if balance < -1 {
            let right_left_case = node
                .right
                .as_deref()
                .is_some_and(|r| word < r.word.as_str());
            if right_left_case {
                node.right = node.right.take().map(Self::rotate_right);
            }
            return Self::rotate_left(node);
        }

        node
    }

    /// Right rotation: the left child becomes the subtree root. Reassigns
    /// three links and recomputes two heights; in-order sequence is
    /// preserved. O(1).
    fn rotate_right(mut node: Box<Node>) -> Box<Node> {
        let Some(mut new_root) = node.left.take() else {
            // Only reachable if the balance bookkeeping is broken.
            return node;
        };
        node.left = new_root.right.take();
        node.update_height();
        new_root.right = Some(node);
        new_root.update_height();
        new_root
    }

    /// Mirror image of `rotate_right`.
    fn rotate_left(mut node: Box<Node>) -> Box<Node> {
        let Some(mut new_root) = node.right.take() else {
            return node;
        };
        node.right = new_root.left.take();
        node.update_height();
        new_root.left = Some(node);
        new_root.update_height();
        new_root
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dict = WordDictionary::new();
        for word in iter {
            dict.insert(word.as_ref());
        }
        dict
    }
}

// ============================================================================
// TESTS
// ============================================================================
