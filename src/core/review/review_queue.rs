// Review ordering queue - flagged posts ordered by descending severity.
//
// Backed by a binary max-heap. The std heap makes no promise about equal
// keys, so each entry carries a monotone sequence number: among equal
// severities the earliest-inserted post is yielded first (FIFO). That
// makes drain order fully deterministic for a given insertion sequence.

use crate::core::scoring::FlaggedPost;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry {
    severity: u32,
    seq: u64,
    post: FlaggedPost,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.severity == other.severity && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap on severity; inverted on seq so the OLDEST entry wins
        // a severity tie.
        self.severity
            .cmp(&other.severity)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of flagged posts, highest severity first.
#[derive(Debug, Default)]
pub struct ReviewQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl ReviewQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Take ownership of a flagged post. The ordering key is the post's
    /// own severity.
    pub fn push(&mut self, post: FlaggedPost) {
        let entry = Entry {
            severity: post.severity,
            seq: self.next_seq,
            post,
        };
        self.next_seq += 1;
        self.heap.push(entry);
    }

    /// Remove and return the highest-severity post (earliest-inserted on
    /// ties), or `None` when the queue is empty.
    pub fn pop(&mut self) -> Option<FlaggedPost> {
        self.heap.pop().map(|entry| entry.post)
    }

    /// Drain the whole queue into a descending-severity report.
    pub fn drain_ordered(&mut self) -> Vec<FlaggedPost> {
        let mut report = Vec::with_capacity(self.heap.len());
        while let Some(post) = self.pop() {
            report.push(post);
        }
        report
    }
}

impl Extend<FlaggedPost> for ReviewQueue {
    fn extend<I: IntoIterator<Item = FlaggedPost>>(&mut self, iter: I) {
        for post in iter {
            self.push(post);
        }
    }
}
