//! Search-tree nodes and the ordered frontier they queue in.

use std::collections::BTreeSet;

use tilenav_grid::Point;

/// Handle into the per-search node arena.
pub(crate) type NodeId = usize;

/// One record of the search tree.
///
/// Nodes live in an arena owned by the search and refer to each other by
/// handle, so a parent can be shared by several children and reassigned
/// while its child is still queued. Scores are `i64`: cell costs run up to
/// `OBSTACLE - 1` and accumulate along the whole path.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) pos: Point,
    /// Accumulated cost from the start cell.
    pub(crate) g: i64,
    /// Heuristic estimate to the goal.
    pub(crate) h: i64,
    /// Total score, `g + h`.
    pub(crate) f: i64,
    pub(crate) parent: Option<NodeId>,
    /// Creation order within one search. Breaks `f` ties, earliest first.
    pub(crate) seq: u32,
}

/// Frontier key. The derived ordering compares `f`, then `seq`, then the
/// handle, so set iteration yields the exact pop order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct FrontierEntry {
    pub(crate) f: i64,
    pub(crate) seq: u32,
    pub(crate) node: NodeId,
}

/// Priority structure over the open nodes, ordered by `(f, seq)` ascending.
///
/// Backed by a balanced ordered set rather than a binary heap: a score
/// improvement removes the queued entry by identity and reinserts it under
/// the new key, and insert, remove, and pop-minimum all stay logarithmic.
pub(crate) struct OrderedFrontier {
    entries: BTreeSet<FrontierEntry>,
}

impl OrderedFrontier {
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeSet::new(),
        }
    }

    pub(crate) fn insert(&mut self, entry: FrontierEntry) {
        self.entries.insert(entry);
    }

    /// Remove a queued entry. The entry must carry the score it was inserted
    /// under, so callers rebuild it before mutating the node.
    pub(crate) fn remove(&mut self, entry: &FrontierEntry) -> bool {
        self.entries.remove(entry)
    }

    /// Pop the open node with the lowest `(f, seq)`.
    pub(crate) fn pop_min(&mut self) -> Option<NodeId> {
        self.entries.pop_first().map(|entry| entry.node)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(f: i64, seq: u32, node: NodeId) -> FrontierEntry {
        FrontierEntry { f, seq, node }
    }

    #[test]
    fn pops_lowest_score_first() {
        let mut frontier = OrderedFrontier::new();
        frontier.insert(entry(30, 0, 0));
        frontier.insert(entry(10, 1, 1));
        frontier.insert(entry(20, 2, 2));
        assert_eq!(frontier.pop_min(), Some(1));
        assert_eq!(frontier.pop_min(), Some(2));
        assert_eq!(frontier.pop_min(), Some(0));
        assert_eq!(frontier.pop_min(), None);
    }

    #[test]
    fn equal_scores_pop_in_creation_order() {
        let mut frontier = OrderedFrontier::new();
        frontier.insert(entry(10, 3, 0));
        frontier.insert(entry(10, 1, 1));
        frontier.insert(entry(10, 2, 2));
        assert_eq!(frontier.pop_min(), Some(1));
        assert_eq!(frontier.pop_min(), Some(2));
        assert_eq!(frontier.pop_min(), Some(0));
    }

    #[test]
    fn remove_then_reinsert_reorders() {
        // Score improvement: the entry leaves under its old key and comes
        // back under the better one.
        let mut frontier = OrderedFrontier::new();
        frontier.insert(entry(10, 0, 0));
        frontier.insert(entry(50, 1, 1));
        assert!(frontier.remove(&entry(50, 1, 1)));
        frontier.insert(entry(5, 1, 1));
        assert_eq!(frontier.pop_min(), Some(1));
        assert_eq!(frontier.pop_min(), Some(0));
    }

    #[test]
    fn remove_reports_membership() {
        let mut frontier = OrderedFrontier::new();
        frontier.insert(entry(10, 0, 0));
        assert!(!frontier.remove(&entry(11, 0, 0)));
        assert!(frontier.remove(&entry(10, 0, 0)));
        assert!(frontier.is_empty());
    }

    #[test]
    fn clear_empties_the_frontier() {
        let mut frontier = OrderedFrontier::new();
        frontier.insert(entry(1, 0, 0));
        frontier.insert(entry(2, 1, 1));
        assert!(!frontier.is_empty());
        frontier.clear();
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop_min(), None);
    }
}
