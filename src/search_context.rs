//! Best-first search shared by Dijkstra and A*. This is a variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! which additionally records the order in which nodes are closed and breaks ties between equal
//! estimates by insertion order.
use indexmap::map::Entry::{Occupied, Vacant};
use log::debug;
use num_traits::Zero;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::path::{reverse_path, NO_PARENT};
use crate::{FxIndexMap, FxIndexSet};

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    sequence: usize,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimate first, then the entry pushed earliest
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// What a best-first search produced: every closed node in closing order, and the path with its
/// cost if the goal was reached.
#[derive(Clone, Debug)]
pub struct SearchOutcome<N, C> {
    pub visited: Vec<N>,
    pub path: Option<(Vec<N>, C)>,
}

/// Per-invocation search state. A context is created for a single search and dropped with it,
/// so concurrent searches never share a tie-break counter or any bookkeeping.
pub struct SearchContext<N, C> {
    to_see: BinaryHeap<SmallestCostHolder<C>>,
    /// Discovered nodes with the index of their predecessor and the best known cost.
    pub parents: FxIndexMap<N, (usize, C)>,
    /// Visited nodes in the order they were closed.
    pub closed: FxIndexSet<N>,
    sequence: usize,
}

impl<N, C> Default for SearchContext<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    fn default() -> Self {
        SearchContext::new()
    }
}

impl<N, C> SearchContext<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    pub fn new() -> SearchContext<N, C> {
        SearchContext {
            to_see: BinaryHeap::new(),
            parents: FxIndexMap::default(),
            closed: FxIndexSet::default(),
            sequence: 0,
        }
    }

    fn push(&mut self, estimated_cost: C, cost: C, index: usize) {
        self.to_see.push(SmallestCostHolder {
            estimated_cost,
            cost,
            sequence: self.sequence,
            index,
        });
        self.sequence += 1;
    }

    /// Runs the search from `start` until `success` holds for a closed node or the frontier is
    /// exhausted. Entries popped for an already closed node are stale and skipped (lazy
    /// deletion). Move costs must be non-negative.
    pub fn best_first_search<FN, IN, FH, FS>(
        mut self,
        start: &N,
        mut successors: FN,
        mut heuristic: FH,
        mut success: FS,
    ) -> SearchOutcome<N, C>
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, C)>,
        FH: FnMut(&N) -> C,
        FS: FnMut(&N) -> bool,
    {
        self.parents.insert(start.clone(), (NO_PARENT, Zero::zero()));
        self.push(heuristic(start), Zero::zero(), 0);
        while let Some(SmallestCostHolder { cost, index, .. }) = self.to_see.pop() {
            let Some((node, _)) = self.parents.get_index(index) else {
                continue;
            };
            let node = node.clone();
            if !self.closed.insert(node.clone()) {
                continue;
            }
            if success(&node) {
                let path = reverse_path(&self.parents, |&(p, _)| p, index);
                return SearchOutcome {
                    visited: self.closed.into_iter().collect(),
                    path: Some((path, cost)),
                };
            }
            for (successor, move_cost) in successors(&node) {
                if self.closed.contains(&successor) {
                    continue;
                }
                let new_cost = cost + move_cost;
                let h; // heuristic(&successor)
                let n; // index for successor
                match self.parents.entry(successor) {
                    Vacant(e) => {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    }
                    Occupied(mut e) => {
                        if e.get().1 > new_cost {
                            h = heuristic(e.key());
                            n = e.index();
                            e.insert((index, new_cost));
                        } else {
                            continue;
                        }
                    }
                }
                self.push(new_cost + h, new_cost, n);
            }
        }
        debug!(
            "Frontier exhausted after closing {} of {} discovered nodes",
            self.closed.len(),
            self.parents.len()
        );
        SearchOutcome {
            visited: self.closed.into_iter().collect(),
            path: None,
        }
    }
}
