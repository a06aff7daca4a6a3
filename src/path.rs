use std::hash::Hash;

use crate::FxIndexMap;

/// Parent index recorded for the start of a search.
pub const NO_PARENT: usize = usize::MAX;

/// Rebuilds a path from a predecessor map laid out as an [FxIndexMap] where each value links to
/// the index of the entry that discovered it. Starting from the entry at `end`, the links are
/// followed back until an entry with no predecessor ([NO_PARENT]) is reached, and the collected
/// nodes are returned start first.
pub fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, end: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path = Vec::new();
    let mut ix = end;
    while let Some((node, value)) = parents.get_index(ix) {
        path.push(node.clone());
        ix = parent(value);
    }
    path.reverse();
    path
}
