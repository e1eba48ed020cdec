//! Connected subset enumeration
//!
//! Gantree: L3_Architecture → ConnectivityEnumerator
//!
//! Finds every vertex subset of a given size whose induced undirected
//! subgraph is connected. Subsets are grown one neighbour at a time from
//! each single vertex; every subset reached is memoized under a canonical
//! key so that a different growth order never re-expands it.

use qarch_core::{Adjacency, QarchError, QarchResult, QubitId, QubitSubset};
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

/// Canonical, hashable representation of a qubit subset
trait SubsetKey: Clone + Eq + Hash {
    fn singleton(qubit: QubitId) -> Self;
    fn contains(&self, qubit: QubitId) -> bool;
    fn with(&self, qubit: QubitId) -> Self;
    fn len(&self) -> usize;
    fn members(&self) -> Vec<QubitId>;
}

/// One bit per qubit, for devices of up to 128 qubits
impl SubsetKey for u128 {
    fn singleton(qubit: QubitId) -> Self {
        1u128 << qubit
    }

    fn contains(&self, qubit: QubitId) -> bool {
        self & (1u128 << qubit) != 0
    }

    fn with(&self, qubit: QubitId) -> Self {
        self | (1u128 << qubit)
    }

    fn len(&self) -> usize {
        self.count_ones() as usize
    }

    fn members(&self) -> Vec<QubitId> {
        let mut bits = *self;
        let mut members = Vec::with_capacity(self.len());
        while bits != 0 {
            members.push(bits.trailing_zeros() as QubitId);
            bits &= bits - 1;
        }
        members
    }
}

/// Sorted index vector, for larger devices
impl SubsetKey for Vec<QubitId> {
    fn singleton(qubit: QubitId) -> Self {
        vec![qubit]
    }

    fn contains(&self, qubit: QubitId) -> bool {
        self.binary_search(&qubit).is_ok()
    }

    fn with(&self, qubit: QubitId) -> Self {
        let mut next = self.clone();
        if let Err(pos) = next.binary_search(&qubit) {
            next.insert(pos, qubit);
        }
        next
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn members(&self) -> Vec<QubitId> {
        self.clone()
    }
}

/// Enumerator of connected induced subsets
/// Gantree: ConnectedSubsets // 연결 부분집합 열거
#[derive(Debug, Clone, Copy)]
pub struct ConnectedSubsets<'a> {
    adjacency: &'a Adjacency,
    bitmask_limit: usize,
}

impl<'a> ConnectedSubsets<'a> {
    /// Create an enumerator over `adjacency`; devices with at most
    /// `bitmask_limit` qubits use bitmask keys
    pub fn new(adjacency: &'a Adjacency, bitmask_limit: usize) -> Self {
        Self {
            adjacency,
            bitmask_limit: bitmask_limit.min(u128::BITS as usize),
        }
    }

    /// Whether enumeration will use bitmask keys
    pub fn uses_bitmask(&self) -> bool {
        self.adjacency.num_qubits() <= self.bitmask_limit
    }

    /// All connected subsets of `size` qubits, in ascending lexicographic order
    /// Gantree: enumerate(k) -> Result<BTreeSet<QubitSubset>> // 열거
    pub fn enumerate(&self, size: usize) -> QarchResult<BTreeSet<QubitSubset>> {
        let num_qubits = self.adjacency.num_qubits();
        if size == 0 || size > num_qubits {
            return Err(QarchError::InvalidSubsetSize { size, num_qubits });
        }

        let subsets = if self.uses_bitmask() {
            grow::<u128>(self.adjacency, size)
        } else {
            grow::<Vec<QubitId>>(self.adjacency, size)
        };

        log::debug!(
            "found {} connected subsets of size {} on {} qubits",
            subsets.len(),
            size,
            num_qubits
        );

        Ok(subsets)
    }
}

/// Depth-first growth from every vertex, memoizing visited subsets
fn grow<K: SubsetKey>(adjacency: &Adjacency, size: usize) -> BTreeSet<QubitSubset> {
    let mut visited: HashSet<K> = HashSet::new();
    let mut found = BTreeSet::new();

    for start in 0..adjacency.num_qubits() {
        let root = K::singleton(start);
        if !visited.insert(root.clone()) {
            continue;
        }

        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            let members = current.members();

            if current.len() == size {
                found.insert(members.into_iter().collect());
                continue;
            }

            for &member in &members {
                for &neighbour in adjacency.neighbours(member) {
                    if current.contains(neighbour) {
                        continue;
                    }
                    let next = current.with(neighbour);
                    if visited.insert(next.clone()) {
                        stack.push(next);
                    }
                }
            }
        }
    }

    found
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use qarch_core::{grid_map, linear_map, ring_map, CouplingMap};

    fn adjacency(num_qubits: usize, cm: &CouplingMap) -> Adjacency {
        Adjacency::from_coupling_map(num_qubits, cm).unwrap()
    }

    fn subset(qubits: &[QubitId]) -> QubitSubset {
        qubits.iter().copied().collect()
    }

    /// Reference count by brute force over all subsets
    fn brute_force(adj: &Adjacency, size: usize) -> usize {
        let n = adj.num_qubits();
        (0u32..(1 << n))
            .filter(|mask| mask.count_ones() as usize == size)
            .filter(|mask| {
                let s: QubitSubset = (0..n).filter(|q| mask & (1 << q) != 0).collect();
                adj.is_connected_subset(&s)
            })
            .count()
    }

    #[test]
    fn test_invalid_size() {
        let adj = adjacency(3, &linear_map(3));
        let subsets = ConnectedSubsets::new(&adj, 128);
        assert!(matches!(
            subsets.enumerate(0),
            Err(QarchError::InvalidSubsetSize { size: 0, .. })
        ));
        assert!(matches!(
            subsets.enumerate(4),
            Err(QarchError::InvalidSubsetSize { size: 4, num_qubits: 3 })
        ));
    }

    #[test]
    fn test_singletons_and_full_set() {
        let adj = adjacency(5, &ring_map(5));
        let subsets = ConnectedSubsets::new(&adj, 128);

        assert_eq!(subsets.enumerate(1).unwrap().len(), 5);

        let full = subsets.enumerate(5).unwrap();
        assert_eq!(full.len(), 1);
        assert!(full.contains(&subset(&[0, 1, 2, 3, 4])));
    }

    #[test]
    fn test_ring_subsets() {
        let adj = adjacency(5, &ring_map(5));
        let subsets = ConnectedSubsets::new(&adj, 128);

        let pairs = subsets.enumerate(2).unwrap();
        assert_eq!(pairs.len(), 5);
        assert!(pairs.contains(&subset(&[0, 4])));
        assert!(!pairs.contains(&subset(&[0, 2])));

        assert_eq!(subsets.enumerate(4).unwrap().len(), 5);
    }

    #[test]
    fn test_disconnected_graph() {
        // 0-1 and 2-3, no bridge
        let cm: CouplingMap = [(0, 1), (2, 3)].into_iter().collect();
        let adj = adjacency(4, &cm);
        let subsets = ConnectedSubsets::new(&adj, 128);

        assert_eq!(subsets.enumerate(1).unwrap().len(), 4);
        assert_eq!(subsets.enumerate(2).unwrap().len(), 2);
        assert!(subsets.enumerate(3).unwrap().is_empty());
        assert!(subsets.enumerate(4).unwrap().is_empty());
    }

    #[test]
    fn test_matches_brute_force() {
        let adj = adjacency(9, &grid_map(3, 3));
        let subsets = ConnectedSubsets::new(&adj, 128);

        for size in 1..=9 {
            assert_eq!(
                subsets.enumerate(size).unwrap().len(),
                brute_force(&adj, size),
                "size {}",
                size
            );
        }
    }

    #[test]
    fn test_sorted_keys_match_bitmask() {
        let adj = adjacency(8, &grid_map(2, 4));
        let bitmask = ConnectedSubsets::new(&adj, 128);
        let sorted = ConnectedSubsets::new(&adj, 0);

        assert!(bitmask.uses_bitmask());
        assert!(!sorted.uses_bitmask());
        for size in 1..=8 {
            assert_eq!(bitmask.enumerate(size).unwrap(), sorted.enumerate(size).unwrap());
        }
    }

    #[test]
    fn test_results_are_connected() {
        let adj = adjacency(6, &linear_map(6));
        let subsets = ConnectedSubsets::new(&adj, 128).enumerate(3).unwrap();

        // Windows of a chain
        assert_eq!(subsets.len(), 4);
        for s in &subsets {
            assert!(adj.is_connected_subset(s));
        }
        assert_eq!(subsets.iter().next(), Some(&subset(&[0, 1, 2])));
    }

    #[test]
    fn test_bitmask_members() {
        let key = <u128 as SubsetKey>::singleton(3).with(0).with(127);
        assert_eq!(key.members(), vec![0, 3, 127]);
        assert_eq!(SubsetKey::len(&key), 3);
        assert!(SubsetKey::contains(&key, 127));
        assert!(!SubsetKey::contains(&key, 1));
    }
}
