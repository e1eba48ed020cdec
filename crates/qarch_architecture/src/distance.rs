//! All-pairs hop distances and the coupling limit
//!
//! Gantree: L3_Architecture → DistanceTable
//!
//! Distances are computed once with a BFS from every qubit over the
//! undirected adjacency view.

use qarch_core::{Adjacency, QarchError, QarchResult, QubitId};

/// Precomputed shortest-path hop distances
/// Gantree: DistanceTable // 거리 표
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceTable {
    /// `dist[from][to]`, `None` if unreachable
    dist: Vec<Vec<Option<usize>>>,
}

impl DistanceTable {
    /// BFS from every vertex
    /// Gantree: from_adjacency(adj) -> Self // 전쌍 BFS
    pub fn from_adjacency(adjacency: &Adjacency) -> Self {
        let dist = (0..adjacency.num_qubits())
            .map(|source| adjacency.bfs_distances(source))
            .collect();
        Self { dist }
    }

    /// Number of qubits covered
    pub fn num_qubits(&self) -> usize {
        self.dist.len()
    }

    /// Hop distance, `None` if either qubit is out of range or unreachable
    pub fn distance(&self, from: QubitId, to: QubitId) -> Option<usize> {
        self.dist.get(from).and_then(|row| row.get(to)).copied().flatten()
    }

    /// Check if every pair is reachable
    pub fn is_connected(&self) -> bool {
        self.dist.iter().flatten().all(Option::is_some)
    }

    /// Maximum shortest-path distance over all pairs
    ///
    /// Fails with [`QarchError::Disconnected`] naming the first unreachable pair.
    /// Gantree: diameter() -> Result<usize> // 지름
    pub fn diameter(&self) -> QarchResult<usize> {
        let mut max_dist = 0;

        for (from, row) in self.dist.iter().enumerate() {
            for (to, d) in row.iter().enumerate() {
                match d {
                    Some(d) => max_dist = max_dist.max(*d),
                    None => return Err(QarchError::Disconnected(from, to)),
                }
            }
        }

        Ok(max_dist)
    }
}

// ============================================================================
// Tests
// ============================================================================
