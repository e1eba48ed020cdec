//! Coupling map graph primitives
//!
//! Gantree: L1_Graph → Coupling
//!
//! A coupling map is a set of directed edges. Connectivity and distance
//! queries ignore direction and work on the undirected [`Adjacency`] view;
//! induced sub-maps keep the original directions.

use crate::error::{QarchError, QarchResult};
use crate::types::{CouplingMap, Edge, QubitId, QubitSubset};
use std::collections::{BTreeSet, VecDeque};
use std::fmt::Write;

// ============================================================================
// Constructors
// ============================================================================

/// Complete directed map over `n` qubits: every ordered pair `(i, j)`, `i != j`
/// Gantree: fully_connected_map(n) -> CouplingMap // 완전 연결
pub fn fully_connected_map(n: usize) -> CouplingMap {
    let mut cm = CouplingMap::new();
    for i in 0..n {
        for j in 0..n {
            if i != j {
                cm.insert((i, j));
            }
        }
    }
    cm
}

/// Bidirectional linear chain 0-1-2-...-(n-1)
pub fn linear_map(n: usize) -> CouplingMap {
    let mut cm = CouplingMap::new();
    for i in 0..n.saturating_sub(1) {
        add_bidirectional(&mut cm, i, i + 1);
    }
    cm
}

/// Bidirectional ring 0-1-...-(n-1)-0
pub fn ring_map(n: usize) -> CouplingMap {
    let mut cm = linear_map(n);
    if n > 2 {
        add_bidirectional(&mut cm, n - 1, 0);
    }
    cm
}

/// Bidirectional grid, qubit index `row * cols + col`
pub fn grid_map(rows: usize, cols: usize) -> CouplingMap {
    let mut cm = CouplingMap::new();

    for r in 0..rows {
        for c in 0..cols {
            let q = r * cols + c;

            if c + 1 < cols {
                add_bidirectional(&mut cm, q, q + 1);
            }

            if r + 1 < rows {
                add_bidirectional(&mut cm, q, q + cols);
            }
        }
    }

    cm
}

fn add_bidirectional(cm: &mut CouplingMap, a: QubitId, b: QubitId) {
    cm.insert((a, b));
    cm.insert((b, a));
}

// ============================================================================
// Queries
// ============================================================================

/// Ascending, duplicate-free list of qubits that appear in any edge
/// Gantree: qubit_list(cm) -> Vec<QubitId> // 큐비트 목록
pub fn qubit_list(cm: &CouplingMap) -> Vec<QubitId> {
    cm.iter()
        .flat_map(|&(a, b)| [a, b])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Check every edge is present in both directions
pub fn is_bidirectional(cm: &CouplingMap) -> bool {
    cm.iter().all(|&(a, b)| cm.contains(&(b, a)))
}

/// Edges of `cm` with both endpoints inside `subset`, direction preserved
/// Gantree: induced_coupling_map(cm, subset) -> CouplingMap // 유도 부분그래프
pub fn induced_coupling_map(cm: &CouplingMap, subset: &QubitSubset) -> CouplingMap {
    cm.iter()
        .filter(|(a, b)| subset.contains(a) && subset.contains(b))
        .copied()
        .collect()
}

/// Check that every edge references a qubit in `[0, num_qubits)` and has
/// distinct endpoints
pub fn validate_coupling_map(num_qubits: usize, cm: &CouplingMap) -> QarchResult<()> {
    for &(a, b) in cm {
        if a == b {
            return Err(QarchError::InvalidCoupling(a, b));
        }
        for q in [a, b] {
            if q >= num_qubits {
                return Err(QarchError::QubitOutOfRange {
                    qubit: q,
                    num_qubits,
                });
            }
        }
    }
    Ok(())
}

/// Render a coupling map as `{(0 1) (1 0)}`
pub fn format_coupling_map(cm: &CouplingMap) -> String {
    let mut out = String::from("{");
    for (i, (a, b)) in cm.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "({} {})", a, b);
    }
    out.push('}');
    out
}

// ============================================================================
// Undirected Adjacency View
// ============================================================================

/// Undirected adjacency lists derived from a directed coupling map.
///
/// Neighbour lists are sorted and duplicate-free; an edge `(a, b)` or `(b, a)`
/// makes `a` and `b` adjacent.
/// Gantree: Adjacency // 무방향 인접 리스트
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    neighbours: Vec<Vec<QubitId>>,
}

impl Adjacency {
    /// Build the view over `num_qubits` vertices
    /// Gantree: from_coupling_map(n, cm) -> Result<Self> // 인접 리스트 생성
    pub fn from_coupling_map(num_qubits: usize, cm: &CouplingMap) -> QarchResult<Self> {
        validate_coupling_map(num_qubits, cm)?;

        let mut neighbours = vec![Vec::new(); num_qubits];
        for &(a, b) in cm {
            neighbours[a].push(b);
            neighbours[b].push(a);
        }
        for list in &mut neighbours {
            list.sort_unstable();
            list.dedup();
        }

        Ok(Self { neighbours })
    }

    /// Number of vertices
    pub fn num_qubits(&self) -> usize {
        self.neighbours.len()
    }

    /// Sorted neighbours of `qubit` (empty when out of range)
    pub fn neighbours(&self, qubit: QubitId) -> &[QubitId] {
        self.neighbours.get(qubit).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct neighbours
    pub fn degree(&self, qubit: QubitId) -> usize {
        self.neighbours(qubit).len()
    }

    /// Check if two qubits share an edge in either direction
    pub fn are_adjacent(&self, a: QubitId, b: QubitId) -> bool {
        self.neighbours(a).binary_search(&b).is_ok()
    }

    /// Hop distances from `source` to every vertex (BFS); `None` if unreachable
    /// Gantree: bfs_distances(src) -> Vec<Option<usize>> // 너비 우선 탐색
    pub fn bfs_distances(&self, source: QubitId) -> Vec<Option<usize>> {
        let mut dist = vec![None; self.num_qubits()];
        if source >= self.num_qubits() {
            return dist;
        }

        let mut queue = VecDeque::new();
        dist[source] = Some(0);
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            let next = dist[current].map_or(0, |d| d + 1);
            for &neighbour in &self.neighbours[current] {
                if dist[neighbour].is_none() {
                    dist[neighbour] = Some(next);
                    queue.push_back(neighbour);
                }
            }
        }

        dist
    }

    /// Check if every vertex is reachable from every other
    pub fn is_connected(&self) -> bool {
        self.num_qubits() <= 1 || self.bfs_distances(0).iter().all(Option::is_some)
    }

    /// Check if `subset` induces a connected subgraph
    pub fn is_connected_subset(&self, subset: &QubitSubset) -> bool {
        let Some(&start) = subset.iter().next() else {
            return false;
        };

        let mut seen = BTreeSet::from([start]);
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            for &neighbour in self.neighbours(current) {
                if subset.contains(&neighbour) && seen.insert(neighbour) {
                    stack.push(neighbour);
                }
            }
        }

        seen.len() == subset.len()
    }

    /// Undirected edges `(a, b)` with `a < b`
    pub fn undirected_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.neighbours.iter().enumerate().flat_map(|(a, list)| {
            list.iter()
                .copied()
                .filter(move |&b| a < b)
                .map(move |b| (a, b))
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
