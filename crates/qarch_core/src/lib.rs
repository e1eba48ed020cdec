//! # QARCH Core
//!
//! Foundation types, coupling map graph primitives, and permutation routing
//! for the quantum device architecture model.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qarch_core // L0+L1: Foundation + Graph (완료)
//!     L0_Foundation // 기반 타입/상수/에러 (완료)
//!         CoreTypes // QubitId, Edge, CouplingMap, ErrorRate (완료)
//!         Constants // 캘리브레이션 기본값 (완료)
//!         Errors // 에러 타입 (완료)
//!     L1_Graph // 그래프 구조 (완료)
//!         Coupling // 결합 맵, 인접 리스트 (완료)
//!         PermutationRouter // 최소 스왑 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qarch_core::prelude::*;
//!
//! let cm = fully_connected_map(3);
//! assert_eq!(cm.len(), 6);
//! assert_eq!(qubit_list(&cm), vec![0, 1, 2]);
//!
//! let adjacency = Adjacency::from_coupling_map(5, &ring_map(5)).unwrap();
//! assert_eq!(adjacency.bfs_distances(0)[2], Some(2));
//! ```
//!
//! ## Permutation Routing
//!
//! ```rust
//! use qarch_core::prelude::*;
//!
//! let mut pi = vec![1, 2, 0, 4, 3];
//! let swaps = minimum_number_of_swaps(&mut pi).unwrap();
//!
//! // 3-cycle + transposition: 2 + 1 swaps
//! assert_eq!(swaps.len(), 3);
//! assert!(is_identity(&pi));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// Coupling map primitives (Gantree: L1_Graph → Coupling)
pub mod coupling;

/// Permutation routing (Gantree: L1_Graph → PermutationRouter)
pub mod permutation;

// ============================================================================
// Re-exports
// ============================================================================

pub use constants::{calibration, enumeration};
pub use coupling::{
    format_coupling_map, fully_connected_map, grid_map, induced_coupling_map, is_bidirectional,
    linear_map, qubit_list, ring_map, validate_coupling_map, Adjacency,
};
pub use error::{QarchError, QarchResult};
pub use permutation::{
    apply_swaps, format_permutation, is_identity, minimum_number_of_swaps, permutation_cycles,
    validate_permutation,
};
pub use types::{CouplingMap, Edge, ErrorRate, Permutation, QubitId, QubitSubset, Swap};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use qarch_core::prelude::*;
    //! ```

    pub use crate::constants::{calibration, enumeration};
    pub use crate::coupling::{
        format_coupling_map, fully_connected_map, grid_map, induced_coupling_map,
        is_bidirectional, linear_map, qubit_list, ring_map, validate_coupling_map, Adjacency,
    };
    pub use crate::error::{QarchError, QarchResult};
    pub use crate::permutation::{
        apply_swaps, format_permutation, is_identity, minimum_number_of_swaps,
        permutation_cycles, validate_permutation,
    };
    pub use crate::types::{CouplingMap, Edge, ErrorRate, Permutation, QubitId, QubitSubset, Swap};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_ring_adjacency_from_one_direction() {
        // Ring given in one direction only still connects both ways
        let cm: CouplingMap = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]
            .into_iter()
            .collect();
        let adjacency = Adjacency::from_coupling_map(5, &cm).unwrap();

        assert!(adjacency.is_connected());
        assert_eq!(adjacency.neighbours(0), &[1, 4]);
        assert!(!is_bidirectional(&cm));
        assert_eq!(qubit_list(&cm).len(), 5);
    }

    #[test]
    fn test_fully_connected_is_complete() {
        let cm = fully_connected_map(4);
        let adjacency = Adjacency::from_coupling_map(4, &cm).unwrap();

        for q in 0..4 {
            assert_eq!(adjacency.degree(q), 3);
        }
        assert!(is_bidirectional(&cm));
    }

    #[test]
    fn test_induced_maps_of_grid() {
        let cm = grid_map(2, 2);
        let top_row: QubitSubset = [0, 1].into_iter().collect();
        let diagonal: QubitSubset = [0, 3].into_iter().collect();

        assert_eq!(induced_coupling_map(&cm, &top_row).len(), 2);
        assert!(induced_coupling_map(&cm, &diagonal).is_empty());
    }

    #[test]
    fn test_swaps_route_layout() {
        // Logical qubits currently placed at the wrong physical positions
        let original: Permutation = vec![3, 0, 1, 2];
        let mut pi = original.clone();
        let swaps = minimum_number_of_swaps(&mut pi).unwrap();

        assert_eq!(swaps.len(), 3);

        let mut replay = original;
        apply_swaps(&mut replay, &swaps).unwrap();
        assert!(is_identity(&replay));
        assert_eq!(format_permutation(&replay), "[0 1 2 3]");
    }
}
