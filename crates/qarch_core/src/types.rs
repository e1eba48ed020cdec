//! Core types for QARCH
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Type aliases for the device graph and a validated error-rate wrapper
//! used by the calibration model.

use crate::error::{QarchError, QarchResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Physical qubit identifier (0-indexed)
/// Gantree: QubitId // pub type QubitId = usize
pub type QubitId = usize;

/// Directed coupling (control, target)
/// Gantree: Edge // pub type Edge = (QubitId, QubitId)
pub type Edge = (QubitId, QubitId);

/// Pair of positions exchanged by the permutation router
pub type Swap = Edge;

/// Set of allowed two-qubit gate directions.
///
/// Ordered so that equality, iteration and printing are deterministic.
/// Gantree: CouplingMap // pub type CouplingMap = BTreeSet<Edge>
pub type CouplingMap = BTreeSet<Edge>;

/// Set of physical qubits, iterated in ascending order.
///
/// The derived `Ord` on `BTreeSet` compares the sorted sequences
/// lexicographically, which is the tie-break order for subset selection.
pub type QubitSubset = BTreeSet<QubitId>;

/// Target placement: position `i` currently holds item `permutation[i]`
pub type Permutation = Vec<QubitId>;

// ============================================================================
// ErrorRate (Validated Wrapper)
// ============================================================================

/// Gate error rate in range [0, 1]
/// Gantree: ErrorRate // 범위 검증 구조체
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ErrorRate(f64);

impl ErrorRate {
    /// Create a new ErrorRate with validation
    /// Gantree: new(f64) -> Result<Self> // 생성+검증
    pub fn new(value: f64) -> QarchResult<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(QarchError::InvalidErrorRate(value));
        }
        Ok(Self(value))
    }

    /// Get the error rate value
    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the fidelity (1 - e)
    /// Gantree: fidelity() -> f64 // 1-e
    #[inline]
    pub fn fidelity(&self) -> f64 {
        1.0 - self.0
    }

    /// Perfect operation
    pub const ZERO: Self = Self(0.0);

    /// Operation that always fails
    pub const ONE: Self = Self(1.0);
}

impl Default for ErrorRate {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for ErrorRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

impl TryFrom<f64> for ErrorRate {
    type Error = QarchError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ErrorRate> for f64 {
    fn from(rate: ErrorRate) -> Self {
        rate.0
    }
}

// ============================================================================
// Tests
// ============================================================================
