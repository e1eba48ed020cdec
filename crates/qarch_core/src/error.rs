//! Error types for QARCH
//!
//! Gantree: L0_Foundation → Errors
//!
//! All architecture queries fail fast with one of these errors. They fall
//! into two families: caller misuse / malformed input ([`QarchError::is_invalid_argument`])
//! and queries against an unsuitable device state ([`QarchError::is_invalid_state`]).

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for QARCH
/// Gantree: QarchError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QarchError {
    // ========================================================================
    // Argument Errors
    // ========================================================================
    /// Subset size outside [1, nqubits]
    /// Gantree: InvalidSubsetSize{{k,n}} // 부분집합 크기
    #[error("Invalid subset size {size}: must be in range [1, {num_qubits}]")]
    InvalidSubsetSize { size: usize, num_qubits: usize },

    /// Permutation is not a bijection on [0, L)
    /// Gantree: InvalidPermutation(String) // 순열 검증
    #[error("Invalid permutation: {0}")]
    InvalidPermutation(String),

    /// Qubit index out of range
    #[error("Qubit {qubit} out of range: device has {num_qubits} qubits")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    /// Edge with equal endpoints
    #[error("Invalid coupling ({0}, {1}): qubits must be different")]
    InvalidCoupling(usize, usize),

    /// Declared qubit count disagrees with the loaded data
    #[error("Qubit count mismatch: expected {expected}, found {found}")]
    QubitCountMismatch { expected: usize, found: usize },

    /// Error rate outside [0, 1]
    #[error("Invalid error rate {0}: must be in range [0, 1]")]
    InvalidErrorRate(f64),

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // State Errors
    // ========================================================================
    /// Query issued before any load
    /// Gantree: NotLoaded // 로드 전 질의
    #[error("Architecture has not been loaded")]
    NotLoaded,

    /// Distance is infinite for some pair
    #[error("Coupling graph is disconnected: no path between qubits {0} and {1}")]
    Disconnected(usize, usize),

    /// No connected subset of the requested size exists
    #[error("No connected subset of {size} qubits exists on this device")]
    NoConnectedSubset { size: usize },

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),

    /// File I/O error
    #[error("File error: {0}")]
    FileError(String),
}

/// Result type alias for QARCH operations
/// Gantree: QarchResult<T> // type alias
pub type QarchResult<T> = Result<T, QarchError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for QarchError {
    fn from(err: serde_json::Error) -> Self {
        QarchError::JsonError(err.to_string())
    }
}

impl From<std::io::Error> for QarchError {
    fn from(err: std::io::Error) -> Self {
        QarchError::FileError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl QarchError {
    /// Check if error signals caller misuse or malformed input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            QarchError::InvalidSubsetSize { .. }
                | QarchError::InvalidPermutation(_)
                | QarchError::QubitOutOfRange { .. }
                | QarchError::InvalidCoupling(..)
                | QarchError::QubitCountMismatch { .. }
                | QarchError::InvalidErrorRate(_)
                | QarchError::InvalidConfig(_)
        )
    }

    /// Check if error signals a query against an unsuitable device state
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            QarchError::NotLoaded
                | QarchError::Disconnected(..)
                | QarchError::NoConnectedSubset { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
