//! Constants for QARCH
//!
//! Gantree: L0_Foundation → Constants
//!
//! Calibration defaults and enumeration limits.

// ============================================================================
// Calibration Defaults
// Gantree: calibration // 캘리브레이션 기본값
// ============================================================================

pub mod calibration {
    //! Defaults applied when calibration data is missing

    /// Single-qubit gate whose error rate scores a qubit
    /// Gantree: REFERENCE_GATE: &str = "x"
    pub const REFERENCE_GATE: &str = "x";

    /// Error rate assumed for qubits or couplings absent from the calibration data
    /// Gantree: DEFAULT_ERROR_RATE: f64 = 0.0
    pub const DEFAULT_ERROR_RATE: f64 = 0.0;
}

// ============================================================================
// Enumeration Limits
// Gantree: enumeration // 열거 한계
// ============================================================================

pub mod enumeration {
    //! Subset key representation limits

    /// Largest device that can use `u128` bitmask subset keys
    pub const MAX_BITMASK_QUBITS: usize = u128::BITS as usize;
}
