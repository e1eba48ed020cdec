//! # QARCH Calibration
//!
//! Calibration data (gate error rates) used to score device subgraphs.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qarch_calibration // L2: Calibration (완료)
//!     Properties // 캘리브레이션 데이터 (완료)
//!         num_qubits, single_qubit_errors, two_qubit_errors
//!         single_qubit_fidelity(), two_qubit_fidelity(), coupling_map()
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qarch_calibration::prelude::*;
//!
//! let mut props = Properties::new(2);
//! props.set_single_qubit_error_rate(0, "x", 0.001).unwrap();
//! props.set_two_qubit_error_rate(0, 1, 0.01).unwrap();
//!
//! // Coupling map implied by the two-qubit entries
//! assert_eq!(props.coupling_map().len(), 1);
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Calibration properties (Gantree: L2_Calibration → Properties)
pub mod properties;

// ============================================================================
// Re-exports
// ============================================================================

pub use properties::Properties;

// ============================================================================
// Prelude
// ============================================================================

/// Convenient imports for common use cases
pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use qarch_calibration::prelude::*;
    //! ```

    pub use crate::properties::Properties;
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use qarch_core::{qubit_list, validate_coupling_map, ErrorRate};

    #[test]
    fn test_properties_describe_device() {
        let mut props = Properties::new(4);
        for q in 0..4 {
            props.set_single_qubit_error_rate(q, "x", 0.9).unwrap();
        }
        for (a, b, e) in [(0, 1, 0.8), (1, 2, 0.7), (2, 3, 0.6)] {
            props.set_two_qubit_error_rate(a, b, e).unwrap();
            props.set_two_qubit_error_rate(b, a, e).unwrap();
        }

        let cm = props.coupling_map();
        assert_eq!(cm.len(), 6);
        assert_eq!(qubit_list(&cm), vec![0, 1, 2, 3]);
        assert!(validate_coupling_map(props.num_qubits(), &cm).is_ok());
    }

    #[test]
    fn test_fidelity_of_pair() {
        let mut props = Properties::new(2);
        props.set_two_qubit_error_rate(0, 1, 0.25).unwrap();

        let f = props.two_qubit_fidelity(0, 1, ErrorRate::ZERO)
            * props.two_qubit_fidelity(1, 0, ErrorRate::ZERO);
        assert!((f - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        let props = Properties::new(5);
        assert!(props.to_string().contains("5Q"));
    }
}
