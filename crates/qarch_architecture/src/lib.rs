//! # QARCH Architecture
//!
//! Quantum device model: connectivity, calibration, connected-subset
//! enumeration, fidelity-based subgraph selection, and the coupling limit.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qarch_architecture // L3: Architecture (완료)
//!     ArchitectureConfig // 기준 게이트, 기본 오류율 (완료)
//!     DeviceDescription // 직렬화 장치 기술 (완료)
//!     ConnectivityEnumerator // 연결 부분집합 열거 (완료)
//!     FidelitySelector // 충실도 기반 선택 (완료)
//!     DistanceTable // 전쌍 거리, 지름 (완료)
//!     Architecture // 장치 모델 퍼사드 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qarch_architecture::prelude::*;
//!
//! let mut arch = Architecture::new();
//! arch.load_coupling_map(5, ring_map(5)).unwrap();
//!
//! assert_eq!(arch.all_connected_subsets(2).unwrap().len(), 5);
//! assert_eq!(arch.coupling_limit().unwrap(), 2);
//! ```
//!
//! ## Fidelity Selection
//!
//! ```rust
//! use qarch_architecture::prelude::*;
//!
//! let mut props = Properties::new(3);
//! props.set_two_qubit_error_rate(0, 1, 0.2).unwrap();
//! props.set_two_qubit_error_rate(1, 2, 0.05).unwrap();
//!
//! let arch = Architecture::from_properties(props).unwrap();
//! let best = arch.highest_fidelity_coupling_map(2).unwrap();
//! assert!(best.contains(&(1, 2)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Configuration (Gantree: L3_Architecture → ArchitectureConfig)
pub mod config;

/// Device description (Gantree: L3_Architecture → DeviceDescription)
pub mod description;

/// Connected subsets (Gantree: L3_Architecture → ConnectivityEnumerator)
pub mod subsets;

/// Fidelity scoring (Gantree: L3_Architecture → FidelitySelector)
pub mod fidelity;

/// Distances and diameter (Gantree: L3_Architecture → DistanceTable)
pub mod distance;

/// Device model (Gantree: L3_Architecture → Architecture)
pub mod architecture;

// ============================================================================
// Re-exports
// ============================================================================

pub use architecture::Architecture;
pub use config::ArchitectureConfig;
pub use description::DeviceDescription;
pub use distance::DistanceTable;
pub use fidelity::FidelitySelector;
pub use subsets::ConnectedSubsets;

// ============================================================================
// Prelude
// ============================================================================

/// Convenient imports for common use cases
pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use qarch_architecture::prelude::*;
    //! ```

    pub use crate::architecture::Architecture;
    pub use crate::config::ArchitectureConfig;
    pub use crate::description::DeviceDescription;
    pub use crate::distance::DistanceTable;
    pub use crate::fidelity::FidelitySelector;
    pub use crate::subsets::ConnectedSubsets;

    pub use qarch_calibration::Properties;
    pub use qarch_core::prelude::*;
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
