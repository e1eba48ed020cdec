//! Architecture configuration
//!
//! Gantree: L3_Architecture → ArchitectureConfig
//!
//! Tunables for fidelity scoring and subset enumeration.

use qarch_core::{calibration, enumeration, ErrorRate, QarchError, QarchResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Architecture configuration
/// Gantree: ArchitectureConfig // 아키텍처 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchitectureConfig {
    /// Single-qubit gate whose error rate scores each qubit
    pub reference_gate: String,

    /// Error rate assumed for calibration entries that are absent
    pub default_error_rate: f64,

    /// Largest qubit count enumerated with bitmask subset keys
    pub bitmask_limit: usize,
}

impl ArchitectureConfig {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create default configuration
    pub fn new() -> Self {
        Self {
            reference_gate: calibration::REFERENCE_GATE.to_string(),
            default_error_rate: calibration::DEFAULT_ERROR_RATE,
            bitmask_limit: enumeration::MAX_BITMASK_QUBITS,
        }
    }

    /// Configuration that treats missing calibration entries as failing
    /// with the given error rate
    pub fn pessimistic(default_error_rate: f64) -> Self {
        Self::new().with_default_error_rate(default_error_rate)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set reference gate
    pub fn with_reference_gate(mut self, gate: impl Into<String>) -> Self {
        self.reference_gate = gate.into();
        self
    }

    /// Set default error rate
    pub fn with_default_error_rate(mut self, rate: f64) -> Self {
        self.default_error_rate = rate;
        self
    }

    /// Set bitmask limit
    pub fn with_bitmask_limit(mut self, limit: usize) -> Self {
        self.bitmask_limit = limit;
        self
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Default error rate as a validated [`ErrorRate`]
    pub fn default_error(&self) -> QarchResult<ErrorRate> {
        ErrorRate::new(self.default_error_rate)
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate configuration
    pub fn validate(&self) -> QarchResult<()> {
        if self.reference_gate.is_empty() {
            return Err(QarchError::InvalidConfig(
                "reference_gate must not be empty".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.default_error_rate) {
            return Err(QarchError::InvalidConfig(format!(
                "default_error_rate must be in [0, 1], got {}",
                self.default_error_rate
            )));
        }

        if self.bitmask_limit > enumeration::MAX_BITMASK_QUBITS {
            return Err(QarchError::InvalidConfig(format!(
                "bitmask_limit must be <= {}, got {}",
                enumeration::MAX_BITMASK_QUBITS,
                self.bitmask_limit
            )));
        }

        Ok(())
    }
}

impl Default for ArchitectureConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ArchitectureConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ArchitectureConfig(gate={}, default_error={:.4}, bitmask_limit={})",
            self.reference_gate, self.default_error_rate, self.bitmask_limit
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
