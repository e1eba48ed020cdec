//! Serializable device description
//!
//! Gantree: L3_Architecture → DeviceDescription
//!
//! In-memory form handed over by loader collaborators. Either the coupling
//! map or the two-qubit entries of the properties define connectivity.

use qarch_calibration::Properties;
use qarch_core::{qubit_list, CouplingMap, Edge, QarchError, QarchResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Device description
/// Gantree: DeviceDescription // 장치 기술
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceDescription {
    /// Device name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Qubit count; inferred from the other fields when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_qubits: Option<usize>,

    /// Directed couplings
    #[serde(default)]
    pub coupling_map: Vec<Edge>,

    /// Calibration data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

impl DeviceDescription {
    /// Describe a device by its coupling map
    pub fn from_coupling_map(num_qubits: usize, coupling_map: &CouplingMap) -> Self {
        Self {
            num_qubits: Some(num_qubits),
            coupling_map: coupling_map.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Set name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach calibration data
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> QarchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> QarchResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> QarchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Effective coupling map: the explicit one, else the one implied by
    /// the properties
    pub fn effective_coupling_map(&self) -> CouplingMap {
        if self.coupling_map.is_empty() {
            if let Some(props) = &self.properties {
                return props.coupling_map();
            }
        }
        self.coupling_map.iter().copied().collect()
    }

    /// Effective qubit count: declared, else from properties, else one past
    /// the largest qubit in the coupling map
    ///
    /// Fails with [`QarchError::QubitCountMismatch`] when the declared count
    /// and the properties disagree.
    pub fn effective_num_qubits(&self) -> QarchResult<usize> {
        let from_props = self.properties.as_ref().map(Properties::num_qubits);

        match (self.num_qubits, from_props) {
            (Some(expected), Some(found)) if expected != found => {
                Err(QarchError::QubitCountMismatch { expected, found })
            }
            (Some(n), _) | (None, Some(n)) => Ok(n),
            (None, None) => Ok(qubit_list(&self.effective_coupling_map())
                .last()
                .map_or(0, |&q| q + 1)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use qarch_core::ring_map;

    #[test]
    fn test_infer_num_qubits() {
        let desc = DeviceDescription::from_json(r#"{"coupling_map": [[0, 1], [1, 3]]}"#).unwrap();
        assert_eq!(desc.effective_num_qubits(), Ok(4));
        assert_eq!(desc.effective_coupling_map().len(), 2);
    }

    #[test]
    fn test_coupling_from_properties() {
        let mut props = Properties::new(3);
        props.set_two_qubit_error_rate(0, 2, 0.1).unwrap();
        let desc = DeviceDescription::default().with_properties(props);

        assert_eq!(desc.effective_num_qubits(), Ok(3));
        assert!(desc.effective_coupling_map().contains(&(0, 2)));
    }

    #[test]
    fn test_count_mismatch() {
        let desc = DeviceDescription::from_coupling_map(5, &ring_map(5))
            .with_properties(Properties::new(4));
        assert_eq!(
            desc.effective_num_qubits(),
            Err(QarchError::QubitCountMismatch {
                expected: 5,
                found: 4
            })
        );
    }

    #[test]
    fn test_json_round_trip() {
        let desc = DeviceDescription::from_coupling_map(5, &ring_map(5)).with_name("ring5");
        let json = desc.to_json().unwrap();
        assert!(json.contains("ring5"));
        assert_eq!(DeviceDescription::from_json(&json).unwrap(), desc);
    }

    #[test]
    fn test_empty_description() {
        let desc = DeviceDescription::from_json("{}").unwrap();
        assert_eq!(desc.effective_num_qubits(), Ok(0));
        assert!(desc.effective_coupling_map().is_empty());
    }
}
