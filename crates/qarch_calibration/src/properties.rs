//! Calibration properties of a quantum device
//!
//! Gantree: L2_Calibration → Properties
//!
//! Per-qubit single-qubit gate error rates (keyed by gate name) and
//! per-coupling two-qubit error rates. Entries are validated on insertion;
//! lookups of absent entries fall back to a caller-supplied default.

use qarch_core::{CouplingMap, Edge, ErrorRate, QarchError, QarchResult, QubitId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Calibration data of a device
/// Gantree: Properties // 캘리브레이션 데이터
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    /// Number of qubits
    /// Gantree: num_qubits: usize // 큐비트 수
    num_qubits: usize,

    /// Single-qubit error rates per qubit, then per gate
    /// Gantree: single_qubit_errors: Map<Q,Map<gate,ErrorRate>> // 1Q 에러 맵
    #[serde(with = "single_qubit_serde")]
    single_qubit_errors: BTreeMap<QubitId, BTreeMap<String, ErrorRate>>,

    /// Two-qubit error rates per ordered pair
    /// Gantree: two_qubit_errors: Map<(Q,Q),ErrorRate> // 2Q 에러 맵
    #[serde(with = "two_qubit_serde")]
    two_qubit_errors: BTreeMap<Edge, ErrorRate>,
}

impl Properties {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create empty properties for `num_qubits` qubits
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            ..Self::default()
        }
    }

    /// Create from uniform values on a coupling map (for testing/simulation)
    pub fn uniform(
        num_qubits: usize,
        coupling_map: &CouplingMap,
        gate: &str,
        error_1q: f64,
        error_2q: f64,
    ) -> QarchResult<Self> {
        let mut props = Self::new(num_qubits);

        for q in 0..num_qubits {
            props.set_single_qubit_error_rate(q, gate, error_1q)?;
        }
        for &(a, b) in coupling_map {
            props.set_two_qubit_error_rate(a, b, error_2q)?;
        }

        Ok(props)
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> QarchResult<Self> {
        let props: Self = serde_json::from_str(json)?;
        props.validate()?;
        Ok(props)
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

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Set number of qubits
    pub fn set_num_qubits(&mut self, num_qubits: usize) {
        self.num_qubits = num_qubits;
    }

    /// Set the error rate of `gate` on `qubit`
    /// Gantree: set_single_qubit_error_rate(q,gate,e) -> Result // 1Q 에러 설정
    pub fn set_single_qubit_error_rate(
        &mut self,
        qubit: QubitId,
        gate: &str,
        error_rate: f64,
    ) -> QarchResult<()> {
        self.check_qubit(qubit)?;
        let rate = ErrorRate::new(error_rate)?;
        self.single_qubit_errors
            .entry(qubit)
            .or_default()
            .insert(gate.to_string(), rate);
        Ok(())
    }

    /// Set the error rate of the two-qubit gate with control `control` and
    /// target `target`
    /// Gantree: set_two_qubit_error_rate(a,b,e) -> Result // 2Q 에러 설정
    pub fn set_two_qubit_error_rate(
        &mut self,
        control: QubitId,
        target: QubitId,
        error_rate: f64,
    ) -> QarchResult<()> {
        if control == target {
            return Err(QarchError::InvalidCoupling(control, target));
        }
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        let rate = ErrorRate::new(error_rate)?;
        self.two_qubit_errors.insert((control, target), rate);
        Ok(())
    }

    fn check_qubit(&self, qubit: QubitId) -> QarchResult<()> {
        if qubit >= self.num_qubits {
            return Err(QarchError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Check if no error rates are recorded
    pub fn is_empty(&self) -> bool {
        self.single_qubit_errors.is_empty() && self.two_qubit_errors.is_empty()
    }

    /// Recorded error rate of `gate` on `qubit`
    pub fn single_qubit_error_rate(&self, qubit: QubitId, gate: &str) -> Option<ErrorRate> {
        self.single_qubit_errors
            .get(&qubit)
            .and_then(|gates| gates.get(gate))
            .copied()
    }

    /// Recorded error rate of the ordered pair
    pub fn two_qubit_error_rate(&self, control: QubitId, target: QubitId) -> Option<ErrorRate> {
        self.two_qubit_errors.get(&(control, target)).copied()
    }

    /// Fidelity of `gate` on `qubit`, using `default` when unrecorded
    pub fn single_qubit_fidelity(&self, qubit: QubitId, gate: &str, default: ErrorRate) -> f64 {
        self.single_qubit_error_rate(qubit, gate)
            .unwrap_or_else(|| {
                log::trace!("no '{}' error rate for qubit {}, using default", gate, qubit);
                default
            })
            .fidelity()
    }

    /// Fidelity of the ordered pair, using `default` when unrecorded
    pub fn two_qubit_fidelity(&self, control: QubitId, target: QubitId, default: ErrorRate) -> f64 {
        self.two_qubit_error_rate(control, target)
            .unwrap_or_else(|| {
                log::trace!(
                    "no two-qubit error rate for ({}, {}), using default",
                    control,
                    target
                );
                default
            })
            .fidelity()
    }

    /// Iterate over recorded single-qubit entries
    pub fn single_qubit_entries(&self) -> impl Iterator<Item = (QubitId, &str, ErrorRate)> + '_ {
        self.single_qubit_errors.iter().flat_map(|(&q, gates)| {
            gates
                .iter()
                .map(move |(gate, &rate)| (q, gate.as_str(), rate))
        })
    }

    /// Iterate over recorded two-qubit entries
    pub fn two_qubit_entries(&self) -> impl Iterator<Item = (Edge, ErrorRate)> + '_ {
        self.two_qubit_errors.iter().map(|(&edge, &rate)| (edge, rate))
    }

    /// Coupling map implied by the recorded two-qubit entries
    /// Gantree: coupling_map(&self) -> CouplingMap // 결합 맵 유도
    pub fn coupling_map(&self) -> CouplingMap {
        self.two_qubit_errors.keys().copied().collect()
    }

    /// Average recorded error rate of `gate`
    pub fn avg_single_qubit_error(&self, gate: &str) -> Option<f64> {
        let rates: Vec<f64> = self
            .single_qubit_entries()
            .filter(|(_, g, _)| *g == gate)
            .map(|(_, _, rate)| rate.value())
            .collect();
        average(&rates)
    }

    /// Average recorded two-qubit error rate
    pub fn avg_two_qubit_error(&self) -> Option<f64> {
        let rates: Vec<f64> = self.two_qubit_errors.values().map(ErrorRate::value).collect();
        average(&rates)
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check every entry references a qubit in range
    pub fn validate(&self) -> QarchResult<()> {
        for &q in self.single_qubit_errors.keys() {
            self.check_qubit(q)?;
        }
        for &(a, b) in self.two_qubit_errors.keys() {
            if a == b {
                return Err(QarchError::InvalidCoupling(a, b));
            }
            self.check_qubit(a)?;
            self.check_qubit(b)?;
        }
        Ok(())
    }
}

fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Properties({}Q, {} single-qubit entries, {} two-qubit entries)",
            self.num_qubits,
            self.single_qubit_entries().count(),
            self.two_qubit_errors.len()
        )
    }
}

// ============================================================================
// Serde Helpers
// ============================================================================

mod single_qubit_serde {
    use qarch_core::{ErrorRate, QubitId};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    #[derive(Serialize, Deserialize)]
    struct Entry {
        qubit: QubitId,
        gate: String,
        error: ErrorRate,
    }

    type GateErrors = BTreeMap<QubitId, BTreeMap<String, ErrorRate>>;

    pub fn serialize<S>(map: &GateErrors, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries: Vec<Entry> = map
            .iter()
            .flat_map(|(&qubit, gates)| {
                gates.iter().map(move |(gate, &error)| Entry {
                    qubit,
                    gate: gate.clone(),
                    error,
                })
            })
            .collect();
        entries.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<GateErrors, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut map = GateErrors::new();
        for e in Vec::<Entry>::deserialize(deserializer)? {
            map.entry(e.qubit).or_default().insert(e.gate, e.error);
        }
        Ok(map)
    }
}

mod two_qubit_serde {
    use qarch_core::{Edge, ErrorRate, QubitId};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    #[derive(Serialize, Deserialize)]
    struct Entry {
        control: QubitId,
        target: QubitId,
        error: ErrorRate,
    }

    pub fn serialize<S>(map: &BTreeMap<Edge, ErrorRate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries: Vec<Entry> = map
            .iter()
            .map(|(&(control, target), &error)| Entry {
                control,
                target,
                error,
            })
            .collect();
        entries.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<Edge, ErrorRate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<Entry>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .map(|e| ((e.control, e.target), e.error))
            .collect())
    }
}

// ============================================================================
// Tests
// ============================================================================
