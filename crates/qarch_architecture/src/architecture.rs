//! Quantum device architecture
//!
//! Gantree: L3_Architecture → Architecture
//!
//! Owns the qubit count, the coupling map and optional calibration
//! properties of a device, and answers the structural queries a mapping
//! pass needs. The undirected adjacency view and the distance table are
//! derived once per load. Loading takes `&mut self` and replaces all prior
//! state; queries take `&self`.

use crate::config::ArchitectureConfig;
use crate::description::DeviceDescription;
use crate::distance::DistanceTable;
use crate::fidelity::FidelitySelector;
use crate::subsets::ConnectedSubsets;
use qarch_calibration::Properties;
use qarch_core::{
    induced_coupling_map, is_bidirectional, minimum_number_of_swaps, Adjacency, CouplingMap,
    ErrorRate, QarchError, QarchResult, QubitId, QubitSubset, Swap,
};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// Quantum device architecture
/// Gantree: Architecture // 장치 아키텍처
#[derive(Debug, Clone, Default)]
pub struct Architecture {
    name: Option<String>,
    num_qubits: usize,
    coupling_map: CouplingMap,
    properties: Option<Properties>,
    adjacency: Adjacency,
    distances: DistanceTable,
    config: ArchitectureConfig,
    default_error: ErrorRate,
    loaded: bool,
}

impl Architecture {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create an empty, unloaded architecture
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty architecture with a custom configuration
    pub fn with_config(config: ArchitectureConfig) -> QarchResult<Self> {
        config.validate()?;
        let default_error = config.default_error()?;
        Ok(Self {
            config,
            default_error,
            ..Self::default()
        })
    }

    /// Create and load from a coupling map
    pub fn from_coupling_map(num_qubits: usize, coupling_map: CouplingMap) -> QarchResult<Self> {
        let mut arch = Self::new();
        arch.load_coupling_map(num_qubits, coupling_map)?;
        Ok(arch)
    }

    /// Create and load from calibration properties
    pub fn from_properties(properties: Properties) -> QarchResult<Self> {
        let mut arch = Self::new();
        arch.load_properties(properties)?;
        Ok(arch)
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Load a coupling map over `num_qubits` qubits, dropping any properties
    /// Gantree: load_coupling_map(n, cm) -> Result // 결합 맵 로드
    pub fn load_coupling_map(
        &mut self,
        num_qubits: usize,
        coupling_map: CouplingMap,
    ) -> QarchResult<()> {
        self.install(None, num_qubits, coupling_map, None)
    }

    /// Load calibration properties; the coupling map is derived from the
    /// recorded two-qubit entries
    /// Gantree: load_properties(props) -> Result // 캘리브레이션 로드
    pub fn load_properties(&mut self, properties: Properties) -> QarchResult<()> {
        properties.validate()?;
        let coupling_map = properties.coupling_map();
        self.install(None, properties.num_qubits(), coupling_map, Some(properties))
    }

    /// Load a device description
    pub fn load_description(&mut self, description: DeviceDescription) -> QarchResult<()> {
        let num_qubits = description.effective_num_qubits()?;
        let coupling_map = description.effective_coupling_map();
        if let Some(props) = &description.properties {
            props.validate()?;
        }
        self.install(
            description.name,
            num_qubits,
            coupling_map,
            description.properties,
        )
    }

    /// Load a device description from JSON
    pub fn load_json(&mut self, json: &str) -> QarchResult<()> {
        self.load_description(DeviceDescription::from_json(json)?)
    }

    /// Load a device description from a JSON file
    pub fn load_json_file(&mut self, path: impl AsRef<Path>) -> QarchResult<()> {
        let path = path.as_ref();
        let description = DeviceDescription::from_json_file(path)?;
        log::info!("loading architecture from {}", path.display());
        self.load_description(description)
    }

    /// Validate and derive everything first so a failed load leaves the
    /// previous state intact
    fn install(
        &mut self,
        name: Option<String>,
        num_qubits: usize,
        coupling_map: CouplingMap,
        properties: Option<Properties>,
    ) -> QarchResult<()> {
        if num_qubits == 0 {
            return Err(QarchError::InvalidConfig(
                "device must have at least one qubit".to_string(),
            ));
        }
        let adjacency = Adjacency::from_coupling_map(num_qubits, &coupling_map)?;
        let distances = DistanceTable::from_adjacency(&adjacency);

        log::info!(
            "loaded architecture {}: {} qubits, {} couplings, calibration {}",
            name.as_deref().unwrap_or("<unnamed>"),
            num_qubits,
            coupling_map.len(),
            if properties.is_some() { "present" } else { "absent" }
        );
        if !distances.is_connected() {
            log::warn!("coupling graph of {} qubits is disconnected", num_qubits);
        }

        self.name = name;
        self.num_qubits = num_qubits;
        self.coupling_map = coupling_map;
        self.properties = properties;
        self.adjacency = adjacency;
        self.distances = distances;
        self.loaded = true;
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Device name, if one was given
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Coupling map
    pub fn coupling_map(&self) -> &CouplingMap {
        &self.coupling_map
    }

    /// Calibration properties
    pub fn properties(&self) -> Option<&Properties> {
        self.properties.as_ref()
    }

    /// Configuration
    pub fn config(&self) -> &ArchitectureConfig {
        &self.config
    }

    /// Undirected adjacency view
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Whether a load has completed
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Whether every coupling is present in both directions
    pub fn is_bidirectional(&self) -> bool {
        is_bidirectional(&self.coupling_map)
    }

    /// Sorted undirected neighbours of `qubit`
    pub fn neighbours(&self, qubit: QubitId) -> &[QubitId] {
        self.adjacency.neighbours(qubit)
    }

    fn ensure_loaded(&self) -> QarchResult<()> {
        if self.loaded {
            Ok(())
        } else {
            Err(QarchError::NotLoaded)
        }
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

    fn selector(&self) -> FidelitySelector<'_> {
        FidelitySelector::new(
            &self.coupling_map,
            self.properties.as_ref(),
            &self.config.reference_gate,
            self.default_error,
        )
    }

    // ========================================================================
    // Graph Queries
    // ========================================================================

    /// All connected subsets of `size` qubits, in ascending lexicographic order
    /// Gantree: all_connected_subsets(k) -> Result<Set> // 연결 부분집합
    pub fn all_connected_subsets(&self, size: usize) -> QarchResult<BTreeSet<QubitSubset>> {
        self.ensure_loaded()?;
        ConnectedSubsets::new(&self.adjacency, self.config.bitmask_limit).enumerate(size)
    }

    /// Induced coupling map of every connected subset of `size` qubits
    /// Gantree: reduced_coupling_maps(k) -> Result<Vec<CouplingMap>> // 축소 맵
    pub fn reduced_coupling_maps(&self, size: usize) -> QarchResult<Vec<CouplingMap>> {
        let subsets = self.all_connected_subsets(size)?;
        Ok(subsets
            .iter()
            .map(|subset| induced_coupling_map(&self.coupling_map, subset))
            .collect())
    }

    /// Connected subset of `size` qubits with the highest fidelity score
    pub fn highest_fidelity_subset(&self, size: usize) -> QarchResult<QubitSubset> {
        let subsets = self.all_connected_subsets(size)?;
        self.selector()
            .select(&subsets)
            .map(|(subset, _)| subset.clone())
            .ok_or(QarchError::NoConnectedSubset { size })
    }

    /// Induced coupling map of the highest-fidelity connected subset
    /// Gantree: highest_fidelity_coupling_map(k) -> Result<CouplingMap> // 최고 충실도 맵
    pub fn highest_fidelity_coupling_map(&self, size: usize) -> QarchResult<CouplingMap> {
        let subset = self.highest_fidelity_subset(size)?;
        Ok(induced_coupling_map(&self.coupling_map, &subset))
    }

    /// Fidelity score of an arbitrary qubit subset
    pub fn fidelity(&self, subset: &QubitSubset) -> QarchResult<f64> {
        self.ensure_loaded()?;
        for &q in subset {
            self.check_qubit(q)?;
        }
        Ok(self.selector().score(subset))
    }

    /// Shortest-path hop distance between two qubits
    pub fn distance(&self, from: QubitId, to: QubitId) -> QarchResult<usize> {
        self.ensure_loaded()?;
        self.check_qubit(from)?;
        self.check_qubit(to)?;
        self.distances
            .distance(from, to)
            .ok_or(QarchError::Disconnected(from, to))
    }

    /// Diameter of the undirected coupling graph
    /// Gantree: coupling_limit() -> Result<usize> // 결합 한계
    pub fn coupling_limit(&self) -> QarchResult<usize> {
        self.ensure_loaded()?;
        self.distances.diameter()
    }

    // ========================================================================
    // Permutation Routing
    // ========================================================================

    /// Minimum swap sequence sorting `permutation`; see
    /// [`qarch_core::minimum_number_of_swaps`]. Does not depend on the
    /// loaded device.
    pub fn minimum_number_of_swaps(&self, permutation: &mut [QubitId]) -> QarchResult<Vec<Swap>> {
        minimum_number_of_swaps(permutation)
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Architecture({} qubits, {} couplings{}{})",
            self.num_qubits,
            self.coupling_map.len(),
            if self.properties.is_some() {
                ", calibrated"
            } else {
                ""
            },
            self.name
                .as_ref()
                .map(|n| format!(", {}", n))
                .unwrap_or_default()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use qarch_core::{linear_map, qubit_list, ring_map};

    fn ring5() -> Architecture {
        Architecture::from_coupling_map(5, ring_map(5)).unwrap()
    }

    #[test]
    fn test_queries_before_load() {
        let arch = Architecture::new();
        assert!(!arch.is_loaded());
        assert_eq!(arch.all_connected_subsets(1), Err(QarchError::NotLoaded));
        assert_eq!(arch.coupling_limit(), Err(QarchError::NotLoaded));
        assert!(arch.highest_fidelity_coupling_map(1).unwrap_err().is_invalid_state());
        assert!(arch.reduced_coupling_maps(1).is_err());
    }

    #[test]
    fn test_swaps_without_load() {
        let arch = Architecture::new();
        let mut pi = vec![1, 1, 2, 3, 4];
        let err = arch.minimum_number_of_swaps(&mut pi).unwrap_err();
        assert!(err.is_invalid_argument());

        let mut pi = vec![1, 0];
        assert_eq!(arch.minimum_number_of_swaps(&mut pi), Ok(vec![(0, 1)]));
    }

    #[test]
    fn test_load_rejects_bad_map() {
        let mut arch = ring5();
        let bad: CouplingMap = [(0, 7)].into_iter().collect();

        assert!(arch.load_coupling_map(5, bad).is_err());
        // Previous state survives
        assert_eq!(arch.num_qubits(), 5);
        assert_eq!(arch.coupling_map(), &ring_map(5));
        assert_eq!(arch.coupling_limit(), Ok(2));
    }

    #[test]
    fn test_reload_replaces_state() {
        let mut props = Properties::new(2);
        props.set_two_qubit_error_rate(0, 1, 0.1).unwrap();
        let mut arch = Architecture::from_properties(props).unwrap();
        assert!(arch.properties().is_some());

        arch.load_coupling_map(3, linear_map(3)).unwrap();
        assert!(arch.properties().is_none());
        assert_eq!(arch.num_qubits(), 3);
        assert_eq!(arch.coupling_limit(), Ok(2));
    }

    #[test]
    fn test_subset_size_bounds() {
        let arch = ring5();
        assert!(matches!(
            arch.all_connected_subsets(0),
            Err(QarchError::InvalidSubsetSize { .. })
        ));
        assert!(arch.all_connected_subsets(6).unwrap_err().is_invalid_argument());
        assert!(arch.highest_fidelity_coupling_map(6).is_err());
    }

    #[test]
    fn test_highest_fidelity_extremes() {
        let arch = ring5();
        assert_eq!(&arch.highest_fidelity_coupling_map(5).unwrap(), arch.coupling_map());
        assert!(arch.highest_fidelity_coupling_map(1).unwrap().is_empty());
    }

    #[test]
    fn test_uncalibrated_tie_break() {
        // Without calibration every subset scores 1.0
        let arch = ring5();
        let best = arch.highest_fidelity_subset(3).unwrap();
        assert_eq!(best.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_no_connected_subset() {
        let cm: CouplingMap = [(0, 1), (2, 3)].into_iter().collect();
        let arch = Architecture::from_coupling_map(4, cm).unwrap();

        assert_eq!(
            arch.highest_fidelity_coupling_map(3),
            Err(QarchError::NoConnectedSubset { size: 3 })
        );
        assert_eq!(arch.coupling_limit(), Err(QarchError::Disconnected(0, 2)));
        assert!(arch.distance(0, 3).unwrap_err().is_invalid_state());
    }

    #[test]
    fn test_distance_and_neighbours() {
        let arch = ring5();
        assert_eq!(arch.distance(0, 2), Ok(2));
        assert_eq!(arch.distance(4, 0), Ok(1));
        assert!(arch.distance(0, 5).unwrap_err().is_invalid_argument());
        assert_eq!(arch.neighbours(0), &[1, 4]);
        assert!(arch.is_bidirectional());
    }

    #[test]
    fn test_fidelity_with_pessimistic_default() {
        let config = ArchitectureConfig::pessimistic(0.5);
        let mut arch = Architecture::with_config(config).unwrap();
        arch.load_coupling_map(2, linear_map(2)).unwrap();

        // 2 qubits and 2 directed edges at fidelity 0.5
        let all: QubitSubset = [0, 1].into_iter().collect();
        assert!((arch.fidelity(&all).unwrap() - 0.0625).abs() < 1e-12);

        let outside: QubitSubset = [0, 9].into_iter().collect();
        assert!(arch.fidelity(&outside).is_err());
    }

    #[test]
    fn test_invalid_config() {
        assert!(Architecture::with_config(ArchitectureConfig::pessimistic(2.0)).is_err());
    }

    #[test]
    fn test_load_json() {
        let mut arch = Architecture::new();
        arch.load_json(r#"{"name": "pair", "coupling_map": [[0, 1], [1, 0]]}"#)
            .unwrap();

        assert_eq!(arch.name(), Some("pair"));
        assert_eq!(arch.num_qubits(), 2);
        assert_eq!(qubit_list(arch.coupling_map()), vec![0, 1]);
        assert!(arch.to_string().contains("pair"));
    }

    #[test]
    fn test_empty_device_rejected() {
        let mut arch = Architecture::new();
        assert!(matches!(arch.load_json("{}"), Err(QarchError::InvalidConfig(_))));
        assert!(arch.load_coupling_map(0, CouplingMap::new()).is_err());
        assert!(arch.load_properties(Properties::new(0)).is_err());
        assert!(!arch.is_loaded());
        assert_eq!(arch.coupling_limit(), Err(QarchError::NotLoaded));

        // A rejected empty load keeps an earlier device
        let mut arch = ring5();
        assert!(arch.load_json("{}").is_err());
        assert_eq!(arch.num_qubits(), 5);
        assert_eq!(arch.coupling_limit(), Ok(2));
    }

    #[test]
    fn test_load_json_file_missing() {
        let mut arch = Architecture::new();
        let err = arch.load_json_file("/nonexistent/device.json").unwrap_err();
        assert!(matches!(err, QarchError::FileError(_)));
        assert!(!arch.is_loaded());
    }
}
