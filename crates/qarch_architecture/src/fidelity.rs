//! Fidelity-based subset selection
//!
//! Gantree: L3_Architecture → FidelitySelector
//!
//! The score of a subset `S` is
//! `prod_{q in S} (1 - e1(q, gate)) * prod_{(a,b) in cm, a,b in S} (1 - e2(a, b))`.
//! Ties go to the lexicographically smallest subset.

use qarch_calibration::Properties;
use qarch_core::{CouplingMap, ErrorRate, QubitSubset};

/// Relative difference below which two scores count as equal
const SCORE_TOLERANCE: f64 = 1e-12;

/// Scores qubit subsets from calibration data
/// Gantree: FidelitySelector // 충실도 선택기
#[derive(Debug, Clone, Copy)]
pub struct FidelitySelector<'a> {
    coupling_map: &'a CouplingMap,
    properties: Option<&'a Properties>,
    reference_gate: &'a str,
    default_error: ErrorRate,
}

impl<'a> FidelitySelector<'a> {
    /// Create a selector; without properties every entry uses `default_error`
    pub fn new(
        coupling_map: &'a CouplingMap,
        properties: Option<&'a Properties>,
        reference_gate: &'a str,
        default_error: ErrorRate,
    ) -> Self {
        Self {
            coupling_map,
            properties,
            reference_gate,
            default_error,
        }
    }

    /// Fidelity score of `subset`
    /// Gantree: score(subset) -> f64 // 점수
    pub fn score(&self, subset: &QubitSubset) -> f64 {
        let qubit_term: f64 = subset
            .iter()
            .map(|&q| match self.properties {
                Some(props) => {
                    props.single_qubit_fidelity(q, self.reference_gate, self.default_error)
                }
                None => self.default_error.fidelity(),
            })
            .product();

        let edge_term: f64 = self
            .coupling_map
            .iter()
            .filter(|(a, b)| subset.contains(a) && subset.contains(b))
            .map(|&(a, b)| match self.properties {
                Some(props) => props.two_qubit_fidelity(a, b, self.default_error),
                None => self.default_error.fidelity(),
            })
            .product();

        qubit_term * edge_term
    }

    /// Highest-scoring candidate and its score; ties resolve to the
    /// lexicographically smallest subset regardless of iteration order
    /// Gantree: select(candidates) -> Option<(subset, f64)> // 최적 선택
    pub fn select<'s, I>(&self, candidates: I) -> Option<(&'s QubitSubset, f64)>
    where
        I: IntoIterator<Item = &'s QubitSubset>,
    {
        let mut best: Option<(&QubitSubset, f64)> = None;

        for candidate in candidates {
            let score = self.score(candidate);
            let better = match best {
                None => true,
                Some((current, best_score)) => {
                    if is_tied(score, best_score) {
                        candidate < current
                    } else {
                        score > best_score
                    }
                }
            };
            if better {
                best = Some((candidate, score));
            }
        }

        if let Some((subset, score)) = best {
            log::debug!("selected subset {:?} with fidelity {:.6}", subset, score);
        }

        best
    }
}

/// Scores equal up to rounding; products of the same factors taken in a
/// different order may differ in the last bits
fn is_tied(a: f64, b: f64) -> bool {
    approx::relative_eq!(a, b, max_relative = SCORE_TOLERANCE)
}

// ============================================================================
// Tests
// ============================================================================
