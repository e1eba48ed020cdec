//! Permutation routing
//!
//! Gantree: L1_Graph → PermutationRouter
//!
//! Sorts a permutation by pairwise exchanges using the minimum number of
//! swaps. Position `i` holds item `permutation[i]`; the goal is the identity
//! arrangement where every item `v` sits at position `v`. A cycle of length
//! `m` needs exactly `m - 1` swaps, so the total is `L - #cycles`.

use crate::error::{QarchError, QarchResult};
use crate::types::{QubitId, Swap};
use std::fmt::Write;

/// Check that `permutation` is a bijection on `[0, L)`
/// Gantree: validate_permutation(pi) -> Result // 순열 검증
pub fn validate_permutation(permutation: &[QubitId]) -> QarchResult<()> {
    let n = permutation.len();
    let mut seen = vec![false; n];

    for &value in permutation {
        if value >= n {
            return Err(QarchError::InvalidPermutation(format!(
                "input has length {} and contains {}",
                n, value
            )));
        }
        if seen[value] {
            return Err(QarchError::InvalidPermutation(format!(
                "input contains {} more than once",
                value
            )));
        }
        seen[value] = true;
    }

    Ok(())
}

/// Disjoint cycles of length > 1, each starting at its smallest position
pub fn permutation_cycles(permutation: &[QubitId]) -> QarchResult<Vec<Vec<QubitId>>> {
    validate_permutation(permutation)?;

    let mut visited = vec![false; permutation.len()];
    let mut cycles = Vec::new();

    for start in 0..permutation.len() {
        if visited[start] {
            continue;
        }

        let mut cycle = Vec::new();
        let mut position = start;
        while !visited[position] {
            visited[position] = true;
            cycle.push(position);
            position = permutation[position];
        }

        if cycle.len() > 1 {
            cycles.push(cycle);
        }
    }

    Ok(cycles)
}

/// Sort `permutation` in place with the fewest swaps and return them.
///
/// For each cycle the item at the cycle's first position is swapped directly
/// into its target until that position holds its own index. Replaying the
/// returned swaps on the original input yields the identity. On error the
/// permutation is left untouched.
/// Gantree: minimum_number_of_swaps(pi) -> Result<Vec<Swap>> // 최소 스왑
pub fn minimum_number_of_swaps(permutation: &mut [QubitId]) -> QarchResult<Vec<Swap>> {
    validate_permutation(permutation)?;

    let n = permutation.len();
    let mut visited = vec![false; n];
    let mut swaps = Vec::with_capacity(n);
    let mut num_cycles = 0;

    for start in 0..n {
        if visited[start] {
            continue;
        }
        num_cycles += 1;

        let mut position = start;
        while !visited[position] {
            visited[position] = true;
            position = permutation[position];
        }

        while permutation[start] != start {
            let target = permutation[start];
            permutation.swap(start, target);
            swaps.push((start, target));
        }
    }

    debug_assert_eq!(swaps.len(), n - num_cycles);
    log::trace!(
        "sorted permutation of length {} with {} cycles using {} swaps",
        n,
        num_cycles,
        swaps.len()
    );

    Ok(swaps)
}

/// Apply `swaps` to `permutation` in order
pub fn apply_swaps(permutation: &mut [QubitId], swaps: &[Swap]) -> QarchResult<()> {
    let n = permutation.len();
    if let Some(&(a, b)) = swaps.iter().find(|&&(a, b)| a >= n || b >= n) {
        return Err(QarchError::QubitOutOfRange {
            qubit: a.max(b),
            num_qubits: n,
        });
    }

    for &(a, b) in swaps {
        permutation.swap(a, b);
    }
    Ok(())
}

/// Check if every position holds its own index
pub fn is_identity(permutation: &[QubitId]) -> bool {
    permutation.iter().enumerate().all(|(i, &v)| i == v)
}

/// Render a permutation as `[1 0 2]`
pub fn format_permutation(permutation: &[QubitId]) -> String {
    let mut out = String::from("[");
    for (i, value) in permutation.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", value);
    }
    out.push(']');
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rejects_duplicate() {
        let mut pi = vec![1, 1, 2, 3, 4];
        let result = minimum_number_of_swaps(&mut pi);
        assert!(matches!(result, Err(QarchError::InvalidPermutation(_))));
        assert_eq!(pi, vec![1, 1, 2, 3, 4]);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let mut pi = vec![0, 3, 1];
        let err = minimum_number_of_swaps(&mut pi).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("contains 3"));
    }

    #[test]
    fn test_identity_needs_no_swaps() {
        let mut pi = vec![0, 1, 2, 3];
        assert!(minimum_number_of_swaps(&mut pi).unwrap().is_empty());

        let mut empty: Vec<QubitId> = vec![];
        assert!(minimum_number_of_swaps(&mut empty).unwrap().is_empty());
    }

    #[test]
    fn test_single_cycle() {
        // 0 -> 1 -> 2 -> 3 -> 0
        let mut pi = vec![1, 2, 3, 0];
        let swaps = minimum_number_of_swaps(&mut pi).unwrap();
        assert_eq!(swaps, vec![(0, 1), (0, 2), (0, 3)]);
        assert!(is_identity(&pi));
    }

    #[test]
    fn test_disjoint_cycles() {
        let original = vec![1, 2, 3, 4, 0, 6, 5];
        let mut pi = original.clone();
        let swaps = minimum_number_of_swaps(&mut pi).unwrap();

        // 5-cycle + transposition
        assert_eq!(swaps.len(), 4 + 1);
        assert!(is_identity(&pi));

        let mut replay = original;
        apply_swaps(&mut replay, &swaps).unwrap();
        assert!(is_identity(&replay));
    }

    #[test]
    fn test_permutation_cycles() {
        let cycles = permutation_cycles(&[2, 1, 0, 4, 3]).unwrap();
        assert_eq!(cycles, vec![vec![0, 2], vec![3, 4]]);
        assert!(permutation_cycles(&[0, 0]).is_err());
    }

    #[test]
    fn test_random_permutations_round_trip() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for len in 0..40 {
            let mut original: Vec<QubitId> = (0..len).collect();
            original.shuffle(&mut rng);

            let cycles = permutation_cycles(&original).unwrap();
            let fixed_points = len - cycles.iter().map(Vec::len).sum::<usize>();
            let expected = len - (cycles.len() + fixed_points);

            let mut pi = original.clone();
            let swaps = minimum_number_of_swaps(&mut pi).unwrap();
            assert_eq!(swaps.len(), expected, "permutation {:?}", original);
            assert!(is_identity(&pi));

            let mut replay = original.clone();
            apply_swaps(&mut replay, &swaps).unwrap();
            assert!(is_identity(&replay), "replay failed for {:?}", original);
        }
    }

    #[test]
    fn test_apply_swaps_out_of_range() {
        let mut pi = vec![0, 1];
        assert!(apply_swaps(&mut pi, &[(0, 2)]).is_err());
        assert_eq!(pi, vec![0, 1]);
    }

    #[test]
    fn test_format_permutation() {
        assert_eq!(format_permutation(&[1, 0, 2]), "[1 0 2]");
        assert_eq!(format_permutation(&[]), "[]");
    }
}
