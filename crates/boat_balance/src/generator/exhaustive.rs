use crate::constants::MAX_EXHAUSTIVE_ITEMS;
use log::{debug, warn};

/// Every ordering of `items`, N! in total.
///
/// Position `k` is fixed by moving each remaining item there in turn (the
/// others keep their relative order) and recursing on `k + 1`, so the output
/// is in lexicographic order of the original indices. Items with equal
/// values are still treated as distinct positions.
///
/// Time and memory are O(N!·N). Inputs longer than [`MAX_EXHAUSTIVE_ITEMS`]
/// are processed but logged as a scaling hazard.
pub fn permute_all<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut all = Vec::new();
    if items.is_empty() {
        return all;
    }
    if items.len() > MAX_EXHAUSTIVE_ITEMS {
        warn!(
            "Exhaustive search over {} items generates {}! arrangements",
            items.len(),
            items.len()
        );
    }

    permute_from(items.to_vec(), 0, &mut all);
    debug!("Exhaustive generator produced {} arrangements", all.len());
    all
}

fn permute_from<T: Clone>(state: Vec<T>, fixed: usize, out: &mut Vec<Vec<T>>) {
    if fixed + 1 >= state.len() {
        out.push(state);
        return;
    }
    for index in fixed..state.len() {
        let mut next = state.clone();
        next[fixed..=index].rotate_right(1);
        permute_from(next, fixed + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn is_permutation_of(candidate: &[i32], items: &[i32]) -> bool {
        let mut a = candidate.to_vec();
        let mut b = items.to_vec();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }

    #[test]
    fn test_permute_all_counts() {
        let expected = [1, 1, 2, 6, 24, 120, 720];
        for (n, &count) in expected.iter().enumerate() {
            let items: Vec<i32> = (0..n as i32).collect();
            assert_eq!(permute_all(&items).len(), if n == 0 { 0 } else { count });
        }
    }

    #[test]
    fn test_permute_all_distinct_permutations() {
        let items = [4, 8, 15, 16, 23];
        let all = permute_all(&items);
        assert_eq!(all.len(), 120);
        assert!(all.iter().all(|p| is_permutation_of(p, &items)));
        assert_eq!(all.iter().unique().count(), 120);
    }

    #[test]
    fn test_permute_all_lexicographic_by_index() {
        let items = [0, 1, 2, 3];
        let expected: Vec<Vec<i32>> = items.iter().copied().permutations(4).collect();
        assert_eq!(permute_all(&items), expected);
    }

    #[test]
    fn test_permute_all_duplicates_are_positional() {
        let all = permute_all(&[7, 7, 1]);
        assert_eq!(all.len(), 6);
        assert_eq!(all.iter().filter(|p| **p == vec![7, 7, 1]).count(), 2);
    }

    #[test]
    fn test_permute_all_first_is_input() {
        let items = [73, 85, 81];
        assert_eq!(permute_all(&items)[0], items.to_vec());
    }
}
