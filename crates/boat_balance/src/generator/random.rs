use crate::error::{BalanceError, Result};
use crate::math::factorial_len;
use log::debug;
use rand::{Rng, seq::SliceRandom};

/// Up to `count` distinct random orderings of `items`, starting with `items` itself.
///
/// A working copy is shuffled with `rng` until `count` orderings with
/// different value sequences have been collected. `count` is clamped to
/// `1..=distinct_orderings(items)` so repeated weights cannot stall the loop.
pub fn sample_distinct<T, R>(items: &[T], count: usize, rng: &mut R) -> Result<Vec<Vec<T>>>
where
    T: Clone + PartialEq,
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return Err(BalanceError::empty_weights());
    }

    let target = match distinct_orderings(items) {
        Some(limit) => count.clamp(1, limit),
        None => count.max(1),
    };
    if target != count {
        debug!("Random generator clamped count {count} to {target}");
    }

    let mut accepted = Vec::with_capacity(target);
    accepted.push(items.to_vec());
    let mut working = items.to_vec();
    let mut attempts = 0usize;
    while accepted.len() < target {
        working.shuffle(rng);
        attempts += 1;
        if !accepted.contains(&working) {
            accepted.push(working.clone());
        }
    }

    debug!(
        "Random generator accepted {} arrangements after {} shuffles",
        accepted.len(),
        attempts
    );
    Ok(accepted)
}

/// Number of orderings with different value sequences: N! / ∏ multiplicity!.
///
/// `None` when N! does not fit in a `usize`.
pub fn distinct_orderings<T: PartialEq>(items: &[T]) -> Option<usize> {
    let mut groups: Vec<(&T, usize)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(value, _)| *value == item) {
            Some((_, seen)) => *seen += 1,
            None => groups.push((item, 1)),
        }
    }

    let total = factorial_len(items.len()).ok()?;
    groups
        .iter()
        .try_fold(total, |acc, &(_, seen)| Some(acc / factorial_len(seen).ok()?))
}
