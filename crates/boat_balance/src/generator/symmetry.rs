use crate::error::{BalanceError, Result};
use crate::math::factorial_len;
use itertools::Itertools;
use log::debug;

/// Which slice of the lexicographic enumeration the symmetry walk covers.
///
/// The walk takes permutation indices `0, step, 2·step, …` below `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymmetryPlan {
    pub end: usize,
    pub step: usize,
}

impl SymmetryPlan {
    /// Stride plan for `n` items.
    ///
    /// Even `n`: the lexicographic enumeration cycles the right half through
    /// all (n/2)! orderings while the left half stays fixed, so one ordering
    /// every (n/2)! steps keeps each left-side set once. Every split has the
    /// first item on one side and mirroring the sides keeps `|score|`, so the
    /// first block of (n-1)! = n!/n permutations is enough.
    ///
    /// Odd `n`: neighbouring permutations differ only in the last two seats,
    /// both on the right side once n >= 5, so every second one is skipped.
    /// The first half of the enumeration already puts one of the leading
    /// items on a side of every split. With 3 items the last two seats are
    /// the middle and the right seat, hence step 1.
    pub fn for_len(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(BalanceError::empty_weights());
        }
        let total = factorial_len(n)?;
        let plan = if n % 2 == 0 {
            Self {
                end: total / n,
                step: factorial_len(n / 2)?,
            }
        } else {
            Self {
                // a single item has one ordering; n!/2 would round it away
                end: (total / 2).max(1),
                step: if n == 3 { 1 } else { 2 },
            }
        };
        Ok(plan)
    }

    /// Number of arrangements the walk yields.
    pub fn sample_count(&self) -> usize {
        self.end.div_ceil(self.step)
    }
}

/// Reduced set of orderings that still contains a best-balanced one.
pub fn symmetry_cover<T: Clone>(items: &[T]) -> Result<Vec<Vec<T>>> {
    let plan = SymmetryPlan::for_len(items.len())?;
    let mut cover = Vec::with_capacity(plan.sample_count());
    cover.extend(
        items
            .iter()
            .cloned()
            .permutations(items.len())
            .take(plan.end)
            .step_by(plan.step),
    );
    debug!(
        "Symmetry generator produced {} arrangements (end {}, step {})",
        cover.len(),
        plan.end,
        plan.step
    );
    Ok(cover)
}
