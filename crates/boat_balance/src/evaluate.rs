//! Scoring and selection shared by every strategy.
//!
//! A score is the left side sum minus the right side sum. Both sides hold
//! `len / 2` seats; with an odd seat count the middle seat is on neither side.
//! Selection keeps every arrangement whose absolute score ties for the minimum.
//! Sums, differences and magnitudes are checked, so a score the weight type
//! cannot hold is an error instead of a wrapped value.

use crate::error::{BalanceError, Result};
use crate::weight::{Arrangement, Weight};

/// Left side sum minus right side sum.
///
/// Fails with [`BalanceError::ScoreOverflow`] when a side sum, the
/// difference or its magnitude does not fit in `T`.
pub fn evaluate<T: Weight>(arrangement: &[T]) -> Result<T> {
    let side = arrangement.len() / 2;
    let overflow = || BalanceError::ScoreOverflow(format!("{arrangement:?}"));

    let left = side_sum(&arrangement[..side]).ok_or_else(overflow)?;
    let right = side_sum(&arrangement[arrangement.len() - side..]).ok_or_else(overflow)?;
    let score = left.checked_minus(right).ok_or_else(overflow)?;
    score.checked_magnitude().ok_or_else(overflow)?;
    Ok(score)
}

fn side_sum<T: Weight>(seats: &[T]) -> Option<T> {
    seats
        .iter()
        .try_fold(T::zero(), |acc, &w| acc.checked_plus(w))
}

pub fn score_all<T: Weight>(arrangements: &[Arrangement<T>]) -> Result<Vec<T>> {
    arrangements.iter().map(|a| evaluate(a)).collect()
}

fn magnitude<T: Weight>(score: T) -> Result<T> {
    score
        .checked_magnitude()
        .ok_or_else(|| BalanceError::ScoreOverflow(format!("|{score:?}|")))
}

fn smallest<T: Weight>(values: &[T]) -> Option<T> {
    values
        .iter()
        .copied()
        .reduce(|min, v| if v < min { v } else { min })
}

/// Smallest absolute score, `None` for an empty slice.
pub fn min_abs_score<T: Weight>(scores: &[T]) -> Result<Option<T>> {
    let magnitudes = scores
        .iter()
        .map(|&s| magnitude(s))
        .collect::<Result<Vec<T>>>()?;
    Ok(smallest(&magnitudes))
}

/// Keeps the arrangements whose `|score|` equals the minimum, in input order.
///
/// `scores[i]` belongs to `arrangements[i]`; a length mismatch is an
/// [`BalanceError::InvariantViolation`]. Duplicated arrangements are kept.
pub fn select_best<T: Weight>(
    arrangements: Vec<Arrangement<T>>,
    scores: &[T],
) -> Result<Vec<Arrangement<T>>> {
    if arrangements.len() != scores.len() {
        return Err(BalanceError::InvariantViolation {
            arrangements: arrangements.len(),
            scores: scores.len(),
        });
    }

    let magnitudes = scores
        .iter()
        .map(|&s| magnitude(s))
        .collect::<Result<Vec<T>>>()?;
    let Some(min_abs) = smallest(&magnitudes) else {
        return Ok(Vec::new());
    };

    Ok(arrangements
        .into_iter()
        .zip(magnitudes)
        .filter(|(_, m)| *m == min_abs)
        .map(|(arrangement, _)| arrangement)
        .collect())
}
