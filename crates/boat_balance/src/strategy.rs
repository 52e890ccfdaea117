use crate::error::{BalanceError, Result};
use crate::evaluate::{min_abs_score, score_all, select_best};
use crate::generator::{permute_all, sample_distinct, symmetry_cover};
use crate::math::factorial_len;
use crate::weight::{Arrangement, Weight};
use log::debug;
use rand::Rng;
use strum_macros::{Display, EnumIter, EnumString};

/// How candidate arrangements are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Every permutation; deterministic
    BruteForce,
    /// N!/2 distinct random permutations; depends on the random source
    MonteCarlo,
    /// Symmetry-reduced strided enumeration; deterministic
    Heuristic,
}

impl Strategy {
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, Strategy::MonteCarlo)
    }
}

/// Result set of one strategy run together with how it was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    pub strategy: Strategy,
    pub min_abs_score: T,
    pub candidates: usize,
    pub arrangements: Vec<Arrangement<T>>,
}

/// Best arrangements over every permutation of `weights`.
pub fn boat_brute_force<T: Weight>(weights: &[T]) -> Result<Vec<Arrangement<T>>> {
    check_weights(weights)?;
    rank(Strategy::BruteForce, permute_all(weights)).map(|s| s.arrangements)
}

/// Best arrangements over ⌊N!/2⌋ distinct random permutations, using the thread-local generator.
pub fn boat_monte_carlo<T: Weight>(weights: &[T]) -> Result<Vec<Arrangement<T>>> {
    boat_monte_carlo_with_rng(weights, &mut rand::rng())
}

/// Same as [`boat_monte_carlo`] with a caller supplied random source.
pub fn boat_monte_carlo_with_rng<T, R>(weights: &[T], rng: &mut R) -> Result<Vec<Arrangement<T>>>
where
    T: Weight,
    R: Rng + ?Sized,
{
    check_weights(weights)?;
    rank(Strategy::MonteCarlo, monte_carlo_candidates(weights, rng)?).map(|s| s.arrangements)
}

/// Best arrangements over the symmetry-reduced enumeration.
pub fn boat_heuristic<T: Weight>(weights: &[T]) -> Result<Vec<Arrangement<T>>> {
    check_weights(weights)?;
    rank(Strategy::Heuristic, symmetry_cover(weights)?).map(|s| s.arrangements)
}

/// Runs `strategy` on `weights`. `rng` is only drawn from by [`Strategy::MonteCarlo`].
pub fn solve<T, R>(strategy: Strategy, weights: &[T], rng: &mut R) -> Result<Solution<T>>
where
    T: Weight,
    R: Rng + ?Sized,
{
    check_weights(weights)?;
    let arrangements = match strategy {
        Strategy::BruteForce => permute_all(weights),
        Strategy::MonteCarlo => monte_carlo_candidates(weights, rng)?,
        Strategy::Heuristic => symmetry_cover(weights)?,
    };
    rank(strategy, arrangements)
}

/// Non-empty and every weight finite.
fn check_weights<T: Weight>(weights: &[T]) -> Result<()> {
    if weights.is_empty() {
        return Err(BalanceError::empty_weights());
    }
    if let Some(bad) = weights.iter().find(|w| !w.is_finite_weight()) {
        return Err(BalanceError::InvalidInput(format!(
            "weights must be finite, got {bad:?}"
        )));
    }
    Ok(())
}

fn monte_carlo_candidates<T, R>(weights: &[T], rng: &mut R) -> Result<Vec<Arrangement<T>>>
where
    T: Weight,
    R: Rng + ?Sized,
{
    let count = factorial_len(weights.len())? / 2;
    sample_distinct(weights, count, rng)
}

fn rank<T: Weight>(strategy: Strategy, arrangements: Vec<Arrangement<T>>) -> Result<Solution<T>> {
    let candidates = arrangements.len();
    let scores = score_all(&arrangements)?;
    let min_abs_score = min_abs_score(&scores)?.unwrap_or_else(T::zero);
    let arrangements = select_best(arrangements, &scores)?;
    debug!(
        "{strategy}: {} best of {candidates} candidates, min |score| {min_abs_score:?}",
        arrangements.len()
    );

    Ok(Solution {
        strategy,
        min_abs_score,
        candidates,
        arrangements,
    })
}
