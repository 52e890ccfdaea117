pub mod constants;
pub mod error;
pub mod evaluate;
pub mod generator;
pub mod math;
pub mod strategy;
pub mod weight;

pub use constants::{DEMO_WEIGHTS, MAX_EXHAUSTIVE_ITEMS, MAX_FACTORIAL_INPUT};
pub use error::{BalanceError, Result};
pub use evaluate::{evaluate, min_abs_score, score_all, select_best};
pub use generator::{SymmetryPlan, permute_all, sample_distinct, symmetry_cover};
pub use math::factorial;
pub use strategy::{
    Solution, Strategy, boat_brute_force, boat_heuristic, boat_monte_carlo,
    boat_monte_carlo_with_rng, solve,
};
pub use weight::{Arrangement, Weight};
