use boat_balance::Strategy;
use clap::Parser;
use serde::Deserialize;
use std::{path::PathBuf, str::FromStr};
use strum::IntoEnumIterator;

#[derive(Debug, Parser)]
#[command(author, version, about = "Find the most balanced seating for a two-sided boat", long_about = None)]
pub struct Args {
    /// Item weights (integers unless any value has a fractional part)
    #[arg(allow_negative_numbers = true)]
    pub weights: Vec<String>,

    /// Strategy to run: all, brute-force, monte-carlo or heuristic
    #[arg(short = 's', long = "strategy")]
    pub strategy: Option<StrategySelection>,

    /// Seed for the monte carlo strategy
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// TOML configuration file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
}

/// One strategy or all of them in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum StrategySelection {
    #[default]
    All,
    Only(Strategy),
}

impl StrategySelection {
    pub fn strategies(&self) -> Vec<Strategy> {
        match self {
            StrategySelection::All => Strategy::iter().collect(),
            StrategySelection::Only(strategy) => vec![*strategy],
        }
    }
}

impl FromStr for StrategySelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(StrategySelection::All);
        }
        Strategy::from_str(&s.to_ascii_lowercase())
            .map(StrategySelection::Only)
            .map_err(|_| {
                format!("unknown strategy '{s}', expected all, brute-force, monte-carlo or heuristic")
            })
    }
}

impl TryFrom<String> for StrategySelection {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
