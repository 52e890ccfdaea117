mod args;
mod config;
mod error;
mod weights;

use anyhow::{Context, Result};
use boat_balance::{Strategy, Weight, solve};
use clap::Parser;
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    args::Args,
    config::{Config, seed_from_env},
    weights::WeightList,
};

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    let env_seed = seed_from_env()?;
    let settings = config.resolve(&args, env_seed)?;

    info!("Balancing {} weights", settings.weights.len());
    let mut rng = match settings.seed {
        Some(seed) => {
            debug!("Seeding random source with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_rng(&mut rand::rng()),
    };

    for strategy in &settings.strategies {
        if !strategy.is_deterministic() && settings.seed.is_none() {
            info!("{strategy} uses an unseeded random source; pass --seed to repeat a run");
        }
        match &settings.weights {
            WeightList::Integer(values) => report(*strategy, values, &mut rng)?,
            WeightList::Float(values) => report(*strategy, values, &mut rng)?,
        }
    }
    Ok(())
}

fn report<T: Weight>(strategy: Strategy, weights: &[T], rng: &mut StdRng) -> Result<()> {
    let solution = solve(strategy, weights, rng)
        .with_context(|| format!("Strategy {strategy} failed"))?;
    println!(
        "{:<12} min |score| {:?} over {} candidates: {:?}",
        strategy.to_string(),
        solution.min_abs_score,
        solution.candidates,
        solution.arrangements
    );
    Ok(())
}
