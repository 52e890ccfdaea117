use crate::args::{Args, StrategySelection};
use crate::error::{CliError, Result};
use crate::weights::WeightList;
use boat_balance::Strategy;
use serde::Deserialize;
use std::{env, path::Path};

const ENV_SEED: &str = "BOAT_SEED";

/// Settings read from a TOML file. Every field is optional.
///
/// ```toml
/// weights = [73, 85, 81]
/// strategy = "heuristic"
/// seed = 42
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub weights: Option<WeightList>,
    #[serde(default)]
    pub strategy: Option<StrategySelection>,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// What a single run executes after CLI, file and environment are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub weights: WeightList,
    pub strategies: Vec<Strategy>,
    pub seed: Option<u64>,
}

impl Config {
    /// Reads `path` when given, otherwise the empty default.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| CliError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(weights) = &config.weights {
            weights.validate()?;
        }
        Ok(config)
    }

    /// Command line values win over the file; the environment only supplies a seed.
    pub fn resolve(self, args: &Args, env_seed: Option<u64>) -> Result<RunSettings> {
        let weights = if args.weights.is_empty() {
            self.weights.unwrap_or_default()
        } else {
            WeightList::parse(&args.weights)?
        };
        weights.validate()?;

        let strategies = args.strategy.or(self.strategy).unwrap_or_default().strategies();
        let seed = args.seed.or(self.seed).or(env_seed);

        Ok(RunSettings {
            weights,
            strategies,
            seed,
        })
    }
}

/// Seed from `BOAT_SEED`; unset or blank means none.
pub fn seed_from_env() -> Result<Option<u64>> {
    parse_seed(env::var(ENV_SEED).ok())
}

fn parse_seed(raw: Option<String>) -> Result<Option<u64>> {
    match raw {
        Some(value) if !value.trim().is_empty() => value.trim().parse().map(Some).map_err(|_| {
            CliError::InvalidConfiguration(format!("{ENV_SEED} must be an unsigned integer, got '{value}'"))
        }),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_integer_weights() {
        let file = write_config("weights = [73, 85, 81]\nstrategy = \"heuristic\"\nseed = 42\n");
        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.weights, Some(WeightList::Integer(vec![73, 85, 81])));
        assert_eq!(config.strategy, Some(StrategySelection::Only(Strategy::Heuristic)));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_load_float_weights() {
        let file = write_config("weights = [1.5, 2, 0.25]\n");
        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.weights, Some(WeightList::Float(vec![1.5, 2.0, 0.25])));
    }

    #[test]
    fn test_load_rejects_unknown_strategy() {
        let file = write_config("strategy = \"greedy\"\n");
        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, CliError::ParseConfig { .. }));
    }

    #[test]
    fn test_load_rejects_empty_weights() {
        let file = write_config("weights = []\n");
        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, CliError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load_from_file(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, CliError::ReadConfig { .. }));
    }

    #[test]
    fn test_resolve_defaults() {
        let args = Args::parse_from(["boat"]);
        let settings = Config::default().resolve(&args, None).unwrap();
        assert_eq!(settings.weights, WeightList::Integer(vec![73, 85, 81]));
        assert_eq!(settings.strategies.len(), 3);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_resolve_precedence() {
        let config = Config {
            weights: Some(WeightList::Integer(vec![1, 2, 3, 4])),
            strategy: Some(StrategySelection::Only(Strategy::Heuristic)),
            seed: Some(5),
        };

        let args = Args::parse_from(["boat", "--seed", "9", "10", "20"]);
        let settings = config.clone().resolve(&args, Some(1)).unwrap();
        assert_eq!(settings.weights, WeightList::Integer(vec![10, 20]));
        assert_eq!(settings.strategies, vec![Strategy::Heuristic]);
        assert_eq!(settings.seed, Some(9));

        let args = Args::parse_from(["boat"]);
        let settings = config.resolve(&args, Some(1)).unwrap();
        assert_eq!(settings.weights, WeightList::Integer(vec![1, 2, 3, 4]));
        assert_eq!(settings.seed, Some(5));

        let settings = Config::default().resolve(&args, Some(1)).unwrap();
        assert_eq!(settings.seed, Some(1));
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(None).unwrap(), None);
        assert_eq!(parse_seed(Some("  ".to_string())).unwrap(), None);
        assert_eq!(parse_seed(Some(" 17 ".to_string())).unwrap(), Some(17));
        assert!(parse_seed(Some("-4".to_string())).is_err());
    }

    #[test]
    fn test_seed_from_env() {
        let orig = env::var(ENV_SEED).ok();

        unsafe {
            env::set_var(ENV_SEED, "123");
        }
        assert_eq!(seed_from_env().unwrap(), Some(123));

        unsafe {
            env::remove_var(ENV_SEED);
        }
        assert_eq!(seed_from_env().unwrap(), None);

        if let Some(value) = orig {
            unsafe {
                env::set_var(ENV_SEED, value);
            }
        }
    }
}
