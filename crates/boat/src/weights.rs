use crate::error::{CliError, Result};
use boat_balance::DEMO_WEIGHTS;
use serde::Deserialize;

/// Weights as given by the user. Integers stay integers so results print
/// without a fractional part.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WeightList {
    Integer(Vec<i64>),
    Float(Vec<f64>),
}

impl Default for WeightList {
    fn default() -> Self {
        WeightList::Integer(DEMO_WEIGHTS.to_vec())
    }
}

impl WeightList {
    /// Integers when every value parses as `i64`, floats otherwise.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self> {
        let integers: Option<Vec<i64>> = raw
            .iter()
            .map(|value| value.as_ref().trim().parse::<i64>().ok())
            .collect();
        if let Some(values) = integers {
            return Ok(WeightList::Integer(values));
        }

        let floats = raw
            .iter()
            .map(|value| {
                let value = value.as_ref().trim();
                value.parse::<f64>().map_err(|source| CliError::InvalidWeight {
                    value: value.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        Ok(WeightList::Float(floats))
    }

    pub fn len(&self) -> usize {
        match self {
            WeightList::Integer(values) => values.len(),
            WeightList::Float(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Non-empty and, for floats, finite.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(CliError::InvalidConfiguration(
                "weight list is empty".to_string(),
            ));
        }
        if let WeightList::Float(values) = self
            && let Some(bad) = values.iter().find(|w| !w.is_finite())
        {
            return Err(CliError::InvalidConfiguration(format!(
                "weights must be finite, got {bad}"
            )));
        }
        Ok(())
    }
}
