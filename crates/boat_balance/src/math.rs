use crate::constants::MAX_FACTORIAL_INPUT;
use crate::error::{BalanceError, Result};
use num_traits::ToPrimitive;
use std::fmt::Debug;

/// n! for any numeric `n` that holds a non-negative integer.
///
/// Negative, fractional and non-finite arguments are rejected with
/// [`BalanceError::InvalidInput`]; arguments above [`MAX_FACTORIAL_INPUT`]
/// with [`BalanceError::Overflow`].
pub fn factorial<N>(n: N) -> Result<u64>
where
    N: ToPrimitive + Debug + Copy,
{
    let value = n.to_f64().ok_or_else(|| {
        BalanceError::InvalidInput(format!("factorial argument {n:?} is not a number"))
    })?;
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(BalanceError::InvalidInput(format!(
            "factorial requires a non-negative integer, got {n:?}"
        )));
    }

    let n = n.to_u64().ok_or_else(|| {
        BalanceError::InvalidInput(format!("factorial argument {n:?} is out of range"))
    })?;
    if n > MAX_FACTORIAL_INPUT {
        return Err(BalanceError::Overflow { n });
    }
    Ok((1..=n).product())
}

/// factorial for lengths and indices
pub(crate) fn factorial_len(n: usize) -> Result<usize> {
    let value = factorial(n)?;
    usize::try_from(value).map_err(|_| BalanceError::Overflow { n: n as u64 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(1).unwrap(), 1);
        assert_eq!(factorial(3).unwrap(), 6);
        assert_eq!(factorial(8).unwrap(), 40_320);
    }

    #[test]
    fn test_factorial_largest_supported() {
        assert_eq!(factorial(20u8).unwrap(), 2_432_902_008_176_640_000);
        assert_eq!(factorial(21), Err(BalanceError::Overflow { n: 21 }));
    }

    #[test]
    fn test_factorial_accepts_integral_floats() {
        assert_eq!(factorial(4.0f64).unwrap(), 24);
    }

    #[test]
    fn test_factorial_rejects_negative() {
        assert!(matches!(factorial(-1), Err(BalanceError::InvalidInput(_))));
        assert!(matches!(factorial(-3.0), Err(BalanceError::InvalidInput(_))));
    }

    #[test]
    fn test_factorial_rejects_non_integral() {
        assert!(matches!(factorial(2.5), Err(BalanceError::InvalidInput(_))));
        assert!(matches!(factorial(f64::NAN), Err(BalanceError::InvalidInput(_))));
        assert!(matches!(
            factorial(f64::INFINITY),
            Err(BalanceError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_factorial_len() {
        assert_eq!(factorial_len(5).unwrap(), 120);
        assert!(factorial_len(25).is_err());
    }
}
