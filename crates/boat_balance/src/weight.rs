use num_traits::Signed;
use std::fmt::Debug;

/// One seating: the first half of the seats is the left side, the last half the right side.
/// For an odd number of seats the middle one belongs to neither side.
pub type Arrangement<T> = Vec<T>;

/// Numeric bound for seat weights.
///
/// Implemented for the signed integer types and `f32`/`f64`. Scores are
/// differences of side sums, so the type has to be signed. The checked
/// operations return `None` when the result is not representable: integer
/// overflow, or a float result that is not finite.
pub trait Weight: Signed + Copy + PartialOrd + Debug {
    fn checked_plus(self, rhs: Self) -> Option<Self>;

    fn checked_minus(self, rhs: Self) -> Option<Self>;

    /// `|self|`; `None` for the integer `MIN` values.
    fn checked_magnitude(self) -> Option<Self>;

    /// `false` for NaN and the infinities.
    fn is_finite_weight(self) -> bool;
}

macro_rules! impl_integer_weight_for {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn checked_plus(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }

                #[inline]
                fn checked_minus(self, rhs: Self) -> Option<Self> {
                    self.checked_sub(rhs)
                }

                #[inline]
                fn checked_magnitude(self) -> Option<Self> {
                    self.checked_abs()
                }

                #[inline]
                fn is_finite_weight(self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! impl_float_weight_for {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn checked_plus(self, rhs: Self) -> Option<Self> {
                    let value = self + rhs;
                    value.is_finite().then_some(value)
                }

                #[inline]
                fn checked_minus(self, rhs: Self) -> Option<Self> {
                    let value = self - rhs;
                    value.is_finite().then_some(value)
                }

                #[inline]
                fn checked_magnitude(self) -> Option<Self> {
                    self.is_finite().then_some(self.abs())
                }

                #[inline]
                fn is_finite_weight(self) -> bool {
                    self.is_finite()
                }
            }
        )*
    };
}

impl_integer_weight_for!(i8, i16, i32, i64, i128, isize);
impl_float_weight_for!(f32, f64);
