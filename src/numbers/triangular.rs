/*
    Definition of `TriangularFuzzyNumber`
*/

use std::fmt;

use super::trapezoidal::interval_mul;
use crate::number::{all_close, check_breakpoints, check_scalar};
use crate::shape::{LINEAR_DECREASING, LINEAR_INCREASING};
use crate::{
    AnyFuzzyNumber, FuzzyContext, FuzzyError, FuzzyKind, FuzzyNumber, GeneralFuzzyNumber,
    Result, ShapeFn,
};

/// A triangular fuzzy number with a piecewise linear membership function.
///
/// The membership function is defined by three breakpoints:
///  - `left`: left endpoint of the support,
///  - `mid`: the peak, where membership is 1,
///  - `right`: right endpoint of the support.
/// As a general fuzzy number it has `a1 = left`, `a2 = a3 = mid`
/// and `a4 = right`.
///
/// ```
/// use fuzzy_num::TriangularFuzzyNumber;
///
/// let x = TriangularFuzzyNumber::new(0.0, 1.0, 2.0).unwrap();
/// let y = x * -1.0;
/// assert_eq!((y.left(), y.mid(), y.right()), (-2.0, -1.0, 0.0));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct TriangularFuzzyNumber {
    left: f64,
    mid: f64,
    right: f64,
}

impl TriangularFuzzyNumber {
    /// Creates a new `TriangularFuzzyNumber`.
    /// Fails unless `left <= mid <= right`.
    pub fn new(left: f64, mid: f64, right: f64) -> Result<Self> {
        check_breakpoints(&[left, mid, right], "left, mid, right")?;
        Ok(Self { left, mid, right })
    }

    /// Returns the left endpoint of the support.
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the peak.
    pub fn mid(&self) -> f64 {
        self.mid
    }

    /// Returns the right endpoint of the support.
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Multiplies this number with another, returning the triangular
    /// approximation of the product: the support is the interval product
    /// of the supports and the peak is the product of the peaks.
    pub fn mul_fuzzy(&self, other: &Self) -> Result<Self> {
        let (lo, hi) = interval_mul((self.left, self.right), (other.left, other.right));
        Self::new(lo, self.mid * other.mid, hi)
    }
}

impl FuzzyNumber for TriangularFuzzyNumber {
    const KIND: FuzzyKind = FuzzyKind::Triangular;

    fn breakpoints(&self) -> [f64; 4] {
        [self.left, self.mid, self.mid, self.right]
    }

    fn left_shape(&self) -> &ShapeFn {
        &LINEAR_INCREASING
    }

    fn right_shape(&self) -> &ShapeFn {
        &LINEAR_DECREASING
    }

    fn try_add_scalar(&self, k: f64) -> Result<Self> {
        check_scalar(k)?;
        Self::new(self.left + k, self.mid + k, self.right + k)
    }

    fn try_mul_scalar(&self, k: f64) -> Result<Self> {
        check_scalar(k)?;
        if k < 0.0 {
            Self::new(self.right * k, self.mid * k, self.left * k)
        } else {
            Self::new(self.left * k, self.mid * k, self.right * k)
        }
    }

    fn try_add(&self, other: &Self, ctx: &FuzzyContext) -> Result<Self> {
        let sum = self.to_general().sum(&other.to_general(), ctx.addition_method())?;
        let [c1, c2, _, c4] = sum.breakpoints();
        Self::new(c1, c2, c4)
    }

    fn to_general(&self) -> GeneralFuzzyNumber {
        GeneralFuzzyNumber::from_linear(self.breakpoints())
    }

    fn into_any(self) -> AnyFuzzyNumber {
        AnyFuzzyNumber::Triangular(self)
    }

    fn from_any(any: AnyFuzzyNumber) -> Result<Self> {
        match any {
            AnyFuzzyNumber::Triangular(x) => Ok(x),
            other => Err(FuzzyError::TypeMismatch {
                expected: Self::KIND.name(),
                found: other.kind().name(),
            }),
        }
    }
}

impl PartialEq for TriangularFuzzyNumber {
    fn eq(&self, other: &Self) -> bool {
        all_close(&[self.left, self.mid, self.right], &[other.left, other.mid, other.right])
    }
}

impl fmt::Display for TriangularFuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TriangularFuzzyNumber(left={}, mid={}, right={})",
            self.left, self.mid, self.right
        )
    }
}
