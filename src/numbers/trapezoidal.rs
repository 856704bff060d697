/*
    Definition of `TrapezoidalFuzzyNumber`
*/

use std::fmt;

use crate::number::{all_close, check_breakpoints, check_scalar};
use crate::shape::{LINEAR_DECREASING, LINEAR_INCREASING};
use crate::{
    AnyFuzzyNumber, FuzzyContext, FuzzyError, FuzzyKind, FuzzyNumber, GeneralFuzzyNumber,
    Result, ShapeFn, TriangularFuzzyNumber,
};

/// A trapezoidal fuzzy number with a piecewise linear membership function.
///
/// The membership function is defined by four breakpoints:
///  - `a1`: left endpoint of the support,
///  - `a2`: left endpoint of the core,
///  - `a3`: right endpoint of the core,
///  - `a4`: right endpoint of the support.
/// Membership rises linearly on `[a1, a2]`, is 1 on `[a2, a3]`
/// and falls linearly on `[a3, a4]`.
#[derive(Copy, Clone, Debug)]
pub struct TrapezoidalFuzzyNumber {
    a1: f64,
    a2: f64,
    a3: f64,
    a4: f64,
}

impl TrapezoidalFuzzyNumber {
    /// Creates a new `TrapezoidalFuzzyNumber`.
    /// Fails unless `a1 <= a2 <= a3 <= a4`.
    pub fn new(a1: f64, a2: f64, a3: f64, a4: f64) -> Result<Self> {
        check_breakpoints(&[a1, a2, a3, a4], "a1, a2, a3, a4")?;
        Ok(Self { a1, a2, a3, a4 })
    }

    /// Returns the left endpoint of the support.
    pub fn left(&self) -> f64 {
        self.a1
    }

    /// Returns the left endpoint of the core.
    pub fn core_left(&self) -> f64 {
        self.a2
    }

    /// Returns the right endpoint of the core.
    pub fn core_right(&self) -> f64 {
        self.a3
    }

    /// Returns the right endpoint of the support.
    pub fn right(&self) -> f64 {
        self.a4
    }

    /// Multiplies this number with another.
    ///
    /// The exact product of two trapezoidal numbers is not trapezoidal.
    /// This returns the usual trapezoidal approximation whose support
    /// and core are the interval products of the operands' supports and cores.
    pub fn mul_fuzzy(&self, other: &Self) -> Result<Self> {
        let (s1, s4) = interval_mul((self.a1, self.a4), (other.a1, other.a4));
        let (c2, c3) = interval_mul((self.a2, self.a3), (other.a2, other.a3));
        Self::new(s1, c2, c3, s4)
    }
}

// [a, b] * [c, d] = [min(ac, ad, bc, bd), max(ac, ad, bc, bd)]
pub(crate) fn interval_mul(x: (f64, f64), y: (f64, f64)) -> (f64, f64) {
    let products = [x.0 * y.0, x.0 * y.1, x.1 * y.0, x.1 * y.1];
    let lo = products.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = products.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (lo, hi)
}

impl FuzzyNumber for TrapezoidalFuzzyNumber {
    const KIND: FuzzyKind = FuzzyKind::Trapezoidal;

    fn breakpoints(&self) -> [f64; 4] {
        [self.a1, self.a2, self.a3, self.a4]
    }

    fn left_shape(&self) -> &ShapeFn {
        &LINEAR_INCREASING
    }

    fn right_shape(&self) -> &ShapeFn {
        &LINEAR_DECREASING
    }

    fn try_add_scalar(&self, k: f64) -> Result<Self> {
        check_scalar(k)?;
        Self::new(self.a1 + k, self.a2 + k, self.a3 + k, self.a4 + k)
    }

    fn try_mul_scalar(&self, k: f64) -> Result<Self> {
        check_scalar(k)?;
        if k < 0.0 {
            Self::new(self.a4 * k, self.a3 * k, self.a2 * k, self.a1 * k)
        } else {
            Self::new(self.a1 * k, self.a2 * k, self.a3 * k, self.a4 * k)
        }
    }

    fn try_add(&self, other: &Self, ctx: &FuzzyContext) -> Result<Self> {
        let sum = self.to_general().sum(&other.to_general(), ctx.addition_method())?;
        let [c1, c2, c3, c4] = sum.breakpoints();
        Self::new(c1, c2, c3, c4)
    }

    fn to_general(&self) -> GeneralFuzzyNumber {
        GeneralFuzzyNumber::from_linear(self.breakpoints())
    }

    fn into_any(self) -> AnyFuzzyNumber {
        AnyFuzzyNumber::Trapezoidal(self)
    }

    fn from_any(any: AnyFuzzyNumber) -> Result<Self> {
        match any {
            AnyFuzzyNumber::Trapezoidal(x) => Ok(x),
            other => Err(FuzzyError::TypeMismatch {
                expected: Self::KIND.name(),
                found: other.kind().name(),
            }),
        }
    }
}

// Implementing `From<TriangularFuzzyNumber>`
impl From<TriangularFuzzyNumber> for TrapezoidalFuzzyNumber {
    fn from(x: TriangularFuzzyNumber) -> Self {
        Self {
            a1: x.left(),
            a2: x.mid(),
            a3: x.mid(),
            a4: x.right(),
        }
    }
}

impl PartialEq for TrapezoidalFuzzyNumber {
    fn eq(&self, other: &Self) -> bool {
        all_close(&self.breakpoints(), &other.breakpoints())
    }
}

impl fmt::Display for TrapezoidalFuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TrapezoidalFuzzyNumber(a1={}, a2={}, a3={}, a4={})",
            self.a1, self.a2, self.a3, self.a4
        )
    }
}
