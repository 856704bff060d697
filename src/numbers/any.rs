/*
    Dynamically typed fuzzy numbers
*/

use std::fmt;

use log::debug;

use crate::{
    FuzzyContext, FuzzyKind, FuzzyNumber, GeneralFuzzyNumber, Result, TrapezoidalFuzzyNumber,
    TriangularFuzzyNumber,
};

/// A fuzzy number of any variant.
///
/// Used where the variant is only known at runtime, e.g., when
/// building a `FuzzyNumberArray` from mixed input or adding
/// numbers of different variants.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyFuzzyNumber {
    Triangular(TriangularFuzzyNumber),
    Trapezoidal(TrapezoidalFuzzyNumber),
    General(GeneralFuzzyNumber),
}

impl AnyFuzzyNumber {
    /// Returns the variant of this number.
    pub fn kind(&self) -> FuzzyKind {
        match self {
            AnyFuzzyNumber::Triangular(_) => FuzzyKind::Triangular,
            AnyFuzzyNumber::Trapezoidal(_) => FuzzyKind::Trapezoidal,
            AnyFuzzyNumber::General(_) => FuzzyKind::General,
        }
    }

    /// Returns the breakpoints `[a1, a2, a3, a4]`.
    pub fn breakpoints(&self) -> [f64; 4] {
        match self {
            AnyFuzzyNumber::Triangular(x) => x.breakpoints(),
            AnyFuzzyNumber::Trapezoidal(x) => x.breakpoints(),
            AnyFuzzyNumber::General(x) => x.breakpoints(),
        }
    }

    /// Computes the membership degree of `x`.
    pub fn membership(&self, x: f64) -> f64 {
        match self {
            AnyFuzzyNumber::Triangular(n) => n.membership(x),
            AnyFuzzyNumber::Trapezoidal(n) => n.membership(x),
            AnyFuzzyNumber::General(n) => n.membership(x),
        }
    }

    /// Converts this number into a `GeneralFuzzyNumber`.
    pub fn to_general(&self) -> GeneralFuzzyNumber {
        match self {
            AnyFuzzyNumber::Triangular(x) => x.to_general(),
            AnyFuzzyNumber::Trapezoidal(x) => x.to_general(),
            AnyFuzzyNumber::General(x) => x.clone(),
        }
    }

    /// Shifts every breakpoint by `k`.
    pub fn try_add_scalar(&self, k: f64) -> Result<Self> {
        Ok(match self {
            AnyFuzzyNumber::Triangular(x) => x.try_add_scalar(k)?.into(),
            AnyFuzzyNumber::Trapezoidal(x) => x.try_add_scalar(k)?.into(),
            AnyFuzzyNumber::General(x) => x.try_add_scalar(k)?.into(),
        })
    }

    /// Scales every breakpoint by `k`.
    pub fn try_mul_scalar(&self, k: f64) -> Result<Self> {
        Ok(match self {
            AnyFuzzyNumber::Triangular(x) => x.try_mul_scalar(k)?.into(),
            AnyFuzzyNumber::Trapezoidal(x) => x.try_mul_scalar(k)?.into(),
            AnyFuzzyNumber::General(x) => x.try_mul_scalar(k)?.into(),
        })
    }

    /// Adds this number and another of any variant.
    ///
    /// Numbers of the same variant keep it. Otherwise both operands are
    /// coerced to the most general of the two variants first
    /// (triangular, then trapezoidal, then general).
    pub fn try_add(&self, other: &Self, ctx: &FuzzyContext) -> Result<Self> {
        use AnyFuzzyNumber::*;
        match (self, other) {
            (Triangular(x), Triangular(y)) => Ok(x.try_add(y, ctx)?.into()),
            (Trapezoidal(x), Trapezoidal(y)) => Ok(x.try_add(y, ctx)?.into()),
            (Triangular(x), Trapezoidal(y)) => {
                debug!("coercing {x} to {}", FuzzyKind::Trapezoidal);
                Ok(TrapezoidalFuzzyNumber::from(*x).try_add(y, ctx)?.into())
            }
            (Trapezoidal(x), Triangular(y)) => {
                debug!("coercing {y} to {}", FuzzyKind::Trapezoidal);
                Ok(x.try_add(&TrapezoidalFuzzyNumber::from(*y), ctx)?.into())
            }
            (x, y) => {
                if x.kind() != y.kind() {
                    debug!("coercing {} + {} to {}", x.kind(), y.kind(), FuzzyKind::General);
                }
                Ok(x.to_general().try_add(&y.to_general(), ctx)?.into())
            }
        }
    }
}

impl fmt::Display for AnyFuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyFuzzyNumber::Triangular(x) => fmt::Display::fmt(x, f),
            AnyFuzzyNumber::Trapezoidal(x) => fmt::Display::fmt(x, f),
            AnyFuzzyNumber::General(x) => fmt::Display::fmt(x, f),
        }
    }
}

impl From<TriangularFuzzyNumber> for AnyFuzzyNumber {
    fn from(x: TriangularFuzzyNumber) -> Self {
        AnyFuzzyNumber::Triangular(x)
    }
}

impl From<TrapezoidalFuzzyNumber> for AnyFuzzyNumber {
    fn from(x: TrapezoidalFuzzyNumber) -> Self {
        AnyFuzzyNumber::Trapezoidal(x)
    }
}

impl From<GeneralFuzzyNumber> for AnyFuzzyNumber {
    fn from(x: GeneralFuzzyNumber) -> Self {
        AnyFuzzyNumber::General(x)
    }
}

impl From<TriangularFuzzyNumber> for GeneralFuzzyNumber {
    fn from(x: TriangularFuzzyNumber) -> Self {
        x.to_general()
    }
}

impl From<TrapezoidalFuzzyNumber> for GeneralFuzzyNumber {
    fn from(x: TrapezoidalFuzzyNumber) -> Self {
        x.to_general()
    }
}
