/*
    Defines a fuzzy number
*/

use std::fmt;

use crate::numbers::{AnyFuzzyNumber, GeneralFuzzyNumber};
use crate::array::plot_number;
use crate::{FuzzyContext, FuzzyError, MembershipPlot, Result, ShapeFn};

/// The variant of a fuzzy number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FuzzyKind {
    Triangular,
    Trapezoidal,
    General,
}

impl FuzzyKind {
    /// Returns the type name of this variant.
    pub fn name(&self) -> &'static str {
        match self {
            FuzzyKind::Triangular => "TriangularFuzzyNumber",
            FuzzyKind::Trapezoidal => "TrapezoidalFuzzyNumber",
            FuzzyKind::General => "GeneralFuzzyNumber",
        }
    }
}

impl fmt::Display for FuzzyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fuzzy number type.
///
/// The central abstraction of this library.
/// A `FuzzyNumber` is described by four breakpoints
/// `a1 <= a2 <= a3 <= a4` and two shape functions:
///  - the support `[a1, a4]` is where membership is non-zero,
///  - the core `[a2, a3]` is where membership is 1,
///  - the left shape describes the rising segment `[a1, a2)`,
///  - the right shape describes the falling segment `(a3, a4]`.
///
/// Values are immutable; every operation returns a new number.
pub trait FuzzyNumber: Clone + fmt::Debug + fmt::Display {
    /// The variant implemented by this type.
    const KIND: FuzzyKind;

    /// Returns the breakpoints `[a1, a2, a3, a4]`.
    fn breakpoints(&self) -> [f64; 4];

    /// Returns the shape of the rising segment.
    fn left_shape(&self) -> &ShapeFn;

    /// Returns the shape of the falling segment.
    fn right_shape(&self) -> &ShapeFn;

    /// Shifts every breakpoint by `k`.
    fn try_add_scalar(&self, k: f64) -> Result<Self>;

    /// Scales every breakpoint by `k`. A negative `k` reverses
    /// the breakpoints so that the order invariant still holds.
    fn try_mul_scalar(&self, k: f64) -> Result<Self>;

    /// Adds this number and another using the
    /// addition method of the provided context.
    fn try_add(&self, other: &Self, ctx: &FuzzyContext) -> Result<Self>;

    /// Converts this number into a `GeneralFuzzyNumber`.
    /// The conversion is lossless.
    fn to_general(&self) -> GeneralFuzzyNumber;

    /// Wraps this number in the dynamically typed `AnyFuzzyNumber`.
    fn into_any(self) -> AnyFuzzyNumber;

    /// Unwraps an `AnyFuzzyNumber` of this variant.
    fn from_any(any: AnyFuzzyNumber) -> Result<Self>;

    /// Returns the left endpoint of the support.
    fn a1(&self) -> f64 {
        self.breakpoints()[0]
    }

    /// Returns the left endpoint of the core.
    fn a2(&self) -> f64 {
        self.breakpoints()[1]
    }

    /// Returns the right endpoint of the core.
    fn a3(&self) -> f64 {
        self.breakpoints()[2]
    }

    /// Returns the right endpoint of the support.
    fn a4(&self) -> f64 {
        self.breakpoints()[3]
    }

    /// Returns the support `(a1, a4)`.
    fn support(&self) -> (f64, f64) {
        (self.a1(), self.a4())
    }

    /// Returns the core `(a2, a3)`.
    fn core(&self) -> (f64, f64) {
        (self.a2(), self.a3())
    }

    /// Returns true if both shapes are linear.
    fn is_piecewise_linear(&self) -> bool {
        self.left_shape().is_linear() && self.right_shape().is_linear()
    }

    /// Computes the membership degree of `x`.
    /// The result always lies in `[0, 1]`.
    fn membership(&self, x: f64) -> f64 {
        let [a1, a2, a3, a4] = self.breakpoints();
        if x < a1 || x > a4 {
            0.0
        } else if a2 <= x && x <= a3 {
            1.0
        } else if x < a2 {
            self.left_shape().eval((x - a1) / (a2 - a1))
        } else {
            self.right_shape().eval((x - a3) / (a4 - a3))
        }
    }

    /// Returns the alpha-cut `[lower, upper]`, the interval where
    /// membership is at least `alpha`. The 0-cut is the support.
    fn alpha_cut(&self, alpha: f64) -> Result<(f64, f64)> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(FuzzyError::invalid(format!(
                "alpha must lie in [0, 1], got {alpha}"
            )));
        }
        let [a1, a2, a3, a4] = self.breakpoints();
        if alpha == 0.0 {
            return Ok((a1, a4));
        }
        let lo = a1 + (a2 - a1) * self.left_shape().first_reaching(alpha);
        let hi = a3 + (a4 - a3) * self.right_shape().last_reaching(alpha);
        Ok((lo, hi))
    }

    /// Plots the membership function of this number alone.
    ///
    /// `n_points` only matters for general numbers, which are sampled
    /// on an even grid over the support and need at least two points.
    /// The usual arguments are `DEFAULT_PLOT_POINTS` and `DEFAULT_PLOT_TITLE`.
    fn plot(&self, n_points: usize, title: &str) -> Result<MembershipPlot> {
        plot_number(self, n_points, title)
    }
}

// Checks that every breakpoint is finite and that they are non-decreasing.
pub(crate) fn check_breakpoints(bp: &[f64], names: &str) -> Result<()> {
    if bp.iter().any(|v| !v.is_finite()) {
        return Err(FuzzyError::invalid(format!(
            "each of {names} should be a single finite real number, got {bp:?}"
        )));
    }
    if bp.windows(2).any(|w| w[1] < w[0]) {
        return Err(FuzzyError::invalid(format!(
            "please provide {names} in non-decreasing order, got {bp:?}"
        )));
    }
    Ok(())
}

// Scalars must be finite for the result to stay a valid number.
pub(crate) fn check_scalar(k: f64) -> Result<()> {
    if k.is_finite() {
        Ok(())
    } else {
        Err(FuzzyError::invalid(format!("scalar operand must be finite, got {k}")))
    }
}

// Approximate equality: absolute tolerance 1e-8 plus relative tolerance 1e-5.
pub(crate) fn is_close(a: f64, b: f64) -> bool {
    const ATOL: f64 = 1e-8;
    const RTOL: f64 = 1e-5;
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

pub(crate) fn all_close(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| is_close(*x, *y))
}
