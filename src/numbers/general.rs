/*
    Definition of `GeneralFuzzyNumber`
*/

use std::fmt;

use crate::number::{all_close, check_breakpoints, check_scalar};
use crate::{AnyFuzzyNumber, FuzzyContext, FuzzyError, FuzzyKind, FuzzyNumber, Result, ShapeFn};

/// A fuzzy number with arbitrary left and right membership shapes.
///
/// The breakpoints `a1 <= a2 <= a3 <= a4` fix the support and the
/// core. The shapes default to linear, in which case the number is
/// equivalent to a `TrapezoidalFuzzyNumber`.
///
/// ```
/// use fuzzy_num::{FuzzyNumber, GeneralFuzzyNumber, ShapeFn};
///
/// let x = GeneralFuzzyNumber::with_shapes(
///     0.0, 1.0, 2.0, 3.0,
///     ShapeFn::new(|t| t * t),
///     ShapeFn::new(|t| 1.0 - t * t),
/// ).unwrap();
/// assert_eq!(x.membership(0.5), 0.25);
/// ```
#[derive(Clone)]
pub struct GeneralFuzzyNumber {
    bp: [f64; 4],
    left: ShapeFn,
    right: ShapeFn,
}

impl GeneralFuzzyNumber {
    /// Creates a `GeneralFuzzyNumber` with linear shapes.
    pub fn new(a1: f64, a2: f64, a3: f64, a4: f64) -> Result<Self> {
        Self::with_shapes(
            a1,
            a2,
            a3,
            a4,
            ShapeFn::linear_increasing(),
            ShapeFn::linear_decreasing(),
        )
    }

    /// Creates a `GeneralFuzzyNumber` with custom shapes.
    ///
    /// The left shape must be increasing on `[0, 1]` and the right shape
    /// decreasing, both with values in `[0, 1]`.
    pub fn with_shapes(
        a1: f64,
        a2: f64,
        a3: f64,
        a4: f64,
        left: ShapeFn,
        right: ShapeFn,
    ) -> Result<Self> {
        let bp = [a1, a2, a3, a4];
        check_breakpoints(&bp, "a1, a2, a3, a4")?;
        left.validate(true, "left shape")?;
        right.validate(false, "right shape")?;
        Ok(Self { bp, left, right })
    }

    // Breakpoints must already be validated.
    pub(crate) fn from_linear(bp: [f64; 4]) -> Self {
        Self {
            bp,
            left: ShapeFn::linear_increasing(),
            right: ShapeFn::linear_decreasing(),
        }
    }

    /// Decomposes this number into its breakpoints and shapes.
    pub fn into_parts(self) -> ([f64; 4], ShapeFn, ShapeFn) {
        (self.bp, self.left, self.right)
    }
}

impl FuzzyNumber for GeneralFuzzyNumber {
    const KIND: FuzzyKind = FuzzyKind::General;

    fn breakpoints(&self) -> [f64; 4] {
        self.bp
    }

    fn left_shape(&self) -> &ShapeFn {
        &self.left
    }

    fn right_shape(&self) -> &ShapeFn {
        &self.right
    }

    fn try_add_scalar(&self, k: f64) -> Result<Self> {
        check_scalar(k)?;
        let [a1, a2, a3, a4] = self.bp;
        Self::with_shapes(a1 + k, a2 + k, a3 + k, a4 + k, self.left.clone(), self.right.clone())
    }

    fn try_mul_scalar(&self, k: f64) -> Result<Self> {
        check_scalar(k)?;
        let [a1, a2, a3, a4] = self.bp;
        if k < 0.0 {
            // reflection: the falling side becomes the rising side
            Self::with_shapes(
                a4 * k,
                a3 * k,
                a2 * k,
                a1 * k,
                self.right.mirrored(),
                self.left.mirrored(),
            )
        } else {
            Self::with_shapes(a1 * k, a2 * k, a3 * k, a4 * k, self.left.clone(), self.right.clone())
        }
    }

    fn try_add(&self, other: &Self, ctx: &FuzzyContext) -> Result<Self> {
        self.sum(other, ctx.addition_method())
    }

    fn to_general(&self) -> GeneralFuzzyNumber {
        self.clone()
    }

    fn into_any(self) -> AnyFuzzyNumber {
        AnyFuzzyNumber::General(self)
    }

    fn from_any(any: AnyFuzzyNumber) -> Result<Self> {
        match any {
            AnyFuzzyNumber::General(x) => Ok(x),
            other => Err(FuzzyError::TypeMismatch {
                expected: Self::KIND.name(),
                found: other.kind().name(),
            }),
        }
    }
}

impl PartialEq for GeneralFuzzyNumber {
    fn eq(&self, other: &Self) -> bool {
        all_close(&self.bp, &other.bp)
    }
}

impl fmt::Debug for GeneralFuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneralFuzzyNumber")
            .field("a1", &self.bp[0])
            .field("a2", &self.bp[1])
            .field("a3", &self.bp[2])
            .field("a4", &self.bp[3])
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl fmt::Display for GeneralFuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a1, a2, a3, a4] = self.bp;
        write!(f, "GeneralFuzzyNumber(a1={a1}, a2={a2}, a3={a3}, a4={a4}")?;
        if !self.is_piecewise_linear() {
            write!(f, ", custom shapes")?;
        }
        write!(f, ")")
    }
}
