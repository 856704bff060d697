/*
    Membership shape functions
*/

use std::fmt;
use std::sync::Arc;

use crate::{FuzzyError, Result};

// Number of bisection steps used when inverting a shape.
// 2^-52 is below the resolution of a normalized position.
const BISECT_STEPS: usize = 52;

type ShapeClosure = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

#[derive(Clone)]
enum Shape {
    // t -> t
    Increasing,
    // t -> 1 - t
    Decreasing,
    Custom(ShapeClosure),
}

/// The shape of one side of a membership function.
///
/// A `ShapeFn` maps a normalized position `t` in `[0, 1]` along a
/// rising (or falling) segment to a membership degree in `[0, 1]`.
/// For a number with breakpoints `a1 <= a2 <= a3 <= a4`, the left shape
/// is evaluated at `(x - a1) / (a2 - a1)` and the right shape at
/// `(x - a3) / (a4 - a3)`.
///
/// Cloning is cheap: custom shapes are reference counted.
#[derive(Clone)]
pub struct ShapeFn(Shape);

/// Linear rising shape shared by every piecewise-linear number.
pub(crate) static LINEAR_INCREASING: ShapeFn = ShapeFn(Shape::Increasing);

/// Linear falling shape shared by every piecewise-linear number.
pub(crate) static LINEAR_DECREASING: ShapeFn = ShapeFn(Shape::Decreasing);

impl ShapeFn {
    /// Wraps an arbitrary closure as a shape function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self(Shape::Custom(Arc::new(f)))
    }

    /// Returns the linear rising shape `t -> t`.
    pub fn linear_increasing() -> Self {
        Self(Shape::Increasing)
    }

    /// Returns the linear falling shape `t -> 1 - t`.
    pub fn linear_decreasing() -> Self {
        Self(Shape::Decreasing)
    }

    /// Returns true if this shape is one of the built-in linear shapes.
    pub fn is_linear(&self) -> bool {
        !matches!(self.0, Shape::Custom(_))
    }

    /// Evaluates the shape at `t`, clamping the result to `[0, 1]`.
    /// A NaN result is treated as zero membership.
    pub fn eval(&self, t: f64) -> f64 {
        let v = match &self.0 {
            Shape::Increasing => t,
            Shape::Decreasing => 1.0 - t,
            Shape::Custom(f) => f(t),
        };
        if v.is_nan() {
            0.0
        } else {
            v.clamp(0.0, 1.0)
        }
    }

    /// Returns true if both shapes are the same function.
    /// Custom shapes compare by identity.
    pub fn same_family(&self, other: &ShapeFn) -> bool {
        match (&self.0, &other.0) {
            (Shape::Increasing, Shape::Increasing) => true,
            (Shape::Decreasing, Shape::Decreasing) => true,
            (Shape::Custom(f), Shape::Custom(g)) => {
                Arc::as_ptr(f) as *const () == Arc::as_ptr(g) as *const ()
            }
            _ => false,
        }
    }

    /// Returns the shape `t -> self(1 - t)`.
    ///
    /// Mirroring turns a left shape into the right shape of the
    /// reflected number (and vice versa).
    pub fn mirrored(&self) -> ShapeFn {
        match &self.0 {
            Shape::Increasing => Self(Shape::Decreasing),
            Shape::Decreasing => Self(Shape::Increasing),
            Shape::Custom(f) => {
                let f = Arc::clone(f);
                Self::new(move |t| f(1.0 - t))
            }
        }
    }

    /// Smallest `t` in `[0, 1]` with `self(t) >= alpha`,
    /// assuming `self` is non-decreasing.
    /// Returns 1 if the shape never reaches `alpha`.
    pub fn first_reaching(&self, alpha: f64) -> f64 {
        match &self.0 {
            Shape::Increasing => alpha.clamp(0.0, 1.0),
            Shape::Decreasing => 0.0,
            Shape::Custom(_) => {
                if self.eval(0.0) >= alpha {
                    return 0.0;
                }
                let (mut lo, mut hi) = (0.0, 1.0);
                for _ in 0..BISECT_STEPS {
                    let mid = 0.5 * (lo + hi);
                    if self.eval(mid) >= alpha {
                        hi = mid;
                    } else {
                        lo = mid;
                    }
                }
                hi
            }
        }
    }

    /// Largest `t` in `[0, 1]` with `self(t) >= alpha`,
    /// assuming `self` is non-increasing.
    /// Returns 0 if the shape never reaches `alpha`.
    pub fn last_reaching(&self, alpha: f64) -> f64 {
        match &self.0 {
            Shape::Decreasing => (1.0 - alpha).clamp(0.0, 1.0),
            Shape::Increasing => 1.0,
            Shape::Custom(_) => {
                if self.eval(1.0) >= alpha {
                    return 1.0;
                }
                let (mut lo, mut hi) = (0.0, 1.0);
                for _ in 0..BISECT_STEPS {
                    let mid = 0.5 * (lo + hi);
                    if self.eval(mid) >= alpha {
                        lo = mid;
                    } else {
                        hi = mid;
                    }
                }
                lo
            }
        }
    }

    // Checks that the shape maps {0, 1} into [0, 1] and is
    // non-decreasing (or non-increasing) between those endpoints.
    pub(crate) fn validate(&self, increasing: bool, name: &str) -> Result<()> {
        if let Shape::Custom(f) = &self.0 {
            let (v0, v1) = (f(0.0), f(1.0));
            if !v0.is_finite() || !v1.is_finite() {
                return Err(FuzzyError::invalid(format!(
                    "{name} does not give finite results on [0, 1]"
                )));
            }
            let in_range = (0.0..=1.0).contains(&v0) && (0.0..=1.0).contains(&v1);
            let monotone = if increasing { v0 <= v1 } else { v0 >= v1 };
            if !in_range || !monotone {
                let dir = if increasing { "an increasing" } else { "a decreasing" };
                return Err(FuzzyError::invalid(format!(
                    "{name} should be {dir} function [0,1] -> [0,1], got f(0)={v0}, f(1)={v1}"
                )));
            }
        }
        Ok(())
    }
}

// Largest `alpha` in `[0, 1]` satisfying `pred`, assuming
// the set of such `alpha` is an interval starting at 0.
pub(crate) fn sup_alpha(pred: impl Fn(f64) -> bool) -> f64 {
    if pred(1.0) {
        return 1.0;
    }
    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..BISECT_STEPS {
        let mid = 0.5 * (lo + hi);
        if pred(mid) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

impl fmt::Debug for ShapeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Shape::Increasing => write!(f, "ShapeFn::LinearIncreasing"),
            Shape::Decreasing => write!(f, "ShapeFn::LinearDecreasing"),
            Shape::Custom(c) => write!(f, "ShapeFn::Custom({:p})", Arc::as_ptr(c) as *const ()),
        }
    }
}
