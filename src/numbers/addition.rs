/*
    Addition of two fuzzy numbers
*/

use log::trace;

use crate::shape::sup_alpha;
use crate::{AdditionMethod, FuzzyError, FuzzyNumber, GeneralFuzzyNumber, Result, ShapeFn};

impl GeneralFuzzyNumber {
    // Adds two numbers under `method`. Every variant is added through
    // its general form and converted back by the caller.
    pub(crate) fn sum(&self, other: &Self, method: AdditionMethod) -> Result<Self> {
        trace!("adding {self} and {other} ({method})");
        match method {
            AdditionMethod::Default => self.sum_breakpoints(other),
            AdditionMethod::ExtensionPrinciple => self.sum_extension_principle(other),
            AdditionMethod::WeakestTNorm => self.sum_weakest_t_norm(other),
        }
    }

    fn same_shapes(&self, other: &Self) -> bool {
        self.left_shape().same_family(other.left_shape())
            && self.right_shape().same_family(other.right_shape())
    }

    // Interval arithmetic on the breakpoints.
    // Only exact when both numbers share their shapes.
    fn sum_breakpoints(&self, other: &Self) -> Result<Self> {
        if !self.same_shapes(other) {
            return Err(FuzzyError::unsupported(format!(
                "cannot add {self} and {other} breakpoint-wise: shape functions differ \
                 (use the \"extension_principle\" or \"weakest_t_norm\" method)"
            )));
        }
        let [a1, a2, a3, a4] = self.breakpoints();
        let [b1, b2, b3, b4] = other.breakpoints();
        Self::with_shapes(
            a1 + b1,
            a2 + b2,
            a3 + b3,
            a4 + b4,
            self.left_shape().clone(),
            self.right_shape().clone(),
        )
    }

    // [A + B]_alpha = [A_alpha^L + B_alpha^L, A_alpha^U + B_alpha^U]
    fn sum_extension_principle(&self, other: &Self) -> Result<Self> {
        if self.same_shapes(other) {
            return self.sum_breakpoints(other);
        }

        let [a1, a2, a3, a4] = self.breakpoints();
        let [b1, b2, b3, b4] = other.breakpoints();
        let (la, lb) = (a2 - a1, b2 - b1);
        let (ra, rb) = (a4 - a3, b4 - b3);

        // Normalized position of the summed lower endpoint is the
        // spread-weighted average of the operands' positions.
        let left = if la + lb > 0.0 {
            let (wa, wb) = (la / (la + lb), lb / (la + lb));
            let (fa, fb) = (self.left_shape().clone(), other.left_shape().clone());
            ShapeFn::new(move |t| {
                sup_alpha(|alpha| wa * fa.first_reaching(alpha) + wb * fb.first_reaching(alpha) <= t)
            })
        } else {
            ShapeFn::linear_increasing()
        };

        let right = if ra + rb > 0.0 {
            let (wa, wb) = (ra / (ra + rb), rb / (ra + rb));
            let (ga, gb) = (self.right_shape().clone(), other.right_shape().clone());
            ShapeFn::new(move |s| {
                sup_alpha(|alpha| wa * ga.last_reaching(alpha) + wb * gb.last_reaching(alpha) >= s)
            })
        } else {
            ShapeFn::linear_decreasing()
        };

        Self::with_shapes(a1 + b1, a2 + b2, a3 + b3, a4 + b4, left, right)
    }

    // sup_{x + y = z} T_W(A(x), B(y)), where T_W is the drastic product.
    // One of the operands must sit in its core, so the rising side is
    // max(A(z - b2), B(z - a2)) and the falling side max(A(z - b3), B(z - a3)).
    fn sum_weakest_t_norm(&self, other: &Self) -> Result<Self> {
        let [a1, a2, a3, a4] = self.breakpoints();
        let [b1, b2, b3, b4] = other.breakpoints();
        let c2 = a2 + b2;
        let c3 = a3 + b3;
        let c1 = c2 - f64::max(a2 - a1, b2 - b1);
        let c4 = c3 + f64::max(a4 - a3, b4 - b3);

        if self.same_shapes(other) {
            // shapes are preserved, only the larger spread survives
            return Self::with_shapes(
                c1,
                c2,
                c3,
                c4,
                self.left_shape().clone(),
                self.right_shape().clone(),
            );
        }

        let (x, y) = (self.clone(), other.clone());
        let left = ShapeFn::new(move |t| {
            let z = c1 + t * (c2 - c1);
            f64::max(x.membership(z - b2), y.membership(z - a2))
        });
        let (x, y) = (self.clone(), other.clone());
        let right = ShapeFn::new(move |s| {
            let z = c3 + s * (c4 - c3);
            f64::max(x.membership(z - b3), y.membership(z - a3))
        });

        Self::with_shapes(c1, c2, c3, c4, left, right)
    }
}
