/*
    Operators
*/

use std::ops::{Add, Mul, Neg, Sub};

use num_traits::ToPrimitive;

use crate::{
    AnyFuzzyNumber, FuzzyContext, FuzzyNumber, GeneralFuzzyNumber, Result,
    TrapezoidalFuzzyNumber, TriangularFuzzyNumber,
};

// Scalars that cannot be represented as `f64` become NaN
// and are rejected by the checked operations.
#[inline]
fn to_scalar<S: ToPrimitive>(k: S) -> f64 {
    k.to_f64().unwrap_or(f64::NAN)
}

// Operator form of `try_add_scalar`.
// Panics if `k` is not finite or the result overflows.
pub(crate) fn add_scalar_or_panic<N: FuzzyNumber>(x: &N, k: f64) -> N {
    match x.try_add_scalar(k) {
        Ok(v) => v,
        Err(e) => panic!("cannot add {k} to {x}: {e}"),
    }
}

// Operator form of `try_mul_scalar`.
// Panics if `k` is not finite or the result overflows.
pub(crate) fn mul_scalar_or_panic<N: FuzzyNumber>(x: &N, k: f64) -> N {
    match x.try_mul_scalar(k) {
        Ok(v) => v,
        Err(e) => panic!("cannot multiply {x} by {k}: {e}"),
    }
}

macro_rules! impl_scalar_ops {
    ($T:ty; $($S:ty),+) => {
        $(
            impl Add<$S> for $T {
                type Output = $T;

                /// Adds a scalar to every breakpoint.
                ///
                /// # Panics
                ///
                /// Panics if the scalar is not finite or the result overflows.
                /// Use `try_add_scalar` to get an error instead.
                fn add(self, k: $S) -> $T {
                    add_scalar_or_panic(&self, to_scalar(k))
                }
            }

            impl Add<$S> for &$T {
                type Output = $T;

                /// Adds a scalar to every breakpoint.
                ///
                /// # Panics
                ///
                /// Panics if the scalar is not finite or the result overflows.
                /// Use `try_add_scalar` to get an error instead.
                fn add(self, k: $S) -> $T {
                    add_scalar_or_panic(self, to_scalar(k))
                }
            }

            impl Add<$T> for $S {
                type Output = $T;

                /// Adds a scalar to every breakpoint.
                ///
                /// # Panics
                ///
                /// Panics if the scalar is not finite or the result overflows.
                /// Use `try_add_scalar` to get an error instead.
                fn add(self, x: $T) -> $T {
                    add_scalar_or_panic(&x, to_scalar(self))
                }
            }

            impl Add<&$T> for $S {
                type Output = $T;

                /// Adds a scalar to every breakpoint.
                ///
                /// # Panics
                ///
                /// Panics if the scalar is not finite or the result overflows.
                /// Use `try_add_scalar` to get an error instead.
                fn add(self, x: &$T) -> $T {
                    add_scalar_or_panic(x, to_scalar(self))
                }
            }

            impl Sub<$S> for $T {
                type Output = $T;

                /// Subtracts a scalar from every breakpoint.
                ///
                /// # Panics
                ///
                /// Panics if the scalar is not finite or the result overflows.
                /// Use `try_add_scalar` with the negated scalar to get an error instead.
                fn sub(self, k: $S) -> $T {
                    add_scalar_or_panic(&self, -to_scalar(k))
                }
            }

            impl Sub<$S> for &$T {
                type Output = $T;

                /// Subtracts a scalar from every breakpoint.
                ///
                /// # Panics
                ///
                /// Panics if the scalar is not finite or the result overflows.
                /// Use `try_add_scalar` with the negated scalar to get an error instead.
                fn sub(self, k: $S) -> $T {
                    add_scalar_or_panic(self, -to_scalar(k))
                }
            }

            impl Mul<$S> for $T {
                type Output = $T;

                /// Scales every breakpoint, reversing them for a negative scalar.
                ///
                /// # Panics
                ///
                /// Panics if the scalar is not finite or the result overflows,
                /// as in `x * f64::MAX` when a breakpoint of `x` exceeds 1 in magnitude.
                /// Use `try_mul_scalar` to get an error instead.
                fn mul(self, k: $S) -> $T {
                    mul_scalar_or_panic(&self, to_scalar(k))
                }
            }

            impl Mul<$S> for &$T {
                type Output = $T;

                /// Scales every breakpoint, reversing them for a negative scalar.
                ///
                /// # Panics
                ///
                /// Panics if the scalar is not finite or the result overflows,
                /// as in `Tri(0, 1, 2) * f64::MAX`.
                /// Use `try_mul_scalar` to get an error instead.
                fn mul(self, k: $S) -> $T {
                    mul_scalar_or_panic(self, to_scalar(k))
                }
            }

            impl Mul<$T> for $S {
                type Output = $T;

                /// Scales every breakpoint, reversing them for a negative scalar.
                ///
                /// # Panics
                ///
                /// Panics if the scalar is not finite or the result overflows,
                /// as in `Tri(0, 1, 2) * f64::MAX`.
                /// Use `try_mul_scalar` to get an error instead.
                fn mul(self, x: $T) -> $T {
                    mul_scalar_or_panic(&x, to_scalar(self))
                }
            }

            impl Mul<&$T> for $S {
                type Output = $T;

                /// Scales every breakpoint, reversing them for a negative scalar.
                ///
                /// # Panics
                ///
                /// Panics if the scalar is not finite or the result overflows,
                /// as in `Tri(0, 1, 2) * f64::MAX`.
                /// Use `try_mul_scalar` to get an error instead.
                fn mul(self, x: &$T) -> $T {
                    mul_scalar_or_panic(x, to_scalar(self))
                }
            }
        )+
    };
}

macro_rules! impl_fuzzy_ops {
    ($($T:ty),+) => {
        $(
            impl_scalar_ops!($T; f64, i32);

            impl Neg for $T {
                type Output = $T;

                fn neg(self) -> $T {
                    mul_scalar_or_panic(&self, -1.0)
                }
            }

            impl Neg for &$T {
                type Output = $T;

                fn neg(self) -> $T {
                    mul_scalar_or_panic(self, -1.0)
                }
            }

            // Uses the process-wide addition method.
            impl Add for $T {
                type Output = Result<$T>;

                fn add(self, other: $T) -> Result<$T> {
                    self.try_add(&other, &FuzzyContext::global())
                }
            }

            impl<'a> Add<&'a $T> for &'a $T {
                type Output = Result<$T>;

                fn add(self, other: &'a $T) -> Result<$T> {
                    self.try_add(other, &FuzzyContext::global())
                }
            }
        )+
    };
}

impl_fuzzy_ops!(TriangularFuzzyNumber, TrapezoidalFuzzyNumber, GeneralFuzzyNumber);

// Implementing `Add` for `AnyFuzzyNumber`
impl Add for AnyFuzzyNumber {
    type Output = Result<AnyFuzzyNumber>;

    fn add(self, other: AnyFuzzyNumber) -> Result<AnyFuzzyNumber> {
        self.try_add(&other, &FuzzyContext::global())
    }
}

impl<'a> Add<&'a AnyFuzzyNumber> for &'a AnyFuzzyNumber {
    type Output = Result<AnyFuzzyNumber>;

    fn add(self, other: &'a AnyFuzzyNumber) -> Result<AnyFuzzyNumber> {
        self.try_add(other, &FuzzyContext::global())
    }
}
