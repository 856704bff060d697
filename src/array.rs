/*
    Definition of `FuzzyNumberArray<T>`
*/

mod index;
mod plot;
mod project;
mod random;

use std::fmt;
use std::ops::{Add, Index, Mul, Sub};

use crate::numbers::{add_scalar_or_panic, mul_scalar_or_panic};
use crate::{
    AnyFuzzyNumber, FuzzyContext, FuzzyError, FuzzyNumber, Result, TrapezoidalFuzzyNumber,
    TriangularFuzzyNumber,
};

pub use plot::*;
pub(crate) use plot::plot_number;
pub use random::*;

/// A fixed-length sequence of fuzzy numbers of a single variant.
///
/// The element type fixes the variant, so vectorized projections
/// (`a1()`, `mid()`, ...) are always meaningful. Indexing follows the
/// usual conventions for sequences with negative indices counting from
/// the end. Slicing and fancy indexing return new arrays.
///
/// ```
/// use fuzzy_num::{FuzzyNumberArray, TriangularFuzzyNumber};
///
/// let arr = FuzzyNumberArray::new(vec![
///     TriangularFuzzyNumber::new(0.0, 1.0, 2.0).unwrap(),
///     TriangularFuzzyNumber::new(1.0, 2.0, 3.0).unwrap(),
/// ]);
/// assert_eq!(arr.len(), 2);
/// assert_eq!(arr.mid().to_vec(), vec![1.0, 2.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzyNumberArray<T: FuzzyNumber> {
    data: Vec<T>,
}

impl<T: FuzzyNumber> FuzzyNumberArray<T> {
    /// Creates a new array holding `data`.
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Creates an array from numbers whose variant is only known at runtime.
    /// Fails if any element is not of variant `T`.
    pub fn try_from_any(data: Vec<AnyFuzzyNumber>) -> Result<Self> {
        let data = data
            .into_iter()
            .map(T::from_any)
            .collect::<Result<Vec<T>>>()?;
        Ok(Self { data })
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copies the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Returns the element at `index`.
    /// Negative indices count from the end.
    pub fn get(&self, index: isize) -> Result<&T> {
        let i = index::resolve(index, self.len())?;
        Ok(&self.data[i])
    }

    /// Replaces the element at `index`, returning the previous element.
    /// Negative indices count from the end.
    pub fn set(&mut self, index: isize, value: T) -> Result<T> {
        let i = index::resolve(index, self.len())?;
        Ok(std::mem::replace(&mut self.data[i], value))
    }

    /// Returns a new array with the elements selected by the slice
    /// `start:stop:step`. Missing bounds default to the ends of the
    /// array (in the direction of `step`); bounds are clamped.
    pub fn slice(&self, start: Option<isize>, stop: Option<isize>, step: isize) -> Result<Self> {
        let indices = index::slice_indices(self.len(), start, stop, step)?;
        Ok(Self::new(indices.into_iter().map(|i| self.data[i].clone()).collect()))
    }

    /// Returns a new array with the elements at `indices`, in that order.
    pub fn take(&self, indices: &[isize]) -> Result<Self> {
        let data = indices
            .iter()
            .map(|&i| index::resolve(i, self.len()).map(|i| self.data[i].clone()))
            .collect::<Result<Vec<T>>>()?;
        Ok(Self::new(data))
    }

    /// Shifts every element by `k`.
    pub fn try_add_scalar(&self, k: f64) -> Result<Self> {
        self.try_map(|x| x.try_add_scalar(k))
    }

    /// Scales every element by `k`.
    pub fn try_mul_scalar(&self, k: f64) -> Result<Self> {
        self.try_map(|x| x.try_mul_scalar(k))
    }

    /// Adds two arrays elementwise using the context's addition method.
    pub fn try_add_with(&self, other: &Self, ctx: &FuzzyContext) -> Result<Self> {
        self.check_same_len(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(x, y)| x.try_add(y, ctx))
            .collect::<Result<Vec<T>>>()?;
        Ok(Self::new(data))
    }

    /// Adds two arrays elementwise using the process-wide addition method.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.try_add_with(other, &FuzzyContext::global())
    }

    /// Adds `y` to every element using the context's addition method.
    pub fn try_add_number(&self, y: &T, ctx: &FuzzyContext) -> Result<Self> {
        self.try_map(|x| x.try_add(y, ctx))
    }

    fn try_map(&self, f: impl Fn(&T) -> Result<T>) -> Result<Self> {
        let data = self.data.iter().map(f).collect::<Result<Vec<T>>>()?;
        Ok(Self::new(data))
    }

    fn check_same_len(&self, other: &Self) -> Result<()> {
        if self.len() != other.len() {
            return Err(FuzzyError::unsupported(format!(
                "arrays must be of the same length, got {} and {}",
                self.len(),
                other.len()
            )));
        }
        Ok(())
    }
}

// Fuzzy multiplication is only defined for the piecewise-linear variants.
macro_rules! impl_mul_fuzzy {
    ($($T:ty),+) => {
        $(
            impl FuzzyNumberArray<$T> {
                /// Multiplies two arrays elementwise with `mul_fuzzy`.
                pub fn try_mul_fuzzy(&self, other: &Self) -> Result<Self> {
                    self.check_same_len(other)?;
                    let data = self
                        .data
                        .iter()
                        .zip(&other.data)
                        .map(|(x, y)| x.mul_fuzzy(y))
                        .collect::<Result<Vec<$T>>>()?;
                    Ok(Self::new(data))
                }

                /// Multiplies every element by `y` with `mul_fuzzy`.
                pub fn try_mul_number(&self, y: &$T) -> Result<Self> {
                    self.try_map(|x| x.mul_fuzzy(y))
                }
            }
        )+
    };
}

impl_mul_fuzzy!(TriangularFuzzyNumber, TrapezoidalFuzzyNumber);

// Implementing `Index<usize>`
impl<T: FuzzyNumber> Index<usize> for FuzzyNumberArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: FuzzyNumber> From<Vec<T>> for FuzzyNumberArray<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T: FuzzyNumber> FromIterator<T> for FuzzyNumberArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: FuzzyNumber> IntoIterator for FuzzyNumberArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T: FuzzyNumber> IntoIterator for &'a FuzzyNumberArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

// Broadcasting scalar operators.
// Each panics under the same conditions as the element operator.
impl<T: FuzzyNumber> Add<f64> for &FuzzyNumberArray<T> {
    type Output = FuzzyNumberArray<T>;

    /// Adds `k` to every element.
    ///
    /// # Panics
    ///
    /// Panics if `k` is not finite or any element overflows.
    /// Use `try_add_scalar` to get an error instead.
    fn add(self, k: f64) -> FuzzyNumberArray<T> {
        self.iter().map(|x| add_scalar_or_panic(x, k)).collect()
    }
}

impl<T: FuzzyNumber> Add<f64> for FuzzyNumberArray<T> {
    type Output = FuzzyNumberArray<T>;

    fn add(self, k: f64) -> FuzzyNumberArray<T> {
        &self + k
    }
}

impl<T: FuzzyNumber> Add<FuzzyNumberArray<T>> for f64 {
    type Output = FuzzyNumberArray<T>;

    fn add(self, arr: FuzzyNumberArray<T>) -> FuzzyNumberArray<T> {
        &arr + self
    }
}

impl<T: FuzzyNumber> Sub<f64> for &FuzzyNumberArray<T> {
    type Output = FuzzyNumberArray<T>;

    fn sub(self, k: f64) -> FuzzyNumberArray<T> {
        self + (-k)
    }
}

impl<T: FuzzyNumber> Sub<f64> for FuzzyNumberArray<T> {
    type Output = FuzzyNumberArray<T>;

    fn sub(self, k: f64) -> FuzzyNumberArray<T> {
        &self + (-k)
    }
}

impl<T: FuzzyNumber> Mul<f64> for &FuzzyNumberArray<T> {
    type Output = FuzzyNumberArray<T>;

    /// Multiplies every element by `k`.
    ///
    /// # Panics
    ///
    /// Panics if `k` is not finite or any element overflows.
    /// Use `try_mul_scalar` to get an error instead.
    fn mul(self, k: f64) -> FuzzyNumberArray<T> {
        self.iter().map(|x| mul_scalar_or_panic(x, k)).collect()
    }
}

impl<T: FuzzyNumber> Mul<f64> for FuzzyNumberArray<T> {
    type Output = FuzzyNumberArray<T>;

    fn mul(self, k: f64) -> FuzzyNumberArray<T> {
        &self * k
    }
}

impl<T: FuzzyNumber> Mul<FuzzyNumberArray<T>> for f64 {
    type Output = FuzzyNumberArray<T>;

    fn mul(self, arr: FuzzyNumberArray<T>) -> FuzzyNumberArray<T> {
        &arr * self
    }
}

impl<T: FuzzyNumber> fmt::Display for FuzzyNumberArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FuzzyNumberArray(type_={}, size={}, data=[", T::KIND, self.len())?;
        for (i, x) in self.data.iter().take(5).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        if self.len() > 5 {
            write!(f, ", ...")?;
        }
        write!(f, "])")
    }
}
