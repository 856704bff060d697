/*
    Vectorized projections
*/

use ndarray::Array1;

use super::FuzzyNumberArray;
use crate::{FuzzyNumber, TrapezoidalFuzzyNumber, TriangularFuzzyNumber};

// Projections available for every variant
impl<T: FuzzyNumber> FuzzyNumberArray<T> {
    /// Applies `f` to every element, collecting the results
    /// in element order.
    pub fn map_to_array(&self, f: impl Fn(&T) -> f64) -> Array1<f64> {
        self.iter().map(f).collect()
    }

    /// Returns the left endpoint of the support of every element.
    pub fn a1(&self) -> Array1<f64> {
        self.map_to_array(|x| x.a1())
    }

    /// Returns the left endpoint of the core of every element.
    pub fn a2(&self) -> Array1<f64> {
        self.map_to_array(|x| x.a2())
    }

    /// Returns the right endpoint of the core of every element.
    pub fn a3(&self) -> Array1<f64> {
        self.map_to_array(|x| x.a3())
    }

    /// Returns the right endpoint of the support of every element.
    pub fn a4(&self) -> Array1<f64> {
        self.map_to_array(|x| x.a4())
    }

    /// Evaluates the membership of `x` in every element.
    pub fn membership(&self, x: f64) -> Array1<f64> {
        self.map_to_array(|n| n.membership(x))
    }
}

impl FuzzyNumberArray<TriangularFuzzyNumber> {
    pub fn left(&self) -> Array1<f64> {
        self.map_to_array(|x| x.left())
    }

    pub fn mid(&self) -> Array1<f64> {
        self.map_to_array(|x| x.mid())
    }

    pub fn right(&self) -> Array1<f64> {
        self.map_to_array(|x| x.right())
    }
}

impl FuzzyNumberArray<TrapezoidalFuzzyNumber> {
    pub fn left(&self) -> Array1<f64> {
        self.map_to_array(|x| x.left())
    }

    pub fn core_left(&self) -> Array1<f64> {
        self.map_to_array(|x| x.core_left())
    }

    pub fn core_right(&self) -> Array1<f64> {
        self.map_to_array(|x| x.core_right())
    }

    pub fn right(&self) -> Array1<f64> {
        self.map_to_array(|x| x.right())
    }
}
