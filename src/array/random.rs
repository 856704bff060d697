/*
    Random generation of fuzzy number arrays
*/

use log::debug;
use rand::distr::{Distribution, Uniform};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

use super::FuzzyNumberArray;
use crate::{FuzzyError, Result, TrapezoidalFuzzyNumber, TriangularFuzzyNumber};

/// Creates a fast, seeded random number generator.
///
/// The sequence is deterministic for a given seed on the same platform,
/// so arrays generated from it are reproducible.
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Distribution parameters for `FuzzyNumberArray::random_triangular`.
///
/// The peak is drawn from `N(c_mu, c_sigma)`, the left spread from
/// `U(l1, l2)` and the right spread from `U(r1, r2)`. Spreads enter as
/// absolute values, so every sample satisfies `left <= mid <= right`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangularSampling {
    pub c_mu: f64,
    pub c_sigma: f64,
    pub l1: f64,
    pub l2: f64,
    pub r1: f64,
    pub r2: f64,
}

impl TriangularSampling {
    pub fn new(c_mu: f64, c_sigma: f64, l1: f64, l2: f64, r1: f64, r2: f64) -> Self {
        Self {
            c_mu,
            c_sigma,
            l1,
            l2,
            r1,
            r2,
        }
    }
}

/// Distribution parameters for `FuzzyNumberArray::random_trapezoidal`.
///
/// Like `TriangularSampling`, with an additional core width drawn from
/// `U(w1, w2)` and centred on the sampled center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrapezoidalSampling {
    pub c_mu: f64,
    pub c_sigma: f64,
    pub l1: f64,
    pub l2: f64,
    pub r1: f64,
    pub r2: f64,
    pub w1: f64,
    pub w2: f64,
}

impl TrapezoidalSampling {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        c_mu: f64,
        c_sigma: f64,
        l1: f64,
        l2: f64,
        r1: f64,
        r2: f64,
        w1: f64,
        w2: f64,
    ) -> Self {
        Self {
            c_mu,
            c_sigma,
            l1,
            l2,
            r1,
            r2,
            w1,
            w2,
        }
    }
}

fn normal(mu: f64, sigma: f64) -> Result<Normal<f64>> {
    if !mu.is_finite() {
        return Err(FuzzyError::invalid(format!("center mean must be finite, got {mu}")));
    }
    Normal::new(mu, sigma).map_err(|e| {
        FuzzyError::invalid(format!("center distribution N({mu}, {sigma}): {e}"))
    })
}

fn uniform(lo: f64, hi: f64, name: &str) -> Result<Uniform<f64>> {
    if !lo.is_finite() || !hi.is_finite() {
        return Err(FuzzyError::invalid(format!(
            "{name} spread bounds must be finite, got ({lo}, {hi})"
        )));
    }
    Uniform::new_inclusive(lo, hi)
        .map_err(|e| FuzzyError::invalid(format!("{name} spread distribution U({lo}, {hi}): {e}")))
}

impl FuzzyNumberArray<TriangularFuzzyNumber> {
    /// Generates `n` random triangular fuzzy numbers.
    pub fn random_triangular<R: Rng + ?Sized>(
        n: usize,
        params: &TriangularSampling,
        rng: &mut R,
    ) -> Result<Self> {
        let center = normal(params.c_mu, params.c_sigma)?;
        let left = uniform(params.l1, params.l2, "left")?;
        let right = uniform(params.r1, params.r2, "right")?;
        debug!("sampling {n} triangular fuzzy numbers from {params:?}");

        let data = (0..n)
            .map(|_| {
                let c = center.sample(rng);
                let l = left.sample(rng).abs();
                let r = right.sample(rng).abs();
                TriangularFuzzyNumber::new(c - l, c, c + r)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(data))
    }
}

impl FuzzyNumberArray<TrapezoidalFuzzyNumber> {
    /// Generates `n` random trapezoidal fuzzy numbers.
    pub fn random_trapezoidal<R: Rng + ?Sized>(
        n: usize,
        params: &TrapezoidalSampling,
        rng: &mut R,
    ) -> Result<Self> {
        let center = normal(params.c_mu, params.c_sigma)?;
        let left = uniform(params.l1, params.l2, "left")?;
        let right = uniform(params.r1, params.r2, "right")?;
        let width = uniform(params.w1, params.w2, "core width")?;
        debug!("sampling {n} trapezoidal fuzzy numbers from {params:?}");

        let data = (0..n)
            .map(|_| {
                let c = center.sample(rng);
                let half = 0.5 * width.sample(rng).abs();
                let (a2, a3) = (c - half, c + half);
                let a1 = a2 - left.sample(rng).abs();
                let a4 = a3 + right.sample(rng).abs();
                TrapezoidalFuzzyNumber::new(a1, a2, a3, a4)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(data))
    }
}
