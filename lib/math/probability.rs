//! Provides a normal distribution whose tail probabilities are computed by
//! direct numerical integration of the density.
//!
//! Tails are integrated out to a finite number of standard deviations from
//! the mean (five by default), beyond which the remaining mass is treated as
//! negligible. Tail results are clamped to $`[0, 1]`$, so a cutoff lying
//! beyond the far edge of that window gives exactly zero.

use std::f64::consts::PI;
use crate::{
    mkerr,
    math::integrate::{
        self,
        IntegrateResult,
    },
};

mkerr!(
    ProbError, ProbResult : {
        BadSigma => "standard deviation must be finite and positive",
        BadMean => "mean must be finite",
    }
);

/// Direction of a tail probability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum Tail {
    /// $`P(x < c)`$
    #[default]
    Lower,
    /// $`P(x > c)`$
    Upper,
}

impl Tail {
    /// Comparison symbol used when printing `P(x<c)`-style labels.
    pub fn symbol(&self) -> char {
        return match self {
            Tail::Lower => '<',
            Tail::Upper => '>',
        };
    }
}

/// Options to control tail integration.
#[derive(Clone, Copy, Debug)]
pub struct TailOptions {
    /// Number of Simpson's-rule subintervals (default 1000)
    pub intervals: usize,

    /// Half-width of the integration window in units of sigma, standing in
    /// for infinity (default 5)
    pub width: f64,
}

impl Default for TailOptions {
    fn default() -> Self { Self { intervals: 1000, width: 5.0 } }
}

/// A normal distribution $`\mathcal{N}(\mu, \sigma^2)`$.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gaussian {
    mu: f64,
    sigma: f64,
}

impl Gaussian {
    /// Create a new `Gaussian`. `sigma` must be strictly positive and both
    /// parameters finite.
    pub fn new(mu: f64, sigma: f64) -> ProbResult<Self> {
        if !mu.is_finite() {
            return Err(ProbError::BadMean);
        }
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(ProbError::BadSigma);
        }
        return Ok(Self { mu, sigma });
    }

    /// $`\mathcal{N}(0, 1)`$
    pub fn standard() -> Self { Self { mu: 0.0, sigma: 1.0 } }

    pub fn mu(&self) -> f64 { self.mu }

    pub fn sigma(&self) -> f64 { self.sigma }

    /// Probability density at `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        let z: f64 = (x - self.mu) / self.sigma;
        return (-0.5 * z * z).exp() / (self.sigma * (2.0 * PI).sqrt());
    }

    fn bounds(&self, c: f64, tail: Tail, width: f64) -> (f64, f64) {
        return match tail {
            Tail::Lower => (self.mu - width * self.sigma, c),
            Tail::Upper => (c, self.mu + width * self.sigma),
        };
    }

    /// Compute $`P(x < c)`$ or $`P(x > c)`$ by Simpson's rule.
    ///
    /// The result is clamped to $`[0, 1]`$; a cutoff past the far edge of the
    /// integration window (an empty window) gives zero. Fails if
    /// `opts.intervals` is zero or odd.
    pub fn tail(&self, c: f64, tail: Tail, opts: TailOptions)
        -> IntegrateResult<f64>
    {
        let (a, b) = self.bounds(c, tail, opts.width);
        return integrate::simpson_fn(|x| self.pdf(x), a, b, opts.intervals)
            .map(|p| p.clamp(0.0, 1.0));
    }

    /// Like [`Self::tail`], but rounds a zero or odd interval count up to the
    /// next even one instead of failing.
    pub fn tail_lenient(&self, c: f64, tail: Tail, opts: TailOptions) -> f64 {
        let (a, b) = self.bounds(c, tail, opts.width);
        return integrate::simpson_fn_lenient(
            |x| self.pdf(x), a, b, opts.intervals)
            .clamp(0.0, 1.0);
    }

    /// $`P(x < c)`$ with default options.
    pub fn cdf(&self, c: f64) -> f64 {
        return self.tail_lenient(c, Tail::Lower, TailOptions::default());
    }

    /// $`P(x > c)`$ with default options.
    pub fn sf(&self, c: f64) -> f64 {
        return self.tail_lenient(c, Tail::Upper, TailOptions::default());
    }

    /// Compute $`P(a < x < b)`$ by integrating the density over
    /// $`[a, b]`$ directly; `opts.width` is unused.
    pub fn interval(&self, a: f64, b: f64, opts: TailOptions)
        -> IntegrateResult<f64>
    {
        return integrate::simpson_fn(|x| self.pdf(x), a, b, opts.intervals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::integrate::IntegrateError;

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(Gaussian::new(0.0, 0.0), Err(ProbError::BadSigma));
        assert_eq!(Gaussian::new(0.0, -1.0), Err(ProbError::BadSigma));
        assert_eq!(Gaussian::new(0.0, f64::NAN), Err(ProbError::BadSigma));
        assert_eq!(Gaussian::new(f64::INFINITY, 1.0), Err(ProbError::BadMean));
    }

    #[test]
    fn density_peak_and_symmetry() {
        let g = Gaussian::standard();
        assert!((g.pdf(0.0) - 0.398_942_280_401_432_7).abs() < 1e-15);
        assert_eq!(g.pdf(1.3), g.pdf(-1.3));

        let g = Gaussian::new(100.0, 12.5).unwrap();
        assert!((g.pdf(100.0) * 12.5 - 0.398_942_280_401_432_7).abs() < 1e-12);
    }

    #[test]
    fn lower_tail_known_values() {
        let opts = TailOptions::default();
        // Phi(0.4) and Phi(2)
        let p1 = Gaussian::new(100.0, 12.5).unwrap()
            .tail(105.0, Tail::Lower, opts).unwrap();
        assert!((p1 - 0.655_421_741_610_324).abs() < 1e-5);
        let p2 = Gaussian::new(100.0, 3.0).unwrap()
            .tail(106.0, Tail::Lower, opts).unwrap();
        assert!((p2 - 0.977_249_868_051_821).abs() < 1e-5);
    }

    #[test]
    fn tails_sum_to_one() {
        let g = Gaussian::new(100.0, 12.5).unwrap();
        for c in [70.0, 90.0, 100.0, 105.0, 130.0] {
            let lo = g.cdf(c);
            let hi = g.sf(c);
            assert!((0.0..=1.0).contains(&lo));
            assert!((0.0..=1.0).contains(&hi));
            assert!((lo + hi - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn cutoffs_outside_window_stay_in_unit_range() {
        let g = Gaussian::new(100.0, 3.0).unwrap();
        let opts = TailOptions::default();
        for c in [70.0, 130.0] {
            for tail in [Tail::Lower, Tail::Upper] {
                let strict = g.tail(c, tail, opts).unwrap();
                let lenient = g.tail_lenient(c, tail, opts);
                assert!((0.0..=1.0).contains(&strict));
                assert!((0.0..=1.0).contains(&lenient));
            }
        }
        let g = Gaussian::standard();
        assert_eq!(g.cdf(-10.0), 0.0);
        assert_eq!(g.sf(10.0), 0.0);
        assert_eq!(g.tail(-10.0, Tail::Lower, opts), Ok(0.0));
        assert!((g.cdf(10.0) - 1.0).abs() < 1e-6);
        assert!((g.sf(-10.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn lower_tail_is_monotone() {
        let g = Gaussian::new(-2.0, 0.7).unwrap();
        let mut prev: f64 = g.cdf(-5.5);
        for k in 1..=60 {
            let p = g.cdf(-5.5 + 0.1 * k as f64);
            assert!(p >= prev);
            prev = p;
        }
    }

    #[test]
    fn interval_matches_tail_difference() {
        let g = Gaussian::standard();
        let opts = TailOptions::default();
        let inner = g.interval(-1.0, 1.0, opts).unwrap();
        assert!((inner - (g.cdf(1.0) - g.cdf(-1.0))).abs() < 1e-6);
        assert!((inner - 0.682_689_492_137_086).abs() < 1e-6);
    }

    #[test]
    fn interval_count_contract() {
        let g = Gaussian::standard();
        let odd = TailOptions { intervals: 999, ..Default::default() };
        let zero = TailOptions { intervals: 0, ..Default::default() };
        assert_eq!(g.tail(0.0, Tail::Lower, odd), Err(IntegrateError::OddIntervals));
        assert_eq!(g.tail(0.0, Tail::Upper, zero), Err(IntegrateError::ZeroIntervals));

        let rounded = g.tail_lenient(0.0, Tail::Lower, odd);
        let even = g.tail(
            0.0, Tail::Lower, TailOptions { intervals: 1000, ..odd }).unwrap();
        assert_eq!(rounded, even);
        let coarse = g.tail(
            0.0, Tail::Lower, TailOptions { intervals: 2, ..zero }).unwrap();
        assert_eq!(g.tail_lenient(0.0, Tail::Lower, zero), coarse);
    }
}
