#![allow(unused_parens)]

//! Provides the composite Simpson's rule, both for functions already sampled
//! into arrays and for functions evaluated on an even grid.
//!
//! Integrals are of the form
//! ```math
//! \int_a^b f(x) \,dx
//! ```
//! approximated by fitting parabolas across pairs of subintervals, so the
//! number of subintervals $`n`$ must be even (equivalently, the number of
//! samples $`n + 1`$ must be odd).

use std::ops::{
    Add,
    Mul,
};
use num_traits::{
    Float,
    identities::Zero,
};
use ndarray::{
    self as nd,
    s,
};
use crate::mkerr;

mkerr!(
    IntegrateError, IntegrateResult : {
        ZeroIntervals => "simpson's rule requires at least two intervals",
        OddIntervals => "simpson's rule requires an even number of intervals",
    }
);

/// Apply Simpson's rule to a 1D array sampled at even intervals.
///
/// `y` must hold an odd number of samples, at least three.
pub fn simpson<A, X>(y: &nd::Array1<A>, dx: &X) -> A
where
    A: Clone + Add<Output = A> + Mul<X, Output = A> + Zero,
    X: Float + Mul<f64, Output = X>,
{
    let n: usize = y.len();
    return (
        y[0].clone() * (*dx * (1.0 / 3.0))
        + y.slice(s![1..n - 1;2]).sum() * (*dx * (4.0 / 3.0))
        + y.slice(s![2..n - 1;2]).sum() * (*dx * (2.0 / 3.0))
        + y[n - 1].clone() * (*dx * (1.0 / 3.0))
    );
}

/// Round an interval count up to the nearest admissible value for Simpson's
/// rule: zero becomes two, odd counts gain one.
pub fn even_intervals(n: usize) -> usize {
    return match n {
        0 => 2,
        k if k % 2 == 1 => k + 1,
        k => k,
    };
}

fn sample<F>(f: &F, a: f64, b: f64, n: usize) -> (nd::Array1<f64>, f64)
where F: Fn(f64) -> f64
{
    let h: f64 = (b - a) / n as f64;
    let y: nd::Array1<f64>
        = (0..=n).map(|i| f(a + i as f64 * h)).collect();
    return (y, h);
}

/// Integrate `f` over $`[a, b]`$ with `n` equal subintervals.
///
/// `n` must be even and nonzero; anything else is rejected. `a > b` is
/// allowed and gives the negated integral.
pub fn simpson_fn<F>(f: F, a: f64, b: f64, n: usize) -> IntegrateResult<f64>
where F: Fn(f64) -> f64
{
    if n == 0 {
        return Err(IntegrateError::ZeroIntervals);
    }
    if n % 2 == 1 {
        return Err(IntegrateError::OddIntervals);
    }
    let (y, h) = sample(&f, a, b, n);
    return Ok(simpson(&y, &h));
}

/// Like [`simpson_fn`], but first passes `n` through [`even_intervals`] so
/// that an integral is always produced.
pub fn simpson_fn_lenient<F>(f: F, a: f64, b: f64, n: usize) -> f64
where F: Fn(f64) -> f64
{
    let (y, h) = sample(&f, a, b, even_intervals(n));
    return simpson(&y, &h);
}
