//! Provides secant-method root finding for 1D -> 1D functions.
//!
//! The secant method replaces the derivative in a Newton-Raphson step with
//! the slope of the chord through the two most recent iterates, so only the
//! function itself is needed.

use crate::mkerr;

mkerr!(
    SearchError, SearchResult : {
        NoConvergence => "secant: iteration limit reached before convergence",
        DegenerateStep => "secant: encountered zero chord slope",
    }
);

/// Options to control secant root-finding.
#[derive(Clone, Copy, Debug)]
pub struct SecantOptions {
    /// Maximum number of steps to take (default 10)
    pub maxiters: usize,

    /// Convergence condition on the step size (default 1e-5)
    pub xtol: f64,
}

impl Default for SecantOptions {
    fn default() -> Self { Self { maxiters: 10, xtol: 1e-5 } }
}

/// Outcome of a secant search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Secant {
    /// The last step was smaller than the tolerance after `iters` steps.
    Converged { root: f64, iters: usize },

    /// The step limit was reached; `last` is the most recent iterate.
    NoConvergence { last: f64 },

    /// `f(x0) == f(x1)` exactly, so no chord slope could be formed.
    DegenerateStep { x0: f64, x1: f64 },
}

impl Secant {
    /// Best-effort root estimate, if one was produced.
    pub fn root(&self) -> Option<f64> {
        return match *self {
            Secant::Converged { root, .. } => Some(root),
            Secant::NoConvergence { last } => Some(last),
            Secant::DegenerateStep { .. } => None,
        };
    }

    pub fn is_converged(&self) -> bool {
        return matches!(self, Secant::Converged { .. });
    }

    /// Convert to a `Result`, treating anything but convergence as an error.
    pub fn into_result(self) -> SearchResult<f64> {
        return match self {
            Secant::Converged { root, .. } => Ok(root),
            Secant::NoConvergence { .. } => Err(SearchError::NoConvergence),
            Secant::DegenerateStep { .. } => Err(SearchError::DegenerateStep),
        };
    }
}

/// Find a root of a 1D -> 1D function using the secant method, starting
/// from two initial estimates.
pub fn find_root_secant<F>(
    f: F,
    x0: f64,
    x1: f64,
    maxiters: usize,
    xtol: f64,
) -> Secant
where F: Fn(f64) -> f64
{
    let (mut x0, mut x1): (f64, f64) = (x0, x1);
    let (mut f0, mut f1): (f64, f64);
    let mut x_new: f64;
    for k in 1..=maxiters {
        f0 = f(x0);
        f1 = f(x1);
        if f1 == f0 {
            return Secant::DegenerateStep { x0, x1 };
        }
        x_new = x1 - f1 * (x1 - x0) / (f1 - f0);
        if (x_new - x1).abs() < xtol {
            return Secant::Converged { root: x_new, iters: k };
        }
        x0 = x1;
        x1 = x_new;
    }
    return Secant::NoConvergence { last: x1 };
}

/// [`find_root_secant`] with its parameters taken from a [`SecantOptions`].
pub fn find_root_secant_opts<F>(f: F, x0: f64, x1: f64, opts: SecantOptions)
    -> Secant
where F: Fn(f64) -> f64
{
    return find_root_secant(f, x0, x1, opts.maxiters, opts.xtol);
}
