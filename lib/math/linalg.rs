//! Provides Gauss-Seidel iteration for square linear systems given as
//! augmented matrices $`[A | b]`$.
//!
//! Each pass sweeps the unknowns in order, solving equation $`i`$ for
//! $`x_i`$ with whatever values currently sit in the working vector, so
//! updates made earlier in the same pass are used immediately. Convergence
//! is guaranteed for (strictly) diagonally dominant $`A`$, which is not
//! checked here; see [`is_diagonally_dominant`].

use ndarray::{
    self as nd,
    s,
};
use crate::mkerr;

mkerr!(
    LinalgError, LinalgResult : {
        NotAugmented => "augmented matrix must have shape n x (n + 1)",
        GuessLength => "initial guess length must match the number of equations",
    }
);

/// Default number of Gauss-Seidel passes.
pub const GS_ITERS: usize = 15;

fn check_augmented(aug: &nd::Array2<f64>) -> LinalgResult<usize> {
    let n: usize = aug.nrows();
    return if aug.ncols() == n + 1 {
        Ok(n)
    } else {
        Err(LinalgError::NotAugmented)
    };
}

/// Run exactly `n_iter` Gauss-Seidel passes from the initial guess `x0`.
///
/// Only shapes are checked. A zero on the diagonal or a divergent system
/// shows up as non-finite or runaway values in the result.
pub fn gauss_seidel(
    aug: &nd::Array2<f64>,
    x0: &nd::Array1<f64>,
    n_iter: usize,
) -> LinalgResult<nd::Array1<f64>> {
    let n: usize = check_augmented(aug)?;
    if x0.len() != n {
        return Err(LinalgError::GuessLength);
    }
    let mut x: nd::Array1<f64> = x0.clone();
    let mut acc: f64;
    for _ in 0..n_iter {
        for i in 0..n {
            acc = aug.row(i).iter().take(n).zip(x.iter()).enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, (aij, xj))| aij * xj)
                .sum();
            x[i] = (aug[[i, n]] - acc) / aug[[i, i]];
        }
    }
    return Ok(x);
}

/// Compute the residual $`b - A x`$.
pub fn residual(aug: &nd::Array2<f64>, x: &nd::Array1<f64>)
    -> LinalgResult<nd::Array1<f64>>
{
    let n: usize = check_augmented(aug)?;
    if x.len() != n {
        return Err(LinalgError::GuessLength);
    }
    let A = aug.slice(s![.., ..n]);
    let b = aug.column(n);
    return Ok(&b - &A.dot(x));
}

/// Return `true` if every row's diagonal entry exceeds, in magnitude, the
/// sum of the magnitudes of the other coefficients in that row.
pub fn is_diagonally_dominant(aug: &nd::Array2<f64>) -> bool {
    let n: usize = aug.nrows();
    if aug.ncols() != n + 1 {
        return false;
    }
    return aug.outer_iter().enumerate()
        .all(|(i, row)| {
            let off: f64
                = row.iter().take(n).enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, aij)| aij.abs())
                .sum();
            row[i].abs() > off
        });
}
