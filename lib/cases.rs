//! Named test functions and the case tables run by the driver binaries.
//!
//! Each case type knows how to run itself through the corresponding routine
//! in [`crate::math`] and how to render its result as one line of output.

use ndarray as nd;
use crate::{
    NumResult,
    math::{
        probability::{ Gaussian, Tail, TailOptions },
        search::{ self, Secant },
        linalg::{ self, GS_ITERS, LinalgResult },
    },
    utils::repr_vec,
};

/// Scalar functions available to the secant driver by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum TestFn {
    /// $`x - 3 \cos x`$
    F1,
    /// $`\cos 2x - x`$
    F2,
    /// $`\cos 2x - x^3`$
    F3,
}

impl TestFn {
    pub fn name(&self) -> &'static str {
        return match self {
            TestFn::F1 => "f1",
            TestFn::F2 => "f2",
            TestFn::F3 => "f3",
        };
    }

    pub fn eval(&self, x: f64) -> f64 {
        return match self {
            TestFn::F1 => x - 3.0 * x.cos(),
            TestFn::F2 => (2.0 * x).cos() - x,
            TestFn::F3 => (2.0 * x).cos() - x.powi(3),
        };
    }
}

/// A single Gaussian tail probability to compute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TailCase {
    pub mu: f64,
    pub sigma: f64,
    pub c: f64,
    pub tail: Tail,
    pub intervals: usize,
}

impl TailCase {
    /// Lower-tail case with the default interval count.
    pub fn lower(mu: f64, sigma: f64, c: f64) -> Self {
        let intervals: usize = TailOptions::default().intervals;
        return Self { mu, sigma, c, tail: Tail::Lower, intervals };
    }

    pub fn run(&self) -> NumResult<f64> {
        let opts = TailOptions { intervals: self.intervals, ..Default::default() };
        let p: f64 = Gaussian::new(self.mu, self.sigma)?
            .tail(self.c, self.tail, opts)?;
        return Ok(p);
    }

    pub fn report(&self) -> NumResult<String> {
        let p: f64 = self.run()?;
        return Ok(format!(
            "P(x{}{} | N({},{}^2)) = {:.2}",
            self.tail.symbol(), self.c, self.mu, self.sigma, p,
        ));
    }
}

/// A single secant search to run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SecantCase {
    pub function: TestFn,
    pub x0: f64,
    pub x1: f64,
    pub maxiters: usize,
    pub xtol: f64,
}

impl SecantCase {
    pub fn run(&self) -> Secant {
        let f = self.function;
        return search::find_root_secant(
            |x| f.eval(x), self.x0, self.x1, self.maxiters, self.xtol);
    }

    pub fn report(&self) -> String {
        return self.report_outcome(&self.run());
    }

    /// Format an outcome already obtained from [`Self::run`].
    pub fn report_outcome(&self, outcome: &Secant) -> String {
        let name: &str = self.function.name();
        return match outcome.root() {
            Some(root) => format!(
                "The root found for function {} is: {:.10}", name, root),
            None => format!(
                "No root found for function {}: degenerate secant step", name),
        };
    }
}

/// A single linear system to iterate on.
#[derive(Clone, Debug, PartialEq)]
pub struct SystemCase {
    pub aug: nd::Array2<f64>,
    pub guess: nd::Array1<f64>,
    pub iters: usize,
}

impl SystemCase {
    /// Zero initial guess and the default number of passes.
    pub fn new(aug: nd::Array2<f64>) -> Self {
        let guess: nd::Array1<f64> = nd::Array1::zeros(aug.nrows());
        return Self { aug, guess, iters: GS_ITERS };
    }

    pub fn run(&self) -> LinalgResult<nd::Array1<f64>> {
        return linalg::gauss_seidel(&self.aug, &self.guess, self.iters);
    }

    /// `label` is the 1-based position of the system in its table.
    pub fn report(&self, label: usize) -> NumResult<String> {
        let x: nd::Array1<f64> = self.run()?;
        return Ok(format!("Solution for system {}: {}", label, repr_vec(&x)));
    }
}

pub fn default_tail_cases() -> Vec<TailCase> {
    return vec![
        TailCase::lower(100.0, 12.5, 105.0),
        TailCase::lower(100.0, 3.0, 106.0),
    ];
}

pub fn default_secant_cases() -> Vec<SecantCase> {
    return vec![
        SecantCase { function: TestFn::F1, x0: 0.1, x1: 1.2, maxiters: 5, xtol: 1e-4 },
        SecantCase { function: TestFn::F2, x0: 0.1, x1: 1.2, maxiters: 15, xtol: 1e-8 },
        SecantCase { function: TestFn::F3, x0: 0.1, x1: 1.2, maxiters: 3, xtol: 1e-8 },
    ];
}

pub fn default_system_cases() -> Vec<SystemCase> {
    return vec![
        SystemCase::new(nd::array![
            [3.0, 1.0, -1.0,  2.0],
            [1.0, 4.0,  1.0, 12.0],
            [2.0, 1.0,  2.0, 10.0],
        ]),
        SystemCase::new(nd::array![
            [ 1.0, -10.0, 2.0,  4.0,  2.0],
            [ 3.0,   1.0, 4.0, 12.0, 12.0],
            [ 9.0,   2.0, 3.0,  4.0, 21.0],
            [-1.0,   2.0, 7.0,  3.0, 37.0],
        ]),
    ];
}
