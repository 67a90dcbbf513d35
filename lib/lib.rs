#![allow(non_snake_case)]
#![allow(clippy::needless_return)]

//! A small collection of classical numerical recipes: Gaussian tail
//! probabilities by Simpson's rule, secant-method root finding, and
//! Gauss-Seidel iteration for linear systems.
//!
//! Each routine lives under [`math`]; the driver binaries in `bin/` run the
//! case tables defined in [`cases`] (or read from a TOML file through
//! [`config`]) and print the results.

pub mod error;
pub mod utils;
pub mod cases;
pub mod math;

#[cfg(feature = "config")]
pub mod config;

pub use error::{ NumError, NumResult };
