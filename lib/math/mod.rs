//! Numerical routines: quadrature, probability, root finding, and iterative
//! linear solves.

pub mod integrate;
pub mod probability;
pub mod search;
pub mod linalg;
