//! Print roots of the named test functions found by the secant method.
//!
//! Usage: `secant [cases.toml]`

use numkit::{
    NumResult,
    config::RunConfig,
    eprintln_flush,
    math::search::Secant,
    println_flush,
};

fn main() -> NumResult<()> {
    let path: Option<String> = std::env::args().nth(1);
    if let Some(p) = path.as_ref() {
        eprintln_flush!(":: reading cases from {}", p);
    }
    let config = RunConfig::load(path)?;
    for case in config.secant.iter() {
        let outcome: Secant = case.run();
        if let Secant::NoConvergence { .. } = outcome {
            eprintln_flush!(
                ":: {}: no convergence within {} iterations",
                case.function.name(),
                case.maxiters,
            );
        }
        println_flush!("{}", case.report_outcome(&outcome));
    }
    return Ok(());
}
