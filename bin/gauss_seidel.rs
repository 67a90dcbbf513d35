//! Print Gauss-Seidel solution estimates for linear systems.
//!
//! Usage: `gauss_seidel [cases.toml]`

use numkit::{
    NumResult,
    config::RunConfig,
    eprintln_flush,
    math::linalg,
    println_flush,
};

fn main() -> NumResult<()> {
    let path: Option<String> = std::env::args().nth(1);
    if let Some(p) = path.as_ref() {
        eprintln_flush!(":: reading cases from {}", p);
    }
    let config = RunConfig::load(path)?;
    for (k, case) in config.gauss_seidel.iter().enumerate() {
        if !linalg::is_diagonally_dominant(&case.aug) {
            eprintln_flush!(
                ":: system {}: not diagonally dominant; iteration may diverge",
                k + 1,
            );
        }
        println_flush!("{}", case.report(k + 1)?);
    }
    return Ok(());
}
