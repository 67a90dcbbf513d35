//! Print lower- or upper-tail probabilities of normal distributions.
//!
//! Usage: `gaussian_tail [cases.toml]`

use numkit::{
    NumResult,
    config::RunConfig,
    eprintln_flush,
    println_flush,
};

fn main() -> NumResult<()> {
    let path: Option<String> = std::env::args().nth(1);
    if let Some(p) = path.as_ref() {
        eprintln_flush!(":: reading cases from {}", p);
    }
    let config = RunConfig::load(path)?;
    for case in config.gaussian.iter() {
        println_flush!("{}", case.report()?);
    }
    return Ok(());
}
