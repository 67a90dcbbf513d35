//! Provides loading of driver case tables from TOML files.
//!
//! A file may hold any of three arrays of tables, one per driver:
//! ```toml
//! [[gaussian]]
//! mu = 100.0
//! sigma = 12.5
//! c = 105.0
//! tail = "lower"    # optional, "lower" or "upper"
//! intervals = 1000  # optional
//!
//! [[secant]]
//! function = "f1"
//! x0 = 0.1
//! x1 = 1.2
//! maxiters = 5      # optional, default 10
//! xtol = 1e-4       # optional, default 1e-5
//!
//! [[gauss_seidel]]
//! aug = [[3.0, 1.0, -1.0, 2.0], [1.0, 4.0, 1.0, 12.0], [2.0, 1.0, 2.0, 10.0]]
//! guess = [0.0, 0.0, 0.0]  # optional, default zeros
//! iters = 15               # optional
//! ```
//! A missing array means the matching driver has nothing to run.

use std::{
    fs,
    path::Path,
};
use ndarray as nd;
use serde::Deserialize;
use thiserror::Error;
use crate::{
    cases::{
        self,
        SecantCase,
        SystemCase,
        TailCase,
        TestFn,
    },
    math::{
        linalg::GS_ITERS,
        probability::{ Tail, TailOptions },
        search::SecantOptions,
    },
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config: couldn't read file '{0}': {1}")]
    FileRead(String, String),

    #[error("config: TOML error '{0}'")]
    TomlError(#[from] toml::de::Error),

    #[error("config: gauss_seidel case {0}: rows of 'aug' differ in length")]
    RaggedMatrix(usize),

    #[error("config: gauss_seidel case {0}: 'guess' has length {1}, expected {2}")]
    GuessLength(usize, usize, usize),
}
pub type ConfigResult<T> = Result<T, ConfigError>;

fn default_intervals() -> usize { TailOptions::default().intervals }

fn default_maxiters() -> usize { SecantOptions::default().maxiters }

fn default_xtol() -> f64 { SecantOptions::default().xtol }

fn default_iters() -> usize { GS_ITERS }

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct TailTable {
    mu: f64,
    sigma: f64,
    c: f64,
    #[serde(default)]
    tail: Tail,
    #[serde(default = "default_intervals")]
    intervals: usize,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct SecantTable {
    function: TestFn,
    x0: f64,
    x1: f64,
    #[serde(default = "default_maxiters")]
    maxiters: usize,
    #[serde(default = "default_xtol")]
    xtol: f64,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct SystemTable {
    aug: Vec<Vec<f64>>,
    guess: Option<Vec<f64>>,
    #[serde(default = "default_iters")]
    iters: usize,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    gaussian: Vec<TailTable>,
    #[serde(default)]
    secant: Vec<SecantTable>,
    #[serde(default)]
    gauss_seidel: Vec<SystemTable>,
}

/// Case tables for all three drivers.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub gaussian: Vec<TailCase>,
    pub secant: Vec<SecantCase>,
    pub gauss_seidel: Vec<SystemCase>,
}

impl Default for RunConfig {
    fn default() -> Self {
        return Self {
            gaussian: cases::default_tail_cases(),
            secant: cases::default_secant_cases(),
            gauss_seidel: cases::default_system_cases(),
        };
    }
}

fn convert_system(k: usize, table: SystemTable) -> ConfigResult<SystemCase> {
    let nrows: usize = table.aug.len();
    let ncols: usize = table.aug.first().map(|row| row.len()).unwrap_or(0);
    if table.aug.iter().any(|row| row.len() != ncols) {
        return Err(ConfigError::RaggedMatrix(k));
    }
    let aug: nd::Array2<f64>
        = nd::Array2::from_shape_vec(
            (nrows, ncols),
            table.aug.into_iter().flatten().collect(),
        )
        .map_err(|_| ConfigError::RaggedMatrix(k))?;
    let guess: nd::Array1<f64>
        = match table.guess {
            Some(g) if g.len() != nrows => {
                return Err(ConfigError::GuessLength(k, g.len(), nrows));
            },
            Some(g) => nd::Array1::from_vec(g),
            None => nd::Array1::zeros(nrows),
        };
    return Ok(SystemCase { aug, guess, iters: table.iters });
}

impl RunConfig {
    fn from_raw(raw: RawConfig) -> ConfigResult<Self> {
        let gaussian: Vec<TailCase>
            = raw.gaussian.into_iter()
            .map(|t| TailCase {
                mu: t.mu,
                sigma: t.sigma,
                c: t.c,
                tail: t.tail,
                intervals: t.intervals,
            })
            .collect();
        let secant: Vec<SecantCase>
            = raw.secant.into_iter()
            .map(|t| SecantCase {
                function: t.function,
                x0: t.x0,
                x1: t.x1,
                maxiters: t.maxiters,
                xtol: t.xtol,
            })
            .collect();
        let gauss_seidel: Vec<SystemCase>
            = raw.gauss_seidel.into_iter().enumerate()
            .map(|(k, t)| convert_system(k + 1, t))
            .collect::<ConfigResult<Vec<SystemCase>>>()?;
        return Ok(Self { gaussian, secant, gauss_seidel });
    }

    /// Parse case tables from a TOML string.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let raw: RawConfig = toml::from_str(s)?;
        return Self::from_raw(raw);
    }

    /// Read case tables from a TOML file.
    pub fn from_file<P>(path: P) -> ConfigResult<Self>
    where P: AsRef<Path>
    {
        let path_str: String = path.as_ref().display().to_string();
        let contents: String
            = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileRead(path_str, e.to_string()))?;
        return Self::from_toml_str(&contents);
    }

    /// Read from `path` if one is given, otherwise use the built-in cases.
    pub fn load<P>(path: Option<P>) -> ConfigResult<Self>
    where P: AsRef<Path>
    {
        return match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_hold_builtin_cases() {
        let config = RunConfig::load(None::<&str>).unwrap();
        assert_eq!(config.gaussian.len(), 2);
        assert_eq!(config.secant.len(), 3);
        assert_eq!(config.gauss_seidel.len(), 2);
        assert_eq!(config.gauss_seidel[1].aug.dim(), (4, 5));
    }

    #[test]
    fn parses_all_tables_with_defaults() {
        let s = r#"
            [[gaussian]]
            mu = 0.0
            sigma = 1.0
            c = 1.5
            tail = "upper"

            [[secant]]
            function = "f2"
            x0 = 0.1
            x1 = 1.2

            [[gauss_seidel]]
            aug = [[4.0, 1.0, 5.0], [1.0, 3.0, 4.0]]
            iters = 30
        "#;
        let config = RunConfig::from_toml_str(s).unwrap();
        assert_eq!(
            config.gaussian,
            vec![TailCase { mu: 0.0, sigma: 1.0, c: 1.5, tail: Tail::Upper, intervals: 1000 }],
        );
        assert_eq!(config.secant[0].function, TestFn::F2);
        assert_eq!(config.secant[0].maxiters, 10);
        assert_eq!(config.secant[0].xtol, 1e-5);
        let sys = &config.gauss_seidel[0];
        assert_eq!(sys.aug, nd::array![[4.0, 1.0, 5.0], [1.0, 3.0, 4.0]]);
        assert_eq!(sys.guess, nd::array![0.0, 0.0]);
        assert_eq!(sys.iters, 30);
    }

    #[test]
    fn missing_tables_are_empty() {
        let config = RunConfig::from_toml_str(
            "[[secant]]\nfunction = \"f3\"\nx0 = 0.0\nx1 = 1.0\n").unwrap();
        assert!(config.gaussian.is_empty());
        assert!(config.gauss_seidel.is_empty());
        assert_eq!(config.secant.len(), 1);
    }

    #[test]
    fn rejects_bad_input() {
        let ragged = "[[gauss_seidel]]\naug = [[1.0, 2.0], [3.0]]\n";
        assert!(matches!(
            RunConfig::from_toml_str(ragged),
            Err(ConfigError::RaggedMatrix(1)),
        ));

        let short = "[[gauss_seidel]]\naug = [[2.0, 1.0, 1.0], [1.0, 2.0, 1.0]]\nguess = [0.0]\n";
        assert!(matches!(
            RunConfig::from_toml_str(short),
            Err(ConfigError::GuessLength(1, 1, 2)),
        ));

        let unknown_fn = "[[secant]]\nfunction = \"f9\"\nx0 = 0.0\nx1 = 1.0\n";
        assert!(matches!(
            RunConfig::from_toml_str(unknown_fn),
            Err(ConfigError::TomlError(_)),
        ));
    }

    #[test]
    fn file_and_string_parse_errors_agree() {
        let bad = "[[secant]]\nfunction = \"f1\"\nx0 = \n";
        let path = std::env::temp_dir()
            .join(format!("numkit-bad-cases-{}.toml", std::process::id()));
        fs::write(&path, bad).unwrap();
        let from_file = RunConfig::from_file(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(from_file, Err(ConfigError::TomlError(_))));
        assert!(matches!(
            RunConfig::from_toml_str(bad),
            Err(ConfigError::TomlError(_)),
        ));
    }

    #[test]
    fn file_round_trip_matches_string() {
        let good = "[[gaussian]]\nmu = 100.0\nsigma = 3.0\nc = 106.0\n";
        let path = std::env::temp_dir()
            .join(format!("numkit-good-cases-{}.toml", std::process::id()));
        fs::write(&path, good).unwrap();
        let from_file = RunConfig::from_file(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(from_file.unwrap(), RunConfig::from_toml_str(good).unwrap());
    }

    #[test]
    fn missing_file_is_read_error() {
        let res = RunConfig::from_file("/nonexistent/numkit/cases.toml");
        assert!(matches!(res, Err(ConfigError::FileRead(..))));
    }
}
