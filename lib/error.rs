//! Provides `ErrMsg`, a simple trait to associate a constant string with an
//! error type, `mkerr`, a macro to declare such error types, and `NumError`,
//! the crate-level error collecting all of them.

use thiserror::Error;

/// Simple trait to associate a constant string with an error type.
pub trait ErrMsg {
    fn msg(&self) -> &'static str;
}

/// Declare a fieldless error enum together with its `ErrMsg`, `Display`, and
/// `Error` impls, plus a `Result` alias.
///
/// ```ignore
/// mkerr!(
///     FooError, FooResult : {
///         Bad => "something bad happened",
///     }
/// );
/// ```
#[macro_export]
macro_rules! mkerr {
    (
        $name:ident, $res:ident : {
            $( $var:ident => $msg:literal ),+ $(,)?
        }
    ) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum $name {
            $( $var, )+
        }

        impl $crate::error::ErrMsg for $name {
            fn msg(&self) -> &'static str {
                return match *self {
                    $( $name::$var => $msg, )+
                };
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                return f.write_str($crate::error::ErrMsg::msg(self));
            }
        }

        impl std::error::Error for $name { }

        pub type $res<T> = Result<T, $name>;
    }
}

/// Any error raised by this crate.
#[derive(Error, Debug)]
pub enum NumError {
    #[error("integrate: {0}")]
    Integrate(#[from] crate::math::integrate::IntegrateError),

    #[error("probability: {0}")]
    Prob(#[from] crate::math::probability::ProbError),

    #[error("search: {0}")]
    Search(#[from] crate::math::search::SearchError),

    #[error("linalg: {0}")]
    Linalg(#[from] crate::math::linalg::LinalgError),

    #[cfg(feature = "config")]
    #[error("{0}")]
    Config(#[from] crate::config::ConfigError),
}

pub type NumResult<T> = Result<T, NumError>;
