// SPDX-License-Identifier: MPL-2.0
//! Crate error type.
//!
//! Rendering never fails; these errors come from the surfaces around the
//! component (configuration files, strict length validation, CLI input).

use crate::domain::LengthError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// A CSS length expression that cannot be placed inside a declaration.
    #[error("Invalid length for `{field}`: {value:?}")]
    InvalidLength { field: &'static str, value: String },

    /// No image source was given by either the config file or the flags.
    #[error("No image source given (use --src or set `src` in the config file)")]
    MissingSource,

    #[error("Usage Error: {0}")]
    Usage(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<LengthError> for Error {
    fn from(err: LengthError) -> Self {
        Error::InvalidLength {
            field: err.field,
            value: err.value,
        }
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Usage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
