//! Errors raised while validating pipeline options.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid or inconsistent pipeline options.
#[derive(Error, Debug)]
pub enum OptionsError {
    /// The input image file does not exist.
    #[error("Input file not found: {0}")]
    MissingInput(PathBuf),

    /// A folder option does not point to a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// `select = dmax` needs a distance map to pick from.
    #[error("Select type dmax requires an input distance map file")]
    DmaxWithoutDistanceMap,

    /// An option string did not name a known value.
    #[error("Invalid value {value:?} for {field}, expected one of {expected:?}")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static [&'static str],
    },
}

impl OptionsError {
    pub(crate) fn invalid(field: &'static str, value: &str, expected: &'static [&'static str]) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_string(),
            expected,
        }
    }
}
