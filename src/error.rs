//! Error types in num-normalize
//!

use thiserror::Error;

use ndarray::ShapeError;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("series {series} has a zero-width range, linear normalization is undefined")]
    DegenerateRange { series: usize },
    #[error("value {value} at series {series}, index {index} lies outside the open interval (0, 1)")]
    OutOfDomain {
        series: usize,
        index: usize,
        value: f64,
    },
    #[error("numeric overflow at series {series}, index {index}")]
    NumericOverflow { series: usize, index: usize },
    #[error("sharpness should be positive and finite, but is {0}")]
    InvalidSharpness(f64),
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
}

/// Failure of a single element transform
///
/// Carries no position; the enumeration strategy attaches the series and element index when
/// turning it into an [`Error`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Fault {
    #[error("zero-width range")]
    Degenerate,
    #[error("value {0} outside of (0, 1)")]
    OutOfDomain(f64),
    #[error("non-finite intermediate value")]
    Overflow,
    #[error("element is NaN")]
    NotANumber,
}

impl Fault {
    pub(crate) fn at(self, series: usize, index: usize) -> Error {
        match self {
            Fault::Degenerate => Error::DegenerateRange { series },
            Fault::OutOfDomain(value) => Error::OutOfDomain {
                series,
                index,
                value,
            },
            Fault::Overflow => Error::NumericOverflow { series, index },
            Fault::NotANumber => Error::InvalidInput(format!(
                "series {} contains NaN at index {}",
                series, index
            )),
        }
    }
}
