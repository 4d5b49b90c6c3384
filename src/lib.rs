//! `num-normalize` scales numeric feature matrices into a bounded interval before they are
//! handed to a neural network, and maps the network's outputs back into the original units.
//!
//! Every row of a matrix (or every column, see [`Orientation`]) is treated as an independent
//! series with its own value range. Two transform pairs are provided:
//!
//! * linear min-max scaling into `[0, 1]` ([`linear_normalize`] / [`linear_denormalize`])
//! * logistic scaling into `(0, 1)` with a sharpness parameter `a`
//!   ([`non_linear_normalize`] / [`non_linear_denormalize`])
//!
//! Ranges are computed with [`get_max_min`] and passed explicitly, so the same ranges can be
//! reused to invert the transform on model predictions:
//!
//! ```
//! use ndarray::array;
//! use num_normalize::{get_max_min, linear_denormalize, linear_normalize};
//!
//! let data = array![[0., 1., 2., 3., 4.], [102., 35., 56., 43., 84.]];
//! let ranges = get_max_min(&data).unwrap();
//!
//! let normalized = linear_normalize(&data, &ranges).unwrap();
//! assert_eq!(normalized.row(0).to_vec(), vec![0., 0.25, 0.5, 0.75, 1.]);
//!
//! let restored = linear_denormalize(&normalized, &ranges).unwrap();
//! approx::assert_abs_diff_eq!(restored, data, epsilon = 1e-9);
//! ```
//!
//! For a fit-once/transform-many workflow see [`Normalizer`].

pub mod enumeration;
pub mod error;
pub mod hyperparams;
pub mod matrix;
mod normalize;
pub mod normalizer;
pub mod param_guard;
pub mod prelude;
pub mod range;
pub mod traits;
pub mod transform;

use ndarray::ScalarOperand;
use num_traits::FromPrimitive;
use std::fmt;

pub use enumeration::{enumerate, enumerate_inplace, Orientation};
pub use error::{Error, Fault, Result};
pub use hyperparams::{NormalizationMethod, NormalizerParams, NormalizerValidParams};
pub use matrix::{matrix_from_rows, matrix_to_rows, transpose};
pub use normalize::{
    linear_denormalize, linear_normalize, linear_normalize_oriented, non_linear_denormalize,
    non_linear_normalize, non_linear_normalize_oriented, DEFAULT_SHARPNESS,
};
pub use normalizer::{FittedNormalizer, Normalizer};
pub use param_guard::ParamGuard;
pub use range::{get_max_min, series_ranges, SeriesRange};
pub use transform::ElementTransform;

/// Floating point numbers
///
/// This trait bound multiplexes to the common assumptions about floating point numbers the
/// transforms rely on and is implemented for 32bit and 64bit floating points.
pub trait Float:
    num_traits::Float
    + FromPrimitive
    + Default
    + Send
    + Sync
    + fmt::Display
    + fmt::Debug
    + ScalarOperand
    + approx::AbsDiffEq<Epsilon = Self>
    + 'static
{
}

impl Float for f32 {}

impl Float for f64 {}
