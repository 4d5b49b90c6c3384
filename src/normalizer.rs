//! Fitted normalization
//!
//! A [`Normalizer`] learns the per-series ranges of a matrix once and then applies the same
//! scaling to any matrix with the same series layout. This is the usual way to prepare training
//! data for a network and to bring its predictions back into the original units afterwards.
//!
//! ```
//! use ndarray::array;
//! use num_normalize::prelude::*;
//! use num_normalize::{NormalizationMethod, Normalizer};
//!
//! let train = array![[1., 5., 3.], [-2., 0., 8.]];
//! let normalizer = Normalizer::params()
//!     .method(NormalizationMethod::NonLinear)
//!     .sharpness(0.3)
//!     .fit(&train)
//!     .unwrap();
//!
//! let scaled = normalizer.transform(&train).unwrap();
//! let restored = normalizer.inverse_transform(&scaled).unwrap();
//! approx::assert_abs_diff_eq!(restored, train, epsilon = 1e-9);
//! ```
use ndarray::{Array2, ArrayBase, Data, Ix2};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::enumeration::{enumerate, Orientation};
use crate::error::{Error, Result};
use crate::hyperparams::{NormalizationMethod, NormalizerParams, NormalizerValidParams};
use crate::range::{series_ranges, SeriesRange};
use crate::traits::{Fit, InverseTransformer, Transformer};
use crate::transform::ElementTransform;
use crate::Float;

/// Entry point for fitted normalization
pub struct Normalizer;

impl Normalizer {
    /// Create default hyperparameters: linear, row series, sharpness `1`
    pub fn params<F: Float>() -> NormalizerParams<F> {
        NormalizerParams::new()
    }
}

/// Per-series ranges learned from a matrix together with the transform to apply
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct FittedNormalizer<F> {
    ranges: Vec<SeriesRange<F>>,
    params: NormalizerValidParams<F>,
}

impl<F: Float, D: Data<Elem = F>> Fit<ArrayBase<D, Ix2>, Error> for NormalizerValidParams<F> {
    type Object = FittedNormalizer<F>;

    fn fit(&self, records: &ArrayBase<D, Ix2>) -> Result<Self::Object> {
        let ranges = series_ranges(records, self.orientation())?;
        if self.method() == NormalizationMethod::Linear {
            if let Some(series) = ranges.iter().position(SeriesRange::is_degenerate) {
                return Err(Error::DegenerateRange { series });
            }
        }

        tracing::debug!(
            shape = ?records.dim(),
            method = %self.method(),
            orientation = %self.orientation(),
            sharpness = %self.sharpness(),
            "fitted normalizer"
        );

        Ok(FittedNormalizer {
            ranges,
            params: self.clone(),
        })
    }
}

impl<F: Float> FittedNormalizer<F> {
    /// Ranges of the fitted series, in series order
    pub fn ranges(&self) -> &[SeriesRange<F>] {
        &self.ranges
    }

    pub fn method(&self) -> NormalizationMethod {
        self.params.method()
    }

    pub fn sharpness(&self) -> F {
        self.params.sharpness()
    }

    pub fn orientation(&self) -> Orientation {
        self.params.orientation()
    }

    fn forward(&self) -> ElementTransform<F> {
        match self.method() {
            NormalizationMethod::Linear => ElementTransform::LinearNormalize,
            NormalizationMethod::NonLinear => ElementTransform::NonLinearNormalize {
                sharpness: self.sharpness(),
            },
        }
    }

    fn backward(&self) -> ElementTransform<F> {
        match self.method() {
            NormalizationMethod::Linear => ElementTransform::LinearDenormalize,
            NormalizationMethod::NonLinear => ElementTransform::NonLinearDenormalize {
                sharpness: self.sharpness(),
            },
        }
    }
}

impl<'a, F: Float, D: Data<Elem = F>> Transformer<&'a ArrayBase<D, Ix2>, Result<Array2<F>>>
    for FittedNormalizer<F>
{
    /// Scales `x` with the fitted ranges
    ///
    /// `x` must have as many series as the matrix the normalizer was fitted on.
    fn transform(&self, x: &'a ArrayBase<D, Ix2>) -> Result<Array2<F>> {
        enumerate(x, &self.ranges, self.forward(), self.orientation())
    }
}

impl<'a, F: Float, D: Data<Elem = F>> InverseTransformer<&'a ArrayBase<D, Ix2>, Result<Array2<F>>>
    for FittedNormalizer<F>
{
    /// Maps normalized values back into the units of the fitted matrix
    fn inverse_transform(&self, x: &'a ArrayBase<D, Ix2>) -> Result<Array2<F>> {
        enumerate(x, &self.ranges, self.backward(), self.orientation())
    }
}
