use crate::enumeration::Orientation;
use crate::error::Error;
use crate::normalize::check_sharpness;
use crate::param_guard::ParamGuard;
use crate::Float;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Which transform pair a [`Normalizer`](crate::Normalizer) applies
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NormalizationMethod {
    /// Min-max scaling into `[0, 1]`
    #[default]
    Linear,
    /// Logistic scaling into `(0, 1)`
    NonLinear,
}

impl std::fmt::Display for NormalizationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizationMethod::Linear => write!(f, "linear"),
            NormalizationMethod::NonLinear => write!(f, "non-linear"),
        }
    }
}

/// A verified hyper-parameter set ready for fitting a normalizer
///
/// See [`NormalizerParams`] for more information.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizerValidParams<F> {
    pub(crate) method: NormalizationMethod,
    pub(crate) sharpness: F,
    pub(crate) orientation: Orientation,
}

impl<F: Float> NormalizerValidParams<F> {
    pub fn method(&self) -> NormalizationMethod {
        self.method
    }

    pub fn sharpness(&self) -> F {
        self.sharpness
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

/// Hyperparameters of a [`Normalizer`](crate::Normalizer)
///
/// Defaults to linear normalization of rows with sharpness `1`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizerParams<F>(pub(crate) NormalizerValidParams<F>);

impl<F: Float> Default for NormalizerParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> NormalizerParams<F> {
    pub fn new() -> Self {
        Self(NormalizerValidParams {
            method: NormalizationMethod::Linear,
            sharpness: F::one(),
            orientation: Orientation::Rows,
        })
    }

    /// Set the transform pair.
    ///
    /// Defaults to `Linear` if not set
    pub fn method(mut self, method: NormalizationMethod) -> Self {
        self.0.method = method;
        self
    }

    /// Set the steepness `a` of the logistic curve. Only used by the non-linear method.
    ///
    /// Defaults to `1` if not set
    ///
    /// `a` must be positive and finite. Values below `0.5` flatten the curve enough that no
    /// extra extrapolation margin is needed for predictions outside the fitted range.
    pub fn sharpness(mut self, sharpness: F) -> Self {
        self.0.sharpness = sharpness;
        self
    }

    /// Set whether rows or columns form the series.
    ///
    /// Defaults to `Rows` if not set
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.0.orientation = orientation;
        self
    }
}

impl<F: Float> ParamGuard for NormalizerParams<F> {
    type Checked = NormalizerValidParams<F>;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        check_sharpness(self.0.sharpness)?;
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}
