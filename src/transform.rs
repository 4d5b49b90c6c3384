//! Per-element transform formulas
//!
//! The linear pair maps a value into `[0, 1]` by its series range and back. The non-linear
//! pair pushes the value through a logistic curve centred on half the range width, with
//! sharpness `a` controlling how steep the curve is.
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::Fault;
use crate::range::SeriesRange;
use crate::Float;

/// A single element transform together with its parameters
///
/// The enumeration strategy dispatches on this value for every cell of a matrix.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ElementTransform<F> {
    LinearNormalize,
    LinearDenormalize,
    NonLinearNormalize { sharpness: F },
    NonLinearDenormalize { sharpness: F },
}

impl<F: Float> ElementTransform<F> {
    /// Transforms `x` belonging to a series with bounds `range`
    ///
    /// Never yields a NaN or infinite value. A NaN element is reported as
    /// [`Fault::NotANumber`], a non-finite intermediate or result as [`Fault::Overflow`].
    pub fn apply(&self, range: &SeriesRange<F>, x: F) -> Result<F, Fault> {
        if x.is_nan() {
            return Err(Fault::NotANumber);
        }

        let y = match *self {
            ElementTransform::LinearNormalize => linear_normalize(range, x)?,
            ElementTransform::LinearDenormalize => linear_denormalize(range, x),
            ElementTransform::NonLinearNormalize { sharpness } => {
                non_linear_normalize(range.half_width(), x, sharpness)?
            }
            ElementTransform::NonLinearDenormalize { sharpness } => {
                non_linear_denormalize(range.half_width(), x, sharpness)?
            }
        };

        if y.is_finite() {
            Ok(y)
        } else {
            Err(Fault::Overflow)
        }
    }

    /// Short name used in log events
    pub fn name(&self) -> &'static str {
        match self {
            ElementTransform::LinearNormalize => "linear normalize",
            ElementTransform::LinearDenormalize => "linear denormalize",
            ElementTransform::NonLinearNormalize { .. } => "non-linear normalize",
            ElementTransform::NonLinearDenormalize { .. } => "non-linear denormalize",
        }
    }
}

fn linear_normalize<F: Float>(range: &SeriesRange<F>, x: F) -> Result<F, Fault> {
    if range.is_degenerate() {
        return Err(Fault::Degenerate);
    }
    Ok((x - range.min) / range.width())
}

fn linear_denormalize<F: Float>(range: &SeriesRange<F>, y: F) -> F {
    range.min + y * range.width()
}

/// `1 / (exp(a*c - a*x) + 1)`, branching on the sign of the exponent so `exp` never overflows
///
/// Outputs that round to exactly 0 or 1 are pulled back to the nearest representable value
/// inside the open interval.
fn non_linear_normalize<F: Float>(c: F, x: F, a: F) -> Result<F, Fault> {
    let z = a * c - a * x;
    if !z.is_finite() {
        return Err(Fault::Overflow);
    }

    let y = if z >= F::zero() {
        let e = (-z).exp();
        e / (F::one() + e)
    } else {
        F::one() / (F::one() + z.exp())
    };

    let below_one = F::one() - F::epsilon() / (F::one() + F::one());
    Ok(y.max(F::min_positive_value()).min(below_one))
}

/// `c - ln(1/y - 1) / a`, defined on the open interval `(0, 1)`
fn non_linear_denormalize<F: Float>(c: F, y: F, a: F) -> Result<F, Fault> {
    if y <= F::zero() || y >= F::one() {
        return Err(Fault::OutOfDomain(y.to_f64().unwrap_or(f64::NAN)));
    }
    Ok(c - (F::one() / y - F::one()).ln() / a)
}
