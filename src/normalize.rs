use ndarray::{Array2, ArrayBase, Data, Ix2};

use crate::enumeration::{enumerate, Orientation};
use crate::error::{Error, Result};
use crate::range::{series_ranges, SeriesRange};
use crate::transform::ElementTransform;
use crate::Float;

/// Sharpness used by the non-linear transform unless told otherwise
pub const DEFAULT_SHARPNESS: f64 = 1.0;

/// Scales every row into `[0, 1]` by its range, `(x - min) / (max - min)`
///
/// # Errors
///
/// `DegenerateRange` when a row has `max == min`, `InvalidInput` when `ranges` does not have one
/// entry per row.
pub fn linear_normalize<F: Float, D: Data<Elem = F>>(
    data: &ArrayBase<D, Ix2>,
    ranges: &[SeriesRange<F>],
) -> Result<Array2<F>> {
    enumerate(
        data,
        ranges,
        ElementTransform::LinearNormalize,
        Orientation::Rows,
    )
}

/// Inverse of [`linear_normalize`], `min + y * (max - min)`
pub fn linear_denormalize<F: Float, D: Data<Elem = F>>(
    data: &ArrayBase<D, Ix2>,
    ranges: &[SeriesRange<F>],
) -> Result<Array2<F>> {
    enumerate(
        data,
        ranges,
        ElementTransform::LinearDenormalize,
        Orientation::Rows,
    )
}

/// Maps every row into `(0, 1)` with the logistic `1 / (exp(a*c - a*x) + 1)`, where `c` is half
/// the width of the row's range
///
/// The parameter `a` sets the steepness of the curve. With `a < 0.5` the curve is flat enough
/// that no additional extrapolation margin is needed for values outside the fitted range.
pub fn non_linear_normalize<F: Float, D: Data<Elem = F>>(
    data: &ArrayBase<D, Ix2>,
    ranges: &[SeriesRange<F>],
    a: F,
) -> Result<Array2<F>> {
    check_sharpness(a)?;
    enumerate(
        data,
        ranges,
        ElementTransform::NonLinearNormalize { sharpness: a },
        Orientation::Rows,
    )
}

/// Inverse of [`non_linear_normalize`], `c - ln(1/y - 1) / a`
///
/// # Errors
///
/// `OutOfDomain` when an element is not strictly between 0 and 1.
pub fn non_linear_denormalize<F: Float, D: Data<Elem = F>>(
    data: &ArrayBase<D, Ix2>,
    ranges: &[SeriesRange<F>],
    a: F,
) -> Result<Array2<F>> {
    check_sharpness(a)?;
    enumerate(
        data,
        ranges,
        ElementTransform::NonLinearDenormalize { sharpness: a },
        Orientation::Rows,
    )
}

/// Linear normalization with ranges computed from `data` along `orientation`
pub fn linear_normalize_oriented<F: Float, D: Data<Elem = F>>(
    data: &ArrayBase<D, Ix2>,
    orientation: Orientation,
) -> Result<Array2<F>> {
    let ranges = series_ranges(data, orientation)?;
    enumerate(
        data,
        &ranges,
        ElementTransform::LinearNormalize,
        orientation,
    )
}

/// Non-linear normalization with ranges computed from `data` along `orientation`
pub fn non_linear_normalize_oriented<F: Float, D: Data<Elem = F>>(
    data: &ArrayBase<D, Ix2>,
    a: F,
    orientation: Orientation,
) -> Result<Array2<F>> {
    check_sharpness(a)?;
    let ranges = series_ranges(data, orientation)?;
    enumerate(
        data,
        &ranges,
        ElementTransform::NonLinearNormalize { sharpness: a },
        orientation,
    )
}

pub(crate) fn check_sharpness<F: Float>(a: F) -> Result<()> {
    if a.is_finite() && a > F::zero() {
        Ok(())
    } else {
        Err(Error::InvalidSharpness(a.to_f64().unwrap_or(f64::NAN)))
    }
}
