//! Enumeration strategy
//!
//! Walks a matrix series by series, applying an [`ElementTransform`] to every element with the
//! range of the series it belongs to. Series are visited in ascending order and elements within
//! a series in ascending order.
use ndarray::{Array2, ArrayBase, Axis, Data, DataMut, Ix2};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::matrix::ensure_not_empty;
use crate::range::SeriesRange;
use crate::transform::ElementTransform;
use crate::Float;

/// Whether rows or columns of a matrix form the series
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Rows,
    Columns,
}

impl Orientation {
    /// `false` selects rows, `true` selects columns
    pub fn from_column_flag(is_column: bool) -> Self {
        if is_column {
            Orientation::Columns
        } else {
            Orientation::Rows
        }
    }

    /// The axis to iterate over to get one series per step
    pub fn series_axis(&self) -> Axis {
        match self {
            Orientation::Rows => Axis(0),
            Orientation::Columns => Axis(1),
        }
    }

    /// Number of series in a matrix of shape `(nrows, ncols)`
    pub fn series_count(&self, (nrows, ncols): (usize, usize)) -> usize {
        match self {
            Orientation::Rows => nrows,
            Orientation::Columns => ncols,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Rows => write!(f, "rows"),
            Orientation::Columns => write!(f, "columns"),
        }
    }
}

/// Applies `transform` to every element of `data` and returns the result as a new matrix
///
/// `ranges[k]` is used for every element of series `k`. The input is left untouched.
///
/// # Errors
///
/// `InvalidInput` for an empty matrix or when the number of ranges does not match the number
/// of series. Any element failure aborts the whole call.
pub fn enumerate<F: Float, D: Data<Elem = F>>(
    data: &ArrayBase<D, Ix2>,
    ranges: &[SeriesRange<F>],
    transform: ElementTransform<F>,
    orientation: Orientation,
) -> Result<Array2<F>> {
    check_ranges(data, ranges, orientation)?;
    tracing::debug!(
        shape = ?data.dim(),
        %orientation,
        transform = transform.name(),
        "enumerating matrix"
    );

    let axis = orientation.series_axis();
    let mut output = Array2::zeros(data.raw_dim());
    for (series, ((lane, mut out), range)) in data
        .axis_iter(axis)
        .zip(output.axis_iter_mut(axis))
        .zip(ranges)
        .enumerate()
    {
        for (index, (&x, y)) in lane.iter().zip(out.iter_mut()).enumerate() {
            *y = transform
                .apply(range, x)
                .map_err(|fault| fault.at(series, index))?;
        }
    }

    Ok(output)
}

/// Applies `transform` to every element of `data`, overwriting it
///
/// Every element is transformed exactly once into a scratch matrix of the same shape, which is
/// copied over `data` only when no element failed. On error `data` is left unchanged.
pub fn enumerate_inplace<F: Float, D: DataMut<Elem = F>>(
    data: &mut ArrayBase<D, Ix2>,
    ranges: &[SeriesRange<F>],
    transform: ElementTransform<F>,
    orientation: Orientation,
) -> Result<()> {
    let output = enumerate(&*data, ranges, transform, orientation)?;
    data.assign(&output);

    Ok(())
}

fn check_ranges<F: Float, D: Data<Elem = F>>(
    data: &ArrayBase<D, Ix2>,
    ranges: &[SeriesRange<F>],
    orientation: Orientation,
) -> Result<()> {
    ensure_not_empty(data)?;
    let expected = orientation.series_count(data.dim());
    if ranges.len() != expected {
        return Err(Error::InvalidInput(format!(
            "expected {} ranges for {} series, got {}",
            expected,
            orientation,
            ranges.len()
        )));
    }
    Ok(())
}
