//! Per-series value ranges
use ndarray::{ArrayBase, Data, Ix2};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::enumeration::Orientation;
use crate::error::{Error, Result};
use crate::matrix::ensure_not_empty;
use crate::Float;

/// Bounds of a single series (one row or one column of a matrix)
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesRange<F> {
    pub max: F,
    pub min: F,
}

impl<F: Float> SeriesRange<F> {
    pub fn new(max: F, min: F) -> Self {
        Self { max, min }
    }

    /// Distance between the bounds
    pub fn width(&self) -> F {
        self.max - self.min
    }

    /// Half of the width, used as the logistic centre of the non-linear transform
    pub fn half_width(&self) -> F {
        self.width() / (F::one() + F::one())
    }

    /// Whether the bounds coincide so that min-max scaling would divide by zero
    ///
    /// Only exactly equal bounds count; a tiny but non-zero width still scales.
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }
}

/// Computes `(max, min)` of every row, in row order
///
/// The first element of a row seeds both bounds, so rows lying entirely above or below zero
/// get their true range.
///
/// # Errors
///
/// `InvalidInput` when the matrix has no rows or columns, or contains a NaN.
pub fn get_max_min<F: Float, D: Data<Elem = F>>(
    data: &ArrayBase<D, Ix2>,
) -> Result<Vec<SeriesRange<F>>> {
    series_ranges(data, Orientation::Rows)
}

/// Computes the range of every series along the given orientation
pub fn series_ranges<F: Float, D: Data<Elem = F>>(
    data: &ArrayBase<D, Ix2>,
    orientation: Orientation,
) -> Result<Vec<SeriesRange<F>>> {
    ensure_not_empty(data)?;

    data.axis_iter(orientation.series_axis())
        .enumerate()
        .map(|(series, lane)| {
            let mut values = lane.iter().copied();
            let first = match values.next() {
                Some(x) => x,
                None => return Err(Error::InvalidInput(format!("series {} is empty", series))),
            };
            let mut range = SeriesRange::new(first, first);
            for x in std::iter::once(first).chain(values) {
                if x.is_nan() {
                    return Err(Error::InvalidInput(format!(
                        "series {} contains NaN",
                        series
                    )));
                }
                if x > range.max {
                    range.max = x;
                }
                if x < range.min {
                    range.min = x;
                }
            }
            tracing::trace!(series, max = %range.max, min = %range.min, "series range");
            Ok(range)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{get_max_min, series_ranges, SeriesRange};
    use crate::{Error, Orientation};
    use ndarray::{array, Array2};

    #[test]
    fn test_get_max_min_single_row() {
        let ranges = get_max_min(&array![[3., 0.23, 0.25, -0.92324, 0.1]]).unwrap();
        assert_eq!(ranges, vec![SeriesRange::new(3., -0.92324)]);
    }

    #[test]
    fn test_ranges_not_seeded_at_zero() {
        // all positive and all negative rows keep their true bounds
        let ranges = get_max_min(&array![[5., 7., 6.], [-3., -1., -2.]]).unwrap();
        assert_eq!(
            ranges,
            vec![SeriesRange::new(7., 5.), SeriesRange::new(-1., -3.)]
        );
    }

    #[test]
    fn test_column_ranges() {
        let data = array![[1., 10.], [3., -10.], [2., 0.]];
        let ranges = series_ranges(&data, Orientation::Columns).unwrap();
        assert_eq!(
            ranges,
            vec![SeriesRange::new(3., 1.), SeriesRange::new(10., -10.)]
        );
    }

    #[test]
    fn test_invalid_inputs() {
        let empty = Array2::<f64>::zeros((0, 0));
        assert!(matches!(get_max_min(&empty), Err(Error::InvalidInput(_))));

        let nan = array![[1., f64::NAN]];
        assert!(matches!(get_max_min(&nan), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_degenerate_detection() {
        assert!(SeriesRange::new(2., 2.).is_degenerate());
        assert!(!SeriesRange::new(2., 1.).is_degenerate());
        assert!(!SeriesRange::new(3e-20, 1e-20).is_degenerate());
        assert!(!SeriesRange::new(9e-8f32, 1e-8).is_degenerate());
        assert_eq!(SeriesRange::new(4., 0.).half_width(), 2.);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let range = SeriesRange::new(7.5f32, -3.25);
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"max":7.5,"min":-3.25}"#);
        let restored: SeriesRange<f32> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, range);
    }
}
