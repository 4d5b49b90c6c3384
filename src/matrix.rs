//! Matrix helpers
//!
//! Conversions between nested rows and `Array2`, shape validation shared by every transform,
//! and the transpose utility.
use ndarray::{Array2, ArrayBase, Data, Ix2};

use crate::error::{Error, Result};
use crate::Float;

/// Builds a matrix from nested rows
///
/// Every row must have the same, non-zero length and at least one row must be present.
pub fn matrix_from_rows<F: Float>(rows: Vec<Vec<F>>) -> Result<Array2<F>> {
    let nrows = rows.len();
    let ncols = rows.first().map(Vec::len).unwrap_or(0);
    if nrows == 0 || ncols == 0 {
        return Err(Error::InvalidInput(format!(
            "matrix must have at least one row and one column, got {}x{}",
            nrows, ncols
        )));
    }

    let mut flat = Vec::with_capacity(nrows * ncols);
    for (i, row) in rows.into_iter().enumerate() {
        if row.len() != ncols {
            return Err(Error::InvalidInput(format!(
                "ragged matrix: row {} has {} columns, expected {}",
                i,
                row.len(),
                ncols
            )));
        }
        flat.extend(row);
    }

    Ok(Array2::from_shape_vec((nrows, ncols), flat)?)
}

/// Converts a matrix back into nested rows
pub fn matrix_to_rows<F: Float, D: Data<Elem = F>>(data: &ArrayBase<D, Ix2>) -> Vec<Vec<F>> {
    data.outer_iter().map(|row| row.to_vec()).collect()
}

/// Swaps rows and columns, `output[[j, i]] == input[[i, j]]`
///
/// The result is an owned matrix in standard layout, so applying it twice yields a matrix
/// equal to the input.
pub fn transpose<F: Float, D: Data<Elem = F>>(data: &ArrayBase<D, Ix2>) -> Result<Array2<F>> {
    ensure_not_empty(data)?;
    Ok(data.t().as_standard_layout().into_owned())
}

pub(crate) fn ensure_not_empty<F, D: Data<Elem = F>>(data: &ArrayBase<D, Ix2>) -> Result<()> {
    let (nrows, ncols) = data.dim();
    if nrows == 0 || ncols == 0 {
        Err(Error::InvalidInput(format!(
            "matrix must have at least one row and one column, got {}x{}",
            nrows, ncols
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{matrix_from_rows, matrix_to_rows, transpose};
    use crate::Error;
    use ndarray::{array, Array2};

    #[test]
    fn from_rows_builds_rectangular_matrix() {
        let m = matrix_from_rows(vec![vec![1., 2., 3.], vec![4., 5., 6.]]).unwrap();
        assert_eq!(m, array![[1., 2., 3.], [4., 5., 6.]]);
        assert_eq!(matrix_to_rows(&m), vec![vec![1., 2., 3.], vec![4., 5., 6.]]);
    }

    #[test]
    fn from_rows_rejects_ragged_and_empty() {
        let ragged = matrix_from_rows(vec![vec![1., 2.], vec![3.]]);
        assert!(matches!(ragged, Err(Error::InvalidInput(_))));

        let empty = matrix_from_rows::<f64>(vec![]);
        assert!(matches!(empty, Err(Error::InvalidInput(_))));

        let no_columns = matrix_from_rows::<f64>(vec![vec![], vec![]]);
        assert!(matches!(no_columns, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn transpose_column_vector() {
        let input = array![[1.], [2.], [3.], [4.], [5.]];
        let output = transpose(&input).unwrap();
        assert_eq!(output, array![[1., 2., 3., 4., 5.]]);
        assert!(output.is_standard_layout());

        let back = transpose(&output).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn transpose_swaps_indices() {
        let input = array![[1., 2., 3.], [4., 5., 6.]];
        let output = transpose(&input).unwrap();
        for ((i, j), &v) in input.indexed_iter() {
            assert_eq!(output[[j, i]], v);
        }
    }

    #[test]
    fn transpose_rejects_empty() {
        let empty = Array2::<f64>::zeros((0, 3));
        assert!(transpose(&empty).is_err());
    }
}
