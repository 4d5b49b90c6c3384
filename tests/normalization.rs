use approx::assert_abs_diff_eq;
use ndarray::{array, Array2};

use num_normalize::{
    enumerate_inplace, get_max_min, linear_denormalize, linear_normalize,
    linear_normalize_oriented, matrix_from_rows, matrix_to_rows, non_linear_denormalize,
    non_linear_normalize, transpose, ElementTransform, Error, Orientation, SeriesRange,
    DEFAULT_SHARPNESS,
};

fn sample() -> Array2<f64> {
    array![
        [0., 1., 2., 3., 4.],
        [34., 45., 23., 43., -54.],
        [3., 0.23, 0.25, -0.92324, 0.1],
        [2., 0.23, -0.25, 0.92824, 0.1],
        [1., -0.12, 2.32, 54.24, 64.3]
    ]
}

/// Cuts every element to three decimals, towards zero
fn truncated(data: &Array2<f64>) -> Array2<f64> {
    data.mapv(|x| (x * 1000.).trunc() / 1000.)
}

#[test]
fn get_max_min_of_single_row() {
    let ranges = get_max_min(&array![[3., 0.23, 0.25, -0.92324, 0.1]]).unwrap();
    assert_eq!(ranges, vec![SeriesRange { max: 3., min: -0.92324 }]);
}

#[test]
fn transpose_is_an_involution() {
    let input = array![[1.], [2.], [3.], [4.], [5.]];
    let output = transpose(&input).unwrap();
    assert_eq!(output, array![[1., 2., 3., 4., 5.]]);
    assert_eq!(transpose(&output).unwrap(), input);

    let data = sample();
    assert_eq!(transpose(&transpose(&data).unwrap()).unwrap(), data);
}

#[test]
fn linear_normalize_sample() {
    let data = sample();
    let ranges = get_max_min(&data).unwrap();
    let output = linear_normalize(&data, &ranges).unwrap();

    assert!(output.iter().all(|&x| (0. ..=1.).contains(&x)));
    assert_eq!(output.row(0).to_vec(), vec![0., 0.25, 0.5, 0.75, 1.]);
    assert_abs_diff_eq!(output[[1, 0]], 0.888, epsilon = 5e-3);

    assert_abs_diff_eq!(
        truncated(&output),
        array![
            [0., 0.25, 0.5, 0.75, 1.],
            [0.888, 1., 0.777, 0.979, 0.],
            [1., 0.293, 0.299, 0., 0.26],
            [1., 0.213, 0., 0.523, 0.155],
            [0.017, 0., 0.037, 0.843, 1.]
        ],
        epsilon = 1e-9
    );
}

#[test]
fn non_linear_normalize_sample() {
    let data = sample();
    let ranges = get_max_min(&data).unwrap();
    let output = non_linear_normalize(&data, &ranges, 0.3).unwrap();

    assert!(output.iter().all(|&x| x > 0. && x < 1.));
    assert_abs_diff_eq!(
        truncated(&output),
        array![
            [0.354, 0.425, 0.5, 0.574, 0.645],
            [0.009, 0.205, 0., 0.124, 0.],
            [0.577, 0.372, 0.374, 0.296, 0.363],
            [0.565, 0.433, 0.398, 0.485, 0.423],
            [0., 0., 0., 0.998, 0.999]
        ],
        epsilon = 1e-9
    );
}

#[test]
fn linear_round_trip_sample() {
    let data = sample();
    let ranges = get_max_min(&data).unwrap();
    let normalized = linear_normalize(&data, &ranges).unwrap();
    let restored = linear_denormalize(&normalized, &ranges).unwrap();
    assert_abs_diff_eq!(restored, data, epsilon = 5e-3);
}

#[test]
fn linear_round_trip_vector() {
    let y = array![[102., 35., 56., 43., 84.]];
    let ranges = get_max_min(&y).unwrap();
    let normalized = linear_normalize(&y, &ranges).unwrap();
    let restored = linear_denormalize(&normalized, &ranges).unwrap();
    assert_abs_diff_eq!(restored, y, epsilon = 5e-3);
}

#[test]
fn non_linear_round_trip_default_sharpness() {
    let data = sample();
    let ranges = get_max_min(&data).unwrap();
    let normalized = non_linear_normalize(&data, &ranges, DEFAULT_SHARPNESS).unwrap();
    let restored = non_linear_denormalize(&normalized, &ranges, DEFAULT_SHARPNESS).unwrap();
    assert_abs_diff_eq!(restored, data, epsilon = 5e-3);
}

#[test]
fn constant_row_is_degenerate() {
    let data = array![[1., 2., 3.], [4., 4., 4.]];
    let ranges = get_max_min(&data).unwrap();
    assert_eq!(
        linear_normalize(&data, &ranges),
        Err(Error::DegenerateRange { series: 1 })
    );
}

#[test]
fn tiny_but_distinct_ranges_are_scaled() {
    let data = array![[1e-20, 2e-20, 3e-20]];
    let normalized = linear_normalize(&data, &get_max_min(&data).unwrap()).unwrap();
    assert_abs_diff_eq!(normalized, array![[0., 0.5, 1.]], epsilon = 1e-12);

    let data = array![[1e-8f32, 5e-8, 9e-8]];
    let normalized = linear_normalize(&data, &get_max_min(&data).unwrap()).unwrap();
    assert_abs_diff_eq!(normalized, array![[0., 0.5, 1.]], epsilon = 1e-5);
}

#[test]
fn non_linear_exponent_overflow() {
    let data = array![[0., -1e300]];
    let res = non_linear_normalize(&data, &[SeriesRange::new(1., 0.)], 1e10);
    assert_eq!(res, Err(Error::NumericOverflow { series: 0, index: 1 }));
}

#[test]
fn nan_element_is_invalid_input() {
    let ranges = vec![SeriesRange::new(1., 0.)];
    let res = linear_normalize(&array![[0.5, f64::NAN]], &ranges);
    assert!(matches!(res, Err(Error::InvalidInput(_))));
}

#[test]
fn denormalize_outside_open_interval() {
    let ranges = vec![SeriesRange::new(1., 0.)];
    let res = non_linear_denormalize(&array![[0.5, 0.]], &ranges, 1.);
    assert_eq!(
        res,
        Err(Error::OutOfDomain {
            series: 0,
            index: 1,
            value: 0.
        })
    );
}

#[test]
fn mismatched_range_count() {
    let data = sample();
    let ranges = get_max_min(&data.slice(ndarray::s![..3, ..])).unwrap();
    assert!(matches!(
        linear_normalize(&data, &ranges),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn column_orientation_from_flag() {
    let data = array![[5., 100.], [7., 300.], [6., 200.]];
    let by_column = linear_normalize_oriented(&data, Orientation::from_column_flag(true)).unwrap();
    assert_abs_diff_eq!(by_column, array![[0., 0.], [1., 1.], [0.5, 0.5]]);

    let by_row = linear_normalize_oriented(&data, Orientation::from_column_flag(false)).unwrap();
    assert_abs_diff_eq!(by_row, array![[0., 1.], [0., 1.], [0., 1.]]);
}

#[test]
fn nested_rows_interop() {
    let rows = vec![vec![0., 5., 10.], vec![-1., 1., 0.]];
    let data = matrix_from_rows(rows).unwrap();
    let mut normalized = data.clone();
    let ranges = get_max_min(&data).unwrap();
    enumerate_inplace(
        &mut normalized,
        &ranges,
        ElementTransform::LinearNormalize,
        Orientation::Rows,
    )
    .unwrap();
    assert_eq!(
        matrix_to_rows(&normalized),
        vec![vec![0., 0.5, 1.], vec![0., 1., 0.5]]
    );
}
