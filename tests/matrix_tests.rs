use pizza_chart_rs::core::DataMatrix;
use pizza_chart_rs::error::ChartError;

#[test]
fn zeros_matrix_has_requested_shape() {
    let matrix = DataMatrix::zeros(3, 6);
    assert_eq!(matrix.shape(), (3, 6));
    assert!(matrix.values().iter().all(|&value| value == 0.0));
}

#[test]
fn parse_text_accepts_row_comma_form() {
    let matrix = DataMatrix::parse_text("1, 2, 3\n4, 5, 6", 2, 3).expect("valid text");
    assert_eq!(matrix.get(0, 2).expect("cell"), 3.0);
    assert_eq!(matrix.get(1, 0).expect("cell"), 4.0);
}

#[test]
fn parse_text_rejects_wrong_row_count() {
    let err = DataMatrix::parse_text("1, 2, 3", 2, 3).expect_err("one row for two");
    assert!(matches!(err, ChartError::Shape(_)));
}

#[test]
fn parse_text_rejects_wrong_column_count() {
    let err = DataMatrix::parse_text("1, 2\n3, 4", 2, 3).expect_err("two columns for three");
    assert!(matches!(err, ChartError::Shape(_)));
}

#[test]
fn parse_text_rejects_non_numeric_token() {
    let err = DataMatrix::parse_text("1, x, 3\n4, 5, 6", 2, 3).expect_err("non-numeric");
    assert!(matches!(err, ChartError::Parse(_)));
}

#[test]
fn parse_text_rejects_empty_row() {
    let err = DataMatrix::parse_text("1, 2, 3\n\n4, 5, 6", 2, 3).expect_err("blank line");
    assert!(matches!(err, ChartError::Parse(_)));
}

#[test]
fn text_form_round_trips() {
    let matrix = DataMatrix::parse_text("1,2.5,3\n-4,0,6", 2, 3).expect("valid text");
    let text = matrix.to_text();
    let reparsed = DataMatrix::parse_text(&text, 2, 3).expect("round trip");
    assert_eq!(matrix, reparsed);
}

#[test]
fn clamp_limits_out_of_range_cells_and_leaves_others() {
    let matrix = DataMatrix::from_rows(&[vec![1.0, 5.0], vec![9.0, 2.0]]).expect("matrix");
    let clamped = matrix.clamped(2.0, 8.0);
    assert_eq!(clamped.get(0, 0).expect("cell"), 2.0);
    assert_eq!(clamped.get(0, 1).expect("cell"), 5.0);
    assert_eq!(clamped.get(1, 0).expect("cell"), 8.0);
    assert_eq!(clamped.get(1, 1).expect("cell"), 2.0);
}

#[test]
fn min_max_scans_all_cells() {
    let matrix = DataMatrix::from_rows(&[vec![3.0, -1.0], vec![7.5, 0.0]]).expect("matrix");
    assert_eq!(matrix.min_max(), Some((-1.0, 7.5)));
}

#[test]
fn out_of_bounds_access_is_a_shape_error() {
    let matrix = DataMatrix::zeros(2, 2);
    assert!(matches!(matrix.get(2, 0), Err(ChartError::Shape(_))));
}
