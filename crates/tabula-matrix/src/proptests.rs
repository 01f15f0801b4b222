//! Property-based tests for matrix value semantics.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Matrix2D, MatrixError};

    // Strategy for generating small matrices with arbitrary contents
    fn small_matrix() -> impl Strategy<Value = Matrix2D> {
        (1usize..=6, 1usize..=6).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(proptest::collection::vec(-999i32..999, cols), rows)
                .prop_map(|rows| Matrix2D::from_rows(rows).unwrap())
        })
    }

    proptest! {
        #[test]
        fn non_positive_rows_rejected(rows in -50isize..=0, cols in -50isize..50) {
            let is_rows_error = matches!(
                Matrix2D::new(rows, cols),
                Err(MatrixError::InvalidDimension { axis: crate::Axis::Rows, .. })
            );
            prop_assert!(is_rows_error);
        }

        #[test]
        fn non_positive_cols_rejected(rows in 1isize..50, cols in -50isize..=0) {
            let is_cols_error = matches!(
                Matrix2D::new(rows, cols),
                Err(MatrixError::InvalidDimension { axis: crate::Axis::Columns, .. })
            );
            prop_assert!(is_cols_error);
        }

        #[test]
        fn fresh_matrix_is_zero(rows in 1isize..20, cols in 1isize..20) {
            let m = Matrix2D::new(rows, cols).unwrap();
            prop_assert_eq!(m.len(), (rows * cols) as usize);
            prop_assert!(m.as_slice().iter().all(|&v| v == 0));
        }

        #[test]
        fn at_respects_bounds(m in small_matrix(), r in -3isize..9, c in -3isize..9) {
            let in_range = r >= 0
                && c >= 0
                && (r as usize) < m.num_rows()
                && (c as usize) < m.num_cols();
            prop_assert_eq!(m.at(r, c).is_ok(), in_range);
        }

        #[test]
        fn at_mut_is_visible(mut m in small_matrix(), value in any::<i32>()) {
            let r = (m.num_rows() - 1) as isize;
            let c = (m.num_cols() - 1) as isize;
            *m.at_mut(r, c).unwrap() = value;
            prop_assert_eq!(m.at(r, c).unwrap(), value);
        }

        #[test]
        fn clone_is_independent(m in small_matrix(), value in any::<i32>()) {
            let snapshot = m.as_slice().to_vec();
            let mut copy = m.clone();
            *copy.at_mut(0, 0).unwrap() = value;
            prop_assert_eq!(m.as_slice(), snapshot.as_slice());
        }

        #[test]
        fn ne_is_negation_of_eq(a in small_matrix(), b in small_matrix()) {
            prop_assert_eq!(a != b, !(a == b));
            let same_shape = a.num_rows() == b.num_rows() && a.num_cols() == b.num_cols();
            prop_assert_eq!(a == b, same_shape && a.as_slice() == b.as_slice());
        }

        #[test]
        fn assign_makes_equal(mut a in small_matrix(), b in small_matrix()) {
            a.assign_from(&b);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn text_round_trip(m in small_matrix()) {
            let mut copy = Matrix2D::new(m.num_rows() as isize, m.num_cols() as isize).unwrap();
            copy.read_from_str(&m.to_string()).unwrap();
            prop_assert_eq!(copy, m);
        }
    }
}
