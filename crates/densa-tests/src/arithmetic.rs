//! Arithmetic tests: element-wise operations and products

#[cfg(test)]
mod tests {
    use crate::utils::*;
    use densa_core::{
        ops::{ArithmeticOps, CreationOps},
        DenseArray, DensaError, Dispatched, Operand, Shape,
    };
    use densa_ndarray::{NdBackend, NdMatrix};

    fn mat(rows: usize, cols: usize) -> NdMatrix {
        NdBackend::from_nested(&counting(rows, cols)).unwrap()
    }

    fn array(result: densa_core::Result<Dispatched<NdMatrix>>) -> NdMatrix {
        result.unwrap().into_array().unwrap()
    }

    // ============ add / sub ============

    #[test]
    fn test_add_zeros_is_identity() {
        let a = mat(3, 4);
        let zeros = NdBackend::zeros_like(&a);
        assert!(array(NdBackend::add(&a, &zeros)).equals(&a));
    }

    #[test]
    fn test_add_nested_operand() {
        let a = mat(2, 2);
        let result = array(NdBackend::add(&a, vec![vec![1.0, 1.0], vec![1.0, 1.0]]));
        assert_eq!(result.to_flat(), vec![2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_sub_self_is_zero() {
        let a = mat(2, 3);
        let result = array(NdBackend::sub(&a, &a));
        assert!(result.to_flat().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_sub_row_vector() {
        let a = mat(2, 3);
        let result = array(NdBackend::sub(&a, vec![1.0, 2.0, 3.0]));
        assert_eq!(result.to_nested(), vec![vec![0.0, 0.0, 0.0], vec![3.0, 3.0, 3.0]]);
    }

    #[test]
    fn test_add_vector_wrong_length() {
        let a = mat(2, 3);
        let err = NdBackend::add(&a, vec![1.0, 2.0, 3.0, 4.0]).unwrap_err();
        assert!(matches!(err, DensaError::IncompatibleShapes { .. }));
    }

    #[test]
    fn test_add_unsupported_rank() {
        let a = mat(2, 2);
        let cube = Operand::Shaped {
            shape: vec![2, 2, 2],
            data: vec![0.0; 8],
        };
        assert_eq!(
            NdBackend::add(&a, cube),
            Err(DensaError::UnsupportedShape { ndim: 3 })
        );
    }

    // ============ element multiply / divide ============

    #[test]
    fn test_element_multiply() {
        let a = mat(2, 2);
        let result = array(NdBackend::element_multiply(&a, &a));
        assert_eq!(result.to_flat(), vec![1.0, 4.0, 9.0, 16.0]);
    }

    #[test]
    fn test_element_divide_scalar() {
        let a = mat(2, 2);
        let result = array(NdBackend::element_divide(&a, 2.0));
        assert_eq!(result.to_flat(), vec![0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_element_divide_by_zero() {
        let a = mat(1, 2);
        let result = array(NdBackend::element_divide(&a, 0.0));
        assert!(result.to_flat().iter().all(|x| x.is_infinite()));
    }

    // ============ matrix multiply ============

    #[test]
    fn test_matrix_multiply_shape() {
        let a = mat(2, 3);
        let b = mat(3, 4);
        let c = array(NdBackend::matrix_multiply(&a, &b));
        assert_eq!(c.shape(), Shape::new(2, 4));
        // First row: [1,2,3] · columns of b
        assert_eq!(c.to_nested()[0], vec![38.0, 44.0, 50.0, 56.0]);
    }

    #[test]
    fn test_matrix_multiply_mismatch() {
        let a = mat(2, 3);
        let b = mat(2, 4);
        let err = NdBackend::matrix_multiply(&a, &b).unwrap_err();
        assert_eq!(
            err,
            DensaError::IncompatibleShapes {
                expected: "cols(m) == rows(a)".to_string(),
                got: (Shape::new(2, 3), Shape::new(2, 4)),
            }
        );
    }

    #[test]
    fn test_matrix_multiply_identity() {
        let a = mat(3, 3);
        let i = NdBackend::identity(3, 3);
        assert!(array(NdBackend::matrix_multiply(&a, &i)).equals(&a));
        assert!(array(NdBackend::matrix_multiply(&i, &a)).equals(&a));
    }

    #[test]
    fn test_matrix_vector_product_is_1d() {
        let a = mat(2, 3);
        let result = NdBackend::matrix_multiply(&a, vec![1.0, 0.0, -1.0]).unwrap();
        assert!(result.is_lowered());
        assert_eq!(result.into_flat(), vec![-2.0, -2.0]);
    }

    #[test]
    fn test_matrix_multiply_non_square_float() {
        let a = NdBackend::from_flat(1, 2, vec![0.1, 0.2]).unwrap();
        let b = NdBackend::from_flat(2, 1, vec![0.3, 0.4]).unwrap();
        let c = NdBackend::matrix_multiply(&a, &b).unwrap().into_flat();
        assert!(approx_eq(c[0], 0.11, RELAXED_TOL));
    }

    // ============ inner / outer ============

    #[test]
    fn test_inner_product_shape() {
        // rows(m) == rows(a); result (cols(m), cols(a))
        let m = mat(3, 2);
        let a = mat(3, 4);
        let result = array(NdBackend::inner_product(&m, &a));
        assert_eq!(result.shape(), Shape::new(2, 4));
    }

    #[test]
    fn test_inner_product_mismatch() {
        let err = NdBackend::inner_product(&mat(3, 2), &mat(2, 2)).unwrap_err();
        assert!(matches!(err, DensaError::IncompatibleShapes { .. }));
    }

    #[test]
    fn test_outer_product() {
        let u = NdBackend::column_vector(&[1.0, 2.0, 3.0]);
        let v = NdBackend::row_vector(&[1.0, 10.0]);
        let result = array(NdBackend::outer_product(&u, &v));
        assert_eq!(
            result.to_nested(),
            vec![vec![1.0, 10.0], vec![2.0, 20.0], vec![3.0, 30.0]]
        );
    }

    #[test]
    fn test_outer_product_requires_vectors() {
        let err = NdBackend::outer_product(&mat(2, 2), vec![1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            DensaError::IncompatibleShapes {
                expected: "both operands vector-shaped".to_string(),
                got: (Shape::new(2, 2), Shape::new(1, 2)),
            }
        );
    }

    // ============ scale / power ============

    #[test]
    fn test_scale_composes() {
        let a = mat(2, 3);
        let twice = NdBackend::scale(&NdBackend::scale(&a, 1.5), -4.0);
        let once = NdBackend::scale(&a, -6.0);
        assert!(arrays_approx_eq(&twice, &once, DEFAULT_TOL));
    }

    #[test]
    fn test_power() {
        let a = mat(1, 3);
        assert_eq!(NdBackend::power(&a, 3.0).to_flat(), vec![1.0, 8.0, 27.0]);
        let roots = NdBackend::power(&NdBackend::from_flat(1, 2, vec![4.0, 9.0]).unwrap(), 0.5);
        assert_eq!(roots.to_flat(), vec![2.0, 3.0]);
    }

    #[test]
    fn test_negate_then_add_is_zero() {
        let a = mat(2, 2);
        let result = array(NdBackend::add(&a, &NdBackend::negate(&a)));
        assert!(result.equals(&NdBackend::zeros_like(&a)));
    }
}
