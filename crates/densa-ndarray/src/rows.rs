//! Elementary row operations for the ndarray adapter

use crate::{NdBackend, NdMatrix};
use densa_core::{ops::RowOps, DenseArray, DensaError, Result};

fn check_row(m: &NdMatrix, i: usize) -> Result<()> {
    let rows = m.rows();
    if i >= rows {
        return Err(DensaError::row(i, rows));
    }
    Ok(())
}

impl RowOps for NdBackend {
    type Array = NdMatrix;

    fn swap_rows(m: &NdMatrix, i: usize, j: usize) -> Result<NdMatrix> {
        check_row(m, i)?;
        check_row(m, j)?;
        let mut out = m.clone();
        if i != j {
            let data = out.as_ndarray_mut();
            for col in 0..data.ncols() {
                data.swap([i, col], [j, col]);
            }
        }
        Ok(out)
    }

    fn scale_row(m: &NdMatrix, i: usize, k: f64) -> Result<NdMatrix> {
        check_row(m, i)?;
        let mut out = m.clone();
        out.as_ndarray_mut().row_mut(i).mapv_inplace(|x| x * k);
        Ok(out)
    }

    fn add_scaled_row(m: &NdMatrix, target: usize, source: usize, k: f64) -> Result<NdMatrix> {
        check_row(m, target)?;
        check_row(m, source)?;
        let source_row = m.as_ndarray().row(source).to_owned();
        let mut out = m.clone();
        out.as_ndarray_mut()
            .row_mut(target)
            .scaled_add(k, &source_row);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NdMatrix {
        NdMatrix::from_nested(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap()
    }

    #[test]
    fn test_swap_rows() {
        let m = sample();
        let swapped = NdBackend::swap_rows(&m, 0, 2).unwrap();
        assert_eq!(
            swapped.to_nested(),
            vec![vec![5.0, 6.0], vec![3.0, 4.0], vec![1.0, 2.0]]
        );
        assert_eq!(m, sample());
        assert_eq!(NdBackend::swap_rows(&m, 1, 1).unwrap(), m);
    }

    #[test]
    fn test_scale_row() {
        let scaled = NdBackend::scale_row(&sample(), 1, -2.0).unwrap();
        assert_eq!(
            scaled.to_nested(),
            vec![vec![1.0, 2.0], vec![-6.0, -8.0], vec![5.0, 6.0]]
        );
    }

    #[test]
    fn test_add_scaled_row() {
        let m = sample();
        let result = NdBackend::add_scaled_row(&m, 2, 0, -5.0).unwrap();
        assert_eq!(
            result.to_nested(),
            vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![0.0, -4.0]]
        );
        assert_eq!(m, sample());
    }

    #[test]
    fn test_add_scaled_row_onto_itself() {
        let result = NdBackend::add_scaled_row(&sample(), 0, 0, 1.0).unwrap();
        assert_eq!(result.to_nested()[0], vec![2.0, 4.0]);
    }

    #[test]
    fn test_row_bounds() {
        let m = sample();
        assert_eq!(
            NdBackend::swap_rows(&m, 0, 3),
            Err(DensaError::IndexOutOfRange {
                index: 3,
                size: 3,
                axis: "row"
            })
        );
        assert!(NdBackend::scale_row(&m, 7, 1.0).is_err());
        assert!(NdBackend::add_scaled_row(&m, 0, 3, 1.0).is_err());
        assert!(NdBackend::add_scaled_row(&m, 3, 0, 1.0).is_err());
    }
}
