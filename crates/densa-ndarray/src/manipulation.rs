//! Slicing, reshaping and in-place updates for the ndarray adapter

use crate::linalg;
use crate::{NdBackend, NdMatrix};
use densa_core::ops::{ArithmeticOps, ManipulationOps};
use densa_core::{DenseArray, DensaError, Operand, Result};
use ndarray::s;

/// Validate a window `start..start + len` against an axis of `size`
fn check_window(start: usize, len: usize, size: usize, axis: &'static str) -> Result<()> {
    match start.checked_add(len) {
        Some(end) if end <= size => Ok(()),
        _ => Err(DensaError::IndexOutOfRange {
            index: start.saturating_add(len),
            size,
            axis,
        }),
    }
}

impl ManipulationOps for NdBackend {
    type Array = NdMatrix;

    fn transpose(m: &NdMatrix) -> NdMatrix {
        linalg::transpose(m)
    }

    fn reshape(m: &NdMatrix, rows: usize, cols: usize) -> Result<NdMatrix> {
        if rows.checked_mul(cols) != Some(m.size()) {
            return Err(DensaError::ShapeError(format!(
                "Cannot reshape array of shape {} into ({}, {})",
                m.shape(),
                rows,
                cols
            )));
        }
        NdMatrix::from_flat(rows, cols, m.to_flat())
    }

    fn row(m: &NdMatrix, i: usize) -> Result<Vec<f64>> {
        if i >= m.rows() {
            return Err(DensaError::row(i, m.rows()));
        }
        Ok(m.as_ndarray().row(i).to_vec())
    }

    fn column(m: &NdMatrix, j: usize) -> Result<Vec<f64>> {
        if j >= m.cols() {
            return Err(DensaError::col(j, m.cols()));
        }
        Ok(m.as_ndarray().column(j).to_vec())
    }

    fn submatrix(
        m: &NdMatrix,
        row_start: usize,
        rows: usize,
        col_start: usize,
        cols: usize,
    ) -> Result<NdMatrix> {
        check_window(row_start, rows, m.rows(), "row")?;
        check_window(col_start, cols, m.cols(), "column")?;
        let window = m
            .as_ndarray()
            .slice(s![row_start..row_start + rows, col_start..col_start + cols]);
        Ok(NdMatrix::from_ndarray(window.to_owned()))
    }

    fn scale_in_place(m: &mut NdMatrix, k: f64) -> &mut NdMatrix {
        *m.as_ndarray_mut() *= k;
        m
    }

    fn add_in_place(m: &mut NdMatrix, a: impl Into<Operand<NdMatrix>>) -> Result<&mut NdMatrix> {
        let shape = m.shape();
        let sum = NdBackend::add(m, a)?.into_flat();
        *m = NdMatrix::from_flat(shape.rows, shape.cols, sum)?;
        Ok(m)
    }
}
