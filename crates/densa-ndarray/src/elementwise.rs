//! Element-wise maps, folds and diagonal queries for the ndarray adapter

use crate::broadcast::{broadcast_binary_op, broadcast_binary_op_inplace, broadcast_to};
use crate::{NdBackend, NdMatrix};
use densa_core::operand::coerce;
use densa_core::{ops::ElementOps, DenseArray, DensaError, Operand, Result, VectorPolicy};

/// Coerce an operand to a matrix that broadcasts over `m`
fn operand_matrix(m: &NdMatrix, a: Operand<NdMatrix>) -> Result<NdMatrix> {
    coerce(m.shape(), VectorPolicy::Broadcast, a)?.into_array()
}

impl ElementOps for NdBackend {
    type Array = NdMatrix;

    fn map(m: &NdMatrix, f: impl Fn(f64) -> f64) -> NdMatrix {
        NdMatrix::from_ndarray(m.as_ndarray().mapv(f))
    }

    fn map2(
        m: &NdMatrix,
        a: impl Into<Operand<NdMatrix>>,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<NdMatrix> {
        let a = operand_matrix(m, a.into())?;
        broadcast_binary_op(m.as_ndarray(), a.as_ndarray(), f).map(NdMatrix::from_ndarray)
    }

    fn map_n(
        m: &NdMatrix,
        operands: Vec<Operand<NdMatrix>>,
        f: impl Fn(&[f64]) -> f64,
    ) -> Result<NdMatrix> {
        let shape = m.shape();
        let arrays = operands
            .into_iter()
            .map(|a| operand_matrix(m, a))
            .collect::<Result<Vec<_>>>()?;
        let views = arrays
            .iter()
            .map(|a| broadcast_to(a.as_ndarray(), shape))
            .collect::<Result<Vec<_>>>()?;

        let mut cells = vec![0.0; views.len() + 1];
        let mut out = Vec::with_capacity(shape.size());
        for ((i, j), &x) in m.as_ndarray().indexed_iter() {
            cells[0] = x;
            for (cell, view) in cells[1..].iter_mut().zip(&views) {
                *cell = view[[i, j]];
            }
            out.push(f(cells.as_slice()));
        }
        NdMatrix::from_flat(shape.rows, shape.cols, out)
    }

    fn map_in_place(m: &mut NdMatrix, f: impl Fn(f64) -> f64) -> &mut NdMatrix {
        m.as_ndarray_mut().mapv_inplace(f);
        m
    }

    fn map2_in_place(
        m: &mut NdMatrix,
        a: impl Into<Operand<NdMatrix>>,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<&mut NdMatrix> {
        let a = operand_matrix(m, a.into())?;
        broadcast_binary_op_inplace(m.as_ndarray_mut(), a.as_ndarray(), f)?;
        Ok(m)
    }

    fn reduce(m: &NdMatrix, f: impl Fn(f64, f64) -> f64, init: Option<f64>) -> Result<f64> {
        let mut values = m.as_ndarray().iter().copied();
        let seed = match init {
            Some(seed) => seed,
            None => values.next().ok_or(DensaError::EmptyReduce)?,
        };
        Ok(values.fold(seed, f))
    }

    fn fill_in_place(m: &mut NdMatrix, value: f64) -> &mut NdMatrix {
        m.as_ndarray_mut().fill(value);
        m
    }

    fn main_diagonal(m: &NdMatrix) -> Vec<f64> {
        m.as_ndarray().diag().to_vec()
    }

    fn element_sum(m: &NdMatrix) -> f64 {
        m.as_ndarray().sum()
    }
}
