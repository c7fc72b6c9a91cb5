//! Array construction for the ndarray adapter

use crate::{NdBackend, NdMatrix};
use densa_core::{ops::CreationOps, DenseArray, Result};
use ndarray::{Array1, Array2};

impl CreationOps for NdBackend {
    type Array = NdMatrix;

    fn new_array(rows: usize, cols: usize) -> NdMatrix {
        NdMatrix::zeros(rows, cols)
    }

    fn zeros_like(like: &NdMatrix) -> NdMatrix {
        let shape = like.shape();
        NdMatrix::zeros(shape.rows, shape.cols)
    }

    fn full(rows: usize, cols: usize, value: f64) -> NdMatrix {
        NdMatrix::full(rows, cols, value)
    }

    fn identity(rows: usize, cols: usize) -> NdMatrix {
        NdMatrix::from_ndarray(Array2::from_shape_fn((rows, cols), |(i, j)| {
            if i == j {
                1.0
            } else {
                0.0
            }
        }))
    }

    fn diagonal(values: &[f64]) -> NdMatrix {
        NdMatrix::from_ndarray(Array2::from_diag(&Array1::from(values.to_vec())))
    }

    fn from_nested(rows: &[Vec<f64>]) -> Result<NdMatrix> {
        NdMatrix::from_nested(rows)
    }

    fn from_flat(rows: usize, cols: usize, data: Vec<f64>) -> Result<NdMatrix> {
        NdMatrix::from_flat(rows, cols, data)
    }

    fn row_vector(values: &[f64]) -> NdMatrix {
        NdMatrix::from_ndarray(Array1::from(values.to_vec()).insert_axis(ndarray::Axis(0)))
    }

    fn column_vector(values: &[f64]) -> NdMatrix {
        NdMatrix::from_ndarray(Array1::from(values.to_vec()).insert_axis(ndarray::Axis(1)))
    }
}
