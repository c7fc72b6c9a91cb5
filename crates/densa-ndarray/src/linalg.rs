//! Matrix products, delegated to faer

use crate::NdMatrix;
use densa_core::{DenseArray, DensaError, Result, ShapeConstraint};
use faer::{Mat, MatRef};
use log::trace;
use ndarray::Array2;

/// Convert to a faer matrix (faer is column-major, ndarray indexing is logical)
fn to_faer(m: &NdMatrix) -> Mat<f64> {
    let data = m.as_ndarray();
    let (rows, cols) = data.dim();
    Mat::from_fn(rows, cols, |i, j| data[[i, j]])
}

fn from_faer(mat: MatRef<'_, f64>) -> NdMatrix {
    let (rows, cols) = (mat.nrows(), mat.ncols());
    NdMatrix::from_ndarray(Array2::from_shape_fn((rows, cols), |(i, j)| mat.read(i, j)))
}

fn incompatible(constraint: ShapeConstraint, m: &NdMatrix, a: &NdMatrix) -> DensaError {
    DensaError::IncompatibleShapes {
        expected: constraint.describe().to_string(),
        got: (m.shape(), a.shape()),
    }
}

/// m · a
pub fn matmul(m: &NdMatrix, a: &NdMatrix) -> Result<NdMatrix> {
    if m.cols() != a.rows() {
        return Err(incompatible(ShapeConstraint::InnerDims, m, a));
    }
    trace!("matmul {} x {} via faer", m.shape(), a.shape());
    let (mat_m, mat_a) = (to_faer(m), to_faer(a));
    let result = mat_m * mat_a;
    Ok(from_faer(result.as_ref()))
}

/// mᵀ · a
pub fn inner(m: &NdMatrix, a: &NdMatrix) -> Result<NdMatrix> {
    if m.rows() != a.rows() {
        return Err(incompatible(ShapeConstraint::SameRows, m, a));
    }
    let (mat_m, mat_a) = (to_faer(m), to_faer(a));
    let result = mat_m.transpose() * mat_a.as_ref();
    Ok(from_faer(result.as_ref()))
}

/// Outer product of two vector-shaped matrices, any lengths
pub fn outer(m: &NdMatrix, a: &NdMatrix) -> Result<NdMatrix> {
    if !(m.is_vector_shaped() && a.is_vector_shaped()) {
        return Err(incompatible(ShapeConstraint::Vectors, m, a));
    }
    let (u, v) = (m.to_flat(), a.to_flat());
    Ok(NdMatrix::from_ndarray(Array2::from_shape_fn(
        (u.len(), v.len()),
        |(i, j)| u[i] * v[j],
    )))
}

pub fn transpose(m: &NdMatrix) -> NdMatrix {
    NdMatrix::from_ndarray(m.as_ndarray().t().as_standard_layout().into_owned())
}
