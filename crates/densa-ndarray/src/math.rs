//! Arithmetic for the ndarray adapter
//!
//! Binary operations go through the shape-checked dispatcher; the kernels
//! are ndarray's element-wise maps and faer's matrix product.

use crate::broadcast::broadcast_binary_op;
use crate::linalg;
use crate::{NdBackend, NdMatrix};
use densa_core::{
    ops::ArithmeticOps, Dispatch, Dispatched, Operand, Orientation, Result, ShapeConstraint,
    VectorPolicy,
};

fn scalar_op(m: &NdMatrix, k: f64, op: fn(f64, f64) -> f64) -> NdMatrix {
    NdMatrix::from_ndarray(m.as_ndarray().mapv(|x| op(x, k)))
}

fn array_op(m: &NdMatrix, a: &NdMatrix, op: fn(f64, f64) -> f64) -> Result<NdMatrix> {
    broadcast_binary_op(m.as_ndarray(), a.as_ndarray(), op).map(NdMatrix::from_ndarray)
}

/// Dispatcher for an element-wise operation: result has `m`'s shape
pub(crate) fn elementwise<'h>(name: &'static str, op: fn(f64, f64) -> f64) -> Dispatch<'h, NdMatrix> {
    Dispatch::new(name, ShapeConstraint::SameShape)
        .vector_policy(VectorPolicy::Broadcast)
        .interop_1d(true)
        .on_scalar(move |m, k| Ok(scalar_op(m, k, op)))
        .on_vector(move |m, v| array_op(m, v, op))
        .on_matrix(move |m, a| array_op(m, a, op))
}

fn scaled(m: &NdMatrix, k: f64) -> Result<NdMatrix> {
    Ok(NdBackend::scale(m, k))
}

impl ArithmeticOps for NdBackend {
    type Array = NdMatrix;

    fn add(m: &NdMatrix, a: impl Into<Operand<NdMatrix>>) -> Result<Dispatched<NdMatrix>> {
        elementwise("add", |x, y| x + y).apply(m, a)
    }

    fn sub(m: &NdMatrix, a: impl Into<Operand<NdMatrix>>) -> Result<Dispatched<NdMatrix>> {
        elementwise("sub", |x, y| x - y).apply(m, a)
    }

    fn element_multiply(
        m: &NdMatrix,
        a: impl Into<Operand<NdMatrix>>,
    ) -> Result<Dispatched<NdMatrix>> {
        elementwise("element-multiply", |x, y| x * y).apply(m, a)
    }

    fn element_divide(
        m: &NdMatrix,
        a: impl Into<Operand<NdMatrix>>,
    ) -> Result<Dispatched<NdMatrix>> {
        elementwise("element-divide", |x, y| x / y).apply(m, a)
    }

    fn matrix_multiply(
        m: &NdMatrix,
        a: impl Into<Operand<NdMatrix>>,
    ) -> Result<Dispatched<NdMatrix>> {
        Dispatch::new("matrix-multiply", ShapeConstraint::InnerDims)
            .vector_policy(VectorPolicy::Orient(Orientation::Column))
            .interop_1d(true)
            .on_scalar(scaled)
            .on_matrix(linalg::matmul)
            .apply(m, a)
    }

    fn inner_product(
        m: &NdMatrix,
        a: impl Into<Operand<NdMatrix>>,
    ) -> Result<Dispatched<NdMatrix>> {
        Dispatch::new("inner-product", ShapeConstraint::SameRows)
            .vector_policy(VectorPolicy::Orient(Orientation::Column))
            .interop_1d(true)
            .on_scalar(scaled)
            .on_matrix(linalg::inner)
            .apply(m, a)
    }

    fn outer_product(
        m: &NdMatrix,
        a: impl Into<Operand<NdMatrix>>,
    ) -> Result<Dispatched<NdMatrix>> {
        Dispatch::new("outer-product", ShapeConstraint::Vectors)
            .vector_policy(VectorPolicy::Orient(Orientation::Row))
            .on_scalar(scaled)
            .on_matrix(linalg::outer)
            .apply(m, a)
    }

    fn scale(m: &NdMatrix, k: f64) -> NdMatrix {
        NdMatrix::from_ndarray(m.as_ndarray() * k)
    }

    fn power(m: &NdMatrix, exponent: f64) -> NdMatrix {
        NdMatrix::from_ndarray(m.as_ndarray().mapv(|x| x.powf(exponent)))
    }

    fn negate(m: &NdMatrix) -> NdMatrix {
        NdMatrix::from_ndarray(m.as_ndarray().mapv(|x| -x))
    }
}
