//! Shape-checked binary dispatch
//!
//! A [`Dispatch`] describes one binary operation: a handler per operand
//! class, the shape constraint the matrix path enforces, how vector
//! operands are oriented, and whether vector results are lowered back to
//! 1D for vector operands.
//!
//! Scalars without a scalar handler are lifted to 1x1 matrices and vectors
//! without a vector handler are treated as matrices. The matrix handler is
//! mandatory.

use crate::array::DenseArray;
use crate::error::{DensaError, Result};
use crate::operand::{coerce, Coerced, Operand, OperandKind, Orientation, VectorPolicy};
use crate::shape::ShapeConstraint;
use log::{debug, trace};

type ScalarHandler<'h, A> = Box<dyn Fn(&A, f64) -> Result<A> + 'h>;
type ArrayHandler<'h, A> = Box<dyn Fn(&A, &A) -> Result<A> + 'h>;

/// Result of a dispatched operation
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatched<A> {
    Array(A),
    /// A vector-shaped result lowered to 1D, with the orientation it had
    /// before lowering. A 1x1 result counts as a column.
    Vector(Vec<f64>, Orientation),
}

impl<A: DenseArray> Dispatched<A> {
    /// The result as an array.
    ///
    /// A lowered vector is lifted back in its original orientation, so a
    /// `(1, n)` result comes back as `(1, n)` and an `(n, 1)` result as
    /// `(n, 1)`.
    pub fn into_array(self) -> Result<A> {
        match self {
            Dispatched::Array(a) => Ok(a),
            Dispatched::Vector(v, Orientation::Row) => A::from_flat(1, v.len(), v),
            Dispatched::Vector(v, Orientation::Column) => A::from_flat(v.len(), 1, v),
        }
    }

    /// Row-major elements of the result
    pub fn into_flat(self) -> Vec<f64> {
        match self {
            Dispatched::Array(a) => a.to_flat(),
            Dispatched::Vector(v, _) => v,
        }
    }

    pub fn as_array(&self) -> Option<&A> {
        match self {
            Dispatched::Array(a) => Some(a),
            Dispatched::Vector(..) => None,
        }
    }

    pub fn is_lowered(&self) -> bool {
        matches!(self, Dispatched::Vector(..))
    }
}

/// Builder and executor for one binary operation
pub struct Dispatch<'h, A> {
    name: &'static str,
    constraint: ShapeConstraint,
    policy: VectorPolicy,
    interop_1d: bool,
    on_scalar: Option<ScalarHandler<'h, A>>,
    on_vector: Option<ArrayHandler<'h, A>>,
    on_matrix: Option<ArrayHandler<'h, A>>,
}

impl<'h, A: DenseArray> Dispatch<'h, A> {
    pub fn new(name: &'static str, constraint: ShapeConstraint) -> Self {
        Self {
            name,
            constraint,
            policy: VectorPolicy::default(),
            interop_1d: false,
            on_scalar: None,
            on_vector: None,
            on_matrix: None,
        }
    }

    pub fn vector_policy(mut self, policy: VectorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Lower vector-shaped results to 1D when the operand was a vector
    pub fn interop_1d(mut self, enabled: bool) -> Self {
        self.interop_1d = enabled;
        self
    }

    pub fn on_scalar(mut self, handler: impl Fn(&A, f64) -> Result<A> + 'h) -> Self {
        self.on_scalar = Some(Box::new(handler));
        self
    }

    pub fn on_vector(mut self, handler: impl Fn(&A, &A) -> Result<A> + 'h) -> Self {
        self.on_vector = Some(Box::new(handler));
        self
    }

    pub fn on_matrix(mut self, handler: impl Fn(&A, &A) -> Result<A> + 'h) -> Self {
        self.on_matrix = Some(Box::new(handler));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn constraint(&self) -> ShapeConstraint {
        self.constraint
    }

    /// Apply the operation to `m` and `operand`.
    pub fn apply(&self, m: &A, operand: impl Into<Operand<A>>) -> Result<Dispatched<A>> {
        let on_matrix = self.on_matrix.as_ref().ok_or_else(|| {
            DensaError::ConfigurationError(format!("{}: no matrix handler supplied", self.name))
        })?;

        let operand = operand.into();
        let kind = operand.classify()?;
        trace!("{}: operand classified as {:?}", self.name, kind);

        let coerced = coerce(m.shape(), self.policy, operand)?;
        let result = match (coerced, &self.on_scalar, &self.on_vector) {
            (Coerced::Scalar(k), Some(handler), _) => handler(m, k)?,
            (Coerced::Vector(v), _, Some(handler)) => handler(m, &v)?,
            (other, _, _) => {
                if other.kind() != OperandKind::Matrix {
                    debug!("{}: {:?} operand takes the matrix path", self.name, other.kind());
                }
                let a = other.into_array()?;
                let (ms, s) = (m.shape(), a.shape());
                if !self.constraint.check(ms, s) && !s.is_scalar() {
                    return Err(DensaError::IncompatibleShapes {
                        expected: self.constraint.describe().to_string(),
                        got: (ms, s),
                    });
                }
                on_matrix(m, &a)?
            }
        };

        if self.interop_1d && kind == OperandKind::Vector && result.is_vector_shaped() {
            trace!("{}: lowering {} result to 1D", self.name, result.shape());
            let orientation = if result.rows() == 1 && result.cols() > 1 {
                Orientation::Row
            } else {
                Orientation::Column
            };
            return Ok(Dispatched::Vector(result.to_flat(), orientation));
        }
        Ok(Dispatched::Array(result))
    }
}

impl<A> std::fmt::Debug for Dispatch<'_, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatch")
            .field("name", &self.name)
            .field("constraint", &self.constraint)
            .field("policy", &self.policy)
            .field("interop_1d", &self.interop_1d)
            .field("on_scalar", &self.on_scalar.is_some())
            .field("on_vector", &self.on_vector.is_some())
            .field("on_matrix", &self.on_matrix.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;
    use crate::testing::{matmul, zip_with, VecArray};
    use std::cell::Cell;

    fn mat(data: Vec<f64>, rows: usize, cols: usize) -> VecArray {
        VecArray::from_flat(rows, cols, data).unwrap()
    }

    fn add_dispatch<'h>() -> Dispatch<'h, VecArray> {
        Dispatch::new("add", ShapeConstraint::SameShape)
            .vector_policy(VectorPolicy::Broadcast)
            .on_scalar(|m, k| zip_with(m, &mat(vec![k], 1, 1), |x, y| x + y))
            .on_vector(|m, v| zip_with(m, v, |x, y| x + y))
            .on_matrix(|m, a| zip_with(m, a, |x, y| x + y))
    }

    #[test]
    fn test_scalar_handler() {
        let m = mat(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let out = add_dispatch().apply(&m, 10.0).unwrap().into_array().unwrap();
        assert_eq!(out.to_flat(), vec![11.0, 12.0, 13.0, 14.0]);
    }

    #[test]
    fn test_vector_handler_broadcasts_row() {
        let m = mat(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        let out = add_dispatch()
            .apply(&m, vec![10.0, 20.0, 30.0])
            .unwrap()
            .into_array()
            .unwrap();
        assert_eq!(out.to_flat(), vec![11.0, 22.0, 33.0, 14.0, 25.0, 36.0]);
    }

    #[test]
    fn test_matrix_constraint() {
        let m = mat(vec![1.0; 4], 2, 2);
        let a = mat(vec![1.0; 6], 2, 3);
        let err = add_dispatch().apply(&m, &a).unwrap_err();
        assert_eq!(
            err,
            DensaError::IncompatibleShapes {
                expected: "shape(m) == shape(a)".to_string(),
                got: (Shape::new(2, 2), Shape::new(2, 3)),
            }
        );
    }

    #[test]
    fn test_scalar_falls_through_as_1x1() {
        let seen = Cell::new(None);
        let d = Dispatch::<VecArray>::new("mul", ShapeConstraint::InnerDims).on_matrix(|m, a| {
            seen.set(Some(a.shape()));
            zip_with(m, a, |x, y| x * y)
        });
        let m = mat(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        // (2, 3) x (1, 1) violates InnerDims but 1x1 operands are exempt
        let out = d.apply(&m, 2.0).unwrap().into_array().unwrap();
        assert_eq!(seen.get(), Some(Shape::new(1, 1)));
        assert_eq!(out.to_flat(), vec![2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
    }

    #[test]
    fn test_missing_matrix_handler() {
        let d = Dispatch::<VecArray>::new("broken", ShapeConstraint::SameShape)
            .on_scalar(|m, _| Ok(m.clone()));
        let m = mat(vec![1.0], 1, 1);
        assert!(matches!(
            d.apply(&m, 1.0),
            Err(DensaError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_interop_1d_lowers_vector_results() {
        let d = Dispatch::new("mmul", ShapeConstraint::InnerDims)
            .interop_1d(true)
            .on_matrix(matmul);
        let m = mat(vec![1.0, 2.0, 3.0, 4.0], 2, 2);

        let out = d.apply(&m, vec![1.0, 1.0]).unwrap();
        assert_eq!(out, Dispatched::Vector(vec![3.0, 7.0], Orientation::Column));

        // Matrix operands are never lowered, even with a vector-shaped result
        let col = mat(vec![1.0, 1.0], 2, 1);
        let out = d.apply(&m, &col).unwrap();
        assert!(!out.is_lowered());
        assert_eq!(out.as_array().map(|a| a.shape()), Some(Shape::new(2, 1)));
    }

    #[test]
    fn test_lowered_row_lifts_back_as_row() {
        let d = add_dispatch().interop_1d(true);
        let row = mat(vec![1.0, 2.0, 3.0], 1, 3);

        let out = d.apply(&row, vec![1.0, 1.0, 1.0]).unwrap();
        assert_eq!(out, Dispatched::Vector(vec![2.0, 3.0, 4.0], Orientation::Row));
        assert_eq!(out.into_array().unwrap().shape(), Shape::new(1, 3));

        let col = mat(vec![1.0, 2.0], 2, 1);
        let out = d.apply(&col, vec![1.0, 1.0]).unwrap();
        assert_eq!(out.into_array().unwrap().shape(), Shape::new(2, 1));
    }

    #[test]
    fn test_vector_without_handler_checks_constraint() {
        let d = Dispatch::new("mmul", ShapeConstraint::InnerDims).on_matrix(matmul);
        let m = mat(vec![1.0; 6], 2, 3);
        let err = d.apply(&m, vec![1.0, 1.0]).unwrap_err();
        assert!(matches!(err, DensaError::IncompatibleShapes { .. }));
    }

    #[test]
    fn test_unsupported_rank() {
        let m = mat(vec![1.0], 1, 1);
        let cube = Operand::Shaped {
            shape: vec![1, 1, 1],
            data: vec![1.0],
        };
        assert_eq!(
            add_dispatch().apply(&m, cube),
            Err(DensaError::UnsupportedShape { ndim: 3 })
        );
    }
}
