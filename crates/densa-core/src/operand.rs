//! Operand classification and coercion
//!
//! The right-hand operand of a binary operation may be a bare number, a 1D
//! sequence, a 2D nested sequence or an array instance. Coercion turns it
//! into a [`Coerced`] value: a scalar, or an array tagged vector or matrix.

use crate::array::DenseArray;
use crate::error::{DensaError, Result};
use crate::shape::Shape;
use serde::{Deserialize, Serialize};

/// Operand of a binary operation, before coercion
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<A> {
    Scalar(f64),
    Sequence(Vec<f64>),
    Nested(Vec<Vec<f64>>),
    Array(A),
    /// Row-major data with an explicit shape of any rank. Coercion accepts
    /// ranks 0 to 2.
    Shaped { shape: Vec<usize>, data: Vec<f64> },
}

/// Dimensionality class of an operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperandKind {
    Scalar,
    Vector,
    Matrix,
}

/// Orientation a 1D sequence takes when lifted into 2D storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Shape (1, n)
    Row,
    /// Shape (n, 1)
    #[default]
    Column,
}

/// How a vector operand is oriented against the left operand `m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VectorPolicy {
    /// Always use the given orientation
    Orient(Orientation),
    /// Orient so the vector broadcasts over `m`: as a row when
    /// `len == cols(m)`, else as a column. The expansion itself is left to
    /// the kernel.
    Broadcast,
}

impl Default for VectorPolicy {
    fn default() -> Self {
        VectorPolicy::Orient(Orientation::Column)
    }
}

/// A coerced operand
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced<A> {
    Scalar(f64),
    Vector(A),
    Matrix(A),
}

impl<A> Operand<A> {
    pub fn array(array: A) -> Self {
        Operand::Array(array)
    }

    /// Number of dimensions: 0 for scalars, 1 for sequences, 2 for nested
    /// sequences and arrays.
    pub fn ndim(&self) -> usize {
        match self {
            Operand::Scalar(_) => 0,
            Operand::Sequence(_) => 1,
            Operand::Nested(_) | Operand::Array(_) => 2,
            Operand::Shaped { shape, .. } => shape.len(),
        }
    }

    pub fn classify(&self) -> Result<OperandKind> {
        match self.ndim() {
            0 => Ok(OperandKind::Scalar),
            1 => Ok(OperandKind::Vector),
            2 => Ok(OperandKind::Matrix),
            ndim => Err(DensaError::UnsupportedShape { ndim }),
        }
    }
}

impl<A> From<f64> for Operand<A> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<A> From<Vec<f64>> for Operand<A> {
    fn from(values: Vec<f64>) -> Self {
        Operand::Sequence(values)
    }
}

impl<A> From<Vec<Vec<f64>>> for Operand<A> {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Operand::Nested(rows)
    }
}

impl<A: Clone> From<&A> for Operand<A> {
    fn from(array: &A) -> Self {
        Operand::Array(array.clone())
    }
}

impl<A: DenseArray> From<Coerced<A>> for Operand<A> {
    /// Lower a coerced value back to the operand it came from, so that
    /// coercing it again yields the same result.
    fn from(coerced: Coerced<A>) -> Self {
        match coerced {
            Coerced::Scalar(v) => Operand::Scalar(v),
            Coerced::Vector(a) => Operand::Sequence(a.to_flat()),
            Coerced::Matrix(a) => Operand::Array(a),
        }
    }
}

impl<A: DenseArray> Coerced<A> {
    pub fn kind(&self) -> OperandKind {
        match self {
            Coerced::Scalar(_) => OperandKind::Scalar,
            Coerced::Vector(_) => OperandKind::Vector,
            Coerced::Matrix(_) => OperandKind::Matrix,
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            Coerced::Scalar(_) => Shape::new(1, 1),
            Coerced::Vector(a) | Coerced::Matrix(a) => a.shape(),
        }
    }

    /// The operand as an array. Scalars become 1x1 arrays.
    pub fn into_array(self) -> Result<A> {
        match self {
            Coerced::Scalar(v) => A::from_flat(1, 1, vec![v]),
            Coerced::Vector(a) | Coerced::Matrix(a) => Ok(a),
        }
    }
}

/// Lift a 1D sequence into a (1, n) array
pub fn row_vector<A: DenseArray>(values: &[f64]) -> Result<A> {
    A::from_flat(1, values.len(), values.to_vec())
}

/// Lift a 1D sequence into an (n, 1) array
pub fn column_vector<A: DenseArray>(values: &[f64]) -> Result<A> {
    A::from_flat(values.len(), 1, values.to_vec())
}

fn orient<A: DenseArray>(values: &[f64], orientation: Orientation) -> Result<A> {
    match orientation {
        Orientation::Row => row_vector(values),
        Orientation::Column => column_vector(values),
    }
}

/// Orientation a vector of `len` elements takes against `target` under `policy`
pub fn orientation_for(len: usize, target: Shape, policy: VectorPolicy) -> Orientation {
    match policy {
        VectorPolicy::Orient(orientation) => orientation,
        VectorPolicy::Broadcast if len == target.cols => Orientation::Row,
        VectorPolicy::Broadcast => Orientation::Column,
    }
}

/// Coerce an operand against a target shape hint.
///
/// Scalars stay scalars, sequences are lifted per `policy`, nested
/// sequences become matrices and arrays pass through unchanged. Rank above
/// two fails with [`DensaError::UnsupportedShape`].
pub fn coerce<A: DenseArray>(
    target: Shape,
    policy: VectorPolicy,
    operand: Operand<A>,
) -> Result<Coerced<A>> {
    match operand {
        Operand::Scalar(v) => Ok(Coerced::Scalar(v)),
        Operand::Sequence(values) => {
            let orientation = orientation_for(values.len(), target, policy);
            Ok(Coerced::Vector(orient(&values, orientation)?))
        }
        Operand::Nested(rows) => {
            let cols = rows.first().map_or(0, Vec::len);
            if rows.iter().any(|r| r.len() != cols) {
                return Err(DensaError::ShapeError(
                    "nested operand rows have unequal length".to_string(),
                ));
            }
            Ok(Coerced::Matrix(A::from_nested(&rows)?))
        }
        Operand::Array(a) => Ok(Coerced::Matrix(a)),
        Operand::Shaped { shape, data } => {
            if shape.len() > 2 {
                return Err(DensaError::UnsupportedShape { ndim: shape.len() });
            }
            let expected = shape
                .iter()
                .try_fold(1usize, |acc, &d| acc.checked_mul(d))
                .ok_or_else(|| {
                    DensaError::MalformedInput(format!("shape {:?} overflows usize", shape))
                })?;
            if data.len() != expected {
                return Err(DensaError::MalformedInput(format!(
                    "shape {:?} needs {} elements, got {}",
                    shape,
                    expected,
                    data.len()
                )));
            }
            match shape.as_slice() {
                [] => Ok(Coerced::Scalar(data[0])),
                [_] => coerce(target, policy, Operand::Sequence(data)),
                [rows, cols] => Ok(Coerced::Matrix(A::from_flat(*rows, *cols, data)?)),
                _ => Err(DensaError::UnsupportedShape { ndim: shape.len() }),
            }
        }
    }
}
