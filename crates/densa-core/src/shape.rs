//! Shapes and shape constraints
//!
//! Every dense array is two dimensional. A [`Shape`] with one dimension
//! equal to 1 is a vector view: semantically 1D, backed by 2D storage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rows and columns of a dense array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of elements
    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// True when `rows == 1` or `cols == 1`
    pub fn is_vector(&self) -> bool {
        self.rows == 1 || self.cols == 1
    }

    /// True for the 1x1 shape a lifted scalar takes
    pub fn is_scalar(&self) -> bool {
        self.rows == 1 && self.cols == 1
    }

    pub fn transposed(&self) -> Self {
        Self::new(self.cols, self.rows)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

/// Predicate over the shapes of a binary operation's operands.
///
/// `m` is the left operand, `a` the (coerced) right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeConstraint {
    /// shape(m) == shape(a)
    #[default]
    SameShape,
    /// cols(m) == rows(a), as for a matrix product
    InnerDims,
    /// rows(m) == rows(a), as for mᵀ·a
    SameRows,
    /// Both operands vector-shaped
    Vectors,
    /// No requirement
    Any,
}

impl ShapeConstraint {
    pub fn check(&self, m: Shape, a: Shape) -> bool {
        match self {
            ShapeConstraint::SameShape => m == a,
            ShapeConstraint::InnerDims => m.cols == a.rows,
            ShapeConstraint::SameRows => m.rows == a.rows,
            ShapeConstraint::Vectors => m.is_vector() && a.is_vector(),
            ShapeConstraint::Any => true,
        }
    }

    /// Human readable form used in error messages
    pub fn describe(&self) -> &'static str {
        match self {
            ShapeConstraint::SameShape => "shape(m) == shape(a)",
            ShapeConstraint::InnerDims => "cols(m) == rows(a)",
            ShapeConstraint::SameRows => "rows(m) == rows(a)",
            ShapeConstraint::Vectors => "both operands vector-shaped",
            ShapeConstraint::Any => "any shapes",
        }
    }

    /// Result shape of an operation constrained by `self`, if the shapes pass.
    pub fn result_shape(&self, m: Shape, a: Shape) -> Option<Shape> {
        if !self.check(m, a) {
            return None;
        }
        Some(match self {
            ShapeConstraint::SameShape | ShapeConstraint::Any => m,
            ShapeConstraint::InnerDims => Shape::new(m.rows, a.cols),
            ShapeConstraint::SameRows => Shape::new(m.cols, a.cols),
            ShapeConstraint::Vectors => Shape::new(m.size(), a.size()),
        })
    }
}
