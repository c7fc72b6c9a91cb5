//! Error types for densa

use crate::shape::Shape;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DensaError {
    #[error("Index out of range: index {index} for {axis} of size {size}")]
    IndexOutOfRange {
        index: usize,
        size: usize,
        axis: &'static str,
    },

    #[error("Shape error: {0}")]
    ShapeError(String),

    #[error("Incompatible shapes: expected {expected}, got {}", shape_pair(.got))]
    IncompatibleShapes { expected: String, got: (Shape, Shape) },

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Unsupported shape: {ndim} dimensions (dense arrays support 0 to 2)")]
    UnsupportedShape { ndim: usize },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Cannot reduce an empty array without an initial value")]
    EmptyReduce,
}

impl DensaError {
    pub fn row(index: usize, size: usize) -> Self {
        DensaError::IndexOutOfRange {
            index,
            size,
            axis: "row",
        }
    }

    pub fn col(index: usize, size: usize) -> Self {
        DensaError::IndexOutOfRange {
            index,
            size,
            axis: "column",
        }
    }
}

fn shape_pair((m, a): &(Shape, Shape)) -> String {
    format!("{} and {}", m, a)
}

pub type Result<T> = std::result::Result<T, DensaError>;
