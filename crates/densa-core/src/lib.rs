//! densa core - the dense array protocol
//!
//! This crate defines the traits an adapter implements to let a concrete
//! 2D matrix type take part in a generic array API, together with the
//! backend-agnostic glue: operand coercion, shape constraints and
//! shape-checked binary dispatch. It contains no numeric kernels.

pub mod array;
pub mod backend;
pub mod dispatch;
pub mod error;
pub mod operand;
pub mod ops;
pub mod registry;
pub mod shape;

#[cfg(test)]
mod testing;

pub use array::DenseArray;
pub use backend::Backend;
pub use dispatch::{Dispatch, Dispatched};
pub use error::{DensaError, Result};
pub use operand::{Coerced, Operand, OperandKind, Orientation, VectorPolicy};
pub use registry::{ImplementationInfo, ImplementationRegistry};
pub use shape::{Shape, ShapeConstraint};
