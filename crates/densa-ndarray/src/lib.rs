//! ndarray adapter for densa
//!
//! Wraps `ndarray::Array2<f64>` as a [`DenseArray`](densa_core::DenseArray)
//! and implements every densa operation trait over it. Element-wise kernels
//! and broadcasting come from ndarray, matrix products from faer.

mod array;
mod broadcast;
mod creation;
mod elementwise;
mod linalg;
mod manipulation;
mod math;
mod rows;

pub use array::NdMatrix;
pub use broadcast::{broadcast_binary_op, broadcast_to};

use densa_core::{Backend, ImplementationInfo, ImplementationRegistry};

/// Identifier this adapter registers under
pub const IMPLEMENTATION_ID: &str = "ndarray";

/// Adapter backend over ndarray + faer
pub struct NdBackend;

impl Backend for NdBackend {
    fn name() -> &'static str {
        "ndarray"
    }

    fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

/// Register this adapter in `registry` under [`IMPLEMENTATION_ID`] with an
/// empty prototype. Returns the replaced entry, if any.
pub fn register(registry: &mut ImplementationRegistry) -> Option<ImplementationInfo> {
    registry.register_implementation::<NdBackend>(
        IMPLEMENTATION_ID,
        <NdMatrix as densa_core::DenseArray>::zeros(0, 0),
    )
}
