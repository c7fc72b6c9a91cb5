//! Backend trait that combines all operations

use crate::array::DenseArray;
use crate::ops::*;

/// A complete adapter
///
/// Adapters implement the individual operation traits over a single array
/// type, then this trait to name themselves.
pub trait Backend:
    CreationOps
    + ArithmeticOps<Array = <Self as CreationOps>::Array>
    + ElementOps<Array = <Self as CreationOps>::Array>
    + RowOps<Array = <Self as CreationOps>::Array>
    + ManipulationOps<Array = <Self as CreationOps>::Array>
where
    <Self as CreationOps>::Array: DenseArray,
{
    /// Backend name for identification
    fn name() -> &'static str;

    /// Backend version
    fn version() -> &'static str;
}
