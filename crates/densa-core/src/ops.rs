//! Operation traits that adapters implement

use crate::array::DenseArray;
use crate::dispatch::Dispatched;
use crate::operand::Operand;
use crate::Result;

/// Array construction
pub trait CreationOps: Sized {
    type Array: DenseArray;

    /// Zero-filled array
    fn new_array(rows: usize, cols: usize) -> Self::Array;

    /// Zero-filled array with the shape of `like`
    fn zeros_like(like: &Self::Array) -> Self::Array;

    /// Array filled with `value`
    fn full(rows: usize, cols: usize, value: f64) -> Self::Array;

    /// Ones on the main diagonal, zeros elsewhere
    fn identity(rows: usize, cols: usize) -> Self::Array;

    /// Square array with `values` on the diagonal
    fn diagonal(values: &[f64]) -> Self::Array;

    /// From equal-length rows
    fn from_nested(rows: &[Vec<f64>]) -> Result<Self::Array>;

    /// From row-major data
    fn from_flat(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self::Array>;

    /// (1, n) array
    fn row_vector(values: &[f64]) -> Self::Array;

    /// (n, 1) array
    fn column_vector(values: &[f64]) -> Self::Array;
}

/// Arithmetic over a left array and an operand of any supported kind
pub trait ArithmeticOps {
    type Array: DenseArray;

    fn add(m: &Self::Array, a: impl Into<Operand<Self::Array>>) -> Result<Dispatched<Self::Array>>;
    fn sub(m: &Self::Array, a: impl Into<Operand<Self::Array>>) -> Result<Dispatched<Self::Array>>;
    fn element_multiply(
        m: &Self::Array,
        a: impl Into<Operand<Self::Array>>,
    ) -> Result<Dispatched<Self::Array>>;
    fn element_divide(
        m: &Self::Array,
        a: impl Into<Operand<Self::Array>>,
    ) -> Result<Dispatched<Self::Array>>;

    /// Matrix product; requires cols(m) == rows(a)
    fn matrix_multiply(
        m: &Self::Array,
        a: impl Into<Operand<Self::Array>>,
    ) -> Result<Dispatched<Self::Array>>;

    /// mᵀ·a; requires rows(m) == rows(a)
    fn inner_product(
        m: &Self::Array,
        a: impl Into<Operand<Self::Array>>,
    ) -> Result<Dispatched<Self::Array>>;

    /// Outer product of two vectors of any lengths
    fn outer_product(
        m: &Self::Array,
        a: impl Into<Operand<Self::Array>>,
    ) -> Result<Dispatched<Self::Array>>;

    fn scale(m: &Self::Array, k: f64) -> Self::Array;

    /// Element-wise `x.powf(exponent)`
    fn power(m: &Self::Array, exponent: f64) -> Self::Array;

    fn negate(m: &Self::Array) -> Self::Array;
}

/// Element-wise maps, folds and diagonal queries
pub trait ElementOps {
    type Array: DenseArray;

    fn map(m: &Self::Array, f: impl Fn(f64) -> f64) -> Self::Array;

    /// Map over `m` and one operand broadcast to `m`'s shape
    fn map2(
        m: &Self::Array,
        a: impl Into<Operand<Self::Array>>,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Self::Array>;

    /// Map over `m` and any number of operands broadcast to `m`'s shape.
    /// `f` receives the cell of `m` followed by one cell per operand.
    fn map_n(
        m: &Self::Array,
        operands: Vec<Operand<Self::Array>>,
        f: impl Fn(&[f64]) -> f64,
    ) -> Result<Self::Array>;

    fn map_in_place(m: &mut Self::Array, f: impl Fn(f64) -> f64) -> &mut Self::Array;

    fn map2_in_place(
        m: &mut Self::Array,
        a: impl Into<Operand<Self::Array>>,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<&mut Self::Array>;

    /// Left fold in row-major order. Without `init` the first element seeds the fold.
    fn reduce(m: &Self::Array, f: impl Fn(f64, f64) -> f64, init: Option<f64>) -> Result<f64>;

    fn fill_in_place(m: &mut Self::Array, value: f64) -> &mut Self::Array;

    fn main_diagonal(m: &Self::Array) -> Vec<f64>;

    /// Sum of the main diagonal
    fn trace(m: &Self::Array) -> f64 {
        Self::main_diagonal(m).iter().sum()
    }

    fn element_sum(m: &Self::Array) -> f64;

    /// Exact element-wise equality
    fn equals(a: &Self::Array, b: &Self::Array) -> bool {
        a.equals(b)
    }
}

/// Elementary row operations. Each returns a full copy.
pub trait RowOps {
    type Array: DenseArray;

    fn swap_rows(m: &Self::Array, i: usize, j: usize) -> Result<Self::Array>;

    fn scale_row(m: &Self::Array, i: usize, k: f64) -> Result<Self::Array>;

    /// Row `target` += k * row `source`
    fn add_scaled_row(m: &Self::Array, target: usize, source: usize, k: f64)
        -> Result<Self::Array>;
}

/// Slicing, reshaping and in-place updates
pub trait ManipulationOps {
    type Array: DenseArray;

    fn transpose(m: &Self::Array) -> Self::Array;

    /// Same elements in row-major order under a new shape
    fn reshape(m: &Self::Array, rows: usize, cols: usize) -> Result<Self::Array>;

    fn row(m: &Self::Array, i: usize) -> Result<Vec<f64>>;

    fn column(m: &Self::Array, j: usize) -> Result<Vec<f64>>;

    /// Copy of the `rows` x `cols` window starting at (`row_start`, `col_start`)
    fn submatrix(
        m: &Self::Array,
        row_start: usize,
        rows: usize,
        col_start: usize,
        cols: usize,
    ) -> Result<Self::Array>;

    fn scale_in_place(m: &mut Self::Array, k: f64) -> &mut Self::Array;

    /// Element-wise add of an operand into `m`. Nothing is written on error.
    fn add_in_place(
        m: &mut Self::Array,
        a: impl Into<Operand<Self::Array>>,
    ) -> Result<&mut Self::Array>;
}
