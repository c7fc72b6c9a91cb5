//! Broadcasting an operand over a left matrix
//!
//! Element-wise operations keep the left operand's shape. The right
//! operand is stretched to it with ndarray's zero-cost views: a (1, n) row
//! repeats down the rows, an (n, 1) column across the columns and a 1x1
//! matrix everywhere. Any other mismatch is an error.

use densa_core::{DensaError, Result, Shape};
use ndarray::{Array2, ArrayView2, Zip};

fn dims(arr: &Array2<f64>) -> Shape {
    let (rows, cols) = arr.dim();
    Shape::new(rows, cols)
}

/// View `arr` with the target shape.
pub fn broadcast_to(arr: &Array2<f64>, target: Shape) -> Result<ArrayView2<'_, f64>> {
    arr.broadcast((target.rows, target.cols))
        .ok_or_else(|| DensaError::IncompatibleShapes {
            expected: format!("an operand broadcastable to {}", target),
            got: (target, dims(arr)),
        })
}

/// Apply `op` to each cell of `m` and the matching cell of `a` broadcast to `m`'s shape.
pub fn broadcast_binary_op<F>(m: &Array2<f64>, a: &Array2<f64>, op: F) -> Result<Array2<f64>>
where
    F: Fn(f64, f64) -> f64,
{
    // Fast path: same shape, no broadcasting needed
    if m.dim() == a.dim() {
        return Ok(Zip::from(m).and(a).map_collect(|&x, &y| op(x, y)));
    }

    let a_view = broadcast_to(a, dims(m))?;
    Ok(Zip::from(m).and(&a_view).map_collect(|&x, &y| op(x, y)))
}

/// In-place form of [`broadcast_binary_op`]. `m` is untouched on error.
pub fn broadcast_binary_op_inplace<F>(m: &mut Array2<f64>, a: &Array2<f64>, op: F) -> Result<()>
where
    F: Fn(f64, f64) -> f64,
{
    let a_view = broadcast_to(a, dims(m))?;
    Zip::from(m).and(&a_view).for_each(|x, &y| *x = op(*x, y));
    Ok(())
}
