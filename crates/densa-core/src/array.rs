//! The dense array protocol that adapters implement

use crate::error::{DensaError, Result};
use crate::shape::Shape;

/// A rectangular 2D array of `f64` stored row-major.
///
/// Adapters wrap a concrete matrix type and provide the handful of
/// primitives below; indexed access, nested conversion and equality are
/// derived from them. Copy-producing methods take `&self` and return a new
/// owned array, in-place methods take `&mut self`.
pub trait DenseArray: Clone + std::fmt::Debug + Sized {
    /// Rows and columns
    fn shape(&self) -> Shape;

    /// Zero-filled array of the given shape
    fn zeros(rows: usize, cols: usize) -> Self;

    /// Build from row-major data. Fails if `data.len() != rows * cols`.
    fn from_flat(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self>;

    /// Row-major copy of the elements
    fn to_flat(&self) -> Vec<f64>;

    /// Element at `(i, j)`. Callers guarantee the index is in bounds.
    fn at(&self, i: usize, j: usize) -> f64;

    /// Overwrite the element at `(i, j)`. Callers guarantee the index is in bounds.
    fn put(&mut self, i: usize, j: usize, value: f64);

    fn rows(&self) -> usize {
        self.shape().rows
    }

    fn cols(&self) -> usize {
        self.shape().cols
    }

    /// Total number of elements
    fn size(&self) -> usize {
        self.shape().size()
    }

    fn is_vector_shaped(&self) -> bool {
        self.shape().is_vector()
    }

    /// Validate that `(i, j)` lies inside the array
    fn check_index(&self, i: usize, j: usize) -> Result<()> {
        let shape = self.shape();
        if i >= shape.rows {
            return Err(DensaError::row(i, shape.rows));
        }
        if j >= shape.cols {
            return Err(DensaError::col(j, shape.cols));
        }
        Ok(())
    }

    fn get(&self, i: usize, j: usize) -> Result<f64> {
        self.check_index(i, j)?;
        Ok(self.at(i, j))
    }

    /// Copy of `self` with one element replaced. `self` is left untouched.
    fn set_copy(&self, i: usize, j: usize, value: f64) -> Result<Self> {
        self.check_index(i, j)?;
        let mut out = self.clone();
        out.put(i, j, value);
        Ok(out)
    }

    /// Replace one element of `self`.
    fn set_in_place(&mut self, i: usize, j: usize, value: f64) -> Result<&mut Self> {
        self.check_index(i, j)?;
        self.put(i, j, value);
        Ok(self)
    }

    fn to_nested(&self) -> Vec<Vec<f64>> {
        let cols = self.cols();
        if cols == 0 {
            return vec![Vec::new(); self.rows()];
        }
        self.to_flat().chunks(cols).map(|row| row.to_vec()).collect()
    }

    /// Build from a sequence of equal-length rows.
    ///
    /// An empty outer sequence yields a 0x0 array.
    fn from_nested(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(DensaError::MalformedInput(format!(
                "row {} has length {}, expected {}",
                index,
                row.len(),
                cols
            )));
        }
        let data: Vec<f64> = rows.iter().flatten().copied().collect();
        Self::from_flat(rows.len(), cols, data)
    }

    /// Exact element-wise equality (no tolerance)
    fn equals(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.to_flat() == other.to_flat()
    }
}
