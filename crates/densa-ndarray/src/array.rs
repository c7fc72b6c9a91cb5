//! Dense matrix adapter over ndarray

use densa_core::{DenseArray, DensaError, Result, Shape};
use ndarray::Array2;

/// Row-major dense matrix backed by `ndarray::Array2<f64>`
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "MatrixRepr", into = "MatrixRepr")
)]
pub struct NdMatrix {
    data: Array2<f64>,
}

impl NdMatrix {
    /// Wrap an ndarray matrix
    pub fn from_ndarray(data: Array2<f64>) -> Self {
        Self { data }
    }

    /// Get underlying ndarray reference
    pub fn as_ndarray(&self) -> &Array2<f64> {
        &self.data
    }

    /// Get mutable ndarray reference
    pub fn as_ndarray_mut(&mut self) -> &mut Array2<f64> {
        &mut self.data
    }

    /// Consume and return ndarray
    pub fn into_ndarray(self) -> Array2<f64> {
        self.data
    }

    /// Create with a fill value
    pub fn full(rows: usize, cols: usize, value: f64) -> Self {
        Self::from_ndarray(Array2::from_elem((rows, cols), value))
    }
}

impl DenseArray for NdMatrix {
    fn shape(&self) -> Shape {
        let (rows, cols) = self.data.dim();
        Shape::new(rows, cols)
    }

    fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_ndarray(Array2::zeros((rows, cols)))
    }

    fn from_flat(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let expected = rows.checked_mul(cols).ok_or_else(|| {
            DensaError::MalformedInput(format!("shape ({}, {}) overflows usize", rows, cols))
        })?;
        if data.len() != expected {
            return Err(DensaError::MalformedInput(format!(
                "Data length {} doesn't match shape ({}, {}) (expected {})",
                data.len(),
                rows,
                cols,
                expected
            )));
        }

        let arr = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| DensaError::ShapeError(e.to_string()))?;
        Ok(Self::from_ndarray(arr))
    }

    fn to_flat(&self) -> Vec<f64> {
        self.data.iter().copied().collect()
    }

    fn at(&self, i: usize, j: usize) -> f64 {
        self.data[[i, j]]
    }

    fn put(&mut self, i: usize, j: usize, value: f64) {
        self.data[[i, j]] = value;
    }
}

// Exact comparison, same as `DenseArray::equals`
impl PartialEq for NdMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl From<Array2<f64>> for NdMatrix {
    fn from(data: Array2<f64>) -> Self {
        Self::from_ndarray(data)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MatrixRepr {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

#[cfg(feature = "serde")]
impl From<NdMatrix> for MatrixRepr {
    fn from(m: NdMatrix) -> Self {
        let shape = m.shape();
        Self {
            rows: shape.rows,
            cols: shape.cols,
            data: m.to_flat(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<MatrixRepr> for NdMatrix {
    type Error = DensaError;

    fn try_from(repr: MatrixRepr) -> Result<Self> {
        Self::from_flat(repr.rows, repr.cols, repr.data)
    }
}
