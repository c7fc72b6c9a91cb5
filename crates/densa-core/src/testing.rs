//! Minimal `Vec`-backed array used by this crate's unit tests

use crate::array::DenseArray;
use crate::error::{DensaError, Result};
use crate::shape::Shape;

#[derive(Debug, Clone, PartialEq)]
pub struct VecArray {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DenseArray for VecArray {
    fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    fn from_flat(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(DensaError::MalformedInput(format!(
                "{} elements for shape ({}, {})",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    fn to_flat(&self) -> Vec<f64> {
        self.data.clone()
    }

    fn at(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    fn put(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.cols + j] = value;
    }
}

/// Element-wise binary kernel with (1, n) / (n, 1) / 1x1 broadcasting
pub fn zip_with(m: &VecArray, a: &VecArray, f: impl Fn(f64, f64) -> f64) -> Result<VecArray> {
    let (ms, s) = (m.shape(), a.shape());
    let pick = |i: usize, j: usize| -> Option<f64> {
        let r = if s.rows == 1 { 0 } else { i };
        let c = if s.cols == 1 { 0 } else { j };
        (r < s.rows && c < s.cols).then(|| a.at(r, c))
    };
    let mut out = VecArray::zeros(ms.rows, ms.cols);
    for i in 0..ms.rows {
        for j in 0..ms.cols {
            let rhs = pick(i, j).ok_or_else(|| DensaError::IncompatibleShapes {
                expected: "broadcastable shapes".to_string(),
                got: (ms, s),
            })?;
            out.put(i, j, f(m.at(i, j), rhs));
        }
    }
    Ok(out)
}

pub fn matmul(m: &VecArray, a: &VecArray) -> Result<VecArray> {
    let mut out = VecArray::zeros(m.rows, a.cols);
    for i in 0..m.rows {
        for j in 0..a.cols {
            let v = (0..m.cols).map(|k| m.at(i, k) * a.at(k, j)).sum();
            out.put(i, j, v);
        }
    }
    Ok(out)
}
