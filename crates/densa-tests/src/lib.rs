//! Shared test suite for densa backends
//!
//! Behavioural tests for the ndarray adapter, written against the densa
//! operation traits so they carry over to any backend.

pub mod arithmetic;
pub mod creation;
pub mod dispatch;
pub mod elements;
pub mod properties;
pub mod registry;
pub mod scenarios;

/// Test utilities
pub mod utils {
    use densa_core::DenseArray;

    /// Check if two f64 values are approximately equal
    pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if a.is_nan() && b.is_nan() {
            return true;
        }
        if a.is_infinite() && b.is_infinite() {
            return a.signum() == b.signum();
        }
        (a - b).abs() < tol
    }

    /// Check if two arrays are approximately equal
    pub fn arrays_approx_eq<A: DenseArray>(a: &A, b: &A, tol: f64) -> bool {
        if a.shape() != b.shape() {
            return false;
        }
        let a_data = a.to_flat();
        let b_data = b.to_flat();
        a_data.iter().zip(b_data.iter()).all(|(&x, &y)| approx_eq(x, y, tol))
    }

    /// Nested rows for a `rows` x `cols` array holding 1, 2, 3, ... row-major
    pub fn counting(rows: usize, cols: usize) -> Vec<Vec<f64>> {
        (0..rows)
            .map(|i| (0..cols).map(|j| (i * cols + j + 1) as f64).collect())
            .collect()
    }

    /// Install a test logger; safe to call from every test
    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Default tolerance for floating point comparisons
    pub const DEFAULT_TOL: f64 = 1e-10;

    /// Relaxed tolerance for operations with accumulated error
    pub const RELAXED_TOL: f64 = 1e-6;
}

/// Macro to generate parameterized tests for different backends
#[macro_export]
macro_rules! backend_tests {
    ($backend:ty, $test_name:ident, $body:block) => {
        #[test]
        fn $test_name() {
            type B = $backend;
            $body
        }
    };
}
