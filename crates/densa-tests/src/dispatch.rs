//! Dispatch behaviour seen through the backend: operand kinds, 1D interop
//! and custom dispatchers built over the adapter's kernels
