//! Property tests for the adapter's algebraic and conversion invariants
