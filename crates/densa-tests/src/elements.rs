//! Element-wise, row and manipulation tests
