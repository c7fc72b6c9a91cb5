//! Implementation registry tests
