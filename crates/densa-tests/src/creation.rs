//! Construction and conversion tests
