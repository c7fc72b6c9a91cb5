//! End-to-end scenarios written once against the backend traits
