//! Property-based tests

pub mod store_proptest;
pub mod validation_proptest;
