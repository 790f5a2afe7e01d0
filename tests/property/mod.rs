//! Property-based tests

mod ids_proptest;
