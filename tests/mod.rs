//! Test suite for groupnotes
//!
//! - `common` - fixtures: in-process server, registered users, PostgreSQL
//! - `integration` - HTTP-level tests against the full router
//! - `property` - proptest properties for identifiers and note grouping

pub mod property;
