//! PostgreSQL store tests (ignored by default)

mod store_test;
