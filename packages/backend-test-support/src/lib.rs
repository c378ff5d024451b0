//! Test support utilities shared by the backend integration tests.
//!
//! Currently this is the one-time tracing subscriber setup so every test
//! binary logs the same way.

pub mod logging;
