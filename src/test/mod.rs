//! Shared helpers for in-crate tests.
