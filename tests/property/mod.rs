//! Property-based tests for resolution and hook guarantees

mod hooks;
mod resolution;
