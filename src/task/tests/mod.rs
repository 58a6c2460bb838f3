//! Unit tests for the task module.
//!
//! Tests are organised by concept, covering happy paths, error cases, and
//! edge cases for all public APIs.

mod boundary_tests;
mod memory_repository_tests;
mod validation_tests;
