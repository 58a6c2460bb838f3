//! Adapter implementations for task maintenance.
//!
//! Repository adapters implement the persistence port; the boundary
//! adapters define the request-to-entity mappings and error-body shapes
//! the form and JSON callers use.

pub mod form;
pub mod memory;
pub mod postgres;
pub mod rest;
