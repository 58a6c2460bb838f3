//! Task maintenance for Taskdesk.
//!
//! This module implements the task lifecycle: creating tasks with a
//! service-stamped creation date, retrieving them by identifier, listing
//! them in pages ordered by due date, filtering pending tasks whose due
//! date has passed, and replacing or deleting existing records. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Pagination and result-collapse rules in [`query`]
//! - Field validation in [`validation`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod query;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
