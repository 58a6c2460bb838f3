//! Taskdesk: task management core.
//!
//! This crate provides the business logic for maintaining tasks — records
//! with a lifecycle status, a due date, and a creation date — through
//! create/read/update/delete operations plus paginated listing and an
//! overdue filter.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports and boundary mappings
//!
//! HTTP routing and view rendering are left to the embedding application;
//! the boundary adapters only define the request-to-entity mapping and the
//! error-body shapes those callers rely on.

pub mod task;
