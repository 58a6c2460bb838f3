//! JSON boundary for task maintenance.
//!
//! The transport itself is out of scope; this module fixes the wire
//! shapes an HTTP layer must use: the task object with `yyyy-MM-dd` dates
//! and upper-case status names, and the `{"errors": [...]}` body produced
//! for validation and not-found failures together with the client error
//! status each maps to.

mod dto;

pub use dto::{status_for, ErrorBody, TaskDto};
