//! Form boundary for task maintenance.
//!
//! Replaces framework-managed field binding with an explicit
//! request-to-entity mapping: raw submitted strings become a
//! [`TaskDraft`](crate::task::domain::TaskDraft) that the validator then
//! judges. Blank and unparseable values map to absent fields, which
//! surface through the shared `required` reason code.

mod request;

pub use request::{TaskForm, DATE_FORMAT};
