//! Domain model for task maintenance.
//!
//! The task domain models the task record itself, its lifecycle status,
//! the candidate/persisted split that backs the required-field rules, and
//! the named policy constants that resolve the revision-divergent rules
//! (mandatory description, overdue boundary). All infrastructure concerns
//! stay outside of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::{FieldError, ParseTaskStatusError, TaskField, ValidationErrors, REQUIRED};
pub use ids::TaskId;
pub use task::{
    OverdueBoundary, PersistedTaskData, Task, TaskDraft, TaskRecord, TaskStatus, ValidatedDraft,
    DESCRIPTION_REQUIRED, OVERDUE_BOUNDARY,
};
