//! Wire representations for the JSON boundary.

use crate::task::domain::{Task, TaskDraft, TaskId, TaskStatus};
use crate::task::services::TaskServiceError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task representation exchanged with JSON callers.
///
/// Dates serialize as `yyyy-MM-dd` strings and the status as the enum's
/// upper-case name. Inbound bodies may omit any field; the validator
/// reports what is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    /// Assigned identifier; absent on creation requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    /// Title.
    #[serde(default)]
    pub title: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// Due date.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Creation date.
    #[serde(default)]
    pub creation_date: Option<NaiveDate>,
}

impl TaskDto {
    /// Maps an inbound body to a task candidate; the identifier, if any,
    /// is carried separately by the route.
    #[must_use]
    pub fn into_draft(self) -> TaskDraft {
        TaskDraft {
            title: self.title,
            description: self.description,
            status: self.status,
            due_date: self.due_date,
            creation_date: self.creation_date,
        }
    }
}

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        Self {
            id: Some(task.id()),
            title: Some(task.title().to_owned()),
            description: task.description().map(str::to_owned),
            status: Some(task.status()),
            due_date: Some(task.due_date()),
            creation_date: Some(task.creation_date()),
        }
    }
}

/// Client-error body: one human-readable message per failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Failure messages; validation failures contribute one entry per
    /// failed field.
    pub errors: Vec<String>,
}

impl From<&TaskServiceError> for ErrorBody {
    fn from(error: &TaskServiceError) -> Self {
        let errors = match error {
            TaskServiceError::Validation(failures) => failures.messages(),
            other => vec![other.to_string()],
        };
        Self { errors }
    }
}

/// Returns the HTTP status class a service failure translates to: 404 for
/// a missing target, 400 for a rejected candidate, 500 otherwise.
#[must_use]
pub const fn status_for(error: &TaskServiceError) -> u16 {
    match error {
        TaskServiceError::NotFound(_) => 404,
        TaskServiceError::Validation(_) => 400,
        TaskServiceError::Repository(_) => 500,
    }
}
