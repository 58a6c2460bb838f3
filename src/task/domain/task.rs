//! Task record, candidate, and lifecycle policy types.

use super::{ParseTaskStatusError, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether the `description` field is mandatory under the default
/// validation profile.
///
/// The rule diverged between revisions of the system; the stricter rule is
/// kept. [`crate::task::validation::ValidationConfig`] can still relax it
/// per boundary.
pub const DESCRIPTION_REQUIRED: bool = true;

/// The overdue comparison applied between a task's due date and "today".
///
/// The filter diverged between revisions (`<` versus `<=`); the strict
/// variant is kept. Both repository adapters consult this constant so the
/// boundary can be asserted precisely in tests.
pub const OVERDUE_BOUNDARY: OverdueBoundary = OverdueBoundary::Strict;

/// Comparison conventions for the overdue filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverdueBoundary {
    /// A task is overdue only when its due date is strictly before the
    /// reference date.
    Strict,
    /// A task is also overdue on its due date.
    Inclusive,
}

impl OverdueBoundary {
    /// Returns whether a task due on `due_date` counts as overdue relative
    /// to `reference`.
    #[must_use]
    pub fn includes(self, due_date: NaiveDate, reference: NaiveDate) -> bool {
        match self {
            Self::Strict => due_date < reference,
            Self::Inclusive => due_date <= reference,
        }
    }
}

/// Status values that a task may have during its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// The task is still open.
    Pending,
    /// The task was completed successfully.
    Completed,
    /// The task was cancelled before it was finished; no further action
    /// expected.
    Canceled,
}

impl TaskStatus {
    /// Returns the canonical storage and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            Self::Canceled => "CANCELED",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "PENDING" => Ok(Self::Pending),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELED" => Ok(Self::Canceled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// An unsaved task candidate as submitted by a boundary caller.
///
/// Every field is optional so that the validator can report each missing
/// value independently; a candidate only becomes a [`Task`] after it has
/// passed validation and been persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    /// Submitted title, if any.
    pub title: Option<String>,
    /// Submitted description, if any.
    pub description: Option<String>,
    /// Submitted lifecycle status, if any.
    pub status: Option<TaskStatus>,
    /// Submitted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Submitted creation date, if any. The service stamps this on the
    /// create path; an update that supplies one overwrites the stored
    /// value.
    pub creation_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Creates an empty candidate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the creation date.
    #[must_use]
    pub const fn with_creation_date(mut self, creation_date: NaiveDate) -> Self {
        self.creation_date = Some(creation_date);
        self
    }
}

/// Fully-populated field set produced by a successful validation pass.
///
/// The creation date stays optional here: the form profile does not require
/// it and the service resolves it (stamp on create, preserve on update)
/// before building a [`TaskRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft {
    /// Non-empty title.
    pub title: String,
    /// Description, present whenever the active profile requires one.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Due date.
    pub due_date: NaiveDate,
    /// Creation date, if the caller supplied one.
    pub creation_date: Option<NaiveDate>,
}

/// Save payload handed to a repository.
///
/// A record without an identifier is inserted and assigned one; a record
/// with an identifier replaces the stored task in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    /// Identifier of the task to replace, or `None` to insert.
    pub id: Option<TaskId>,
    /// Title.
    pub title: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Due date.
    pub due_date: NaiveDate,
    /// Creation date.
    pub creation_date: NaiveDate,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted due date.
    pub due_date: NaiveDate,
    /// Persisted creation date.
    pub creation_date: NaiveDate,
}

/// A persisted task record.
///
/// Tasks saved through the service always carry a populated title, status,
/// due date, and creation date; the candidate/record split enforces that
/// invariant at the type level. Identity for the store is the assigned
/// [`TaskId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    due_date: NaiveDate,
    creation_date: NaiveDate,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            due_date: data.due_date,
            creation_date: data.creation_date,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the creation date.
    #[must_use]
    pub const fn creation_date(&self) -> NaiveDate {
        self.creation_date
    }

    /// Returns a save payload that would rewrite this task as stored.
    #[must_use]
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            id: Some(self.id),
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            due_date: self.due_date,
            creation_date: self.creation_date,
        }
    }
}
