//! Raw form submission and its mapping to a task candidate.

use crate::task::domain::{TaskDraft, TaskStatus};
use chrono::NaiveDate;

/// Date format accepted from and rendered to form callers.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A raw form submission: every field exactly as posted, untyped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    /// Posted title.
    pub title: Option<String>,
    /// Posted description.
    pub description: Option<String>,
    /// Posted status name.
    pub status: Option<String>,
    /// Posted due date in [`DATE_FORMAT`].
    pub due_date: Option<String>,
    /// Posted creation date in [`DATE_FORMAT`]; forms normally omit this
    /// and let the service stamp it.
    pub creation_date: Option<String>,
}

impl TaskForm {
    /// Maps the submission to a task candidate.
    ///
    /// Whitespace-only text fields count as absent. A status or date that
    /// does not parse also maps to an absent field: the form vocabulary
    /// has a single `required` reason code, so malformed input is
    /// reported the same way as missing input.
    #[must_use]
    pub fn into_draft(self) -> TaskDraft {
        TaskDraft {
            title: presented(self.title),
            description: presented(self.description),
            status: presented(self.status)
                .and_then(|value| TaskStatus::try_from(value.as_str()).ok()),
            due_date: parse_date(self.due_date),
            creation_date: parse_date(self.creation_date),
        }
    }
}

fn presented(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

fn parse_date(value: Option<String>) -> Option<NaiveDate> {
    presented(value).and_then(|text| NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok())
}
