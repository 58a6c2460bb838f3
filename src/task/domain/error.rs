//! Error types for task field validation and status parsing.

use std::fmt;
use thiserror::Error;

/// Stable machine-readable reason code shared by all required-field
/// failures. Boundary callers key their form feedback on this value.
pub const REQUIRED: &str = "required";

/// Fields of a task candidate that validation may reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// The task title.
    Title,
    /// The task description.
    Description,
    /// The lifecycle status.
    Status,
    /// The due date.
    DueDate,
    /// The creation date.
    CreationDate,
}

impl TaskField {
    /// Returns the boundary-facing field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Status => "status",
            Self::DueDate => "dueDate",
            Self::CreationDate => "creationDate",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {code}")]
pub struct FieldError {
    /// The offending field.
    field: TaskField,
    /// The stable reason code, always [`REQUIRED`].
    code: &'static str,
}

impl FieldError {
    /// Creates a required-field failure for the given field.
    #[must_use]
    pub const fn required(field: TaskField) -> Self {
        Self {
            field,
            code: REQUIRED,
        }
    }

    /// Returns the offending field.
    #[must_use]
    pub const fn field(self) -> TaskField {
        self.field
    }

    /// Returns the machine-readable reason code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        self.code
    }
}

/// Aggregate of every field failure found in one validation pass.
///
/// All rules are evaluated independently, so a single pass may report
/// several fields at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    /// Wraps the collected field failures.
    #[must_use]
    pub const fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    /// Returns the individual field failures.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns the offending fields in reporting order.
    #[must_use]
    pub fn fields(&self) -> Vec<TaskField> {
        self.0.iter().map(|error| error.field()).collect()
    }

    /// Returns one boundary-facing message per failed field.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: ")?;
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// Error returned while parsing task statuses from storage or requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
