//! Required-field validation for task candidates.
//!
//! Mirrors the behaviour boundary callers depend on: every rule is
//! evaluated independently and all failures are reported together, keyed
//! by field name with the shared `required` reason code. Validation never
//! touches the repository; a candidate that fails here is rejected before
//! any write is attempted.

pub mod rules;

use crate::task::domain::{TaskDraft, ValidatedDraft, ValidationErrors, DESCRIPTION_REQUIRED};

/// Configuration for the required-field rules.
///
/// The two boundaries use different profiles: the JSON API validates the
/// creation date it receives, while the form boundary leaves it to the
/// service to stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Whether `description` must be present and non-empty.
    pub require_description: bool,
    /// Whether `creationDate` must be present.
    pub require_creation_date: bool,
}

impl ValidationConfig {
    /// Profile for the form boundary: the creation date is stamped by the
    /// service before persistence and is not required from the caller.
    #[must_use]
    pub const fn form() -> Self {
        Self {
            require_description: DESCRIPTION_REQUIRED,
            require_creation_date: false,
        }
    }

    /// Profile for the JSON API boundary, which validates the creation
    /// date carried in the request body.
    #[must_use]
    pub const fn api() -> Self {
        Self {
            require_description: DESCRIPTION_REQUIRED,
            require_creation_date: true,
        }
    }

    /// Overrides whether `description` is mandatory.
    #[must_use]
    pub const fn with_description_required(mut self, required: bool) -> Self {
        self.require_description = required;
        self
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::form()
    }
}

/// Validates task candidates against the required-field rules.
///
/// Stateless and side-effect free; a pure function of the candidate and
/// the active configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Creates a validator with the default (form) profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with a custom profile.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Checks a candidate against every rule and, when all pass, returns
    /// the populated field set.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] carrying one
    /// [`FieldError`](crate::task::domain::FieldError) per failed field.
    /// Rules never short-circuit: a candidate missing several fields
    /// reports all of them in a single pass.
    pub fn validate(&self, draft: TaskDraft) -> Result<ValidatedDraft, ValidationErrors> {
        let mut errors = Vec::new();

        let title = rules::check_title(draft.title, &mut errors);
        let description = rules::check_description(draft.description, &self.config, &mut errors);
        let status = rules::check_status(draft.status, &mut errors);
        let due_date = rules::check_due_date(draft.due_date, &mut errors);
        let creation_date =
            rules::check_creation_date(draft.creation_date, &self.config, &mut errors);

        // A missing title, status, or due date always pushes an error, so
        // an empty error list implies the captures below are populated.
        if let (Some(title), Some(status), Some(due_date), true) =
            (title, status, due_date, errors.is_empty())
        {
            Ok(ValidatedDraft {
                title,
                description,
                status,
                due_date,
                creation_date,
            })
        } else {
            Err(ValidationErrors::new(errors))
        }
    }

    /// Checks a candidate without consuming it, reporting only the failed
    /// fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] exactly as [`Validator::validate`]
    /// would for the same candidate.
    pub fn check(&self, draft: &TaskDraft) -> Result<(), ValidationErrors> {
        self.validate(draft.clone()).map(|_| ())
    }
}
