//! Individual required-field rule implementations.
//!
//! Each rule inspects one candidate field, pushes a [`FieldError`] when
//! the field is missing, and hands back the accepted value so the caller
//! can assemble the validated field set without re-checking. Rules are
//! pure functions; an empty string counts as missing.

use super::ValidationConfig;
use crate::task::domain::{FieldError, TaskField, TaskStatus};
use chrono::NaiveDate;

/// Accepts a non-empty title.
pub fn check_title(title: Option<String>, errors: &mut Vec<FieldError>) -> Option<String> {
    let accepted = title.filter(|value| !value.is_empty());
    if accepted.is_none() {
        errors.push(FieldError::required(TaskField::Title));
    }
    accepted
}

/// Accepts a non-empty description, mandatory only when the active
/// profile says so.
pub fn check_description(
    description: Option<String>,
    config: &ValidationConfig,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let accepted = description.filter(|value| !value.is_empty());
    if config.require_description && accepted.is_none() {
        errors.push(FieldError::required(TaskField::Description));
    }
    accepted
}

/// Accepts a present lifecycle status.
///
/// Membership in the enumeration is guaranteed by the type; boundary
/// parsing rejects unknown names before a candidate is built.
pub fn check_status(
    status: Option<TaskStatus>,
    errors: &mut Vec<FieldError>,
) -> Option<TaskStatus> {
    if status.is_none() {
        errors.push(FieldError::required(TaskField::Status));
    }
    status
}

/// Accepts a present due date.
pub fn check_due_date(
    due_date: Option<NaiveDate>,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDate> {
    if due_date.is_none() {
        errors.push(FieldError::required(TaskField::DueDate));
    }
    due_date
}

/// Accepts a creation date, mandatory only for the API profile.
pub fn check_creation_date(
    creation_date: Option<NaiveDate>,
    config: &ValidationConfig,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDate> {
    if config.require_creation_date && creation_date.is_none() {
        errors.push(FieldError::required(TaskField::CreationDate));
    }
    creation_date
}
