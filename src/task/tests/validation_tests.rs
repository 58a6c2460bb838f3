//! Required-field validation tests.

use crate::task::domain::{TaskDraft, TaskField, TaskStatus, REQUIRED};
use crate::task::tests::fixtures::date;
use crate::task::validation::{ValidationConfig, Validator};
use rstest::{fixture, rstest};

#[fixture]
fn form_validator() -> Validator {
    Validator::with_config(ValidationConfig::form())
}

#[fixture]
fn api_validator() -> Validator {
    Validator::with_config(ValidationConfig::api())
}

fn complete_draft() -> TaskDraft {
    TaskDraft::new()
        .with_title("a task to do")
        .with_description("task description")
        .with_status(TaskStatus::Pending)
        .with_due_date(date(2026, 8, 26))
        .with_creation_date(date(2026, 8, 24))
}

#[rstest]
fn complete_candidate_passes_and_keeps_every_field(form_validator: Validator) {
    let validated = form_validator
        .validate(complete_draft())
        .expect("complete candidate should pass");

    assert_eq!(validated.title, "a task to do");
    assert_eq!(validated.description.as_deref(), Some("task description"));
    assert_eq!(validated.status, TaskStatus::Pending);
    assert_eq!(validated.due_date, date(2026, 8, 26));
    assert_eq!(validated.creation_date, Some(date(2026, 8, 24)));
}

#[rstest]
fn empty_candidate_reports_every_missing_field_at_once(form_validator: Validator) {
    let errors = form_validator
        .validate(TaskDraft::new())
        .expect_err("empty candidate should fail");

    assert_eq!(
        errors.fields(),
        vec![
            TaskField::Title,
            TaskField::Description,
            TaskField::Status,
            TaskField::DueDate,
        ]
    );
}

#[rstest]
fn empty_strings_count_as_missing(form_validator: Validator) {
    let draft = complete_draft().with_title("").with_description("");
    let errors = form_validator
        .validate(draft)
        .expect_err("blank text fields should fail");

    assert_eq!(
        errors.fields(),
        vec![TaskField::Title, TaskField::Description]
    );
}

#[rstest]
fn every_failure_carries_the_shared_reason_code(form_validator: Validator) {
    let errors = form_validator
        .validate(TaskDraft::new())
        .expect_err("empty candidate should fail");

    for error in errors.errors() {
        assert_eq!(error.code(), REQUIRED);
    }
    assert!(errors.messages().contains(&"title: required".to_owned()));
    assert!(errors.messages().contains(&"dueDate: required".to_owned()));
}

#[rstest]
fn api_profile_also_requires_the_creation_date(api_validator: Validator) {
    let draft = TaskDraft {
        creation_date: None,
        ..complete_draft()
    };
    let errors = api_validator
        .validate(draft)
        .expect_err("missing creation date should fail at the API boundary");

    assert_eq!(errors.fields(), vec![TaskField::CreationDate]);
}

#[rstest]
fn form_profile_leaves_the_creation_date_to_the_service(form_validator: Validator) {
    let draft = TaskDraft {
        creation_date: None,
        ..complete_draft()
    };

    let validated = form_validator
        .validate(draft)
        .expect("form candidate without creation date should pass");
    assert_eq!(validated.creation_date, None);
}

#[rstest]
fn description_requirement_is_configurable() {
    let relaxed = Validator::with_config(
        ValidationConfig::form().with_description_required(false),
    );
    let draft = TaskDraft {
        description: None,
        ..complete_draft()
    };

    let validated = relaxed
        .validate(draft)
        .expect("relaxed profile should accept a missing description");
    assert_eq!(validated.description, None);
}

#[rstest]
fn check_reports_without_consuming_the_candidate(form_validator: Validator) {
    let draft = TaskDraft::new().with_title("only a title");

    let result = form_validator.check(&draft);

    assert!(result.is_err());
    assert_eq!(draft.title.as_deref(), Some("only a title"));
}
