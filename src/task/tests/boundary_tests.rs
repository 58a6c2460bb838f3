//! Boundary mapping tests for the JSON and form adapters.

use crate::task::adapters::form::TaskForm;
use crate::task::adapters::rest::{status_for, ErrorBody, TaskDto};
use crate::task::domain::{
    PersistedTaskData, Task, TaskDraft, TaskId, TaskStatus, ValidationErrors,
};
use crate::task::ports::TaskRepositoryError;
use crate::task::services::TaskServiceError;
use crate::task::tests::fixtures::date;
use crate::task::validation::Validator;
use rstest::rstest;
use serde_json::json;

fn sample_task() -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(1),
        title: "a task to do".to_owned(),
        description: Some("task description".to_owned()),
        status: TaskStatus::Pending,
        due_date: date(2026, 8, 26),
        creation_date: date(2026, 8, 24),
    })
}

#[rstest]
fn task_serialises_with_iso_dates_and_status_names() {
    let dto = TaskDto::from(&sample_task());
    let value = serde_json::to_value(&dto).expect("serialisation should succeed");

    assert_eq!(
        value,
        json!({
            "id": 1,
            "title": "a task to do",
            "description": "task description",
            "status": "PENDING",
            "dueDate": "2026-08-26",
            "creationDate": "2026-08-24",
        })
    );
}

#[rstest]
fn inbound_bodies_may_omit_any_field() {
    let dto: TaskDto = serde_json::from_value(json!({
        "title": "a task to do",
        "status": "CANCELED",
    }))
    .expect("deserialisation should succeed");

    let draft = dto.into_draft();
    assert_eq!(draft.title.as_deref(), Some("a task to do"));
    assert_eq!(draft.status, Some(TaskStatus::Canceled));
    assert_eq!(draft.due_date, None);
    assert_eq!(draft.creation_date, None);
}

#[rstest]
fn unknown_status_names_are_rejected_at_deserialisation() {
    let result: Result<TaskDto, _> = serde_json::from_value(json!({ "status": "DONE" }));
    assert!(result.is_err());
}

#[rstest]
fn not_found_failures_produce_a_single_message_body() {
    let error = TaskServiceError::NotFound(TaskId::new(99));

    let body = ErrorBody::from(&error);

    assert_eq!(body.errors, vec!["no task with id 99 is available"]);
    assert_eq!(status_for(&error), 404);
}

#[rstest]
fn validation_failures_produce_one_message_per_field() {
    let errors = Validator::new()
        .validate(TaskDraft::new().with_status(TaskStatus::Pending))
        .expect_err("incomplete candidate should fail");
    let error = TaskServiceError::Validation(errors);

    let body = ErrorBody::from(&error);

    assert_eq!(
        body.errors,
        vec!["title: required", "description: required", "dueDate: required"]
    );
    assert_eq!(status_for(&error), 400);
}

#[rstest]
fn repository_failures_map_to_a_server_error() {
    let error = TaskServiceError::Repository(TaskRepositoryError::persistence(
        std::io::Error::other("boom"),
    ));
    assert_eq!(status_for(&error), 500);
}

#[rstest]
fn error_body_round_trips_as_json() {
    let body = ErrorBody {
        errors: vec!["title: required".to_owned()],
    };
    let value = serde_json::to_value(&body).expect("serialisation should succeed");
    assert_eq!(value, json!({ "errors": ["title: required"] }));
}

#[rstest]
fn form_submissions_map_to_typed_candidates() {
    let form = TaskForm {
        title: Some("a task to do".to_owned()),
        description: Some("task description".to_owned()),
        status: Some("pending".to_owned()),
        due_date: Some("2026-08-26".to_owned()),
        creation_date: None,
    };

    let draft = form.into_draft();

    assert_eq!(draft.title.as_deref(), Some("a task to do"));
    assert_eq!(draft.status, Some(TaskStatus::Pending));
    assert_eq!(draft.due_date, Some(date(2026, 8, 26)));
    assert_eq!(draft.creation_date, None);
}

#[rstest]
fn blank_form_fields_count_as_absent() {
    let form = TaskForm {
        title: Some("   ".to_owned()),
        description: Some(String::new()),
        status: Some(String::new()),
        due_date: None,
        creation_date: None,
    };

    assert_eq!(form.into_draft(), TaskDraft::new());
}

#[rstest]
fn malformed_form_values_surface_as_required_fields() {
    let form = TaskForm {
        title: Some("a task to do".to_owned()),
        description: Some("task description".to_owned()),
        status: Some("NOT_A_STATUS".to_owned()),
        due_date: Some("26/08/2026".to_owned()),
        creation_date: None,
    };

    let errors: ValidationErrors = Validator::new()
        .validate(form.into_draft())
        .expect_err("malformed values should fail validation");

    let messages = errors.messages();
    assert!(messages.contains(&"status: required".to_owned()));
    assert!(messages.contains(&"dueDate: required".to_owned()));
}
