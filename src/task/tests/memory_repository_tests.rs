//! Contract tests for the in-memory repository.

use crate::task::adapters::memory::InMemoryTaskRepository;
use crate::task::domain::{TaskId, TaskRecord, TaskStatus};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use crate::task::query::PageRequest;
use crate::task::tests::fixtures::date;
use chrono::NaiveDate;
use rstest::{fixture, rstest};

#[fixture]
fn repository() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

fn record(title: &str, status: TaskStatus, due: NaiveDate) -> TaskRecord {
    TaskRecord {
        id: None,
        title: title.to_owned(),
        description: Some("task description".to_owned()),
        status,
        due_date: due,
        creation_date: date(2026, 8, 1),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_assigns_sequential_identifiers(repository: InMemoryTaskRepository) {
    let first = repository
        .save(record("first", TaskStatus::Pending, date(2026, 8, 20)))
        .await
        .expect("insert should succeed");
    let second = repository
        .save(record("second", TaskStatus::Pending, date(2026, 8, 21)))
        .await
        .expect("insert should succeed");

    assert_eq!(first.id(), TaskId::new(1));
    assert_eq!(second.id(), TaskId::new(2));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_with_identifier_replaces_in_place(repository: InMemoryTaskRepository) {
    let stored = repository
        .save(record("before", TaskStatus::Pending, date(2026, 8, 20)))
        .await
        .expect("insert should succeed");

    let replacement = TaskRecord {
        id: Some(stored.id()),
        title: "after".to_owned(),
        description: None,
        status: TaskStatus::Completed,
        due_date: date(2026, 8, 22),
        creation_date: date(2026, 8, 2),
    };
    let updated = repository
        .save(replacement)
        .await
        .expect("update should succeed");

    assert_eq!(updated.id(), stored.id());
    assert_eq!(updated.title(), "after");
    assert_eq!(updated.description(), None);
    assert_eq!(updated.status(), TaskStatus::Completed);

    let page = repository
        .find_all(PageRequest::of_page(1))
        .await
        .expect("listing should succeed");
    assert_eq!(page.total_items(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_with_unknown_identifier_is_not_found(repository: InMemoryTaskRepository) {
    let phantom = TaskRecord {
        id: Some(TaskId::new(99)),
        ..record("phantom", TaskStatus::Pending, date(2026, 8, 20))
    };

    let result = repository.save(phantom).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::NotFound(id)) if id == TaskId::new(99)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_returns_none_for_missing_tasks(repository: InMemoryTaskRepository) {
    let found = repository
        .find_by_id(TaskId::new(1))
        .await
        .expect("lookup should succeed");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_all_orders_by_due_date_descending_then_id(repository: InMemoryTaskRepository) {
    for (title, due) in [
        ("oldest", date(2026, 8, 18)),
        ("tied-a", date(2026, 8, 20)),
        ("tied-b", date(2026, 8, 20)),
        ("newest", date(2026, 8, 25)),
    ] {
        repository
            .save(record(title, TaskStatus::Pending, due))
            .await
            .expect("insert should succeed");
    }

    let page = repository
        .find_all(PageRequest::of_page(1))
        .await
        .expect("listing should succeed");

    let titles: Vec<&str> = page.items().iter().map(|task| task.title()).collect();
    assert_eq!(titles, vec!["newest", "tied-a", "tied-b", "oldest"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_all_pages_carry_totals_over_the_whole_set(repository: InMemoryTaskRepository) {
    for day in 1..=7 {
        repository
            .save(record("task", TaskStatus::Pending, date(2026, 8, day)))
            .await
            .expect("insert should succeed");
    }

    let second_page = repository
        .find_all(PageRequest::new(2, 5))
        .await
        .expect("listing should succeed");

    assert_eq!(second_page.page(), 2);
    assert_eq!(second_page.items().len(), 2);
    assert_eq!(second_page.total_items(), 7);
    assert_eq!(second_page.total_pages(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overdue_filter_applies_status_and_strict_boundary(repository: InMemoryTaskRepository) {
    let reference = date(2026, 8, 24);
    repository
        .save(record("past pending", TaskStatus::Pending, date(2026, 8, 23)))
        .await
        .expect("insert should succeed");
    repository
        .save(record("due today", TaskStatus::Pending, reference))
        .await
        .expect("insert should succeed");
    repository
        .save(record("future pending", TaskStatus::Pending, date(2026, 8, 26)))
        .await
        .expect("insert should succeed");
    repository
        .save(record("past completed", TaskStatus::Completed, date(2026, 8, 20)))
        .await
        .expect("insert should succeed");

    let page = repository
        .find_due_before_with_status(reference, TaskStatus::Pending, PageRequest::of_page(1))
        .await
        .expect("filter should succeed");

    let titles: Vec<&str> = page.items().iter().map(|task| task.title()).collect();
    assert_eq!(titles, vec!["past pending"]);
    assert_eq!(page.total_items(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_record(repository: InMemoryTaskRepository) {
    let stored = repository
        .save(record("to delete", TaskStatus::Pending, date(2026, 8, 20)))
        .await
        .expect("insert should succeed");

    repository
        .delete_by_id(stored.id())
        .await
        .expect("delete should succeed");

    let found = repository
        .find_by_id(stored.id())
        .await
        .expect("lookup should succeed");
    assert!(found.is_none());

    let page = repository
        .find_all(PageRequest::of_page(1))
        .await
        .expect("listing should succeed");
    assert_eq!(page.total_items(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_of_a_missing_identifier_is_not_found(repository: InMemoryTaskRepository) {
    let result = repository.delete_by_id(TaskId::new(42)).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::NotFound(id)) if id == TaskId::new(42)
    ));
}
