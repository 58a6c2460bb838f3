//! Repository port for task persistence, lookup, and listing.

use crate::task::domain::{Task, TaskId, TaskRecord, TaskStatus};
use crate::task::query::{PageRequest, TaskPage};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract, polymorphic over backing technology.
///
/// Implementations must make `save` and `delete_by_id` atomic per record
/// and present a consistent, deterministically-ordered snapshot from the
/// listing operations; no further coordination is required of them.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Saves a record: inserts and assigns an identifier when
    /// `record.id` is `None`, otherwise replaces the stored task in full.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the record names an
    /// identifier that does not exist.
    async fn save(&self, record: TaskRecord) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist; absence is never an
    /// error here.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns one page of all tasks ordered by due date descending, ties
    /// broken by id ascending, with totals over the whole set.
    async fn find_all(&self, page: PageRequest) -> TaskRepositoryResult<TaskPage>;

    /// Returns one page of the tasks holding `status` whose due date falls
    /// before `reference` under the configured
    /// [`OVERDUE_BOUNDARY`](crate::task::domain::OVERDUE_BOUNDARY), in the
    /// same order as [`TaskRepository::find_all`].
    async fn find_due_before_with_status(
        &self,
        reference: NaiveDate,
        status: TaskStatus,
        page: PageRequest,
    ) -> TaskRepositoryResult<TaskPage>;

    /// Removes the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no such task exists.
    /// The service checks existence before delegating, so this is a
    /// last-line guard rather than a flow the caller should reach.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
