//! Service layer orchestrating validation, stamping, and persistence.

use crate::task::{
    domain::{Task, TaskDraft, TaskId, TaskRecord, TaskStatus, ValidatedDraft, ValidationErrors},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    query::{FindOutcome, PageRequest, TaskPage},
    validation::Validator,
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for task maintenance operations.
///
/// Failures are surfaced verbatim to the calling boundary; the service
/// never retries or recovers, and no failure outlives the operation that
/// produced it.
#[derive(Debug, Clone, Error)]
pub enum TaskServiceError {
    /// The candidate failed the required-field rules; nothing was
    /// written.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// An update or delete named an identifier with no stored task.
    #[error("no task with id {0} is available")]
    NotFound(TaskId),

    /// The repository failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task maintenance operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task maintenance orchestration service.
///
/// Stateless: every call is an independent transaction against the
/// repository, so one instance may serve concurrent callers. The clock is
/// injected to keep creation-date stamping and the overdue reference date
/// deterministic under test.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    validator: Validator,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default validation profile.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_validator(repository, clock, Validator::new())
    }

    /// Creates a service with an explicit validator, letting a boundary
    /// choose its validation profile.
    #[must_use]
    pub const fn with_validator(repository: Arc<R>, clock: Arc<C>, validator: Validator) -> Self {
        Self {
            repository,
            clock,
            validator,
        }
    }

    /// Returns the validator this service applies on its write paths, so
    /// boundaries can run the same checks for early feedback.
    #[must_use]
    pub const fn validator(&self) -> &Validator {
        &self.validator
    }

    fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }

    /// Creates a task: stamps the creation date with "today", validates
    /// the candidate, and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when required fields are
    /// missing (nothing is written) or [`TaskServiceError::Repository`]
    /// when persistence fails.
    pub async fn create_task(&self, draft: TaskDraft) -> TaskServiceResult<Task> {
        let stamped = TaskDraft {
            creation_date: Some(self.today()),
            ..draft
        };
        let validated = self.validator.validate(stamped)?;
        let creation_date = validated.creation_date.unwrap_or_else(|| self.today());
        let record = record_from(None, validated, creation_date);

        let task = self.repository.save(record).await?;
        info!(id = %task.id(), "task created");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no such task exists; the caller decides
    /// whether absence is an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_task_by_id(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        let result: TaskRepositoryResult<Option<Task>> = self.repository.find_by_id(id).await;
        Ok(result?)
    }

    /// Returns one page of all tasks, due date descending.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the listing fails.
    pub async fn get_tasks(&self, page: PageRequest) -> TaskServiceResult<TaskPage> {
        Ok(self.repository.find_all(page).await?)
    }

    /// Returns one page of all tasks collapsed per the single-result
    /// rule.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the listing fails.
    pub async fn find_tasks(&self, page: PageRequest) -> TaskServiceResult<FindOutcome> {
        Ok(self.get_tasks(page).await?.into_outcome())
    }

    /// Returns one page of the overdue tasks: still `PENDING` with a due
    /// date that has passed relative to "today" under the configured
    /// boundary.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the listing fails.
    pub async fn get_overdue_tasks(&self, page: PageRequest) -> TaskServiceResult<TaskPage> {
        let reference = self.today();
        debug!(%reference, "listing overdue tasks");
        Ok(self
            .repository
            .find_due_before_with_status(reference, TaskStatus::Pending, page)
            .await?)
    }

    /// Returns one page of the overdue tasks collapsed per the
    /// single-result rule.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the listing fails.
    pub async fn find_overdue_tasks(&self, page: PageRequest) -> TaskServiceResult<FindOutcome> {
        Ok(self.get_overdue_tasks(page).await?.into_outcome())
    }

    /// Replaces an existing task with the validated candidate.
    ///
    /// Every field of the stored task is overwritten (the identifier is
    /// preserved). A candidate that carries a creation date overwrites
    /// the stored one; a candidate without one keeps it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when required fields are
    /// missing, [`TaskServiceError::NotFound`] when no task holds the
    /// identifier — an update asserts existence — or
    /// [`TaskServiceError::Repository`] when persistence fails. The
    /// store is left unchanged on every failure path.
    pub async fn update_task(&self, id: TaskId, draft: TaskDraft) -> TaskServiceResult<Task> {
        let validated = self.validator.validate(draft)?;

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let creation_date = validated
            .creation_date
            .unwrap_or_else(|| existing.creation_date());
        let record = record_from(Some(id), validated, creation_date);

        let task = self.repository.save(record).await?;
        info!(id = %task.id(), "task updated");
        Ok(task)
    }

    /// Deletes a task after confirming it exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task holds the
    /// identifier or [`TaskServiceError::Repository`] when the delete
    /// fails.
    pub async fn delete_task_by_id(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        self.repository.delete_by_id(id).await?;
        info!(%id, "task deleted");
        Ok(())
    }
}

fn not_found(id: TaskId) -> TaskServiceError {
    warn!(%id, "task not found");
    TaskServiceError::NotFound(id)
}

fn record_from(id: Option<TaskId>, validated: ValidatedDraft, creation_date: NaiveDate) -> TaskRecord {
    TaskRecord {
        id,
        title: validated.title,
        description: validated.description,
        status: validated.status,
        due_date: validated.due_date,
        creation_date,
    }
}
