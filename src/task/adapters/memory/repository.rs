//! Thread-safe in-memory task repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskRecord, TaskStatus, OVERDUE_BOUNDARY},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    query::{listing_order, PageRequest, TaskPage},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are assigned from a monotonic counter, mirroring the
/// serial primary key of the relational adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    next_id: i32,
}

impl InMemoryTaskState {
    fn assign_id(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId::new(self.next_id)
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn materialize(id: TaskId, record: TaskRecord) -> Task {
    Task::from_persisted(PersistedTaskData {
        id,
        title: record.title,
        description: record.description,
        status: record.status,
        due_date: record.due_date,
        creation_date: record.creation_date,
    })
}

/// Sorts matches into listing order and cuts the requested page, keeping
/// the total over the whole match set.
fn page_of(mut matches: Vec<Task>, page: PageRequest) -> TaskPage {
    matches.sort_by(listing_order);
    let total = matches.len();
    let items: Vec<Task> = matches
        .into_iter()
        .skip(page.offset())
        .take(page.size())
        .collect();
    TaskPage::new(items, page, total)
}

fn lock_error(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, record: TaskRecord) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_error)?;
        let id = match record.id {
            Some(id) => {
                if !state.tasks.contains_key(&id) {
                    return Err(TaskRepositoryError::NotFound(id));
                }
                id
            }
            None => state.assign_id(),
        };
        let task = materialize(id, record);
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_all(&self, page: PageRequest) -> TaskRepositoryResult<TaskPage> {
        let state = self.state.read().map_err(lock_error)?;
        let matches: Vec<Task> = state.tasks.values().cloned().collect();
        Ok(page_of(matches, page))
    }

    async fn find_due_before_with_status(
        &self,
        reference: NaiveDate,
        status: TaskStatus,
        page: PageRequest,
    ) -> TaskRepositoryResult<TaskPage> {
        let state = self.state.read().map_err(lock_error)?;
        let matches: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| {
                task.status() == status && OVERDUE_BOUNDARY.includes(task.due_date(), reference)
            })
            .cloned()
            .collect();
        Ok(page_of(matches, page))
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}
