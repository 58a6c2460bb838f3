//! `PostgreSQL` repository implementation for task persistence.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        OverdueBoundary, PersistedTaskData, Task, TaskId, TaskRecord, TaskStatus, OVERDUE_BOUNDARY,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    query::{PageRequest, TaskPage},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn save(&self, record: TaskRecord) -> TaskRepositoryResult<Task> {
        let target = record.id;
        let row = to_row(record);

        self.run_blocking(move |connection| {
            let saved = match target {
                None => diesel::insert_into(tasks::table)
                    .values(&row)
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(connection)
                    .map_err(TaskRepositoryError::persistence)?,
                Some(id) => diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
                    .set(&row)
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(connection)
                    .optional()
                    .map_err(TaskRepositoryError::persistence)?
                    .ok_or(TaskRepositoryError::NotFound(id))?,
            };
            row_to_task(saved)
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_all(&self, page: PageRequest) -> TaskRepositoryResult<TaskPage> {
        self.run_blocking(move |connection| {
            let total = tasks::table
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;

            let rows = tasks::table
                .order((tasks::due_date.desc(), tasks::id.asc()))
                .offset(page_offset(page)?)
                .limit(page_limit(page)?)
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;

            rows_to_page(rows, page, total)
        })
        .await
    }

    async fn find_due_before_with_status(
        &self,
        reference: NaiveDate,
        status: TaskStatus,
        page: PageRequest,
    ) -> TaskRepositoryResult<TaskPage> {
        self.run_blocking(move |connection| {
            let base = tasks::table
                .filter(tasks::status.eq(status.as_str()))
                .into_boxed();
            let filtered = match OVERDUE_BOUNDARY {
                OverdueBoundary::Strict => base.filter(tasks::due_date.lt(reference)),
                OverdueBoundary::Inclusive => base.filter(tasks::due_date.le(reference)),
            };

            let total = count_filtered(connection, reference, status)?;

            let rows = filtered
                .order((tasks::due_date.desc(), tasks::id.asc()))
                .offset(page_offset(page)?)
                .limit(page_limit(page)?)
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;

            rows_to_page(rows, page, total)
        })
        .await
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if removed == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn count_filtered(
    connection: &mut PgConnection,
    reference: NaiveDate,
    status: TaskStatus,
) -> TaskRepositoryResult<i64> {
    let base = tasks::table
        .filter(tasks::status.eq(status.as_str()))
        .into_boxed();
    let counted = match OVERDUE_BOUNDARY {
        OverdueBoundary::Strict => base.filter(tasks::due_date.lt(reference)),
        OverdueBoundary::Inclusive => base.filter(tasks::due_date.le(reference)),
    };
    counted
        .count()
        .get_result::<i64>(connection)
        .map_err(TaskRepositoryError::persistence)
}

fn to_row(record: TaskRecord) -> NewTaskRow {
    NewTaskRow {
        title: record.title,
        description: record.description,
        status: record.status.as_str().to_owned(),
        due_date: record.due_date,
        creation_date: record.creation_date,
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let status =
        TaskStatus::try_from(row.status.as_str()).map_err(TaskRepositoryError::persistence)?;
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(row.id),
        title: row.title,
        description: row.description,
        status,
        due_date: row.due_date,
        creation_date: row.creation_date,
    }))
}

fn rows_to_page(
    rows: Vec<TaskRow>,
    page: PageRequest,
    total: i64,
) -> TaskRepositoryResult<TaskPage> {
    let items = rows
        .into_iter()
        .map(row_to_task)
        .collect::<TaskRepositoryResult<Vec<Task>>>()?;
    let total_items = usize::try_from(total).map_err(TaskRepositoryError::persistence)?;
    Ok(TaskPage::new(items, page, total_items))
}

fn page_offset(page: PageRequest) -> TaskRepositoryResult<i64> {
    i64::try_from(page.offset()).map_err(TaskRepositoryError::persistence)
}

fn page_limit(page: PageRequest) -> TaskRepositoryResult<i64> {
    i64::try_from(page.size()).map_err(TaskRepositoryError::persistence)
}
