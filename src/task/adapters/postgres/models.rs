//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i32,
    /// Task title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Lifecycle status under its canonical name.
    pub status: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// Creation date.
    pub creation_date: NaiveDate,
}

/// Insert/replace model for task records; the identifier is assigned by
/// the serial column on insert.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Lifecycle status under its canonical name.
    pub status: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// Creation date.
    pub creation_date: NaiveDate,
}
