//! Application services for task maintenance.

mod maintenance;

pub use maintenance::{TaskService, TaskServiceError, TaskServiceResult};
