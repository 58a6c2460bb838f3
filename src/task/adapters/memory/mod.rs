//! In-memory repository for tests and lightweight embedding.

mod repository;

pub use repository::InMemoryTaskRepository;
