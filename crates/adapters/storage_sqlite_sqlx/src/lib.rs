//! # todo-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `todo-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Demarcate transactions around read-then-write operations
//!
//! ## Dependency rule
//! Depends on `todo-app` (for port traits) and `todo-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod todo_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use todo_repo::SqliteTodoRepository;
