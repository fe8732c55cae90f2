//! # todo-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the driven port `TodoRepository` that storage adapters implement
//! - Define the driving use-case struct `TodoService` (list, create, get,
//!   update, delete)
//! - Turn absent lookups into typed not-found errors so adapters never see a
//!   missing record as success
//!
//! ## Dependency rule
//! Depends on `todo-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
