//! # todo-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON todo API under `/api`
//!   (`GET /api`, `POST /api`, `GET|PATCH|DELETE /api/{id}`)
//! - Serve a `/health` liveness probe
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `todo-app` (for port traits and services) and `todo-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
