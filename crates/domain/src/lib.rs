//! # todo-domain
//!
//! Pure domain model for the todod task-list service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define the **Todo** entity and the **draft** payload used to create or
//!   overwrite one
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod todo;
