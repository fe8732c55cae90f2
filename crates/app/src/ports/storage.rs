//! Storage port — repository trait for persistence.

use std::future::Future;

use todo_domain::error::TodoError;
use todo_domain::id::TodoId;
use todo_domain::todo::{Todo, TodoDraft};

/// Repository for persisting and querying [`Todo`]s.
///
/// Implementations own transaction demarcation: `update` and `delete` look
/// the record up and mutate it atomically, reporting absence instead of
/// failing.
pub trait TodoRepository {
    /// Store a new todo, letting the store assign its id.
    fn create(&self, draft: TodoDraft) -> impl Future<Output = Result<Todo, TodoError>> + Send;

    /// Get a todo by id.
    fn get_by_id(&self, id: TodoId)
    -> impl Future<Output = Result<Option<Todo>, TodoError>> + Send;

    /// Get every stored todo, in no particular order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Todo>, TodoError>> + Send;

    /// Overwrite `title` and `completed` of the todo with `id`.
    ///
    /// Resolves to `None` when no such todo exists.
    fn update(
        &self,
        id: TodoId,
        draft: TodoDraft,
    ) -> impl Future<Output = Result<Option<Todo>, TodoError>> + Send;

    /// Delete the todo with `id`.
    ///
    /// Resolves to `false` when no such todo exists.
    fn delete(&self, id: TodoId) -> impl Future<Output = Result<bool, TodoError>> + Send;
}
