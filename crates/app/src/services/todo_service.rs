//! Todo service — use-cases for managing todos.

use todo_domain::error::{NotFoundError, TodoError};
use todo_domain::id::TodoId;
use todo_domain::todo::{Todo, TodoDraft};

use crate::ports::TodoRepository;

/// Application service for todo CRUD operations.
pub struct TodoService<R> {
    repo: R,
}

fn not_found(id: TodoId) -> TodoError {
    NotFoundError {
        entity: "Todo",
        id: id.to_string(),
    }
    .into()
}

impl<R: TodoRepository> TodoService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all todos.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_todos(&self) -> Result<Vec<Todo>, TodoError> {
        self.repo.get_all().await
    }

    /// Persist a new todo and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create_todo(&self, draft: TodoDraft) -> Result<Todo, TodoError> {
        let todo = self.repo.create(draft).await?;
        tracing::debug!(id = %todo.id, "todo created");
        Ok(todo)
    }

    /// Look up a todo by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NotFound`] when no todo with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_todo(&self, id: TodoId) -> Result<Todo, TodoError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Overwrite the title and completion flag of an existing todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NotFound`] when no todo with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_todo(&self, id: TodoId, draft: TodoDraft) -> Result<Todo, TodoError> {
        self.repo
            .update(id, draft)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete a todo by id.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NotFound`] when no todo with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_todo(&self, id: TodoId) -> Result<(), TodoError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}
