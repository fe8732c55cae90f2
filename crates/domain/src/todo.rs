//! Todo — a single task with a title and a completion flag.

use serde::{Deserialize, Serialize};

use crate::id::TodoId;

/// A stored task.
///
/// `completed` is nullable: a todo created without the flag keeps `None`
/// until a client sets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: Option<bool>,
}

/// Client-supplied fields for creating a todo or overwriting an existing one.
///
/// Any `id` present in the payload is ignored; identity comes from the store
/// or the request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDraft {
    pub title: String,
    pub completed: Option<bool>,
}

impl TodoDraft {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: None,
        }
    }

    #[must_use]
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Attach an identity, producing the stored form.
    #[must_use]
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            completed: self.completed,
        }
    }
}

impl Todo {
    /// Replace `title` and `completed` with the draft's values.
    ///
    /// Both fields are overwritten, including resetting `completed` to
    /// `None` when the draft omits it. `id` is untouched.
    pub fn overwrite(&mut self, draft: TodoDraft) {
        self.title = draft.title;
        self.completed = draft.completed;
    }
}
