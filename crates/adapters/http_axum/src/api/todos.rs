//! JSON REST handlers for todos.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use todo_app::ports::TodoRepository;
use todo_domain::id::TodoId;
use todo_domain::todo::{Todo, TodoDraft};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Todo>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Todo>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Todo>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let todos = state.todo_service.list_todos().await?;
    Ok(ListResponse::Ok(Json(todos)))
}

/// `POST /api`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(draft): Json<TodoDraft>,
) -> Result<CreateResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let created = state.todo_service.create_todo(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `GET /api/:id`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let todo_id = TodoId::from_str(&id)?;
    let todo = state.todo_service.get_todo(todo_id).await?;
    Ok(GetResponse::Ok(Json(todo)))
}

/// `PATCH /api/:id`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(draft): Json<TodoDraft>,
) -> Result<GetResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let todo_id = TodoId::from_str(&id)?;
    let updated = state.todo_service.update_todo(todo_id, draft).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/:id`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let todo_id = TodoId::from_str(&id)?;
    state.todo_service.delete_todo(todo_id).await?;
    Ok(DeleteResponse::NoContent)
}
