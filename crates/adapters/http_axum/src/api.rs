//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod todos;

use axum::Router;
use axum::routing::get;

use todo_app::ports::TodoRepository;

use crate::state::AppState;

/// Build the `/api` routes.
///
/// Paths are absolute so the collection route answers on `/api` itself.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: TodoRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/api", get(todos::list::<R>).post(todos::create::<R>))
        .route(
            "/api/{id}",
            get(todos::get::<R>)
                .patch(todos::update::<R>)
                .delete(todos::delete::<R>),
        )
}
