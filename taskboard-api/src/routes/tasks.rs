//! Task endpoints
//!
//! All routes here run behind the bearer-auth middleware, so the caller
//! arrives as a resolved [`CurrentUser`]. Ownership of individual tasks is
//! enforced inside the shared [`TaskService`], once, before any operation.
//!
//! # Endpoints
//!
//! - `POST   /v1/tasks` - Create a task
//! - `GET    /v1/tasks` - List tasks (`page`, `limit`, `direction`, `q`)
//! - `GET    /v1/tasks/:task_id` - Fetch one task
//! - `PUT    /v1/tasks/:task_id` - Update a task's content
//! - `DELETE /v1/tasks/:task_id` - Delete a task
//!
//! [`TaskService`]: taskboard_shared::services::TaskService

use crate::{app::AppState, error::ApiResult, middleware::auth::CurrentUser};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use taskboard_shared::models::task::{Task, TaskListParams};

/// Create request
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Task text, 1-100 characters
    pub content: String,
}

/// Update request
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    /// Replacement task text, 1-100 characters
    pub content: String,
}

/// Single-task response
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskResponse {
    /// The task
    pub task: Task,
}

/// Listing response
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskListResponse {
    /// Tasks on the served page
    pub tasks: Vec<Task>,

    /// The page actually served, after clamping
    pub page: i64,
}

/// Listing query parameters
///
/// Everything arrives as an optional string; values that do not parse as
/// positive integers fall back to the defaults rather than rejecting the
/// request, matching the listing contract.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Requested page, default 1
    pub page: Option<String>,

    /// Page size, default 5
    pub limit: Option<String>,

    /// "asc" or "desc"; anything else means "asc"
    pub direction: Option<String>,

    /// Free-text search term
    pub q: Option<String>,
}

impl ListQuery {
    fn into_params(self) -> TaskListParams {
        TaskListParams::new(
            self.page.as_deref().and_then(|v| v.parse::<i64>().ok()),
            self.limit.as_deref().and_then(|v| v.parse::<i64>().ok()),
            self.direction.as_deref(),
            self.q.unwrap_or_default(),
        )
    }
}

/// Creates a task owned by the caller.
///
/// # Errors
///
/// - `400 Bad Request`: content outside 1-100 characters
pub async fn create_task(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    let task = state.tasks.create(user.id, &req.content).await?;

    Ok((StatusCode::CREATED, Json(TaskResponse { task })))
}

/// Fetches one of the caller's tasks.
///
/// # Errors
///
/// - `404 Not Found`: id unparseable or no such task
/// - `401 Unauthorized`: task belongs to a different user
pub async fn get_task(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(task_id): Path<String>,
) -> ApiResult<Json<TaskResponse>> {
    let task = state.tasks.fetch(user.id, &task_id).await?;

    Ok(Json(TaskResponse { task }))
}

/// Updates the content of one of the caller's tasks.
///
/// # Errors
///
/// - `404 Not Found` / `401 Unauthorized`: as for fetch
/// - `400 Bad Request`: new content outside 1-100 characters
pub async fn update_task(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(task_id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task = state.tasks.update(user.id, &task_id, &req.content).await?;

    Ok(Json(TaskResponse { task }))
}

/// Deletes one of the caller's tasks. Success is an empty 200 body.
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(task_id): Path<String>,
) -> ApiResult<StatusCode> {
    state.tasks.remove(user.id, &task_id).await?;

    Ok(StatusCode::OK)
}

/// Lists the caller's tasks.
///
/// A requested page past the last one is clamped down; the response's `page`
/// field reports the page actually served.
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<TaskListResponse>> {
    let params = query.into_params();
    let page = state.tasks.list(user.id, &params).await?;

    Ok(Json(TaskListResponse {
        tasks: page.tasks,
        page: page.page,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_shared::models::task::SortDirection;

    #[test]
    fn test_list_query_defaults() {
        let params = ListQuery::default().into_params();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 5);
        assert_eq!(params.direction, SortDirection::Asc);
        assert!(params.search.is_empty());
    }

    #[test]
    fn test_list_query_non_integer_falls_back() {
        let query = ListQuery {
            page: Some("abc".to_string()),
            limit: Some("2.5".to_string()),
            direction: Some("desc".to_string()),
            q: Some("milk".to_string()),
        };

        let params = query.into_params();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 5);
        assert_eq!(params.direction, SortDirection::Desc);
        assert_eq!(params.search, "milk");
    }

    #[test]
    fn test_list_query_valid_values_pass_through() {
        let query = ListQuery {
            page: Some("3".to_string()),
            limit: Some("10".to_string()),
            direction: None,
            q: None,
        };

        let params = query.into_params();
        assert_eq!(params.page, 3);
        assert_eq!(params.limit, 10);
        assert_eq!(params.direction, SortDirection::Asc);
    }
}
