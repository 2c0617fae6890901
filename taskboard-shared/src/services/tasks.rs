//! Task access flow
//!
//! All task reads and mutations go through this service. Callers arrive with
//! a trusted user id (the transport's authentication middleware established
//! it); this flow resolves the target task and enforces ownership exactly
//! once, in [`TaskService::authorize`], before any operation touches it.

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Error;
use crate::models::task::{Task, TaskListParams, TaskPage};
use crate::validation;

/// Message when a task id does not resolve, whether unparseable or absent
pub const TASK_NOT_FOUND_MSG: &str = "No task exists with that id.";

/// Message when a caller acts on a task they do not own
pub const TASK_ACTION_UNAUTHORIZED_MSG: &str =
    "Only the task creator can read, update or delete it.";

/// Task access orchestration
#[derive(Clone)]
pub struct TaskService {
    db: PgPool,
}

impl TaskService {
    /// Creates the service with its database pool.
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Creates a task owned by the caller.
    pub async fn create(&self, owner_id: Uuid, content: &str) -> Result<Task, Error> {
        validation::validate_task_content(content)?;
        Ok(Task::create(&self.db, owner_id, content).await?)
    }

    /// Fetches one of the caller's tasks by id.
    pub async fn fetch(&self, caller: Uuid, task_id: &str) -> Result<Task, Error> {
        self.authorize(caller, task_id).await
    }

    /// Updates the content of one of the caller's tasks.
    ///
    /// Ownership is checked before the new content is validated or persisted.
    pub async fn update(&self, caller: Uuid, task_id: &str, content: &str) -> Result<Task, Error> {
        let task = self.authorize(caller, task_id).await?;
        validation::validate_task_content(content)?;
        Ok(Task::update_content(&self.db, task.id, content).await?)
    }

    /// Deletes one of the caller's tasks.
    pub async fn remove(&self, caller: Uuid, task_id: &str) -> Result<(), Error> {
        let task = self.authorize(caller, task_id).await?;
        Task::delete(&self.db, task.id).await?;
        Ok(())
    }

    /// Lists the caller's tasks with search, ordering, and clamped pagination.
    ///
    /// The listing is scoped to the caller at the query level; no ownership
    /// check per row is needed.
    pub async fn list(&self, caller: Uuid, params: &TaskListParams) -> Result<TaskPage, Error> {
        Ok(Task::list(&self.db, caller, params).await?)
    }

    /// Resolves a task id and enforces ownership.
    ///
    /// An id that does not parse as a UUID gets the same `NotFound` outcome
    /// as one with no row behind it, so probing cannot distinguish the two.
    /// A resolved task owned by someone else is `Unauthorized`.
    async fn authorize(&self, caller: Uuid, task_id: &str) -> Result<Task, Error> {
        let id = Uuid::parse_str(task_id)
            .map_err(|_| Error::NotFound(TASK_NOT_FOUND_MSG.to_string()))?;

        let task = Task::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| Error::NotFound(TASK_NOT_FOUND_MSG.to_string()))?;

        if task.owner_id != caller {
            return Err(Error::Unauthorized(
                TASK_ACTION_UNAUTHORIZED_MSG.to_string(),
            ));
        }

        Ok(task)
    }
}
