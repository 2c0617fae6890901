//! Task model and database operations
//!
//! The task store: create, update, delete, and look up tasks, plus the
//! owner-scoped paginated listing. Every task has exactly one owner for its
//! entire lifetime; ownership is never transferred, and listing never crosses
//! owner boundaries.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE tasks (
//!     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
//!     owner_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
//!     content VARCHAR(100) NOT NULL,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
//!     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```
//!
//! # Listing semantics
//!
//! - Results are scoped strictly to the owner.
//! - A non-empty search term filters to tasks whose content contains it,
//!   case-insensitively (PostgreSQL `ILIKE`).
//! - Results are ordered by `created_at`, ascending or descending.
//! - `page` and `limit` below 1 (or non-numeric at the transport) fall back
//!   to the defaults 1 and 5.
//! - A page past the end is clamped down to the last page before fetching,
//!   and the effective page number is returned with the results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Default page number when the requested one is missing or invalid
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size when the requested one is missing or invalid
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// Task owned by a single user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID
    pub id: Uuid,

    /// Owning user; immutable after creation
    pub owner_id: Uuid,

    /// Task text, 1-100 characters
    pub content: String,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last updated
    pub updated_at: DateTime<Utc>,
}

/// Sort order for task listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Oldest first
    Asc,

    /// Newest first
    Desc,
}

impl SortDirection {
    /// Parses a query-parameter value; anything other than "desc" is `Asc`.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    /// SQL keyword for this direction.
    ///
    /// Only ever interpolated from these two fixed strings; the direction is
    /// never taken verbatim from user input.
    fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Normalized parameters for a task listing
#[derive(Debug, Clone)]
pub struct TaskListParams {
    /// Free-text search term; empty means no filter
    pub search: String,

    /// Requested page, 1-based
    pub page: i64,

    /// Page size
    pub limit: i64,

    /// Order by creation time
    pub direction: SortDirection,
}

impl TaskListParams {
    /// Builds listing parameters from raw request values.
    ///
    /// `page` and `limit` are `None` when missing or non-numeric; those and
    /// any value below 1 reset to the defaults (page 1, size 5).
    pub fn new(
        page: Option<i64>,
        limit: Option<i64>,
        direction: Option<&str>,
        search: impl Into<String>,
    ) -> Self {
        Self {
            search: search.into(),
            page: normalize_positive(page, DEFAULT_PAGE),
            limit: normalize_positive(limit, DEFAULT_PAGE_SIZE),
            direction: SortDirection::from_param(direction),
        }
    }
}

impl Default for TaskListParams {
    fn default() -> Self {
        Self::new(None, None, None, "")
    }
}

/// One page of a task listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPage {
    /// Tasks on this page
    pub tasks: Vec<Task>,

    /// The page actually served, after clamping
    pub page: i64,
}

/// Resets a missing or non-positive value to its default.
fn normalize_positive(value: Option<i64>, default: i64) -> i64 {
    match value {
        Some(v) if v >= 1 => v,
        _ => default,
    }
}

/// Clamps a requested page to the last available page.
///
/// The last page is `ceil(total / limit)`, but never below 1, so an empty
/// result set still resolves to page 1. A request past the end is served the
/// last page instead of an empty one.
///
/// The ceiling is computed as `(total - 1) / limit + 1`, which cannot
/// overflow: `limit` is client-controlled and may be as large as `i64::MAX`,
/// so the `total + limit - 1` form is unusable here.
fn clamp_page(page: i64, total: i64, limit: i64) -> i64 {
    let max_page = if total > 0 {
        (total - 1) / limit + 1
    } else {
        1
    };
    page.min(max_page)
}

impl Task {
    /// Creates a task for an owner.
    pub async fn create(pool: &PgPool, owner_id: Uuid, content: &str) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (owner_id, content)
            VALUES ($1, $2)
            RETURNING id, owner_id, content, created_at, updated_at
            "#,
        )
        .bind(owner_id)
        .bind(content)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID, `None` if absent.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, owner_id, content, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Replaces a task's content and bumps `updated_at`.
    pub async fn update_content(
        pool: &PgPool,
        id: Uuid,
        content: &str,
    ) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET content = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, owner_id, content, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(content)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Deletes a task by ID.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Lists an owner's tasks with search, ordering, and clamped pagination.
    ///
    /// Counts the matching tasks first, clamps the requested page to the last
    /// page, then fetches that page. The returned [`TaskPage`] carries the
    /// page that was actually served.
    pub async fn list(
        pool: &PgPool,
        owner_id: Uuid,
        params: &TaskListParams,
    ) -> Result<TaskPage, sqlx::Error> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM tasks
            WHERE owner_id = $1
              AND ($2 = '' OR content ILIKE '%' || $2 || '%')
            "#,
        )
        .bind(owner_id)
        .bind(&params.search)
        .fetch_one(pool)
        .await?;

        let page = clamp_page(params.page, total, params.limit);
        let offset = (page - 1) * params.limit;

        let query = format!(
            r#"
            SELECT id, owner_id, content, created_at, updated_at
            FROM tasks
            WHERE owner_id = $1
              AND ($2 = '' OR content ILIKE '%' || $2 || '%')
            ORDER BY created_at {}
            LIMIT $3 OFFSET $4
            "#,
            params.direction.as_sql()
        );

        let tasks = sqlx::query_as::<_, Task>(&query)
            .bind(owner_id)
            .bind(&params.search)
            .bind(params.limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        Ok(TaskPage { tasks, page })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_positive() {
        assert_eq!(normalize_positive(None, DEFAULT_PAGE), 1);
        assert_eq!(normalize_positive(Some(0), DEFAULT_PAGE), 1);
        assert_eq!(normalize_positive(Some(-3), DEFAULT_PAGE_SIZE), 5);
        assert_eq!(normalize_positive(Some(1), DEFAULT_PAGE), 1);
        assert_eq!(normalize_positive(Some(42), DEFAULT_PAGE_SIZE), 42);
    }

    #[test]
    fn test_clamp_page_within_range() {
        // 12 tasks, 5 per page -> 3 pages
        assert_eq!(clamp_page(1, 12, 5), 1);
        assert_eq!(clamp_page(3, 12, 5), 3);
    }

    #[test]
    fn test_clamp_page_past_end() {
        assert_eq!(clamp_page(9, 12, 5), 3);
        // Exact multiple: 10 tasks, 5 per page -> 2 pages
        assert_eq!(clamp_page(5, 10, 5), 2);
    }

    #[test]
    fn test_clamp_page_extreme_limit() {
        // A huge client-supplied limit must not overflow the ceiling math;
        // everything fits on page 1
        assert_eq!(clamp_page(1, 5, i64::MAX), 1);
        assert_eq!(clamp_page(i64::MAX, 5, i64::MAX), 1);
        assert_eq!(clamp_page(i64::MAX, i64::MAX, 1), i64::MAX);
    }

    #[test]
    fn test_clamp_page_empty_set_is_page_one() {
        assert_eq!(clamp_page(7, 0, 5), 1);
        assert_eq!(clamp_page(1, 0, 5), 1);
    }

    #[test]
    fn test_params_defaults() {
        let params = TaskListParams::default();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 5);
        assert_eq!(params.direction, SortDirection::Asc);
        assert!(params.search.is_empty());
    }

    #[test]
    fn test_params_reset_non_positive_values() {
        let params = TaskListParams::new(Some(0), Some(-1), Some("desc"), "milk");
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 5);
        assert_eq!(params.direction, SortDirection::Desc);
        assert_eq!(params.search, "milk");
    }

    #[test]
    fn test_sort_direction_parsing() {
        assert_eq!(SortDirection::from_param(Some("desc")), SortDirection::Desc);
        assert_eq!(SortDirection::from_param(Some("DESC")), SortDirection::Desc);
        assert_eq!(SortDirection::from_param(Some("asc")), SortDirection::Asc);
        // Anything unrecognized defaults to ascending
        assert_eq!(SortDirection::from_param(Some("sideways")), SortDirection::Asc);
        assert_eq!(SortDirection::from_param(None), SortDirection::Asc);
    }

    #[test]
    fn test_sort_direction_sql() {
        assert_eq!(SortDirection::Asc.as_sql(), "ASC");
        assert_eq!(SortDirection::Desc.as_sql(), "DESC");
    }
}
