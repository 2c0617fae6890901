//! Application state and router builder
//!
//! Defines the shared application state and builds the axum router with all
//! routes and middleware.
//!
//! # Router layout
//!
//! ```text
//! /
//! ├── /health                   # Health check (public)
//! └── /v1/
//!     ├── /auth/
//!     │   ├── POST /signup      # Register, returns {token}
//!     │   └── POST /login       # Authenticate, returns {token}
//!     └── /tasks/               # All require bearer authentication
//!         ├── POST   /          # Create task
//!         ├── GET    /          # List tasks (page, limit, direction, q)
//!         ├── GET    /:task_id  # Fetch one task
//!         ├── PUT    /:task_id  # Update content
//!         └── DELETE /:task_id  # Delete
//! ```

use crate::config::Config;
use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use taskboard_shared::services::{AuthService, TaskService};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
///
/// Cloned into each request handler via axum's `State` extractor. The service
/// flows receive their dependencies here, at construction time.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,

    /// Signup/login flow
    pub auth: AuthService,

    /// Task access flow
    pub tasks: TaskService,
}

impl AppState {
    /// Creates new application state and wires up the service flows.
    pub fn new(db: PgPool, config: Config) -> Self {
        let auth = AuthService::new(db.clone(), config.auth.jwt_secret.clone());
        let tasks = TaskService::new(db.clone());

        Self {
            db,
            config: Arc::new(config),
            auth,
            tasks,
        }
    }

    /// Token signing secret for the middleware.
    pub fn jwt_secret(&self) -> &str {
        &self.config.auth.jwt_secret
    }
}

/// Builds the complete axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Health check (public, no auth)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // Auth routes (public, no auth required)
    let auth_routes = Router::new()
        .route("/signup", post(routes::auth::signup))
        .route("/login", post(routes::auth::login));

    // Task routes (require bearer authentication)
    let task_routes = Router::new()
        .route(
            "/",
            post(routes::tasks::create_task).get(routes::tasks::list_tasks),
        )
        .route(
            "/:task_id",
            get(routes::tasks::get_task)
                .put(routes::tasks::update_task)
                .delete(routes::tasks::delete_task),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::auth::require_auth,
        ));

    let v1_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/tasks", task_routes);

    Router::new()
        .merge(health_routes)
        .nest("/v1", v1_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
