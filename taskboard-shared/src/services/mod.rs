//! Service flows
//!
//! Stateless request/response orchestration over the models:
//!
//! - `auth`: signup and login (validation, hashing, token issuance)
//! - `tasks`: task access with a centralized ownership check
//!
//! Each service receives its database pool at construction time; there is no
//! ambient repository accessor or environment branch.

pub mod auth;
pub mod tasks;

pub use auth::AuthService;
pub use tasks::TaskService;
