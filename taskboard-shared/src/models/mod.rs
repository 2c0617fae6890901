//! Database models
//!
//! This module contains the persisted entities and their queries:
//!
//! - `user`: User accounts (the user directory)
//! - `task`: Tasks owned by users (the task store)

pub mod task;
pub mod user;
