//! API route handlers
//!
//! Route handlers organized by resource:
//!
//! - `health`: Health check endpoint
//! - `auth`: Signup and login
//! - `tasks`: Task CRUD and listing

pub mod auth;
pub mod health;
pub mod tasks;
