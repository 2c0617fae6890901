//! Request middleware
//!
//! - `auth`: bearer-token authentication; resolves the calling user before
//!   any task route runs

pub mod auth;
