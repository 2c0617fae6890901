//! # Taskboard API Server Library
//!
//! HTTP boundary for the taskboard service.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: HTTP error mapping
//! - `middleware`: Bearer-token authentication
//! - `routes`: Route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
