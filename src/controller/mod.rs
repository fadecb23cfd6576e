//! HTTP controller endpoints for the Freyr web API.
//!
//! Controllers handle HTTP requests, validate inputs, call into services, and
//! return JSON responses. They integrate with tower-sessions for session
//! management and use utoipa for OpenAPI documentation.

pub mod admin;
pub mod auth;
pub mod corporation;
pub mod item;
pub mod notification;
pub mod program;
pub mod setup;
pub mod stats;
pub mod util;
