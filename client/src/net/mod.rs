//! HTTP helpers for authenticated file and admin endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `files` downloads and previews user files with the stored bearer token
//! and maps failures into user-facing errors. `admin` wraps admin API calls
//! and forces re-authentication when the session is rejected.

pub mod admin;
pub mod files;
