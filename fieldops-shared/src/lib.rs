//! # FieldOps Shared Library
//!
//! This crate contains the types and persistence logic shared by the
//! FieldOps API server:
//!
//! - `models`: database models (users, bookings, receipts, task assignments)
//! - `auth`: password hashing/policy and the signed session cookie
//! - `db`: SQLite connection pool and schema bootstrap

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the FieldOps shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
