//! # FieldOps API Server Library
//!
//! This library provides the core functionality for the FieldOps API server.
//!
//! ## Modules
//!
//! - `app`: application state and router builder
//! - `config`: configuration management
//! - `error`: error handling and HTTP response mapping
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
