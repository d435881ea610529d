//! Shared utilities, configuration, and error handling for Jobly
//!
//! This crate provides common functionality used across the Jobly application:
//! - Configuration management following 12-factor principles
//! - Error types and the centralized HTTP error responder
//! - Validating axum extractors for JSON bodies and query strings
//! - SQL helpers for partial updates and database error classification

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod sql;

pub use error::{Error, Result};
pub use extractors::{ValidatedJson, ValidatedQuery};
pub use sql::{sql_for_partial_update, ColumnMap, PartialUpdate, SqlValue};
