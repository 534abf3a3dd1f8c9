//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access, so the
//! HTTP layer can be handed any storage backend (the SQLite store in
//! production, an in-memory SQLite store in tests).
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Question, Category)
//! - `repository`: Trait definitions for data access
//! - `sqlite`: sqlx-backed implementation

mod error;
mod models;
mod repository;
mod sqlite;


pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::{SqliteCategoryRepository, SqliteDatabase, SqliteQuestionRepository};
