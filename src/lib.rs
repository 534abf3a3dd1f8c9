//! REST backend for a trivia game.
//!
//! - `selection`: pagination, filters, and quiz question picking
//! - `db`: storage traits and the SQLite store
//! - `api`: axum router, handlers, and server bootstrap

pub mod api;
pub mod db;
pub mod paths;
pub mod selection;
