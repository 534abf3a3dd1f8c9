//! SQLite implementation of the database traits.
//!
//! This module provides an sqlx-backed implementation of the repository
//! traits defined in the parent module.

mod category;
mod connection;
mod helpers;
mod question;

#[cfg(test)]
mod category_test;

pub use category::SqliteCategoryRepository;
pub use connection::SqliteDatabase;
pub use question::SqliteQuestionRepository;
