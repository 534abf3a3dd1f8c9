//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic. Futures
//! are required to be `Send` so generic axum handlers can await them.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Category, Id, NewQuestion, Question},
};
use crate::selection::QuestionFilter;

/// Repository for Question operations.
pub trait QuestionRepository {
    /// Insert a question and return it with its assigned id.
    fn create(&self, question: &NewQuestion) -> impl Future<Output = DbResult<Question>> + Send;

    /// Get a question by ID.
    fn get(&self, id: Id) -> impl Future<Output = DbResult<Question>> + Send;

    /// Get every question matching `filter`, ordered by ascending id.
    fn list(
        &self,
        filter: &QuestionFilter,
    ) -> impl Future<Output = DbResult<Vec<Question>>> + Send;

    /// Delete a question by ID.
    fn delete(&self, id: Id) -> impl Future<Output = DbResult<()>> + Send;
}

/// Repository for Category operations.
pub trait CategoryRepository {
    /// Insert a category and return it with its assigned id.
    fn create(&self, kind: &str) -> impl Future<Output = DbResult<Category>> + Send;

    /// Get a category by ID.
    fn get(&self, id: Id) -> impl Future<Output = DbResult<Category>> + Send;

    /// Get all categories ordered by ascending id.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Category>>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync + 'static {
    type Questions<'a>: QuestionRepository + Send + Sync
    where
        Self: 'a;
    type Categories<'a>: CategoryRepository + Send + Sync
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the question repository.
    fn questions(&self) -> Self::Questions<'_>;

    /// Get the category repository.
    fn categories(&self) -> Self::Categories<'_>;
}
