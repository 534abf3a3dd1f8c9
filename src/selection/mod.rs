//! Question selection and pagination.
//!
//! Pure logic sitting between the HTTP handlers and the store. Nothing in
//! here touches the database; handlers fetch candidates and hand them over.
//!
//! # Architecture
//!
//! - `pagination`: fixed-size page slicing with a single out-of-range signal
//! - `filter`: category and search predicates used to fetch candidates
//! - `picker`: next unseen quiz question
//! - `error`: business errors and the kind each one reports

mod error;
mod filter;
mod pagination;
mod picker;

#[cfg(test)]
mod picker_test;

pub use error::{ErrorKind, SelectionError, SelectionResult};
pub use filter::{ALL_CATEGORIES, CategoryScope, QuestionFilter, SearchTerm};
pub use pagination::{Page, PageRequest, QUESTIONS_PER_PAGE, paginate};
pub use picker::{PickPolicy, QuizPicker};
