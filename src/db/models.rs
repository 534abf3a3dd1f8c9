//! Domain models for the trivia database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

/// Store-assigned integer id used for all entities.
pub type Id = i64;

/// A trivia question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: Id,
    pub question: String,
    pub answer: String,
    /// Id of the owning [`Category`].
    pub category: Id,
    /// Small positive integer, 1 is easiest.
    pub difficulty: i64,
}

/// Fields required to insert a question. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: Id,
    pub difficulty: i64,
}

/// A question category such as "Science" or "Art".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Id,
    /// Display label, stored in the `type` column.
    pub kind: String,
}
