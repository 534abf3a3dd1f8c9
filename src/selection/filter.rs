//! Category and search predicates for fetching candidate questions.
//!
//! A [`QuestionFilter`] is translated to SQL by the store and can also be
//! evaluated in memory with [`QuestionFilter::matches`].

use crate::db::{Id, Question};

use super::{SelectionError, SelectionResult};

/// Sentinel category id meaning "every category".
pub const ALL_CATEGORIES: Id = 0;

/// Category constraint for a quiz round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    All,
    Only(Id),
}

impl CategoryScope {
    pub fn from_id(id: Id) -> Self {
        if id == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(id)
        }
    }

    pub fn category_id(&self) -> Option<Id> {
        match self {
            Self::All => None,
            Self::Only(id) => Some(*id),
        }
    }

    pub fn contains(&self, question: &Question) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => question.category == *id,
        }
    }
}

/// A non-empty search term, matched case-insensitively against question text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Validate a raw search term. Missing and empty terms are rejected.
    pub fn parse(raw: Option<&str>) -> SelectionResult<Self> {
        match raw {
            Some(term) if !term.is_empty() => Ok(Self(term.to_string())),
            _ => Err(SelectionError::EmptySearchTerm),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0.to_lowercase())
    }
}

/// Conjunction of the optional filter dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    category: Option<Id>,
    search: Option<SearchTerm>,
}

impl QuestionFilter {
    /// Every question.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn in_category(id: Id) -> Self {
        Self::all().with_category(id)
    }

    pub fn in_scope(scope: CategoryScope) -> Self {
        Self {
            category: scope.category_id(),
            search: None,
        }
    }

    pub fn matching(term: SearchTerm) -> Self {
        Self::all().with_search(term)
    }

    pub fn with_category(mut self, id: Id) -> Self {
        self.category = Some(id);
        self
    }

    pub fn with_search(mut self, term: SearchTerm) -> Self {
        self.search = Some(term);
        self
    }

    pub fn category(&self) -> Option<Id> {
        self.category
    }

    pub fn search(&self) -> Option<&SearchTerm> {
        self.search.as_ref()
    }

    pub fn matches(&self, question: &Question) -> bool {
        self.category.is_none_or(|id| question.category == id)
            && self
                .search
                .as_ref()
                .is_none_or(|term| term.matches(&question.question))
    }
}
