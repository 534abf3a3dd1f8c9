//! Shared helper functions for SQLite repositories.

use crate::db::DbError;
use crate::selection::QuestionFilter;

/// Build the WHERE clause for the part of a question filter SQLite can
/// evaluate faithfully.
///
/// Only the category is pushed down. SQLite's `LIKE` and `lower()` fold ASCII
/// only, so the search term is applied with `QuestionFilter::matches` after
/// the rows are fetched.
pub fn build_filter_clause(filter: &QuestionFilter) -> String {
    if filter.category().is_some() {
        "WHERE category = ?".to_string()
    } else {
        String::new()
    }
}

/// Classify an sqlx error.
pub fn map_sqlx_error(e: sqlx::Error) -> DbError {
    match &e {
        sqlx::Error::Database(db)
            if db.is_foreign_key_violation()
                || db.is_check_violation()
                || db.is_unique_violation() =>
        {
            DbError::Constraint {
                message: e.to_string(),
            }
        }
        sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            DbError::Connection {
                message: e.to_string(),
            }
        }
        _ => DbError::Database {
            message: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SearchTerm;

    #[test]
    fn test_filter_clause_empty_for_all() {
        assert_eq!(build_filter_clause(&QuestionFilter::all()), "");
    }

    #[test]
    fn test_filter_clause_category() {
        assert_eq!(
            build_filter_clause(&QuestionFilter::in_category(3)),
            "WHERE category = ?"
        );
    }

    #[test]
    fn test_filter_clause_leaves_search_out_of_sql() {
        let filter =
            QuestionFilter::in_category(3).with_search(SearchTerm::parse(Some("x")).unwrap());
        assert_eq!(build_filter_clause(&filter), "WHERE category = ?");
        assert_eq!(
            build_filter_clause(&QuestionFilter::matching(SearchTerm::parse(Some("x")).unwrap())),
            ""
        );
    }

    #[test]
    fn test_pool_timeout_is_connection_error() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            DbError::Connection { .. }
        ));
    }

    #[test]
    fn test_row_not_found_is_database_error() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            DbError::Database { .. }
        ));
    }
}
