//! SQLite QuestionRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::helpers::{build_filter_clause, map_sqlx_error};
use crate::db::{DbError, DbResult, Id, NewQuestion, Question, QuestionRepository};
use crate::selection::QuestionFilter;

/// SQLx-backed question repository.
pub struct SqliteQuestionRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn question_from_row(row: &SqliteRow) -> Question {
    Question {
        id: row.get("id"),
        question: row.get("question"),
        answer: row.get("answer"),
        category: row.get("category"),
        difficulty: row.get("difficulty"),
    }
}

impl QuestionRepository for SqliteQuestionRepository<'_> {
    async fn create(&self, question: &NewQuestion) -> DbResult<Question> {
        let result = sqlx::query(
            "INSERT INTO questions (question, answer, difficulty, category) VALUES (?, ?, ?, ?)",
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.difficulty)
        .bind(question.category)
        .execute(self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Question {
            id: result.last_insert_rowid(),
            question: question.question.clone(),
            answer: question.answer.clone(),
            category: question.category,
            difficulty: question.difficulty,
        })
    }

    async fn get(&self, id: Id) -> DbResult<Question> {
        let row = sqlx::query(
            "SELECT id, question, answer, difficulty, category FROM questions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref()
            .map(question_from_row)
            .ok_or_else(|| DbError::not_found("Question", id))
    }

    async fn list(&self, filter: &QuestionFilter) -> DbResult<Vec<Question>> {
        let sql = format!(
            "SELECT id, question, answer, difficulty, category FROM questions {} ORDER BY id ASC",
            build_filter_clause(filter)
        );

        let mut query = sqlx::query(&sql);
        if let Some(category) = filter.category() {
            query = query.bind(category);
        }

        let rows = query.fetch_all(self.pool).await.map_err(map_sqlx_error)?;

        // Search is matched here, with full Unicode case folding
        Ok(rows
            .iter()
            .map(question_from_row)
            .filter(|q| filter.matches(q))
            .collect())
    }

    async fn delete(&self, id: Id) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Question", id));
        }

        Ok(())
    }
}
