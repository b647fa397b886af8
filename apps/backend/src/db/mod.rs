//! PostgreSQL question store

use sqlx::{postgres::PgPoolOptions, PgPool, Row};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::import::hash_question;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a pool that only connects on first use
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new().connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Question Repository ===

    /// Insert a batch of reviewed questions for a test.
    ///
    /// Runs in one transaction. Questions whose content hash already exists
    /// for the test are skipped, so resubmitting a batch is harmless.
    pub async fn insert_questions(
        &self,
        test_id: Uuid,
        questions: &[ParsedQuestion],
    ) -> Result<InsertOutcome> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            SELECT COALESCE(MAX(position), -1) AS max_position
            FROM questions
            WHERE test_id = $1
            "#,
        )
        .bind(test_id)
        .fetch_one(&mut *tx)
        .await?;
        let mut position: i32 = row.get("max_position");

        let mut outcome = InsertOutcome::default();
        for question in questions {
            let id = Uuid::new_v4();
            let result = sqlx::query(
                r#"
                INSERT INTO questions (id, test_id, position, question_text, options,
                                       correct_answer, category, difficulty, question_type,
                                       content_hash)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                ON CONFLICT (test_id, content_hash) DO NOTHING
                "#,
            )
            .bind(id)
            .bind(test_id)
            .bind(position + 1)
            .bind(&question.question_text)
            .bind(question.options.to_vec())
            .bind(question.correct_answer.as_str())
            .bind(&question.category)
            .bind(&question.difficulty)
            .bind(question.question_type.as_str())
            .bind(hash_question(question))
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                outcome.skipped_duplicates += 1;
            } else {
                position += 1;
                outcome.inserted_ids.push(id);
            }
        }

        tx.commit().await?;
        Ok(outcome)
    }

    /// Get all questions for a test in insertion order
    pub async fn get_questions(&self, test_id: Uuid) -> Result<Vec<DbQuestion>> {
        let questions = sqlx::query_as::<_, DbQuestion>(
            r#"
            SELECT id, test_id, position, question_text, options, correct_answer,
                   category, difficulty, question_type, content_hash, created_at
            FROM questions
            WHERE test_id = $1
            ORDER BY position
            "#,
        )
        .bind(test_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    /// Get question by ID
    pub async fn get_question(&self, id: Uuid) -> Result<Option<DbQuestion>> {
        let question = sqlx::query_as::<_, DbQuestion>(
            r#"
            SELECT id, test_id, position, question_text, options, correct_answer,
                   category, difficulty, question_type, content_hash, created_at
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    /// Delete a single question, returning whether it existed
    pub async fn delete_question(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every question of a test
    pub async fn delete_questions_for_test(&self, test_id: Uuid) -> Result<usize> {
        let result = sqlx::query("DELETE FROM questions WHERE test_id = $1")
            .bind(test_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() as usize)
    }

    /// Count a test's questions per category
    pub async fn count_questions_by_category(&self, test_id: Uuid) -> Result<Vec<(String, i64)>> {
        let rows = sqlx::query(
            r#"
            SELECT category, COUNT(*) AS count
            FROM questions
            WHERE test_id = $1
            GROUP BY category
            ORDER BY category
            "#,
        )
        .bind(test_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| (row.get("category"), row.get("count")))
            .collect())
    }
}
