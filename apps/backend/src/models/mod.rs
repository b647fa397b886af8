//! Database models and API types

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Re-export shared types from question-core
pub use question_core::types::{AnswerLetter, ParsedQuestion, QuestionType};

// === Database Entity Types ===

/// Question stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbQuestion {
    pub id: Uuid,
    pub test_id: Uuid,
    pub position: i32,
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub category: String,
    pub difficulty: String,
    pub question_type: String,
    pub content_hash: String,
    pub created_at: DateTime<Utc>,
}

impl DbQuestion {
    /// Convert to API question type
    pub fn to_api_question(&self) -> StoredQuestion {
        StoredQuestion {
            id: self.id,
            test_id: self.test_id,
            position: self.position,
            question_text: self.question_text.clone(),
            options: self.options.clone(),
            correct_answer: AnswerLetter::from_letter(&self.correct_answer).unwrap_or_default(),
            category: self.category.clone(),
            difficulty: self.difficulty.clone(),
            question_type: QuestionType::MultipleChoice,
            created_at: self.created_at,
        }
    }
}

/// Question as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredQuestion {
    pub id: Uuid,
    pub test_id: Uuid,
    pub position: i32,
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: AnswerLetter,
    pub category: String,
    pub difficulty: String,
    pub question_type: QuestionType,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a batch insert
#[derive(Debug, Clone, Default)]
pub struct InsertOutcome {
    pub inserted_ids: Vec<Uuid>,
    pub skipped_duplicates: usize,
}

// === API Request/Response Types ===

/// POST /api/questions/parse request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseQuestionsRequest {
    pub raw_text: String,
    #[serde(default)]
    pub default_category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// POST /api/questions/parse response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseQuestionsResponse {
    pub questions: Vec<ParsedQuestion>,
    pub count: usize,
}

/// POST /api/tests/:test_id/questions request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveQuestionsRequest {
    pub questions: Vec<ParsedQuestion>,
}

/// POST /api/tests/:test_id/questions response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveQuestionsResponse {
    pub inserted_ids: Vec<Uuid>,
    pub inserted_count: usize,
    pub skipped_duplicates: usize,
}

impl From<InsertOutcome> for SaveQuestionsResponse {
    fn from(outcome: InsertOutcome) -> Self {
        Self {
            inserted_count: outcome.inserted_ids.len(),
            inserted_ids: outcome.inserted_ids,
            skipped_duplicates: outcome.skipped_duplicates,
        }
    }
}

/// GET /api/tests/:test_id/questions response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub questions: Vec<StoredQuestion>,
}

/// GET /api/tests/:test_id/summary response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSummaryResponse {
    pub total: i64,
    pub by_category: BTreeMap<String, i64>,
}

/// Response for delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted_count: usize,
}
