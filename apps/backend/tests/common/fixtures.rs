//! Test fixtures and factory functions for creating test data.

use serde_json::json;

use sat_prep_backend::models::ParsedQuestion;

/// Generate a stacked, numbered paste with `num_questions` questions.
pub fn sample_paste(num_questions: usize) -> String {
    (0..num_questions)
        .map(|i| {
            format!(
                "{}. Question {}?\nA) a{}\nB) b{}\nC) c{}\nD) d{}\n",
                i + 1,
                i + 1,
                i + 1,
                i + 1,
                i + 1,
                i + 1
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a sample paste into drafts.
pub fn sample_drafts(num_questions: usize) -> Vec<ParsedQuestion> {
    question_core::parse(&sample_paste(num_questions), "Math", "Easy")
        .expect("sample paste should parse")
}

/// Create a parse request body.
pub fn parse_request(
    raw_text: &str,
    default_category: Option<&str>,
    difficulty: Option<&str>,
) -> serde_json::Value {
    json!({
        "raw_text": raw_text,
        "default_category": default_category,
        "difficulty": difficulty,
    })
}

/// Create a save request body.
pub fn save_request(questions: &[ParsedQuestion]) -> serde_json::Value {
    json!({ "questions": questions })
}
