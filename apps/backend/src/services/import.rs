//! Import service: parsing pasted text and fingerprinting reviewed drafts.

use sha2::{Digest, Sha256};

use crate::config::Config;
use crate::error::Result;
use crate::models::{ParseQuestionsRequest, ParsedQuestion};

/// Parse a request's pasted text, filling missing defaults from config.
pub fn parse_request(request: &ParseQuestionsRequest, config: &Config) -> Result<Vec<ParsedQuestion>> {
    let category = request
        .default_category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(config.default_category.as_str());
    let difficulty = request
        .difficulty
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(config.default_difficulty.as_str());

    let questions = question_core::parse(&request.raw_text, category, difficulty)?;
    Ok(questions)
}

/// Compute SHA256 hash of content.
pub fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Fingerprint of a question's text and options, used to skip duplicates
/// within a test. Answer, category and difficulty are not part of it.
pub fn hash_question(question: &ParsedQuestion) -> String {
    let mut content = question.question_text.trim().to_string();
    for option in &question.options {
        content.push('\u{1f}');
        content.push_str(option.trim());
    }
    hash_content(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use question_core::{AnswerLetter, ParseError};

    fn config() -> Config {
        Config {
            database_url: "postgres://localhost/test".to_string(),
            database_max_connections: 1,
            host: "127.0.0.1".to_string(),
            port: 0,
            default_category: "Math".to_string(),
            default_difficulty: "Medium".to_string(),
        }
    }

    fn request(raw_text: &str, category: Option<&str>, difficulty: Option<&str>) -> ParseQuestionsRequest {
        ParseQuestionsRequest {
            raw_text: raw_text.to_string(),
            default_category: category.map(str::to_string),
            difficulty: difficulty.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_request_uses_config_defaults() {
        let questions = parse_request(&request("Q? A) a B) b C) c D) d", None, None), &config()).unwrap();
        assert_eq!(questions[0].category, "Math");
        assert_eq!(questions[0].difficulty, "Medium");
    }

    #[test]
    fn test_parse_request_blank_fields_fall_back() {
        let questions =
            parse_request(&request("Q? A) a B) b C) c D) d", Some("  "), Some("")), &config()).unwrap();
        assert_eq!(questions[0].category, "Math");
        assert_eq!(questions[0].difficulty, "Medium");
    }

    #[test]
    fn test_parse_request_explicit_values() {
        let questions = parse_request(
            &request("Q? A) a B) b C) c D) d", Some("Writing"), Some("Hard")),
            &config(),
        )
        .unwrap();
        assert_eq!(questions[0].category, "Writing");
        assert_eq!(questions[0].difficulty, "Hard");
    }

    #[test]
    fn test_parse_request_propagates_parse_error() {
        let err = parse_request(&request("  ", None, None), &config()).unwrap_err();
        assert!(matches!(err, ApiError::Parse(ParseError::EmptyInput)));
    }

    #[test]
    fn test_hash_content_deterministic() {
        assert_eq!(hash_content("hello"), hash_content("hello"));
        assert_ne!(hash_content("hello"), hash_content("world"));
        assert_eq!(hash_content("").len(), 64);
    }

    #[test]
    fn test_hash_question_ignores_answer_and_whitespace() {
        let mut a = question_core::parse("Q? A) a B) b C) c D) d", "Math", "Easy")
            .unwrap()
            .remove(0);
        let b = question_core::parse("  Q?   A) a  B) b C) c D) d ", "Reading", "Hard")
            .unwrap()
            .remove(0);
        a.set_correct_answer(AnswerLetter::C);
        assert_eq!(hash_question(&a), hash_question(&b));
    }

    #[test]
    fn test_hash_question_distinguishes_option_boundaries() {
        let a = ParsedQuestion::new("Q", ["ab".into(), "c".into(), "d".into(), "e".into()], "M", "E");
        let b = ParsedQuestion::new("Q", ["a".into(), "bc".into(), "d".into(), "e".into()], "M", "E");
        assert_ne!(hash_question(&a), hash_question(&b));
    }
}
