//! Error types for question-core.

use thiserror::Error;

use crate::types::AnswerLetter;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Terminal failures of a parse call.
///
/// Malformed individual blocks never surface here; they are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Please paste questions first")]
    EmptyInput,

    #[error("No valid questions found. Supported formats:\n\n{}", crate::parser::FORMAT_HINT)]
    NoQuestionsFound,
}

impl ParseError {
    /// Stable machine-readable kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::NoQuestionsFound => "no_questions_found",
        }
    }
}

/// Errors found when validating a reviewed draft before it is saved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("question text is empty")]
    EmptyQuestionText,

    #[error("option {label} is empty")]
    EmptyOption { label: AnswerLetter },
}
