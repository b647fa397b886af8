//! Core question-import library shared by the backend and admin tooling.
//!
//! Provides:
//! - Free-text question block parser (inline and stacked multiple choice)
//! - Draft question types (ParsedQuestion, AnswerLetter, etc.)
//! - Draft review helpers used before persistence

pub mod error;
pub mod parser;
pub mod review;
pub mod types;

pub use error::{DraftError, ParseError, Result};
pub use parser::{parse, FORMAT_HINT};
pub use review::validate_batch;
pub use types::{AnswerLetter, ParsedQuestion, QuestionType};
