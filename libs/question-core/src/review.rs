//! Editing and validation of parsed drafts before they are saved.

use crate::error::DraftError;
use crate::types::{AnswerLetter, ParsedQuestion};

impl ParsedQuestion {
    pub fn set_correct_answer(&mut self, letter: AnswerLetter) {
        self.correct_answer = letter;
    }

    pub fn set_option(&mut self, letter: AnswerLetter, text: impl Into<String>) {
        self.options[letter.index()] = text.into();
    }

    pub fn set_question_text(&mut self, text: impl Into<String>) {
        self.question_text = text.into();
    }

    /// Text of the option currently marked correct.
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_answer.index()]
    }

    /// Check that the draft is complete enough to persist.
    ///
    /// The parser can emit empty option bodies; a reviewer must fill them in.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.question_text.trim().is_empty() {
            return Err(DraftError::EmptyQuestionText);
        }
        for letter in AnswerLetter::ALL {
            if self.options[letter.index()].trim().is_empty() {
                return Err(DraftError::EmptyOption { label: letter });
            }
        }
        Ok(())
    }
}

/// Validate a batch, reporting the index of the first invalid draft.
pub fn validate_batch(questions: &[ParsedQuestion]) -> Result<(), (usize, DraftError)> {
    questions
        .iter()
        .enumerate()
        .try_for_each(|(idx, q)| q.validate().map_err(|e| (idx, e)))
}
