//! Core types for question import.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Answer choice label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl Default for AnswerLetter {
    fn default() -> Self {
        Self::A
    }
}

impl AnswerLetter {
    /// All labels in option order.
    pub const ALL: [AnswerLetter; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Position of this label in the options array (0-3).
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    /// Create from an options array position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a single letter, ignoring case and surrounding whitespace.
    pub fn from_letter(s: &str) -> Option<Self> {
        match s.trim() {
            "A" | "a" => Some(Self::A),
            "B" | "b" => Some(Self::B),
            "C" | "c" => Some(Self::C),
            "D" | "d" => Some(Self::D),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question type. Only multiple choice is produced by the importer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
}

impl Default for QuestionType {
    fn default() -> Self {
        Self::MultipleChoice
    }
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple_choice",
        }
    }
}

/// Draft question produced by the block parser.
///
/// `correct_answer` is always `A` straight out of the parser; a reviewer is
/// expected to fix it before the draft is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuestion {
    pub question_text: String,
    pub options: [String; 4],
    #[serde(default)]
    pub correct_answer: AnswerLetter,
    pub category: String,
    pub difficulty: String,
    #[serde(default)]
    pub question_type: QuestionType,
}

impl ParsedQuestion {
    /// Build a fresh draft with the default answer and question type.
    pub fn new(
        question_text: impl Into<String>,
        options: [String; 4],
        category: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Self {
        Self {
            question_text: question_text.into(),
            options,
            correct_answer: AnswerLetter::default(),
            category: category.into(),
            difficulty: difficulty.into(),
            question_type: QuestionType::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_index_roundtrip() {
        for letter in AnswerLetter::ALL {
            assert_eq!(AnswerLetter::from_index(letter.index()), Some(letter));
        }
        assert_eq!(AnswerLetter::from_index(4), None);
    }

    #[test]
    fn letter_from_text() {
        assert_eq!(AnswerLetter::from_letter(" c "), Some(AnswerLetter::C));
        assert_eq!(AnswerLetter::from_letter("D"), Some(AnswerLetter::D));
        assert_eq!(AnswerLetter::from_letter("E"), None);
        assert_eq!(AnswerLetter::from_letter(""), None);
    }

    #[test]
    fn serializes_with_wire_names() {
        let question = ParsedQuestion::new(
            "Q?",
            ["a".into(), "b".into(), "c".into(), "d".into()],
            "Math",
            "Easy",
        );
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["correct_answer"], "A");
        assert_eq!(json["question_type"], "multiple_choice");
        assert_eq!(json["options"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn deserialize_defaults_answer_and_type() {
        let json = r#"{
            "question_text": "Q?",
            "options": ["a", "b", "c", "d"],
            "category": "Reading",
            "difficulty": "Hard"
        }"#;
        let question: ParsedQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(question.correct_answer, AnswerLetter::A);
        assert_eq!(question.question_type, QuestionType::MultipleChoice);
    }

    #[test]
    fn deserialize_rejects_three_options() {
        let json = r#"{
            "question_text": "Q?",
            "options": ["a", "b", "c"],
            "category": "Reading",
            "difficulty": "Hard"
        }"#;
        assert!(serde_json::from_str::<ParsedQuestion>(json).is_err());
    }
}
