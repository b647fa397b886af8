//! Free-text parser for pasted multiple-choice question blocks.
//!
//! # Format
//! Two layouts are accepted, and may be mixed in one paste:
//! ```text
//! Category: Math
//! What is 2+2? A) 3 B) 4 C) 5 D) 6
//!
//! 1. What is the capital of France?
//! A) Berlin
//! B) Madrid
//! C) Paris
//! D) Rome
//! ```
//!
//! A `Category:` line applies to every following question until the next
//! header. Blocks that do not yield a question and exactly four options are
//! skipped without error; only an empty paste or a paste with no usable
//! block at all fails.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::error::{ParseError, Result};
use crate::types::{AnswerLetter, ParsedQuestion};

/// Accepted layouts, shown to the user when nothing could be parsed.
pub const FORMAT_HINT: &str = "Question text here? A) opt B) opt C) opt D) opt\n\
\n\
or\n\
\n\
1. Question text\n\
A) opt 1\n\
B) opt 2\n\
C) opt 3\n\
D) opt 4";

static CATEGORY_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Category:\s*(.+)$").expect("category header pattern"));

static ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.)]\s*(.*)$").expect("ordinal pattern"));

/// `<text> A) .. B) .. C) .. D) ..` on a single line.
static INLINE_QUESTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(.*?)\s*\bA\)\s*(.*?)\s*\bB\)\s*(.*?)\s*\bC\)\s*(.*?)\s*\bD\)\s*(.*)$")
        .expect("inline question pattern")
});

static OPTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-D])[).:]\s*(.+)$").expect("option marker pattern"));

/// Parse pasted text into draft questions.
///
/// `default_category` applies until the first `Category:` header;
/// `difficulty` is stamped on every question.
pub fn parse(raw_text: &str, default_category: &str, difficulty: &str) -> Result<Vec<ParsedQuestion>> {
    if raw_text.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let questions = Scanner::new(raw_text, default_category).run(difficulty);

    if questions.is_empty() {
        return Err(ParseError::NoQuestionsFound);
    }

    debug!(count = questions.len(), "parsed question blocks");
    Ok(questions)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ScanState {
    ScanningQuestionText,
    CollectingOptions,
}

#[derive(Debug, PartialEq)]
enum LineType<'a> {
    Blank,
    CategoryHeader(&'a str),
    Ordinal(&'a str),
    InlineQuestion,
    OptionMarker(AnswerLetter, &'a str),
    Text(&'a str),
}

/// Classify a trimmed line. Earlier arms win when several patterns match.
fn classify(line: &str) -> LineType<'_> {
    if line.is_empty() {
        return LineType::Blank;
    }
    if let Some(caps) = CATEGORY_HEADER.captures(line) {
        return LineType::CategoryHeader(caps.get(1).map_or("", |m| m.as_str().trim()));
    }
    if let Some(caps) = ORDINAL.captures(line) {
        return LineType::Ordinal(caps.get(1).map_or("", |m| m.as_str()));
    }
    if INLINE_QUESTION.is_match(line) {
        return LineType::InlineQuestion;
    }
    if let Some(caps) = OPTION_MARKER.captures(line) {
        let letter = caps
            .get(1)
            .and_then(|m| AnswerLetter::from_letter(m.as_str()));
        if let (Some(letter), Some(body)) = (letter, caps.get(2)) {
            return LineType::OptionMarker(letter, body.as_str().trim());
        }
    }
    LineType::Text(line)
}

struct BlockBuilder {
    question_text: String,
    options: [Option<String>; 4],
    collected: usize,
    start_line: usize,
}

impl BlockBuilder {
    fn new(text: &str, start_line: usize) -> Self {
        Self {
            question_text: text.to_string(),
            options: Default::default(),
            collected: 0,
            start_line,
        }
    }

    fn from_inline(text: &str, start_line: usize) -> Option<Self> {
        let caps = INLINE_QUESTION.captures(text)?;
        let field = |i: usize| caps.get(i).map_or("", |m| m.as_str().trim()).to_string();

        Some(Self {
            question_text: field(1),
            options: [
                Some(field(2)),
                Some(field(3)),
                Some(field(4)),
                Some(field(5)),
            ],
            collected: 4,
            start_line,
        })
    }

    fn push_text(&mut self, line: &str) {
        if !self.question_text.is_empty() {
            self.question_text.push('\n');
        }
        self.question_text.push_str(line);
    }

    fn push_option(&mut self, letter: AnswerLetter, body: &str) {
        self.options[letter.index()] = Some(body.to_string());
        self.collected += 1;
    }

    fn build(self, category: &str, difficulty: &str) -> Option<ParsedQuestion> {
        let question_text = self.question_text.trim();
        if question_text.is_empty() {
            debug!(line = self.start_line, "dropping block without question text");
            return None;
        }

        let [a, b, c, d] = self.options;
        match (a, b, c, d) {
            (Some(a), Some(b), Some(c), Some(d)) => Some(ParsedQuestion::new(
                question_text,
                [a, b, c, d],
                category,
                difficulty,
            )),
            _ => {
                debug!(
                    line = self.start_line,
                    collected = self.collected,
                    "dropping block without options A-D"
                );
                None
            }
        }
    }
}

struct Scanner<'a> {
    lines: Vec<&'a str>,
    cursor: usize,
    current_category: String,
}

impl<'a> Scanner<'a> {
    fn new(raw_text: &'a str, default_category: &str) -> Self {
        Self {
            lines: raw_text.lines().map(str::trim).collect(),
            cursor: 0,
            current_category: default_category.to_string(),
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.cursor).copied()
    }

    fn run(mut self, difficulty: &str) -> Vec<ParsedQuestion> {
        let mut questions = Vec::new();

        while let Some(line) = self.peek() {
            match classify(line) {
                LineType::Blank => self.cursor += 1,
                LineType::CategoryHeader(name) => {
                    trace!(line = self.cursor + 1, category = name, "category header");
                    self.current_category = name.to_string();
                    self.cursor += 1;
                }
                _ => {
                    let block = self.scan_block(line);
                    if let Some(question) = block.build(&self.current_category, difficulty) {
                        questions.push(question);
                    }
                }
            }
        }

        questions
    }

    /// Consume one question block starting at the cursor.
    fn scan_block(&mut self, line: &'a str) -> BlockBuilder {
        let start_line = self.cursor + 1;
        let text = match ORDINAL.captures(line) {
            Some(caps) => caps.get(1).map_or("", |m| m.as_str()),
            None => line,
        };
        self.cursor += 1;

        if let Some(block) = BlockBuilder::from_inline(text, start_line) {
            return block;
        }

        let mut block = BlockBuilder::new(text, start_line);
        let mut state = ScanState::ScanningQuestionText;

        while let Some(next) = self.peek() {
            match state {
                ScanState::ScanningQuestionText => match classify(next) {
                    LineType::CategoryHeader(_) | LineType::Ordinal(_) | LineType::InlineQuestion => {
                        break
                    }
                    LineType::OptionMarker(letter, body) => {
                        block.push_option(letter, body);
                        state = ScanState::CollectingOptions;
                    }
                    LineType::Blank => {}
                    LineType::Text(text) => block.push_text(text),
                },
                ScanState::CollectingOptions => {
                    if block.collected >= 4 {
                        break;
                    }
                    match classify(next) {
                        LineType::OptionMarker(letter, body) => block.push_option(letter, body),
                        _ => break,
                    }
                }
            }
            self.cursor += 1;
        }

        block
    }
}
