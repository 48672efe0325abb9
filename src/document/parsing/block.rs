//! Question block detection and grouping
//!
//! This module groups a flat paragraph sequence into question blocks:
//! a question paragraph ("<digits>. ..."), its answer choices
//! ("<letter>. ..."), and the blank separator paragraph that follows.
//! Continuation lines are merged into the most recently opened paragraph.

use regex::Regex;
use thiserror::Error;

use super::super::models::{Block, Paragraph};
use crate::config::Settings;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("choice count must be between 1 and 26, got {0}")]
    ChoiceCount(usize),
    #[error("invalid question pattern: {0}")]
    QuestionPattern(#[from] regex::Error),
}

/// Recognizes block boundaries in stripped paragraph text.
///
/// The question pattern comes from the settings; the answer pattern is
/// derived from the configured choice count ("^[A-D]\.\s" for 4 choices),
/// so quizzes with more options are a configuration change.
#[derive(Debug, Clone)]
pub struct Recognizer {
    question: Regex,
    answer: Regex,
    choices: usize,
}

impl Recognizer {
    pub fn from_settings(settings: &Settings) -> Result<Self, PatternError> {
        Self::from_parts(&settings.question_pattern, settings.choices)
    }

    pub fn from_parts(question_pattern: &str, choices: usize) -> Result<Self, PatternError> {
        if !(1..=26).contains(&choices) {
            return Err(PatternError::ChoiceCount(choices));
        }
        let last = (b'A' + choices as u8 - 1) as char;
        Ok(Recognizer {
            question: Regex::new(question_pattern)?,
            answer: Regex::new(&format!(r"^[A-{last}]\.\s"))?,
            choices,
        })
    }

    /// Does this stripped text open a new question block?
    pub fn is_question(&self, text: &str) -> bool {
        self.question.is_match(text)
    }

    /// Does this stripped text look like an answer choice?
    pub fn is_answer(&self, text: &str) -> bool {
        self.answer.is_match(text)
    }

    /// Positional answer label: 0 -> 'A', 1 -> 'B', ...
    pub fn label(&self, position: usize) -> char {
        debug_assert!(position < self.choices);
        (b'A' + position as u8) as char
    }

    pub fn choices(&self) -> usize {
        self.choices
    }
}

impl Default for Recognizer {
    fn default() -> Self {
        Self::from_settings(&Settings::default()).expect("default settings are valid")
    }
}

/// Group paragraphs into question blocks in one forward pass.
///
/// Paragraphs seen before the first question header are dropped. A blank
/// paragraph becomes the open block's separator; further blanks are
/// ignored. Any other paragraph while a block is open is a continuation
/// line whose raw text is appended (after a newline) to the last answer if
/// any exist yet, otherwise to the question. The merge happens on the
/// accumulated model text, never on the loaded source document.
///
/// A block holds at most `choices` answers: once full, a further letter
/// line (a repeated letter, say) is a continuation like any other, so the
/// rebuilder never has more answers than it can label.
pub fn parse_blocks(paragraphs: Vec<Paragraph>, recognizer: &Recognizer) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;

    for paragraph in paragraphs {
        if recognizer.is_question(paragraph.text.trim()) {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            current = Some(Block::new(paragraph));
            continue;
        }
        let Some(block) = current.as_mut() else {
            continue;
        };
        if recognizer.is_answer(paragraph.text.trim()) && block.answers.len() < recognizer.choices()
        {
            block.answers.push(paragraph);
        } else if paragraph.text.is_empty() {
            // Only the first blank after a block counts as its separator
            if block.sep.is_none() {
                block.sep = Some(paragraph);
            }
        } else {
            let target = match block.answers.last_mut() {
                Some(answer) => answer,
                None => &mut block.question,
            };
            target.text.push('\n');
            target.text.push_str(&paragraph.text);
        }
    }
    if let Some(block) = current {
        blocks.push(block);
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn para(text: &str) -> Paragraph {
        Paragraph::from_text(text)
    }

    fn parse(texts: &[&str]) -> Vec<Block> {
        parse_blocks(
            texts.iter().map(|t| para(t)).collect(),
            &Recognizer::default(),
        )
    }

    #[test]
    fn test_well_formed_document_round_trip() {
        let blocks = parse(&[
            "1. First question?",
            "A. one",
            "B. two",
            "C. three",
            "D. four",
            "",
            "2. Second question?",
            "A. red",
            "B. green",
            "C. blue",
            "D. plaid",
            "",
        ]);

        assert_eq!(blocks.len(), 2);
        for block in &blocks {
            assert_eq!(block.answers.len(), 4);
            assert!(block.sep.is_some());
        }
        assert_eq!(blocks[1].question.text, "2. Second question?");
    }

    #[test]
    fn test_continuation_merges_into_last_answer() {
        let blocks = parse(&["1. Stem", "A. Opt", "(extra line)", "B. Opt2"]);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].answers[0].text, "A. Opt\n(extra line)");
        assert_eq!(blocks[0].answers[1].text, "B. Opt2");
    }

    #[test]
    fn test_continuation_merges_into_question_before_any_answer() {
        let blocks = parse(&["1. A question that", "wraps onto a second line", "A. yes"]);

        assert_eq!(
            blocks[0].question.text,
            "1. A question that\nwraps onto a second line"
        );
        assert_eq!(blocks[0].answers.len(), 1);
    }

    #[test]
    fn test_extra_blank_paragraphs_collapse_to_one_separator() {
        let blocks = parse(&["1. Q", "A. x", "", "", "", "2. Q2", "B. y"]);

        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].sep.is_some());
        // The extra blanks were neither separators nor continuations
        assert_eq!(blocks[0].answers[0].text, "A. x");
    }

    #[test]
    fn test_preamble_before_first_question_is_dropped() {
        let blocks = parse(&["Answer all questions.", "", "1. Q", "A. x"]);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].question.text, "1. Q");
        assert!(blocks[0].sep.is_none());
    }

    #[test]
    fn test_fifth_option_is_a_continuation_with_default_choices() {
        let blocks = parse(&["1. Q", "A. a", "B. b", "C. c", "D. d", "E. e"]);

        assert_eq!(blocks[0].answers.len(), 4);
        assert_eq!(blocks[0].answers[3].text, "D. d\nE. e");
    }

    #[test]
    fn test_repeated_letters_cap_answers_at_choice_count() {
        let blocks = parse(&["1. Q", "A. a", "B. b", "A. c", "B. d", "C. e", "D. f"]);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].answers.len(), 4);
        // Letter lines past the fourth merge into the last answer
        assert_eq!(blocks[0].answers[3].text, "B. d\nC. e\nD. f");
    }

    #[test]
    fn test_whitespace_only_paragraph_is_a_continuation_not_a_separator() {
        let blocks = parse(&["1. Q", "  "]);

        assert!(blocks[0].sep.is_none());
        assert_eq!(blocks[0].question.text, "1. Q\n  ");
    }

    #[test]
    fn test_unseparated_final_block_is_still_closed() {
        let blocks = parse(&["1. Q", "A. x", "B. y"]);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].answers.len(), 2);
        assert!(blocks[0].sep.is_none());
    }

    #[test]
    fn test_recognizer_choice_count_bounds() {
        assert!(Recognizer::from_parts(r"^\d+\.\s", 0).is_err());
        assert!(Recognizer::from_parts(r"^\d+\.\s", 27).is_err());

        let six = Recognizer::from_parts(r"^\d+\.\s", 6).unwrap();
        assert!(six.is_answer("E. fifth"));
        assert!(six.is_answer("F. sixth"));
        assert!(!six.is_answer("G. seventh"));
        assert_eq!(six.choices(), 6);
        assert_eq!(six.label(5), 'F');
    }

    #[test]
    fn test_recognizer_rejects_bad_pattern() {
        assert!(Recognizer::from_parts(r"^\d+(", 4).is_err());
    }
}
