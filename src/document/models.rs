//! Core data structures for quiz representation
//!
//! Paragraph and run styling is carried as cloned docx-rs property values,
//! so every attribute the source document sets (alignment, indentation,
//! spacing, bold/italic/underline, fonts, colors) is copied by value
//! through one mechanism when paragraphs are reconstructed.

use docx_rs::{ParagraphProperty, RunProperty};
use serde::Serialize;

/// A contiguous span of text sharing one set of character-level attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub property: RunProperty,
}

/// One source or output paragraph.
///
/// `text` is the paragraph's plain text (run breaks as `\n`, tabs as `\t`).
/// The block parser appends continuation lines here, leaving `runs`
/// untouched; `runs` are only consulted for styling and for verbatim copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub runs: Vec<Run>,
    pub property: ParagraphProperty,
}

impl Paragraph {
    /// A fresh empty paragraph with no runs and default properties.
    pub fn empty() -> Self {
        Paragraph {
            text: String::new(),
            runs: Vec::new(),
            property: ParagraphProperty::default(),
        }
    }

    /// A paragraph holding `text` in a single unstyled run.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Paragraph {
            runs: vec![Run {
                text: text.clone(),
                property: RunProperty::default(),
            }],
            text,
            property: ParagraphProperty::default(),
        }
    }
}

/// One quiz question: the unit of shuffling.
#[derive(Debug, Clone)]
pub struct Block {
    /// The question paragraph ("<digits>. ...").
    pub question: Paragraph,
    /// Answer choices in document order until shuffled.
    pub answers: Vec<Paragraph>,
    /// The blank paragraph following the block, if the source had one.
    pub sep: Option<Paragraph>,
}

impl Block {
    pub fn new(question: Paragraph) -> Self {
        Block {
            question,
            answers: Vec::new(),
            sep: None,
        }
    }

    pub fn summary(&self) -> BlockSummary {
        BlockSummary {
            question: self.question.text.trim().to_string(),
            answers: self.answers.len(),
            has_separator: self.sep.is_some(),
        }
    }
}

/// Parse-level view of a block, printed by `--inspect`.
#[derive(Debug, Clone, Serialize)]
pub struct BlockSummary {
    pub question: String,
    pub answers: usize,
    pub has_separator: bool,
}
