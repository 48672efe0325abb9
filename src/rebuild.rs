//! Renumbering, relabeling, and formatting-preserving reconstruction
//!
//! Turns a (shuffled) block sequence back into a flat paragraph sequence:
//! questions renumbered 1..N in emitted order, answers relabeled from 'A'
//! in emitted order, separators carried over verbatim or freshly inserted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::models::{Block, Paragraph, Run};
use crate::document::parsing::block::Recognizer;

// Prefix forms being rewritten; detection of what *is* a question or
// answer belongs to the Recognizer.
static QUESTION_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*").unwrap());
static ANSWER_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]\.\s*").unwrap());

/// Replace the leading "<digits>. " prefix with the given question number.
pub fn renumber(text: &str, number: usize) -> String {
    QUESTION_PREFIX
        .replace(text, format!("{number}. "))
        .into_owned()
}

/// Replace the leading "<letter>. " prefix with the given answer label.
pub fn relabel(text: &str, label: char) -> String {
    ANSWER_PREFIX
        .replace(text, format!("{label}. "))
        .into_owned()
}

/// Copy a paragraph's styling but substitute new text.
///
/// Paragraph properties are cloned wholesale; the new text lands in a
/// single run styled like the first source run (default styling when the
/// source had no runs). All other source runs are dropped with the old
/// text.
pub fn copy_with_replacement(source: &Paragraph, new_text: String) -> Paragraph {
    let run_property = source
        .runs
        .first()
        .map(|run| run.property.clone())
        .unwrap_or_default();
    Paragraph {
        runs: vec![Run {
            text: new_text.clone(),
            property: run_property,
        }],
        text: new_text,
        property: source.property.clone(),
    }
}

/// Rebuild the output paragraph sequence from shuffled blocks.
///
/// Per block, in order: the renumbered question, the relabeled answers,
/// then the original separator (copied run-by-run via clone) or a freshly
/// inserted empty paragraph when the source block had none.
pub fn rebuild(blocks: &[Block], recognizer: &Recognizer) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();

    for (index, block) in blocks.iter().enumerate() {
        paragraphs.push(copy_with_replacement(
            &block.question,
            renumber(&block.question.text, index + 1),
        ));

        for (position, answer) in block.answers.iter().enumerate() {
            paragraphs.push(copy_with_replacement(
                answer,
                relabel(&answer.text, recognizer.label(position)),
            ));
        }

        match &block.sep {
            Some(sep) => paragraphs.push(sep.clone()),
            None => paragraphs.push(Paragraph::empty()),
        }
    }

    paragraphs
}
