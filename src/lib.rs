//! mixx: shuffle multiple-choice quizzes in .docx files
//!
//! This library parses a quiz document into question blocks (question,
//! answer choices, separator), shuffles the answers within each block and
//! the block order itself, then rebuilds a new document with consistent
//! renumbering and relabeling while preserving paragraph and run styling.

pub mod config;
pub mod document;
pub mod rebuild;
pub mod shuffle;

// Re-export commonly used types
pub use config::Settings;
pub use document::models::{Block, BlockSummary, Paragraph, Run};
pub use document::parsing::block::{PatternError, Recognizer, parse_blocks};
