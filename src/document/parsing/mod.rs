//! Paragraph-level parsing modules
//!
//! Block grouping and run formatting extraction.

pub mod block;
pub mod formatting;
