//! Document loading, data structures, and .docx reconstruction
//!
//! This module bridges docx-rs documents into the internal paragraph model
//! used by the block parser and rebuilder, and writes rebuilt paragraph
//! sequences back out as .docx files.

pub mod io;
pub mod loader;
pub mod models;
pub mod parsing;

// Re-export all models
pub use models::*;
