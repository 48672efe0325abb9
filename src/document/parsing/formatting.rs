//! Text extraction and formatting utilities
//!
//! This module handles extraction of text and formatting information
//! from docx-rs run elements.

use docx_rs::RunProperty;
use serde::Serialize;

/// Character-level formatting attributes of a run, in inspectable form.
///
/// Reconstruction does not go through this struct (properties are cloned
/// wholesale); it exists so callers and tests can see what a run carries.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TextFormatting {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub color: Option<String>,
}

/// Extract plain text from a run using docx-rs features
pub fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(_) => {
                // Break types are private, so we'll just add a line break
                text.push('\n');
            }
            _ => {
                // Handle other run children
            }
        }
    }

    text
}

/// Extract formatting information from a run's properties
pub fn extract_formatting(property: &RunProperty) -> TextFormatting {
    let mut formatting = TextFormatting::default();

    formatting.bold = property.bold.is_some();
    formatting.italic = property.italic.is_some();
    formatting.underline = property.underline.is_some();
    formatting.strikethrough = property.strike.is_some() || property.dstrike.is_some();

    // Extract color information
    if let Some(color) = &property.color {
        // Extract color value through debug formatting as a workaround for private field access
        let color_debug = format!("{color:?}");
        if let Some(start) = color_debug.find("val: \"") {
            // Safe: searching for ASCII strings in debug output
            let search_from = start + 6; // length of "val: \""
            if let Some(end) = color_debug[search_from..].find("\"") {
                let color_val = &color_debug[search_from..search_from + end];
                formatting.color = Some(color_val.to_string());
            }
        }
    }

    formatting
}
