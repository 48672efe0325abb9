//! docx-rs document to paragraph-model extraction
//!
//! Pulls every paragraph out of a parsed docx-rs document, keeping the
//! paragraph- and run-level property values verbatim for later
//! reconstruction. Empty paragraphs are kept: they are the block
//! separators the parser looks for.

use super::models::{Paragraph, Run};
use super::parsing::formatting::extract_run_text;

/// Extract the flat paragraph sequence from a parsed document.
pub fn paragraphs_from_docx(docx: &docx_rs::Docx) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();

    for child in &docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            let mut runs = Vec::new();
            let mut text = String::new();

            for child in &para.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    let run_text = extract_run_text(run);
                    if !run_text.is_empty() {
                        text.push_str(&run_text);
                        runs.push(Run {
                            text: run_text,
                            property: run.run_property.clone(),
                        });
                    }
                }
            }

            paragraphs.push(Paragraph {
                text,
                runs,
                property: para.property.clone(),
            });
        }
        // Tables and other children have no place in the quiz convention
    }

    paragraphs
}
