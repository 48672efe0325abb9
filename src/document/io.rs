//! File I/O operations and validation
//!
//! This module handles .docx file validation, loading a document into the
//! paragraph model, and packing rebuilt paragraphs back into a .docx.

use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::Cursor;
use std::path::Path;
use zip::ZipArchive;

use super::loader::paragraphs_from_docx;
use super::models::{Paragraph, Run};

/// Validates that the file is a legitimate .docx file
pub(crate) fn validate_docx_file(file_path: &Path) -> Result<()> {
    // Check file extension
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if extension != "docx" {
        bail!(
            "Invalid file format. Expected .docx file, got .{}\n\
            Note: mixx only supports Word .docx files (not .doc, .xlsx, .zip, etc.)",
            extension
        );
    }

    // Check ZIP structure contains word/document.xml
    let file = File::open(file_path)?;
    let mut archive = ZipArchive::new(file)?;

    if archive.by_name("word/document.xml").is_err() {
        // Check if it might be an Excel file
        if archive.by_name("xl/workbook.xml").is_ok() {
            bail!(
                "This appears to be an Excel file (.xlsx).\n\
                mixx only supports Word documents (.docx)."
            );
        }

        bail!(
            "Invalid .docx file: missing word/document.xml\n\
            This file may be corrupted or is not a valid Word document."
        );
    }

    Ok(())
}

/// Load a quiz document from disk into the paragraph model.
pub fn load_paragraphs(file_path: &Path) -> Result<Vec<Paragraph>> {
    validate_docx_file(file_path)?;

    let file_data = std::fs::read(file_path)
        .with_context(|| format!("failed to read {}", file_path.display()))?;
    read_paragraphs(&file_data)
}

/// Decode .docx bytes into the paragraph model.
pub fn read_paragraphs(data: &[u8]) -> Result<Vec<Paragraph>> {
    let docx = docx_rs::read_docx(data).context("failed to parse .docx document")?;
    Ok(paragraphs_from_docx(&docx))
}

/// Pack paragraphs into a new .docx and write it to disk.
pub fn save_paragraphs(paragraphs: &[Paragraph], file_path: &Path) -> Result<()> {
    let file = File::create(file_path)
        .with_context(|| format!("failed to create {}", file_path.display()))?;
    build_docx(paragraphs)
        .build()
        .pack(file)
        .context("failed to write .docx document")?;
    Ok(())
}

/// Pack paragraphs into .docx bytes without touching the filesystem.
pub fn docx_bytes(paragraphs: &[Paragraph]) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    build_docx(paragraphs)
        .build()
        .pack(&mut cursor)
        .context("failed to pack .docx document")?;
    Ok(cursor.into_inner())
}

fn build_docx(paragraphs: &[Paragraph]) -> docx_rs::Docx {
    let mut docx = docx_rs::Docx::new();
    for paragraph in paragraphs {
        docx = docx.add_paragraph(build_paragraph(paragraph));
    }
    docx
}

fn build_paragraph(paragraph: &Paragraph) -> docx_rs::Paragraph {
    let mut out = docx_rs::Paragraph::new();
    out.property = paragraph.property.clone();
    for run in &paragraph.runs {
        out = out.add_run(build_run(run));
    }
    out
}

/// Line breaks inside a run become w:br elements, the inverse of how the
/// loader reads them back as `\n`.
fn build_run(run: &Run) -> docx_rs::Run {
    let mut out = docx_rs::Run::new();
    out.run_property = run.property.clone();
    for (index, segment) in run.text.split('\n').enumerate() {
        if index > 0 {
            out = out.add_break(docx_rs::BreakType::TextWrapping);
        }
        if !segment.is_empty() {
            out = out.add_text(segment);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_non_docx_extension() {
        let err = validate_docx_file(Path::new("quiz.txt")).unwrap_err();
        assert!(err.to_string().contains("Expected .docx"));
    }

    #[test]
    fn test_in_memory_round_trip_preserves_text_and_breaks() {
        let paragraphs = vec![
            Paragraph::from_text("1. Stem\n(extra line)"),
            Paragraph::from_text("A. Opt"),
            Paragraph::empty(),
        ];

        let bytes = docx_bytes(&paragraphs).unwrap();
        let decoded = read_paragraphs(&bytes).unwrap();

        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded[0].text, "1. Stem\n(extra line)");
        assert_eq!(decoded[1].text, "A. Opt");
        assert_eq!(decoded[2].text, "");
        assert!(decoded[2].runs.is_empty());
    }
}
