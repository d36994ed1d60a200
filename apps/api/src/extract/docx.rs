/// DOCX text extraction.
///
/// Walks the docx-rs document tree: Document → Paragraph → Run → Text.
/// Every paragraph contributes one line, including empty ones, so blank
/// lines the author used to separate resume sections survive into the
/// extracted text. Runs within a paragraph are concatenated with no
/// separator since they are fragments of the same line.
use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};

use super::ExtractError;

pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = read_docx(bytes).map_err(|e| ExtractError::Docx(format!("{e:?}")))?;

    let mut lines: Vec<String> = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            lines.push(paragraph_text(paragraph));
        }
    }

    Ok(lines.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}
