/// Text extraction from uploaded resume documents.
///
/// Format dispatch is by file extension (case-insensitive). Extraction
/// never returns a success wrapping an error string: callers always get
/// either usable text or a typed `ExtractError`.
use thiserror::Error;

mod docx;
mod pdf;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("uploaded file is empty")]
    EmptyUpload,

    #[error("filename '{0}' has no extension; expected .pdf or .docx")]
    MissingExtension(String),

    #[error("unsupported file type '{0}'; expected .pdf or .docx")]
    UnsupportedType(String),

    #[error("failed to parse PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("no text could be extracted from PDF page {page}; the page may be scanned or image-only")]
    EmptyPage { page: usize },

    #[error("failed to parse DOCX: {0}")]
    Docx(String),

    #[error("document contained no extractable text")]
    EmptyText,
}

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Determines the document format from a filename's extension.
    /// Legacy `.doc` uploads are routed through the DOCX parser; genuinely
    /// old binary .doc files then fail with a parse error rather than a
    /// type rejection.
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
            .ok_or_else(|| ExtractError::MissingExtension(filename.to_string()))?;

        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" | "doc" => Ok(Self::Docx),
            other => Err(ExtractError::UnsupportedType(format!(".{other}"))),
        }
    }
}

/// Extracts plain text from an uploaded document.
///
/// PDF pages are concatenated in order with no separator; DOCX paragraphs
/// are joined with a single newline. A document whose extracted text is
/// blank (after trimming) is rejected with `EmptyText`.
///
/// This is CPU-bound work. Async callers should wrap it in
/// `tokio::task::spawn_blocking`.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    let kind = DocumentKind::from_filename(filename)?;

    if bytes.is_empty() {
        return Err(ExtractError::EmptyUpload);
    }

    let text = match kind {
        DocumentKind::Pdf => pdf::extract(bytes)?,
        DocumentKind::Docx => docx::extract(bytes)?,
    };

    if text.trim().is_empty() {
        return Err(ExtractError::EmptyText);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_pdf_filename() {
        assert_eq!(
            DocumentKind::from_filename("resume.pdf").unwrap(),
            DocumentKind::Pdf
        );
    }

    #[test]
    fn test_kind_from_docx_filename() {
        assert_eq!(
            DocumentKind::from_filename("resume.docx").unwrap(),
            DocumentKind::Docx
        );
    }

    #[test]
    fn test_kind_extension_is_case_insensitive() {
        assert_eq!(
            DocumentKind::from_filename("Resume.PDF").unwrap(),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::from_filename("CV.Docx").unwrap(),
            DocumentKind::Docx
        );
    }

    #[test]
    fn test_kind_legacy_doc_routes_to_docx_parser() {
        assert_eq!(
            DocumentKind::from_filename("resume.doc").unwrap(),
            DocumentKind::Docx
        );
    }

    #[test]
    fn test_kind_rejects_unsupported_extension() {
        let err = DocumentKind::from_filename("resume.txt").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedType(ref ext) if ext == ".txt"));
        assert!(err.to_string().contains(".txt"));
    }

    #[test]
    fn test_kind_rejects_missing_extension() {
        let err = DocumentKind::from_filename("resume").unwrap_err();
        assert!(matches!(err, ExtractError::MissingExtension(_)));
    }

    #[test]
    fn test_kind_rejects_trailing_dot() {
        let err = DocumentKind::from_filename("resume.").unwrap_err();
        assert!(matches!(err, ExtractError::MissingExtension(_)));
    }

    #[test]
    fn test_extract_rejects_empty_upload() {
        let err = extract_text("resume.pdf", &[]).unwrap_err();
        assert!(matches!(err, ExtractError::EmptyUpload));
    }

    #[test]
    fn test_extract_checks_extension_before_content() {
        // An unsupported type is reported even when the body is empty
        let err = extract_text("resume.txt", &[]).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedType(_)));
    }

    #[test]
    fn test_extract_rejects_garbage_pdf_bytes() {
        let err = extract_text("resume.pdf", b"not a real pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }

    #[test]
    fn test_extract_rejects_garbage_docx_bytes() {
        let err = extract_text("resume.docx", b"not a real zip archive").unwrap_err();
        assert!(matches!(err, ExtractError::Docx(_)));
    }

    #[test]
    fn test_extract_rejects_whitespace_only_docx() {
        use docx_rs::{Docx, Paragraph, Run};

        let docx = Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("   ")))
            .add_paragraph(Paragraph::new());
        let mut cursor = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();

        let err = extract_text("resume.docx", cursor.get_ref()).unwrap_err();
        assert!(matches!(err, ExtractError::EmptyText));
    }
}
