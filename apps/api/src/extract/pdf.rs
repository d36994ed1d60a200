/// PDF text extraction.
///
/// Pages are extracted individually and concatenated in document order
/// with no separator. A page that yields no text (blank or whitespace
/// only) aborts the whole extraction: partial text from a resume with a
/// scanned or image-only page would silently skew every downstream
/// analysis, so the upload is rejected with the offending page number.
use pdf_extract::extract_text_from_mem_by_pages;

use super::ExtractError;

pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = extract_text_from_mem_by_pages(bytes)?;

    let mut text = String::new();
    for (index, page) in pages.iter().enumerate() {
        if page.trim().is_empty() {
            return Err(ExtractError::EmptyPage { page: index + 1 });
        }
        text.push_str(page);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> Vec<u8> {
        std::fs::read(format!("{}/testdata/{name}", env!("CARGO_MANIFEST_DIR")))
            .unwrap_or_else(|e| panic!("missing fixture {name}: {e}"))
    }

    #[test]
    fn test_extracts_text_from_single_page() {
        let text = extract(&fixture("sample.pdf")).unwrap();
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Software Engineer"));
    }

    #[test]
    fn test_concatenates_pages_without_separator() {
        let text = extract(&fixture("two_pages.pdf")).unwrap();
        let first = text.find("First page text").expect("page 1 text present");
        let second = text.find("Second page text").expect("page 2 text present");
        assert!(first < second);
    }

    #[test]
    fn test_blank_page_fails_with_page_number() {
        // Fixture: page 1 has text, page 2 is blank
        let err = extract(&fixture("empty_page.pdf")).unwrap_err();
        match err {
            ExtractError::EmptyPage { page } => assert_eq!(page, 2),
            other => panic!("expected EmptyPage, got {other:?}"),
        }
        assert!(err.to_string().contains("page 2"));
    }

    #[test]
    fn test_invalid_bytes_fail_with_parse_error() {
        let err = extract(b"%PDF-1.4 truncated nonsense").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
