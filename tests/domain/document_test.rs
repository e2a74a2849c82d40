use veracity::domain::{Document, DocumentFormat};

#[test]
fn given_supported_extensions_when_creating_then_resolves_format() {
    let cases = [
        ("notes.txt", "txt", DocumentFormat::Text),
        ("report.docx", "docx", DocumentFormat::WordProcessor),
        ("paper.pdf", "pdf", DocumentFormat::Pdf),
    ];

    for (filename, tag, expected) in cases {
        let document = Document::new(filename.to_string(), 10);
        assert_eq!(document.format(), Some(expected), "{filename}");
        assert_eq!(document.format_tag, tag);
    }
}

#[test]
fn given_upper_case_extension_when_creating_then_tag_is_lower_cased() {
    let document = Document::new("Report.PDF".to_string(), 10);

    assert_eq!(document.format_tag, "pdf");
    assert_eq!(document.format(), Some(DocumentFormat::Pdf));
    assert_eq!(document.filename, "Report.PDF");
}

#[test]
fn given_multiple_dots_when_creating_then_uses_last_segment() {
    let document = Document::new("archive.txt.gz".to_string(), 10);

    assert_eq!(document.format_tag, "gz");
    assert_eq!(document.format(), None);
}

#[test]
fn given_name_without_dot_when_creating_then_whole_name_is_the_tag() {
    let document = Document::new("README".to_string(), 10);

    assert_eq!(document.format_tag, "readme");
    assert_eq!(document.format(), None);
}

#[test]
fn given_trailing_dot_when_creating_then_tag_is_empty() {
    let document = Document::new("draft.".to_string(), 10);

    assert_eq!(document.format_tag, "");
    assert_eq!(document.format(), None);
}

#[test]
fn given_size_when_creating_then_records_it() {
    assert_eq!(Document::new("a.txt".to_string(), 42).size_bytes, 42);
}
