use veracity::application::ports::{FileLoader, FileLoaderError};
use veracity::domain::Document;
use veracity::infrastructure::text_processing::PdfAdapter;

const SAMPLE_PDF: &[u8] = include_bytes!("../../fixtures/sample.pdf");

#[tokio::test]
async fn given_two_page_pdf_when_extracting_then_returns_pages_in_order() {
    let document = Document::new("sample.pdf".to_string(), SAMPLE_PDF.len() as u64);

    let text = PdfAdapter::new()
        .extract_text(SAMPLE_PDF, &document)
        .await
        .unwrap();

    let sky = text.find("sky").expect("first page text");
    let grass = text.find("Grass").expect("second page text");
    assert!(sky < grass);
    assert_eq!(text, text.trim());
}

#[tokio::test]
async fn given_corrupt_pdf_when_extracting_then_returns_format_error() {
    let data = b"%PDF-1.4\nthis is not really a pdf";
    let document = Document::new("broken.pdf".to_string(), data.len() as u64);

    let result = PdfAdapter::new().extract_text(data, &document).await;

    assert!(matches!(result, Err(FileLoaderError::Format(_))));
}

#[tokio::test]
async fn given_non_pdf_document_when_extracting_then_returns_unsupported() {
    let document = Document::new("sample.docx".to_string(), SAMPLE_PDF.len() as u64);

    let result = PdfAdapter::new().extract_text(SAMPLE_PDF, &document).await;

    assert!(matches!(result, Err(FileLoaderError::UnsupportedFormat(_))));
}

#[test]
fn given_unreadable_page_when_joining_then_fails_the_document() {
    let pages: Vec<Result<String, String>> = vec![
        Ok("First page.".to_string()),
        Err("bad content stream".to_string()),
    ];

    let result = PdfAdapter::join_page_texts(pages);

    assert!(matches!(
        result,
        Err(FileLoaderError::Format(message)) if message.contains("page 2")
    ));
}

#[test]
fn given_every_page_unreadable_when_joining_then_does_not_return_empty_text() {
    let pages: Vec<Result<String, String>> =
        vec![Err("encrypted".to_string()), Err("encrypted".to_string())];

    let result = PdfAdapter::join_page_texts(pages);

    assert!(matches!(result, Err(FileLoaderError::Format(_))));
}

#[test]
fn given_blank_middle_page_when_joining_then_keeps_its_line_break() {
    let pages: Vec<Result<String, String>> = vec![
        Ok("A".to_string()),
        Ok(String::new()),
        Ok("B".to_string()),
    ];

    assert_eq!(PdfAdapter::join_page_texts(pages).unwrap(), "A\n\nB");
}

#[test]
fn given_no_pages_when_joining_then_returns_empty_text() {
    let pages: Vec<Result<String, String>> = Vec::new();

    assert_eq!(PdfAdapter::join_page_texts(pages).unwrap(), "");
}
