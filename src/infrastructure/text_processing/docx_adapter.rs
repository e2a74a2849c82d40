use std::io::{Cursor, Read};

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

const MAIN_DOCUMENT_PART: &str = "word/document.xml";

/// Reads the run text of a `.docx` package's main document part.
pub struct DocxAdapter;

impl DocxAdapter {
    fn read_main_part(data: &[u8]) -> Result<Vec<u8>, FileLoaderError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data))
            .map_err(|e| FileLoaderError::Format(format!("failed to open archive: {e}")))?;

        let mut part = archive.by_name(MAIN_DOCUMENT_PART).map_err(|e| {
            FileLoaderError::Format(format!("missing {MAIN_DOCUMENT_PART}: {e}"))
        })?;

        let mut xml = Vec::with_capacity(part.size() as usize);
        part.read_to_end(&mut xml)
            .map_err(|e| FileLoaderError::Format(format!("failed to read {MAIN_DOCUMENT_PART}: {e}")))?;

        Ok(xml)
    }

    /// Text of every `t` element in document order, one per line.
    fn collect_run_text(xml: &[u8]) -> Result<String, FileLoaderError> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(false);

        let mut buf = Vec::new();
        let mut parts: Vec<String> = Vec::new();
        let mut current: Option<String> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) if e.local_name().as_ref() == b"t" => {
                    current = Some(String::new());
                }
                Ok(Event::Text(ref e)) => {
                    if let Some(text) = current.as_mut() {
                        let unescaped = e.unescape().map_err(|e| {
                            FileLoaderError::Format(format!("invalid text content: {e}"))
                        })?;
                        text.push_str(&unescaped);
                    }
                }
                Ok(Event::CData(ref e)) => {
                    if let Some(text) = current.as_mut() {
                        text.push_str(&String::from_utf8_lossy(e.as_ref()));
                    }
                }
                Ok(Event::End(ref e)) if e.local_name().as_ref() == b"t" => {
                    if let Some(text) = current.take() {
                        if !text.is_empty() {
                            parts.push(text);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(FileLoaderError::Format(format!(
                        "malformed XML at byte {}: {e}",
                        reader.error_position()
                    )));
                }
                _ => {}
            }

            buf.clear();
        }

        Ok(parts.join("\n"))
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format() != Some(DocumentFormat::WordProcessor) {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format_tag.clone(),
            ));
        }

        let xml = Self::read_main_part(data)?;
        let text = Self::collect_run_text(&xml)?;

        tracing::info!(chars = text.len(), "DOCX text extraction complete");

        Ok(text)
    }
}
