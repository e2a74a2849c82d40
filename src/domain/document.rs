use super::chunk::DocumentId;

/// An uploaded document for the lifetime of one request. The raw bytes travel
/// alongside it and are never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub format_tag: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Text,
    WordProcessor,
    Pdf,
}

impl DocumentFormat {
    pub fn from_extension(tag: &str) -> Option<Self> {
        match tag {
            "txt" => Some(Self::Text),
            "docx" => Some(Self::WordProcessor),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

impl Document {
    pub fn new(filename: String, size_bytes: u64) -> Self {
        let format_tag = format_tag_of(&filename);
        Self {
            id: DocumentId::new(),
            filename,
            format_tag,
            size_bytes,
        }
    }

    pub fn format(&self) -> Option<DocumentFormat> {
        DocumentFormat::from_extension(&self.format_tag)
    }
}

/// Lower-cased text after the last `.`; a name without a dot is its own tag.
fn format_tag_of(filename: &str) -> String {
    filename
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}
