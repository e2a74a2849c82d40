mod analysis_report;
mod analysis_type;
mod chunk;
mod document;

pub use analysis_report::{AnalysisReport, ChunkOutcome, RESULT_SEPARATOR};
pub use analysis_type::AnalysisType;
pub use chunk::{Chunk, ChunkId, DocumentId};
pub use document::{Document, DocumentFormat};
