use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ExtractionError;

/// One candidate parameter produced by a pattern pass, before
/// classification. Range bounds are present only when the text carried an
/// explicit parenthesized range.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMatch {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub min_range: Option<f64>,
    pub max_range: Option<f64>,
}

/// Broad upload categories the pipeline handles. Anything else is the
/// caller's problem (size ceilings and MIME allow-lists live in the upload
/// layer, before the core is invoked).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Image,
}

/// A file handed to the pipeline by the upload layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentUpload {
    pub file_name: String,
    pub kind: DocumentKind,
    pub bytes: Vec<u8>,
}

/// OCR engine abstraction (allows mocking for tests).
///
/// `progress` receives the engine's recognition fraction in 0.0–1.0;
/// the orchestrator maps it onto the caller-facing percentage band.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(
        &self,
        image_bytes: &[u8],
        progress: &mut (dyn FnMut(f32) + Send),
    ) -> Result<String, ExtractionError>;
}

/// Document text extraction abstraction for PDF-typed uploads.
#[async_trait]
pub trait DocumentTextSource: Send + Sync {
    async fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, ExtractionError>;
}
