pub mod parser;
pub mod pdf;
pub mod types;

pub use parser::*;
pub use pdf::*;
pub use types::*;

use thiserror::Error;

/// Failures raised by the external text-acquisition collaborators.
///
/// Pattern matching over acquired text never errors: unmatchable input
/// degrades to an empty match set, and a candidate whose numeric capture
/// fails to parse is dropped.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("OCR processing failed: {0}")]
    OcrProcessing(String),

    #[error("Document text extraction failed: {0}")]
    DocumentText(String),
}
