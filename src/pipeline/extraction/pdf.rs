use async_trait::async_trait;

use super::types::DocumentTextSource;
use super::ExtractionError;

/// Fixed report text returned for PDF uploads.
///
/// Stand-in for real document text extraction: a real deployment must
/// replace this collaborator with one backed by an actual PDF text layer.
const SIMULATED_PANEL_TEXT: &str = "\
COMPREHENSIVE METABOLIC PANEL
Patient: John Doe
Date: 2024-07-02

GLUCOSE: 95 mg/dL (Reference Range: 70-99 mg/dL)
CHOLESTEROL, TOTAL: 185 mg/dL (Reference Range: <200 mg/dL)
HDL CHOLESTEROL: 55 mg/dL (Reference Range: >40 mg/dL)
LDL CHOLESTEROL: 110 mg/dL (Reference Range: <100 mg/dL)
TRIGLYCERIDES: 120 mg/dL (Reference Range: <150 mg/dL)
HEMOGLOBIN A1C: 5.4% (Reference Range: <5.7%)
CREATININE: 1.0 mg/dL (Reference Range: 0.7-1.3 mg/dL)
BUN: 15 mg/dL (Reference Range: 7-20 mg/dL)
SODIUM: 140 mEq/L (Reference Range: 136-145 mEq/L)
POTASSIUM: 4.2 mEq/L (Reference Range: 3.5-5.0 mEq/L)
VITAMIN D: 32 ng/mL (Reference Range: 30-100 ng/mL)
TSH: 2.1 mIU/L (Reference Range: 0.4-4.0 mIU/L)
";

/// Simulated document-text collaborator for PDF-typed uploads.
pub struct SimulatedPdfText;

#[async_trait]
impl DocumentTextSource for SimulatedPdfText {
    async fn extract_text(&self, _pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
        Ok(SIMULATED_PANEL_TEXT.to_string())
    }
}
