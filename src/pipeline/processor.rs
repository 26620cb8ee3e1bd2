//! Report processing orchestrator.
//!
//! Single entry point that drives the pipeline for an uploaded file:
//! acquire text (OCR / simulated document text) → extract → classify →
//! categorize → synthesize history. Collaborators are trait objects so the
//! orchestrator stays fully testable with mock engines. Progress reporting
//! and error surfacing belong to the caller; the orchestrator forwards
//! both without retry or recovery.

use rand::Rng;

use crate::models::parameter::ParameterRecord;
use crate::pipeline::classify::classify;
use crate::pipeline::extraction::{
    extract_parameters, DocumentKind, DocumentTextSource, DocumentUpload, ExtractionError,
    OcrEngine, SimulatedPdfText,
};
use crate::pipeline::history::synthesize_history;
use crate::pipeline::reference::{category_of, reference_range_text};
use crate::pipeline::sample::sample_records;

/// Errors that can occur while processing an upload. Extraction-empty is
/// not one of them — it degrades to the sample dataset.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),
}

/// Structure raw report text into classified parameter records.
///
/// Records follow extraction match order and carry sequential `param_<n>`
/// ids. An explicit parsed range wins over the knowledge-base display
/// text. Zero matches returns the fixed sample dataset verbatim.
pub fn structure_report_text(text: &str, rng: &mut impl Rng) -> Vec<ParameterRecord> {
    let matches = extract_parameters(text);

    if matches.is_empty() {
        tracing::warn!("no lab parameters matched; returning sample dataset");
        return sample_records();
    }

    tracing::debug!(count = matches.len(), "structuring extracted parameters");

    matches
        .into_iter()
        .enumerate()
        .map(|(index, m)| {
            let status = classify(&m.name, m.value, m.min_range, m.max_range);
            let reference_range = match (m.min_range, m.max_range) {
                (Some(min), Some(max)) => format!("{min}-{max} {}", m.unit),
                _ => reference_range_text(&m.name, &m.unit),
            };
            let category = category_of(&m.name);
            let history = synthesize_history(m.value, rng);

            ParameterRecord {
                id: format!("param_{index}"),
                name: m.name,
                value: m.value,
                unit: m.unit,
                reference_range,
                status,
                category,
                history,
            }
        })
        .collect()
}

/// Drives the pipeline for uploaded files, from bytes to records.
pub struct ReportProcessor {
    ocr: Box<dyn OcrEngine>,
    pdf_text: Box<dyn DocumentTextSource>,
}

impl ReportProcessor {
    pub fn new(ocr: Box<dyn OcrEngine>, pdf_text: Box<dyn DocumentTextSource>) -> Self {
        Self { ocr, pdf_text }
    }

    /// Processor backed by the simulated PDF text collaborator.
    pub fn with_simulated_pdf(ocr: Box<dyn OcrEngine>) -> Self {
        Self::new(ocr, Box::new(SimulatedPdfText))
    }

    /// Process one upload into parameter records.
    ///
    /// PDF uploads report 50% before and 100% after the document-text call;
    /// image uploads forward the OCR engine's recognition fraction into the
    /// 50–100% band. The 0–50% band belongs to the caller's upload phase.
    /// Collaborator errors propagate unchanged.
    pub async fn process_file(
        &self,
        upload: &DocumentUpload,
        mut on_progress: impl FnMut(u8) + Send,
    ) -> Result<Vec<ParameterRecord>, ProcessingError> {
        let text = match upload.kind {
            DocumentKind::Pdf => {
                on_progress(50);
                let text = self.pdf_text.extract_text(&upload.bytes).await?;
                on_progress(100);
                text
            }
            DocumentKind::Image => {
                let mut forward = |fraction: f32| on_progress(map_ocr_progress(fraction));
                self.ocr.recognize(&upload.bytes, &mut forward).await?
            }
        };

        tracing::debug!(
            file = %upload.file_name,
            chars = text.len(),
            "document text acquired"
        );

        let mut rng = rand::thread_rng();
        Ok(structure_report_text(&text, &mut rng))
    }
}

/// Map an OCR recognition fraction (0.0–1.0) onto the 50–100% band.
fn map_ocr_progress(fraction: f32) -> u8 {
    (50.0 + fraction.clamp(0.0, 1.0) * 50.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{Category, Status};
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct MockOcr {
        text: String,
    }

    #[async_trait]
    impl OcrEngine for MockOcr {
        async fn recognize(
            &self,
            _image_bytes: &[u8],
            progress: &mut (dyn FnMut(f32) + Send),
        ) -> Result<String, ExtractionError> {
            progress(0.0);
            progress(0.5);
            progress(1.0);
            Ok(self.text.clone())
        }
    }

    struct FailingOcr;

    #[async_trait]
    impl OcrEngine for FailingOcr {
        async fn recognize(
            &self,
            _image_bytes: &[u8],
            _progress: &mut (dyn FnMut(f32) + Send),
        ) -> Result<String, ExtractionError> {
            Err(ExtractionError::OcrProcessing("scan unreadable".into()))
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    fn image_upload() -> DocumentUpload {
        DocumentUpload {
            file_name: "report.png".into(),
            kind: DocumentKind::Image,
            bytes: vec![0u8; 4],
        }
    }

    // ── structure_report_text ───────────────────────────────────────

    #[test]
    fn end_to_end_glucose_line() {
        let records = structure_report_text(
            "GLUCOSE: 95 mg/dL (Reference Range: 70-99 mg/dL)",
            &mut rng(),
        );
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.id, "param_0");
        assert_eq!(r.name, "GLUCOSE");
        assert_eq!(r.value, 95.0);
        assert_eq!(r.unit, "mg/dL");
        assert_eq!(r.reference_range, "70-99 mg/dL");
        assert_eq!(r.status, Status::Normal);
        assert_eq!(r.category, Category::Diabetes);
        assert_eq!(r.history.len(), 7);
        assert_eq!(r.history.last().unwrap().value, 95.0);
    }

    #[test]
    fn explicit_range_wins_over_knowledge_base_text() {
        // The knowledge base says "136-145 mEq/L" for sodium; a parsed
        // range is formatted from its own bounds instead.
        let records =
            structure_report_text("SODIUM: 140 mEq/L (Range: 130 - 150 mEq/L)", &mut rng());
        assert_eq!(records[0].reference_range, "130-150 mEq/L");
    }

    #[test]
    fn knowledge_base_text_used_without_explicit_range() {
        let records = structure_report_text("SODIUM: 140 mEq/L", &mut rng());
        assert_eq!(records[0].reference_range, "136-145 mEq/L");
        assert_eq!(records[0].status, Status::Normal);
        assert_eq!(records[0].category, Category::Electrolytes);
    }

    #[test]
    fn unknown_parameter_gets_defaults() {
        let records = structure_report_text("FERRITIN: 150 ng/mL", &mut rng());
        assert_eq!(records[0].name, "FERRITIN");
        assert_eq!(records[0].reference_range, "Normal");
        assert_eq!(records[0].status, Status::Normal);
        assert_eq!(records[0].category, Category::General);
    }

    #[test]
    fn critical_value_without_range_is_flagged() {
        let records = structure_report_text("GLUCOSE: 450 mg/dL", &mut rng());
        assert_eq!(records[0].status, Status::Critical);
    }

    #[test]
    fn duplicate_parameter_yields_one_record() {
        let text = "GLUCOSE: 95 mg/dL (70 - 99 mg/dL)\nGLUCOSE: 210 mg/dL";
        let records = structure_report_text(text, &mut rng());
        let glucose: Vec<_> = records.iter().filter(|r| r.name == "GLUCOSE").collect();
        assert_eq!(glucose.len(), 1);
        assert_eq!(glucose[0].value, 95.0);
    }

    #[test]
    fn ids_are_sequential_in_match_order() {
        let text = "GLUCOSE: 95 mg/dL (70 - 99 mg/dL)\nSODIUM: 140 mEq/L (136 - 145 mEq/L)";
        let records = structure_report_text(text, &mut rng());
        assert_eq!(records[0].id, "param_0");
        assert_eq!(records[0].name, "GLUCOSE");
        assert_eq!(records[1].id, "param_1");
        assert_eq!(records[1].name, "SODIUM");
    }

    #[test]
    fn unmatchable_text_falls_back_to_sample_dataset() {
        let records = structure_report_text("clinical note without values", &mut rng());
        assert_eq!(records, sample_records());
    }

    #[test]
    fn empty_text_falls_back_to_sample_dataset() {
        assert_eq!(structure_report_text("", &mut rng()), sample_records());
    }

    // ── process_file: image path ────────────────────────────────────

    #[tokio::test]
    async fn image_upload_forwards_ocr_progress_into_upper_band() {
        let processor = ReportProcessor::with_simulated_pdf(Box::new(MockOcr {
            text: "GLUCOSE: 95 mg/dL (Reference Range: 70-99 mg/dL)".into(),
        }));

        let mut reported = Vec::new();
        let records = processor
            .process_file(&image_upload(), |p| reported.push(p))
            .await
            .unwrap();

        assert_eq!(reported, vec![50, 75, 100]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "GLUCOSE");
    }

    #[tokio::test]
    async fn ocr_failure_propagates_unchanged() {
        let processor = ReportProcessor::with_simulated_pdf(Box::new(FailingOcr));

        let err = processor
            .process_file(&image_upload(), |_| {})
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ProcessingError::Extraction(ExtractionError::OcrProcessing(_))
        ));
    }

    #[tokio::test]
    async fn empty_recognition_degrades_to_sample_dataset() {
        let processor =
            ReportProcessor::with_simulated_pdf(Box::new(MockOcr { text: String::new() }));

        let records = processor
            .process_file(&image_upload(), |_| {})
            .await
            .unwrap();

        assert_eq!(records, sample_records());
    }

    // ── process_file: PDF path ──────────────────────────────────────

    #[tokio::test]
    async fn pdf_upload_reports_fixed_progress_and_structures_panel() {
        let processor = ReportProcessor::with_simulated_pdf(Box::new(MockOcr {
            text: String::new(),
        }));
        let upload = DocumentUpload {
            file_name: "panel.pdf".into(),
            kind: DocumentKind::Pdf,
            bytes: b"%PDF-1.4".to_vec(),
        };

        let mut reported = Vec::new();
        let records = processor
            .process_file(&upload, |p| reported.push(p))
            .await
            .unwrap();

        assert_eq!(reported, vec![50, 100]);
        assert_ne!(records, sample_records());

        let glucose = records
            .iter()
            .find(|r| r.name == "GLUCOSE")
            .expect("panel contains glucose");
        assert_eq!(glucose.value, 95.0);
        assert_eq!(glucose.category, Category::Diabetes);

        let sodium = records
            .iter()
            .find(|r| r.name == "SODIUM")
            .expect("panel contains sodium");
        assert_eq!(sodium.value, 140.0);
        assert_eq!(sodium.status, Status::Normal);
        assert_eq!(sodium.reference_range, "136-145 mEq/L");
    }

    // ── progress mapping ────────────────────────────────────────────

    #[test]
    fn ocr_fraction_maps_onto_upper_half() {
        assert_eq!(map_ocr_progress(0.0), 50);
        assert_eq!(map_ocr_progress(0.5), 75);
        assert_eq!(map_ocr_progress(1.0), 100);
    }

    #[test]
    fn out_of_range_fractions_are_clamped() {
        assert_eq!(map_ocr_progress(-0.3), 50);
        assert_eq!(map_ocr_progress(1.7), 100);
    }
}
