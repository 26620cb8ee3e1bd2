//! Labtrace: structures clinical lab values out of unstructured report text.
//!
//! The core pipeline is [`pipeline::processor::structure_report_text`]:
//! pattern extraction → status classification → category + reference-range
//! resolution → trend synthesis. [`pipeline::processor::ReportProcessor`]
//! wraps it behind the external OCR / document-text collaborators for
//! callers that start from an uploaded file rather than raw text.
//!
//! The crate holds no state between calls and persists nothing; every
//! processing call produces a fresh batch of records owned by the caller.

pub mod models;
pub mod pipeline;
