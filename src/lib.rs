//! Core library for turning OCR/PDF-extracted checkup-report text into
//! structured, clinically interpretable indicator records.
//!
//! Three subsystems, all synchronous, side-effect-free and total:
//! - [`parser`] — line-oriented extraction of name/value/unit/range
//!   tuples from noisy multilingual text ([`parser::parse_report`]);
//! - [`classify`] — keyword inference of a body zone and clinical
//!   category for an indicator name ([`classify::classify`]);
//! - [`evaluation`] — grading of a measured value against a possibly
//!   gender-specific, possibly one-sided reference range
//!   ([`evaluation::evaluate`]).
//!
//! The crate performs no I/O and holds no mutable state; its static
//! alias and keyword tables are built once and shared, so every entry
//! point is safe to call concurrently. Persistence, OCR invocation and
//! presentation live with the callers.

pub mod classify;
pub mod config;
pub mod evaluation;
pub mod models;
pub mod parser;

pub use classify::{classify, Classifier, KeywordClassifier};
pub use evaluation::{evaluate, evaluate_with_threshold, ReferenceRange, TemplateRange};
pub use models::{
    BodyZone, Category, Confidence, Gender, HealthStatus, IndicatorClassification, ModelError,
    ParsedIndicator, ParsedReport,
};
pub use parser::{parse_line, parse_range, parse_report};
