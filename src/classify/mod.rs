//! Body-zone and category inference for indicator names.
//!
//! The [`Classifier`] trait is the seam for swapping in a learned
//! classifier later; [`KeywordClassifier`] is the default keyword-rule
//! implementation. Any future variant must keep the same total,
//! synchronous contract — asynchrony belongs at the caller boundary.

pub mod keyword;
mod rules;

pub use keyword::{classify, KeywordClassifier};

use crate::models::IndicatorClassification;

/// A total, synchronous name/unit → classification mapping.
pub trait Classifier {
    fn classify(&self, name: &str, unit: &str) -> IndicatorClassification;
}
