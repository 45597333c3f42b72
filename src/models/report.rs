use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One indicator extracted from a single report line.
///
/// Transient: produced during one parse call and handed off wholesale to
/// the caller, which converts it into a stored record. Abnormality is
/// derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIndicator {
    /// Canonical indicator name, after alias resolution.
    pub name: String,
    pub value: f64,
    /// Unit string as it appeared on the line, possibly empty.
    pub unit: String,
    /// Original textual reference range, possibly empty.
    pub reference_range_text: String,
    pub reference_min: Option<f64>,
    pub reference_max: Option<f64>,
}

impl ParsedIndicator {
    /// True iff the value falls outside whichever bounds are present.
    /// With neither bound present the indicator is never abnormal.
    pub fn is_abnormal(&self) -> bool {
        if let Some(min) = self.reference_min {
            if self.value < min {
                return true;
            }
        }
        if let Some(max) = self.reference_max {
            if self.value > max {
                return true;
            }
        }
        false
    }
}

/// Aggregate result of parsing one text blob.
///
/// Indicators are unique by canonical name and kept in first-seen order.
/// `raw_text` holds the original input verbatim for audit/display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedReport {
    pub id: Uuid,
    pub raw_text: String,
    pub parsed_at: DateTime<Utc>,
    pub indicators: Vec<ParsedIndicator>,
}

impl ParsedReport {
    pub fn abnormal_count(&self) -> usize {
        self.indicators.iter().filter(|i| i.is_abnormal()).count()
    }
}
