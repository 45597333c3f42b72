//! Health-status grading of a measured value against a reference range.

use serde::{Deserialize, Serialize};

use crate::config::CRITICAL_DEVIATION_THRESHOLD;
use crate::models::{Gender, HealthStatus};

/// A pair of independently optional bounds. One, both, or neither may be
/// present; each combination has its own evaluation semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ReferenceRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Reference bounds carried by a stored indicator template: a
/// gender-neutral pair plus optional gender-specific overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateRange {
    pub common: ReferenceRange,
    pub male: ReferenceRange,
    pub female: ReferenceRange,
}

impl TemplateRange {
    /// Bounds applicable to a gender: the gender-specific pair when
    /// either of its bounds is present, the neutral pair otherwise.
    pub fn resolve(&self, gender: Gender) -> ReferenceRange {
        let specific = match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
            Gender::Unspecified => return self.common,
        };
        if specific.is_empty() {
            self.common
        } else {
            specific
        }
    }
}

/// Grade a value against a template's range for a gender, using the
/// default severity threshold.
pub fn evaluate(value: f64, template: Option<&TemplateRange>, gender: Gender) -> HealthStatus {
    evaluate_with_threshold(value, template, gender, CRITICAL_DEVIATION_THRESHOLD)
}

/// Grade a value with an explicit severity threshold.
///
/// No template, or a template with no usable bounds, grades `Unknown`.
/// Bounds are inclusive and an absent bound is unconstrained on its
/// side. Out-of-range values are promoted to the critical variant when
/// the deviation exceeds `threshold` — deviation is measured as a
/// fraction of the range width for two-sided ranges, or of the violated
/// bound's magnitude for one-sided ones.
pub fn evaluate_with_threshold(
    value: f64,
    template: Option<&TemplateRange>,
    gender: Gender,
    threshold: f64,
) -> HealthStatus {
    let Some(template) = template else {
        return HealthStatus::Unknown;
    };
    let range = template.resolve(gender);
    if range.is_empty() {
        return HealthStatus::Unknown;
    }

    let above = range.max.map(|max| value > max).unwrap_or(false);
    let below = range.min.map(|min| value < min).unwrap_or(false);
    if !above && !below {
        return HealthStatus::Normal;
    }

    let deviation = if above {
        let max = range.max.unwrap_or_default();
        deviation_from(value - max, range, max)
    } else {
        let min = range.min.unwrap_or_default();
        deviation_from(min - value, range, min)
    };

    match (above, deviation > threshold) {
        (true, true) => HealthStatus::CriticalHigh,
        (true, false) => HealthStatus::High,
        (false, true) => HealthStatus::CriticalLow,
        (false, false) => HealthStatus::Low,
    }
}

/// Normalize an overshoot: by the range width when both bounds exist and
/// the range is non-degenerate, by the violated bound's magnitude
/// otherwise. A zero denominator grades every overshoot critical.
fn deviation_from(overshoot: f64, range: ReferenceRange, bound: f64) -> f64 {
    let denominator = match (range.min, range.max) {
        (Some(min), Some(max)) if max > min => max - min,
        _ => bound.abs(),
    };
    if denominator > 0.0 {
        overshoot / denominator
    } else {
        f64::INFINITY
    }
}
