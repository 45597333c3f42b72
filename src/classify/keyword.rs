use super::rules::{CATEGORY_RULES, ZONE_RULES};
use super::Classifier;
use crate::models::{BodyZone, Category, Confidence, IndicatorClassification};

/// Keyword-driven classifier: ordered first-match rules over the
/// lower-cased indicator name. The default and fallback implementation
/// of [`Classifier`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl Classifier for KeywordClassifier {
    fn classify(&self, name: &str, _unit: &str) -> IndicatorClassification {
        // Unit is accepted for future rule extension; the current rule
        // set is name-driven only.
        let lower = name.to_lowercase();
        let zone = infer_zone(&lower);
        let category = infer_category(&lower);

        let confidence = if zone.is_some() || category.is_some() {
            Confidence::Medium
        } else {
            Confidence::Low
        };

        IndicatorClassification {
            body_zone: zone.unwrap_or(BodyZone::FullBody),
            category: category.unwrap_or(Category::Other),
            confidence,
        }
    }
}

/// Classify with the default keyword rules.
pub fn classify(name: &str, unit: &str) -> IndicatorClassification {
    KeywordClassifier.classify(name, unit)
}

fn infer_zone(lower_name: &str) -> Option<BodyZone> {
    ZONE_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower_name.contains(kw)))
        .map(|(zone, _)| *zone)
}

fn infer_category(lower_name: &str) -> Option<Category> {
    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower_name.contains(kw)))
        .map(|(category, _)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn liver_enzyme_classified() {
        let c = classify("谷丙转氨酶", "U/L");
        assert_eq!(c.body_zone, BodyZone::Liver);
        assert_eq!(c.category, Category::LiverFunction);
        assert_eq!(c.confidence, Confidence::Medium);
    }

    #[test]
    fn blood_routine_classified() {
        let c = classify("白细胞计数", "10^9/L");
        assert_eq!(c.body_zone, BodyZone::Blood);
        assert_eq!(c.category, Category::BloodRoutine);
    }

    #[test]
    fn alkaline_phosphatase_resolves_to_liver() {
        // Shared keyword; the earlier liver rule takes precedence over
        // the bone rule.
        let c = classify("碱性磷酸酶", "U/L");
        assert_eq!(c.body_zone, BodyZone::Liver);
    }

    #[test]
    fn bone_density_resolves_to_bone() {
        let c = classify("骨密度", "");
        assert_eq!(c.body_zone, BodyZone::Bone);
    }

    #[test]
    fn glycated_hemoglobin_is_glucose_not_blood_routine() {
        let c = classify("糖化血红蛋白", "%");
        assert_eq!(c.body_zone, BodyZone::Pancreas);
        assert_eq!(c.category, Category::BloodGlucose);
    }

    #[test]
    fn latin_acronym_matched_case_insensitively() {
        let c = classify("TSH", "mIU/L");
        assert_eq!(c.body_zone, BodyZone::Thyroid);
        assert_eq!(c.category, Category::ThyroidFunction);
    }

    #[test]
    fn tumor_marker_classified() {
        let c = classify("癌胚抗原", "ng/mL");
        assert_eq!(c.category, Category::TumorMarker);
    }

    #[test]
    fn unknown_name_gets_defaults_with_low_confidence() {
        let c = classify("完全未知的指标", "");
        assert_eq!(c.body_zone, BodyZone::FullBody);
        assert_eq!(c.category, Category::Other);
        assert_eq!(c.confidence, Confidence::Low);
    }

    #[test]
    fn classification_is_total_and_deterministic() {
        for name in ["", "abc", "白细胞", "随机文字", "X光"] {
            let first = classify(name, "");
            let second = classify(name, "");
            assert_eq!(first, second);
        }
    }

    #[test]
    fn zone_hit_without_category_is_still_medium() {
        // 脉搏-like names are not covered; pick one with a zone-only hit.
        let c = classify("眼压", "mmHg");
        assert_eq!(c.body_zone, BodyZone::Eye);
        assert_eq!(c.category, Category::Other);
        assert_eq!(c.confidence, Confidence::Medium);
    }
}
