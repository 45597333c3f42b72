use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

use super::{filter, line, range, sanitize};
use crate::models::ParsedReport;

/// Parse one OCR/PDF-extracted text blob into a structured report.
///
/// Single pass over the lines in input order: noise lines are dropped,
/// the rest go through the line parser, duplicates by canonical name are
/// dropped (first occurrence wins), and each kept indicator gets its
/// numeric bounds from its captured range text. Never fails; a report
/// with zero indicators is a valid outcome. `raw_text` is stored
/// verbatim, so re-parsing a report's own raw text reproduces its
/// indicator set.
pub fn parse_report(raw_text: &str) -> ParsedReport {
    let parsed_at = Utc::now();
    let normalized = sanitize::normalize_ocr_text(raw_text);

    let mut seen: HashSet<String> = HashSet::new();
    let mut indicators = Vec::new();
    for candidate in normalized.lines() {
        if filter::should_ignore(candidate) {
            continue;
        }
        let Some(mut indicator) = line::parse_line(candidate) else {
            continue;
        };
        if !seen.insert(indicator.name.clone()) {
            tracing::debug!(name = %indicator.name, "duplicate indicator dropped");
            continue;
        }
        let (min, max) = range::parse_range(&indicator.reference_range_text);
        indicator.reference_min = min;
        indicator.reference_max = max;
        indicators.push(indicator);
    }

    tracing::debug!(
        lines = normalized.lines().count(),
        indicators = indicators.len(),
        "report parsed"
    );

    ParsedReport {
        id: Uuid::new_v4(),
        raw_text: raw_text.to_string(),
        parsed_at,
        indicators,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
姓名: 张三
性别: 男
176****3916
2025-04-24
白细胞计数 WBC 5.00 10^9/L 4-10
血红蛋白 HGB 150 g/L 130-175
谷丙转氨酶 ALT 25 U/L 0-40
随机文字没有数字
";

    #[test]
    fn parses_sample_report() {
        let report = parse_report(SAMPLE);
        assert_eq!(report.indicators.len(), 3);

        let wbc = &report.indicators[0];
        assert_eq!(wbc.name, "白细胞计数");
        assert_eq!(wbc.value, 5.00);
        assert_eq!(wbc.unit, "10^9/L");
        assert_eq!(wbc.reference_min, Some(4.0));
        assert_eq!(wbc.reference_max, Some(10.0));
        assert!(!wbc.is_abnormal());
    }

    #[test]
    fn noise_lines_never_become_indicators() {
        let report = parse_report("姓名: 张三\n176****3916\n2025-04-24\n");
        assert!(report.indicators.is_empty());
    }

    #[test]
    fn names_are_pairwise_distinct() {
        let report = parse_report(SAMPLE);
        let mut names: Vec<_> = report.indicators.iter().map(|i| &i.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), report.indicators.len());
    }

    #[test]
    fn duplicate_alias_first_occurrence_wins() {
        let text = "白细胞计数 5.0 10^9/L 4-10\nWBC 9.9 10^9/L 4-10\n";
        let report = parse_report(text);
        assert_eq!(report.indicators.len(), 1);
        assert_eq!(report.indicators[0].name, "白细胞计数");
        assert_eq!(report.indicators[0].value, 5.0);
    }

    #[test]
    fn first_seen_order_preserved() {
        let text = "谷丙转氨酶 25 U/L 0-40\n白细胞计数 5.0 10^9/L 4-10\n";
        let report = parse_report(text);
        let names: Vec<_> = report.indicators.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["谷丙转氨酶", "白细胞计数"]);
    }

    #[test]
    fn raw_text_stored_verbatim() {
        let report = parse_report(SAMPLE);
        assert_eq!(report.raw_text, SAMPLE);
    }

    #[test]
    fn reparse_of_raw_text_is_idempotent() {
        let first = parse_report(SAMPLE);
        let second = parse_report(&first.raw_text);
        assert_eq!(first.indicators, second.indicators);
    }

    #[test]
    fn empty_input_yields_empty_report() {
        let report = parse_report("");
        assert!(report.indicators.is_empty());
        assert_eq!(report.raw_text, "");
    }

    #[test]
    fn unparseable_range_keeps_indicator_without_bounds() {
        let report = parse_report("癌胚抗原 CEA 2.1 ng/mL\n");
        assert_eq!(report.indicators.len(), 1);
        let cea = &report.indicators[0];
        assert_eq!(cea.reference_min, None);
        assert_eq!(cea.reference_max, None);
        assert!(!cea.is_abnormal());
    }

    #[test]
    fn tab_separated_line_is_parsed() {
        let report = parse_report("白细胞计数\tWBC\t5.2\t10^9/L\t4-10\n");
        assert_eq!(report.indicators.len(), 1);
        let wbc = &report.indicators[0];
        assert_eq!(wbc.name, "白细胞计数");
        assert_eq!(wbc.value, 5.2);
        assert_eq!(wbc.unit, "10^9/L");
        assert_eq!(wbc.reference_range_text, "4-10");
        assert_eq!(wbc.reference_min, Some(4.0));
        assert_eq!(wbc.reference_max, Some(10.0));
    }

    #[test]
    fn full_width_digits_are_parsed() {
        let report = parse_report("血红蛋白 １５０ g/L １３０-１７５\n");
        assert_eq!(report.indicators.len(), 1);
        assert_eq!(report.indicators[0].value, 150.0);
        assert_eq!(report.indicators[0].reference_min, Some(130.0));
        assert_eq!(report.indicators[0].reference_max, Some(175.0));
    }

    #[test]
    fn abnormal_value_flagged() {
        let report = parse_report("谷丙转氨酶 88 U/L 0-40\n");
        assert_eq!(report.abnormal_count(), 1);
    }

    #[test]
    fn parse_classify_evaluate_end_to_end() {
        use crate::classify::classify;
        use crate::evaluation::{evaluate, ReferenceRange, TemplateRange};
        use crate::models::{BodyZone, Category, Gender, HealthStatus};

        let report = parse_report("白细胞计数 WBC 5.00 10^9/L 4-10\n");
        let wbc = &report.indicators[0];

        let classification = classify(&wbc.name, &wbc.unit);
        assert_eq!(classification.body_zone, BodyZone::Blood);
        assert_eq!(classification.category, Category::BloodRoutine);

        let template = TemplateRange {
            common: ReferenceRange::new(wbc.reference_min, wbc.reference_max),
            ..Default::default()
        };
        assert_eq!(
            evaluate(wbc.value, Some(&template), Gender::Unspecified),
            HealthStatus::Normal
        );
    }
}
