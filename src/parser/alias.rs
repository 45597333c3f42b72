use std::collections::HashMap;
use std::sync::LazyLock;

/// Raw surface form → canonical indicator name.
///
/// Pure data. Each distinct lab indicator is stored under one canonical
/// Chinese name; Chinese full names, common abbreviations and English
/// acronyms all map onto it. Lookup is exact-string keyed and
/// case-sensitive for Latin tokens. Extending coverage means adding pairs.
const ALIAS_PAIRS: &[(&str, &str)] = &[
    // Blood routine
    ("白细胞计数", "白细胞计数"),
    ("白细胞", "白细胞计数"),
    ("WBC", "白细胞计数"),
    ("红细胞计数", "红细胞计数"),
    ("红细胞", "红细胞计数"),
    ("RBC", "红细胞计数"),
    ("血红蛋白", "血红蛋白"),
    ("血色素", "血红蛋白"),
    ("HGB", "血红蛋白"),
    ("Hb", "血红蛋白"),
    ("血小板计数", "血小板计数"),
    ("血小板", "血小板计数"),
    ("PLT", "血小板计数"),
    ("红细胞压积", "红细胞压积"),
    ("红细胞比容", "红细胞压积"),
    ("HCT", "红细胞压积"),
    ("平均红细胞体积", "平均红细胞体积"),
    ("MCV", "平均红细胞体积"),
    // Liver function
    ("谷丙转氨酶", "谷丙转氨酶"),
    ("丙氨酸氨基转移酶", "谷丙转氨酶"),
    ("ALT", "谷丙转氨酶"),
    ("谷草转氨酶", "谷草转氨酶"),
    ("天冬氨酸氨基转移酶", "谷草转氨酶"),
    ("AST", "谷草转氨酶"),
    ("总胆红素", "总胆红素"),
    ("TBIL", "总胆红素"),
    ("直接胆红素", "直接胆红素"),
    ("DBIL", "直接胆红素"),
    ("总蛋白", "总蛋白"),
    ("TP", "总蛋白"),
    ("白蛋白", "白蛋白"),
    ("ALB", "白蛋白"),
    ("碱性磷酸酶", "碱性磷酸酶"),
    ("ALP", "碱性磷酸酶"),
    ("谷氨酰转肽酶", "谷氨酰转肽酶"),
    ("γ-谷氨酰转移酶", "谷氨酰转肽酶"),
    ("GGT", "谷氨酰转肽酶"),
    // Kidney function
    ("肌酐", "肌酐"),
    ("血肌酐", "肌酐"),
    ("CREA", "肌酐"),
    ("Cr", "肌酐"),
    ("尿素氮", "尿素氮"),
    ("尿素", "尿素氮"),
    ("BUN", "尿素氮"),
    ("尿酸", "尿酸"),
    ("UA", "尿酸"),
    ("胱抑素C", "胱抑素C"),
    ("CysC", "胱抑素C"),
    // Blood lipids
    ("总胆固醇", "总胆固醇"),
    ("胆固醇", "总胆固醇"),
    ("TC", "总胆固醇"),
    ("甘油三酯", "甘油三酯"),
    ("TG", "甘油三酯"),
    ("高密度脂蛋白胆固醇", "高密度脂蛋白胆固醇"),
    ("高密度脂蛋白", "高密度脂蛋白胆固醇"),
    ("HDL-C", "高密度脂蛋白胆固醇"),
    ("低密度脂蛋白胆固醇", "低密度脂蛋白胆固醇"),
    ("低密度脂蛋白", "低密度脂蛋白胆固醇"),
    ("LDL-C", "低密度脂蛋白胆固醇"),
    // Glucose
    ("空腹血糖", "空腹血糖"),
    ("血糖", "空腹血糖"),
    ("GLU", "空腹血糖"),
    ("FPG", "空腹血糖"),
    ("糖化血红蛋白", "糖化血红蛋白"),
    ("HbA1c", "糖化血红蛋白"),
    // Thyroid
    ("促甲状腺激素", "促甲状腺激素"),
    ("TSH", "促甲状腺激素"),
    ("游离三碘甲状腺原氨酸", "游离三碘甲状腺原氨酸"),
    ("FT3", "游离三碘甲状腺原氨酸"),
    ("游离甲状腺素", "游离甲状腺素"),
    ("FT4", "游离甲状腺素"),
    // Tumor markers
    ("甲胎蛋白", "甲胎蛋白"),
    ("AFP", "甲胎蛋白"),
    ("癌胚抗原", "癌胚抗原"),
    ("CEA", "癌胚抗原"),
    ("前列腺特异性抗原", "前列腺特异性抗原"),
    ("PSA", "前列腺特异性抗原"),
    ("糖类抗原125", "糖类抗原125"),
    ("CA125", "糖类抗原125"),
    ("糖类抗原199", "糖类抗原199"),
    ("CA19-9", "糖类抗原199"),
    ("CA199", "糖类抗原199"),
    // Inflammation
    ("C反应蛋白", "C反应蛋白"),
    ("CRP", "C反应蛋白"),
];

/// Exact-match lookup table.
static LOOKUP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ALIAS_PAIRS.iter().copied().collect());

/// Alias pairs ordered longest-alias-first (by char count).
///
/// When several aliases occur on the same line the longest surface form
/// wins, so "白细胞计数" beats its own substring "白细胞".
static ORDERED: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
    let mut pairs: Vec<_> = ALIAS_PAIRS.to_vec();
    pairs.sort_by(|a, b| {
        b.0.chars()
            .count()
            .cmp(&a.0.chars().count())
            .then_with(|| a.0.cmp(b.0))
    });
    pairs
});

/// Resolve a raw token to its canonical name, if known.
pub fn canonical_name(raw: &str) -> Option<&'static str> {
    LOOKUP.get(raw).copied()
}

/// All (alias, canonical) pairs in matching priority order.
pub fn entries() -> &'static [(&'static str, &'static str)] {
    &ORDERED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acronym_resolves_to_canonical() {
        assert_eq!(canonical_name("WBC"), Some("白细胞计数"));
        assert_eq!(canonical_name("ALT"), Some("谷丙转氨酶"));
        assert_eq!(canonical_name("HbA1c"), Some("糖化血红蛋白"));
    }

    #[test]
    fn chinese_short_form_resolves() {
        assert_eq!(canonical_name("白细胞"), Some("白细胞计数"));
        assert_eq!(canonical_name("血糖"), Some("空腹血糖"));
    }

    #[test]
    fn canonical_resolves_to_itself() {
        assert_eq!(canonical_name("白细胞计数"), Some("白细胞计数"));
        assert_eq!(canonical_name("肌酐"), Some("肌酐"));
    }

    #[test]
    fn latin_lookup_is_case_sensitive() {
        assert_eq!(canonical_name("wbc"), None);
        assert_eq!(canonical_name("Hb"), Some("血红蛋白"));
        assert_eq!(canonical_name("HB"), None);
    }

    #[test]
    fn unknown_token_returns_none() {
        assert_eq!(canonical_name("随机文字"), None);
        assert_eq!(canonical_name(""), None);
    }

    #[test]
    fn entries_are_longest_first() {
        let entries = entries();
        let long = entries.iter().position(|e| e.0 == "白细胞计数").unwrap();
        let short = entries.iter().position(|e| e.0 == "白细胞").unwrap();
        assert!(long < short);
        for window in entries.windows(2) {
            assert!(window[0].0.chars().count() >= window[1].0.chars().count());
        }
    }
}
