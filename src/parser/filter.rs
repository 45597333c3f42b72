use std::sync::LazyLock;

use regex::Regex;

/// Noise-line patterns. A line matching any of them never reaches the
/// line parser. Semantics are OR over independent patterns, so order
/// carries no meaning.
static NOISE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Masked phone numbers: 176****3916
        r"\d{3}\*{3,}\d+",
        // ISO-like dates at line start: 2025-04-24, 2025/4/24, 2025.04.24
        r"^\d{4}[-/.]\d{1,2}[-/.]\d{1,2}",
        // Form-label prefixes on checkup cover sheets
        r"^(姓名|性别|年龄|科室|医院|报告|检查|送检)",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("invalid noise pattern"))
    .collect()
});

/// True if the line is noise and should be discarded before parsing.
/// Leading/trailing whitespace is ignored; empty lines are noise.
pub fn should_ignore(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return true;
    }
    NOISE_PATTERNS.iter().any(|p| p.is_match(trimmed))
}
