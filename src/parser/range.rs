use std::sync::LazyLock;

use regex::Regex;

static TWO_SIDED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*[-~]\s*(\d+(?:\.\d+)?)").expect("invalid range pattern")
});
static UPPER_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\s*(\d+(?:\.\d+)?)").expect("invalid range pattern"));
static LOWER_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s*(\d+(?:\.\d+)?)").expect("invalid range pattern"));

/// Parse a textual reference range into numeric bounds.
///
/// Tried in order, first match wins: `min-max` (or `min~max`), then
/// `<max`, then `>min`. Empty or unparseable text yields `(None, None)`,
/// which downstream treats as never-abnormal.
pub fn parse_range(text: &str) -> (Option<f64>, Option<f64>) {
    if let Some(caps) = TWO_SIDED.captures(text) {
        let min = caps[1].parse().ok();
        let max = caps[2].parse().ok();
        return (min, max);
    }
    if let Some(caps) = UPPER_ONLY.captures(text) {
        return (None, caps[1].parse().ok());
    }
    if let Some(caps) = LOWER_ONLY.captures(text) {
        return (caps[1].parse().ok(), None);
    }
    (None, None)
}
