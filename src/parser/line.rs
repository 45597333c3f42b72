use std::sync::LazyLock;

use regex::Regex;

use super::alias;
use crate::models::ParsedIndicator;

/// First standalone decimal number. The guard on the preceding character
/// keeps digits embedded in tokens like "HbA1c" or "CA19-9" from being
/// read as measurements.
static VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9A-Za-z.\-])(\d+(?:\.\d+)?)").expect("invalid value pattern")
});

/// Run of unit-like characters immediately after the value.
static UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z/%μµ*^]+").expect("invalid unit pattern"));

/// First standalone `number-number` / `number~number` span in a line.
static RANGE_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9A-Za-z.\-])(\d+(?:\.\d+)?\s*[-~]\s*\d+(?:\.\d+)?)")
        .expect("invalid range span pattern")
});

/// Generic structural fallback: CJK name segments (optionally
/// hyphen-joined), optional Latin/# abbreviation, mandatory decimal value,
/// optional unit token, optional numeric range, in that order.
static GENERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\p{Han}+(?:-\p{Han}+)*)\s*([A-Za-z#]+)?\s*(\d+(?:\.\d+)?)\s*([0-9A-Za-z/%μµ*^]+)?\s*(\d+(?:\.\d+)?\s*[-~]\s*\d+(?:\.\d+)?)?\s*$",
    )
    .expect("invalid generic line pattern")
});

/// Extract one indicator from a candidate line.
///
/// Two strategies, first success wins: known-alias matching, then the
/// generic structural pattern. Lines yielding no value produce `None`;
/// that is a normal outcome, not an error. Reference bounds are left
/// unset here; the report orchestrator fills them from the range text.
pub fn parse_line(line: &str) -> Option<ParsedIndicator> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_with_aliases(trimmed).or_else(|| parse_generic(trimmed))
}

/// Known-alias strategy. Aliases are tried longest-first, so when several
/// spellings occur on one line the longest surface form decides the
/// canonical name.
fn parse_with_aliases(line: &str) -> Option<ParsedIndicator> {
    for (raw_alias, canonical) in alias::entries() {
        let Some(pos) = line.find(raw_alias) else {
            continue;
        };
        let tail = &line[pos + raw_alias.len()..];
        let Some((value, unit)) = extract_value_and_unit(tail) else {
            continue;
        };
        let range_text = find_range_text(line);
        return Some(ParsedIndicator {
            name: (*canonical).to_string(),
            value,
            unit,
            reference_range_text: range_text,
            reference_min: None,
            reference_max: None,
        });
    }
    None
}

/// Generic structural strategy. A captured abbreviation known to the
/// alias table overrides the captured CJK name; the final name is passed
/// through the alias table once more before being accepted.
fn parse_generic(line: &str) -> Option<ParsedIndicator> {
    let caps = GENERIC.captures(line)?;
    let cjk_name = caps.get(1)?.as_str();
    let abbrev = caps.get(2).map(|m| m.as_str());
    let value: f64 = caps.get(3)?.as_str().parse().ok()?;
    let unit = caps.get(4).map(|m| m.as_str()).unwrap_or("");
    let range_text = caps.get(5).map(|m| m.as_str()).unwrap_or("");

    let name = abbrev
        .and_then(alias::canonical_name)
        .unwrap_or(cjk_name);
    let name = alias::canonical_name(name).unwrap_or(name);

    Some(ParsedIndicator {
        name: name.to_string(),
        value,
        unit: unit.to_string(),
        reference_range_text: range_text.to_string(),
        reference_min: None,
        reference_max: None,
    })
}

/// First standalone number in `tail` plus the unit run right after it.
/// A purely numeric "unit" is a range fragment, not a unit, and is
/// dropped.
fn extract_value_and_unit(tail: &str) -> Option<(f64, String)> {
    let caps = VALUE.captures(tail)?;
    let number = caps.get(1)?;
    let value: f64 = number.as_str().parse().ok()?;

    let rest = tail[number.end()..].trim_start();
    let unit = UNIT.find(rest).map(|m| m.as_str()).unwrap_or("");
    let unit = if unit.chars().all(|c| c.is_ascii_digit()) {
        String::new()
    } else {
        unit.to_string()
    };
    Some((value, unit))
}

fn find_range_text(line: &str) -> String {
    RANGE_SPAN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
