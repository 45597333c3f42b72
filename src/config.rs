/// Crate-level constants
pub const CRATE_NAME: &str = "tijian-core";
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Deviation beyond which an out-of-range value is graded critical.
///
/// Expressed as a fraction of the range width (two-sided ranges) or of the
/// violated bound's magnitude (one-sided ranges). One policy for all
/// indicators; callers needing a different threshold use
/// `evaluation::evaluate_with_threshold`.
pub const CRITICAL_DEVIATION_THRESHOLD: f64 = 0.20;

/// Default tracing filter when RUST_LOG is unset.
///
/// The library installs no subscriber of its own; this is for the
/// embedding application's subscriber setup.
pub fn default_log_filter() -> &'static str {
    "tijian_core=debug"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_twenty_percent() {
        assert!((CRITICAL_DEVIATION_THRESHOLD - 0.20).abs() < f64::EPSILON);
    }

    #[test]
    fn crate_version_matches_cargo() {
        assert_eq!(CRATE_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn log_filter_scopes_this_crate() {
        assert!(default_log_filter().starts_with("tijian_core"));
    }
}
