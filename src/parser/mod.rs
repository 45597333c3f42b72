//! Line-oriented extraction of indicator tuples from noisy OCR/PDF text.
//!
//! The entry point is [`parse_report`]: normalize → split into lines →
//! drop noise → extract per-line → dedupe by canonical name → attach
//! numeric reference bounds. Every stage is a pure function over its
//! input plus static tables; none of them can fail.

pub mod alias;
pub mod filter;
pub mod line;
pub mod range;
pub mod report;
pub mod sanitize;

pub use line::parse_line;
pub use range::parse_range;
pub use report::parse_report;
