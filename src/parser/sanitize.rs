/// Normalize OCR text before line splitting.
///
/// OCR of Chinese checkup reports routinely emits full-width ASCII forms
/// (１２．５, ％, ～) that would defeat the numeric patterns downstream.
/// Non-whitespace control characters are stripped; whitespace is spared
/// because PDF extraction emits tab-delimited tables, and tabs and the
/// ideographic space are folded to plain spaces. Full-width ASCII is
/// folded to half-width; line content is otherwise left alone.
pub fn normalize_ocr_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_whitespace() || !c.is_control())
        .map(|c| match c {
            '\t' | '\u{3000}' => ' ',
            // Full-width ASCII block: ！(U+FF01) .. ～(U+FF5E)
            '\u{FF01}'..='\u{FF5E}' => {
                char::from_u32(c as u32 - 0xFF01 + 0x21).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}
