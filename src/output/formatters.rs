//! Formatting utilities for terminal output

/// Circled number showing a word's length, like ④ for "silk"
///
/// Lengths past twenty fall back to a parenthesized number.
#[must_use]
pub fn length_badge(length: usize) -> String {
    match length {
        // ① is U+2460, ⑳ is U+2473
        1..=20 => char::from_u32(0x2460 + length as u32 - 1)
            .map_or_else(|| format!("({length})"), String::from),
        _ => format!("({length})"),
    }
}

/// Score with an explicit sign, e.g. "+4" or "-3"
#[must_use]
pub fn signed(points: i64) -> String {
    if points > 0 {
        format!("+{points}")
    } else {
        points.to_string()
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
