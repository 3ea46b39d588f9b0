//! String utilities for the domain layer.

/// Single-line preview of `s` for log output (UTF-8 safe)
///
/// Line breaks are collapsed into spaces and the result is cut to at most
/// `max_len` bytes, with `...` appended when anything was dropped.
pub fn preview(s: &str, max_len: usize) -> String {
    let flat: String = s
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if flat.len() <= max_len {
        return flat;
    }
    let mut end = max_len.saturating_sub(3);
    while end > 0 && !flat.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &flat[..end])
}
