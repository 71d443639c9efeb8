//! Formatting utilities used for CLI and export outputs.

/// `Some(text)` only when the optional field carries non-blank text.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Horizontal rule built from the configured separator char.
pub fn rule(separator: &str, width: usize) -> String {
    let ch = separator.chars().next().unwrap_or('-');
    std::iter::repeat_n(ch, width).collect()
}
