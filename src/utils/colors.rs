/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Green for confessed entries, yellow for pending ones.
pub fn color_for_confessed(confessed: bool) -> &'static str {
    if confessed { GREEN } else { YELLOW }
}

/// Wrap a rendered line in the given color.
pub fn paint(line: &str, color: &str) -> String {
    format!("{color}{line}{RESET}")
}
