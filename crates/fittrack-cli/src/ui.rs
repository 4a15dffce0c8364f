//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print a batch status line to stderr, green when `ok`.
pub fn print_status(ok: bool, text: &str) {
    let tag = if ok { "[OK]" } else { "[WARN]" };
    if is_color_disabled() {
        eprintln!("{tag} {text}");
    } else if ok {
        eprintln!("{} {text}", style(tag).green().bold());
    } else {
        eprintln!("{} {text}", style(tag).yellow().bold());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
