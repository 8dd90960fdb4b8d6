//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Underlined section title, as printed before each run.
#[must_use]
pub fn section_title(text: &str) -> String {
    format!("{text}\n{}", "-".repeat(text.chars().count()))
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("{}\n", section_title(text));
    } else {
        println!("{}\n", style(section_title(text)).bold().cyan());
    }
}

/// Print a success message.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        println!("[OK] {text}");
    } else {
        println!("{} {text}", style("[OK]").green().bold());
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_title_underline_matches() {
        assert_eq!(section_title("Sanity check"), "Sanity check\n------------");
    }

    #[test]
    fn section_title_counts_chars() {
        assert_eq!(section_title("µs"), "µs\n--");
    }

    #[test]
    fn print_functions_do_not_panic() {
        print_header("Algorithm times");
        print_success("all algorithms agree");
        print_error("algorithms disagree");
        print_header("");
    }
}
