//! Report formatting utilities for terminal output
//!
//! Money formatting, bars, rules and alignment helpers shared by the
//! summary report and the listing views.

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an amount as currency with thousands separators, e.g. "$1,234.50"
/// or "-$80.00"
pub fn format_money(amount: f64, symbol: &str) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, group_thousands(whole), cents)
}

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: f64, symbol: &str) -> String {
    let text = format_money(amount, symbol);
    if amount < 0.0 {
        format!("{RED}{text}{RESET}")
    } else if amount > 0.0 {
        format!("{GREEN}{text}{RESET}")
    } else {
        text
    }
}

/// Wrap text in an ANSI color sequence
pub fn paint(text: &str, color: &str) -> String {
    format!("{color}{text}{RESET}")
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Center a title in a field of given width
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Right-align text in a field of given width
pub fn right_align(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Left-align text in a field of given width
pub fn left_align(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0, "$"), "$0.00");
        assert_eq!(format_money(4087.5, "$"), "$4,087.50");
        assert_eq!(format_money(1234567.891, "$"), "$1,234,567.89");
        assert_eq!(format_money(-80.0, "$"), "-$80.00");
        assert_eq!(format_money(999.999, "€"), "€1,000.00");
        assert_eq!(format_money(-0.001, "$"), "$0.00");
        assert_eq!(format_money(f64::NAN, "$"), "$0.00");
    }

    #[test]
    fn test_format_money_colored() {
        assert!(format_money_colored(-5.0, "$").starts_with(RED));
        assert!(format_money_colored(5.0, "$").starts_with(GREEN));
        assert_eq!(format_money_colored(0.0, "$"), "$0.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);

        let capped = format_bar(300.0, 100.0, 10);
        assert_eq!(capped.chars().filter(|c| *c == '█').count(), 10);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Streaming Services", 9), "Stream...");
        assert_eq!(truncate("Gym", 5), "Gym");
        assert_eq!(truncate("Café au lait", 4), "C...");
        assert_eq!(truncate("abcdef", 2), "..");
    }

    #[test]
    fn test_alignment() {
        assert_eq!(right_align("abc", 5), "  abc");
        assert_eq!(left_align("abc", 5), "abc  ");
        assert_eq!(left_align("abcdef", 3), "abcdef");
    }

    #[test]
    fn test_header_centered() {
        assert_eq!(format_header("Hi", 6), "  Hi");
        assert_eq!(format_header("Too long", 4), "Too long");
    }
}
