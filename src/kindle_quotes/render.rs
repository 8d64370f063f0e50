//! Plain-text presentation of a quote: wrapped prose plus attribution.

use unicode_width::UnicodeWidthStr;

use crate::model::Quote;

const WRAP_WIDTH: usize = 90;

/// Render a quote for the terminal: each paragraph wrapped to 90 columns,
/// then a blank line and `"<title> (<author>, ...)"`.
pub fn simple(quote: &Quote) -> String {
    let body = quote
        .quote
        .split("\n\n")
        .map(|paragraph| fill(paragraph, WRAP_WIDTH))
        .collect::<Vec<String>>()
        .join("\n\n");
    format!("{body}\n\n{} ({})", quote.title, quote.authors.join(", "))
}

// Greedy word wrap, measured in display columns.
fn fill(paragraph: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}
