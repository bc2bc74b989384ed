//! Escaping for untrusted report text
//!
//! Scan results carry strings the service copied out of DNS answers (TXT
//! records, CNAME targets, nameserver names). Anyone who controls a zone
//! controls those strings, so they are escaped before they reach markup or a
//! terminal.

/// Escape the five markup-sensitive characters.
///
/// `&` `<` `>` `"` `'` become `&amp;` `&lt;` `&gt;` `&quot;` `&#039;`. Every
/// other character is copied unchanged. Not idempotent: escape each value
/// exactly once.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Make untrusted text safe to print to a terminal.
///
/// Control characters (including ESC, which starts ANSI sequences) are
/// replaced with U+FFFD. Tabs are kept.
pub fn sanitize_terminal(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() && c != '\t' {
                '\u{FFFD}'
            } else {
                c
            }
        })
        .collect()
}
