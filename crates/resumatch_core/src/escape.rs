//! HTML escaping for service-controlled text.

/// Escapes text for interpolation into HTML markup.
///
/// Everything the analysis service sends (job titles, level labels, error
/// details) passes through here before it reaches any markup string.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}
