/// Escape the five HTML-significant characters.
///
/// Accepts `&str` or `Option<&str>`; absent input yields an empty string.
pub fn escape_html<'a>(input: impl Into<Option<&'a str>>) -> String {
    let Some(input) = input.into() else {
        return String::new();
    };

    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
