/// Escapes HTML-significant characters in free-text input before storage.
/// Stored values are safe to interpolate into admin views without re-escaping.
pub fn sanitize_html(input: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            sanitize_html("<script>alert('hi')</script>"),
            "&lt;script&gt;alert(&#39;hi&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn ampersand_escaped_first() {
        assert_eq!(sanitize_html("fish & chips"), "fish &amp; chips");
        assert_eq!(sanitize_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(sanitize_html("Margherita every time"), "Margherita every time");
    }
}
