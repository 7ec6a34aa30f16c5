//! HTML text escaping
//!
//! Chat text is user supplied and must never be interpreted as markup.

/// Escape text for use as HTML element content or a quoted attribute value
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_is_inert() {
        assert_eq!(escape_text("<img src=x>"), "&lt;img src=x&gt;");
        assert_eq!(
            escape_text(r#"<a href="j" onclick='x'>"#),
            "&lt;a href=&quot;j&quot; onclick=&#39;x&#39;&gt;"
        );
    }

    #[test]
    fn test_ampersand_escaped_once() {
        assert_eq!(escape_text("B&B &amp; more"), "B&amp;B &amp;amp; more");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_text("Room 12, late check-out?"), "Room 12, late check-out?");
    }
}
