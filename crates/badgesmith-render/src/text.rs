/// Escapes text for use as XML character data or a double-quoted attribute value.
///
/// Covers every markup-significant character, so untrusted label/message/color strings can
/// never open a tag, an entity or close an attribute.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c if !is_xml_char(c) => out.push('\u{FFFD}'),
            _ => out.push(ch),
        }
    }
    out
}

/// XML 1.0 `Char` production. Surrogates cannot occur in a `char`.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

pub fn escape_attr(text: &str) -> String {
    escape_xml(text)
}
