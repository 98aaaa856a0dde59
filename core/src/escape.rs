//! Escaping for text embedded in a JavaScript template literal.

/// Escapes `text` so it can sit between backticks in a script without ending
/// the literal or starting a `${...}` substitution.
///
/// Each character is visited once, so the backslashes added for backtick and
/// dollar sign are never escaped a second time. `<` becomes `\x3C` so a
/// `</script>` in the text cannot close the surrounding script element.
/// Carriage returns are written as `\r`; a raw CR inside a template literal
/// is read back as a line feed, which would turn CRLF files into LF.
pub fn escape_template_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 16);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '`' => out.push_str("\\`"),
            '$' => out.push_str("\\$"),
            '<' => out.push_str("\\x3C"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests;
