//! Escaping of free text embedded in generated Go source.

/// Escape text so it can sit between the quotes of a Go interpreted string
/// literal.
///
/// Backslash and double quote are escaped. Newline, carriage return and tab
/// use their short escapes; every other C0 control and DEL becomes a `\xNN`
/// byte escape.
pub fn escape_go_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            _ => out.push(c),
        }
    }
    out
}

/// Render text as a complete, quoted Go string literal.
pub fn go_string_literal(s: &str) -> String {
    format!("\"{}\"", escape_go_string(s))
}
