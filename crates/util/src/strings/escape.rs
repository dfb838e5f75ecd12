use std::fmt::Write;

/// Escape a string for embedding between double quotes in JSON text.
///
/// Escapes the double quote, the backslash and every control character
/// (0x00-0x1F). Control characters with a short form (`\b`, `\t`, `\n`,
/// `\f`, `\r`) use it, the rest use `\u00XX` with lowercase hex digits.
///
/// # Examples
///
/// ```
/// use json_dedupe_util::strings::escape;
///
/// assert_eq!(escape("hello"), "hello");
/// assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
/// assert_eq!(escape("line1\nline2"), "line1\\nline2");
/// ```
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(&mut out, s);
    out
}

/// Append the escaped form of `s` to `out`.
///
/// Unescaped runs are copied as whole slices, so strings with nothing to
/// escape cost a single `push_str`.
pub fn escape_into(out: &mut String, s: &str) {
    let mut last = 0;
    for (i, ch) in s.char_indices() {
        let short = match ch {
            '"' => "\\\"",
            '\\' => "\\\\",
            '\u{0008}' => "\\b",
            '\t' => "\\t",
            '\n' => "\\n",
            '\u{000C}' => "\\f",
            '\r' => "\\r",
            c if (c as u32) < 0x20 => "",
            _ => continue,
        };
        out.push_str(&s[last..i]);
        if short.is_empty() {
            // Writing into a String cannot fail.
            let _ = write!(out, "\\u{:04x}", ch as u32);
        } else {
            out.push_str(short);
        }
        last = i + ch.len_utf8();
    }
    out.push_str(&s[last..]);
}
