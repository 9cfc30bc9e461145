//! Log-line escaping for user-supplied strings.

/// Escape player-supplied text for single-line logging. Names are already
/// length-capped by [`crate::validation`], so this is a plain single-pass
/// rewrite: `\n`, `\r`, `\t`, and backslash get escaped, any other control
/// character becomes `\xNN`.
pub fn escape_log(s: &str) -> String {
    use std::fmt::Write;
    let mut out = String::with_capacity(s.len() + 4);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
