//! Helpers for putting player-supplied text into log lines.
//!
//! Chat text and names come straight from players, so they are escaped to keep
//! each log record on one line and clipped to keep noisy input from flooding logs.

const MAX_PREVIEW: usize = 64;

/// Escape control characters and clip to [`MAX_PREVIEW`] characters.
pub fn preview(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 4);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\u{{{:04X}}}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
