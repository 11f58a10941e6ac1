//! Word wrapping and inline-markup stripping shared by both render paths.

/// Default wrap width used when the caller passes a zero or negative width.
const DEFAULT_WIDTH: i32 = 80;

/// Continuation indent prepended to every wrapped line after the first.
const CONTINUATION_INDENT: &str = "  ";

/// Reflows `text` so no line exceeds `width` characters, joining words with
/// single spaces and indenting continuation lines by two spaces.
///
/// Words are never split: a single word longer than `width` is emitted
/// unbroken and overflows the nominal width. A zero or negative width falls
/// back to 80. Pure and deterministic.
pub fn wrap(text: &str, width: i32) -> String {
    let width = if width <= 0 { DEFAULT_WIDTH } else { width } as usize;

    let mut out = String::new();
    let mut line_len = 0usize;

    for (i, word) in text.split_whitespace().enumerate() {
        let word_len = word.chars().count();
        if line_len + word_len + 1 > width && line_len > 0 {
            out.push('\n');
            out.push_str(CONTINUATION_INDENT);
            line_len = CONTINUATION_INDENT.len();
        } else if i > 0 {
            out.push(' ');
            line_len += 1;
        }
        out.push_str(word);
        line_len += word_len;
    }

    out
}

/// Removes inline emphasis and code markers, keeping the text between them.
pub fn strip_inline(text: &str) -> String {
    text.replace("**", "")
        .replace("__", "")
        .replace('*', "")
        .replace('_', "")
        .replace('`', "")
}
