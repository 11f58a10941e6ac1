//! Syntax highlighting for extracted code excerpts.
//!
//! Excerpts carry no reliable language tag of their own, so the language is
//! sniffed from the file extension in the owning item's title line
//! (`📄 main.go:42` highlights as Go). Highlighting runs once when the review
//! result is applied, producing owned `Line<'static>` values that the
//! checklist view can render on every frame without re-highlighting.

use std::sync::LazyLock;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;

static PS: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static TS: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Extracts a file-extension hint from an item title line.
///
/// Takes the text after the last `.`, cut at the first non-alphanumeric
/// character (usually the `:` before the line number). Returns `"txt"` when
/// no usable extension is present, which maps to plain-text highlighting.
pub fn extension_hint(title: &str) -> &str {
    if let Some(dot) = title.rfind('.') {
        let rest = &title[dot + 1..];
        let end = rest
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(rest.len());
        if end > 0 {
            return &rest[..end];
        }
    }
    "txt"
}

/// Highlights one code excerpt into owned ratatui lines, one per source line.
///
/// Unknown extensions fall back to plain-text syntax; a missing theme falls
/// back to unstyled spans. Never fails.
pub fn highlight_block(code: &str, ext: &str) -> Vec<Line<'static>> {
    let theme = TS
        .themes
        .get("base16-ocean.dark")
        .or_else(|| TS.themes.values().next());
    let syntax = PS
        .find_syntax_by_extension(ext)
        .unwrap_or_else(|| PS.find_syntax_plain_text());

    let Some(theme) = theme else {
        return code.lines().map(|l| Line::from(l.to_owned())).collect();
    };

    let mut h = HighlightLines::new(syntax, theme);
    code.lines()
        .map(|line| {
            let ranges = h.highlight_line(line, &PS).unwrap_or_default();
            let spans: Vec<Span<'static>> = ranges
                .into_iter()
                .map(|(style, text)| syntect_to_span(style, text))
                .collect();
            if spans.is_empty() {
                Line::from(line.to_owned())
            } else {
                Line::from(spans)
            }
        })
        .collect()
}

/// Converts a syntect (Style, &str) pair to an owned ratatui Span.
///
/// Rebuilds color and modifier fields by hand; a zero-alpha syntect color
/// means "unset" and is skipped.
fn syntect_to_span(style: syntect::highlighting::Style, content: &str) -> Span<'static> {
    use syntect::highlighting::Color as SC;
    let to_color = |c: SC| -> Option<Color> {
        if c.a > 0 { Some(Color::Rgb(c.r, c.g, c.b)) } else { None }
    };
    let mut ratatui_style = Style::default();
    if let Some(fg) = to_color(style.foreground) {
        ratatui_style = ratatui_style.fg(fg);
    }
    if let Some(bg) = to_color(style.background) {
        ratatui_style = ratatui_style.bg(bg);
    }
    if style.font_style.contains(syntect::highlighting::FontStyle::BOLD) {
        ratatui_style = ratatui_style.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(syntect::highlighting::FontStyle::ITALIC) {
        ratatui_style = ratatui_style.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(syntect::highlighting::FontStyle::UNDERLINE) {
        ratatui_style = ratatui_style.add_modifier(Modifier::UNDERLINED);
    }
    Span::styled(content.to_owned(), ratatui_style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_hint_reads_past_last_dot() {
        assert_eq!(extension_hint("📄 main.go:10"), "go");
        assert_eq!(extension_hint("src/components/App.test.tsx:42"), "tsx");
        assert_eq!(extension_hint("util.py"), "py");
    }

    #[test]
    fn extension_hint_falls_back_to_txt() {
        assert_eq!(extension_hint("no extension here"), "txt");
        assert_eq!(extension_hint("trailing dot."), "txt");
        assert_eq!(extension_hint(""), "txt");
    }

    #[test]
    fn highlight_emits_one_line_per_source_line() {
        let lines = highlight_block("let x = 1;\nlet y = 2;", "rs");
        assert_eq!(lines.len(), 2);
        assert!(!lines[0].spans.is_empty());
    }

    #[test]
    fn unknown_extension_still_highlights_as_plain_text() {
        let lines = highlight_block("whatever goes here", "zzz");
        assert_eq!(lines.len(), 1);
    }
}
