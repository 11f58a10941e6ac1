//! Line-oriented markdown styling for the fallback review view.
//!
//! Used when item extraction finds nothing to make into a checklist: the raw
//! review text is still shown readably instead of as plain markdown soup.
//! This is a renderer, not a parser — each line is classified independently
//! (headings, bullets, file references, rules, fenced code) and unknown
//! constructs fall through as wrapped prose.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use revcheck_core::{strip_inline, wrap, FILE_MARKER};

use crate::theme::Theme;

/// Styles review text into renderable lines, wrapped to `max_width`.
pub fn render_markdown(text: &str, max_width: i32, theme: &Theme) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    let mut in_fence = false;
    let mut code_buffer: Vec<String> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim_end();
        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            if in_fence {
                flush_code(&mut out, &mut code_buffer, theme);
            }
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            code_buffer.push(line.to_owned());
            continue;
        }

        if trimmed.starts_with("---") || trimmed.starts_with("===") {
            out.push(rule(max_width, theme));
        } else if trimmed.is_empty() {
            out.push(Line::default());
        } else if let Some(heading) = numbered_heading(trimmed) {
            out.push(Line::from(Span::styled(
                format!("▸ {heading}"),
                Style::default().fg(theme.section).add_modifier(Modifier::BOLD),
            )));
        } else if trimmed.starts_with("**") && trimmed.ends_with("**") && trimmed.len() > 4 {
            let inner = trimmed.trim_matches('*').trim_end_matches(':').to_owned();
            out.push(Line::from(Span::styled(
                format!("  • {inner}"),
                Style::default().fg(theme.heading).add_modifier(Modifier::BOLD),
            )));
        } else if trimmed.starts_with('#') {
            let rest = trimmed.trim_start_matches('#').trim_start();
            out.push(Line::from(Span::styled(
                format!("▸ {}", strip_inline(rest)),
                Style::default().fg(theme.section).add_modifier(Modifier::BOLD),
            )));
        } else if let Some(rest) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
            let wrapped = wrap(&strip_inline(rest), max_width - 6);
            for (i, l) in wrapped.lines().enumerate() {
                let prefix = if i == 0 { "    • " } else { "      " };
                out.push(Line::from(Span::styled(
                    format!("{prefix}{}", l.trim_start()),
                    Style::default().fg(theme.text),
                )));
            }
        } else if trimmed.contains(FILE_MARKER) {
            out.push(Line::from(Span::styled(
                format!("  {trimmed}"),
                Style::default().fg(theme.file_ref).add_modifier(Modifier::BOLD),
            )));
        } else {
            for l in wrap(&strip_inline(trimmed), max_width - 4).lines() {
                out.push(Line::from(Span::styled(
                    format!("  {}", l.trim_start()),
                    Style::default().fg(theme.text),
                )));
            }
        }
    }

    // A review cut off mid-fence still shows the partial snippet.
    if !code_buffer.is_empty() {
        flush_code(&mut out, &mut code_buffer, theme);
    }

    out
}

fn flush_code(out: &mut Vec<Line<'static>>, buffer: &mut Vec<String>, theme: &Theme) {
    for code_line in buffer.drain(..) {
        out.push(Line::from(Span::styled(
            format!("    {code_line}"),
            Style::default().fg(theme.code).bg(theme.code_bg),
        )));
    }
    out.push(Line::default());
}

fn rule(max_width: i32, theme: &Theme) -> Line<'static> {
    let width = max_width.max(0) as usize;
    Line::from(Span::styled("─".repeat(width), Style::default().fg(theme.separator)))
}

/// Recognizes `1. **Heading**:` style section titles (single digit only,
/// matching the four-section review layout).
fn numbered_heading(line: &str) -> Option<String> {
    let bytes = line.as_bytes();
    if bytes.len() > 3 && bytes[0].is_ascii_digit() && bytes[0] != b'0' && bytes[1] == b'.' && bytes[2] == b' ' {
        let title = strip_inline(&line[3..]);
        Some(title.trim_end_matches(':').to_owned())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn render(text: &str) -> Vec<String> {
        let theme = Theme::dark();
        render_markdown(text, 80, &theme).iter().map(text_of).collect()
    }

    #[test]
    fn numbered_section_gets_arrow_prefix() {
        let lines = render("3. **Issues Found**:");
        assert_eq!(lines, vec!["▸ Issues Found"]);
    }

    #[test]
    fn bold_line_becomes_sub_heading() {
        let lines = render("**Performance**");
        assert_eq!(lines, vec!["  • Performance"]);
    }

    #[test]
    fn bold_heading_drops_trailing_colon() {
        let lines = render("**Issues Found:**");
        assert_eq!(lines, vec!["  • Issues Found"]);
    }

    #[test]
    fn hash_headings_are_styled_like_sections() {
        let lines = render("## Overview");
        assert_eq!(lines, vec!["▸ Overview"]);
    }

    #[test]
    fn hash_heading_without_space_still_matches() {
        let lines = render("##Overview");
        assert_eq!(lines, vec!["▸ Overview"]);
    }

    #[test]
    fn bullets_are_wrapped_with_hanging_indent() {
        let long = format!("- {}", "word ".repeat(30).trim_end());
        let lines = render(&long);
        assert!(lines.len() > 1);
        assert!(lines[0].starts_with("    • word"));
        assert!(lines[1].starts_with("      "));
    }

    #[test]
    fn file_reference_lines_are_passed_through_indented() {
        let lines = render("📄 main.go:42");
        assert_eq!(lines, vec!["  📄 main.go:42"]);
    }

    #[test]
    fn horizontal_rules_render_full_width() {
        let lines = render("---");
        assert_eq!(lines[0].chars().next(), Some('─'));
        assert_eq!(lines[0].chars().count(), 80);
    }

    #[test]
    fn fenced_code_is_indented_with_trailing_blank() {
        let lines = render("```go\nx := 1\ny := 2\n```\nafter");
        assert_eq!(lines[0], "    x := 1");
        assert_eq!(lines[1], "    y := 2");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "  after");
    }

    #[test]
    fn unclosed_fence_still_flushes() {
        let lines = render("```\norphan := true");
        assert_eq!(lines[0], "    orphan := true");
    }

    #[test]
    fn prose_is_stripped_and_indented() {
        let lines = render("Use `const` where **possible**.");
        assert_eq!(lines, vec!["  Use const where possible."]);
    }

    #[test]
    fn any_input_produces_output() {
        assert!(!render("just some text").is_empty());
    }
}
