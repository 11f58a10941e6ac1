//! Interactive checklist view for extracted review items.
//!
//! Each item renders as a small block: cursor marker, checkbox, item number,
//! severity badge, the file-reference title, the wrapped description, and its
//! pre-highlighted code excerpt. The whole list is one `Paragraph` scrolled
//! so the cursor row stays visible.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};
use revcheck_core::{wrap, Severity};

use crate::app::SessionState;
use crate::theme::Theme;
use crate::ui::max_text_width;

/// Renders the checklist into the given area.
pub fn render_checklist(frame: &mut Frame, area: Rect, state: &SessionState, theme: &Theme) {
    let (lines, cursor_line) = build_lines(state, theme);
    let offset = scroll_offset(cursor_line, lines.len(), area.height as usize);
    let paragraph = Paragraph::new(Text::from(lines)).scroll((offset as u16, 0));
    frame.render_widget(paragraph, area);
}

/// Builds the full list of lines plus the index of the cursor item's first
/// line, for scroll targeting.
fn build_lines(state: &SessionState, theme: &Theme) -> (Vec<Line<'static>>, usize) {
    let width = max_text_width(state);
    let mut lines = Vec::new();
    let mut cursor_line = 0;

    for (i, item) in state.items.iter().enumerate() {
        let selected = i == state.cursor;
        if selected {
            cursor_line = lines.len();
        }
        let row_style = if selected {
            Style::default().bg(theme.cursor_bg)
        } else {
            Style::default()
        };

        let marker = if selected { "▶ " } else { "  " };
        let checkbox = if item.checked { "[✓] " } else { "[ ] " };
        let checkbox_style = if item.checked {
            Style::default().fg(theme.success)
        } else {
            Style::default().fg(theme.text)
        };

        let mut head = vec![
            Span::styled(marker.to_owned(), Style::default().fg(theme.title)),
            Span::styled(checkbox.to_owned(), checkbox_style),
            Span::styled(
                format!("#{} ", item.number),
                Style::default().fg(theme.subtitle),
            ),
            severity_badge(item.severity, theme),
        ];
        head.push(Span::styled(
            format!("  {}", item.title),
            Style::default().fg(theme.file_ref).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(head).style(row_style));

        if !item.content.is_empty() {
            for l in wrap(&item.content, width - 6).lines() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", l.trim_start()),
                    Style::default().fg(theme.text),
                )));
            }
        }

        if let Some(code) = state.code_lines.get(i) {
            for code_line in code {
                let mut spans = vec![Span::raw("    ")];
                spans.extend(code_line.spans.iter().cloned());
                lines.push(Line::from(spans));
            }
        }

        lines.push(Line::default());
    }

    (lines, cursor_line)
}

fn severity_badge(severity: Severity, theme: &Theme) -> Span<'static> {
    let (label, color) = match severity {
        Severity::High => (" ⚠ HIGH ", theme.severity_high),
        Severity::Medium => (" ● MED ", theme.severity_medium),
        Severity::Low => (" ○ LOW ", theme.severity_low),
    };
    Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

/// Vertical scroll offset keeping `cursor_line` near the middle of a
/// viewport of `height` rows over `total` lines.
fn scroll_offset(cursor_line: usize, total: usize, height: usize) -> usize {
    if total <= height || height == 0 {
        return 0;
    }
    cursor_line
        .saturating_sub(height / 2)
        .min(total - height)
}
