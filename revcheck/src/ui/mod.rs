//! UI rendering module for revcheck.
//!
//! `render()` is the single entry point called by the event loop's
//! `terminal.draw()` closure. Every frame is rebuilt from scratch: header,
//! phase-specific body (spinner, error, checklist, or markdown fallback),
//! and the key-hint footer. No state mutation happens here beyond syncing
//! the viewport hints to the live terminal size.

pub mod checklist;
pub mod keybindings;
pub mod markdown;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

use crate::app::{Phase, SessionState};
use crate::theme::Theme;

/// Braille spinner frames cycled by the logic tick while loading.
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Renders one complete frame.
///
/// Called exactly once per `AppEvent::Render`. Draws nothing once the
/// quitting flag is set.
pub fn render(frame: &mut Frame, state: &mut SessionState, theme: &Theme) {
    if state.quitting {
        return;
    }

    // Keep the wrap/scroll hints in step with the live terminal size; the
    // resize event also updates them, but the first frames arrive before any
    // resize is ever delivered.
    let area = frame.area();
    state.resize(area.width, area.height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .split(area);

    render_header(frame, chunks[0], state, theme);
    match state.phase {
        Phase::Loading => render_loading(frame, chunks[1], state, theme),
        Phase::Failed => render_failed(frame, chunks[1], state, theme),
        Phase::Ready => render_ready(frame, chunks[1], state, theme),
    }
    render_footer(frame, chunks[2], state, theme);
}

/// Text width used for wrapping, matching the original layout: terminal
/// width minus box padding, capped at 110 columns.
pub fn max_text_width(state: &SessionState) -> i32 {
    (i32::from(state.width) - 10).min(110)
}

/// A full-width horizontal rule line.
pub fn separator(state: &SessionState, theme: &Theme) -> Line<'static> {
    let width = max_text_width(state).max(0) as usize;
    Line::from(Span::styled("─".repeat(width), Style::default().fg(theme.separator)))
}

fn render_header(frame: &mut Frame, area: Rect, state: &SessionState, theme: &Theme) {
    let title = Line::from(Span::styled(
        "🔍 revcheck — AI code review",
        Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
    ));
    let subtitle = Line::from(Span::styled(
        format!("Reviewing: {}", state.target),
        Style::default().fg(theme.subtitle),
    ));
    frame.render_widget(Paragraph::new(Text::from(vec![title, subtitle])), area);
}

fn render_loading(frame: &mut Frame, area: Rect, state: &SessionState, theme: &Theme) {
    let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(vec![
            Span::styled(spinner, Style::default().fg(theme.spinner)),
            Span::styled(" Analyzing git diff with AI...", Style::default().fg(theme.text)),
        ]),
        Line::from(Span::styled(
            "  This may take a few moments",
            Style::default().fg(theme.subtitle),
        )),
    ];
    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

fn render_failed(frame: &mut Frame, area: Rect, state: &SessionState, theme: &Theme) {
    let message = state.error.as_deref().unwrap_or("unknown error");
    let mut lines = vec![Line::from(Span::styled(
        "❌ Error",
        Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
    ))];
    for l in revcheck_core::wrap(message, max_text_width(state) - 2).lines() {
        lines.push(Line::from(Span::styled(
            format!("  {l}"),
            Style::default().fg(theme.text),
        )));
    }
    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

fn render_ready(frame: &mut Frame, area: Rect, state: &SessionState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Fill(1)])
        .split(area);

    let summary = vec![
        Line::from(Span::styled(
            "✅ Review Complete",
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )),
        separator(state, theme),
        Line::from(Span::styled(
            format!(
                "Found {} issues/suggestions  •  {} completed",
                state.items.len(),
                state.checked_count()
            ),
            Style::default().fg(theme.subtitle),
        )),
        Line::default(),
    ];
    frame.render_widget(Paragraph::new(Text::from(summary)), chunks[0]);

    if state.items.is_empty() {
        // Fallback path: nothing extracted, show the styled review text.
        let lines = markdown::render_markdown(&state.review, max_text_width(state), theme);
        frame.render_widget(Paragraph::new(Text::from(lines)), chunks[1]);
    } else {
        checklist::render_checklist(frame, chunks[1], state, theme);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, state: &SessionState, theme: &Theme) {
    let hints = match state.phase {
        Phase::Ready => {
            "↑/↓: Navigate  •  Space/X: Toggle  •  A: Check all  •  N: Uncheck all  •  Enter/Q: Quit"
        }
        Phase::Loading | Phase::Failed => "Q: Quit",
    };
    let lines = vec![
        separator(state, theme),
        Line::from(Span::styled(
            hints,
            Style::default().fg(theme.footer).add_modifier(Modifier::ITALIC),
        )),
    ];
    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}
