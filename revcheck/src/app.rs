//! Session state and reducer for revcheck.
//!
//! This module owns all mutable UI state: the session phase, the extracted
//! checklist, the cursor, viewport hints, and the quitting flag. No rendering
//! logic lives here — `app.rs` is pure state that is read by the ui module
//! and mutated only by the event loop's dispatch, one event at a time, so
//! every transition is atomic with respect to rendering.

use ratatui::text::Line;
use revcheck_core::{extract, ReviewItem};

use crate::highlight;
use crate::review::types::ReviewOutcome;

/// Where the session is in its lifecycle.
///
/// `Loading` from startup until the worker's result arrives; then `Ready` or
/// `Failed`, both terminal — there is no retry path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// The review fetch is outstanding; the spinner is shown.
    #[default]
    Loading,
    /// Review text arrived; checklist (or markdown fallback) is shown.
    Ready,
    /// The fetch failed; the error message is shown until the user quits.
    Failed,
}

/// All mutable state for one interactive run.
///
/// Created once at startup, mutated only by the reducer methods below, and
/// dropped when the process exits. Nothing here persists across runs.
pub struct SessionState {
    /// Current lifecycle phase.
    pub phase: Phase,
    /// Raw review text from the API (empty while Loading).
    pub review: String,
    /// Error message recorded when the fetch fails.
    pub error: Option<String>,
    /// Extracted checklist items, in discovery order.
    pub items: Vec<ReviewItem>,
    /// Pre-highlighted code excerpt lines, parallel to `items`.
    ///
    /// `code_lines[i]` holds the rendered lines of every code block of
    /// `items[i]`, highlighted once when the result is applied.
    pub code_lines: Vec<Vec<Line<'static>>>,
    /// Index of the selected item; clamped to the item range.
    pub cursor: usize,
    /// Terminal width hint, used for wrapping only.
    pub width: u16,
    /// Terminal height hint, used for scrolling only.
    pub height: u16,
    /// Once true, no further frames are drawn.
    pub quitting: bool,
    /// Monotonic counter driving the loading spinner animation.
    pub spinner_frame: usize,
    /// Human-readable label of what is being reviewed.
    pub target: String,
}

impl SessionState {
    /// Creates the initial Loading state for the given review target.
    pub fn new(target: String) -> Self {
        Self {
            phase: Phase::default(),
            review: String::new(),
            error: None,
            items: Vec::new(),
            code_lines: Vec::new(),
            cursor: 0,
            width: 120,
            height: 40,
            quitting: false,
            spinner_frame: 0,
            target,
        }
    }

    /// Moves the cursor up one item; no-op at the top.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down one item; no-op at the bottom (or when empty).
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    /// Flips the checked flag of the item under the cursor.
    ///
    /// Silently does nothing when there are no items or the cursor is out of
    /// range — never an error.
    pub fn toggle_current(&mut self) {
        if let Some(item) = self.items.get_mut(self.cursor) {
            item.checked = !item.checked;
        }
    }

    /// Marks every item checked.
    pub fn check_all(&mut self) {
        for item in &mut self.items {
            item.checked = true;
        }
    }

    /// Marks every item unchecked.
    pub fn uncheck_all(&mut self) {
        for item in &mut self.items {
            item.checked = false;
        }
    }

    /// Number of items currently checked, for the summary line.
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|i| i.checked).count()
    }

    /// Advances the spinner animation. No other state semantics.
    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    /// Records new viewport dimensions. Layout hint only.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Applies the worker's one completion message.
    ///
    /// On success the review text is extracted into items and each item's
    /// code excerpts are highlighted once, keyed by the extension in its
    /// title. On error the message is recorded and the phase becomes Failed.
    pub fn apply_review(&mut self, outcome: ReviewOutcome) {
        match outcome.result {
            Ok(review) => {
                let items = extract(&review);
                let code_lines = items
                    .iter()
                    .map(|item| {
                        let ext = highlight::extension_hint(&item.title);
                        item.code_blocks
                            .iter()
                            .flat_map(|block| highlight::highlight_block(block, ext))
                            .collect()
                    })
                    .collect();
                self.items = items;
                self.code_lines = code_lines;
                self.review = review;
                self.cursor = 0;
                self.phase = Phase::Ready;
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.phase = Phase::Failed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::types::ReviewError;
    use revcheck_core::Severity;

    fn ready_state(n: usize) -> SessionState {
        let mut state = SessionState::new("all changed files".to_owned());
        let review: String = std::iter::once("**Issues Found**".to_owned())
            .chain((1..=n).map(|i| format!("📄 file{i}.go:{i}\nfinding {i}")))
            .collect::<Vec<_>>()
            .join("\n");
        state.apply_review(ReviewOutcome { result: Ok(review) });
        assert_eq!(state.items.len(), n);
        state
    }

    #[test]
    fn successful_fetch_moves_to_ready() {
        let state = ready_state(2);
        assert_eq!(state.phase, Phase::Ready);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.code_lines.len(), state.items.len());
        assert!(!state.review.is_empty());
    }

    #[test]
    fn failed_fetch_records_message() {
        let mut state = SessionState::new("x".to_owned());
        state.apply_review(ReviewOutcome { result: Err(ReviewError::EmptyResponse) });
        assert_eq!(state.phase, Phase::Failed);
        assert_eq!(state.error.as_deref(), Some("empty response from API"));
        assert!(state.items.is_empty());
    }

    #[test]
    fn unparseable_review_is_ready_with_no_items() {
        let mut state = SessionState::new("x".to_owned());
        state.apply_review(ReviewOutcome { result: Ok("just prose, no sections".to_owned()) });
        assert_eq!(state.phase, Phase::Ready);
        assert!(state.items.is_empty());
        assert_eq!(state.review, "just prose, no sections");
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut state = ready_state(3);
        state.move_up();
        assert_eq!(state.cursor, 0);
        state.move_down();
        state.move_down();
        state.move_down();
        state.move_down();
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn navigation_on_empty_list_is_a_no_op() {
        let mut state = SessionState::new("x".to_owned());
        state.move_down();
        state.move_up();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut state = ready_state(2);
        state.toggle_current();
        assert!(state.items[0].checked);
        state.toggle_current();
        assert!(!state.items[0].checked);
    }

    #[test]
    fn toggle_on_empty_list_is_a_no_op() {
        let mut state = SessionState::new("x".to_owned());
        state.toggle_current();
        assert!(state.items.is_empty());
    }

    #[test]
    fn check_all_then_uncheck_all_clears_everything() {
        let mut state = ready_state(3);
        state.items[1].checked = true;
        state.check_all();
        assert_eq!(state.checked_count(), 3);
        state.uncheck_all();
        assert_eq!(state.checked_count(), 0);
    }

    #[test]
    fn resize_updates_hints_only() {
        let mut state = ready_state(1);
        let before_cursor = state.cursor;
        state.resize(80, 24);
        assert_eq!((state.width, state.height), (80, 24));
        assert_eq!(state.cursor, before_cursor);
        assert_eq!(state.phase, Phase::Ready);
    }

    #[test]
    fn tick_only_advances_the_spinner() {
        let mut state = SessionState::new("x".to_owned());
        state.tick();
        state.tick();
        assert_eq!(state.spinner_frame, 2);
        assert_eq!(state.phase, Phase::Loading);
    }

    #[test]
    fn code_lines_follow_item_code_blocks() {
        let mut state = SessionState::new("x".to_owned());
        let review = "**Issues Found**\n📄 a.go:1\nbad\nSeverity: high\n```\nx := 1\ny := 2\n```";
        state.apply_review(ReviewOutcome { result: Ok(review.to_owned()) });
        assert_eq!(state.items[0].severity, Severity::High);
        assert_eq!(state.code_lines[0].len(), 2);
    }
}
