//! Key dispatch for the interactive session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{Phase, SessionState};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Keep running.
    Continue,
    /// Tear down the terminal and exit.
    Quit,
}

/// Applies one key press to the session state.
///
/// Quit keys work in every phase; everything else is ignored until the
/// review result has arrived.
pub fn handle_key(state: &mut SessionState, key: KeyEvent) -> KeyAction {
    if is_quit_key(key) {
        return KeyAction::Quit;
    }
    if state.phase != Phase::Ready {
        return KeyAction::Continue;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.move_up(),
        KeyCode::Down | KeyCode::Char('j') => state.move_down(),
        KeyCode::Char(' ') | KeyCode::Char('x') => state.toggle_current(),
        KeyCode::Char('a') => state.check_all(),
        KeyCode::Char('n') => state.uncheck_all(),
        KeyCode::Enter => return KeyAction::Quit,
        _ => {}
    }
    KeyAction::Continue
}

fn is_quit_key(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::types::ReviewOutcome;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ready_state() -> SessionState {
        let mut state = SessionState::new("demo".to_owned());
        let review = "**Issues Found**\n📄 a.go:1\nfirst\n📄 b.go:2\nsecond";
        state.apply_review(ReviewOutcome { result: Ok(review.to_owned()) });
        state
    }

    #[test]
    fn q_quits_while_loading() {
        let mut state = SessionState::new("demo".to_owned());
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q'))), KeyAction::Quit);
    }

    #[test]
    fn ctrl_c_quits_in_any_phase() {
        let mut state = ready_state();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut state, ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn navigation_is_ignored_while_loading() {
        let mut state = SessionState::new("demo".to_owned());
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('j'))), KeyAction::Continue);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn j_and_k_move_the_cursor() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Char('j')));
        assert_eq!(state.cursor, 1);
        handle_key(&mut state, key(KeyCode::Char('k')));
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn arrow_keys_mirror_vim_keys() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.cursor, 1);
        handle_key(&mut state, key(KeyCode::Up));
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn space_toggles_the_current_item() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Char(' ')));
        assert!(state.items[0].checked);
        handle_key(&mut state, key(KeyCode::Char('x')));
        assert!(!state.items[0].checked);
    }

    #[test]
    fn a_and_n_set_every_checkbox() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Char('a')));
        assert_eq!(state.checked_count(), 2);
        handle_key(&mut state, key(KeyCode::Char('n')));
        assert_eq!(state.checked_count(), 0);
    }

    #[test]
    fn enter_quits_from_the_checklist() {
        let mut state = ready_state();
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), KeyAction::Quit);
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let mut state = ready_state();
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('z'))), KeyAction::Continue);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.checked_count(), 0);
    }
}
