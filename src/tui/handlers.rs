//! Keyboard handling for the form.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Focus};
use super::constants::SCROLL_ROWS_PAGE;

/// Result of handling an event: continue the loop, run a fetch, or exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Fetch,
    Break,
}

pub(crate) fn handle_key(key: KeyEvent, app: &mut App) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => HandleResult::Break,
        (KeyCode::Enter, _) => HandleResult::Fetch,
        (KeyCode::BackTab, _) | (KeyCode::Tab, KeyModifiers::SHIFT) => {
            app.focus_prev();
            HandleResult::Continue
        }
        (KeyCode::Tab, _) => {
            app.focus_next();
            HandleResult::Continue
        }
        (KeyCode::Left, _) if app.focus == Focus::Provider => {
            app.prev_provider();
            HandleResult::Continue
        }
        (KeyCode::Right, _) if app.focus == Focus::Provider => {
            app.next_provider();
            HandleResult::Continue
        }
        (KeyCode::Up, _) => {
            app.scroll_up(1);
            HandleResult::Continue
        }
        (KeyCode::Down, _) => {
            app.scroll_down(1);
            HandleResult::Continue
        }
        (KeyCode::PageUp, _) => {
            app.scroll_up(SCROLL_ROWS_PAGE);
            HandleResult::Continue
        }
        (KeyCode::PageDown, _) => {
            app.scroll_down(SCROLL_ROWS_PAGE);
            HandleResult::Continue
        }
        (KeyCode::Backspace, _) => {
            app.pop_char();
            HandleResult::Continue
        }
        (KeyCode::Char(c), mods) => {
            // Ignore Ctrl/Alt chords; they are not text.
            if mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                return HandleResult::Continue;
            }
            app.push_char(c);
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}
