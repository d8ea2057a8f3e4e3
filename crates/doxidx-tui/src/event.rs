//! Semantic application events — crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Keybindings
//!
//! Defaults are hardcoded and mirror the values documented in the default
//! config file.
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |
//! | `Tab`                   | `FocusNext`                |
//! | `/`                     | `QueryFocus`               |
//! | `PageUp`, `Ctrl+u`      | `ScrollUp`                 |
//! | `PageDown`, `Ctrl+d`    | `ScrollDown`               |
//! | `g` / `G`               | `JumpTop` / `JumpEnd`      |
//! | `m`                     | `ToggleMode`               |
//! | `r`                     | `Reload`                   |
//! | `↑` / `k`, `↓` / `j`    | `Nav(Up)`, `Nav(Down)`     |
//! | `←` / `h`, `→` / `l`    | `Nav(Left)`, `Nav(Right)`  |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`, `Enter`    | `Backspace`, `Enter`       |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! ## Insert mode
//!
//! When the query bar is focused, the event loop calls
//! [`to_app_event_insert`] instead. In insert mode every printable
//! character — including `q`, `g`, `m`, `r`, hjkl, and `/` — produces
//! `Char` so the user can type freely; arrow keys still produce `Nav` for
//! cursor movement, and only `Ctrl+c`, `Escape`, `Enter`, `Tab`, and
//! `Backspace` keep their special bindings.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Cardinal direction for list navigation and cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Move keyboard focus to the next pane.
    FocusNext,
    /// Transfer focus to the query bar.
    QueryFocus,
    /// Scroll the result list up one page.
    ScrollUp,
    /// Scroll the result list down one page.
    ScrollDown,
    /// Jump to the first result.
    JumpTop,
    /// Jump to the last result.
    JumpEnd,
    /// Toggle between prefix and substring matching.
    ToggleMode,
    /// Rebuild the index from disk.
    Reload,
    /// Navigate within the result list (or move the text cursor).
    Nav(Direction),
    /// A printable character forwarded to the query input.
    Char(char),
    /// Delete the character before the cursor in the query input.
    Backspace,
    /// Confirm the query and move focus to the results.
    Enter,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
    /// Dismiss the active modal (query focus, help popup).
    Escape,
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] (navigation mode).
///
/// Returns `None` for events that carry no meaning for the application
/// (mouse events, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] for text-input
/// ("insert") mode. Call this variant whenever the query bar has focus.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(AppEvent::Quit),
            KeyCode::Char('u') => Some(AppEvent::ScrollUp),
            KeyCode::Char('d') => Some(AppEvent::ScrollDown),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(AppEvent::Quit),
        KeyCode::Tab => Some(AppEvent::FocusNext),
        KeyCode::Char('/') => Some(AppEvent::QueryFocus),
        KeyCode::PageUp => Some(AppEvent::ScrollUp),
        KeyCode::PageDown => Some(AppEvent::ScrollDown),
        KeyCode::Char('g') => Some(AppEvent::JumpTop),
        KeyCode::Char('G') => Some(AppEvent::JumpEnd),
        KeyCode::Char('m') => Some(AppEvent::ToggleMode),
        KeyCode::Char('r') => Some(AppEvent::Reload),
        KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::Nav(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::Nav(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(AppEvent::Nav(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(AppEvent::Nav(Direction::Right)),
        KeyCode::Backspace => Some(AppEvent::Backspace),
        KeyCode::Enter => Some(AppEvent::Enter),
        KeyCode::Esc => Some(AppEvent::Escape),
        KeyCode::Char(c) => Some(AppEvent::Char(c)),
        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(AppEvent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab => Some(AppEvent::FocusNext),
        KeyCode::Backspace => Some(AppEvent::Backspace),
        KeyCode::Enter => Some(AppEvent::Enter),
        KeyCode::Esc => Some(AppEvent::Escape),
        KeyCode::Up => Some(AppEvent::Nav(Direction::Up)),
        KeyCode::Down => Some(AppEvent::Nav(Direction::Down)),
        KeyCode::Left => Some(AppEvent::Nav(Direction::Left)),
        KeyCode::Right => Some(AppEvent::Nav(Direction::Right)),
        KeyCode::Char(c) => Some(AppEvent::Char(c)),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn navigation_mode_binds_shortcuts() {
        assert_eq!(to_app_event(key(KeyCode::Char('q'), KeyModifiers::NONE)), Some(AppEvent::Quit));
        assert_eq!(
            to_app_event(key(KeyCode::Char('m'), KeyModifiers::NONE)),
            Some(AppEvent::ToggleMode)
        );
        assert_eq!(
            to_app_event(key(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(AppEvent::Nav(Direction::Down))
        );
    }

    #[test]
    fn insert_mode_forwards_shortcut_chars() {
        for c in ['q', 'g', 'm', 'r', 'j', '/'] {
            assert_eq!(
                to_app_event_insert(key(KeyCode::Char(c), KeyModifiers::NONE)),
                Some(AppEvent::Char(c)),
            );
        }
    }

    #[test]
    fn ctrl_c_quits_in_both_modes() {
        let ev = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(to_app_event(ev.clone()), Some(AppEvent::Quit));
        assert_eq!(to_app_event_insert(ev), Some(AppEvent::Quit));
    }
}
