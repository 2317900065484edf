//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use client_frontend_core::GameControls;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Change to one of the game controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Adjustment {
    Grow,
    Shrink,
    ExtendDeadline,
    ShortenDeadline,
    CycleStrategy,
    Deepen,
    Shallow,
    ToggleAlphaBeta,
}

impl Adjustment {
    pub fn apply(self, controls: &mut GameControls) {
        match self {
            Self::Grow => controls.grow(),
            Self::Shrink => controls.shrink(),
            Self::ExtendDeadline => controls.extend_deadline(),
            Self::ShortenDeadline => controls.shorten_deadline(),
            Self::CycleStrategy => controls.cycle_strategy(),
            Self::Deepen => controls.deepen(),
            Self::Shallow => controls.shallow(),
            Self::ToggleAlphaBeta => controls.toggle_alpha_beta(),
        }
    }
}

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    NewGame,
    Adjust(Adjustment),
    ToggleEdit,
    ToggleTheme,
    /// Close the endgame dialog.
    Dismiss,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands.
///
/// While a dialog is open only dismissal and quitting are accepted.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, dialog_open: bool) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Esc if dialog_open => KeyAction::Dismiss,
            KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'q') => KeyAction::Quit,
            _ if dialog_open => KeyAction::None,
            KeyCode::Char(ch) => self.handle_char(ch),
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw {
            '+' | '=' => KeyAction::Adjust(Adjustment::Grow),
            '-' | '_' => KeyAction::Adjust(Adjustment::Shrink),
            ']' => KeyAction::Adjust(Adjustment::ExtendDeadline),
            '[' => KeyAction::Adjust(Adjustment::ShortenDeadline),
            '>' | '.' => KeyAction::Adjust(Adjustment::Deepen),
            '<' | ',' => KeyAction::Adjust(Adjustment::Shallow),
            _ => match raw.to_ascii_lowercase() {
                'n' => KeyAction::NewGame,
                's' => KeyAction::Adjust(Adjustment::CycleStrategy),
                'a' => KeyAction::Adjust(Adjustment::ToggleAlphaBeta),
                'e' => KeyAction::ToggleEdit,
                't' => KeyAction::ToggleTheme,
                _ => KeyAction::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_control_keys() {
        let handler = InputHandler::new();
        let cases = [
            ('n', KeyAction::NewGame),
            ('+', KeyAction::Adjust(Adjustment::Grow)),
            ('-', KeyAction::Adjust(Adjustment::Shrink)),
            (']', KeyAction::Adjust(Adjustment::ExtendDeadline)),
            ('[', KeyAction::Adjust(Adjustment::ShortenDeadline)),
            ('S', KeyAction::Adjust(Adjustment::CycleStrategy)),
            ('>', KeyAction::Adjust(Adjustment::Deepen)),
            ('<', KeyAction::Adjust(Adjustment::Shallow)),
            ('a', KeyAction::Adjust(Adjustment::ToggleAlphaBeta)),
            ('e', KeyAction::ToggleEdit),
            ('t', KeyAction::ToggleTheme),
        ];
        for (ch, expected) in cases {
            assert_eq!(handler.handle_key(key(KeyCode::Char(ch)), false), expected);
        }
    }

    #[test]
    fn maps_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), false),
            KeyAction::Quit
        );
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(handler.handle_key(ctrl_c, true), KeyAction::Quit);
    }

    #[test]
    fn dialog_swallows_everything_but_dismiss_and_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), true),
            KeyAction::Dismiss
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), true),
            KeyAction::Dismiss
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('n')), true),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), false),
            KeyAction::None
        );
    }

    #[test]
    fn adjustments_apply_to_controls() {
        let mut controls = GameControls::default();
        Adjustment::Grow.apply(&mut controls);
        Adjustment::ToggleAlphaBeta.apply(&mut controls);
        assert_eq!(controls.size, GameControls::default().size + 1);
        assert!(controls.alpha_beta);
    }
}
