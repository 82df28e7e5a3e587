//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to host actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Terminals disagree on whether shifted punctuation carries `SHIFT`,
    /// so a character key without a match is retried with `SHIFT` removed.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let lookup = KeyEvent::new(key.code, key.modifiers);
        self.bindings.get(&lookup).copied().or_else(|| {
            match key.code {
                KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::SHIFT) => {
                    let plain = KeyEvent::new(key.code, key.modifiers - KeyModifiers::SHIFT);
                    self.bindings.get(&plain).copied()
                }
                _ => None,
            }
        })
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use KeyCode::Char;

        let none = KeyModifiers::NONE;
        let shift = KeyModifiers::SHIFT;
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Row cursor
        keys.bind(Char('k'), none, KeyAction::CursorUp);
        keys.bind(Char('j'), none, KeyAction::CursorDown);
        keys.bind(KeyCode::Up, none, KeyAction::CursorUp);
        keys.bind(KeyCode::Down, none, KeyAction::CursorDown);
        keys.bind(Char('g'), none, KeyAction::CursorTop);
        keys.bind(Char('G'), shift, KeyAction::CursorBottom);

        // Column focus and horizontal scroll
        keys.bind(Char('l'), none, KeyAction::FocusNextColumn);
        keys.bind(Char('h'), none, KeyAction::FocusPrevColumn);
        keys.bind(KeyCode::Right, none, KeyAction::FocusNextColumn);
        keys.bind(KeyCode::Left, none, KeyAction::FocusPrevColumn);
        keys.bind(Char('<'), none, KeyAction::ScrollLeft);
        keys.bind(Char('>'), none, KeyAction::ScrollRight);

        // Column commands
        keys.bind(Char('s'), none, KeyAction::ToggleSort);
        keys.bind(Char('S'), shift, KeyAction::ResetSorting);
        keys.bind(Char('['), none, KeyAction::PinLeft);
        keys.bind(Char(']'), none, KeyAction::PinRight);
        keys.bind(Char('u'), none, KeyAction::Unpin);
        keys.bind(Char('+'), none, KeyAction::WidenColumn);
        keys.bind(Char('='), none, KeyAction::WidenColumn);
        keys.bind(Char('-'), none, KeyAction::NarrowColumn);

        // Rows
        keys.bind(Char(' '), none, KeyAction::ToggleRow);
        keys.bind(Char('a'), none, KeyAction::ToggleAllRows);
        keys.bind(Char('x'), none, KeyAction::ResetSelected);
        keys.bind(KeyCode::Enter, none, KeyAction::ToggleExpand);

        // Paging
        keys.bind(Char('n'), none, KeyAction::NextPage);
        keys.bind(Char('p'), none, KeyAction::PrevPage);
        keys.bind(KeyCode::PageDown, none, KeyAction::NextPage);
        keys.bind(KeyCode::PageUp, none, KeyAction::PrevPage);
        keys.bind(KeyCode::Home, none, KeyAction::FirstPage);
        keys.bind(KeyCode::End, none, KeyAction::LastPage);
        keys.bind(Char('z'), none, KeyAction::CyclePageSize);

        // Application controls
        keys.bind(Char('r'), none, KeyAction::Refresh);
        keys.bind(Char('q'), none, KeyAction::Quit);
        keys.bind(Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
