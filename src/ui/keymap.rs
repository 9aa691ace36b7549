//! Key bindings
//!
//! Keys are looked up in an [`FxHashMap`] keyed by [`KeyCode`]. Number keys
//! are generated from the deck size, so `1`..`9` only exist for slides that
//! do.

use crossterm::event::KeyCode;
use rustc_hash::FxHashMap;

/// Everything a key press can ask the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Prev,
    First,
    Last,
    /// 0-based slide index
    GoTo(usize),
    StartDemo,
    ResetDemo,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: FxHashMap<KeyCode, Action>,
}

impl Keymap {
    /// Default bindings for a deck of `slide_count` slides
    pub fn for_deck(slide_count: usize) -> Self {
        let mut bindings = FxHashMap::default();

        for key in [KeyCode::Right, KeyCode::Char(' '), KeyCode::Char('l'), KeyCode::PageDown] {
            bindings.insert(key, Action::Next);
        }
        for key in [KeyCode::Left, KeyCode::Char('h'), KeyCode::PageUp] {
            bindings.insert(key, Action::Prev);
        }
        bindings.insert(KeyCode::Home, Action::First);
        bindings.insert(KeyCode::End, Action::Last);

        for (index, digit) in ('1'..='9').take(slide_count).enumerate() {
            bindings.insert(KeyCode::Char(digit), Action::GoTo(index));
        }

        bindings.insert(KeyCode::Enter, Action::StartDemo);
        bindings.insert(KeyCode::Char('d'), Action::StartDemo);
        bindings.insert(KeyCode::Char('r'), Action::ResetDemo);

        bindings.insert(KeyCode::Esc, Action::Quit);
        bindings.insert(KeyCode::Char('q'), Action::Quit);
        bindings.insert(KeyCode::Char('Q'), Action::Quit);

        Keymap { bindings }
    }

    pub fn action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }
}
