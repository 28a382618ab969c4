// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key events and the eligibility filter for mnemonic handling.

/// Logical key of a key-down event.
///
/// Only the distinctions the mnemonic engine cares about are modeled: single
/// characters, Enter, and a handful of named navigation/editing keys. Anything
/// else is [`Key::Unidentified`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A key producing a single character, already shifted (`'b'`, `'B'`, `'7'`, `' '`).
    Character(char),
    /// Enter / Return.
    Enter,
    /// Tab.
    Tab,
    /// Escape.
    Escape,
    /// Backspace.
    Backspace,
    /// Delete.
    Delete,
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
    /// Arrow left.
    ArrowLeft,
    /// Arrow right.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Any other key.
    Unidentified,
}

impl Key {
    /// Parse a DOM-style key name (`KeyboardEvent.key`).
    ///
    /// Single-character names become [`Key::Character`]; the legacy
    /// `"Spacebar"` name maps to a space.
    ///
    /// ```
    /// use understory_mnemonic::Key;
    ///
    /// assert_eq!(Key::from_name("b"), Key::Character('b'));
    /// assert_eq!(Key::from_name(" "), Key::Character(' '));
    /// assert_eq!(Key::from_name("Enter"), Key::Enter);
    /// assert_eq!(Key::from_name("F5"), Key::Unidentified);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Self::Enter,
            "Tab" => Self::Tab,
            "Escape" | "Esc" => Self::Escape,
            "Backspace" => Self::Backspace,
            "Delete" | "Del" => Self::Delete,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            "Spacebar" => Self::Character(' '),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Unidentified,
                }
            }
        }
    }

    /// Whether this key activates the focused element (Enter or Space).
    pub fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Character(' '))
    }
}

bitflags::bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT   = 0b0000_0001;
        /// Control.
        const CONTROL = 0b0000_0010;
        /// Alt / Option.
        const ALT     = 0b0000_0100;
        /// Meta / Command / Windows.
        const META    = 0b0000_1000;
        /// Modifiers that turn a key press into a shortcut.
        const SHORTCUT = Self::CONTROL.bits() | Self::ALT.bits() | Self::META.bits();
    }
}

/// A key-down event as seen by a container.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent<K> {
    /// Logical key.
    pub key: Key,
    /// Held modifiers.
    pub modifiers: Modifiers,
    /// Element the event was dispatched to.
    pub target: K,
}

impl<K> KeyEvent<K> {
    /// A key-down on `target` with no modifiers.
    pub fn new(key: Key, target: K) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
            target,
        }
    }

    /// Builder: replace the modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// What a key press means to the mnemonic engine, before looking at the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyIntent {
    /// Jump to a candidate starting with this case-folded character.
    Mnemonic(char),
    /// Enter or Space: left to the focused element's own handler.
    Activate,
    /// Not for the engine: shortcuts, navigation keys, whitespace, controls.
    Pass,
}

/// Classify a key press.
///
/// Ctrl, Alt, and Meta always pass through. Shift only selects which
/// character a key produces, so it is tolerated on characters but turns
/// Enter/Space into a modifier combination that passes through.
///
/// ```
/// use understory_mnemonic::{classify, Key, KeyIntent, Modifiers};
///
/// assert_eq!(classify(Key::Character('B'), Modifiers::SHIFT), KeyIntent::Mnemonic('b'));
/// assert_eq!(classify(Key::Character('b'), Modifiers::META), KeyIntent::Pass);
/// assert_eq!(classify(Key::Enter, Modifiers::empty()), KeyIntent::Activate);
/// ```
pub fn classify(key: Key, modifiers: Modifiers) -> KeyIntent {
    if modifiers.intersects(Modifiers::SHORTCUT) {
        return KeyIntent::Pass;
    }
    if key.is_activation() {
        return if modifiers.is_empty() {
            KeyIntent::Activate
        } else {
            KeyIntent::Pass
        };
    }
    match key {
        Key::Character(c) if !c.is_control() && !c.is_whitespace() => {
            KeyIntent::Mnemonic(fold_case(c))
        }
        _ => KeyIntent::Pass,
    }
}

/// Simple case folding used for label comparison.
///
/// Characters whose lowercase form expands to several scalars fold to the
/// first one.
pub fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
