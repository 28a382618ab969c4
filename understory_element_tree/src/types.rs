// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the element tree: identifiers, kinds, and flags.

use alloc::string::String;

/// Identifier for an element in the tree (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// What an element is, as far as focus and typing are concerned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A grouping element such as a `div` or a menu body. Not a tab stop.
    Container,
    /// An interactive element such as a button or a menu item. A tab stop.
    Button,
    /// A single-line text field. A tab stop that accepts free text.
    TextInput,
    /// A multi-line text field. A tab stop that accepts free text.
    TextArea,
    /// Inline text such as a `span` or a label. Not a tab stop.
    Text,
}

impl ElementKind {
    /// Whether elements of this kind are tab stops by default.
    pub const fn is_tab_stop(self) -> bool {
        matches!(self, Self::Button | Self::TextInput | Self::TextArea)
    }

    /// Whether elements of this kind accept free text typing by default.
    pub const fn accepts_text(self) -> bool {
        matches!(self, Self::TextInput | Self::TextArea)
    }
}

bitflags::bitflags! {
    /// Element state flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element is disabled. Disabled elements cannot take focus.
        const DISABLED     = 0b0000_0001;
        /// Element (and its subtree) is hidden.
        const HIDDEN       = 0b0000_0010;
        /// Element is a tab stop regardless of its kind (like `tabindex="0"`).
        const FOCUSABLE    = 0b0000_0100;
        /// Element accepts free text regardless of its kind (like `contenteditable`).
        const EDITABLE     = 0b0000_1000;
    }
}

/// Local data for one element.
#[derive(Clone, Debug)]
pub struct Element {
    /// Element kind.
    pub kind: ElementKind,
    /// The element's own text. Visible text of a subtree is the concatenation
    /// of the own text of every non-hidden element in it, in document order.
    pub text: String,
    /// State flags.
    pub flags: ElementFlags,
}

impl Element {
    /// A container with no text.
    pub fn container() -> Self {
        Self::new(ElementKind::Container, "")
    }

    /// A button labeled `text`.
    pub fn button(text: &str) -> Self {
        Self::new(ElementKind::Button, text)
    }

    /// An empty single-line text field.
    pub fn text_input() -> Self {
        Self::new(ElementKind::TextInput, "")
    }

    /// An empty multi-line text field.
    pub fn text_area() -> Self {
        Self::new(ElementKind::TextArea, "")
    }

    /// A run of inline text.
    pub fn text(text: &str) -> Self {
        Self::new(ElementKind::Text, text)
    }

    /// An element of `kind` with `text` and no flags.
    pub fn new(kind: ElementKind, text: &str) -> Self {
        Self {
            kind,
            text: String::from(text),
            flags: ElementFlags::empty(),
        }
    }

    /// Builder: set [`ElementFlags::DISABLED`].
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.flags |= ElementFlags::DISABLED;
        self
    }

    /// Builder: set [`ElementFlags::HIDDEN`].
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.flags |= ElementFlags::HIDDEN;
        self
    }

    /// Builder: set [`ElementFlags::FOCUSABLE`].
    #[must_use]
    pub fn focusable(mut self) -> Self {
        self.flags |= ElementFlags::FOCUSABLE;
        self
    }

    /// Builder: set [`ElementFlags::EDITABLE`].
    #[must_use]
    pub fn editable(mut self) -> Self {
        self.flags |= ElementFlags::EDITABLE;
        self
    }

    /// Whether this element is a tab stop, ignoring disabled/hidden state.
    pub fn is_tab_stop(&self) -> bool {
        self.kind.is_tab_stop() || self.flags.contains(ElementFlags::FOCUSABLE)
    }

    /// Whether this element accepts free text typing.
    pub fn accepts_text(&self) -> bool {
        self.kind.accepts_text() || self.flags.contains(ElementFlags::EDITABLE)
    }
}
