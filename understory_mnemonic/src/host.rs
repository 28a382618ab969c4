// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capabilities the engine needs from a UI toolkit.

use alloc::borrow::Cow;

/// Host capabilities consumed by [`Mnemonics`](crate::Mnemonics).
///
/// The engine never creates or destroys nodes. It reads the live tree at
/// every key press, moves focus, and schedules one deferred reset at a time.
/// Node and timer handles are small copyable values owned by the host.
pub trait MnemonicHost {
    /// Identifier for a node in the host tree.
    type Node: Copy + Eq;
    /// Handle for a scheduled timeout.
    type Timer: Copy + Eq;

    /// Whether `node` is currently part of the host tree.
    fn is_attached(&self, node: Self::Node) -> bool;

    /// The node holding focus, if any.
    fn focused(&self) -> Option<Self::Node>;

    /// Move focus to `node`.
    fn focus(&mut self, node: Self::Node);

    /// Visit the strict descendants of `container` in depth-first document order.
    fn visit_descendants(&self, container: Self::Node, visitor: &mut dyn FnMut(Self::Node));

    /// Whether `node` is reachable by tab focus: a tab stop that is neither
    /// disabled nor hidden.
    fn is_focusable(&self, node: Self::Node) -> bool;

    /// Whether `node` accepts free text typing (text fields, content-editable).
    fn accepts_text_input(&self, node: Self::Node) -> bool;

    /// Visible text content of `node`, untrimmed.
    fn visible_text(&self, node: Self::Node) -> Cow<'_, str>;

    /// Schedule a timeout `delay_ms` milliseconds from now.
    ///
    /// When it fires, the host calls
    /// [`Mnemonics::on_reset_timeout`](crate::Mnemonics::on_reset_timeout)
    /// with the returned handle.
    fn set_timeout(&mut self, delay_ms: u64) -> Self::Timer;

    /// Cancel a timeout scheduled with [`MnemonicHost::set_timeout`].
    fn clear_timeout(&mut self, timer: Self::Timer);
}
