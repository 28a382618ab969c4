// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for Understory Element Tree.
//!
//! ## Feature
//!
//! Enable with `element_tree_adapter` (on by default).
//!
//! ## Notes
//!
//! [`ElementTreeHost`] borrows a tree and a timer queue for the duration of
//! one event. Expired timers come back from
//! [`TimerQueue::advance_to`](understory_element_tree::timers::TimerQueue::advance_to);
//! forward each id to [`Mnemonics::on_reset_timeout`](crate::Mnemonics::on_reset_timeout).

use alloc::borrow::Cow;

use understory_element_tree::timers::{TimerId, TimerQueue};
use understory_element_tree::{ElementId, ElementTree};

use crate::host::MnemonicHost;

/// [`MnemonicHost`] over an [`ElementTree`] and a [`TimerQueue`].
#[derive(Debug)]
pub struct ElementTreeHost<'a> {
    /// The element hierarchy, including focus.
    pub tree: &'a mut ElementTree,
    /// Deferred callbacks.
    pub timers: &'a mut TimerQueue,
}

impl<'a> ElementTreeHost<'a> {
    /// Borrow a tree and a timer queue as a host.
    pub fn new(tree: &'a mut ElementTree, timers: &'a mut TimerQueue) -> Self {
        Self { tree, timers }
    }
}

impl MnemonicHost for ElementTreeHost<'_> {
    type Node = ElementId;
    type Timer = TimerId;

    fn is_attached(&self, node: ElementId) -> bool {
        self.tree.is_alive(node)
    }

    fn focused(&self) -> Option<ElementId> {
        self.tree.focused()
    }

    fn focus(&mut self, node: ElementId) {
        self.tree.focus(node);
    }

    fn visit_descendants(&self, container: ElementId, visitor: &mut dyn FnMut(ElementId)) {
        self.tree.descendants(container).for_each(visitor);
    }

    fn is_focusable(&self, node: ElementId) -> bool {
        self.tree.is_focusable(node)
    }

    fn accepts_text_input(&self, node: ElementId) -> bool {
        self.tree.accepts_text(node)
    }

    fn visible_text(&self, node: ElementId) -> Cow<'_, str> {
        self.tree.text_content(node)
    }

    fn set_timeout(&mut self, delay_ms: u64) -> TimerId {
        self.timers.set_timeout(delay_ms)
    }

    fn clear_timeout(&mut self, timer: TimerId) {
        self.timers.clear_timeout(timer);
    }
}
