// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mnemonic focus state machine.

use tracing::{debug, trace};

use crate::candidates::{MatchList, matches_for};
use crate::host::MnemonicHost;
use crate::key::{KeyEvent, KeyIntent, classify};

/// Default inactivity window after which repeat-key cycling restarts, in milliseconds.
pub const DEFAULT_RESET_DELAY_MS: u64 = 1000;

/// What the engine did with a key-down event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyDisposition<K> {
    /// Not for the engine: inactive, no container, shortcut, text entry, or a
    /// non-printable key. Let the event continue untouched.
    Ignored,
    /// Enter or Space. The engine did nothing; the focused element's own
    /// handler is responsible for activation.
    Activation,
    /// An eligible character with no matching candidate. Nothing changed.
    Unmatched,
    /// Focus moved to this node. Hosts may prevent the default action.
    Focused(K),
}

/// Typeahead focus for one container.
///
/// Typing a character moves focus to the first focusable descendant whose
/// visible label starts with it, ignoring case. Typing the same character
/// again within [`Mnemonics::reset_delay`] moves to the next such descendant,
/// wrapping around after the last one. After the inactivity window, the next
/// press starts again from the first match.
///
/// The engine is inert until [`Mnemonics::set_active`] is called with
/// `enabled = true` and an attached container.
///
/// ## Example
///
/// ```rust
/// use understory_element_tree::timers::TimerQueue;
/// use understory_element_tree::{Element, ElementTree};
/// use understory_mnemonic::adapters::element_tree::ElementTreeHost;
/// use understory_mnemonic::{Key, KeyDisposition, KeyEvent, Mnemonics};
///
/// let mut tree = ElementTree::new();
/// let menu = tree.insert(None, Element::container());
/// let copy = tree.insert(Some(menu), Element::button("Copy"));
/// let cut = tree.insert(Some(menu), Element::button("Cut"));
/// let mut timers = TimerQueue::new();
///
/// let mut mnemonics = Mnemonics::new();
/// let mut host = ElementTreeHost::new(&mut tree, &mut timers);
/// mnemonics.set_active(&mut host, true, Some(menu));
///
/// let press = KeyEvent::new(Key::Character('c'), menu);
/// assert_eq!(mnemonics.on_key_down(&mut host, &press), KeyDisposition::Focused(copy));
/// assert_eq!(mnemonics.on_key_down(&mut host, &press), KeyDisposition::Focused(cut));
/// assert_eq!(mnemonics.on_key_down(&mut host, &press), KeyDisposition::Focused(copy));
/// ```
#[derive(Clone, Debug)]
pub struct Mnemonics<K, T> {
    enabled: bool,
    container: Option<K>,
    /// Most recent case-folded key that moved focus.
    last_key: Option<char>,
    /// Index into the match list for `last_key` of the node focused last.
    cursor: Option<usize>,
    pending_reset: Option<T>,
    /// Inactivity window in milliseconds before repeat-key cycling restarts.
    pub reset_delay: u64,
}

impl<K: Copy + Eq, T: Copy + Eq> Mnemonics<K, T> {
    /// Create an inactive engine with the default reset delay.
    pub fn new() -> Self {
        Self::with_reset_delay(DEFAULT_RESET_DELAY_MS)
    }

    /// Create an inactive engine with a custom reset delay in milliseconds.
    pub fn with_reset_delay(reset_delay: u64) -> Self {
        Self {
            enabled: false,
            container: None,
            last_key: None,
            cursor: None,
            pending_reset: None,
            reset_delay,
        }
    }

    /// Enable or disable the engine for `container`.
    ///
    /// Disabling, detaching (`None`), or switching to another container
    /// cancels any pending reset and forgets the cycle position.
    pub fn set_active<H>(&mut self, host: &mut H, enabled: bool, container: Option<K>)
    where
        H: MnemonicHost<Node = K, Timer = T>,
    {
        let keep_state =
            enabled && self.enabled && container.is_some() && container == self.container;
        if !keep_state {
            self.reset(host);
        }
        self.enabled = enabled;
        self.container = container;
        trace!(enabled, attached = container.is_some(), "mnemonics activation");
    }

    /// Whether the engine is enabled and has a container.
    ///
    /// The host may still report the container detached, in which case key
    /// presses are ignored.
    pub fn is_active(&self) -> bool {
        self.enabled && self.container.is_some()
    }

    /// The container this engine watches.
    pub fn container(&self) -> Option<K> {
        self.container
    }

    /// Most recent case-folded key that moved focus, until the reset fires.
    pub fn last_key(&self) -> Option<char> {
        self.last_key
    }

    /// Position of the last focused node within the match list for
    /// [`Mnemonics::last_key`].
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Whether a reset timeout is scheduled.
    pub fn has_pending_reset(&self) -> bool {
        self.pending_reset.is_some()
    }

    /// Handle a key-down event that reached the container.
    ///
    /// The event must come from the container's subtree; the host decides
    /// that by where it installs the listener. Only eligible character keys
    /// change state or focus.
    pub fn on_key_down<H>(&mut self, host: &mut H, event: &KeyEvent<K>) -> KeyDisposition<K>
    where
        H: MnemonicHost<Node = K, Timer = T>,
    {
        let Some(container) = self.container.filter(|_| self.enabled) else {
            return KeyDisposition::Ignored;
        };
        if !host.is_attached(container) {
            trace!("mnemonics container detached, ignoring key");
            return KeyDisposition::Ignored;
        }
        if host.accepts_text_input(event.target)
            || host.focused().is_some_and(|f| host.accepts_text_input(f))
        {
            trace!("text entry has focus, ignoring key");
            return KeyDisposition::Ignored;
        }

        let key = match classify(event.key, event.modifiers) {
            KeyIntent::Pass => return KeyDisposition::Ignored,
            KeyIntent::Activate => return KeyDisposition::Activation,
            KeyIntent::Mnemonic(key) => key,
        };

        let matches: MatchList<K> = matches_for(host, container, key);
        if matches.is_empty() {
            trace!(%key, "no mnemonic match");
            return KeyDisposition::Unmatched;
        }

        let next = match self.cursor {
            Some(cursor) if self.last_key == Some(key) => (cursor + 1) % matches.len(),
            _ => 0,
        };
        let target = matches[next];
        host.focus(target);
        self.last_key = Some(key);
        self.cursor = Some(next);
        debug!(%key, index = next, of = matches.len(), "mnemonic focus");

        if let Some(timer) = self.pending_reset.take() {
            host.clear_timeout(timer);
        }
        self.pending_reset = Some(host.set_timeout(self.reset_delay));

        KeyDisposition::Focused(target)
    }

    /// Handle an expired reset timeout.
    ///
    /// Clears the cycle position if `timer` is the pending reset; stale
    /// handles are ignored.
    pub fn on_reset_timeout(&mut self, timer: T) {
        if self.pending_reset != Some(timer) {
            return;
        }
        self.pending_reset = None;
        self.last_key = None;
        self.cursor = None;
        trace!("mnemonic cycle reset");
    }

    /// Cancel any pending reset and forget the cycle position.
    pub fn reset<H>(&mut self, host: &mut H)
    where
        H: MnemonicHost<Node = K, Timer = T>,
    {
        if let Some(timer) = self.pending_reset.take() {
            host.clear_timeout(timer);
        }
        self.last_key = None;
        self.cursor = None;
    }
}

impl<K: Copy + Eq, T: Copy + Eq> Default for Mnemonics<K, T> {
    fn default() -> Self {
        Self::new()
    }
}
