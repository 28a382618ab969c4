// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Mnemonic: typeahead focus for menus, lists, and toolbars.
//!
//! Typing a letter while a container is active moves focus to the first
//! focusable descendant whose visible label starts with that letter. Typing
//! it again moves to the next one, wrapping around; after a pause the cycle
//! starts over. Enter and Space are left to the focused element.
//!
//! ## Model
//!
//! - A **host** ([`MnemonicHost`]) answers questions about the live UI tree
//!   (document order, focusability, visible text, text entry), moves focus,
//!   and schedules timeouts.
//! - A **filter** ([`classify`]) decides what a key press means: a mnemonic
//!   character, an activation key, or something to pass through (shortcuts
//!   with Ctrl/Alt/Meta, navigation keys, whitespace).
//! - **Candidates** ([`candidates()`], [`matches_for`]) are recomputed from the
//!   host on every press: focusable descendants with non-empty trimmed text,
//!   in depth-first document order. Disabled and hidden elements never match.
//! - The **engine** ([`Mnemonics`]) keeps the last key and the position in its
//!   match list, and owns a single reset timeout.
//!
//! ## Policy
//!
//! - Comparison is case-insensitive, and the cycle is shared across case:
//!   `b` then `B` continues the same cycle.
//! - The cycle position belongs to the engine. It is not derived from the
//!   currently focused element.
//! - Nothing here is an error. A missing or detached container, an unmatched
//!   key, a shortcut, or a focused text field all leave focus untouched.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_element_tree::timers::TimerQueue;
//! use understory_element_tree::{Element, ElementTree};
//! use understory_mnemonic::adapters::element_tree::ElementTreeHost;
//! use understory_mnemonic::{Key, KeyEvent, Mnemonics};
//!
//! let mut tree = ElementTree::new();
//! let list = tree.insert(None, Element::container());
//! let one = tree.insert(Some(list), Element::button("button 1"));
//! let two = tree.insert(Some(list), Element::button("Button 2"));
//! let third = tree.insert(Some(list), Element::button("third button"));
//! let mut timers = TimerQueue::new();
//!
//! let mut mnemonics = Mnemonics::new();
//! let mut host = ElementTreeHost::new(&mut tree, &mut timers);
//! mnemonics.set_active(&mut host, true, Some(list));
//!
//! mnemonics.on_key_down(&mut host, &KeyEvent::new(Key::Character('b'), list));
//! mnemonics.on_key_down(&mut host, &KeyEvent::new(Key::Character('B'), list));
//! assert_eq!(host.tree.focused(), Some(two));
//!
//! mnemonics.on_key_down(&mut host, &KeyEvent::new(Key::Character('t'), list));
//! assert_eq!(host.tree.focused(), Some(third));
//! # let _ = one;
//! ```
//!
//! ## Timeouts
//!
//! The engine asks the host for one timeout per focus move and cancels the
//! previous one first. When a timeout fires, pass its handle to
//! [`Mnemonics::on_reset_timeout`]. Stale handles are ignored.
//!
//! ## Features
//!
//! - `element_tree_adapter` (default): enables [`adapters::element_tree`],
//!   implementing [`MnemonicHost`] for `understory_element_tree`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
mod candidates;
mod engine;
mod host;
mod key;

pub use candidates::{Candidate, MatchList, candidates, label_initial, matches_for};
pub use engine::{DEFAULT_RESET_DELAY_MS, KeyDisposition, Mnemonics};
pub use host::MnemonicHost;
pub use key::{Key, KeyEvent, KeyIntent, Modifiers, classify, fold_case};
