// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Element Tree: a small in-memory element hierarchy for hosting
//! keyboard behaviors.
//!
//! This crate is a reference host for interaction crates such as
//! `understory_mnemonic`. It answers the questions those crates ask of a UI
//! toolkit, without any rendering:
//!
//! - Which elements exist, in which document order ([`ElementTree::descendants`]).
//! - Which of them are tab stops, disabled, hidden, or accept free text
//!   ([`ElementTree::is_focusable`], [`ElementTree::accepts_text`]).
//! - What visible text an element carries ([`ElementTree::text_content`]).
//! - Which element holds focus ([`ElementTree::focused`], [`ElementTree::focus`]).
//! - In which order a key event reaches handlers ([`dispatch`]).
//! - When deferred callbacks are due ([`timers::TimerQueue`]).
//!
//! ## Example
//!
//! ```rust
//! use understory_element_tree::{Element, ElementTree};
//!
//! let mut tree = ElementTree::new();
//! let list = tree.insert(None, Element::container());
//! let filter = tree.insert(Some(list), Element::text_input());
//! let first = tree.insert(Some(list), Element::button("First"));
//!
//! assert!(tree.accepts_text(filter));
//! let focusable: Vec<_> = tree
//!     .descendants(list)
//!     .filter(|&id| tree.is_focusable(id))
//!     .collect();
//! assert_eq!(focusable, [filter, first]);
//! ```
//!
//! Stale [`ElementId`]s never panic: queries return `None`, `false`, or empty
//! results and mutations are ignored.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatch;
pub mod timers;
mod tree;
mod types;

pub use tree::{Descendants, ElementTree};
pub use types::{Element, ElementFlags, ElementId, ElementKind};
