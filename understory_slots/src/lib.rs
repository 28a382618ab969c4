// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Slots: named content slots for composite components.
//!
//! A composite (a list item with leading, label, and description parts, say)
//! lets callers supply its parts as child fragments. Each fragment registers
//! its content under a name while it mounts, and the composite lays the
//! contents out where they belong.
//!
//! Children mount after their parent renders, so the parent's first render
//! cannot see what they registered. [`SlotRegistry`] handles this with a
//! two-phase reveal:
//!
//! 1. First render: [`SlotRegistry::revealed`] is `None`. The composite
//!    renders its children (so they mount and register) and nothing else
//!    that depends on slot contents.
//! 2. After mount: [`SlotRegistry::did_mount`] requests exactly one more
//!    render through the host's redraw capability.
//! 3. Second render onward: [`SlotRegistry::revealed`] yields the complete
//!    [`Slots`] snapshot.
//!
//! Later registrations (a child re-rendering with new content) are stored
//! without requesting a redraw; the host's own update cycle picks them up.
//!
//! Fragments hold a [`Slot`], which registers on mount, re-registers on
//! [`Slot::update`], and clears its content on drop unless another slot has
//! since registered under the same name. A [`SlotContext`] that
//! is not attached to any registry accepts every call and does nothing.
//!
//! This crate is `no_std` and uses `alloc`. Registries are single-threaded.

#![no_std]

extern crate alloc;

mod registry;
mod slot;

pub use registry::{RequestRedraw, SlotContext, SlotRegistry, Slots};
pub use slot::Slot;
