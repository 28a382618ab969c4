// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key dispatch: build a capture → target → bubble sequence and walk it.
//!
//! Keyboard input is delivered to the focused element (or any element the host
//! chooses as target). [`ElementTree::dispatch_sequence`] builds the responder
//! sequence for that target from its ancestor chain, and [`run`] walks it,
//! honoring [`Outcome::Stop`].
//!
//! Higher-level semantics such as "default prevented" live on the event
//! payload you pass to [`run`], not in [`Outcome`].
//!
//! ## Minimal example
//!
//! ```
//! use understory_element_tree::dispatch::{self, Outcome, Phase};
//! use understory_element_tree::{Element, ElementTree};
//!
//! let mut tree = ElementTree::new();
//! let menu = tree.insert(None, Element::container());
//! let item = tree.insert(Some(menu), Element::button("Open"));
//!
//! let seq = tree.dispatch_sequence(item);
//! let mut seen = Vec::new();
//! let stopped = dispatch::run(&seq, &mut (), |d, _| {
//!     seen.push((d.phase, d.element));
//!     Outcome::Continue
//! });
//!
//! assert!(stopped.is_none());
//! assert_eq!(seen, vec![
//!     (Phase::Capture, menu),
//!     (Phase::Target, item),
//!     (Phase::Bubble, menu),
//! ]);
//! ```

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::tree::ElementTree;
use crate::types::ElementId;

/// Propagation phase of a dispatch entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Root → parent of the target.
    Capture,
    /// The target itself.
    Target,
    /// Parent of the target → root.
    Bubble,
}

/// Handler verdict controlling propagation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Keep going.
    Continue,
    /// Abort propagation immediately.
    Stop,
}

/// One step of a dispatch sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dispatch {
    /// Phase of this step.
    pub phase: Phase,
    /// Element receiving this step.
    pub element: ElementId,
}

impl ElementTree {
    /// Build the capture → target → bubble sequence for `target`.
    ///
    /// Returns an empty sequence for a stale target.
    pub fn dispatch_sequence(&self, target: ElementId) -> Vec<Dispatch> {
        if !self.is_alive(target) {
            return Vec::new();
        }
        // Ancestors, nearest first.
        let mut ancestors: SmallVec<[ElementId; 8]> = SmallVec::new();
        let mut cursor = self.parent_of(target);
        while let Some(id) = cursor {
            ancestors.push(id);
            cursor = self.parent_of(id);
        }

        let mut seq = Vec::with_capacity(ancestors.len() * 2 + 1);
        seq.extend(ancestors.iter().rev().map(|&element| Dispatch {
            phase: Phase::Capture,
            element,
        }));
        seq.push(Dispatch {
            phase: Phase::Target,
            element: target,
        });
        seq.extend(ancestors.iter().map(|&element| Dispatch {
            phase: Phase::Bubble,
            element,
        }));
        seq
    }
}

/// Run a handler over a dispatch sequence and honor stop outcomes.
///
/// Returns `None` if the full sequence was visited, or `Some(d)` with the
/// last visited entry if a handler returned [`Outcome::Stop`].
///
/// ```
/// use understory_element_tree::dispatch::{run, Dispatch, Outcome, Phase};
/// use understory_element_tree::{Element, ElementTree};
///
/// let mut tree = ElementTree::new();
/// let menu = tree.insert(None, Element::container());
/// let item = tree.insert(Some(menu), Element::button("Open"));
///
/// #[derive(Default)]
/// struct Ev { default_prevented: bool }
///
/// let seq = tree.dispatch_sequence(item);
/// let mut ev = Ev::default();
/// let stopped = run(&seq, &mut ev, |d, e| {
///     if d.phase == Phase::Target {
///         e.default_prevented = true;
///         return Outcome::Stop;
///     }
///     Outcome::Continue
/// });
///
/// assert_eq!(stopped.map(|d| d.element), Some(item));
/// assert!(ev.default_prevented);
/// ```
pub fn run<'a, E>(
    seq: &'a [Dispatch],
    event: &mut E,
    mut handler: impl FnMut(&Dispatch, &mut E) -> Outcome,
) -> Option<&'a Dispatch> {
    for d in seq {
        match handler(d, event) {
            Outcome::Continue => {}
            Outcome::Stop => return Some(d),
        }
    }
    None
}
