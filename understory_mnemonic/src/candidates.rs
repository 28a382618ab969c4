// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate enumeration and first-letter matching.
//!
//! Candidates are derived from the live host tree on every call and never
//! cached: elements may have been added, removed, disabled, or relabeled
//! since the last key press.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::host::MnemonicHost;
use crate::key::fold_case;

/// Match list for one key, in document order.
///
/// Menus and toolbars rarely have more than a handful of items sharing an
/// initial, so these stay inline.
pub type MatchList<K> = SmallVec<[K; 8]>;

/// A focusable descendant with a visible label.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Candidate<K> {
    /// Host node.
    pub node: K,
    /// Case-folded first character of the trimmed label.
    pub initial: char,
    /// Position among candidates in document order.
    pub order: usize,
}

/// Case-folded first character of `text` after trimming, or `None` if the
/// trimmed text is empty.
pub fn label_initial(text: &str) -> Option<char> {
    text.trim().chars().next().map(fold_case)
}

/// All candidates under `container`, in document order.
///
/// A candidate is a descendant that is focusable and carries non-empty
/// trimmed visible text.
pub fn candidates<H: MnemonicHost>(host: &H, container: H::Node) -> Vec<Candidate<H::Node>> {
    let mut out = Vec::new();
    host.visit_descendants(container, &mut |node| {
        if !host.is_focusable(node) {
            return;
        }
        if let Some(initial) = label_initial(&host.visible_text(node)) {
            let order = out.len();
            out.push(Candidate {
                node,
                initial,
                order,
            });
        }
    });
    out
}

/// Candidates under `container` whose label starts with `key`, ignoring case.
pub fn matches_for<H: MnemonicHost>(
    host: &H,
    container: H::Node,
    key: char,
) -> MatchList<H::Node> {
    let key = fold_case(key);
    candidates(host, container)
        .into_iter()
        .filter(|c| c.initial == key)
        .map(|c| c.node)
        .collect()
}
