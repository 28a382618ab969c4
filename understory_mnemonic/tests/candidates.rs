// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate enumeration over a nested element tree.

use understory_element_tree::timers::TimerQueue;
use understory_element_tree::{Element, ElementId, ElementTree};
use understory_mnemonic::adapters::element_tree::ElementTreeHost;
use understory_mnemonic::{Candidate, candidates, matches_for};

/// A toolbar mixing every kind of element that must not be a candidate.
struct Toolbar {
    tree: ElementTree,
    timers: TimerQueue,
    root: ElementId,
    alpha: ElementId,
    bold: ElementId,
    charlie: ElementId,
}

fn toolbar() -> Toolbar {
    let mut tree = ElementTree::new();
    let root = tree.insert(None, Element::container());
    let alpha = tree.insert(Some(root), Element::button("  Alpha"));
    tree.insert(Some(root), Element::button("Beta").disabled());
    let hidden = tree.insert(Some(root), Element::container().hidden());
    tree.insert(Some(hidden), Element::button("Bravo"));
    tree.insert(Some(root), Element::button("   "));
    tree.insert(Some(root), Element::text("Banner"));
    let group = tree.insert(Some(root), Element::container());
    let bold = tree.insert(Some(group), Element::button("bold"));
    tree.insert(Some(group), Element::text_input());
    let charlie = tree.insert(Some(root), Element::button("Charlie"));
    Toolbar {
        tree,
        timers: TimerQueue::new(),
        root,
        alpha,
        bold,
        charlie,
    }
}

#[test]
fn candidates_are_focusable_labeled_and_in_document_order() {
    let mut t = toolbar();
    let host = ElementTreeHost::new(&mut t.tree, &mut t.timers);
    let found = candidates(&host, t.root);
    assert_eq!(
        found,
        [
            Candidate {
                node: t.alpha,
                initial: 'a',
                order: 0,
            },
            Candidate {
                node: t.bold,
                initial: 'b',
                order: 1,
            },
            Candidate {
                node: t.charlie,
                initial: 'c',
                order: 2,
            },
        ]
    );
}

#[test]
fn matches_are_the_candidates_sharing_an_initial() {
    let mut t = toolbar();
    let bold = t.bold;
    let host = ElementTreeHost::new(&mut t.tree, &mut t.timers);
    assert_eq!(matches_for(&host, t.root, 'B').as_slice(), [bold]);
    assert!(matches_for(&host, t.root, 'z').is_empty());
}

#[test]
fn enabling_an_element_makes_it_a_candidate() {
    let mut t = toolbar();
    let beta = t.tree.children_of(t.root)[1];
    t.tree.set_disabled(beta, false);
    let host = ElementTreeHost::new(&mut t.tree, &mut t.timers);
    let nodes: Vec<ElementId> = matches_for(&host, t.root, 'b').into_vec();
    assert_eq!(nodes, [beta, t.bold]);
}
