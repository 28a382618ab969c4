// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typeahead focus in a menu: element tree + dispatch + `understory_mnemonic`.
//!
//! This example shows how to combine:
//! - `understory_element_tree` for the menu, focus, and a virtual clock,
//! - `understory_element_tree::dispatch` to route key-downs like a DOM,
//! - `understory_mnemonic` for first-letter focus with repeat cycling.
//!
//! Run:
//! - `cargo run -p understory_demos --example typeahead_menu`
//! - `RUST_LOG=understory_mnemonic=trace cargo run -p understory_demos --example typeahead_menu`

use tracing_subscriber::EnvFilter;
use understory_element_tree::dispatch::{self, Outcome, Phase};
use understory_element_tree::timers::{TimerId, TimerQueue};
use understory_element_tree::{Element, ElementId, ElementTree};
use understory_mnemonic::adapters::element_tree::ElementTreeHost;
use understory_mnemonic::{Key, KeyDisposition, KeyEvent, Mnemonics};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = ElementTree::new();
    let menu = tree.insert(None, Element::container());
    for label in ["Bold", "Bullets", "Italic", "Blockquote", "Indent", "Underline"] {
        tree.insert(Some(menu), Element::button(label));
    }
    // Disabled entries are skipped.
    tree.insert(Some(menu), Element::button("Bibliography").disabled());

    let mut timers = TimerQueue::new();
    let mut mnemonics: Mnemonics<ElementId, TimerId> = Mnemonics::new();
    mnemonics.set_active(&mut ElementTreeHost::new(&mut tree, &mut timers), true, Some(menu));

    // (key, milliseconds to wait before pressing it)
    let script = [
        ("b", 0),
        ("b", 200),
        ("B", 200),
        ("b", 200),
        ("i", 1500),
        ("I", 300),
        ("u", 300),
        ("Enter", 300),
        ("z", 300),
    ];

    for (name, wait) in script {
        for timer in timers.advance_by(wait) {
            mnemonics.on_reset_timeout(timer);
        }

        let target = tree.focused().unwrap_or(menu);
        let event = KeyEvent::new(Key::from_name(name), target);
        let seq = tree.dispatch_sequence(target);
        let mut disposition = None;
        dispatch::run(&seq, &mut disposition, |d, out| {
            if d.phase == Phase::Target && event.key.is_activation() {
                println!("  activate {:?}", tree.text_content(d.element));
            }
            if d.element == menu && d.phase != Phase::Capture {
                let mut host = ElementTreeHost::new(&mut tree, &mut timers);
                *out = Some(mnemonics.on_key_down(&mut host, &event));
                return Outcome::Stop;
            }
            Outcome::Continue
        });

        let focused = tree
            .focused()
            .map(|id| tree.text_content(id).into_owned())
            .unwrap_or_default();
        let note = match disposition {
            Some(KeyDisposition::Focused(_)) => "moved",
            Some(KeyDisposition::Unmatched) => "no match",
            Some(KeyDisposition::Activation) => "left to element",
            Some(KeyDisposition::Ignored) | None => "ignored",
        };
        println!("t={:>5}ms {name:>5} -> {focused:<12} ({note})", timers.now());
    }
}
