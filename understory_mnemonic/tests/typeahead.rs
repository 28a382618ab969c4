// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end typeahead behavior over an element tree with key dispatch.

use understory_element_tree::dispatch::{self, Outcome, Phase};
use understory_element_tree::timers::TimerQueue;
use understory_element_tree::{Element, ElementId, ElementTree};
use understory_mnemonic::adapters::element_tree::ElementTreeHost;
use understory_mnemonic::{Key, KeyDisposition, KeyEvent, Mnemonics, Modifiers};

/// A list of five buttons, one disabled, plus a non-focusable span.
struct Fixture {
    tree: ElementTree,
    timers: TimerQueue,
    mnemonics: Mnemonics<ElementId, understory_element_tree::timers::TimerId>,
    container: ElementId,
    input: Option<ElementId>,
    buttons: [ElementId; 5],
    span: ElementId,
    /// Times each button's own key handler saw Enter or Space.
    selected: [u32; 5],
}

#[derive(Default)]
struct Options {
    has_input: bool,
    ref_not_attached: bool,
}

impl Fixture {
    fn new() -> Self {
        Self::with(Options::default())
    }

    fn with(options: Options) -> Self {
        let mut tree = ElementTree::new();
        let root = tree.insert(None, Element::container());
        let container = tree.insert(Some(root), Element::container());
        let input = options
            .has_input
            .then(|| tree.insert(Some(container), Element::text_input()));
        let buttons = [
            tree.insert(Some(container), Element::button("button 1")),
            tree.insert(Some(container), Element::button("Button 2")),
            tree.insert(Some(container), Element::button("third button")),
            tree.insert(
                Some(container),
                Element::button("fourth button is disabled").disabled(),
            ),
            tree.insert(Some(container), Element::button("button 5")),
        ];
        let span = tree.insert(Some(container), Element::text("not focusable"));
        if let Some(input) = input {
            assert!(tree.focus(input));
        }

        let mut timers = TimerQueue::new();
        let mut mnemonics = Mnemonics::new();
        let attached = (!options.ref_not_attached).then_some(container);
        mnemonics.set_active(
            &mut ElementTreeHost::new(&mut tree, &mut timers),
            true,
            attached,
        );

        Self {
            tree,
            timers,
            mnemonics,
            container,
            input,
            buttons,
            span,
            selected: [0; 5],
        }
    }

    /// Dispatch a key-down to `target` through capture, target, and bubble.
    ///
    /// Buttons run their own handler at target phase; the container runs the
    /// engine at target and bubble phase, like a DOM listener.
    fn key_down(
        &mut self,
        target: ElementId,
        key: &str,
        modifiers: Modifiers,
    ) -> Vec<KeyDisposition<ElementId>> {
        let seq = self.tree.dispatch_sequence(target);
        let event = KeyEvent::new(Key::from_name(key), target).with_modifiers(modifiers);
        let mut dispositions = Vec::new();
        dispatch::run(&seq, &mut dispositions, |d, out| {
            if d.phase == Phase::Capture {
                return Outcome::Continue;
            }
            if d.phase == Phase::Target
                && event.key.is_activation()
                && let Some(i) = self.buttons.iter().position(|&b| b == d.element)
            {
                self.selected[i] += 1;
            }
            if d.element == self.container {
                let mut host = ElementTreeHost::new(&mut self.tree, &mut self.timers);
                out.push(self.mnemonics.on_key_down(&mut host, &event));
            }
            Outcome::Continue
        });
        dispositions
    }

    fn press(&mut self, key: &str) -> KeyDisposition<ElementId> {
        let dispositions = self.key_down(self.container, key, Modifiers::empty());
        assert_eq!(dispositions.len(), 1);
        dispositions[0]
    }

    fn advance(&mut self, ms: u64) {
        for timer in self.timers.advance_by(ms) {
            self.mnemonics.on_reset_timeout(timer);
        }
    }

    fn focused(&self) -> Option<ElementId> {
        self.tree.focused()
    }
}

#[test]
fn first_element_b_focuses_button_1() {
    let mut f = Fixture::new();
    f.press("b");
    assert_eq!(f.focused(), Some(f.buttons[0]));
}

#[test]
fn not_first_element_t_focuses_third_button() {
    let mut f = Fixture::new();
    assert_eq!(f.press("t"), KeyDisposition::Focused(f.buttons[2]));
    assert_eq!(f.focused(), Some(f.buttons[2]));
}

#[test]
fn case_insensitive_uppercase_b_focuses_button_1() {
    let mut f = Fixture::new();
    f.press("B");
    assert_eq!(f.focused(), Some(f.buttons[0]));
}

#[test]
fn repeating_letter_wraps_and_skips_disabled() {
    let mut f = Fixture::new();
    let expected = [f.buttons[0], f.buttons[1], f.buttons[4], f.buttons[0]];
    for want in expected {
        f.press("b");
        assert_eq!(f.focused(), Some(want));
    }
}

#[test]
fn mixed_case_continues_the_cycle() {
    let mut f = Fixture::new();
    f.press("b");
    f.press("B");
    assert_eq!(f.focused(), Some(f.buttons[1]));
    f.press("b");
    assert_eq!(f.focused(), Some(f.buttons[4]));
}

#[test]
fn pause_restarts_the_cycle() {
    let mut f = Fixture::new();
    f.press("b");
    f.press("b");
    assert_eq!(f.focused(), Some(f.buttons[1]));

    f.advance(999);
    f.press("b");
    assert_eq!(f.focused(), Some(f.buttons[4]));

    f.advance(1000);
    assert_eq!(f.mnemonics.last_key(), None);
    f.press("b");
    assert_eq!(f.focused(), Some(f.buttons[0]));
}

#[test]
fn cycle_ignores_focus_moved_elsewhere() {
    let mut f = Fixture::new();
    f.press("b");
    // The user tabs to "third button"; the cycle continues from the engine's
    // own position.
    assert!(f.tree.focus(f.buttons[2]));
    f.press("b");
    assert_eq!(f.focused(), Some(f.buttons[1]));
}

#[test]
fn space_selects_the_focused_option() {
    let mut f = Fixture::new();
    f.press("t");
    let third = f.buttons[2];
    assert_eq!(f.focused(), Some(third));

    let dispositions = f.key_down(third, " ", Modifiers::empty());
    assert_eq!(dispositions, [KeyDisposition::Activation]);
    assert_eq!(f.selected, [0, 0, 1, 0, 0]);
    assert_eq!(f.focused(), Some(third));
}

#[test]
fn enter_selects_the_focused_option() {
    let mut f = Fixture::new();
    f.press("t");
    let third = f.buttons[2];

    f.key_down(third, "Enter", Modifiers::empty());
    assert_eq!(f.selected, [0, 0, 1, 0, 0]);
    assert_eq!(f.focused(), Some(third));
}

#[test]
fn shortcuts_do_nothing() {
    let mut f = Fixture::new();
    let dispositions = f.key_down(f.container, "b", Modifiers::META);
    assert_eq!(dispositions, [KeyDisposition::Ignored]);
    assert_ne!(f.focused(), Some(f.buttons[0]));
    assert!(!f.mnemonics.has_pending_reset());
}

#[test]
fn text_input_focus_does_nothing() {
    let mut f = Fixture::with(Options {
        has_input: true,
        ..Options::default()
    });
    let input = f.input.unwrap();
    assert_eq!(f.focused(), Some(input));

    assert_eq!(f.press("b"), KeyDisposition::Ignored);
    assert_eq!(f.focused(), Some(input));

    // Typing inside the field itself is never hijacked either.
    let dispositions = f.key_down(input, "b", Modifiers::empty());
    assert_eq!(dispositions, [KeyDisposition::Ignored]);
    assert_eq!(f.focused(), Some(input));
}

#[test]
fn missing_container_is_inert() {
    let mut f = Fixture::with(Options {
        ref_not_attached: true,
        ..Options::default()
    });
    let dispositions = f.key_down(f.container, "b", Modifiers::empty());
    assert_eq!(dispositions, [KeyDisposition::Ignored]);
    assert!(!f.mnemonics.is_active());
    assert_ne!(f.focused(), Some(f.buttons[0]));
}

#[test]
fn removed_container_is_inert() {
    let mut f = Fixture::new();
    let container = f.container;
    f.tree.remove(container);
    let mut host = ElementTreeHost::new(&mut f.tree, &mut f.timers);
    let event = KeyEvent::new(Key::Character('b'), container);
    assert_eq!(
        f.mnemonics.on_key_down(&mut host, &event),
        KeyDisposition::Ignored
    );
    assert_eq!(f.focused(), None);
}

#[test]
fn live_tree_changes_are_picked_up() {
    let mut f = Fixture::new();
    f.press("b");
    f.tree.set_disabled(f.buttons[3], false);
    f.tree.set_text(f.buttons[3], "bonus button");
    f.tree.set_hidden(f.buttons[1], true);

    f.press("b");
    assert_eq!(f.focused(), Some(f.buttons[3]));
    f.press("b");
    assert_eq!(f.focused(), Some(f.buttons[4]));
    f.press("b");
    assert_eq!(f.focused(), Some(f.buttons[0]));
}

#[test]
fn non_focusable_text_never_matches() {
    let mut f = Fixture::new();
    assert_eq!(f.press("n"), KeyDisposition::Unmatched);
    assert_ne!(f.focused(), Some(f.span));
    assert_eq!(f.focused(), None);
}

#[test]
fn detaching_cancels_the_reset_timer() {
    let mut f = Fixture::new();
    f.press("b");
    assert_eq!(f.timers.pending(), 1);

    let mut host = ElementTreeHost::new(&mut f.tree, &mut f.timers);
    f.mnemonics.set_active(&mut host, true, None);
    assert_eq!(f.timers.pending(), 0);
    assert!(!f.mnemonics.is_active());
    assert_eq!(f.mnemonics.cursor(), None);
}
