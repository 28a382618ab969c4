// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A list item composite driven through host render passes.

use std::cell::Cell;
use std::rc::Rc;

use understory_slots::{Slot, SlotRegistry};

/// What one render pass of the list item produced.
#[derive(Debug, PartialEq)]
enum Frame {
    /// Slots not revealed yet: only the children were rendered.
    Placeholder,
    /// Leading, label, and description as laid out.
    Laid(Option<&'static str>, Option<&'static str>, Option<&'static str>),
}

struct ListItem<R> {
    registry: SlotRegistry<&'static str, R>,
    children: Vec<Slot<&'static str>>,
    frames: Vec<Frame>,
}

impl<R: understory_slots::RequestRedraw> ListItem<R> {
    fn new(redraw: R) -> Self {
        Self {
            registry: SlotRegistry::new(["leading", "label", "description"], redraw),
            children: Vec::new(),
            frames: Vec::new(),
        }
    }

    fn render(&mut self) {
        let frame = match self.registry.revealed() {
            None => Frame::Placeholder,
            Some(slots) => Frame::Laid(
                slots.get("leading").copied(),
                slots.get("label").copied(),
                slots.get("description").copied(),
            ),
        };
        self.frames.push(frame);
    }

    fn mount(&mut self, parts: &[(&str, &'static str)]) {
        self.render();
        let ctx = self.registry.provider();
        self.children = parts
            .iter()
            .map(|&(name, content)| Slot::mount(&ctx, name, content))
            .collect();
        self.registry.did_mount();
    }
}

fn counter() -> (Rc<Cell<u32>>, impl Fn()) {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    (count, move || c.set(c.get() + 1))
}

#[test]
fn second_pass_reveals_all_parts() {
    let (redraws, redraw) = counter();
    let mut item = ListItem::new(redraw);
    item.mount(&[("leading", "icon"), ("label", "Inbox"), ("description", "3 new")]);
    assert_eq!(redraws.get(), 1);

    // The host honors the single redraw request.
    item.render();
    assert_eq!(
        item.frames,
        [
            Frame::Placeholder,
            Frame::Laid(Some("icon"), Some("Inbox"), Some("3 new")),
        ]
    );
}

#[test]
fn missing_parts_lay_out_as_empty() {
    let (_, redraw) = counter();
    let mut item = ListItem::new(redraw);
    item.mount(&[("label", "Drafts")]);
    item.render();
    assert_eq!(item.frames[1], Frame::Laid(None, Some("Drafts"), None));
}

#[test]
fn later_updates_never_request_redraws() {
    let (redraws, redraw) = counter();
    let mut item = ListItem::new(redraw);
    item.mount(&[("label", "Inbox"), ("description", "3 new")]);
    item.render();

    item.children[1].update("description", "4 new");
    item.registry.did_mount();
    assert_eq!(redraws.get(), 1);

    item.render();
    assert_eq!(item.frames[2], Frame::Laid(None, Some("Inbox"), Some("4 new")));
}

#[test]
fn removed_child_leaves_an_empty_slot() {
    let (_, redraw) = counter();
    let mut item = ListItem::new(redraw);
    item.mount(&[("leading", "icon"), ("label", "Inbox")]);
    item.children.remove(0);
    item.render();
    assert_eq!(item.frames[1], Frame::Laid(None, Some("Inbox"), None));
    assert_eq!(item.registry.slots().len(), 3);
}

#[test]
fn remount_gets_one_more_pass() {
    let (redraws, redraw) = counter();
    let mut item = ListItem::new(redraw);
    item.mount(&[("label", "Inbox")]);
    item.registry.will_unmount();
    item.children.clear();

    item.mount(&[("label", "Archive")]);
    assert_eq!(redraws.get(), 2);
    assert_eq!(item.frames, [Frame::Placeholder, Frame::Placeholder]);
}

#[test]
fn unexpected_names_are_kept() {
    let (_, redraw) = counter();
    let mut item = ListItem::new(redraw);
    item.mount(&[("label", "Inbox"), ("badge", "3")]);
    let slots = item.registry.slots();
    let names: Vec<&str> = slots.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["leading", "label", "description", "badge"]);
    assert_eq!(slots.get("badge"), Some(&"3"));
}

#[test]
fn child_update_during_render_is_kept() {
    let (_, redraw) = counter();
    let mut item = ListItem::new(redraw);
    item.mount(&[("label", "Inbox")]);

    let slots = item.registry.revealed().unwrap();
    item.children[0].update("label", "Inbox (3)");
    assert_eq!(slots.get("label"), Some(&"Inbox"));

    let next = item.registry.revealed().unwrap();
    assert_eq!(next.get("label"), Some(&"Inbox (3)"));
}

#[test]
fn child_unmount_during_render_clears_its_slot() {
    let (_, redraw) = counter();
    let mut item = ListItem::new(redraw);
    item.mount(&[("leading", "icon"), ("label", "Inbox")]);

    let slots = item.registry.revealed().unwrap();
    item.children.remove(0);
    assert_eq!(slots.get("leading"), Some(&"icon"));

    item.render();
    assert_eq!(item.frames[1], Frame::Laid(None, Some("Inbox"), None));
}

#[test]
fn shared_name_survives_the_displaced_child() {
    let (_, redraw) = counter();
    let mut item = ListItem::new(redraw);
    item.mount(&[("label", "Inbox"), ("label", "Archive")]);
    item.children.remove(0);
    item.render();
    assert_eq!(item.frames[1], Frame::Laid(None, Some("Archive"), None));
}
