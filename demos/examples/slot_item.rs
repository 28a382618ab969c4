// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A list item composite whose parts arrive through `understory_slots`.
//!
//! The host here is a tiny render loop: a redraw request queues one more
//! pass. The item renders a placeholder first, its slot children mount and
//! register, and the single extra pass lays out the complete item.
//!
//! Run:
//! - `cargo run -p understory_demos --example slot_item`
//! - `RUST_LOG=understory_slots=trace cargo run -p understory_demos --example slot_item`

use std::cell::Cell;
use std::rc::Rc;

use tracing_subscriber::EnvFilter;
use understory_slots::{RequestRedraw, Slot, SlotRegistry};

struct ListItem<R> {
    slots: SlotRegistry<String, R>,
    parts: Vec<Slot<String>>,
}

impl<R: RequestRedraw> ListItem<R> {
    fn render(&self) -> String {
        let Some(slots) = self.slots.revealed() else {
            return String::from("[ ... ]");
        };
        let part = |name: &str| slots.get(name).cloned().unwrap_or_default();
        format!(
            "[ {} {} | {} ]",
            part("leading"),
            part("label"),
            part("description")
        )
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let queued = Rc::new(Cell::new(1_u32));
    let schedule = queued.clone();
    let mut item = ListItem {
        slots: SlotRegistry::new(["leading", "label", "description"], move || {
            schedule.set(schedule.get() + 1);
        }),
        parts: Vec::new(),
    };

    let mut pass = 0;
    while queued.get() > 0 {
        queued.set(queued.get() - 1);
        pass += 1;
        println!("pass {pass}: {}", item.render());

        if item.parts.is_empty() {
            let ctx = item.slots.provider();
            item.parts = vec![
                Slot::mount(&ctx, "leading", String::from("*")),
                Slot::mount(&ctx, "label", String::from("Inbox")),
                Slot::mount(&ctx, "description", String::from("3 unread")),
            ];
        }
        item.slots.did_mount();
    }

    // A child re-renders with new content; no pass is requested for it.
    item.parts[2].update("description", String::from("4 unread"));
    println!("queued after update: {}", queued.get());
    println!("next host-driven pass: {}", item.render());

    // Removing a child leaves its slot empty.
    item.parts.remove(0);
    println!("after removing leading: {}", item.render());
}
