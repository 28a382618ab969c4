// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot providers: the child side of a registry.

use alloc::string::String;

use crate::registry::{OwnerId, SlotContext};

/// A child fragment's registration under one slot name.
///
/// Mounting registers content; dropping the slot clears it again. The slot
/// itself renders nothing: the composite decides where the content goes.
///
/// When several slots share a name, the last one to register owns the
/// content. Dropping or renaming a slot only clears content it still owns.
///
/// ```rust
/// use understory_slots::{Slot, SlotRegistry};
///
/// let registry = SlotRegistry::new(["title"], || {});
/// let ctx = registry.provider();
///
/// let mut title = Slot::mount(&ctx, "title", "Inbox");
/// title.update("title", "Inbox (3)");
/// assert_eq!(registry.slots().get("title"), Some(&"Inbox (3)"));
///
/// drop(title);
/// assert_eq!(registry.slots().get("title"), None);
/// ```
pub struct Slot<C> {
    ctx: SlotContext<C>,
    name: String,
    owner: OwnerId,
}

impl<C> core::fmt::Debug for Slot<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Slot")
            .field("name", &self.name)
            .field("ctx", &self.ctx)
            .field("owner", &self.owner)
            .finish()
    }
}

impl<C> Slot<C> {
    /// Register `content` under `name` in `ctx`.
    ///
    /// With a detached context this does nothing, and neither does anything
    /// else the slot does later.
    pub fn mount(ctx: &SlotContext<C>, name: &str, content: C) -> Self {
        let owner = ctx.claim_owner();
        ctx.register_as(owner, name, content);
        Self {
            ctx: ctx.clone(),
            name: String::from(name),
            owner,
        }
    }

    /// The name this slot is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Re-register after the fragment re-rendered.
    ///
    /// Renaming clears the old name before registering under the new one.
    pub fn update(&mut self, name: &str, content: C) {
        if name != self.name {
            self.ctx.unregister_as(self.owner, &self.name);
            self.name = String::from(name);
        }
        self.ctx.register_as(self.owner, name, content);
    }

    /// Unregister and drop the slot.
    pub fn unmount(self) {}
}

impl<C> Drop for Slot<C> {
    fn drop(&mut self) {
        self.ctx.unregister_as(self.owner, &self.name);
    }
}
