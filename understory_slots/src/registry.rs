// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-composite slot table, its provider handle, and the mount protocol.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use hashbrown::HashMap;
use tracing::{debug, trace};

/// The host's "render this component again" capability.
///
/// Implemented for any `Fn()`, so a closure that schedules a redraw works.
pub trait RequestRedraw {
    /// Ask the host for one more render pass of the owning composite.
    fn request_redraw(&self);
}

impl<F: Fn()> RequestRedraw for F {
    fn request_redraw(&self) {
        self();
    }
}

/// Identity of a [`Slot`](crate::Slot) within one registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct OwnerId(u64);

struct Entry<C> {
    content: Option<C>,
    /// The slot that wrote `content`, or `None` for a plain context write.
    owner: Option<OwnerId>,
}

struct SlotTable<C> {
    /// Expected names in declaration order, then extra names in
    /// first-registration order.
    order: Vec<String>,
    entries: HashMap<String, Entry<C>>,
    next_owner: u64,
}

impl<C> SlotTable<C> {
    fn set(&mut self, name: &str, content: Option<C>, owner: Option<OwnerId>) {
        match self.entries.get_mut(name) {
            Some(entry) => {
                entry.content = content;
                entry.owner = owner;
            }
            None => {
                self.order.push(String::from(name));
                self.entries
                    .insert(String::from(name), Entry { content, owner });
            }
        }
    }

    /// Clear `name` if `owner` is `None` or still owns the entry.
    fn clear(&mut self, name: &str, owner: Option<OwnerId>) -> bool {
        match self.entries.get_mut(name) {
            Some(entry) if owner.is_none() || entry.owner == owner => {
                entry.content = None;
                entry.owner = None;
                true
            }
            _ => false,
        }
    }
}

type SharedTable<C> = Rc<RefCell<SlotTable<C>>>;

/// Slot contents for one composite instance.
///
/// Child fragments register their content through a [`SlotContext`] while
/// they mount. Because children mount after the composite has rendered, the
/// first render cannot see them. Call [`SlotRegistry::did_mount`] once the
/// children have mounted: the first call in a mount lifecycle requests exactly
/// one extra render, after which [`SlotRegistry::revealed`] exposes complete
/// contents.
///
/// The redraw capability is bound at construction, so it cannot change
/// identity between renders and trigger a second extra pass.
///
/// ## Example
///
/// ```rust
/// use core::cell::Cell;
/// use std::rc::Rc;
/// use understory_slots::{Slot, SlotRegistry};
///
/// let redraws = Rc::new(Cell::new(0));
/// let counter = redraws.clone();
/// let mut registry = SlotRegistry::new(["leading", "description"], move || {
///     counter.set(counter.get() + 1);
/// });
///
/// // First pass: nothing to show yet.
/// assert!(registry.revealed().is_none());
///
/// // Children mount and register.
/// let ctx = registry.provider();
/// let _icon = Slot::mount(&ctx, "leading", "★");
///
/// // Mount phase done: one extra pass is requested.
/// assert!(registry.did_mount());
/// assert_eq!(redraws.get(), 1);
///
/// // Second pass sees everything.
/// let slots = registry.revealed().unwrap();
/// assert_eq!(slots.get("leading"), Some(&"★"));
/// assert_eq!(slots.get("description"), None);
/// ```
pub struct SlotRegistry<C, R> {
    table: SharedTable<C>,
    redraw: R,
    mounted: bool,
}

impl<C, R> core::fmt::Debug for SlotRegistry<C, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let table = self.table.try_borrow().ok();
        f.debug_struct("SlotRegistry")
            .field("names", &table.as_ref().map(|t| t.order.clone()))
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl<C, R: RequestRedraw> SlotRegistry<C, R> {
    /// Create a registry expecting `names`, all initially empty.
    pub fn new<'n>(names: impl IntoIterator<Item = &'n str>, redraw: R) -> Self {
        let mut table = SlotTable {
            order: Vec::new(),
            entries: HashMap::new(),
            next_owner: 0,
        };
        for name in names {
            table.set(name, None, None);
        }
        Self {
            table: Rc::new(RefCell::new(table)),
            redraw,
            mounted: false,
        }
    }

    /// Handle for child fragments to register into this registry.
    pub fn provider(&self) -> SlotContext<C> {
        SlotContext {
            table: Some(self.table.clone()),
        }
    }

    /// Whether the mount phase has completed.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Signal that the composite and its children have mounted.
    ///
    /// The first call in a mount lifecycle marks the registry mounted and
    /// requests one redraw, returning `true`. Every later call returns `false`
    /// and requests nothing.
    pub fn did_mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        debug!("slots mounted, requesting extra render pass");
        self.redraw.request_redraw();
        true
    }

    /// Signal that the composite is unmounting.
    ///
    /// A later [`SlotRegistry::did_mount`] starts a new lifecycle with its own
    /// single extra pass. Registered contents are kept.
    pub fn will_unmount(&mut self) {
        self.mounted = false;
    }
}

impl<C: Clone, R> SlotRegistry<C, R> {
    /// Snapshot of the current contents, whether or not the mount phase has
    /// completed.
    ///
    /// The snapshot does not borrow the registry, so children may keep
    /// registering and unregistering while a composite renders from it.
    pub fn slots(&self) -> Slots<C> {
        let table = self.table.borrow();
        let entries = table
            .order
            .iter()
            .map(|name| {
                let content = table.entries.get(name).and_then(|e| e.content.clone());
                (name.clone(), content)
            })
            .collect();
        Slots { entries }
    }

    /// Snapshot of the current contents, once the mount phase has completed.
    ///
    /// Returns `None` during the first render of a mount lifecycle, so a
    /// composite never renders from partially registered slots.
    pub fn revealed(&self) -> Option<Slots<C>> {
        self.mounted.then(|| self.slots())
    }
}

/// Provider handle passed down to child fragments.
///
/// Registration writes into the owning [`SlotRegistry`] and never requests a
/// redraw. The default context is detached: it belongs to no registry and
/// ignores every call, which is what a slot rendered outside any composite
/// sees.
pub struct SlotContext<C> {
    table: Option<SharedTable<C>>,
}

impl<C> Clone for SlotContext<C> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<C> Default for SlotContext<C> {
    fn default() -> Self {
        Self { table: None }
    }
}

impl<C> core::fmt::Debug for SlotContext<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SlotContext")
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl<C> SlotContext<C> {
    /// Whether this context belongs to a registry.
    pub fn is_attached(&self) -> bool {
        self.table.is_some()
    }

    /// Store `content` under `name`, replacing any previous content.
    ///
    /// Names outside the expected set are accepted and appended to the
    /// iteration order.
    pub fn register(&self, name: &str, content: C) {
        self.with_table(|table| table.set(name, Some(content), None));
        trace!(slot = name, "slot registered");
    }

    /// Clear the content stored under `name`, whoever registered it.
    ///
    /// The name stays in the registry with no content. Unknown names are ignored.
    pub fn unregister(&self, name: &str) {
        if self.with_table(|table| table.clear(name, None)) == Some(true) {
            trace!(slot = name, "slot cleared");
        }
    }

    pub(crate) fn claim_owner(&self) -> OwnerId {
        self.with_table(|table| {
            table.next_owner += 1;
            OwnerId(table.next_owner)
        })
        .unwrap_or(OwnerId(0))
    }

    pub(crate) fn register_as(&self, owner: OwnerId, name: &str, content: C) {
        self.with_table(|table| table.set(name, Some(content), Some(owner)));
        trace!(slot = name, "slot registered");
    }

    /// Clear `name` only if `owner` wrote its current content.
    pub(crate) fn unregister_as(&self, owner: OwnerId, name: &str) {
        match self.with_table(|table| table.clear(name, Some(owner))) {
            Some(true) => trace!(slot = name, "slot cleared"),
            Some(false) => trace!(slot = name, "slot taken over, keeping content"),
            None => {}
        }
    }

    /// Run `f` on the shared table. No borrow of the table escapes this call.
    fn with_table<T>(&self, f: impl FnOnce(&mut SlotTable<C>) -> T) -> Option<T> {
        self.table.as_ref().map(|table| f(&mut *table.borrow_mut()))
    }
}

/// Snapshot of slot contents, in order: expected names first, then extra
/// names.
#[derive(Clone)]
pub struct Slots<C> {
    entries: Vec<(String, Option<C>)>,
}

impl<C> core::fmt::Debug for Slots<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|(name, content)| (name, content.is_some())))
            .finish()
    }
}

impl<C> Slots<C> {
    /// Content stored under `name`, or `None` if empty or unknown.
    pub fn get(&self, name: &str) -> Option<&C> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, content)| content.as_ref())
    }

    /// Whether `name` is an expected or registered slot, filled or not.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// All slots in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&C>)> + '_ {
        self.entries
            .iter()
            .map(|(name, content)| (name.as_str(), content.as_ref()))
    }

    /// Number of slots, filled or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no slots at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
