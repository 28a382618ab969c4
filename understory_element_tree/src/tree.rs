// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, state updates, focus, and queries.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use crate::types::{Element, ElementFlags, ElementId};

/// An in-memory element hierarchy with a single focused element.
///
/// Children are kept in insertion order, which is also document order for
/// depth-first traversal. Stale [`ElementId`]s are tolerated everywhere:
/// queries return `None`, `false`, or empty results, and mutations are no-ops.
///
/// ## Example
///
/// ```rust
/// use understory_element_tree::{Element, ElementTree};
///
/// let mut tree = ElementTree::new();
/// let menu = tree.insert(None, Element::container());
/// let open = tree.insert(Some(menu), Element::button("Open"));
/// let save = tree.insert(Some(menu), Element::button("Save").disabled());
///
/// assert!(tree.focus(open));
/// assert!(!tree.focus(save));
/// assert_eq!(tree.focused(), Some(open));
/// assert_eq!(tree.text_content(menu), "OpenSave");
/// ```
pub struct ElementTree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    focused: Option<ElementId>,
}

impl core::fmt::Debug for ElementTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("ElementTree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    element: Element,
}

impl ElementTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            focused: None,
        }
    }

    /// Insert a new element as the last child of `parent` (or as a root if `None`).
    ///
    /// A stale `parent` inserts the element as a root.
    pub fn insert(&mut self, parent: Option<ElementId>, element: Element) -> ElementId {
        let node = |generation| Node {
            generation,
            parent: None,
            children: Vec::new(),
            element,
        };
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(node(generation));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(node(generation)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = ElementId::new(idx, generation);
        if let Some(p) = parent
            && self.is_alive(p)
        {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove an element and its subtree.
    ///
    /// If focus was inside the removed subtree, focus is cleared.
    pub fn remove(&mut self, id: ElementId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(f) = self.focused
            && self.contains(id, f)
        {
            self.focused = None;
        }
        if let Some(parent) = self.parent_of(id) {
            self.unlink_parent(id, parent);
        }
        self.remove_subtree(id);
    }

    fn remove_subtree(&mut self, id: ElementId) {
        let children = self.children_of(id).to_vec();
        for child in children {
            self.remove_subtree(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Returns true if `id` refers to a live element.
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.node(id).is_some()
    }

    /// Returns the element data if the identifier is live.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.node(id).map(|n| &n.element)
    }

    /// Returns the flags of an element if the identifier is live.
    pub fn flags(&self, id: ElementId) -> Option<ElementFlags> {
        self.element(id).map(|e| e.flags)
    }

    /// Replace the flags of an element.
    ///
    /// If this makes the focused element unfocusable, focus is cleared.
    pub fn set_flags(&mut self, id: ElementId, flags: ElementFlags) {
        if let Some(n) = self.node_mut(id) {
            n.element.flags = flags;
            self.revalidate_focus();
        }
    }

    /// Set or clear [`ElementFlags::DISABLED`].
    pub fn set_disabled(&mut self, id: ElementId, disabled: bool) {
        if let Some(mut flags) = self.flags(id) {
            flags.set(ElementFlags::DISABLED, disabled);
            self.set_flags(id, flags);
        }
    }

    /// Set or clear [`ElementFlags::HIDDEN`].
    pub fn set_hidden(&mut self, id: ElementId, hidden: bool) {
        if let Some(mut flags) = self.flags(id) {
            flags.set(ElementFlags::HIDDEN, hidden);
            self.set_flags(id, flags);
        }
    }

    /// Replace the own text of an element.
    pub fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(n) = self.node_mut(id) {
            n.element.text = String::from(text);
        }
    }

    /// Returns the parent of an element if live, or `None` for roots or stale ids.
    pub fn parent_of(&self, id: ElementId) -> Option<ElementId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Get the children of an element, or an empty slice if the element is stale.
    pub fn children_of(&self, id: ElementId) -> &[ElementId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Whether `node` is `ancestor` or lies inside its subtree.
    pub fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        if !self.is_alive(ancestor) {
            return false;
        }
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self.parent_of(id);
        }
        false
    }

    /// Iterate the strict descendants of `root` in depth-first document order.
    ///
    /// Yields nothing for a stale `root`.
    pub fn descendants(&self, root: ElementId) -> Descendants<'_> {
        let mut stack = Vec::new();
        stack.extend(self.children_of(root).iter().rev().copied());
        Descendants { tree: self, stack }
    }

    /// Whether the element or any of its ancestors is hidden.
    ///
    /// Stale ids report `true`.
    pub fn is_hidden(&self, id: ElementId) -> bool {
        if !self.is_alive(id) {
            return true;
        }
        let mut cursor = Some(id);
        while let Some(c) = cursor {
            if self
                .flags(c)
                .is_some_and(|f| f.contains(ElementFlags::HIDDEN))
            {
                return true;
            }
            cursor = self.parent_of(c);
        }
        false
    }

    /// Whether the element is reachable by tab focus: a live tab stop that is
    /// neither disabled nor hidden.
    pub fn is_focusable(&self, id: ElementId) -> bool {
        self.element(id).is_some_and(|e| {
            e.is_tab_stop() && !e.flags.contains(ElementFlags::DISABLED) && !self.is_hidden(id)
        })
    }

    /// Whether the element accepts free text typing.
    pub fn accepts_text(&self, id: ElementId) -> bool {
        self.element(id).is_some_and(Element::accepts_text)
    }

    /// Visible text of the subtree rooted at `id`.
    ///
    /// This concatenates the own text of `id` and every non-hidden descendant
    /// in document order. Hidden elements contribute nothing; a stale id yields
    /// an empty string.
    pub fn text_content(&self, id: ElementId) -> Cow<'_, str> {
        if self.is_hidden(id) {
            return Cow::Borrowed("");
        }
        let Some(own) = self.element(id).map(|e| e.text.as_str()) else {
            return Cow::Borrowed("");
        };
        let mut out: Option<String> = None;
        let mut hidden_root: Option<ElementId> = None;
        for d in self.descendants(id) {
            if let Some(h) = hidden_root
                && self.contains(h, d)
            {
                continue;
            }
            let Some(element) = self.element(d) else {
                continue;
            };
            if element.flags.contains(ElementFlags::HIDDEN) {
                hidden_root = Some(d);
                continue;
            }
            if element.text.is_empty() {
                continue;
            }
            out.get_or_insert_with(|| String::from(own))
                .push_str(&element.text);
        }
        match out {
            Some(s) => Cow::Owned(s),
            None => Cow::Borrowed(own),
        }
    }

    /// The focused element, if any.
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Move focus to `id`.
    ///
    /// Returns `false` and leaves focus unchanged if `id` is not focusable.
    pub fn focus(&mut self, id: ElementId) -> bool {
        if !self.is_focusable(id) {
            return false;
        }
        self.focused = Some(id);
        true
    }

    /// Clear focus.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    fn revalidate_focus(&mut self) {
        if let Some(f) = self.focused
            && !self.is_focusable(f)
        {
            self.focused = None;
        }
    }

    // --- internals ---

    fn node(&self, id: ElementId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn link_parent(&mut self, id: ElementId, parent: ElementId) {
        if let Some(p) = self.node_mut(parent) {
            p.children.push(id);
        }
        if let Some(n) = self.node_mut(id) {
            n.parent = Some(parent);
        }
    }

    fn unlink_parent(&mut self, id: ElementId, parent: ElementId) {
        if let Some(p) = self.node_mut(parent) {
            p.children.retain(|c| *c != id);
        }
        if let Some(n) = self.node_mut(id) {
            n.parent = None;
        }
    }
}

/// Depth-first iterator over the strict descendants of an element.
///
/// Returned by [`ElementTree::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    tree: &'a ElementTree,
    stack: Vec<ElementId>,
}

impl Iterator for Descendants<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<ElementId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children_of(id).iter().rev().copied());
        Some(id)
    }
}
