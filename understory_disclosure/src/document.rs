// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-scope listeners and the per-mount subscription that owns them.
//!
//! Outside interactions (a press elsewhere on the page, `Tab` moving focus away)
//! are only visible from a scope wider than the widget itself. This module models
//! that scope explicitly:
//!
//! - [`DocumentListeners`] is the registry for one document. It stores which owner
//!   wants which kind of event and hands back a [`ListenerId`] per registration.
//! - [`Subscription`] is held by one widget instance. [`Subscription::attach`]
//!   installs its listeners once per mount and remembers the exact ids it received;
//!   [`Subscription::detach`] removes those ids and nothing else.
//!
//! The registry does not call handlers. Hosts ask it for the owners interested in
//! an event kind and deliver the event to them, the same way a router produces a
//! dispatch sequence and leaves execution to the caller.
//!
//! ## Minimal example
//!
//! ```
//! use understory_disclosure::document::{DocumentListeners, ListenerKind, Subscription};
//!
//! let mut doc: DocumentListeners<&str> = DocumentListeners::new();
//! let mut sub = Subscription::new();
//!
//! assert!(sub.attach(&mut doc, "card"));
//! // A second attach during the same mount installs nothing.
//! assert!(!sub.attach(&mut doc, "card"));
//! assert_eq!(doc.owners_for(ListenerKind::PointerDown), vec!["card"]);
//!
//! assert_eq!(sub.detach(&mut doc), 2);
//! assert!(doc.is_empty());
//! // Detaching again is harmless.
//! assert_eq!(sub.detach(&mut doc), 0);
//! ```

use alloc::vec::Vec;
use smallvec::SmallVec;

/// The kinds of document-scope events a subscription listens for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// A pointer press anywhere in the document.
    PointerDown,
    /// A key press anywhere in the document.
    KeyDown,
}

impl ListenerKind {
    /// Every kind, in the order [`Subscription::attach`] installs them.
    pub const ALL: [Self; 2] = [Self::PointerDown, Self::KeyDown];
}

/// Identifier of one registration in a [`DocumentListeners`].
///
/// Ids are never reused within a registry, so a stale id can never remove a
/// listener that somebody else installed later.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// The raw id value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug)]
struct Registration<O> {
    id: ListenerId,
    kind: ListenerKind,
    owner: O,
}

/// Listener registry for one document.
///
/// Registrations are kept in insertion order, which is also the delivery order
/// reported by [`listeners`](Self::listeners).
#[derive(Clone, Debug)]
pub struct DocumentListeners<O> {
    registrations: Vec<Registration<O>>,
    next_id: u64,
}

impl<O> Default for DocumentListeners<O> {
    fn default() -> Self {
        Self {
            registrations: Vec::new(),
            next_id: 1,
        }
    }
}

impl<O> DocumentListeners<O> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `owner` for `kind` and return the id to remove it with.
    pub fn add(&mut self, kind: ListenerKind, owner: O) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.registrations.push(Registration { id, kind, owner });
        id
    }

    /// Remove the registration with `id`.
    ///
    /// Returns `false` if no such registration exists, for example because it was
    /// already removed.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        match self.registrations.iter().position(|r| r.id == id) {
            Some(index) => {
                self.registrations.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `id` is currently registered.
    pub fn contains(&self, id: ListenerId) -> bool {
        self.registrations.iter().any(|r| r.id == id)
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Registrations for `kind`, in registration order.
    pub fn listeners(&self, kind: ListenerKind) -> impl Iterator<Item = (ListenerId, &O)> + '_ {
        self.registrations
            .iter()
            .filter(move |r| r.kind == kind)
            .map(|r| (r.id, &r.owner))
    }

    /// Owners registered for `kind`, in registration order.
    ///
    /// The result is detached from the registry so hosts can deliver events to
    /// owners that mutate the registry in response.
    pub fn owners_for(&self, kind: ListenerKind) -> Vec<O>
    where
        O: Clone,
    {
        self.listeners(kind).map(|(_, o)| o.clone()).collect()
    }
}

/// The document listeners installed by one widget mount.
///
/// Holds the exact [`ListenerId`]s returned at attach time, so detaching can
/// never miss a listener or remove one it does not own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Subscription {
    installed: SmallVec<[ListenerId; 2]>,
}

impl Subscription {
    /// Create a detached subscription.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` between a successful [`attach`](Self::attach) and the next
    /// [`detach`](Self::detach).
    pub fn is_attached(&self) -> bool {
        !self.installed.is_empty()
    }

    /// The ids installed by the current mount.
    pub fn ids(&self) -> &[ListenerId] {
        &self.installed
    }

    /// Install one listener per [`ListenerKind`] for `owner`.
    ///
    /// Returns `false` and installs nothing if already attached.
    pub fn attach<O: Clone>(&mut self, doc: &mut DocumentListeners<O>, owner: O) -> bool {
        if self.is_attached() {
            return false;
        }
        for kind in ListenerKind::ALL {
            self.installed.push(doc.add(kind, owner.clone()));
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(ids = ?self.installed.as_slice(), "document listeners attached");
        true
    }

    /// Remove every listener installed by [`attach`](Self::attach).
    ///
    /// Returns how many registrations were actually removed. Calling this while
    /// detached is a no-op returning `0`.
    pub fn detach<O>(&mut self, doc: &mut DocumentListeners<O>) -> usize {
        let removed = self
            .installed
            .drain(..)
            .filter(|id| doc.remove(*id))
            .count();
        #[cfg(feature = "tracing")]
        tracing::trace!(removed, "document listeners detached");
        removed
    }
}
