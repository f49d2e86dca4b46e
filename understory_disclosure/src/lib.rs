// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_disclosure --heading-base-level=0

//! Understory Disclosure: expand/collapse state for hover- and focus-revealed content.
//!
//! A disclosure widget shows secondary content while the pointer or keyboard focus
//! is "inside" it and hides it again when either leaves. This crate provides the
//! pieces needed to drive that behavior without assuming a UI framework:
//!
//! - [`state`]: the [`DisclosureState`](state::DisclosureState) machine and its transition rules.
//! - [`lookup`]: [`ParentLookup`](lookup::ParentLookup) and inclusive [`contains`](lookup::contains)
//!   for inside/outside decisions.
//! - [`document`]: a document-scope listener registry and the per-mount
//!   [`Subscription`](document::Subscription) that attaches and detaches exactly its own listeners.
//!
//! ## Wiring
//!
//! Events that target the widget's root element go straight to the machine. Events
//! that happen anywhere in the document are delivered to the owners registered in a
//! [`DocumentListeners`](document::DocumentListeners):
//!
//! ```rust
//! use understory_disclosure::document::{DocumentListeners, ListenerKind, Subscription};
//! use understory_disclosure::state::{Disclosure, DisclosureState};
//!
//! // Element 1 is the root of the widget, 2 is nested inside it, 5 is elsewhere.
//! let parents = |n: &u32| if *n == 2 { Some(1) } else { None };
//!
//! let mut doc = DocumentListeners::new();
//! let mut widget = DisclosureState::new();
//! let mut subscription = Subscription::new();
//!
//! // Mount.
//! widget.set_root(Some(1_u32));
//! subscription.attach(&mut doc, "widget");
//!
//! widget.on_pointer_enter();
//! assert_eq!(widget.state(), Disclosure::Expanded);
//!
//! // A press on element 5 is delivered to every pointer-down owner.
//! for _owner in doc.owners_for(ListenerKind::PointerDown) {
//!     widget.on_document_pointer_down(Some(5), &parents);
//! }
//! assert_eq!(widget.state(), Disclosure::Collapsed);
//!
//! // Unmount.
//! subscription.detach(&mut doc);
//! widget.set_root(None);
//! assert!(doc.is_empty());
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for transitions and listener bookkeeping.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod document;
pub mod lookup;
pub mod state;
