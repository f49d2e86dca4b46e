// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_popout_card --heading-base-level=0

//! Overstory Popout Card: a card that reveals extra content on hover, focus, or `Enter`.
//!
//! The card is headless. It owns its interaction state and produces a
//! [`PopoutCardView`](card::PopoutCardView) describing what to draw; the host
//! creates elements, delivers events, and lays out frames.
//!
//! - [`props`]: [`PopoutCardProps`](props::PopoutCardProps), the builder-style configuration.
//! - [`projection`]: the pure [`project`](projection::project) function from state and props
//!   to [`CardRenderingInstructions`](projection::CardRenderingInstructions).
//! - [`classes`]: class names and the [`RootClasses`](classes::RootClasses) state modifiers.
//! - [`card`]: the [`PopoutCard`](card::PopoutCard) component and the
//!   [`CardRenderer`](card::CardRenderer) seam.
//!
//! Interaction rules come from [`understory_disclosure`] and the sizing property
//! from [`understory_layout_sync`].
//!
//! ## Example
//!
//! ```rust
//! use overstory_popout_card::card::PopoutCard;
//! use overstory_popout_card::props::{PopoutCardProps, PrimaryButtonKind};
//! use understory_disclosure::document::DocumentListeners;
//! use understory_layout_sync::after_layout::AfterLayout;
//!
//! let props = PopoutCardProps::new("Body", "Details")
//!     .title("Storage")
//!     .primary_button("Open", PrimaryButtonKind::Primary);
//! let mut card = PopoutCard::new(props);
//!
//! let mut doc = DocumentListeners::new();
//! let mut queue = AfterLayout::new();
//! card.mount(1_u32, 2_u32, &mut doc, "card");
//! card.commit(&mut queue);
//!
//! card.pointer_enter();
//! let view = card.render();
//! assert_eq!(view.root.class, "c4p--popout-card c4p--popout-card__hovered");
//! assert_eq!(view.instructions.primary_button_text, "");
//! assert!(view.instructions.popout_visible);
//!
//! card.unmount(&mut doc);
//! assert!(doc.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to the layout crates.
//! - `tracing`: emit `tracing` events from the card and the crates it builds on.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod card;
pub mod classes;
pub mod projection;
pub mod props;
