// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_layout_sync --heading-base-level=0

//! Understory Layout Sync: deferred measurement of rendered content.
//!
//! Some styles depend on the natural size of content that is only known after
//! layout, for example a CSS height transition that animates towards the height
//! of freshly revealed content. This crate keeps such a value in sync:
//!
//! - [`after_layout`]: [`AfterLayout`](after_layout::AfterLayout), a queue of
//!   single-shot tasks that run once the host has laid out the current frame.
//! - [`sync`]: [`LayoutSync`](sync::LayoutSync), which schedules a
//!   [`MeasureTask`](sync::MeasureTask) whenever the root handle, the content
//!   revision, or the wrapper handle changes, and the [`LayoutHost`](sync::LayoutHost)
//!   trait the task uses to read sizes and write the result.
//!
//! ## Timing
//!
//! Measurements are never taken synchronously during a commit. The value on the
//! wrapper lags the content by one tick and hosts must tolerate that.
//!
//! ## Liveness
//!
//! A scheduled task cannot be cancelled. If the widget is removed before the tick,
//! the task finds its handles dead and reports
//! [`SkipReason::Detached`](sync::SkipReason::Detached) instead of writing.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `tracing`: emit `tracing` events for written and skipped measurements.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod after_layout;
pub mod sync;
