// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mirror a root element's rendered height into a custom property on a wrapper.
//!
//! ## Usage
//!
//! 1) After every commit, call [`LayoutSync::update`] with the current root handle,
//!    the [`ContentRevision`] of the measured content, and the wrapper handle.
//!    A [`MeasureTask`] is scheduled only when one of the three changed.
//! 2) Once the host has laid out the frame, take the batch from the
//!    [`AfterLayout`] queue and [`run`](MeasureTask::run) each task against the host.
//!
//! Between the commit and the tick the wrapper still carries the previous value.
//!
//! ## Liveness
//!
//! Every task scheduled by a [`LayoutSync`] shares a mount flag with it.
//! [`LayoutSync::reset`] clears that flag, so tasks queued before an unmount
//! report [`SkipReason::Detached`] even while the host still has the elements.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Size;
//! use understory_layout_sync::after_layout::AfterLayout;
//! use understory_layout_sync::sync::{
//!     CARDS_SIZE_HEIGHT, ContentRevision, LayoutHost, LayoutSync, MeasureOutcome,
//! };
//!
//! #[derive(Default)]
//! struct Host {
//!     root_height: f64,
//!     written: Option<(u32, String, String)>,
//! }
//!
//! impl LayoutHost<u32> for Host {
//!     fn is_alive(&self, _node: u32) -> bool {
//!         true
//!     }
//!     fn layout_size(&self, _node: u32) -> Option<Size> {
//!         Some(Size::new(320.0, self.root_height))
//!     }
//!     fn set_custom_property(&mut self, node: u32, name: &str, value: &str) {
//!         self.written = Some((node, name.into(), value.into()));
//!     }
//! }
//!
//! let mut host = Host { root_height: 96.0, ..Host::default() };
//! let mut queue = AfterLayout::new();
//! let mut sync = LayoutSync::new();
//!
//! sync.update(Some(1), ContentRevision::INITIAL, Some(2), &mut queue);
//! for task in queue.take() {
//!     assert_eq!(task.run(&mut host), MeasureOutcome::Written { height: 96.0 });
//! }
//! assert_eq!(host.written, Some((2, CARDS_SIZE_HEIGHT.into(), "96px".into())));
//! ```

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::Cell;

use kurbo::Size;

use crate::after_layout::{AfterLayout, TaskId};

/// Name of the custom property that carries the measured height.
pub const CARDS_SIZE_HEIGHT: &str = "--cards-size-height";

/// Format a length in CSS pixels, e.g. `96px` or `12.5px`.
pub fn format_px(value: f64) -> String {
    format!("{value}px")
}

/// Access to the host's element tree for measuring and writing properties.
pub trait LayoutHost<K> {
    /// Returns `true` while `node` is still part of the rendered tree.
    fn is_alive(&self, node: K) -> bool;

    /// The laid-out border-box size of `node`, if known.
    fn layout_size(&self, node: K) -> Option<Size>;

    /// Set the custom property `name` on `node` to `value`.
    fn set_custom_property(&mut self, node: K, name: &str, value: &str);
}

/// Identity of the measured content.
///
/// Bump it whenever the content is replaced; equal revisions mean "same content".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentRevision(u64);

impl ContentRevision {
    /// Revision of the content a widget was created with.
    pub const INITIAL: Self = Self(0);

    /// The revision following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// The raw revision value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Why a measurement did not write anything.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The root or wrapper handle was absent when the task was scheduled.
    MissingHandle,
    /// The widget was unmounted, or the root or wrapper left the tree, before the task ran.
    Detached,
    /// The host could not report a finite size for the root.
    Unmeasured,
}

/// Result of running a [`MeasureTask`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MeasureOutcome {
    /// The wrapper's sizing property was set to `height` pixels.
    Written {
        /// Measured root height in pixels.
        height: f64,
    },
    /// Nothing was written.
    Skipped(SkipReason),
}

/// A single deferred measurement.
#[derive(Clone, Debug)]
pub struct MeasureTask<K> {
    /// Element whose height is measured.
    pub root: Option<K>,
    /// Element that receives [`CARDS_SIZE_HEIGHT`].
    pub wrapper: Option<K>,
    mounted: Rc<Cell<bool>>,
}

impl<K: Copy> MeasureTask<K> {
    /// A standalone task that is not tied to any [`LayoutSync`] mount.
    pub fn new(root: Option<K>, wrapper: Option<K>) -> Self {
        Self {
            root,
            wrapper,
            mounted: Rc::new(Cell::new(true)),
        }
    }

    /// Returns `false` once the synchronizer that scheduled this task was reset.
    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Measure the root and write its height onto the wrapper.
    ///
    /// The mount flag and both handles are re-validated first, so a task that
    /// outlives its widget writes nothing.
    pub fn run<H>(self, host: &mut H) -> MeasureOutcome
    where
        H: LayoutHost<K> + ?Sized,
    {
        let outcome = self.measure_and_write(host);
        #[cfg(feature = "tracing")]
        match outcome {
            MeasureOutcome::Written { height } => {
                tracing::trace!(height, "sizing property written");
            }
            MeasureOutcome::Skipped(reason) => {
                tracing::debug!(?reason, "measurement skipped");
            }
        }
        outcome
    }

    fn measure_and_write<H>(self, host: &mut H) -> MeasureOutcome
    where
        H: LayoutHost<K> + ?Sized,
    {
        let (Some(root), Some(wrapper)) = (self.root, self.wrapper) else {
            return MeasureOutcome::Skipped(SkipReason::MissingHandle);
        };
        if !self.is_mounted() || !host.is_alive(root) || !host.is_alive(wrapper) {
            return MeasureOutcome::Skipped(SkipReason::Detached);
        }
        let Some(size) = host.layout_size(root).filter(|s| s.height.is_finite()) else {
            return MeasureOutcome::Skipped(SkipReason::Unmeasured);
        };
        host.set_custom_property(wrapper, CARDS_SIZE_HEIGHT, &format_px(size.height));
        MeasureOutcome::Written {
            height: size.height,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Trigger<K> {
    root: Option<K>,
    content: ContentRevision,
    wrapper: Option<K>,
}

/// Decides when a new measurement is needed.
///
/// Remembers the `(root, content, wrapper)` triple of the last scheduled
/// measurement and schedules another one only when it changes.
#[derive(Debug)]
pub struct LayoutSync<K> {
    last: Option<Trigger<K>>,
    mounted: Rc<Cell<bool>>,
}

impl<K> Default for LayoutSync<K> {
    fn default() -> Self {
        Self {
            last: None,
            mounted: Rc::new(Cell::new(true)),
        }
    }
}

impl<K: Copy + Eq> LayoutSync<K> {
    /// Create a synchronizer that has not measured anything yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Post-commit hook. Schedules a measurement if any input changed since the last one.
    ///
    /// Returns the id of the scheduled task, or `None` if nothing changed.
    pub fn update(
        &mut self,
        root: Option<K>,
        content: ContentRevision,
        wrapper: Option<K>,
        queue: &mut AfterLayout<MeasureTask<K>>,
    ) -> Option<TaskId> {
        let trigger = Trigger {
            root,
            content,
            wrapper,
        };
        if self.last == Some(trigger) {
            return None;
        }
        self.last = Some(trigger);
        Some(queue.schedule(MeasureTask {
            root,
            wrapper,
            mounted: Rc::clone(&self.mounted),
        }))
    }

    /// Forget the last trigger so the next [`update`](Self::update) always schedules.
    ///
    /// Tasks scheduled before the reset are revoked and skip as [`SkipReason::Detached`].
    pub fn reset(&mut self) {
        self.last = None;
        self.mounted.set(false);
        self.mounted = Rc::new(Cell::new(true));
    }
}
