// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-shot callbacks that run after the current render has been laid out.
//!
//! Work that reads layout (sizes, positions) cannot run while a render is still
//! being committed. [`AfterLayout`] collects such work and hands it back in one
//! batch once the host has finished laying out the frame.
//!
//! ## Semantics
//!
//! - Each scheduled task is delivered exactly once, by the first
//!   [`take`](AfterLayout::take) after it was scheduled.
//! - Tasks scheduled while a batch is being processed land in the next batch.
//! - There is no cancellation. Tasks must check whatever they depend on when they run.
//!
//! ## Minimal example
//!
//! ```
//! use understory_layout_sync::after_layout::AfterLayout;
//!
//! let mut queue = AfterLayout::new();
//! queue.schedule("measure");
//! assert_eq!(queue.len(), 1);
//!
//! // The host finished laying out the frame.
//! let batch = queue.take();
//! assert_eq!(batch, vec!["measure"]);
//! assert!(queue.is_empty());
//! ```

use alloc::vec::Vec;
use core::mem;

/// Identifier of a scheduled task, unique within one queue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    /// The raw id value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Queue of tasks waiting for the next post-layout tick.
#[derive(Clone, Debug)]
pub struct AfterLayout<T> {
    pending: Vec<(TaskId, T)>,
    next_id: u64,
}

impl<T> Default for AfterLayout<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> AfterLayout<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` for the next tick.
    pub fn schedule(&mut self, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push((id, task));
        id
    }

    /// Number of tasks waiting for the next tick.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if no task is waiting.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Ids of the waiting tasks, in scheduling order.
    pub fn pending_ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.pending.iter().map(|(id, _)| *id)
    }

    /// Remove and return every waiting task, in scheduling order.
    ///
    /// The queue is empty afterwards, so anything scheduled while the returned
    /// batch is processed waits for the following tick.
    pub fn take(&mut self) -> Vec<T> {
        mem::take(&mut self.pending)
            .into_iter()
            .map(|(_, task)| task)
            .collect()
    }

    /// Take the waiting batch and pass each task to `f`.
    ///
    /// Returns the number of tasks run.
    pub fn run(&mut self, mut f: impl FnMut(T)) -> usize {
        let batch = self.take();
        let count = batch.len();
        for task in batch {
            f(task);
        }
        count
    }
}
