// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parent lookup and inclusive containment over an element tree.
//!
//! The disclosure state machine never owns the element tree. Hosts describe it
//! through [`ParentLookup`], and [`contains`] answers the "inside vs outside"
//! question the same way the DOM's `Node.contains` does: a node contains itself
//! and every node below it.
//!
//! ## Minimal example
//!
//! ```
//! use understory_disclosure::lookup::contains;
//!
//! // 1 is the root; 2 is a child of 1; 3 is a child of 2; 9 is detached.
//! let parents = |n: &u32| match *n {
//!     2 => Some(1),
//!     3 => Some(2),
//!     _ => None,
//! };
//! assert!(contains(&parents, 1, 1));
//! assert!(contains(&parents, 1, 3));
//! assert!(!contains(&parents, 2, 1));
//! assert!(!contains(&parents, 1, 9));
//! ```

/// Resolve the parent of an element, if any.
///
/// Closures of the shape `Fn(&K) -> Option<K>` implement this trait, which is
/// usually all a test or a small host needs.
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` for a root or detached node.
    fn parent_of(&self, node: &K) -> Option<K>;
}

impl<K, F> ParentLookup<K> for F
where
    F: Fn(&K) -> Option<K>,
{
    #[inline]
    fn parent_of(&self, node: &K) -> Option<K> {
        self(node)
    }
}

/// Returns `true` if `node` is `root` or a descendant of `root`.
///
/// The walk goes from `node` towards the top of the tree, so its cost is the
/// depth of `node`. The lookup must be acyclic.
pub fn contains<K, P>(parents: &P, root: K, node: K) -> bool
where
    K: Copy + Eq,
    P: ParentLookup<K> + ?Sized,
{
    let mut cursor = Some(node);
    while let Some(current) = cursor {
        if current == root {
            return true;
        }
        cursor = parents.parent_of(&current);
    }
    false
}
