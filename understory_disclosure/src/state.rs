// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disclosure state machine: derive expanded/collapsed from pointer, keyboard, and focus events.
//!
//! ## Usage
//!
//! 1) Give the machine the root element handle once it exists with [`DisclosureState::set_root`].
//! 2) Forward events that target the root element:
//!    [`on_pointer_enter`](DisclosureState::on_pointer_enter),
//!    [`on_pointer_leave`](DisclosureState::on_pointer_leave), and
//!    [`on_key_down`](DisclosureState::on_key_down).
//! 3) Forward document-scope events delivered through a
//!    [`Subscription`](crate::document::Subscription):
//!    [`on_document_pointer_down`](DisclosureState::on_document_pointer_down) and
//!    [`on_document_key_down`](DisclosureState::on_document_key_down).
//! 4) Re-render when a handler returns `Some(Transition)`.
//!
//! ## Transition table
//!
//! | Event | Condition | Result |
//! |---|---|---|
//! | pointer enters root | | `Expanded` |
//! | pointer leaves root | | `Collapsed` |
//! | `Enter` on root | target inside root | `Collapsed`, then `Expanded` |
//! | `Escape` on root | | `Collapsed` |
//! | document pointer down | `Expanded` and target outside root | `Collapsed` |
//! | document `Tab` | active element outside root | `Collapsed` |
//!
//! Every other event is a no-op. Handlers that need the root are no-ops while it is absent.
//!
//! ## Minimal example
//!
//! ```
//! use understory_disclosure::state::{Disclosure, DisclosureState, Transition};
//!
//! let parents = |n: &u32| if *n == 2 { Some(1) } else { None };
//! let mut card = DisclosureState::new();
//! card.set_root(Some(1_u32));
//!
//! assert_eq!(card.on_pointer_enter(), Some(Transition::Expand));
//! // Pressing inside the card keeps it open.
//! assert_eq!(card.on_document_pointer_down(Some(2), &parents), None);
//! // Pressing anywhere else closes it.
//! assert_eq!(card.on_document_pointer_down(Some(7), &parents), Some(Transition::Collapse));
//! assert_eq!(card.state(), Disclosure::Collapsed);
//! ```

use ui_events::keyboard::{Key, KeyboardEvent, NamedKey};

use crate::lookup::{ParentLookup, contains};

/// Visibility of the disclosed content.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Disclosure {
    /// Secondary content is hidden.
    #[default]
    Collapsed,
    /// Secondary content is shown.
    Expanded,
}

impl Disclosure {
    /// Returns `true` for [`Disclosure::Expanded`].
    #[inline]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}

/// A state change produced by a handler.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// `Collapsed` → `Expanded`.
    Expand,
    /// `Expanded` → `Collapsed`.
    Collapse,
}

impl Transition {
    /// The net transition from `before` to `after`, or `None` if they are equal.
    pub const fn between(before: Disclosure, after: Disclosure) -> Option<Self> {
        match (before, after) {
            (Disclosure::Collapsed, Disclosure::Expanded) => Some(Self::Expand),
            (Disclosure::Expanded, Disclosure::Collapsed) => Some(Self::Collapse),
            _ => None,
        }
    }

    /// The state this transition ends in.
    pub const fn target(self) -> Disclosure {
        match self {
            Self::Expand => Disclosure::Expanded,
            Self::Collapse => Disclosure::Collapsed,
        }
    }
}

/// Expanded/collapsed state of one disclosure widget plus its root handle.
///
/// The root handle is non-owning: the host creates and destroys elements and
/// tells the machine about them through [`set_root`](Self::set_root).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisclosureState<K> {
    state: Disclosure,
    root: Option<K>,
}

impl<K> Default for DisclosureState<K> {
    fn default() -> Self {
        Self {
            state: Disclosure::Collapsed,
            root: None,
        }
    }
}

impl<K: Copy + Eq> DisclosureState<K> {
    /// Create a collapsed machine with no root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> Disclosure {
        self.state
    }

    /// Returns `true` while expanded.
    #[inline]
    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    /// The root element handle, if mounted.
    #[inline]
    pub fn root(&self) -> Option<K> {
        self.root
    }

    /// Replace the root element handle. `None` means "not mounted".
    pub fn set_root(&mut self, root: Option<K>) {
        self.root = root;
    }

    /// Force `Collapsed`.
    pub fn collapse(&mut self) -> Option<Transition> {
        self.set(Disclosure::Collapsed)
    }

    /// The pointer entered the root element.
    pub fn on_pointer_enter(&mut self) -> Option<Transition> {
        self.set(Disclosure::Expanded)
    }

    /// The pointer left the root element.
    pub fn on_pointer_leave(&mut self) -> Option<Transition> {
        self.set(Disclosure::Collapsed)
    }

    /// A key was pressed while the root element (or one of its descendants) had focus.
    ///
    /// `target` is the element the key event was dispatched to.
    ///
    /// - `Enter` first forces `Collapsed`, then re-expands if `target` is inside the root.
    ///   The return value is the net transition of both steps, so pressing `Enter` on an
    ///   already expanded card reports no change.
    /// - `Escape` collapses regardless of where focus is.
    /// - Key releases and other keys are ignored.
    pub fn on_key_down<P>(
        &mut self,
        event: &KeyboardEvent,
        target: K,
        parents: &P,
    ) -> Option<Transition>
    where
        P: ParentLookup<K> + ?Sized,
    {
        if !event.state.is_down() {
            return None;
        }
        match &event.key {
            Key::Named(NamedKey::Enter) => {
                let root = self.root?;
                let before = self.state;
                self.state = Disclosure::Collapsed;
                if contains(parents, root, target) {
                    self.state = Disclosure::Expanded;
                }
                let transition = Transition::between(before, self.state);
                trace_transition("enter", transition);
                transition
            }
            Key::Named(NamedKey::Escape) => {
                let transition = self.set(Disclosure::Collapsed);
                trace_transition("escape", transition);
                transition
            }
            _ => None,
        }
    }

    /// A pointer was pressed somewhere in the document.
    ///
    /// `target` is the pressed element, or `None` when the press hit no element.
    /// Collapses only when currently expanded and the press landed outside the root.
    pub fn on_document_pointer_down<P>(&mut self, target: Option<K>, parents: &P) -> Option<Transition>
    where
        P: ParentLookup<K> + ?Sized,
    {
        if !self.is_expanded() {
            return None;
        }
        let root = self.root?;
        if target.is_some_and(|t| contains(parents, root, t)) {
            return None;
        }
        let transition = self.set(Disclosure::Collapsed);
        trace_transition("outside pointer down", transition);
        transition
    }

    /// A key was pressed somewhere in the document.
    ///
    /// Only `Tab` is considered. `active` is the element holding focus when the
    /// event is observed, or `None` when nothing (the document body) is focused.
    /// Collapses when focus is neither the root nor inside it.
    pub fn on_document_key_down<P>(
        &mut self,
        event: &KeyboardEvent,
        active: Option<K>,
        parents: &P,
    ) -> Option<Transition>
    where
        P: ParentLookup<K> + ?Sized,
    {
        if !event.state.is_down() || event.key != Key::Named(NamedKey::Tab) {
            return None;
        }
        let root = self.root?;
        if active.is_some_and(|a| contains(parents, root, a)) {
            return None;
        }
        let transition = self.set(Disclosure::Collapsed);
        trace_transition("focus left", transition);
        transition
    }

    fn set(&mut self, next: Disclosure) -> Option<Transition> {
        let transition = Transition::between(self.state, next);
        self.state = next;
        transition
    }
}

#[cfg(feature = "tracing")]
fn trace_transition(cause: &str, transition: Option<Transition>) {
    if let Some(transition) = transition {
        tracing::debug!(cause, ?transition, "disclosure transition");
    }
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn trace_transition(_cause: &str, _transition: Option<Transition>) {}

#[cfg(test)]
mod tests {
    use super::*;
    use ui_events::keyboard::KeyState;

    // Tree: 1 is the card root, 2 and 3 are nested inside it, 10 is a sibling of the card.
    fn parents(n: &u32) -> Option<u32> {
        match *n {
            2 => Some(1),
            3 => Some(2),
            1 | 10 => Some(100),
            _ => None,
        }
    }

    fn key(key: NamedKey, state: KeyState) -> KeyboardEvent {
        KeyboardEvent {
            key: Key::Named(key),
            state,
            ..KeyboardEvent::default()
        }
    }

    fn mounted() -> DisclosureState<u32> {
        let mut s = DisclosureState::new();
        s.set_root(Some(1));
        s
    }

    #[test]
    fn starts_collapsed_without_root() {
        let s: DisclosureState<u32> = DisclosureState::new();
        assert_eq!(s.state(), Disclosure::Collapsed);
        assert_eq!(s.root(), None);
    }

    #[test]
    fn hover_is_idempotent() {
        let mut s = mounted();
        assert_eq!(s.on_pointer_enter(), Some(Transition::Expand));
        assert_eq!(s.on_pointer_enter(), None);
        assert!(s.is_expanded());
        assert_eq!(s.on_pointer_leave(), Some(Transition::Collapse));
        assert_eq!(s.on_pointer_leave(), None);
        assert!(!s.is_expanded());
    }

    #[test]
    fn enter_on_root_expands() {
        let mut s = mounted();
        let t = s.on_key_down(&key(NamedKey::Enter, KeyState::Down), 1, &parents);
        assert_eq!(t, Some(Transition::Expand));
    }

    #[test]
    fn enter_on_nested_control_expands() {
        let mut s = mounted();
        let t = s.on_key_down(&key(NamedKey::Enter, KeyState::Down), 3, &parents);
        assert_eq!(t, Some(Transition::Expand));
    }

    #[test]
    fn enter_while_expanded_reports_no_net_change() {
        let mut s = mounted();
        s.on_pointer_enter();
        let t = s.on_key_down(&key(NamedKey::Enter, KeyState::Down), 2, &parents);
        assert_eq!(t, None);
        assert!(s.is_expanded());
    }

    #[test]
    fn enter_with_outside_target_collapses() {
        let mut s = mounted();
        s.on_pointer_enter();
        let t = s.on_key_down(&key(NamedKey::Enter, KeyState::Down), 10, &parents);
        assert_eq!(t, Some(Transition::Collapse));
    }

    #[test]
    fn enter_without_root_is_noop() {
        let mut s: DisclosureState<u32> = DisclosureState::new();
        s.on_pointer_enter();
        let t = s.on_key_down(&key(NamedKey::Enter, KeyState::Down), 1, &parents);
        assert_eq!(t, None);
        assert!(s.is_expanded());
    }

    #[test]
    fn escape_collapses_from_any_state() {
        let mut s = mounted();
        assert_eq!(
            s.on_key_down(&key(NamedKey::Escape, KeyState::Down), 3, &parents),
            None
        );
        s.on_pointer_enter();
        assert_eq!(
            s.on_key_down(&key(NamedKey::Escape, KeyState::Down), 3, &parents),
            Some(Transition::Collapse)
        );
    }

    #[test]
    fn key_up_is_ignored() {
        let mut s = mounted();
        s.on_pointer_enter();
        assert_eq!(
            s.on_key_down(&key(NamedKey::Escape, KeyState::Up), 1, &parents),
            None
        );
        assert!(s.is_expanded());
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut s = mounted();
        s.on_pointer_enter();
        assert_eq!(
            s.on_key_down(&key(NamedKey::ArrowDown, KeyState::Down), 1, &parents),
            None
        );
        assert!(s.is_expanded());
    }

    #[test]
    fn outside_pointer_down_collapses_only_when_expanded() {
        let mut s = mounted();
        assert_eq!(s.on_document_pointer_down(Some(10), &parents), None);
        s.on_pointer_enter();
        assert_eq!(
            s.on_document_pointer_down(Some(10), &parents),
            Some(Transition::Collapse)
        );
    }

    #[test]
    fn inside_pointer_down_keeps_state() {
        let mut s = mounted();
        s.on_pointer_enter();
        assert_eq!(s.on_document_pointer_down(Some(3), &parents), None);
        assert_eq!(s.on_document_pointer_down(Some(1), &parents), None);
        assert!(s.is_expanded());
    }

    #[test]
    fn pointer_down_on_nothing_counts_as_outside() {
        let mut s = mounted();
        s.on_pointer_enter();
        assert_eq!(
            s.on_document_pointer_down(None, &parents),
            Some(Transition::Collapse)
        );
    }

    #[test]
    fn pointer_down_without_root_is_noop() {
        let mut s: DisclosureState<u32> = DisclosureState::new();
        s.on_pointer_enter();
        assert_eq!(s.on_document_pointer_down(Some(10), &parents), None);
        assert!(s.is_expanded());
    }

    #[test]
    fn tab_out_collapses() {
        let mut s = mounted();
        s.on_pointer_enter();
        let tab = key(NamedKey::Tab, KeyState::Down);
        assert_eq!(s.on_document_key_down(&tab, Some(2), &parents), None);
        assert_eq!(s.on_document_key_down(&tab, Some(1), &parents), None);
        assert_eq!(
            s.on_document_key_down(&tab, Some(10), &parents),
            Some(Transition::Collapse)
        );
    }

    #[test]
    fn tab_with_nothing_focused_collapses() {
        let mut s = mounted();
        s.on_pointer_enter();
        let tab = key(NamedKey::Tab, KeyState::Down);
        assert_eq!(
            s.on_document_key_down(&tab, None, &parents),
            Some(Transition::Collapse)
        );
    }

    #[test]
    fn document_escape_is_not_a_tab() {
        let mut s = mounted();
        s.on_pointer_enter();
        let esc = key(NamedKey::Escape, KeyState::Down);
        assert_eq!(s.on_document_key_down(&esc, Some(10), &parents), None);
        assert!(s.is_expanded());
    }

    #[test]
    fn transition_between_and_target_agree() {
        for t in [Transition::Expand, Transition::Collapse] {
            let before = match t {
                Transition::Expand => Disclosure::Collapsed,
                Transition::Collapse => Disclosure::Expanded,
            };
            assert_eq!(Transition::between(before, t.target()), Some(t));
        }
        assert_eq!(
            Transition::between(Disclosure::Expanded, Disclosure::Expanded),
            None
        );
    }
}
