// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The popout card component.
//!
//! [`PopoutCard`] ties together a [`DisclosureState`], the document
//! [`Subscription`] it needs for outside presses and focus moves, and a
//! [`LayoutSync`] that keeps the wrapper's sizing property in step with the
//! popout content.
//!
//! ## Lifecycle
//!
//! 1) [`mount`](PopoutCard::mount) once the host has created the root and wrapper
//!    elements. This installs the document listeners.
//! 2) After every render, call [`commit`](PopoutCard::commit) and run the
//!    [`AfterLayout`] queue once the host has laid out the frame.
//! 3) Forward events to the `pointer_*`, `key_down`, and `document_*` methods and
//!    re-render when they return `Some(Transition)`.
//! 4) [`unmount`](PopoutCard::unmount) before the elements are destroyed.

use alloc::string::String;
use alloc::vec::Vec;
use ui_events::keyboard::KeyboardEvent;
use ui_events::pointer::PointerEvent;
use understory_disclosure::document::{DocumentListeners, Subscription};
use understory_disclosure::lookup::ParentLookup;
use understory_disclosure::state::{Disclosure, DisclosureState, Transition};
use understory_layout_sync::after_layout::{AfterLayout, TaskId};
use understory_layout_sync::sync::{ContentRevision, LayoutSync, MeasureTask};

use crate::classes::{CHILDREN_CLASS, POPOUT_CONTENT_CLASS, RootClasses, WRAPPER_CLASS};
use crate::projection::{CardRenderingInstructions, project};
use crate::props::PopoutCardProps;

/// Attribute that identifies the component to design tooling.
pub const DEVTOOLS_ATTRIBUTE: &str = "data-carbon-devtools-id";
/// Value of [`DEVTOOLS_ATTRIBUTE`] on the root element.
pub const DEVTOOLS_ID: &str = "c4p--PopoutCard";
/// ARIA role of the root element.
pub const ROOT_ROLE: &str = "presentation";

/// A card that reveals its popout content on hover, focus, or `Enter`.
///
/// `K` is the host's element handle type and `C` its renderable content type.
pub struct PopoutCard<K, C> {
    props: PopoutCardProps<C>,
    disclosure: DisclosureState<K>,
    subscription: Subscription,
    layout: LayoutSync<K>,
    wrapper: Option<K>,
    content: ContentRevision,
}

impl<K: core::fmt::Debug, C: core::fmt::Debug> core::fmt::Debug for PopoutCard<K, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PopoutCard")
            .field("props", &self.props)
            .field("disclosure", &self.disclosure)
            .field("subscription", &self.subscription)
            .field("layout", &self.layout)
            .field("wrapper", &self.wrapper)
            .field("content", &self.content)
            .finish()
    }
}

impl<K: Copy + Eq, C> PopoutCard<K, C> {
    /// Create an unmounted, collapsed card.
    pub fn new(props: PopoutCardProps<C>) -> Self {
        Self {
            props,
            disclosure: DisclosureState::new(),
            subscription: Subscription::new(),
            layout: LayoutSync::new(),
            wrapper: None,
            content: ContentRevision::INITIAL,
        }
    }

    /// Current props.
    pub fn props(&self) -> &PopoutCardProps<C> {
        &self.props
    }

    /// Replace all props.
    ///
    /// The popout content is treated as changed, so the next
    /// [`commit`](Self::commit) schedules a measurement.
    pub fn set_props(&mut self, props: PopoutCardProps<C>) {
        self.props = props;
        self.content = self.content.next();
    }

    /// Replace only the popout content.
    pub fn set_popout_content(&mut self, content: C) {
        self.props.popout_content = content;
        self.content = self.content.next();
    }

    /// Revision of the popout content, bumped on every content change.
    pub fn content_revision(&self) -> ContentRevision {
        self.content
    }

    /// Current disclosure state.
    pub fn state(&self) -> Disclosure {
        self.disclosure.state()
    }

    /// Returns `true` while expanded.
    pub fn is_expanded(&self) -> bool {
        self.disclosure.is_expanded()
    }

    /// Root element handle, if mounted.
    pub fn root(&self) -> Option<K> {
        self.disclosure.root()
    }

    /// Wrapper element handle, if mounted.
    pub fn wrapper(&self) -> Option<K> {
        self.wrapper
    }

    /// Returns `true` while the document listeners are installed.
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_attached()
    }

    /// Record the element handles and install the document listeners for `owner`.
    ///
    /// Returns `false` and changes nothing if already mounted.
    pub fn mount<O: Clone>(
        &mut self,
        root: K,
        wrapper: K,
        doc: &mut DocumentListeners<O>,
        owner: O,
    ) -> bool {
        if !self.subscription.attach(doc, owner) {
            return false;
        }
        self.disclosure.set_root(Some(root));
        self.wrapper = Some(wrapper);
        #[cfg(feature = "tracing")]
        tracing::debug!("popout card mounted");
        true
    }

    /// Remove the document listeners and forget the element handles.
    ///
    /// The card is left collapsed, and the next mount measures afresh. Measurements
    /// still queued from this mount skip without writing. Returns how many
    /// listeners were removed; unmounting twice is a no-op.
    pub fn unmount<O>(&mut self, doc: &mut DocumentListeners<O>) -> usize {
        let removed = self.subscription.detach(doc);
        self.disclosure.collapse();
        self.disclosure.set_root(None);
        self.wrapper = None;
        self.layout.reset();
        #[cfg(feature = "tracing")]
        tracing::debug!(removed, "popout card unmounted");
        removed
    }

    /// Post-render hook. Schedules a measurement when the handles or the content changed.
    pub fn commit(&mut self, queue: &mut AfterLayout<MeasureTask<K>>) -> Option<TaskId> {
        self.layout
            .update(self.disclosure.root(), self.content, self.wrapper, queue)
    }

    /// The pointer entered the root element.
    pub fn pointer_enter(&mut self) -> Option<Transition> {
        self.disclosure.root()?;
        self.disclosure.on_pointer_enter()
    }

    /// The pointer left the root element.
    pub fn pointer_leave(&mut self) -> Option<Transition> {
        self.disclosure.root()?;
        self.disclosure.on_pointer_leave()
    }

    /// A key event dispatched to `target` reached the root element.
    pub fn key_down<P>(&mut self, event: &KeyboardEvent, target: K, parents: &P) -> Option<Transition>
    where
        P: ParentLookup<K> + ?Sized,
    {
        self.disclosure.root()?;
        self.disclosure.on_key_down(event, target, parents)
    }

    /// A pointer was pressed on `target` somewhere in the document.
    pub fn document_pointer_down<P>(&mut self, target: Option<K>, parents: &P) -> Option<Transition>
    where
        P: ParentLookup<K> + ?Sized,
    {
        if !self.is_mounted() {
            return None;
        }
        self.disclosure.on_document_pointer_down(target, parents)
    }

    /// Route a document pointer event. Only presses are considered.
    pub fn document_pointer_event<P>(
        &mut self,
        event: &PointerEvent,
        target: Option<K>,
        parents: &P,
    ) -> Option<Transition>
    where
        P: ParentLookup<K> + ?Sized,
    {
        match event {
            PointerEvent::Down(_) => self.document_pointer_down(target, parents),
            _ => None,
        }
    }

    /// A key was pressed somewhere in the document while `active` had focus.
    pub fn document_key_down<P>(
        &mut self,
        event: &KeyboardEvent,
        active: Option<K>,
        parents: &P,
    ) -> Option<Transition>
    where
        P: ParentLookup<K> + ?Sized,
    {
        if !self.is_mounted() {
            return None;
        }
        self.disclosure.on_document_key_down(event, active, parents)
    }

    /// Build the view for the current state.
    pub fn render(&self) -> PopoutCardView<'_, K, C> {
        let state = self.disclosure.state();
        let classes = RootClasses::resolve(state, &self.props);
        let instructions = project(state, &self.props);
        let mut attributes: Vec<(&str, &str)> = self
            .props
            .attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        attributes.push((DEVTOOLS_ATTRIBUTE, DEVTOOLS_ID));
        PopoutCardView {
            root: RootElement {
                node: self.disclosure.root(),
                class: classes.class_list(self.props.class_name.as_deref()),
                classes,
                tab_index: 0,
                role: ROOT_ROLE,
                background: instructions.background.as_css(),
                attributes,
            },
            wrapper: WrapperElement {
                node: self.wrapper,
                class: WRAPPER_CLASS,
            },
            children_class: CHILDREN_CLASS,
            popout_content_class: POPOUT_CONTENT_CLASS,
            instructions,
        }
    }

    /// Render and hand the instructions to `renderer`.
    pub fn render_with<R: CardRenderer<C>>(&self, renderer: &mut R) -> R::Output {
        let view = self.render();
        renderer.render_card(&view.instructions)
    }
}

/// The rendering collaborator that turns instructions into host output.
pub trait CardRenderer<C> {
    /// What the renderer produces.
    type Output;

    /// Render one card.
    fn render_card(&mut self, instructions: &CardRenderingInstructions<'_, C>) -> Self::Output;
}

impl<C, O, F> CardRenderer<C> for F
where
    F: FnMut(&CardRenderingInstructions<'_, C>) -> O,
{
    type Output = O;

    fn render_card(&mut self, instructions: &CardRenderingInstructions<'_, C>) -> O {
        self(instructions)
    }
}

/// Attributes of the root element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootElement<'a, K> {
    /// Handle of the root element, if mounted.
    pub node: Option<K>,
    /// The `class` attribute.
    pub class: String,
    /// State modifiers included in [`class`](Self::class).
    pub classes: RootClasses,
    /// Always `0`: the root is a keyboard focus stop.
    pub tab_index: i32,
    /// Always [`ROOT_ROLE`].
    pub role: &'static str,
    /// CSS `background` value.
    pub background: &'a str,
    /// Pass-through attributes followed by the devtools attribute.
    pub attributes: Vec<(&'a str, &'a str)>,
}

/// Attributes of the wrapper element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WrapperElement<K> {
    /// Handle of the wrapper element, if mounted.
    pub node: Option<K>,
    /// The `class` attribute.
    pub class: &'static str,
}

/// One frame of the popout card.
#[derive(Debug)]
pub struct PopoutCardView<'a, K, C> {
    /// Root element.
    pub root: RootElement<'a, K>,
    /// Wrapper element that carries the sizing property.
    pub wrapper: WrapperElement<K>,
    /// Class of the section holding [`children`](CardRenderingInstructions::children).
    pub children_class: &'static str,
    /// Class of the section holding [`popout_content`](CardRenderingInstructions::popout_content).
    pub popout_content_class: &'static str,
    /// What the rendering collaborator should draw.
    pub instructions: CardRenderingInstructions<'a, C>,
}
