// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class names emitted by the popout card.

use alloc::string::String;
use smallvec::SmallVec;
use understory_disclosure::state::Disclosure;

use crate::props::PopoutCardProps;

/// Block class of the root element.
pub const BLOCK_CLASS: &str = "c4p--popout-card";
/// Root modifier while expanded.
pub const HOVERED_CLASS: &str = "c4p--popout-card__hovered";
/// Root modifier while a gradient background is active.
pub const GRADIENT_CLASS: &str = "c4p--popout-card__gradient";
/// Class of the wrapper element that carries the sizing property.
pub const WRAPPER_CLASS: &str = "c4p--popout-card__popout-wrapper";
/// Class of the always-visible body section.
pub const CHILDREN_CLASS: &str = "c4p--popout-card__children";
/// Class of the popout section.
pub const POPOUT_CONTENT_CLASS: &str = "c4p--popout-card__popout-content";

bitflags::bitflags! {
    /// State modifiers on the root element.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RootClasses: u8 {
        /// The card is expanded.
        const HOVERED  = 0b0000_0001;
        /// A non-empty gradient background is enabled.
        const GRADIENT = 0b0000_0010;
    }
}

impl RootClasses {
    /// Modifiers for the given state and props.
    pub fn resolve<C>(state: Disclosure, props: &PopoutCardProps<C>) -> Self {
        let mut classes = Self::empty();
        if state.is_expanded() {
            classes |= Self::HOVERED;
        }
        if props.gradient_enabled && !props.gradient_color_style.is_empty() {
            classes |= Self::GRADIENT;
        }
        classes
    }

    /// The root's `class` attribute: block class, active modifiers, then `extra`.
    pub fn class_list(self, extra: Option<&str>) -> String {
        let mut parts: SmallVec<[&str; 4]> = SmallVec::new();
        parts.push(BLOCK_CLASS);
        if self.contains(Self::HOVERED) {
            parts.push(HOVERED_CLASS);
        }
        if self.contains(Self::GRADIENT) {
            parts.push(GRADIENT_CLASS);
        }
        if let Some(extra) = extra.filter(|e| !e.is_empty()) {
            parts.push(extra);
        }
        parts.join(" ")
    }
}
