// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure projection from disclosure state and props to card rendering instructions.
//!
//! [`project`] holds every presentation rule of the popout card. It reads the
//! props, never mutates anything, and knows nothing about how the state was
//! reached, so the transition rules and the presentation rules can be tested
//! separately.
//!
//! ## Rules
//!
//! - Background: the gradient style when the gradient is enabled, otherwise [`DEFAULT_BACKGROUND`].
//! - While expanded the popout replaces the default actions: the primary button text
//!   is emptied and the primary button kind and actions placement are withheld.
//! - Action affordances keep their order; an `href` suppresses the click handler.

use alloc::vec::Vec;
use understory_disclosure::state::Disclosure;

use crate::props::{
    ActionIcon, ActionsPlacement, Callback, MediaPosition, PopoutCardProps, PrimaryButtonKind,
    SecondaryButtonKind,
};

/// Background used when no gradient is enabled.
pub const DEFAULT_BACKGROUND: &str = "white";

/// Background of the card surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Background<'a> {
    /// The default background.
    Default,
    /// A caller-supplied color or gradient expression.
    Gradient(&'a str),
}

impl<'a> Background<'a> {
    /// The CSS `background` value.
    pub fn as_css(self) -> &'a str {
        match self {
            Self::Default => DEFAULT_BACKGROUND,
            Self::Gradient(style) => style,
        }
    }
}

/// One action affordance as the card should render it.
pub struct ActionAffordance<'a, C> {
    /// Stable identifier of the action.
    pub id: &'a str,
    /// Renderable icon.
    pub icon: &'a C,
    /// Accessible description.
    pub description: &'a str,
    /// Link target, if the action is a link.
    pub href: Option<&'a str>,
    /// Click handler; always `None` for links.
    pub on_click: Option<&'a Callback>,
    /// Key handler.
    pub on_key_down: Option<&'a Callback>,
}

impl<'a, C> ActionAffordance<'a, C> {
    fn from_icon(icon: &'a ActionIcon<C>) -> Self {
        let href = icon.href.as_deref();
        Self {
            id: &icon.id,
            icon: &icon.icon,
            description: &icon.description,
            href,
            on_click: if href.is_some() {
                None
            } else {
                icon.on_click.as_ref()
            },
            on_key_down: icon.on_key_down.as_ref(),
        }
    }
}

impl<C: core::fmt::Debug> core::fmt::Debug for ActionAffordance<'_, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActionAffordance")
            .field("id", &self.id)
            .field("icon", &self.icon)
            .field("description", &self.description)
            .field("href", &self.href)
            .field("on_click", &self.on_click.is_some())
            .field("on_key_down", &self.on_key_down.is_some())
            .finish()
    }
}

/// What the rendering collaborator should draw for the current frame.
///
/// Borrowed from the props; build a fresh one per render with [`project`].
pub struct CardRenderingInstructions<'a, C> {
    /// Card surface background.
    pub background: Background<'a>,
    /// Action affordances, in display order.
    pub action_icons: Vec<ActionAffordance<'a, C>>,
    /// Actions placement; withheld while expanded.
    pub actions_placement: Option<ActionsPlacement>,
    /// Primary button label; empty while expanded.
    pub primary_button_text: &'a str,
    /// Primary button kind; withheld while expanded.
    pub primary_button_kind: Option<PrimaryButtonKind>,
    /// Primary button link target.
    pub primary_button_href: Option<&'a str>,
    /// Primary button handler.
    pub on_primary_button_click: Option<&'a Callback>,
    /// Secondary button label.
    pub secondary_button_text: &'a str,
    /// Secondary button kind.
    pub secondary_button_kind: Option<SecondaryButtonKind>,
    /// Secondary button link target.
    pub secondary_button_href: Option<&'a str>,
    /// Secondary button handler.
    pub on_secondary_button_click: Option<&'a Callback>,
    /// Label above the title.
    pub label: Option<&'a str>,
    /// Card title.
    pub title: Option<&'a str>,
    /// Header description.
    pub description: Option<&'a str>,
    /// Media block content.
    pub media: Option<&'a C>,
    /// Media position.
    pub media_position: Option<MediaPosition>,
    /// Handler for a clickable card.
    pub on_click: Option<&'a Callback>,
    /// Always-visible body content.
    pub children: &'a C,
    /// Popout content; rendered in every state and revealed by the root's state class.
    pub popout_content: &'a C,
    /// `true` while the popout content is revealed.
    pub popout_visible: bool,
}

impl<C: core::fmt::Debug> core::fmt::Debug for CardRenderingInstructions<'_, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CardRenderingInstructions")
            .field("background", &self.background)
            .field("action_icons", &self.action_icons)
            .field("actions_placement", &self.actions_placement)
            .field("primary_button_text", &self.primary_button_text)
            .field("primary_button_kind", &self.primary_button_kind)
            .field("primary_button_href", &self.primary_button_href)
            .field(
                "on_primary_button_click",
                &self.on_primary_button_click.is_some(),
            )
            .field("secondary_button_text", &self.secondary_button_text)
            .field("secondary_button_kind", &self.secondary_button_kind)
            .field("secondary_button_href", &self.secondary_button_href)
            .field(
                "on_secondary_button_click",
                &self.on_secondary_button_click.is_some(),
            )
            .field("label", &self.label)
            .field("title", &self.title)
            .field("description", &self.description)
            .field("media", &self.media)
            .field("media_position", &self.media_position)
            .field("on_click", &self.on_click.is_some())
            .field("children", &self.children)
            .field("popout_content", &self.popout_content)
            .field("popout_visible", &self.popout_visible)
            .finish()
    }
}

/// Derive the rendering instructions for `state` from `props`.
pub fn project<C>(state: Disclosure, props: &PopoutCardProps<C>) -> CardRenderingInstructions<'_, C> {
    let expanded = state.is_expanded();
    CardRenderingInstructions {
        background: if props.gradient_enabled {
            Background::Gradient(&props.gradient_color_style)
        } else {
            Background::Default
        },
        action_icons: props
            .action_icons
            .iter()
            .map(ActionAffordance::from_icon)
            .collect(),
        actions_placement: if expanded {
            None
        } else {
            props.actions_placement
        },
        primary_button_text: if expanded {
            ""
        } else {
            &props.primary_button_text
        },
        primary_button_kind: if expanded {
            None
        } else {
            props.primary_button_kind
        },
        primary_button_href: props.primary_button_href.as_deref(),
        on_primary_button_click: props.on_primary_button_click.as_ref(),
        secondary_button_text: &props.secondary_button_text,
        secondary_button_kind: props.secondary_button_kind,
        secondary_button_href: props.secondary_button_href.as_deref(),
        on_secondary_button_click: props.on_secondary_button_click.as_ref(),
        label: props.label.as_deref(),
        title: props.title.as_deref(),
        description: props.description.as_deref(),
        media: props.media.as_ref(),
        media_position: props.media_position,
        on_click: props.on_click.as_ref(),
        children: &props.children,
        popout_content: &props.popout_content,
        popout_visible: expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::ActionIcon;

    fn props() -> PopoutCardProps<&'static str> {
        PopoutCardProps::new("body", "details")
            .primary_button("Read more", PrimaryButtonKind::Primary)
            .secondary_button("Dismiss", SecondaryButtonKind::Ghost)
            .actions_placement(ActionsPlacement::Bottom)
    }

    #[test]
    fn collapsed_forwards_actions_unchanged() {
        let p = props();
        let card = project(Disclosure::Collapsed, &p);
        assert_eq!(card.primary_button_text, "Read more");
        assert_eq!(card.primary_button_kind, Some(PrimaryButtonKind::Primary));
        assert_eq!(card.actions_placement, Some(ActionsPlacement::Bottom));
        assert!(!card.popout_visible);
    }

    #[test]
    fn expanded_withholds_default_actions() {
        let p = props();
        let card = project(Disclosure::Expanded, &p);
        assert_eq!(card.primary_button_text, "");
        assert_eq!(card.primary_button_kind, None);
        assert_eq!(card.actions_placement, None);
        assert!(card.popout_visible);
        // The secondary button is not part of the default action row.
        assert_eq!(card.secondary_button_text, "Dismiss");
        assert_eq!(card.secondary_button_kind, Some(SecondaryButtonKind::Ghost));
    }

    #[test]
    fn background_follows_gradient_flag() {
        let p = props();
        assert_eq!(
            project(Disclosure::Collapsed, &p).background.as_css(),
            "white"
        );
        let p = props().gradient("linear-gradient(#0f62fe, #8a3ffc)");
        assert_eq!(
            project(Disclosure::Collapsed, &p).background,
            Background::Gradient("linear-gradient(#0f62fe, #8a3ffc)")
        );
    }

    #[test]
    fn href_suppresses_click_handler() {
        let p = props()
            .action_icon(ActionIcon::new("open", "icon-open", "Open").on_click(|| {}))
            .action_icon(
                ActionIcon::new("docs", "icon-docs", "Docs")
                    .href("https://example.com/docs")
                    .on_click(|| {})
                    .on_key_down(|| {}),
            );
        let card = project(Disclosure::Collapsed, &p);
        let ids: Vec<_> = card.action_icons.iter().map(|a| a.id).collect();
        assert_eq!(ids, ["open", "docs"]);
        assert!(card.action_icons[0].on_click.is_some());
        assert!(card.action_icons[0].href.is_none());
        assert!(card.action_icons[1].on_click.is_none());
        assert!(card.action_icons[1].on_key_down.is_some());
        assert_eq!(card.action_icons[1].href, Some("https://example.com/docs"));
    }

    #[test]
    fn action_icons_are_visible_in_both_states() {
        let p = props().action_icon(ActionIcon::new("open", "icon-open", "Open"));
        assert_eq!(project(Disclosure::Collapsed, &p).action_icons.len(), 1);
        assert_eq!(project(Disclosure::Expanded, &p).action_icons.len(), 1);
    }
}
