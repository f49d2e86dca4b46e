// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration accepted by the popout card.
//!
//! [`PopoutCardProps`] is plain data with a consuming builder API. Hosts that
//! receive options as strings (markup attributes, a design tool, a config file)
//! can feed them through [`PopoutCardProps::apply`], which parses the enumerated
//! options and forwards anything it does not recognize to the root element.

use alloc::borrow::ToOwned;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// A click or key handler supplied by the host.
pub type Callback = Rc<dyn Fn()>;

/// Options the popout card accepts from the underlying card API but never forwards.
pub const STRIPPED_PROPS: [&str; 4] = [
    "actionIconsPosition",
    "overflowActions",
    "productive",
    "titleSize",
];

/// Error returned when a string option has a value outside its allowed set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsePropError {
    prop: &'static str,
    value: String,
}

impl ParsePropError {
    fn new(prop: &'static str, value: &str) -> Self {
        Self {
            prop,
            value: value.to_owned(),
        }
    }

    /// Name of the rejected option.
    pub fn prop(&self) -> &'static str {
        self.prop
    }

    /// The rejected value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParsePropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value `{}` for `{}`", self.value, self.prop)
    }
}

impl core::error::Error for ParsePropError {}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $prop:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// The option name this value belongs to.
            pub const PROP: &'static str = $prop;

            /// The string form of this value.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ParsePropError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(ParsePropError::new($prop, s)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Where the card places its action affordances.
    ActionsPlacement, "actionsPlacement" {
        /// Above the body.
        Top => "top",
        /// Below the body.
        Bottom => "bottom",
    }
}

string_enum! {
    /// Visual kind of the primary button.
    PrimaryButtonKind, "primaryButtonKind" {
        /// Filled primary button.
        Primary => "primary",
        /// Borderless button.
        Ghost => "ghost",
    }
}

string_enum! {
    /// Visual kind of the secondary button.
    SecondaryButtonKind, "secondaryButtonKind" {
        /// Outlined secondary button.
        Secondary => "secondary",
        /// Borderless button.
        Ghost => "ghost",
    }
}

string_enum! {
    /// Position of the media block relative to the body.
    MediaPosition, "mediaPosition" {
        /// Media above the body.
        Top => "top",
        /// Media to the left of the body.
        Left => "left",
    }
}

/// An action affordance shown on the card.
///
/// When `href` is set the action behaves as a link and `on_click` is not forwarded.
pub struct ActionIcon<C> {
    /// Stable identifier of the action.
    pub id: String,
    /// Renderable icon.
    pub icon: C,
    /// Accessible description.
    pub description: String,
    /// Link target; takes precedence over `on_click`.
    pub href: Option<String>,
    /// Click handler.
    pub on_click: Option<Callback>,
    /// Key handler.
    pub on_key_down: Option<Callback>,
}

impl<C> ActionIcon<C> {
    /// Create an action with no link and no handlers.
    pub fn new(id: impl Into<String>, icon: C, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            icon,
            description: description.into(),
            href: None,
            on_click: None,
            on_key_down: None,
        }
    }

    /// Turn the action into a link.
    #[must_use]
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Set the click handler.
    #[must_use]
    pub fn on_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(f));
        self
    }

    /// Set the key handler.
    #[must_use]
    pub fn on_key_down(mut self, f: impl Fn() + 'static) -> Self {
        self.on_key_down = Some(Rc::new(f));
        self
    }
}

impl<C: fmt::Debug> fmt::Debug for ActionIcon<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionIcon")
            .field("id", &self.id)
            .field("icon", &self.icon)
            .field("description", &self.description)
            .field("href", &self.href)
            .field("on_click", &self.on_click.is_some())
            .field("on_key_down", &self.on_key_down.is_some())
            .finish()
    }
}

/// Everything the popout card is configured with.
///
/// `C` is the host's renderable content type (a view node, a markup string, ...).
pub struct PopoutCardProps<C> {
    /// Always-visible body content.
    pub children: C,
    /// Content revealed while expanded.
    pub popout_content: C,
    /// Use [`gradient_color_style`](Self::gradient_color_style) as the background.
    pub gradient_enabled: bool,
    /// Background value used when the gradient is enabled.
    pub gradient_color_style: String,
    /// Action affordances, in display order.
    pub action_icons: Vec<ActionIcon<C>>,
    /// Placement of the action affordances while collapsed.
    pub actions_placement: Option<ActionsPlacement>,
    /// Primary button label.
    pub primary_button_text: String,
    /// Primary button kind.
    pub primary_button_kind: Option<PrimaryButtonKind>,
    /// Link target for the primary button.
    pub primary_button_href: Option<String>,
    /// Primary button handler.
    pub on_primary_button_click: Option<Callback>,
    /// Secondary button label.
    pub secondary_button_text: String,
    /// Secondary button kind.
    pub secondary_button_kind: Option<SecondaryButtonKind>,
    /// Link target for the secondary button.
    pub secondary_button_href: Option<String>,
    /// Secondary button handler.
    pub on_secondary_button_click: Option<Callback>,
    /// Small label above the title.
    pub label: Option<String>,
    /// Card title.
    pub title: Option<String>,
    /// Header description.
    pub description: Option<String>,
    /// Media block content.
    pub media: Option<C>,
    /// Position of [`media`](Self::media).
    pub media_position: Option<MediaPosition>,
    /// Handler for a clickable card.
    pub on_click: Option<Callback>,
    /// Extra class appended to the root element's class list.
    pub class_name: Option<String>,
    /// Attributes forwarded verbatim to the root element.
    pub attributes: Vec<(String, String)>,
}

impl<C> PopoutCardProps<C> {
    /// Props with the given content and every option at its default.
    pub fn new(children: C, popout_content: C) -> Self {
        Self {
            children,
            popout_content,
            gradient_enabled: false,
            gradient_color_style: String::new(),
            action_icons: Vec::new(),
            actions_placement: None,
            primary_button_text: String::new(),
            primary_button_kind: None,
            primary_button_href: None,
            on_primary_button_click: None,
            secondary_button_text: String::new(),
            secondary_button_kind: None,
            secondary_button_href: None,
            on_secondary_button_click: None,
            label: None,
            title: None,
            description: None,
            media: None,
            media_position: None,
            on_click: None,
            class_name: None,
            attributes: Vec::new(),
        }
    }

    /// Enable the gradient background with the given style value.
    #[must_use]
    pub fn gradient(mut self, style: impl Into<String>) -> Self {
        self.gradient_enabled = true;
        self.gradient_color_style = style.into();
        self
    }

    /// Append an action affordance.
    #[must_use]
    pub fn action_icon(mut self, icon: ActionIcon<C>) -> Self {
        self.action_icons.push(icon);
        self
    }

    /// Set where actions are placed while collapsed.
    #[must_use]
    pub fn actions_placement(mut self, placement: ActionsPlacement) -> Self {
        self.actions_placement = Some(placement);
        self
    }

    /// Configure the primary button.
    #[must_use]
    pub fn primary_button(mut self, text: impl Into<String>, kind: PrimaryButtonKind) -> Self {
        self.primary_button_text = text.into();
        self.primary_button_kind = Some(kind);
        self
    }

    /// Set the primary button handler.
    #[must_use]
    pub fn on_primary_button_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_primary_button_click = Some(Rc::new(f));
        self
    }

    /// Configure the secondary button.
    #[must_use]
    pub fn secondary_button(mut self, text: impl Into<String>, kind: SecondaryButtonKind) -> Self {
        self.secondary_button_text = text.into();
        self.secondary_button_kind = Some(kind);
        self
    }

    /// Set the secondary button handler.
    #[must_use]
    pub fn on_secondary_button_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_secondary_button_click = Some(Rc::new(f));
        self
    }

    /// Set the card title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the label shown above the title.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the header description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Make the whole card clickable.
    #[must_use]
    pub fn on_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(f));
        self
    }

    /// Set the media block.
    #[must_use]
    pub fn media(mut self, media: C, position: MediaPosition) -> Self {
        self.media = Some(media);
        self.media_position = Some(position);
        self
    }

    /// Append a class to the root element.
    #[must_use]
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    /// Forward an attribute to the root element.
    ///
    /// Names listed in [`STRIPPED_PROPS`] are dropped.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_attribute(name.into(), value.into());
        self
    }

    /// Apply one option given in string form.
    ///
    /// Recognized option names are parsed into their typed field. Stripped options
    /// are ignored and anything else is forwarded to the root element. On error the
    /// props are left unchanged.
    pub fn apply(&mut self, name: &str, value: &str) -> Result<(), ParsePropError> {
        match name {
            ActionsPlacement::PROP => self.actions_placement = Some(value.parse()?),
            PrimaryButtonKind::PROP => self.primary_button_kind = Some(value.parse()?),
            SecondaryButtonKind::PROP => self.secondary_button_kind = Some(value.parse()?),
            MediaPosition::PROP => self.media_position = Some(value.parse()?),
            "gradientEnabled" => {
                self.gradient_enabled = match value {
                    "true" | "" => true,
                    "false" => false,
                    _ => return Err(ParsePropError::new("gradientEnabled", value)),
                };
            }
            "gradientColorStyle" => self.gradient_color_style = value.to_owned(),
            "primaryButtonText" => self.primary_button_text = value.to_owned(),
            "primaryButtonHref" => self.primary_button_href = Some(value.to_owned()),
            "secondaryButtonText" => self.secondary_button_text = value.to_owned(),
            "secondaryButtonHref" => self.secondary_button_href = Some(value.to_owned()),
            "label" => self.label = Some(value.to_owned()),
            "title" => self.title = Some(value.to_owned()),
            "description" => self.description = Some(value.to_owned()),
            "className" => self.class_name = Some(value.to_owned()),
            _ => self.push_attribute(name.to_owned(), value.to_owned()),
        }
        Ok(())
    }

    fn push_attribute(&mut self, name: String, value: String) {
        if STRIPPED_PROPS.contains(&name.as_str()) {
            #[cfg(feature = "tracing")]
            tracing::trace!(name = name.as_str(), "dropping option not supported by popout card");
            return;
        }
        self.attributes.push((name, value));
    }
}

impl<C: fmt::Debug> fmt::Debug for PopoutCardProps<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopoutCardProps")
            .field("children", &self.children)
            .field("popout_content", &self.popout_content)
            .field("gradient_enabled", &self.gradient_enabled)
            .field("gradient_color_style", &self.gradient_color_style)
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
            .field("class_name", &self.class_name)
            .field("attributes", &self.attributes)
            .finish()
    }
}
