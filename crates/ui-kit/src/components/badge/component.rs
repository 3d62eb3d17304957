use dioxus::prelude::*;

use crate::variant::{Size, Tone};

/// Fill style for badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Solid,
    Soft,
    Outline,
}

impl BadgeVariant {
    pub const ALL: &'static [BadgeVariant] =
        &[BadgeVariant::Solid, BadgeVariant::Soft, BadgeVariant::Outline];

    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Solid => "solid",
            BadgeVariant::Soft => "soft",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Inline label for counts and statuses.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default)] tone: Tone,
    #[props(default = Size::Sm)] size: Size,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "ui-badge", None, false),
        Attribute::new("data-variant", variant.class(), None, false),
        Attribute::new("data-tone", tone.class(), None, false),
        Attribute::new("data-size", size.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}
