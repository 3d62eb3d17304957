use dioxus::prelude::*;

use crate::variant::{Size, Tone};

/// Sized, toned frame around any caller-supplied glyph.
///
/// With a `label` the icon is announced as an image; without one it is
/// decorative and hidden from assistive technology.
#[component]
pub fn Icon(
    #[props(default)] size: Size,
    #[props(default)] tone: Tone,
    label: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "ui-icon", None, false),
        Attribute::new("data-size", size.class(), None, false),
        Attribute::new("data-tone", tone.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let decorative = label.is_none();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            role: if !decorative { "img" },
            "aria-label": label,
            "aria-hidden": if decorative { "true" },
            ..merged,
            {children}
        }
    }
}
