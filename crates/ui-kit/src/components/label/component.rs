use dioxus::prelude::*;

use crate::variant::Size;

/// Caption for a form control, tied to it through `html_for`.
#[component]
pub fn Label(
    html_for: Option<String>,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] size: Size,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "ui-label", None, false),
        Attribute::new("data-size", size.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label {
            r#for: html_for,
            "data-disabled": if disabled { "true" },
            ..merged,
            {children}
            if required {
                span { class: "ui-label-required", "aria-hidden": "true", "*" }
            }
        }
    }
}
