use dioxus::prelude::*;

use crate::variant::Size;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Outline,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub const ALL: &'static [ButtonVariant] = &[
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Danger,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Link,
    ];

    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Danger => "danger",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Link => "link",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: Size,
    #[props(default = false)]
    pub disabled: bool,
    /// Shows a spinner and blocks clicks without changing the label.
    #[props(default = false)]
    pub loading: bool,
    #[props(default = false)]
    pub full_width: bool,
    #[props(default = "button".to_string())]
    pub button_type: String,
    pub leading_icon: Option<Element>,
    pub trailing_icon: Option<Element>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let inert = props.disabled || props.loading;
    let base = vec![
        Attribute::new("class", "ui-button", None, false),
        Attribute::new("data-variant", props.variant.class(), None, false),
        Attribute::new("data-size", props.size.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "{props.button_type}",
            disabled: inert,
            "aria-busy": if props.loading { "true" },
            "data-full-width": if props.full_width { "true" },
            onclick: move |evt| {
                if inert {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            if props.loading {
                span { class: "ui-button-spinner", "aria-hidden": "true" }
            }
            if let Some(icon) = props.leading_icon {
                span { class: "ui-button-icon", "aria-hidden": "true", {icon} }
            }
            span { class: "ui-button-label", {props.children} }
            if let Some(icon) = props.trailing_icon {
                span { class: "ui-button-icon", "aria-hidden": "true", {icon} }
            }
        }
    }
}
